use image::{imageops, RgbaImage};

use crate::canvas::geometry::{Bounds, Position};
use crate::canvas::scene::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Shared capability of everything that can sit on the canvas.
pub trait Visual {
    /// Canvas-space rectangle covered by the item, `None` when it covers nothing.
    fn bounding_box(&self, canvas: &Canvas) -> Option<Bounds>;

    /// Paints the item into `surface`, where `origin` is the canvas position of
    /// the surface's top-left pixel.
    fn render(&self, canvas: &Canvas, surface: &mut RgbaImage, origin: Position);
}

#[derive(Debug, Clone)]
pub struct PlacedImage {
    pub bitmap: RgbaImage,
    pub position: Position,
}

impl PlacedImage {
    pub fn new(bitmap: RgbaImage, position: Position) -> Self {
        Self { bitmap, position }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.position.x,
            self.position.y,
            self.width(),
            self.height(),
        )
    }
}

impl Visual for PlacedImage {
    fn bounding_box(&self, _canvas: &Canvas) -> Option<Bounds> {
        Some(self.bounds())
    }

    fn render(&self, _canvas: &Canvas, surface: &mut RgbaImage, origin: Position) {
        let dx = i64::from(self.position.x) - i64::from(origin.x);
        let dy = i64::from(self.position.y) - i64::from(origin.y);
        imageops::overlay(surface, &self.bitmap, dx, dy);
    }
}

/// Items merged into one movable unit, in painter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub members: Vec<ItemId>,
}

impl Visual for Group {
    fn bounding_box(&self, canvas: &Canvas) -> Option<Bounds> {
        Bounds::enclosing(
            self.members
                .iter()
                .filter_map(|id| canvas.get(*id))
                .filter_map(|member| member.kind.bounding_box(canvas)),
        )
    }

    fn render(&self, canvas: &Canvas, surface: &mut RgbaImage, origin: Position) {
        for member in self.members.iter().filter_map(|id| canvas.get(*id)) {
            member.kind.render(canvas, surface, origin);
        }
    }
}

#[derive(Debug, Clone)]
pub enum ItemKind {
    SingleImage(PlacedImage),
    Group(Group),
}

impl Visual for ItemKind {
    fn bounding_box(&self, canvas: &Canvas) -> Option<Bounds> {
        match self {
            Self::SingleImage(image) => image.bounding_box(canvas),
            Self::Group(group) => group.bounding_box(canvas),
        }
    }

    fn render(&self, canvas: &Canvas, surface: &mut RgbaImage, origin: Position) {
        match self {
            Self::SingleImage(image) => image.render(canvas, surface, origin),
            Self::Group(group) => group.render(canvas, surface, origin),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CanvasItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub selected: bool,
    /// Group that currently owns this item. Owned items are drawn but are
    /// selected and moved through their group.
    pub parent: Option<ItemId>,
}

impl CanvasItem {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    pub fn as_image(&self) -> Option<&PlacedImage> {
        match &self.kind {
            ItemKind::SingleImage(image) => Some(image),
            ItemKind::Group(_) => None,
        }
    }
}
