use image::RgbaImage;
use log::debug;

use crate::canvas::geometry::{Bounds, Position};
use crate::canvas::item::{CanvasItem, Group, ItemId, ItemKind, PlacedImage, Visual};
use crate::canvas::placement::{Placement, RandomPlacement};

/// Ordered collection of everything placed on the canvas. Collection order is
/// painter order.
pub struct Canvas {
    items: Vec<CanvasItem>,
    next_id: u64,
    placement: Box<dyn Placement>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Box::new(RandomPlacement::default()))
    }
}

impl Canvas {
    pub fn new(placement: Box<dyn Placement>) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            placement,
        }
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn image(&self, id: ItemId) -> Option<&PlacedImage> {
        self.get(id).and_then(CanvasItem::as_image)
    }

    pub fn bounds_of(&self, id: ItemId) -> Option<Bounds> {
        self.get(id).and_then(|item| item.kind.bounding_box(self))
    }

    /// Places `bitmap` at the next position chosen by the placement strategy.
    pub fn add(&mut self, bitmap: RgbaImage) -> ItemId {
        let position = self.placement.next_position();
        let id = self.push(ItemKind::SingleImage(PlacedImage::new(bitmap, position)));
        debug!("placed item {} at ({}, {})", id.get(), position.x, position.y);
        id
    }

    /// Top-level items currently marked selected, in collection order.
    pub fn selected(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.is_top_level() && item.selected)
            .map(|item| item.id)
            .collect()
    }

    /// Records a group over `members`. Members that are unknown or already
    /// owned by another group are skipped.
    pub fn add_group(&mut self, members: &[ItemId]) -> ItemId {
        let group_id = ItemId::new(self.next_id);
        let mut owned = Vec::with_capacity(members.len());
        for item in &mut self.items {
            if item.is_top_level() && members.contains(&item.id) {
                item.parent = Some(group_id);
                item.selected = false;
                owned.push(item.id);
            }
        }

        let id = self.push(ItemKind::Group(Group { members: owned }));
        debug_assert_eq!(id, group_id);
        id
    }

    pub fn select_only(&mut self, id: ItemId) {
        for item in &mut self.items {
            item.selected = item.id == id && item.is_top_level();
        }
    }

    pub fn toggle_selected(&mut self, id: ItemId) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.id == id && item.is_top_level())
        {
            item.selected = !item.selected;
        }
    }

    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Outermost item under `point`: the top-most single image hit, resolved
    /// through its owning groups.
    pub fn hit_test(&self, point: Position) -> Option<ItemId> {
        let hit = self.items.iter().rev().find(|item| {
            item.as_image()
                .is_some_and(|image| image.bounds().contains(point))
        })?;
        Some(self.outermost(hit.id))
    }

    pub fn move_selected(&mut self, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        for id in self.selected() {
            self.move_item(id, dx, dy);
        }
    }

    fn move_item(&mut self, id: ItemId, dx: i32, dy: i32) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(item) = self.items.iter_mut().find(|item| item.id == current) else {
                continue;
            };
            match &mut item.kind {
                ItemKind::SingleImage(image) => image.position = image.position.offset(dx, dy),
                ItemKind::Group(group) => pending.extend(group.members.iter().copied()),
            }
        }
    }

    fn outermost(&self, mut id: ItemId) -> ItemId {
        while let Some(parent) = self.get(id).and_then(|item| item.parent) {
            id = parent;
        }
        id
    }

    fn push(&mut self, kind: ItemKind) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        self.items.push(CanvasItem {
            id,
            kind,
            selected: false,
            parent: None,
        });
        id
    }
}
