use image::RgbaImage;
use log::debug;

use crate::canvas::{Bounds, Canvas, ItemId, Visual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOutcome {
    pub group: ItemId,
    pub flattened: ItemId,
    pub bounds: Bounds,
}

/// Renders `ids` into one transparent bitmap sized to their union bounds.
/// Items paint in the given order, later ones on top.
pub fn flatten(canvas: &Canvas, ids: &[ItemId]) -> Option<(RgbaImage, Bounds)> {
    let items: Vec<_> = ids.iter().filter_map(|id| canvas.get(*id)).collect();
    let bounds = Bounds::enclosing(
        items
            .iter()
            .filter_map(|item| item.kind.bounding_box(canvas)),
    )?;

    let mut surface = RgbaImage::new(bounds.width, bounds.height);
    for item in items {
        item.kind.render(canvas, &mut surface, bounds.origin());
    }
    Some((surface, bounds))
}

/// Groups the current selection and adds a flattened snapshot of it to the
/// canvas. Fewer than two selected items is a no-op.
pub fn group_selection(canvas: &mut Canvas) -> Option<GroupOutcome> {
    let selection = canvas.selected();
    if selection.len() < 2 {
        debug!("grouping skipped: {} item(s) selected", selection.len());
        return None;
    }

    let (bitmap, bounds) = flatten(canvas, &selection)?;
    let group = canvas.add_group(&selection);
    let flattened = canvas.add(bitmap);
    debug!(
        "grouped {} items into {} ({}x{}), snapshot {}",
        selection.len(),
        group.get(),
        bounds.width,
        bounds.height,
        flattened.get()
    );

    Some(GroupOutcome {
        group,
        flattened,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::placement::scripted::ScriptedPlacement;
    use crate::canvas::Position;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn scripted(positions: &[(i32, i32)]) -> Canvas {
        Canvas::new(Box::new(ScriptedPlacement::new(
            positions.iter().map(|(x, y)| Position::new(*x, *y)),
        )))
    }

    #[test]
    fn fewer_than_two_selected_is_a_no_op() {
        let mut canvas = scripted(&[(0, 0), (30, 30)]);
        assert_eq!(group_selection(&mut canvas), None);

        let a = canvas.add(RgbaImage::from_pixel(4, 4, RED));
        canvas.add(RgbaImage::from_pixel(4, 4, BLUE));
        assert_eq!(group_selection(&mut canvas), None);
        assert_eq!(canvas.len(), 2);

        canvas.select_only(a);
        assert_eq!(group_selection(&mut canvas), None);
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.selected(), vec![a]);
    }

    #[test]
    fn two_side_by_side_images_flatten_into_their_union() {
        let mut canvas = scripted(&[(100, 40), (110, 40), (0, 0)]);
        let a = canvas.add(RgbaImage::from_pixel(10, 10, RED));
        let b = canvas.add(RgbaImage::from_pixel(10, 10, BLUE));
        canvas.toggle_selected(a);
        canvas.toggle_selected(b);

        let outcome = group_selection(&mut canvas).expect("grouping should happen");
        assert_eq!(outcome.bounds, Bounds::new(100, 40, 20, 10));

        let snapshot = canvas.image(outcome.flattened).expect("snapshot image");
        assert_eq!(snapshot.bitmap.dimensions(), (20, 10));
        for (x, y, pixel) in snapshot.bitmap.enumerate_pixels() {
            let expected = if x < 10 { RED } else { BLUE };
            assert_eq!(*pixel, expected, "pixel ({x}, {y})");
        }
        assert_eq!(snapshot.position, Position::new(0, 0));
    }

    #[test]
    fn gaps_between_items_stay_transparent() {
        let mut canvas = scripted(&[(0, 0), (6, 8)]);
        let a = canvas.add(RgbaImage::from_pixel(2, 2, RED));
        let b = canvas.add(RgbaImage::from_pixel(2, 2, BLUE));

        let (bitmap, bounds) = flatten(&canvas, &[a, b]).expect("flattened");
        assert_eq!(bounds, Bounds::new(0, 0, 8, 10));
        assert_eq!(bitmap.get_pixel(1, 1), &RED);
        assert_eq!(bitmap.get_pixel(7, 9), &BLUE);
        assert_eq!(bitmap.get_pixel(4, 4), &CLEAR);
    }

    #[test]
    fn later_items_paint_over_earlier_ones() {
        let mut canvas = scripted(&[(0, 0), (2, 0)]);
        let a = canvas.add(RgbaImage::from_pixel(4, 1, RED));
        let b = canvas.add(RgbaImage::from_pixel(4, 1, BLUE));

        let (bitmap, _) = flatten(&canvas, &[a, b]).expect("flattened");
        assert_eq!(bitmap.get_pixel(1, 0), &RED);
        assert_eq!(bitmap.get_pixel(2, 0), &BLUE);

        let (bitmap, _) = flatten(&canvas, &[b, a]).expect("flattened");
        assert_eq!(bitmap.get_pixel(2, 0), &RED);
        assert_eq!(bitmap.get_pixel(5, 0), &BLUE);
    }

    #[test]
    fn grouping_keeps_originals_and_adds_group_and_snapshot() {
        let mut canvas = scripted(&[(0, 0), (10, 0), (300, 300)]);
        let a = canvas.add(RgbaImage::from_pixel(10, 10, RED));
        let b = canvas.add(RgbaImage::from_pixel(10, 10, RED));
        canvas.toggle_selected(a);
        canvas.toggle_selected(b);

        let outcome = group_selection(&mut canvas).expect("grouped");

        assert_eq!(canvas.len(), 4);
        assert!(canvas.get(a).is_some());
        assert!(canvas.get(b).is_some());
        assert_eq!(canvas.bounds_of(outcome.group), Some(outcome.bounds));
        assert_eq!(
            canvas.bounds_of(outcome.flattened),
            Some(Bounds::new(300, 300, 20, 10))
        );
        assert!(canvas.selected().is_empty());
    }

    #[test]
    fn groups_can_be_grouped_again() {
        let mut canvas = scripted(&[(0, 0), (10, 0), (500, 500), (0, 20), (0, 0)]);
        let a = canvas.add(RgbaImage::from_pixel(10, 10, RED));
        let b = canvas.add(RgbaImage::from_pixel(10, 10, BLUE));
        canvas.toggle_selected(a);
        canvas.toggle_selected(b);
        let first = group_selection(&mut canvas).expect("first group");

        let c = canvas.add(RgbaImage::from_pixel(20, 5, BLUE));
        canvas.toggle_selected(first.group);
        canvas.toggle_selected(c);
        let second = group_selection(&mut canvas).expect("second group");

        assert_eq!(second.bounds, Bounds::new(0, 0, 20, 25));
        let snapshot = canvas.image(second.flattened).expect("snapshot");
        assert_eq!(snapshot.bitmap.get_pixel(0, 0), &RED);
        assert_eq!(snapshot.bitmap.get_pixel(15, 5), &BLUE);
        assert_eq!(snapshot.bitmap.get_pixel(5, 15), &CLEAR);
        assert_eq!(snapshot.bitmap.get_pixel(5, 22), &BLUE);
    }
}
