//! Box placement engines.
//!
//! Placement is deliberately simple and deterministic: a single centered
//! column (default) or a square-ish grid. Both clamp every box into the
//! canvas; on a canvas smaller than the content the margin collapses to
//! zero and overlap is accepted rather than reported as an error.

use crate::geometry::{Bounds, Point, Size};
use serde::Deserialize;

/// Vertical gap between stacked boxes in the column layout.
pub const VERTICAL_GAP: f32 = 60.0;

/// Minimum distance kept between a box and the canvas edge.
pub const CANVAS_MARGIN: f32 = 20.0;

/// Selects the placement policy for class boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Single vertical column, each box horizontally centered
    #[default]
    Column,
    /// `ceil(sqrt(n))` columns, each box centered within its grid cell
    Grid,
}

/// Places one box per input size, in input order.
///
/// The returned vector is parallel to `sizes`. Placement depends only on
/// the inputs; rendering the same sizes twice yields identical bounds.
pub fn place(engine: LayoutEngine, sizes: &[Size], canvas: Size) -> Vec<Bounds> {
    match engine {
        LayoutEngine::Column => place_column(sizes, canvas),
        LayoutEngine::Grid => place_grid(sizes, canvas),
    }
}

fn place_column(sizes: &[Size], canvas: Size) -> Vec<Bounds> {
    let total_box_height: f32 = sizes.iter().map(|s| s.height()).sum();
    let total_height = total_box_height + VERTICAL_GAP * (sizes.len().saturating_sub(1)) as f32;

    // Center the whole stack vertically when it fits.
    let start_y = ((canvas.height() - total_height) / 2.0).max(CANVAS_MARGIN);

    let mut placements = Vec::with_capacity(sizes.len());
    let mut current_y = start_y;

    for size in sizes {
        let x = (canvas.width() - size.width()) / 2.0;
        let position = Point::new(
            clamp_axis(x, size.width(), canvas.width()),
            clamp_axis(current_y, size.height(), canvas.height()),
        );
        placements.push(Bounds::from_top_left(position, *size));

        // The cursor advances from the unclamped position so a clamped box
        // does not compress the rest of the stack.
        current_y += size.height() + VERTICAL_GAP;
    }

    placements
}

fn place_grid(sizes: &[Size], canvas: Size) -> Vec<Bounds> {
    let count = sizes.len();
    let columns = (count as f32).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);

    let cell_width = canvas.width() / columns as f32;
    let cell_height = canvas.height() / rows as f32;

    sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let row = i / columns;
            let column = i % columns;

            let cell_center_x = (column as f32 + 0.5) * cell_width;
            let cell_center_y = (row as f32 + 0.5) * cell_height;

            let position = Point::new(
                clamp_axis(
                    cell_center_x - size.width() / 2.0,
                    size.width(),
                    canvas.width(),
                ),
                clamp_axis(
                    cell_center_y - size.height() / 2.0,
                    size.height(),
                    canvas.height(),
                ),
            );
            Bounds::from_top_left(position, *size)
        })
        .collect()
}

/// Clamps a coordinate so `[pos, pos + extent]` stays inside `[0, span]`,
/// keeping [`CANVAS_MARGIN`] from the edges when there is room for it.
fn clamp_axis(pos: f32, extent: f32, span: f32) -> f32 {
    let hi = span - extent - CANVAS_MARGIN;
    if hi >= CANVAS_MARGIN {
        return pos.clamp(CANVAS_MARGIN, hi);
    }

    // Not enough room for margins; fall back to the raw canvas, then to
    // pinning at the origin for content larger than the canvas.
    let hi = span - extent;
    if hi >= 0.0 { pos.clamp(0.0, hi) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Size {
        Size::new(1200.0, 800.0)
    }

    fn sizes3() -> [Size; 3] {
        [
            Size::new(100.0, 60.0),
            Size::new(150.0, 90.0),
            Size::new(120.0, 70.0),
        ]
    }

    #[test]
    fn test_column_boxes_are_horizontally_centered() {
        let placements = place(LayoutEngine::Column, &sizes3(), canvas());

        for bounds in &placements {
            let center_x = bounds.center().x();
            assert!((center_x - 600.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_column_boxes_are_stacked_with_gap() {
        let placements = place(LayoutEngine::Column, &sizes3(), canvas());

        assert!((placements[1].min_y() - placements[0].max_y() - VERTICAL_GAP).abs() < 0.001);
        assert!((placements[2].min_y() - placements[1].max_y() - VERTICAL_GAP).abs() < 0.001);
    }

    #[test]
    fn test_column_stack_is_vertically_centered() {
        let sizes = [Size::new(100.0, 100.0)];
        let placements = place(LayoutEngine::Column, &sizes, canvas());

        assert!((placements[0].min_y() - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_placed_boxes_never_leave_a_large_canvas() {
        let canvas_bounds = Bounds::from_top_left(Point::default(), canvas());

        for engine in [LayoutEngine::Column, LayoutEngine::Grid] {
            let placements = place(engine, &sizes3(), canvas());
            for bounds in &placements {
                assert!(bounds.is_within(&canvas_bounds), "{engine:?}: {bounds:?}");
            }
        }
    }

    #[test]
    fn test_no_overlap_between_assigned_slots() {
        for engine in [LayoutEngine::Column, LayoutEngine::Grid] {
            let placements = place(engine, &sizes3(), canvas());
            for i in 0..placements.len() {
                for j in (i + 1)..placements.len() {
                    assert!(
                        !placements[i].intersects(&placements[j]),
                        "{engine:?}: slots {i} and {j} overlap"
                    );
                }
            }
        }
    }

    #[test]
    fn test_grid_uses_square_ish_columns() {
        // Five boxes: ceil(sqrt(5)) = 3 columns, so rows 0..=1.
        let sizes = vec![Size::new(50.0, 40.0); 5];
        let placements = place(LayoutEngine::Grid, &sizes, canvas());

        // First three share a row, the remaining two sit below them.
        assert_eq!(placements[0].min_y(), placements[1].min_y());
        assert_eq!(placements[1].min_y(), placements[2].min_y());
        assert!(placements[3].min_y() > placements[0].min_y());
        assert_eq!(placements[3].min_y(), placements[4].min_y());
    }

    #[test]
    fn test_oversized_box_is_pinned_not_rejected() {
        let sizes = [Size::new(2000.0, 3000.0)];
        let placements = place(LayoutEngine::Column, &sizes, canvas());

        assert_eq!(placements[0].min_x(), 0.0);
        assert_eq!(placements[0].min_y(), 0.0);
        // Overflow past the canvas is accepted.
        assert!(placements[0].max_x() > canvas().width());
    }

    #[test]
    fn test_margin_falls_back_when_canvas_is_tight() {
        // Fits without margins but not with them.
        let sizes = [Size::new(90.0, 90.0)];
        let placements = place(LayoutEngine::Column, &sizes, Size::new(100.0, 100.0));

        assert!(placements[0].min_x() >= 0.0);
        assert!(placements[0].max_x() <= 100.0);
    }

    #[test]
    fn test_placement_is_deterministic() {
        let first = place(LayoutEngine::Column, &sizes3(), canvas());
        let second = place(LayoutEngine::Column, &sizes3(), canvas());
        assert_eq!(first, second);
    }
}
