//! Collision-aware note placement.
//!
//! Placement state is scoped to a single render: every diagram gets a
//! fresh [`RenderState`], so concurrent renders never share a placed-note
//! list and need no locking.

use crate::geometry::{Bounds, Point, Side, Size};
use log::trace;

/// Distance between a class box edge and an adjacent note.
pub const NOTE_OFFSET: f32 = 20.0;

/// Vertical nudges tried when every side collides at its base position.
const JITTER_OFFSETS: [f32; 5] = [0.0, 20.0, -20.0, 40.0, -40.0];

/// Default side preference order.
const SIDE_ORDER: [Side; 4] = [Side::Right, Side::Left, Side::Bottom, Side::Top];

/// Per-render placement state.
///
/// Holds the rectangles of all notes placed so far in the current diagram.
/// Create one per render; never reuse across diagrams.
#[derive(Debug, Default)]
pub struct RenderState {
    placed_notes: Vec<Bounds>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles of the notes placed so far, in placement order.
    pub fn placed_notes(&self) -> &[Bounds] {
        &self.placed_notes
    }

    fn collides(&self, candidate: &Bounds) -> bool {
        self.placed_notes.iter().any(|b| b.intersects(candidate))
    }
}

/// Finds a position for a note next to `class_bounds`.
///
/// Sides are tried in preference order (the preferred side first, then the
/// rest of right/left/bottom/top), first at their base position, then with
/// small vertical jitters. A candidate is accepted when it lies fully
/// inside the canvas and does not overlap any previously placed note. When
/// everything collides the right-side base position is used regardless, so
/// dense diagrams may show overlapping notes rather than losing them.
///
/// The accepted rectangle is recorded in `state` and returned together
/// with the side it sits on.
pub fn place_note(
    note_size: Size,
    class_bounds: Bounds,
    canvas: Size,
    preferred_side: Option<Side>,
    state: &mut RenderState,
) -> (Bounds, Side) {
    let canvas_bounds = Bounds::from_top_left(Point::default(), canvas);

    let mut side_order: Vec<Side> = Vec::with_capacity(4);
    if let Some(side) = preferred_side {
        side_order.push(side);
    }
    for side in SIDE_ORDER {
        if !side_order.contains(&side) {
            side_order.push(side);
        }
    }

    for jitters in [&[0.0][..], &JITTER_OFFSETS[..]] {
        for &side in &side_order {
            for &jitter in jitters {
                let candidate = candidate_bounds(side, class_bounds, note_size, jitter);
                if candidate.is_within(&canvas_bounds) && !state.collides(&candidate) {
                    trace!(side:? = side, jitter = jitter; "Placed note");
                    state.placed_notes.push(candidate);
                    return (candidate, side);
                }
            }
        }
    }

    // Nothing fit; overlap on the right rather than dropping the note.
    let fallback = candidate_bounds(Side::Right, class_bounds, note_size, 0.0);
    trace!("No free position found for note, overlapping on the right");
    state.placed_notes.push(fallback);
    (fallback, Side::Right)
}

/// Computes the candidate rectangle for a note on the given side of a
/// class box, shifted vertically by `jitter`.
fn candidate_bounds(side: Side, class_bounds: Bounds, note_size: Size, jitter: f32) -> Bounds {
    let center = class_bounds.center();

    let top_left = match side {
        Side::Right => Point::new(
            class_bounds.max_x() + NOTE_OFFSET,
            center.y() - note_size.height() / 2.0 + jitter,
        ),
        Side::Left => Point::new(
            class_bounds.min_x() - NOTE_OFFSET - note_size.width(),
            center.y() - note_size.height() / 2.0 + jitter,
        ),
        Side::Bottom => Point::new(
            center.x() - note_size.width() / 2.0,
            class_bounds.max_y() + NOTE_OFFSET + jitter,
        ),
        Side::Top => Point::new(
            center.x() - note_size.width() / 2.0,
            class_bounds.min_y() - NOTE_OFFSET - note_size.height() + jitter,
        ),
    };

    Bounds::from_top_left(top_left, note_size)
}

/// Returns the dashed anchor segment connecting a class box to its note:
/// from the midpoint of the class edge facing the note to the midpoint of
/// the note edge facing the class.
pub fn anchor_segment(class_bounds: Bounds, note_bounds: Bounds, side: Side) -> (Point, Point) {
    let class_center = class_bounds.center();
    let note_center = note_bounds.center();

    match side {
        Side::Right => (
            Point::new(class_bounds.max_x(), class_center.y()),
            Point::new(note_bounds.min_x(), note_center.y()),
        ),
        Side::Left => (
            Point::new(class_bounds.min_x(), class_center.y()),
            Point::new(note_bounds.max_x(), note_center.y()),
        ),
        Side::Bottom => (
            Point::new(class_center.x(), class_bounds.max_y()),
            Point::new(note_center.x(), note_bounds.min_y()),
        ),
        Side::Top => (
            Point::new(class_center.x(), class_bounds.min_y()),
            Point::new(note_center.x(), note_bounds.max_y()),
        ),
    }
}
