//! Connection-point selection for connectors.
//!
//! Each end of a connector is routed independently: a box picks its
//! attachment side by looking toward the *center* of the box at the other
//! end, not by sharing a single line equation with it.

use crate::geometry::{Bounds, Point, Side};

/// Outward offset applied to every connection point so that arrowheads,
/// diamonds and triangles (which extend back from the tip) never intrude
/// into the box they attach to.
pub const ARROW_CLEARANCE: f32 = 15.0;

/// A computed attachment point on a box border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPoint {
    point: Point,
    side: Side,
}

impl ConnectionPoint {
    /// Returns the attachment coordinates (already offset outward).
    pub fn point(self) -> Point {
        self.point
    }

    /// Returns which side of the box the point sits on.
    pub fn side(self) -> Side {
        self.side
    }
}

/// Picks the best attachment point on `bounds` for a connector heading
/// toward `target`.
///
/// With `dx`/`dy` the vector from the box center to the target: a strictly
/// horizontal-dominant direction (`|dx| > |dy|`) attaches to the right or
/// left edge at vertical center; anything else, including exact diagonal
/// ties, attaches to the bottom or top edge at horizontal center. The tie
/// going to top/bottom is an arbitrary but fixed convention.
pub fn best_point(bounds: Bounds, target: Point) -> ConnectionPoint {
    let center = bounds.center();
    let dx = target.x() - center.x();
    let dy = target.y() - center.y();

    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            ConnectionPoint {
                point: Point::new(bounds.max_x() + ARROW_CLEARANCE, center.y()),
                side: Side::Right,
            }
        } else {
            ConnectionPoint {
                point: Point::new(bounds.min_x() - ARROW_CLEARANCE, center.y()),
                side: Side::Left,
            }
        }
    } else if dy > 0.0 {
        ConnectionPoint {
            point: Point::new(center.x(), bounds.max_y() + ARROW_CLEARANCE),
            side: Side::Bottom,
        }
    } else {
        ConnectionPoint {
            point: Point::new(center.x(), bounds.min_y() - ARROW_CLEARANCE),
            side: Side::Top,
        }
    }
}

/// Routes a connector between two boxes.
///
/// Returns the start point (on `source`) and end point (on `target`),
/// each chosen by [`best_point`] aiming at the other box's center.
pub fn route(source: Bounds, target: Bounds) -> (ConnectionPoint, ConnectionPoint) {
    (
        best_point(source, target.center()),
        best_point(target, source.center()),
    )
}
