//! Diagram layout: box placement, connection routing, inheritance
//! grouping, and note placement.

mod engines;
mod grouper;
mod notes;
mod router;

pub use engines::{CANVAS_MARGIN, LayoutEngine, VERTICAL_GAP, place};
pub use grouper::{InheritanceGroup, ResolvedConnection, group};
pub use notes::{NOTE_OFFSET, RenderState, anchor_segment, place_note};
pub use router::{ARROW_CLEARANCE, ConnectionPoint, best_point, route};
