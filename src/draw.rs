//! Drawable components for diagram rendering.
//!
//! Every element that ends up on the canvas implements [`Drawable`]:
//! it can report its own size and render itself to SVG at a given center
//! position. Connectors and generalization trees carry absolute
//! coordinates instead and expose their own `render` methods.

mod class_box;
mod connector;
mod generalization;
mod note;

pub use class_box::{ClassBox, ClassBoxDefinition, MIN_SECTION_HEIGHT};
pub use connector::{Connector, ConnectorDefinition, Terminal};
pub use generalization::GeneralizationTree;
pub use note::{Note, NoteDefinition};

use crate::geometry::{Point, Size};

pub trait Drawable: std::fmt::Debug {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node>;
    fn size(&self) -> Size;
}
