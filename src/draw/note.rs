//! Annotation notes with a dog-eared corner.
//!
//! A note renders as a rectangle whose top-right corner is cut at 45° and
//! folded over, the conventional UML note shape. Background color comes
//! from the note's kind.

use crate::{
    color::Color,
    draw::Drawable,
    geometry::{Insets, Point, Size},
    model::NoteKind,
    text::{DEFAULT_FONT_FAMILY, TEXT_MEASURER},
};
use std::rc::Rc;
use svg::{self, node::element as svg_element};

/// Size of the folded corner in pixels.
const CORNER_FOLD_SIZE: f32 = 12.0;

/// Padding between the note border and its text.
const NOTE_PADDING: f32 = 10.0;

/// Styling for notes.
#[derive(Debug, Clone)]
pub struct NoteDefinition {
    background_color: Color,
    border_color: Color,
    border_width: u32,
    font_size: u16,
}

impl NoteDefinition {
    /// Creates a new definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a definition whose background matches the note kind.
    pub fn for_kind(kind: NoteKind) -> Self {
        Self {
            background_color: Color::new(kind.background_color()).expect("valid color"),
            ..Self::default()
        }
    }

    /// Gets the background color
    pub fn background_color(&self) -> &Color {
        &self.background_color
    }

    /// Sets the background color
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Gets the border color
    pub fn border_color(&self) -> &Color {
        &self.border_color
    }

    /// Gets the font size in points
    pub fn font_size(&self) -> u16 {
        self.font_size
    }
}

impl Default for NoteDefinition {
    fn default() -> Self {
        Self {
            background_color: Color::new(NoteKind::Standard.background_color())
                .expect("valid color"),
            border_color: Color::default(),
            border_width: 1,
            font_size: 12,
        }
    }
}

/// A renderable note.
#[derive(Debug, Clone)]
pub struct Note {
    definition: Rc<NoteDefinition>,
    content: String,
}

impl Note {
    pub fn new(definition: Rc<NoteDefinition>, content: String) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn text_size(&self) -> Size {
        TEXT_MEASURER.measure_block(&self.content, self.definition.font_size())
    }

    fn calculate_size(&self) -> Size {
        // Extra room on the right so text never runs under the fold.
        self.text_size().add_padding(Insets::new(
            NOTE_PADDING,
            NOTE_PADDING + CORNER_FOLD_SIZE,
            NOTE_PADDING,
            NOTE_PADDING,
        ))
    }

    /// The note body: a rectangle with the top-right corner cut off.
    fn body_path(&self, size: Size, position: Point) -> svg_element::Path {
        let bounds = position.to_bounds(size);
        let fold_x = bounds.max_x() - CORNER_FOLD_SIZE;
        let fold_y = bounds.min_y() + CORNER_FOLD_SIZE;

        let path_data = format!(
            "M {} {} L {} {} L {} {} L {} {} L {} {} Z",
            bounds.min_x(),
            bounds.min_y(),
            fold_x,
            bounds.min_y(),
            bounds.max_x(),
            fold_y,
            bounds.max_x(),
            bounds.max_y(),
            bounds.min_x(),
            bounds.max_y(),
        );

        svg_element::Path::new()
            .set("d", path_data)
            .set("fill", self.definition.background_color().to_string())
            .set("stroke", self.definition.border_color().to_string())
            .set("stroke-width", self.definition.border_width)
    }

    /// The small folded-over triangle at the cut corner.
    fn fold_path(&self, size: Size, position: Point) -> svg_element::Path {
        let bounds = position.to_bounds(size);
        let fold_x = bounds.max_x() - CORNER_FOLD_SIZE;
        let fold_y = bounds.min_y() + CORNER_FOLD_SIZE;

        let path_data = format!(
            "M {} {} L {} {} L {} {} Z",
            fold_x,
            bounds.min_y(),
            bounds.max_x(),
            fold_y,
            fold_x,
            fold_y,
        );

        svg_element::Path::new()
            .set("d", path_data)
            .set("fill", "#e0e0e0")
            .set("stroke", self.definition.border_color().to_string())
            .set("stroke-width", self.definition.border_width)
    }
}

impl Drawable for Note {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node> {
        let size = self.size();
        let mut group = svg_element::Group::new();

        group = group.add(self.body_path(size, position));
        group = group.add(self.fold_path(size, position));

        if !self.content.is_empty() {
            let font_size = self.definition.font_size();
            let line_height = TEXT_MEASURER.line_height(font_size);
            let lines: Vec<&str> = self.content.lines().collect();
            let text_top = position.y() - (lines.len() as f32 * line_height) / 2.0;

            for (i, line) in lines.iter().enumerate() {
                let text = svg_element::Text::new((*line).to_string())
                    .set("x", position.x())
                    .set("y", text_top + (i as f32 + 0.5) * line_height)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", DEFAULT_FONT_FAMILY)
                    .set("font-size", font_size);
                group = group.add(text);
            }
        }

        group.into()
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}
