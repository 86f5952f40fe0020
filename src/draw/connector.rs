//! Connector lines and their terminal glyphs.
//!
//! A connector is a straight segment between two routed points plus the
//! relationship-specific glyph at its end: an open arrowhead, an open or
//! filled diamond, or an open triangle. Glyphs are built from the line's
//! direction vector, so they stay correctly oriented at any angle.

use crate::{
    color::Color,
    geometry::Point,
    model::Relationship,
    text::DEFAULT_FONT_FAMILY,
};
use std::rc::Rc;
use svg::{self, node::element as svg_element};

/// Dash pattern for realization and dependency lines.
const DASH_PATTERN: &str = "5,3";

/// Length of the open arrowhead strokes.
const ARROW_LENGTH: f32 = 10.0;

/// Half-angle of the arrowhead, in degrees.
const ARROW_HALF_ANGLE_DEG: f32 = 30.0;

/// Tip-to-tail length of the diamond glyph.
const DIAMOND_LENGTH: f32 = 16.0;

/// Half of the diamond's width at its widest point.
const DIAMOND_HALF_WIDTH: f32 = 4.0;

/// Tip-to-base length of the triangle glyph.
pub(crate) const TRIANGLE_LENGTH: f32 = 12.0;

/// Half of the triangle's base width.
pub(crate) const TRIANGLE_HALF_WIDTH: f32 = 7.0;

/// Connectors shorter than this are treated as degenerate and not drawn.
const MIN_DRAWABLE_LENGTH: f32 = 0.001;

/// The glyph drawn at the end point of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Open (unfilled) arrowhead
    Arrow,
    /// White-filled diamond
    OpenDiamond,
    /// Solid diamond
    FilledDiamond,
    /// White-filled triangle
    OpenTriangle,
    /// Bare line with no glyph, used for branches whose tree already drew
    /// the shared triangle
    None,
}

impl Terminal {
    /// The glyph conventionally drawn for each relationship.
    pub fn for_relationship(relationship: Relationship) -> Self {
        match relationship {
            Relationship::Association | Relationship::Dependency => Terminal::Arrow,
            Relationship::Aggregation => Terminal::OpenDiamond,
            Relationship::Composition => Terminal::FilledDiamond,
            Relationship::Inheritance | Relationship::Realization => Terminal::OpenTriangle,
        }
    }

    /// How far the glyph extends back from the tip along the line.
    ///
    /// The line itself is shortened by this amount so its stroke does not
    /// show through open (white-filled) glyphs.
    fn back_length(self) -> f32 {
        match self {
            Terminal::Arrow | Terminal::None => 0.0,
            Terminal::OpenDiamond | Terminal::FilledDiamond => DIAMOND_LENGTH,
            Terminal::OpenTriangle => TRIANGLE_LENGTH,
        }
    }
}

/// Styling shared by connectors and generalization trees.
#[derive(Debug, Clone)]
pub struct ConnectorDefinition {
    color: Color,
    width: u32,
}

impl ConnectorDefinition {
    /// Creates a new definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the line color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Gets the line width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sets the line color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the line width in pixels
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }
}

impl Default for ConnectorDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 2,
        }
    }
}

/// A routed connector between two classes.
#[derive(Debug, Clone)]
pub struct Connector {
    definition: Rc<ConnectorDefinition>,
    start: Point,
    end: Point,
    relationship: Relationship,
    terminal: Terminal,
    label: Option<String>,
    source_multiplicity: Option<String>,
    target_multiplicity: Option<String>,
}

impl Connector {
    /// Creates a connector with the glyph conventional for its relationship.
    pub fn new(
        definition: Rc<ConnectorDefinition>,
        start: Point,
        end: Point,
        relationship: Relationship,
    ) -> Self {
        Self {
            definition,
            start,
            end,
            relationship,
            terminal: Terminal::for_relationship(relationship),
            label: None,
            source_multiplicity: None,
            target_multiplicity: None,
        }
    }

    /// Overrides the terminal glyph (builder style).
    pub fn with_terminal(mut self, terminal: Terminal) -> Self {
        self.terminal = terminal;
        self
    }

    /// Attaches an optional label drawn at the segment midpoint.
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Attaches optional multiplicity texts drawn near the endpoints.
    pub fn with_multiplicities(
        mut self,
        source_multiplicity: Option<String>,
        target_multiplicity: Option<String>,
    ) -> Self {
        self.source_multiplicity = source_multiplicity;
        self.target_multiplicity = target_multiplicity;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    /// Returns true when start and end coincide; degenerate connectors are
    /// skipped instead of drawn.
    pub fn is_degenerate(&self) -> bool {
        self.end.sub_point(self.start).hypot() < MIN_DRAWABLE_LENGTH
    }

    /// Renders the connector line, glyph and texts as one SVG group.
    pub fn render(&self) -> Box<dyn svg::Node> {
        let mut group = svg_element::Group::new();

        let direction = self.end.sub_point(self.start);
        let length = direction.hypot();
        if length < MIN_DRAWABLE_LENGTH {
            return group.into();
        }

        let ux = direction.x() / length;
        let uy = direction.y() / length;

        // Shorten the line so it ends at the glyph's base, not its tip.
        let back = self.terminal.back_length();
        let line_end = Point::new(self.end.x() - ux * back, self.end.y() - uy * back);

        let mut line = svg_element::Path::new()
            .set(
                "d",
                format!(
                    "M {} {} L {} {}",
                    self.start.x(),
                    self.start.y(),
                    line_end.x(),
                    line_end.y()
                ),
            )
            .set("fill", "none")
            .set("stroke", self.definition.color().to_string())
            .set("stroke-width", self.definition.width());

        if self.relationship.is_dashed() {
            line = line.set("stroke-dasharray", DASH_PATTERN);
        }
        group = group.add(line);

        match self.terminal {
            Terminal::Arrow => group = group.add(self.arrowhead(ux, uy)),
            Terminal::OpenDiamond => group = group.add(self.diamond(ux, uy, false)),
            Terminal::FilledDiamond => group = group.add(self.diamond(ux, uy, true)),
            Terminal::OpenTriangle => {
                group = group.add(open_triangle_glyph(
                    self.end,
                    ux,
                    uy,
                    self.definition.color(),
                    self.definition.width(),
                ));
            }
            Terminal::None => {}
        }

        group = self.render_texts(group, ux, uy, back);

        group.into()
    }

    /// Two strokes forming an open arrowhead at the end point.
    fn arrowhead(&self, ux: f32, uy: f32) -> svg_element::Path {
        let angle = ARROW_HALF_ANGLE_DEG.to_radians();
        let (sin, cos) = angle.sin_cos();

        let wing1_x = self.end.x() - ARROW_LENGTH * (ux * cos - uy * sin);
        let wing1_y = self.end.y() - ARROW_LENGTH * (uy * cos + ux * sin);
        let wing2_x = self.end.x() - ARROW_LENGTH * (ux * cos + uy * sin);
        let wing2_y = self.end.y() - ARROW_LENGTH * (uy * cos - ux * sin);

        svg_element::Path::new()
            .set(
                "d",
                format!(
                    "M {} {} L {} {} M {} {} L {} {}",
                    wing1_x,
                    wing1_y,
                    self.end.x(),
                    self.end.y(),
                    wing2_x,
                    wing2_y,
                    self.end.x(),
                    self.end.y()
                ),
            )
            .set("fill", "none")
            .set("stroke", self.definition.color().to_string())
            .set("stroke-width", self.definition.width())
    }

    /// A diamond glyph with its tip at the end point.
    fn diamond(&self, ux: f32, uy: f32, filled: bool) -> svg_element::Polygon {
        let px = -uy;
        let py = ux;

        let tip = self.end;
        let mid_x = tip.x() - ux * (DIAMOND_LENGTH / 2.0);
        let mid_y = tip.y() - uy * (DIAMOND_LENGTH / 2.0);
        let tail_x = tip.x() - ux * DIAMOND_LENGTH;
        let tail_y = tip.y() - uy * DIAMOND_LENGTH;

        let fill = if filled {
            self.definition.color().to_string()
        } else {
            "white".to_string()
        };

        svg_element::Polygon::new()
            .set(
                "points",
                format!(
                    "{},{} {},{} {},{} {},{}",
                    tip.x(),
                    tip.y(),
                    mid_x + px * DIAMOND_HALF_WIDTH,
                    mid_y + py * DIAMOND_HALF_WIDTH,
                    tail_x,
                    tail_y,
                    mid_x - px * DIAMOND_HALF_WIDTH,
                    mid_y - py * DIAMOND_HALF_WIDTH
                ),
            )
            .set("fill", fill)
            .set("stroke", self.definition.color().to_string())
            .set("stroke-width", self.definition.width())
    }

    fn render_texts(
        &self,
        group: svg_element::Group,
        ux: f32,
        uy: f32,
        back: f32,
    ) -> svg_element::Group {
        let mut group = group;

        if let Some(label) = &self.label {
            let mid = self.start.midpoint(self.end);
            group = group.add(annotation_text(label, mid.x(), mid.y() - 6.0));
        }

        let px = -uy;
        let py = ux;

        if let Some(multiplicity) = &self.source_multiplicity {
            let x = self.start.x() + ux * 12.0 + px * 10.0;
            let y = self.start.y() + uy * 12.0 + py * 10.0;
            group = group.add(annotation_text(multiplicity, x, y));
        }

        if let Some(multiplicity) = &self.target_multiplicity {
            let x = self.end.x() - ux * (12.0 + back) + px * 10.0;
            let y = self.end.y() - uy * (12.0 + back) + py * 10.0;
            group = group.add(annotation_text(multiplicity, x, y));
        }

        group
    }
}

/// A white-filled triangle with its tip at `tip`, pointing along `(ux, uy)`.
///
/// Shared with the generalization tree, which draws the same glyph at the
/// parent attachment point.
pub(crate) fn open_triangle_glyph(
    tip: Point,
    ux: f32,
    uy: f32,
    color: &Color,
    width: u32,
) -> svg_element::Polygon {
    let px = -uy;
    let py = ux;

    let base_x = tip.x() - ux * TRIANGLE_LENGTH;
    let base_y = tip.y() - uy * TRIANGLE_LENGTH;

    svg_element::Polygon::new()
        .set(
            "points",
            format!(
                "{},{} {},{} {},{}",
                tip.x(),
                tip.y(),
                base_x + px * TRIANGLE_HALF_WIDTH,
                base_y + py * TRIANGLE_HALF_WIDTH,
                base_x - px * TRIANGLE_HALF_WIDTH,
                base_y - py * TRIANGLE_HALF_WIDTH
            ),
        )
        .set("fill", "white")
        .set("stroke", color.to_string())
        .set("stroke-width", width)
}

/// Small annotation text used for labels and multiplicities.
fn annotation_text(content: &str, x: f32, y: f32) -> svg_element::Text {
    svg_element::Text::new(content.to_string())
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("font-family", DEFAULT_FONT_FAMILY)
        .set("font-size", 12)
}
