//! The three-compartment UML class box.
//!
//! A class box stacks three sections: name, attributes, operations. Each
//! section is measured independently; the box takes the widest section's
//! width and the sum of the section heights. Empty sections still render
//! as thin compartments so the three-compartment convention is preserved.

use crate::{
    color::Color,
    draw::Drawable,
    geometry::{Point, Size},
    text::{DEFAULT_FONT_FAMILY, TEXT_MEASURER, TEXT_V_PADDING},
};
use std::rc::Rc;
use svg::{self, node::element as svg_element};

/// Minimum height of any compartment, including empty ones.
pub const MIN_SECTION_HEIGHT: f32 = 20.0;

/// Left padding for attribute and operation lines.
const MEMBER_LEFT_PADDING: f32 = 10.0;

/// Styling for class boxes.
#[derive(Debug, Clone)]
pub struct ClassBoxDefinition {
    outline_color: Color,
    outline_width: u32,
    font_size: u16,
}

impl ClassBoxDefinition {
    /// Creates a new definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the outline color
    pub fn outline_color(&self) -> &Color {
        &self.outline_color
    }

    /// Gets the outline width in pixels
    pub fn outline_width(&self) -> u32 {
        self.outline_width
    }

    /// Gets the font size in points
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Sets the outline color
    pub fn set_outline_color(&mut self, color: Color) {
        self.outline_color = color;
    }

    /// Sets the outline width in pixels
    pub fn set_outline_width(&mut self, width: u32) {
        self.outline_width = width;
    }

    /// Sets the font size in points
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }
}

impl Default for ClassBoxDefinition {
    fn default() -> Self {
        Self {
            outline_color: Color::default(),
            outline_width: 1,
            font_size: 12,
        }
    }
}

/// A renderable class box: name plus formatted member lines.
#[derive(Debug, Clone)]
pub struct ClassBox {
    definition: Rc<ClassBoxDefinition>,
    name: String,
    attribute_lines: Vec<String>,
    operation_lines: Vec<String>,
}

impl ClassBox {
    pub fn new(
        definition: Rc<ClassBoxDefinition>,
        name: String,
        attribute_lines: Vec<String>,
        operation_lines: Vec<String>,
    ) -> Self {
        Self {
            definition,
            name,
            attribute_lines,
            operation_lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn font_size(&self) -> u16 {
        self.definition.font_size()
    }

    fn name_block_size(&self) -> Size {
        TEXT_MEASURER.measure_block(&self.name, self.font_size())
    }

    fn attributes_block_size(&self) -> Size {
        TEXT_MEASURER.measure_block(&self.attribute_lines.join("\n"), self.font_size())
    }

    fn operations_block_size(&self) -> Size {
        TEXT_MEASURER.measure_block(&self.operation_lines.join("\n"), self.font_size())
    }

    /// Heights of the name, attributes and operations compartments.
    ///
    /// Every compartment is at least [`MIN_SECTION_HEIGHT`] tall so empty
    /// sections remain visible between their separators.
    pub fn section_heights(&self) -> (f32, f32, f32) {
        (
            self.name_block_size().height().max(MIN_SECTION_HEIGHT),
            self.attributes_block_size().height().max(MIN_SECTION_HEIGHT),
            self.operations_block_size().height().max(MIN_SECTION_HEIGHT),
        )
    }

    /// Computes the total box size from its three compartments.
    pub fn calculate_size(&self) -> Size {
        let width = self
            .name_block_size()
            .width()
            .max(self.attributes_block_size().width())
            .max(self.operations_block_size().width());

        let (name_h, attrs_h, ops_h) = self.section_heights();

        Size::new(width, name_h + attrs_h + ops_h)
    }

    fn render_member_lines(
        &self,
        group: svg_element::Group,
        lines: &[String],
        left_x: f32,
        section_top: f32,
    ) -> svg_element::Group {
        let line_height = TEXT_MEASURER.line_height(self.font_size());
        let mut group = group;

        for (i, line) in lines.iter().enumerate() {
            let y = section_top + TEXT_V_PADDING + (i as f32 + 0.5) * line_height;
            let text = svg_element::Text::new(line.clone())
                .set("x", left_x)
                .set("y", y)
                .set("text-anchor", "start")
                .set("dominant-baseline", "middle")
                .set("font-family", DEFAULT_FONT_FAMILY)
                .set("font-size", self.font_size());
            group = group.add(text);
        }

        group
    }
}

impl Drawable for ClassBox {
    fn render_to_svg(&self, position: Point) -> Box<dyn svg::Node> {
        let size = self.calculate_size();
        let bounds = position.to_bounds(size);
        let (name_h, attrs_h, _) = self.section_heights();
        let definition = &self.definition;

        let mut group = svg_element::Group::new();

        // Outer border
        let border = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "white")
            .set("stroke", definition.outline_color().to_string())
            .set("stroke-width", definition.outline_width());
        group = group.add(border);

        // Compartment separators
        let first_separator_y = bounds.min_y() + name_h;
        let second_separator_y = first_separator_y + attrs_h;
        for separator_y in [first_separator_y, second_separator_y] {
            let separator = svg_element::Line::new()
                .set("x1", bounds.min_x())
                .set("y1", separator_y)
                .set("x2", bounds.max_x())
                .set("y2", separator_y)
                .set("stroke", definition.outline_color().to_string())
                .set("stroke-width", definition.outline_width());
            group = group.add(separator);
        }

        // Name, horizontally centered within the top compartment
        let name = svg_element::Text::new(self.name.clone())
            .set("x", position.x())
            .set("y", bounds.min_y() + name_h / 2.0)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", DEFAULT_FONT_FAMILY)
            .set("font-size", self.font_size());
        group = group.add(name);

        // Members, left-aligned with a fixed indent
        let member_x = bounds.min_x() + MEMBER_LEFT_PADDING;
        group = self.render_member_lines(group, &self.attribute_lines, member_x, first_separator_y);
        group = self.render_member_lines(group, &self.operation_lines, member_x, second_separator_y);

        group.into()
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MAX_BOX_WIDTH;
    use float_cmp::approx_eq;

    fn class_box(name: &str, attributes: &[&str], operations: &[&str]) -> ClassBox {
        ClassBox::new(
            Rc::new(ClassBoxDefinition::new()),
            name.to_string(),
            attributes.iter().map(|s| s.to_string()).collect(),
            operations.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_empty_class_still_has_three_compartments() {
        let class = class_box("Empty", &[], &[]);

        let (name_h, attrs_h, ops_h) = class.section_heights();
        assert!(name_h >= MIN_SECTION_HEIGHT);
        assert_eq!(attrs_h, MIN_SECTION_HEIGHT);
        assert_eq!(ops_h, MIN_SECTION_HEIGHT);

        let size = class.size();
        assert!(size.width() > 0.0 && size.width().is_finite());
        assert!(size.height() > 0.0 && size.height().is_finite());
    }

    #[test]
    fn test_empty_class_renders_two_separators() {
        let class = class_box("Empty", &[], &[]);
        let rendered = class.render_to_svg(Point::new(100.0, 100.0)).to_string();

        let separators = rendered.matches("<line").count();
        assert_eq!(separators, 2);
    }

    #[test]
    fn test_height_is_the_sum_of_section_heights() {
        let class = class_box("Person", &["-age: int"], &["+getAge(): int"]);

        let (name_h, attrs_h, ops_h) = class.section_heights();
        assert!(approx_eq!(
            f32,
            class.size().height(),
            name_h + attrs_h + ops_h,
            epsilon = 0.001
        ));
    }

    #[test]
    fn test_width_is_the_widest_section() {
        let narrow = class_box("A", &[], &[]);
        let wide = class_box("A", &["-aRatherLongAttributeName: string"], &[]);

        assert!(wide.size().width() > narrow.size().width());
    }

    #[test]
    fn test_width_never_exceeds_the_cap() {
        let long_name: String = "N".repeat(200);
        let class = class_box(&long_name, &[], &[]);
        assert_eq!(class.size().width(), MAX_BOX_WIDTH);
    }

    #[test]
    fn test_more_members_make_a_taller_box() {
        let small = class_box("C", &["-a: int"], &[]);
        let large = class_box("C", &["-a: int", "-b: int", "-c: int", "-d: int"], &[]);

        assert!(large.size().height() > small.size().height());
    }

    #[test]
    fn test_rendered_box_contains_all_member_lines() {
        let class = class_box("Dog", &["-name: string"], &["+bark(): void"]);
        let rendered = class.render_to_svg(Point::new(0.0, 0.0)).to_string();

        assert!(rendered.contains("Dog"));
        assert!(rendered.contains("-name: string"));
        assert!(rendered.contains("+bark(): void"));
    }
}
