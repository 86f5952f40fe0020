//! The merged generalization tree.
//!
//! When two or more classes inherit from the same parent, the edges are
//! drawn as a single tree: one open triangle at the parent, a vertical
//! trunk down to a horizontal bar, and one vertical branch per child.
//! Drawing a triangle per child would misrepresent one shared
//! relationship as N separate ones.

use crate::{
    draw::connector::{ConnectorDefinition, TRIANGLE_LENGTH, open_triangle_glyph},
    geometry::{Bounds, Point},
};
use std::{cmp::Ordering, rc::Rc};
use svg::{self, node::element as svg_element};

/// A planned generalization tree connecting one parent to its children.
#[derive(Debug, Clone)]
pub struct GeneralizationTree {
    definition: Rc<ConnectorDefinition>,
    parent_point: Point,
    child_points: Vec<Point>,
    bar_y: f32,
}

impl GeneralizationTree {
    /// Plans the tree geometry from the parent's and children's bounds.
    ///
    /// The parent attaches at the top-center of its box, each child at the
    /// bottom-center of its box. The horizontal bar sits midway in y
    /// between the parent point and the child point nearest to it.
    /// Returns `None` when there are no children.
    pub fn plan(
        definition: Rc<ConnectorDefinition>,
        parent_bounds: Bounds,
        child_bounds: &[Bounds],
    ) -> Option<Self> {
        let parent_point = Point::new(parent_bounds.center().x(), parent_bounds.min_y());

        let child_points: Vec<Point> = child_bounds
            .iter()
            .map(|bounds| Point::new(bounds.center().x(), bounds.max_y()))
            .collect();

        let nearest_y = child_points
            .iter()
            .map(|point| point.y())
            .min_by(|a, b| {
                let da = (a - parent_point.y()).abs();
                let db = (b - parent_point.y()).abs();
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            })?;

        let bar_y = (parent_point.y() + nearest_y) / 2.0;

        Some(Self {
            definition,
            parent_point,
            child_points,
            bar_y,
        })
    }

    /// The attachment point at the parent's top edge.
    pub fn parent_point(&self) -> Point {
        self.parent_point
    }

    /// The attachment points at the children's bottom edges.
    pub fn child_points(&self) -> &[Point] {
        &self.child_points
    }

    /// The y-coordinate of the horizontal bar.
    pub fn bar_y(&self) -> f32 {
        self.bar_y
    }

    fn segment(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", self.definition.color().to_string())
            .set("stroke-width", self.definition.width())
    }

    /// Renders the trunk, bar, branches and the single shared triangle.
    pub fn render(&self) -> Box<dyn svg::Node> {
        let mut group = svg_element::Group::new();

        let parent_x = self.parent_point.x();
        let parent_y = self.parent_point.y();

        // Trunk from the triangle base down to the bar. The triangle
        // points up into the parent, so its base sits below the tip.
        let trunk_top = parent_y + TRIANGLE_LENGTH;
        group = group.add(self.segment(parent_x, trunk_top, parent_x, self.bar_y));

        // Horizontal bar spanning the trunk and every branch.
        let mut bar_min_x = parent_x;
        let mut bar_max_x = parent_x;
        for point in &self.child_points {
            bar_min_x = bar_min_x.min(point.x());
            bar_max_x = bar_max_x.max(point.x());
        }
        group = group.add(self.segment(bar_min_x, self.bar_y, bar_max_x, self.bar_y));

        // One vertical branch per child.
        for point in &self.child_points {
            group = group.add(self.segment(point.x(), self.bar_y, point.x(), point.y()));
        }

        // The single shared triangle at the parent attachment point.
        group = group.add(open_triangle_glyph(
            self.parent_point,
            0.0,
            -1.0,
            self.definition.color(),
            self.definition.width(),
        ));

        group.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn bounds_at(x: f32, y: f32) -> Bounds {
        Bounds::from_top_left(Point::new(x, y), Size::new(100.0, 60.0))
    }

    fn tree(parent: Bounds, children: &[Bounds]) -> GeneralizationTree {
        GeneralizationTree::plan(Rc::new(ConnectorDefinition::new()), parent, children)
            .expect("tree with children")
    }

    #[test]
    fn test_plan_attaches_parent_top_and_child_bottoms() {
        let parent = bounds_at(500.0, 100.0);
        let children = [bounds_at(300.0, 400.0), bounds_at(700.0, 400.0)];

        let tree = tree(parent, &children);

        assert_eq!(tree.parent_point(), Point::new(550.0, 100.0));
        assert_eq!(tree.child_points()[0], Point::new(350.0, 460.0));
        assert_eq!(tree.child_points()[1], Point::new(750.0, 460.0));
    }

    #[test]
    fn test_bar_sits_midway_to_the_nearest_child() {
        let parent = bounds_at(500.0, 100.0);
        let children = [bounds_at(300.0, 400.0), bounds_at(700.0, 600.0)];

        let tree = tree(parent, &children);

        // Nearest child bottom is at y = 460; parent top is at y = 100.
        assert_eq!(tree.bar_y(), 280.0);
    }

    #[test]
    fn test_plan_without_children_is_none() {
        let result = GeneralizationTree::plan(
            Rc::new(ConnectorDefinition::new()),
            bounds_at(0.0, 0.0),
            &[],
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_render_draws_one_triangle_and_a_branch_per_child() {
        let parent = bounds_at(500.0, 100.0);
        let children = [
            bounds_at(200.0, 400.0),
            bounds_at(500.0, 400.0),
            bounds_at(800.0, 400.0),
        ];

        let rendered = tree(parent, &children).render().to_string();

        // Exactly one triangle regardless of child count.
        assert_eq!(rendered.matches("<polygon").count(), 1);
        // Trunk + bar + three branches.
        assert_eq!(rendered.matches("<line").count(), 5);
    }

    #[test]
    fn test_triangle_size_is_independent_of_child_count() {
        let parent = bounds_at(500.0, 100.0);

        let two = tree(parent, &[bounds_at(300.0, 400.0), bounds_at(700.0, 400.0)]);
        let four = tree(
            parent,
            &[
                bounds_at(100.0, 400.0),
                bounds_at(350.0, 400.0),
                bounds_at(600.0, 400.0),
                bounds_at(850.0, 400.0),
            ],
        );

        // Both trees place the same glyph at the same parent point; the
        // rendered triangle polygon is byte-identical.
        let polygon_of = |tree: &GeneralizationTree| {
            let rendered = tree.render().to_string();
            let start = rendered.find("<polygon").unwrap();
            rendered[start..].split('>').next().unwrap().to_string()
        };

        assert_eq!(polygon_of(&two), polygon_of(&four));
    }
}
