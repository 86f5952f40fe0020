//! Geometric primitives shared by layout and drawing code.
//!
//! All coordinates are in canvas pixels. [`Bounds`] is the workhorse type:
//! class boxes, notes and glyph anchors are all tracked as axis-aligned
//! rectangles.

use serde::Deserialize;

/// One of the four sides of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner point and a size
    pub fn from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center of the bounds as a Point
    pub fn center(self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Checks whether two bounds overlap.
    ///
    /// Rectangles that merely touch along an edge do not count as
    /// overlapping; collision checks only reject strictly shared area.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Checks whether these bounds lie entirely inside `outer`.
    pub fn is_within(&self, outer: &Self) -> bool {
        self.min_x >= outer.min_x
            && self.min_y >= outer.min_y
            && self.max_x <= outer.max_x
            && self.max_y <= outer.max_y
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates insets with one value for left/right and another for top/bottom
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);

        let sum = p1.add_point(p2);
        assert_eq!(sum.x(), 7.0);
        assert_eq!(sum.y(), 11.0);

        let diff = p1.sub_point(p2);
        assert_eq!(diff.x(), 3.0);
        assert_eq!(diff.y(), 5.0);
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(mid.x(), 2.0);
        assert_eq!(mid.y(), 3.0);
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_to_bounds_centers_the_size() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(6.0, 8.0));

        assert_eq!(bounds.min_x(), 7.0);
        assert_eq!(bounds.min_y(), 16.0);
        assert_eq!(bounds.max_x(), 13.0);
        assert_eq!(bounds.max_y(), 24.0);
    }

    #[test]
    fn test_size_max() {
        let max_size = Size::new(10.0, 20.0).max(Size::new(15.0, 18.0));
        assert_eq!(max_size.width(), 15.0);
        assert_eq!(max_size.height(), 20.0);
    }

    #[test]
    fn test_size_add_padding() {
        let padded = Size::new(10.0, 20.0).add_padding(Insets::symmetric(5.0, 3.0));
        assert_eq!(padded.width(), 20.0);
        assert_eq!(padded.height(), 26.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::from_top_left(Point::new(2.0, 3.0), Size::new(5.0, 8.0));

        assert_eq!(bounds.min_x(), 2.0);
        assert_eq!(bounds.min_y(), 3.0);
        assert_eq!(bounds.max_x(), 7.0);
        assert_eq!(bounds.max_y(), 11.0);
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 8.0);
    }

    #[test]
    fn test_bounds_center() {
        let bounds = Bounds::from_top_left(Point::new(10.0, 20.0), Size::new(4.0, 6.0));
        let center = bounds.center();
        assert_eq!(center.x(), 12.0);
        assert_eq!(center.y(), 23.0);
    }

    #[test]
    fn test_bounds_merge() {
        let b1 = Bounds::from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let b2 = Bounds::from_top_left(Point::new(3.0, 0.0), Size::new(5.0, 4.0));

        let merged = b1.merge(&b2);
        assert_eq!(merged.min_x(), 1.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 8.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let moved = bounds.translate(Point::new(3.0, -1.0));

        assert_eq!(moved.min_x(), 4.0);
        assert_eq!(moved.min_y(), 1.0);
        assert_eq!(moved.max_x(), 8.0);
        assert_eq!(moved.max_y(), 5.0);
    }

    #[test]
    fn test_bounds_intersects_overlapping() {
        let b1 = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b2 = Bounds::from_top_left(Point::new(5.0, 5.0), Size::new(10.0, 10.0));

        assert!(b1.intersects(&b2));
        assert!(b2.intersects(&b1));
    }

    #[test]
    fn test_bounds_intersects_disjoint() {
        let b1 = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b2 = Bounds::from_top_left(Point::new(20.0, 0.0), Size::new(10.0, 10.0));

        assert!(!b1.intersects(&b2));
        assert!(!b2.intersects(&b1));
    }

    #[test]
    fn test_bounds_touching_edges_do_not_intersect() {
        let b1 = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b2 = Bounds::from_top_left(Point::new(10.0, 0.0), Size::new(10.0, 10.0));

        assert!(!b1.intersects(&b2));
    }

    #[test]
    fn test_bounds_is_within() {
        let outer = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let inner = Bounds::from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        let straddling = Bounds::from_top_left(Point::new(90.0, 10.0), Size::new(20.0, 20.0));

        assert!(inner.is_within(&outer));
        assert!(!straddling.is_within(&outer));
        assert!(outer.is_within(&outer));
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 6.0);
        assert_eq!(insets.vertical_sum(), 4.0);
    }

    #[test]
    fn test_insets_symmetric() {
        let insets = Insets::symmetric(10.0, 6.0);
        assert_eq!(insets.left(), 10.0);
        assert_eq!(insets.right(), 10.0);
        assert_eq!(insets.top(), 6.0);
        assert_eq!(insets.bottom(), 6.0);
    }
}
