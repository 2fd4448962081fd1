//! Geometric primitives for roadmap layout.
//!
//! Roadmaps are laid out on a canvas that follows the usual screen
//! convention:
//!
//! ```text
//!   (0,0) ────────► +X   (depth grows to the right)
//!     │
//!     │
//!     ▼
//!    +Y                  (slots grow downward)
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: One column per tree depth
//! - **Y-axis**: One row per slot within a column

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use roadmap_core::geometry::Point;
/// let p = Point::new(300.0, 150.0);
/// assert_eq!(p.x(), 300.0);
/// assert_eq!(p.y(), 150.0);
///
/// // Column 2, row 3 on a 300 x 150 grid
/// let cell = Point::from_grid(2, 3, 300.0, 150.0);
/// assert_eq!(cell, Point::new(600.0, 450.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates the point of a grid cell.
    ///
    /// `column` and `row` are scaled by their respective spacings, so cell
    /// `(0, 0)` is always the origin.
    pub fn from_grid(column: usize, row: usize, column_spacing: f32, row_spacing: f32) -> Self {
        Self {
            x: column as f32 * column_spacing,
            y: row as f32 * row_spacing,
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_default_is_origin() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_from_grid() {
        let point = Point::from_grid(3, 2, 300.0, 150.0);
        assert_approx_eq!(f32, point.x(), 900.0);
        assert_approx_eq!(f32, point.y(), 300.0);

        let origin = Point::from_grid(0, 0, 300.0, 150.0);
        assert!(origin.is_zero());
    }

    #[test]
    fn test_point_from_grid_custom_spacing() {
        let point = Point::from_grid(1, 4, 120.5, 0.0);
        assert_approx_eq!(f32, point.x(), 120.5);
        assert_approx_eq!(f32, point.y(), 0.0);
    }

    #[test]
    fn test_point_serializes_as_xy_object() {
        let json = serde_json::to_value(Point::new(300.0, 0.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 300.0, "y": 0.0 }));
    }
}
