//! Fundamental planar geometry for anchor layouts.

use nalgebra::{Rotation2, Vector2};

/// Position in the plan of the equipment base.
///
/// Coordinates are unit agnostic; they only need to be consistent with the
/// mass-center elevation supplied in the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Point {
    /// Distance along the plan X axis.
    pub x: f64,
    /// Distance along the plan Y axis.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Rotate the point counter-clockwise about the origin.
    ///
    /// # Examples
    /// ```
    /// use anchorx::point;
    ///
    /// let rotated = point(1.0, 0.0).rotated(90.0);
    /// assert!(rotated.x.abs() < 1.0e-12);
    /// assert!((rotated.y - 1.0).abs() < 1.0e-12);
    /// ```
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        Self::from(rotation(degrees) * self.to_vector())
    }

    /// Vector from `origin` to this point.
    #[must_use]
    pub fn offset_from(self, origin: Point) -> Vector2<f64> {
        self.to_vector() - origin.to_vector()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Standard 2-D rotation matrix for an angle given in degrees.
pub(crate) fn rotation(degrees: f64) -> Rotation2<f64> {
    Rotation2::new(degrees.to_radians())
}

/// Axis-aligned rectangular piece of the equipment footprint.
///
/// Corners are stored counter-clockwise starting from the origin corner. After a
/// rotation the piece is no longer axis aligned, but the winding is preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Corner points in counter-clockwise order.
    pub corners: [Point; 4],
}

impl Footprint {
    /// Build a rectangle from its lower-left corner and extents.
    #[must_use]
    pub fn rectangle(origin: Point, width: f64, height: f64) -> Self {
        Self {
            corners: [
                origin,
                Point::new(origin.x + width, origin.y),
                Point::new(origin.x + width, origin.y + height),
                Point::new(origin.x, origin.y + height),
            ],
        }
    }

    /// Rotate every corner counter-clockwise about the origin.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Self {
        let rotation = rotation(degrees);
        Self {
            corners: self
                .corners
                .map(|corner| Point::from(rotation * corner.to_vector())),
        }
    }

    /// Largest Y coordinate among the corners.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.corners
            .iter()
            .map(|corner| corner.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use anchorx::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn point_to_vector_roundtrip() {
        let origin = Point::new(1.0, 2.0);
        let vector: Vector2<f64> = origin.into();
        assert_eq!(vector, Vector2::new(1.0, 2.0));
        assert_eq!(Point::from(vector), origin);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let rotated = point(0.0, 2.0).rotated(90.0);
        assert_relative_eq!(rotated.x, -2.0, epsilon = 1.0e-12);
        assert_relative_eq!(rotated.y, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn rectangle_corners_wind_counter_clockwise() {
        let piece = Footprint::rectangle(point(1.0, 2.0), 3.0, 4.0);
        assert_eq!(
            piece.corners,
            [point(1.0, 2.0), point(4.0, 2.0), point(4.0, 6.0), point(1.0, 6.0)]
        );
        assert_relative_eq!(piece.max_y(), 6.0);
    }

    #[test]
    fn half_turn_moves_pivot_to_bottom_edge() {
        let piece = Footprint::rectangle(point(0.0, 0.0), 80.0, 80.0).rotated(180.0);
        assert_relative_eq!(piece.max_y(), 0.0, epsilon = 1.0e-9);
    }
}
