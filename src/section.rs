//! Centroid and second moments of area of an anchor group.
//!
//! Each anchor is treated as a unit area located at its offset from the group
//! centroid, so `I = Σ d²`. The anchors' own cross-sectional inertia is ignored,
//! which is customary for bolt groups.

use crate::errors::AnalysisError;
use crate::geometry::Point;

/// Relative size below which the product of inertia is treated as zero.
const PRODUCT_TOLERANCE: f64 = 1.0e-12;

/// Arithmetic mean of the supplied positions, the group's center of resistance.
///
/// # Errors
///
/// Returns [`AnalysisError::NoAnchors`] when `positions` is empty.
///
/// # Examples
/// ```
/// use anchorx::{centroid, point};
///
/// let center = centroid(&[point(0.0, 0.0), point(4.0, 2.0)]).expect("non-empty group");
/// assert_eq!(center, point(2.0, 1.0));
/// ```
pub fn centroid(positions: &[Point]) -> Result<Point, AnalysisError> {
    if positions.is_empty() {
        return Err(AnalysisError::NoAnchors);
    }
    let count = positions.len() as f64;
    let (sum_x, sum_y) = positions
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Ok(Point::new(sum_x / count, sum_y / count))
}

/// Second moments of area of an anchor group about its centroid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inertia {
    /// Moment of inertia about the X axis, `Σ dy²`.
    pub ix: f64,
    /// Moment of inertia about the Y axis, `Σ dx²`.
    pub iy: f64,
    /// Product of inertia, `Σ dx·dy`.
    pub ixy: f64,
    /// Polar moment of inertia, `Ix + Iy`.
    pub iz: f64,
}

impl Inertia {
    /// Compute the moments of `positions` about `center`.
    #[must_use]
    pub fn about(positions: &[Point], center: Point) -> Self {
        let (ix, iy, ixy) = positions.iter().fold((0.0, 0.0, 0.0), |(ix, iy, ixy), p| {
            let d = p.offset_from(center);
            (ix + d.y * d.y, iy + d.x * d.x, ixy + d.x * d.y)
        });
        Self {
            ix,
            iy,
            ixy,
            iz: ix + iy,
        }
    }

    /// Counter-clockwise rotation in degrees that aligns the group with its
    /// principal axes, normalised into `[0, 90)`.
    ///
    /// Follows Mohr's circle: `θ = ½·atan(Ixy / ((Ix − Iy) / 2))`. Equal moments
    /// about both axes give `θ = 0`, as does a product of inertia that is zero to
    /// within rounding.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{point, Inertia};
    ///
    /// let group = [point(-2.0, -1.0), point(2.0, 1.0)];
    /// let inertia = Inertia::about(&group, point(0.0, 0.0));
    /// let theta = inertia.principal_angle();
    /// assert!((0.0..90.0).contains(&theta));
    /// ```
    #[must_use]
    pub fn principal_angle(&self) -> f64 {
        let scale = self.iz.max(f64::MIN_POSITIVE);
        if self.ixy.abs() <= PRODUCT_TOLERANCE * scale {
            return 0.0;
        }
        if (self.ix - self.iy).abs() <= PRODUCT_TOLERANCE * scale {
            log::warn!(
                "Ix == Iy with non-zero Ixy = {:.3e}; principal angle taken as 0",
                self.ixy
            );
            return 0.0;
        }
        let theta = (self.ixy / ((self.ix - self.iy) / 2.0)).atan().to_degrees() / 2.0;
        if theta < 0.0 {
            theta + 90.0
        } else {
            theta
        }
    }

    /// Maximum and minimum principal moments of inertia, `(Imax, Imin)`.
    #[must_use]
    pub fn principal_moments(&self) -> (f64, f64) {
        let mean = (self.ix + self.iy) / 2.0;
        let radius = ((self.ix - self.iy) / 2.0).hypot(self.ixy);
        (mean + radius, mean - radius)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::point;

    #[test]
    fn empty_group_has_no_centroid() {
        assert_eq!(centroid(&[]), Err(AnalysisError::NoAnchors));
    }

    #[test]
    fn rectangle_group_moments() {
        let group = [
            point(0.0, 0.0),
            point(0.0, 10.0),
            point(20.0, 0.0),
            point(20.0, 10.0),
        ];
        let center = centroid(&group).expect("non-empty group");
        assert_eq!(center, point(10.0, 5.0));
        let inertia = Inertia::about(&group, center);
        assert_relative_eq!(inertia.ix, 100.0);
        assert_relative_eq!(inertia.iy, 400.0);
        assert_relative_eq!(inertia.ixy, 0.0);
        assert_relative_eq!(inertia.iz, 500.0);
        assert_eq!(inertia.principal_angle(), 0.0);
    }

    #[test]
    fn rotating_by_principal_angle_removes_product() {
        let group = [point(0.0, 0.0), point(3.0, 1.0), point(5.0, 4.0), point(1.0, 6.0)];
        let center = centroid(&group).expect("non-empty group");
        let inertia = Inertia::about(&group, center);
        let theta = inertia.principal_angle();
        assert!((0.0..90.0).contains(&theta));

        let rotated: Vec<Point> = group.iter().map(|p| p.rotated(theta)).collect();
        let aligned = Inertia::about(&rotated, center.rotated(theta));
        assert_relative_eq!(aligned.ixy, 0.0, epsilon = 1.0e-9);
        assert_eq!(aligned.principal_angle(), 0.0);
        assert_relative_eq!(aligned.iz, inertia.iz, max_relative = 1.0e-12);

        let (imax, imin) = inertia.principal_moments();
        assert_relative_eq!(imax, aligned.ix.max(aligned.iy), max_relative = 1.0e-9);
        assert_relative_eq!(imin, aligned.ix.min(aligned.iy), max_relative = 1.0e-9);
    }

    #[test]
    fn negative_raw_angle_is_shifted_into_first_quadrant() {
        // Ix > Iy with negative product gives a negative raw angle.
        let group = [point(-1.0, 3.0), point(1.0, -3.0)];
        let inertia = Inertia::about(&group, point(0.0, 0.0));
        assert!(inertia.ixy < 0.0);
        let theta = inertia.principal_angle();
        assert!(theta > 45.0 && theta < 90.0);
    }

    #[test]
    fn equal_moments_give_zero_angle() {
        let group = [point(-1.0, -1.0), point(1.0, 1.0)];
        let inertia = Inertia::about(&group, point(0.0, 0.0));
        assert_relative_eq!(inertia.ix, inertia.iy);
        assert_eq!(inertia.principal_angle(), 0.0);
    }
}
