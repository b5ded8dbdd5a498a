//! Boundary condition strategy selecting the shear and tension models.

use nalgebra::Vector2;

use crate::errors::AnalysisError;
use crate::orientation::Orientation;
use crate::results::{BoundaryDetail, TensionDetail};
use crate::section::Inertia;
use crate::sweep::{BaseGeometry, SweepContext};
use crate::{pivot, stilt};

/// How the equipment resists overturning.
///
/// The variant is chosen once per solve and drives every orientation of the
/// sweep, so the two statics models can never be mixed within one solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundaryCondition {
    /// Rigid rotation about the footprint edge farthest along the load.
    ///
    /// Requires at least one footprint piece.
    Pivot,
    /// Elevated equipment whose anchors resist overturning axially.
    ///
    /// The layout is first rotated onto its principal axes. Requires an anchor
    /// group that is not collinear, otherwise bending about one axis is unresisted.
    Stilt,
}

impl BoundaryCondition {
    /// Map the `on_stilt` flag onto a boundary condition.
    #[must_use]
    pub const fn from_stilt_flag(on_stilt: bool) -> Self {
        if on_stilt {
            Self::Stilt
        } else {
            Self::Pivot
        }
    }

    /// One-time preparation of the base geometry before the sweep.
    pub(crate) fn prepare(
        self,
        base: &mut BaseGeometry,
    ) -> Result<Option<PrincipalAxes>, AnalysisError> {
        match self {
            Self::Pivot => {
                base.pivot_y().ok_or(AnalysisError::NoFootprint)?;
                Ok(None)
            }
            Self::Stilt => {
                let axes = base.align_to_principal_axes();
                log::debug!(
                    "principal axes: {:.1} deg rotation, Imin = {:.1}, Imax = {:.1}",
                    axes.angle,
                    axes.imin,
                    axes.imax
                );
                stilt::check_inertia(&base.inertia())?;
                Ok(Some(axes))
            }
        }
    }

    /// Shear demand at one orientation.
    pub(crate) fn shear(
        self,
        context: &SweepContext,
        snapshot: &BaseGeometry,
        inertia: &Inertia,
        orientation: Orientation,
    ) -> ShearStep {
        match self {
            Self::Pivot => pivot::shear(context, snapshot, inertia),
            Self::Stilt => stilt::shear(context, orientation),
        }
    }

    /// Tension demand at one orientation.
    pub(crate) fn tension(
        self,
        context: &SweepContext,
        snapshot: &BaseGeometry,
        orientation: Orientation,
    ) -> Result<TensionStep, AnalysisError> {
        match self {
            Self::Pivot => pivot::tension(context, snapshot, orientation),
            Self::Stilt => Ok(stilt::tension(context, orientation)),
        }
    }
}

/// Rotation applied to align the anchor group with its principal axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalAxes {
    /// Counter-clockwise rotation in degrees, within `[0, 90)`.
    pub angle: f64,
    /// Major principal moment of inertia.
    pub imax: f64,
    /// Minor principal moment of inertia.
    pub imin: f64,
}

/// Shear in one anchor.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AnchorShear {
    /// Uniform share of the horizontal force, opposing it.
    pub(crate) direct: Vector2<f64>,
    /// Share of the in-plane torsion.
    pub(crate) torsional: Vector2<f64>,
    /// Magnitude of the combined shear vector.
    pub(crate) total: f64,
}

/// Outcome of a shear model at one orientation.
#[derive(Clone, Debug)]
pub(crate) struct ShearStep {
    /// Offset of the mass center used for torsion.
    pub(crate) eccentricity: Vector2<f64>,
    /// In-plane torsion, counter-clockwise positive.
    pub(crate) torsion: f64,
    /// Shear per anchor in tag order.
    pub(crate) anchors: Vec<AnchorShear>,
    /// Largest total shear.
    pub(crate) max: f64,
    /// Tag of the anchor carrying `max`.
    pub(crate) critical: usize,
}

impl ShearStep {
    /// Distribute a horizontal force applied at an eccentric mass center over
    /// anchors at `offsets` from their centroid.
    ///
    /// Torsion is positive counter-clockwise. Without a polar moment of inertia
    /// the torsional share is zero; callers only allow that when no torsion acts.
    pub(crate) fn distribute(
        force: Vector2<f64>,
        eccentricity: Vector2<f64>,
        offsets: impl ExactSizeIterator<Item = Vector2<f64>>,
        polar: Option<f64>,
    ) -> Self {
        let direct = -force / offsets.len() as f64;
        let torsion = eccentricity.x * force.y - eccentricity.y * force.x;
        let anchors: Vec<AnchorShear> = offsets
            .map(|c| {
                let torsional = match polar {
                    Some(iz) => Vector2::new(torsion * c.y / iz, -torsion * c.x / iz),
                    None => Vector2::zeros(),
                };
                AnchorShear {
                    direct,
                    torsional,
                    total: (direct + torsional).norm(),
                }
            })
            .collect();
        let (critical, max) = arg_max(anchors.iter().map(|a| a.total));
        Self {
            eccentricity,
            torsion,
            anchors,
            max,
            critical,
        }
    }
}

/// Outcome of a tension model at one orientation.
#[derive(Clone, Debug)]
pub(crate) struct TensionStep {
    /// Governing horizontal force.
    pub(crate) horizontal_force: f64,
    /// Dead load as used by the model.
    pub(crate) vertical_force: f64,
    /// Overturning moment reported for the orientation.
    pub(crate) overturning_moment: f64,
    /// Tension and its breakdown per anchor in tag order.
    pub(crate) anchors: Vec<(f64, TensionDetail)>,
    /// Largest tension.
    pub(crate) max: f64,
    /// Tag of the anchor carrying `max`.
    pub(crate) critical: usize,
    /// Equipment-level quantities of the model.
    pub(crate) detail: BoundaryDetail,
}

/// Index and value of the largest entry; the first one wins ties.
pub(crate) fn arg_max(values: impl IntoIterator<Item = f64>) -> (usize, f64) {
    values
        .into_iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (index, value)| {
            if value > best.1 {
                (index, value)
            } else {
                best
            }
        })
}

/// Index and value of the smallest entry; the first one wins ties.
pub(crate) fn arg_min(values: impl IntoIterator<Item = f64>) -> (usize, f64) {
    let (index, value) = arg_max(values.into_iter().map(|value| -value));
    (index, -value)
}
