//! Solved demand envelope: per-orientation aggregates and per-anchor series.

use nalgebra::Vector2;

use crate::boundary::{BoundaryCondition, PrincipalAxes};
use crate::geometry::{Footprint, Point};
use crate::orientation::{Orientation, ORIENTATION_COUNT};
use crate::section::Inertia;
use crate::sweep::{BaseGeometry, SweepContext};

/// Tension breakdown of one anchor, specific to the boundary condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TensionDetail {
    /// Pivot mode lever arm.
    Pivot {
        /// Distance below the pivot line; zero for inactive anchors.
        lever_arm: f64,
    },
    /// Stilt mode superposition terms.
    Stilt {
        /// Offset `(cx, cy)` of the anchor from the anchor centroid.
        offset: Vector2<f64>,
        /// Tension from the total moment about X, `Mx·cy/Ix`.
        from_moment_x: f64,
        /// Tension from the total moment about Y, `−My·cx/Iy`.
        from_moment_y: f64,
        /// Uniform dead-load share, `W / N`.
        axial: f64,
    },
}

/// Demand on one anchor at one orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorDemand {
    /// Anchor position at this orientation.
    pub position: Point,
    /// Uniform share of the horizontal force, opposing it.
    pub direct_shear: Vector2<f64>,
    /// Share of the in-plane torsion.
    pub torsional_shear: Vector2<f64>,
    /// Magnitude of the combined shear vector.
    pub shear: f64,
    /// Tension, negative for compression in stilt mode.
    pub tension: f64,
    /// Boundary-condition specific tension terms.
    pub detail: TensionDetail,
}

/// Equipment-level quantities specific to the boundary condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryDetail {
    /// Pivot mode moment balance.
    Pivot {
        /// Y coordinate of the pivot line.
        pivot_y: f64,
        /// Dead-load moment about the pivot line.
        resisting_moment: f64,
        /// Overturning moment left for the anchors, never negative.
        net_moment: f64,
        /// Largest anchor lever arm.
        max_lever_arm: f64,
    },
    /// Stilt mode moment decomposition.
    Stilt {
        /// Horizontal force components `(Fx, Fy)`.
        force: Vector2<f64>,
        /// Moment from the dead load acting at an eccentric mass center.
        weight_moment: Vector2<f64>,
        /// Moment from the horizontal force acting at the mass-center elevation.
        overturning: Vector2<f64>,
        /// Sum of the weight and overturning moments.
        total_moment: Vector2<f64>,
        /// Smallest anchor tension, the governing compression when negative.
        min_tension: f64,
        /// Tag of the anchor with the smallest tension.
        compression_anchor: usize,
    },
}

/// Equipment-level results at one orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationSummary {
    /// Orientation these results belong to.
    pub orientation: Orientation,
    /// Moments of inertia of the rotated anchor group.
    pub inertia: Inertia,
    /// Rotated anchor centroid.
    pub anchor_centroid: Point,
    /// Rotated equipment mass center.
    pub equipment_centroid: Point,
    /// Rotated footprint pieces.
    pub footprints: Vec<Footprint>,
    /// Governing horizontal force.
    pub horizontal_force: f64,
    /// Factored dead load; negative (downward) in stilt mode.
    pub vertical_force: f64,
    /// Overturning moment; in stilt mode the magnitude of the total moment.
    pub overturning_moment: f64,
    /// Offset of the mass center from the anchor centroid used for torsion.
    pub eccentricity: Vector2<f64>,
    /// In-plane torsion, counter-clockwise positive.
    pub torsion: f64,
    /// Largest anchor shear.
    pub max_shear: f64,
    /// Tag of the anchor with the largest shear.
    pub shear_anchor: usize,
    /// Largest anchor tension.
    pub max_tension: f64,
    /// Tag of the anchor with the largest tension.
    pub tension_anchor: usize,
    /// Boundary-condition specific quantities.
    pub detail: BoundaryDetail,
}

/// Dense series of demands for one anchor, indexed by orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorSeries {
    /// Anchor tag.
    pub tag: usize,
    /// Position in the solved base geometry.
    pub base: Point,
    /// Demand at every sampled orientation.
    demands: Vec<AnchorDemand>,
}

impl AnchorSeries {
    /// Demand at `orientation`.
    #[must_use]
    pub fn at(&self, orientation: Orientation) -> &AnchorDemand {
        &self.demands[orientation.index()]
    }

    /// Demands in orientation order.
    #[must_use]
    pub fn demands(&self) -> &[AnchorDemand] {
        &self.demands
    }
}

/// Extreme value over the whole sweep and where it occurred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Governing {
    /// Extreme value.
    pub value: f64,
    /// First orientation attaining it.
    pub orientation: Orientation,
    /// Anchor attaining it.
    pub anchor: usize,
}

/// Demand envelope over all sampled orientations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    /// Largest anchor tension.
    pub tension: Governing,
    /// Largest anchor shear.
    pub shear: Governing,
    /// Smallest anchor tension, stilt mode only.
    pub compression: Option<Governing>,
}

/// Immutable result of one solve.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Statics model used for every orientation.
    boundary: BoundaryCondition,
    /// Rotation applied by principal-axis alignment, stilt mode only.
    principal_axes: Option<PrincipalAxes>,
    /// Geometry that was swept.
    base: BaseGeometry,
    /// Equipment aggregates indexed by orientation.
    orientations: Vec<OrientationSummary>,
    /// Anchor series indexed by tag.
    anchors: Vec<AnchorSeries>,
}

impl Solution {
    /// Gather per-orientation outcomes into per-anchor series.
    pub(crate) fn assemble(
        context: SweepContext,
        outcomes: Vec<(OrientationSummary, Vec<AnchorDemand>)>,
    ) -> Self {
        debug_assert_eq!(outcomes.len(), ORIENTATION_COUNT);
        let mut anchors: Vec<AnchorSeries> = context
            .base
            .anchors()
            .iter()
            .enumerate()
            .map(|(tag, &base)| AnchorSeries {
                tag,
                base,
                demands: Vec::with_capacity(outcomes.len()),
            })
            .collect();
        let mut orientations = Vec::with_capacity(outcomes.len());
        for (summary, demands) in outcomes {
            for (series, demand) in anchors.iter_mut().zip(demands) {
                series.demands.push(demand);
            }
            orientations.push(summary);
        }
        Self {
            boundary: context.boundary,
            principal_axes: context.principal_axes,
            base: context.base,
            orientations,
            anchors,
        }
    }

    /// Statics model the solution was produced with.
    #[must_use]
    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Principal-axis alignment applied before the sweep, stilt mode only.
    #[must_use]
    pub fn principal_axes(&self) -> Option<PrincipalAxes> {
        self.principal_axes
    }

    /// Geometry at the reference orientation, after any alignment.
    #[must_use]
    pub fn base(&self) -> &BaseGeometry {
        &self.base
    }

    /// Equipment aggregates in orientation order.
    #[must_use]
    pub fn orientations(&self) -> &[OrientationSummary] {
        &self.orientations
    }

    /// Equipment aggregates at `orientation`.
    #[must_use]
    pub fn at(&self, orientation: Orientation) -> &OrientationSummary {
        &self.orientations[orientation.index()]
    }

    /// Anchor series in tag order.
    #[must_use]
    pub fn anchors(&self) -> &[AnchorSeries] {
        &self.anchors
    }

    /// Series for the anchor with `tag`.
    #[must_use]
    pub fn anchor(&self, tag: usize) -> Option<&AnchorSeries> {
        self.anchors.get(tag)
    }

    /// Smallest anchor tension at `orientation`; `None` outside stilt mode.
    #[must_use]
    pub fn min_tension(&self, orientation: Orientation) -> Option<f64> {
        match self.at(orientation).detail {
            BoundaryDetail::Stilt { min_tension, .. } => Some(min_tension),
            BoundaryDetail::Pivot { .. } => None,
        }
    }

    /// Tag of the anchor with the smallest tension; `None` outside stilt mode.
    #[must_use]
    pub fn compression_anchor(&self, orientation: Orientation) -> Option<usize> {
        match self.at(orientation).detail {
            BoundaryDetail::Stilt {
                compression_anchor, ..
            } => Some(compression_anchor),
            BoundaryDetail::Pivot { .. } => None,
        }
    }

    /// Tags of every anchor whose tension is within `tolerance` of the maximum.
    ///
    /// The tolerance is relative to the magnitude of the maximum tension.
    #[must_use]
    pub fn tension_ties(&self, orientation: Orientation, tolerance: f64) -> Vec<usize> {
        let max = self.at(orientation).max_tension;
        let band = tolerance * max.abs().max(f64::MIN_POSITIVE);
        self.anchors
            .iter()
            .filter(|series| (max - series.at(orientation).tension).abs() <= band)
            .map(|series| series.tag)
            .collect()
    }

    /// Governing demands over every sampled orientation.
    #[must_use]
    pub fn envelope(&self) -> Envelope {
        let pick = |extract: fn(&OrientationSummary) -> (f64, usize), larger: bool| {
            let governing = |summary: &OrientationSummary| {
                let (value, anchor) = extract(summary);
                Governing {
                    value,
                    orientation: summary.orientation,
                    anchor,
                }
            };
            // `assemble` stores every sampled orientation, so the reference one exists.
            let first = governing(self.at(Orientation::REFERENCE));
            self.orientations
                .iter()
                .skip(1)
                .map(governing)
                .fold(first, |best, next| {
                    let better = if larger {
                        next.value > best.value
                    } else {
                        next.value < best.value
                    };
                    if better {
                        next
                    } else {
                        best
                    }
                })
        };
        let compression = match self.boundary {
            BoundaryCondition::Stilt => Some(pick(
                |s| match s.detail {
                    BoundaryDetail::Stilt {
                        min_tension,
                        compression_anchor,
                        ..
                    } => (min_tension, compression_anchor),
                    BoundaryDetail::Pivot { .. } => (f64::INFINITY, 0),
                },
                false,
            )),
            BoundaryCondition::Pivot => None,
        };
        Envelope {
            tension: pick(|s| (s.max_tension, s.tension_anchor), true),
            shear: pick(|s| (s.max_shear, s.shear_anchor), true),
            compression,
        }
    }
}
