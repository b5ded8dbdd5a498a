//! Rotation sweep over the sampled load orientations.
//!
//! The anchor geometry is rotated while the seismic force keeps a fixed
//! direction, which is equivalent to sweeping the force around fixed geometry.
//! Each orientation depends only on the prepared [`SweepContext`], never on the
//! results of another orientation, so [`SweepContext::solve_orientation`] can be
//! evaluated in any order.

use std::time::Instant;

use crate::boundary::{BoundaryCondition, PrincipalAxes};
use crate::errors::AnalysisError;
use crate::geometry::{Footprint, Point};
use crate::layout::AnchorLayout;
use crate::orientation::Orientation;
use crate::results::{AnchorDemand, OrientationSummary, Solution};
use crate::section::{centroid, Inertia};
use crate::seismic::{EquipmentConfig, SeismicDemand};

/// Positions of every geometric entity taking part in the analysis.
///
/// The same type describes both the canonical base geometry and the rotated
/// snapshot taken at each orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseGeometry {
    /// Anchor positions indexed by tag.
    anchors: Vec<Point>,
    /// Footprint pieces of the bounding polygon.
    footprints: Vec<Footprint>,
    /// Center of resistance of the anchor group.
    anchor_centroid: Point,
    /// Plan location of the equipment's center of gravity.
    equipment_centroid: Point,
}

impl BaseGeometry {
    /// Capture the geometry of `layout`.
    ///
    /// The equipment centroid defaults to the anchor centroid unless
    /// `mass_center` overrides it.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoAnchors`] when the layout has no anchors.
    pub fn from_layout(
        layout: &AnchorLayout,
        mass_center: Option<Point>,
    ) -> Result<Self, AnalysisError> {
        let anchors: Vec<Point> = layout.anchors().iter().map(|a| a.position).collect();
        let anchor_centroid = centroid(&anchors)?;
        Ok(Self {
            anchors,
            footprints: layout.footprints().to_vec(),
            anchor_centroid,
            equipment_centroid: mass_center.unwrap_or(anchor_centroid),
        })
    }

    /// Anchor positions indexed by tag.
    #[must_use]
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// Footprint pieces of the bounding polygon.
    #[must_use]
    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    /// Center of resistance of the anchor group.
    #[must_use]
    pub fn anchor_centroid(&self) -> Point {
        self.anchor_centroid
    }

    /// Plan location of the equipment's center of gravity.
    #[must_use]
    pub fn equipment_centroid(&self) -> Point {
        self.equipment_centroid
    }

    /// Second moments of area of the anchors about their centroid.
    #[must_use]
    pub fn inertia(&self) -> Inertia {
        Inertia::about(&self.anchors, self.anchor_centroid)
    }

    /// Highest point of the bounding polygon, the pivot line of overturning.
    #[must_use]
    pub fn pivot_y(&self) -> Option<f64> {
        self.footprints.iter().map(Footprint::max_y).reduce(f64::max)
    }

    /// Snapshot of the geometry rotated counter-clockwise about the origin.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Self {
        Self {
            anchors: self.anchors.iter().map(|p| p.rotated(degrees)).collect(),
            footprints: self.footprints.iter().map(|f| f.rotated(degrees)).collect(),
            anchor_centroid: self.anchor_centroid.rotated(degrees),
            equipment_centroid: self.equipment_centroid.rotated(degrees),
        }
    }

    /// Permanently rotate the geometry onto the anchor group's principal axes.
    ///
    /// Aligning an already aligned geometry is a no-op.
    pub fn align_to_principal_axes(&mut self) -> PrincipalAxes {
        let inertia = self.inertia();
        let angle = inertia.principal_angle();
        let (imax, imin) = inertia.principal_moments();
        if angle != 0.0 {
            *self = self.rotated(angle);
        }
        PrincipalAxes { angle, imax, imin }
    }

    /// True when every anchor sits at the same point, leaving no torsional lever arm.
    pub(crate) fn anchors_coincide(&self) -> bool {
        self.anchors.iter().all(|p| *p == self.anchors[0])
    }
}

/// Everything fixed before the sweep starts.
#[derive(Clone, Debug)]
pub struct SweepContext {
    /// Canonical geometry, aligned to the principal axes in stilt mode.
    pub(crate) base: BaseGeometry,
    /// Governing seismic forces.
    pub(crate) demand: SeismicDemand,
    /// Elevation of the center of gravity.
    pub(crate) cg_z: f64,
    /// Statics model used for every orientation.
    pub(crate) boundary: BoundaryCondition,
    /// Moments of inertia of the base geometry at the reference orientation.
    pub(crate) reference: Inertia,
    /// Whether a torsional lever arm exists at all.
    pub(crate) resists_torsion: bool,
    /// Rotation applied by principal-axis alignment, stilt mode only.
    pub(crate) principal_axes: Option<PrincipalAxes>,
}

impl SweepContext {
    /// Capture the layout, derive the seismic demand and run the boundary
    /// condition's one-time preparation.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoAnchors`] for an empty layout and the
    /// boundary-condition specific precondition failures described on
    /// [`BoundaryCondition`].
    pub fn prepare(
        layout: &AnchorLayout,
        config: &EquipmentConfig,
        boundary: BoundaryCondition,
    ) -> Result<Self, AnalysisError> {
        let mut base = BaseGeometry::from_layout(layout, config.mass_center)?;
        let demand = SeismicDemand::from_config(config);
        let principal_axes = boundary.prepare(&mut base)?;
        let reference = base.inertia();

        let resists_torsion = !base.anchors_coincide();
        let eccentric = base.equipment_centroid != base.anchor_centroid;
        if !resists_torsion && eccentric && demand.horizontal != 0.0 {
            return Err(AnalysisError::UnresistedTorsion);
        }

        Ok(Self {
            base,
            demand,
            cg_z: config.cg_z,
            boundary,
            reference,
            resists_torsion,
            principal_axes,
        })
    }

    /// Geometry the sweep rotates.
    #[must_use]
    pub fn base(&self) -> &BaseGeometry {
        &self.base
    }

    /// Seismic forces applied at every orientation.
    #[must_use]
    pub fn demand(&self) -> &SeismicDemand {
        &self.demand
    }

    /// Solve one orientation from the fixed context alone.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoActiveAnchors`] when pivot mode finds no anchor
    /// below the pivot line while a net overturning moment remains.
    pub fn solve_orientation(
        &self,
        orientation: Orientation,
    ) -> Result<(OrientationSummary, Vec<AnchorDemand>), AnalysisError> {
        let snapshot = self.base.rotated(orientation.degrees());
        let inertia = snapshot.inertia();
        let shear = self.boundary.shear(self, &snapshot, &inertia, orientation);
        let tension = self.boundary.tension(self, &snapshot, orientation)?;

        let anchors = snapshot
            .anchors
            .iter()
            .zip(shear.anchors)
            .zip(tension.anchors)
            .map(|((&position, anchor_shear), (anchor_tension, detail))| AnchorDemand {
                position,
                direct_shear: anchor_shear.direct,
                torsional_shear: anchor_shear.torsional,
                shear: anchor_shear.total,
                tension: anchor_tension,
                detail,
            })
            .collect();

        let summary = OrientationSummary {
            orientation,
            inertia,
            anchor_centroid: snapshot.anchor_centroid,
            equipment_centroid: snapshot.equipment_centroid,
            footprints: snapshot.footprints,
            horizontal_force: tension.horizontal_force,
            vertical_force: tension.vertical_force,
            overturning_moment: tension.overturning_moment,
            eccentricity: shear.eccentricity,
            torsion: shear.torsion,
            max_shear: shear.max,
            shear_anchor: shear.critical,
            max_tension: tension.max,
            tension_anchor: tension.critical,
            detail: tension.detail,
        };
        Ok((summary, anchors))
    }

    /// Solve every sampled orientation in ascending order.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of [`SweepContext::solve_orientation`].
    pub fn run(self) -> Result<Solution, AnalysisError> {
        let started = Instant::now();
        let outcomes = Orientation::all()
            .map(|orientation| self.solve_orientation(orientation))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "swept {} orientations in {:.4} s",
            outcomes.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(Solution::assemble(self, outcomes))
    }
}
