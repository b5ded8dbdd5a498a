//! Pivot mode: overturning about the footprint edge.
//!
//! The equipment is assumed to tip about the highest line of its rotated
//! footprint, with the force always acting toward +y in the rotated frame. The
//! concrete bearing block is taken to be negligibly deep, so anchors behave as a
//! rigid plane about the pivot line and their tension is proportional to their
//! distance from it. This is only reasonable for footprints that are large
//! compared with the anchor spacing.

use nalgebra::Vector2;

use crate::boundary::{arg_max, ShearStep, TensionStep};
use crate::errors::AnalysisError;
use crate::orientation::Orientation;
use crate::results::{BoundaryDetail, TensionDetail};
use crate::section::Inertia;
use crate::sweep::{BaseGeometry, SweepContext};

/// Direct and torsional shear with the force along the rotated +y axis.
pub(crate) fn shear(
    context: &SweepContext,
    snapshot: &BaseGeometry,
    inertia: &Inertia,
) -> ShearStep {
    let center = snapshot.anchor_centroid();
    let eccentricity_x = snapshot.equipment_centroid().x - center.x;
    ShearStep::distribute(
        Vector2::new(0.0, context.demand.horizontal),
        Vector2::new(eccentricity_x, 0.0),
        snapshot.anchors().iter().map(|p| p.offset_from(center)),
        context.resists_torsion.then_some(inertia.iz),
    )
}

/// Tension by similar triangles about the pivot line.
pub(crate) fn tension(
    context: &SweepContext,
    snapshot: &BaseGeometry,
    orientation: Orientation,
) -> Result<TensionStep, AnalysisError> {
    let pivot_y = snapshot.pivot_y().ok_or(AnalysisError::NoFootprint)?;
    // Anchors above the pivot line are inactive.
    let lever_arms: Vec<f64> = snapshot
        .anchors()
        .iter()
        .map(|p| (pivot_y - p.y).max(0.0))
        .collect();
    let (critical, max_lever_arm) = arg_max(lever_arms.iter().copied());

    let horizontal = context.demand.horizontal;
    let vertical = context.demand.vertical;
    let overturning_moment = horizontal * context.cg_z;
    let resisting_moment = vertical * (pivot_y - snapshot.equipment_centroid().y).abs();
    let net_moment = (overturning_moment - resisting_moment).max(0.0);

    let max_tension = if max_lever_arm > 0.0 {
        let stiffness: f64 = lever_arms.iter().map(|d| d * d / max_lever_arm).sum();
        net_moment / stiffness
    } else if net_moment > 0.0 {
        return Err(AnalysisError::NoActiveAnchors {
            degrees: orientation.degrees(),
        });
    } else {
        0.0
    };

    let anchors = lever_arms
        .iter()
        .map(|&lever_arm| {
            let tension = if max_lever_arm > 0.0 {
                lever_arm / max_lever_arm * max_tension
            } else {
                0.0
            };
            (tension, TensionDetail::Pivot { lever_arm })
        })
        .collect();

    Ok(TensionStep {
        horizontal_force: horizontal,
        vertical_force: vertical,
        overturning_moment,
        anchors,
        max: max_tension,
        critical,
        detail: BoundaryDetail::Pivot {
            pivot_y,
            resisting_moment,
            net_moment,
            max_lever_arm,
        },
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::boundary::BoundaryCondition;
    use crate::geometry::point;
    use crate::layout::{AnchorLayout, GridMode};
    use crate::seismic::EquipmentConfig;

    fn square_pad(config: &EquipmentConfig) -> SweepContext {
        let mut layout = AnchorLayout::new();
        layout
            .add_footprint(point(0.0, 0.0), 80.0, 80.0)
            .expect("valid footprint");
        layout
            .add_anchor_group(point(5.0, 5.0), 70.0, 70.0, 2, 2, GridMode::Perimeter)
            .expect("valid grid");
        SweepContext::prepare(&layout, config, BoundaryCondition::Pivot).expect("valid model")
    }

    #[test]
    fn reference_orientation_matches_hand_calculation() {
        let config = EquipmentConfig::default();
        let context = square_pad(&config);
        let snapshot = context.base().rotated(0.0);
        let step = tension(&context, &snapshot, Orientation::REFERENCE).expect("solvable");

        // Fh = 2 × 2.775 × 4000 = 22 200; Fv = (0.9 − 0.37) × 4000 = 2 120.
        let mot = 22_200.0 * 50.0;
        let mr = 2_120.0 * 40.0;
        let mnet = mot - mr;
        // Lever arms 75, 5, 75, 5 (anchors at y = 5, 75, 5, 75).
        let stiffness = 2.0 * (75.0 * 75.0 + 5.0 * 5.0) / 75.0;
        assert_relative_eq!(step.overturning_moment, mot, max_relative = 1.0e-12);
        assert_relative_eq!(step.max, mnet / stiffness, max_relative = 1.0e-9);
        assert_eq!(step.critical, 0);

        let BoundaryDetail::Pivot { net_moment, .. } = step.detail else {
            panic!("pivot detail expected");
        };
        let closure: f64 = step
            .anchors
            .iter()
            .map(|(t, detail)| match detail {
                TensionDetail::Pivot { lever_arm } => t * lever_arm,
                TensionDetail::Stilt { .. } => unreachable!(),
            })
            .sum();
        assert_relative_eq!(closure, net_moment, max_relative = 1.0e-9);
    }

    #[test]
    fn dead_load_can_cancel_overturning() {
        let config = EquipmentConfig {
            cg_z: 1.0,
            ..EquipmentConfig::default()
        };
        let context = square_pad(&config);
        let snapshot = context.base().rotated(0.0);
        let step = tension(&context, &snapshot, Orientation::REFERENCE).expect("solvable");
        assert_eq!(step.max, 0.0);
        assert!(step.anchors.iter().all(|(t, _)| *t == 0.0));
    }

    #[test]
    fn anchors_on_pivot_line_cannot_resist_overturning() {
        let mut layout = AnchorLayout::new();
        layout
            .add_footprint(point(0.0, 0.0), 10.0, 10.0)
            .expect("valid footprint");
        layout.add_anchor(point(2.0, 10.0));
        layout.add_anchor(point(8.0, 10.0));
        let context = SweepContext::prepare(
            &layout,
            &EquipmentConfig::default(),
            BoundaryCondition::Pivot,
        )
        .expect("valid model");
        let snapshot = context.base().rotated(0.0);
        assert_eq!(
            tension(&context, &snapshot, Orientation::REFERENCE).map(|step| step.max),
            Err(AnalysisError::NoActiveAnchors { degrees: 0.0 })
        );
    }

    #[test]
    fn eccentric_mass_adds_torsion() {
        let config = EquipmentConfig {
            mass_center: Some(point(50.0, 40.0)),
            ..EquipmentConfig::default()
        };
        let context = square_pad(&config);
        let snapshot = context.base().rotated(0.0);
        let step = shear(&context, &snapshot, &snapshot.inertia());
        assert_relative_eq!(step.eccentricity.x, 10.0);
        assert_relative_eq!(step.torsion, 22_200.0 * 10.0, max_relative = 1.0e-12);
        // Anchors right of the centroid see both shear components downward.
        let right = &step.anchors[2];
        assert!(right.torsional.y < 0.0);
        assert!(step.max > 22_200.0 / 4.0);
        assert!(step.critical == 2 || step.critical == 3);
    }
}
