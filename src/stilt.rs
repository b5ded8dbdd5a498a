//! Stilt mode: elevated equipment resisting overturning through anchor axial load.
//!
//! The anchor geometry stays at its principal-axis reference orientation and the
//! force direction is rotated instead. Anchor tension superposes the uniform
//! dead-load share with biaxial bending, `P/A + Mx·y/Ix + My·x/Iy`.
//!
//! Sign conventions: tension is positive, the dead load acts downward
//! (negative), and 0° applies the seismic force toward +y with the direction
//! rotating counter-clockwise. Moments follow the right-hand rule about the
//! anchor centroid.

use nalgebra::Vector2;

use crate::boundary::{arg_max, arg_min, ShearStep, TensionStep};
use crate::errors::AnalysisError;
use crate::orientation::Orientation;
use crate::results::{BoundaryDetail, TensionDetail};
use crate::section::Inertia;
use crate::sweep::SweepContext;

/// Relative size below which a principal moment of inertia counts as zero.
const INERTIA_TOLERANCE: f64 = 1.0e-12;

/// Reject anchor groups that cannot resist bending about both principal axes.
///
/// The minor principal moment vanishes for any collinear group, including a
/// diagonal line whose axis moments are both non-zero.
pub(crate) fn check_inertia(reference: &Inertia) -> Result<(), AnalysisError> {
    let floor = INERTIA_TOLERANCE * reference.iz;
    let (_, imin) = reference.principal_moments();
    if imin > floor {
        Ok(())
    } else {
        Err(AnalysisError::DegenerateInertia {
            ix: reference.ix,
            iy: reference.iy,
        })
    }
}

/// Horizontal force components at an orientation, `(Fx, Fy)`.
fn applied_force(context: &SweepContext, orientation: Orientation) -> Vector2<f64> {
    let (sin, cos) = orientation.degrees().to_radians().sin_cos();
    context.demand.horizontal * Vector2::new(-sin, cos)
}

/// Offset of the mass center from the anchor centroid in the reference geometry.
fn eccentricity(context: &SweepContext) -> Vector2<f64> {
    context
        .base
        .equipment_centroid()
        .offset_from(context.base.anchor_centroid())
}

/// Direct and torsional shear with the force rotated around fixed geometry.
pub(crate) fn shear(context: &SweepContext, orientation: Orientation) -> ShearStep {
    let center = context.base.anchor_centroid();
    ShearStep::distribute(
        applied_force(context, orientation),
        eccentricity(context),
        context.base.anchors().iter().map(|p| p.offset_from(center)),
        context.resists_torsion.then_some(context.reference.iz),
    )
}

/// Axial tension from dead load and biaxial overturning.
pub(crate) fn tension(context: &SweepContext, orientation: Orientation) -> TensionStep {
    let dead_load = context.demand.signed_dead_load();
    let offset = eccentricity(context);
    let weight_moment = Vector2::new(dead_load * offset.y, -dead_load * offset.x);

    let force = applied_force(context, orientation);
    // A force toward +y tips the top toward +y: negative moment about X.
    let overturning = Vector2::new(-force.y, force.x) * context.cg_z;
    let total_moment = weight_moment + overturning;

    let Inertia { ix, iy, .. } = context.reference;
    let center = context.base.anchor_centroid();
    let axial = dead_load / context.base.anchors().len() as f64;

    let anchors: Vec<(f64, TensionDetail)> = context
        .base
        .anchors()
        .iter()
        .map(|p| {
            let c = p.offset_from(center);
            let from_moment_x = total_moment.x * c.y / ix;
            let from_moment_y = -total_moment.y * c.x / iy;
            (
                axial + from_moment_x + from_moment_y,
                TensionDetail::Stilt {
                    offset: c,
                    from_moment_x,
                    from_moment_y,
                    axial,
                },
            )
        })
        .collect();

    let (critical, max) = arg_max(anchors.iter().map(|(t, _)| *t));
    let (compression_anchor, min_tension) = arg_min(anchors.iter().map(|(t, _)| *t));

    TensionStep {
        horizontal_force: context.demand.horizontal,
        vertical_force: dead_load,
        overturning_moment: total_moment.norm(),
        anchors,
        max,
        critical,
        detail: BoundaryDetail::Stilt {
            force,
            weight_moment,
            overturning,
            total_moment,
            min_tension,
            compression_anchor,
        },
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::boundary::BoundaryCondition;
    use crate::geometry::point;
    use crate::layout::{AnchorLayout, GridMode};
    use crate::seismic::EquipmentConfig;

    fn rectangle(config: &EquipmentConfig) -> SweepContext {
        let mut layout = AnchorLayout::new();
        layout
            .add_anchor_group(point(0.0, 0.0), 40.0, 20.0, 2, 2, GridMode::Full)
            .expect("valid grid");
        SweepContext::prepare(&layout, config, BoundaryCondition::Stilt).expect("valid model")
    }

    #[test]
    fn collinear_anchors_are_rejected() {
        let mut layout = AnchorLayout::new();
        layout
            .add_anchor_group(point(0.0, 0.0), 30.0, 30.0, 4, 1, GridMode::Full)
            .expect("valid grid");
        let error = SweepContext::prepare(
            &layout,
            &EquipmentConfig::default(),
            BoundaryCondition::Stilt,
        )
        .expect_err("line of anchors");
        assert!(matches!(error, AnalysisError::DegenerateInertia { .. }));
    }

    #[test]
    fn diagonal_line_of_anchors_is_rejected() {
        // Ix == Iy here, so no alignment happens and both axis moments stay non-zero.
        let mut layout = AnchorLayout::new();
        layout.add_anchor(point(0.0, 0.0));
        layout.add_anchor(point(10.0, 10.0));
        let error = SweepContext::prepare(
            &layout,
            &EquipmentConfig::default(),
            BoundaryCondition::Stilt,
        )
        .expect_err("diagonal line of anchors");
        assert!(matches!(error, AnalysisError::DegenerateInertia { .. }));
    }

    #[test]
    fn force_toward_positive_y_lifts_lower_anchors() {
        let config = EquipmentConfig::default();
        let context = rectangle(&config);
        let step = tension(&context, Orientation::REFERENCE);

        // Anchors at (0,0), (0,20), (40,0), (40,20); Ix = 4 × 10², cy = ±10.
        let moment = 22_200.0 * 50.0;
        let dead_load = -(0.9 - 0.2 * 1.85) * 4000.0;
        let expected = dead_load / 4.0 + moment * 10.0 / 400.0;
        assert_relative_eq!(step.max, expected, max_relative = 1.0e-9);
        assert_eq!(step.critical, 0);
        let BoundaryDetail::Stilt {
            min_tension,
            compression_anchor,
            ..
        } = step.detail
        else {
            panic!("stilt detail expected");
        };
        assert_relative_eq!(
            min_tension,
            dead_load / 4.0 - moment * 10.0 / 400.0,
            max_relative = 1.0e-9
        );
        assert_eq!(compression_anchor, 1);
    }

    #[test]
    fn force_toward_negative_x_lifts_positive_x_anchors() {
        let config = EquipmentConfig::default();
        let context = rectangle(&config);
        let step = tension(&context, Orientation::new(90).expect("sampled orientation"));

        let BoundaryDetail::Stilt {
            force,
            overturning,
            compression_anchor,
            ..
        } = step.detail
        else {
            panic!("stilt detail expected");
        };
        assert_relative_eq!(force.x, -22_200.0, max_relative = 1.0e-12);
        assert_relative_eq!(overturning.y, -22_200.0 * 50.0, max_relative = 1.0e-12);
        assert_relative_eq!(overturning.x, 0.0, epsilon = 1.0e-6);

        // Iy = 4 × 20², cx = ±20; anchors (40, 0) and (40, 20) carry the uplift.
        let dead_load = -(0.9 - 0.2 * 1.85) * 4000.0;
        let expected = dead_load / 4.0 + 22_200.0 * 50.0 * 20.0 / 1600.0;
        assert_eq!(step.critical, 2);
        assert_relative_eq!(step.max, expected, max_relative = 1.0e-9);
        assert!(compression_anchor == 0 || compression_anchor == 1);
        let TensionDetail::Stilt { from_moment_y, .. } = step.anchors[2].1 else {
            panic!("stilt detail expected");
        };
        assert_relative_eq!(from_moment_y, 13_875.0, max_relative = 1.0e-9);
    }

    #[test]
    fn eccentric_weight_relieves_anchors_under_the_mass() {
        let config = EquipmentConfig {
            mass_center: Some(point(25.0, 12.0)),
            ..EquipmentConfig::default()
        };
        let context = rectangle(&config);
        let step = tension(&context, Orientation::REFERENCE);

        let BoundaryDetail::Stilt {
            weight_moment,
            total_moment,
            ..
        } = step.detail
        else {
            panic!("stilt detail expected");
        };
        // W = -2120 acting 5 right of and 2 above the anchor centroid (20, 10).
        assert_relative_eq!(weight_moment.x, -2_120.0 * 2.0, max_relative = 1.0e-9);
        assert_relative_eq!(weight_moment.y, 2_120.0 * 5.0, max_relative = 1.0e-9);
        assert_relative_eq!(total_moment.x, -22_200.0 * 50.0 - 4_240.0, max_relative = 1.0e-9);

        // Anchor (0, 0): 1 114 240 × 10 / 400 + 10 600 × 20 / 1600 − 530.
        assert_eq!(step.critical, 0);
        assert_relative_eq!(step.max, 27_458.5, max_relative = 1.0e-9);
        assert_relative_eq!(step.anchors[2].0, 27_193.5, max_relative = 1.0e-9);
    }

    #[test]
    fn dead_load_share_sums_to_factored_weight() {
        let config = EquipmentConfig {
            mass_center: Some(point(25.0, 12.0)),
            ..EquipmentConfig::default()
        };
        let context = rectangle(&config);
        for degrees in [0, 45, 133, 270] {
            let orientation = Orientation::new(degrees).expect("sampled orientation");
            let step = tension(&context, orientation);
            let axial: f64 = step
                .anchors
                .iter()
                .map(|(_, detail)| match detail {
                    TensionDetail::Stilt { axial, .. } => *axial,
                    TensionDetail::Pivot { .. } => unreachable!(),
                })
                .sum();
            assert_relative_eq!(axial, step.vertical_force, max_relative = 1.0e-12);
            // Bending terms are self-equilibrating, so total tension also sums to W.
            let total: f64 = step.anchors.iter().map(|(t, _)| t).sum();
            assert_relative_eq!(total, step.vertical_force, max_relative = 1.0e-9);
        }
    }

    #[test]
    fn quarter_turn_moves_load_to_x_axis() {
        let context = rectangle(&EquipmentConfig::default());
        let step = shear(&context, Orientation::new(90).expect("sampled orientation"));
        // The force now points toward -x, so direct shear points toward +x.
        let direct = step.anchors[0].direct;
        assert_relative_eq!(direct.x, 22_200.0 / 4.0, max_relative = 1.0e-9);
        assert_relative_eq!(direct.y, 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(step.torsion, 0.0, epsilon = 1.0e-9);
    }
}
