#![warn(clippy::pedantic)]

use anchorx::{
    point, BoundaryDetail, Equipment, GridMode, Orientation, TensionDetail, ORIENTATION_COUNT,
};
use approx::assert_relative_eq;

const AHU4: &str = r#"{
    "name": "AHU4",
    "sds": 1.85,
    "ip": 1.0,
    "h": 44.0,
    "z": 44.0,
    "ap": 2.5,
    "rp": 2.0,
    "omega": 2.0,
    "weight": 3500.0,
    "cg_z": 64.0,
    "mass_center": {"x": 40.0, "y": 85.0},
    "load_combination": "LRFD",
    "use_omega": true
}"#;

/// L-shaped air handler with a mixed anchor arrangement.
fn air_handler() -> Equipment {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut equipment = Equipment::from_json(AHU4).expect("valid configuration");
    equipment
        .add_footprint(point(0.0, 0.0), 60.0, 120.0)
        .expect("valid footprint");
    equipment
        .add_footprint(point(60.0, 60.0), 60.0, 60.0)
        .expect("valid footprint");
    equipment
        .add_anchor_group(point(5.0, 5.0), 50.0, 110.0, 2, 3, GridMode::Perimeter)
        .expect("valid grid");
    equipment
        .add_anchor_group(point(65.0, 65.0), 50.0, 50.0, 2, 2, GridMode::Perimeter)
        .expect("valid grid");
    for position in [
        point(30.0, -5.0),
        point(30.0, 125.0),
        point(90.0, 55.0),
        point(90.0, 125.0),
    ] {
        equipment.add_anchor(position);
    }
    equipment
}

#[test]
fn layout_matches_drawing() {
    let equipment = air_handler();
    assert_eq!(equipment.name(), "AHU4");
    assert_eq!(equipment.layout().anchor_count(), 14);
    assert_eq!(equipment.layout().footprints().len(), 2);
}

#[test]
fn stilt_alignment_works_on_a_copy() {
    let mut equipment = air_handler();
    equipment.solve(true).expect("stilt solve");
    let solution = equipment.solution().expect("solved");

    let axes = solution.principal_axes().expect("stilt mode aligns");
    assert!((0.0..90.0).contains(&axes.angle));
    assert!(axes.imax >= axes.imin);

    let aligned = solution.base().inertia();
    assert!(aligned.ixy.abs() <= 1.0e-9 * aligned.iz);
    assert_relative_eq!(aligned.iz, axes.imax + axes.imin, max_relative = 1.0e-9);

    // The caller's layout keeps its drawing coordinates.
    assert_eq!(equipment.layout().anchors()[0].position, point(5.0, 5.0));
    let mut realigned = solution.base().clone();
    assert_eq!(realigned.align_to_principal_axes().angle, 0.0);
}

#[test]
fn stilt_anchor_loads_carry_the_dead_load() {
    let mut equipment = air_handler();
    equipment.solve(true).expect("stilt solve");
    let solution = equipment.solution().expect("solved");

    for summary in solution.orientations() {
        assert!(summary.vertical_force < 0.0);
        let total: f64 = solution
            .anchors()
            .iter()
            .map(|series| series.at(summary.orientation).tension)
            .sum();
        assert_relative_eq!(total, summary.vertical_force, max_relative = 1.0e-9);

        let BoundaryDetail::Stilt {
            min_tension,
            total_moment,
            ..
        } = summary.detail
        else {
            panic!("stilt detail expected");
        };
        assert!(min_tension < 0.0);
        assert!(min_tension <= summary.max_tension);
        assert_relative_eq!(
            summary.overturning_moment,
            total_moment.norm(),
            max_relative = 1.0e-12
        );
    }

    let envelope = solution.envelope();
    let compression = envelope.compression.expect("stilt mode reports compression");
    assert!(compression.value < envelope.tension.value);
}

#[test]
fn eccentric_mass_adds_torsional_shear() {
    let mut equipment = air_handler();
    equipment.solve(false).expect("pivot solve");
    let solution = equipment.solution().expect("solved");
    let summary = solution.at(Orientation::REFERENCE);
    let direct = summary.horizontal_force / 14.0;
    assert!(summary.torsion.abs() > 0.0);
    assert!(summary.max_shear > direct);
    assert!(solution.envelope().shear.value >= summary.max_shear);
}

#[test]
fn pivot_tension_closes_statics() {
    let mut equipment = air_handler();
    equipment.solve(false).expect("pivot solve");
    let solution = equipment.solution().expect("solved");
    for summary in solution.orientations() {
        let BoundaryDetail::Pivot { net_moment, .. } = summary.detail else {
            panic!("pivot detail expected");
        };
        let closure: f64 = solution
            .anchors()
            .iter()
            .map(|series| {
                let demand = series.at(summary.orientation);
                match demand.detail {
                    TensionDetail::Pivot { lever_arm } => demand.tension * lever_arm,
                    TensionDetail::Stilt { .. } => panic!("pivot detail expected"),
                }
            })
            .sum();
        assert_relative_eq!(closure, net_moment, max_relative = 1.0e-9, epsilon = 1.0e-6);
    }
}

#[test]
fn pivot_records_expose_pivot_columns() {
    let mut equipment = air_handler();
    equipment.solve(false).expect("pivot solve");

    let rows = equipment.equipment_records().expect("solved");
    assert_eq!(rows.len(), ORIENTATION_COUNT);
    let row = serde_json::to_value(&rows[0]).expect("serializable");
    for key in ["degree", "Fp", "W", "Mot", "Mr", "Mnet", "dmax", "Tmax", "Vmax", "Ixy"] {
        assert!(row.get(key).is_some(), "missing {key}");
    }
    for key in ["Fp_x", "Mw_x", "Cmax", "C_anchor"] {
        assert!(row.get(key).is_none(), "unexpected {key}");
    }

    let anchors = equipment.anchor_records().expect("solved");
    assert_eq!(anchors.len(), 14 * ORIENTATION_COUNT);
    assert_eq!(anchors[ORIENTATION_COUNT].anchor, 1);
    assert_eq!(anchors[ORIENTATION_COUNT].degree, 0.0);
    let row = serde_json::to_value(&anchors[0]).expect("serializable");
    assert!(row.get("d").is_some());
    assert!(row.get("V_total").is_some());
    assert!(row.get("Ta").is_none());
}

#[test]
fn stilt_records_expose_stilt_columns() {
    let mut equipment = air_handler();
    equipment.solve(true).expect("stilt solve");

    let rows = equipment.equipment_records().expect("solved");
    let row = serde_json::to_value(&rows[45]).expect("serializable");
    assert_eq!(row["degree"], 45.0);
    for key in ["Fp_x", "Fp_y", "Mot_x", "Mw_y", "Mtotal_x", "Cmax", "C_anchor"] {
        assert!(row.get(key).is_some(), "missing {key}");
    }
    for key in ["Mr", "Mnet", "dmax", "pivot_y"] {
        assert!(row.get(key).is_none(), "unexpected {key}");
    }

    let anchors = equipment.anchor_records().expect("solved");
    let row = serde_json::to_value(&anchors[0]).expect("serializable");
    for key in ["cx", "cy", "T_x", "T_y", "Ta", "T_total"] {
        assert!(row.get(key).is_some(), "missing {key}");
    }
    assert!(row.get("d").is_none());
}
