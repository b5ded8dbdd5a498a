//! Flat export rows for tabular consumers of a [`Solution`].
//!
//! Column names match the headers used by the plotting and CSV tooling. Columns
//! that only exist for one boundary condition are `None` otherwise and are left
//! out when serialized.

use serde::Serialize;

use crate::results::{BoundaryDetail, Solution, TensionDetail};

/// One row per orientation with the equipment-level aggregates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EquipmentRecord {
    /// Orientation in degrees.
    pub degree: f64,
    /// Governing horizontal force.
    #[serde(rename = "Fp")]
    pub horizontal_force: f64,
    /// Factored dead load.
    #[serde(rename = "W")]
    pub vertical_force: f64,
    /// Overturning moment.
    #[serde(rename = "Mot")]
    pub overturning_moment: f64,
    /// Resisting dead-load moment (pivot).
    #[serde(rename = "Mr", skip_serializing_if = "Option::is_none")]
    pub resisting_moment: Option<f64>,
    /// Net moment resisted by anchors (pivot).
    #[serde(rename = "Mnet", skip_serializing_if = "Option::is_none")]
    pub net_moment: Option<f64>,
    /// Pivot line elevation (pivot).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_y: Option<f64>,
    /// Largest lever arm (pivot).
    #[serde(rename = "dmax", skip_serializing_if = "Option::is_none")]
    pub max_lever_arm: Option<f64>,
    /// Force component along X (stilt).
    #[serde(rename = "Fp_x", skip_serializing_if = "Option::is_none")]
    pub force_x: Option<f64>,
    /// Force component along Y (stilt).
    #[serde(rename = "Fp_y", skip_serializing_if = "Option::is_none")]
    pub force_y: Option<f64>,
    /// Overturning moment about X (stilt).
    #[serde(rename = "Mot_x", skip_serializing_if = "Option::is_none")]
    pub overturning_x: Option<f64>,
    /// Overturning moment about Y (stilt).
    #[serde(rename = "Mot_y", skip_serializing_if = "Option::is_none")]
    pub overturning_y: Option<f64>,
    /// Weight moment about X (stilt).
    #[serde(rename = "Mw_x", skip_serializing_if = "Option::is_none")]
    pub weight_moment_x: Option<f64>,
    /// Weight moment about Y (stilt).
    #[serde(rename = "Mw_y", skip_serializing_if = "Option::is_none")]
    pub weight_moment_y: Option<f64>,
    /// Total moment about X (stilt).
    #[serde(rename = "Mtotal_x", skip_serializing_if = "Option::is_none")]
    pub total_moment_x: Option<f64>,
    /// Total moment about Y (stilt).
    #[serde(rename = "Mtotal_y", skip_serializing_if = "Option::is_none")]
    pub total_moment_y: Option<f64>,
    /// Mass-center offset along X.
    pub ecc_x: f64,
    /// Mass-center offset along Y.
    pub ecc_y: f64,
    /// In-plane torsion.
    pub torsion: f64,
    /// Largest anchor tension.
    #[serde(rename = "Tmax")]
    pub max_tension: f64,
    /// Smallest anchor tension (stilt).
    #[serde(rename = "Cmax", skip_serializing_if = "Option::is_none")]
    pub min_tension: Option<f64>,
    /// Largest anchor shear.
    #[serde(rename = "Vmax")]
    pub max_shear: f64,
    /// Anchor with the largest tension.
    #[serde(rename = "T_anchor")]
    pub tension_anchor: usize,
    /// Anchor with the smallest tension (stilt).
    #[serde(rename = "C_anchor", skip_serializing_if = "Option::is_none")]
    pub compression_anchor: Option<usize>,
    /// Anchor with the largest shear.
    #[serde(rename = "V_anchor")]
    pub shear_anchor: usize,
    /// Rotated mass center X.
    pub equip_xo: f64,
    /// Rotated mass center Y.
    pub equip_yo: f64,
    /// Rotated anchor centroid X.
    pub anchor_xo: f64,
    /// Rotated anchor centroid Y.
    pub anchor_yo: f64,
    /// Moment of inertia about X.
    #[serde(rename = "Ix")]
    pub ix: f64,
    /// Moment of inertia about Y.
    #[serde(rename = "Iy")]
    pub iy: f64,
    /// Polar moment of inertia.
    #[serde(rename = "Iz")]
    pub iz: f64,
    /// Product of inertia.
    #[serde(rename = "Ixy")]
    pub ixy: f64,
}

/// One row per anchor and orientation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnchorRecord {
    /// Anchor tag.
    pub anchor: usize,
    /// Orientation in degrees.
    pub degree: f64,
    /// Rotated anchor X.
    pub x: f64,
    /// Rotated anchor Y.
    pub y: f64,
    /// Lever arm to the pivot line (pivot).
    #[serde(rename = "d", skip_serializing_if = "Option::is_none")]
    pub lever_arm: Option<f64>,
    /// Direct shear along X.
    #[serde(rename = "V_dx")]
    pub direct_x: f64,
    /// Direct shear along Y.
    #[serde(rename = "V_dy")]
    pub direct_y: f64,
    /// Torsional shear along X.
    #[serde(rename = "V_tx")]
    pub torsional_x: f64,
    /// Torsional shear along Y.
    #[serde(rename = "V_ty")]
    pub torsional_y: f64,
    /// Total shear.
    #[serde(rename = "V_total")]
    pub shear: f64,
    /// Offset from the anchor centroid along X (stilt).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cx: Option<f64>,
    /// Offset from the anchor centroid along Y (stilt).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cy: Option<f64>,
    /// Tension from the moment about X (stilt).
    #[serde(rename = "T_x", skip_serializing_if = "Option::is_none")]
    pub from_moment_x: Option<f64>,
    /// Tension from the moment about Y (stilt).
    #[serde(rename = "T_y", skip_serializing_if = "Option::is_none")]
    pub from_moment_y: Option<f64>,
    /// Dead-load share (stilt).
    #[serde(rename = "Ta", skip_serializing_if = "Option::is_none")]
    pub axial: Option<f64>,
    /// Total tension.
    #[serde(rename = "T_total")]
    pub tension: f64,
}

impl Solution {
    /// Equipment rows in orientation order.
    #[must_use]
    pub fn equipment_records(&self) -> Vec<EquipmentRecord> {
        self.orientations()
            .iter()
            .map(|s| {
                let mut record = EquipmentRecord {
                    degree: s.orientation.degrees(),
                    horizontal_force: s.horizontal_force,
                    vertical_force: s.vertical_force,
                    overturning_moment: s.overturning_moment,
                    resisting_moment: None,
                    net_moment: None,
                    pivot_y: None,
                    max_lever_arm: None,
                    force_x: None,
                    force_y: None,
                    overturning_x: None,
                    overturning_y: None,
                    weight_moment_x: None,
                    weight_moment_y: None,
                    total_moment_x: None,
                    total_moment_y: None,
                    ecc_x: s.eccentricity.x,
                    ecc_y: s.eccentricity.y,
                    torsion: s.torsion,
                    max_tension: s.max_tension,
                    min_tension: None,
                    max_shear: s.max_shear,
                    tension_anchor: s.tension_anchor,
                    compression_anchor: None,
                    shear_anchor: s.shear_anchor,
                    equip_xo: s.equipment_centroid.x,
                    equip_yo: s.equipment_centroid.y,
                    anchor_xo: s.anchor_centroid.x,
                    anchor_yo: s.anchor_centroid.y,
                    ix: s.inertia.ix,
                    iy: s.inertia.iy,
                    iz: s.inertia.iz,
                    ixy: s.inertia.ixy,
                };
                match s.detail {
                    BoundaryDetail::Pivot {
                        pivot_y,
                        resisting_moment,
                        net_moment,
                        max_lever_arm,
                    } => {
                        record.pivot_y = Some(pivot_y);
                        record.resisting_moment = Some(resisting_moment);
                        record.net_moment = Some(net_moment);
                        record.max_lever_arm = Some(max_lever_arm);
                    }
                    BoundaryDetail::Stilt {
                        force,
                        weight_moment,
                        overturning,
                        total_moment,
                        min_tension,
                        compression_anchor,
                    } => {
                        record.force_x = Some(force.x);
                        record.force_y = Some(force.y);
                        record.overturning_x = Some(overturning.x);
                        record.overturning_y = Some(overturning.y);
                        record.weight_moment_x = Some(weight_moment.x);
                        record.weight_moment_y = Some(weight_moment.y);
                        record.total_moment_x = Some(total_moment.x);
                        record.total_moment_y = Some(total_moment.y);
                        record.min_tension = Some(min_tension);
                        record.compression_anchor = Some(compression_anchor);
                    }
                }
                record
            })
            .collect()
    }

    /// Anchor rows grouped by anchor, each in orientation order.
    #[must_use]
    pub fn anchor_records(&self) -> Vec<AnchorRecord> {
        self.anchors()
            .iter()
            .flat_map(|series| {
                series
                    .demands()
                    .iter()
                    .zip(self.orientations())
                    .map(move |(demand, summary)| {
                        let mut record = AnchorRecord {
                            anchor: series.tag,
                            degree: summary.orientation.degrees(),
                            x: demand.position.x,
                            y: demand.position.y,
                            lever_arm: None,
                            direct_x: demand.direct_shear.x,
                            direct_y: demand.direct_shear.y,
                            torsional_x: demand.torsional_shear.x,
                            torsional_y: demand.torsional_shear.y,
                            shear: demand.shear,
                            cx: None,
                            cy: None,
                            from_moment_x: None,
                            from_moment_y: None,
                            axial: None,
                            tension: demand.tension,
                        };
                        match demand.detail {
                            TensionDetail::Pivot { lever_arm } => {
                                record.lever_arm = Some(lever_arm);
                            }
                            TensionDetail::Stilt {
                                offset,
                                from_moment_x,
                                from_moment_y,
                                axial,
                            } => {
                                record.cx = Some(offset.x);
                                record.cy = Some(offset.y);
                                record.from_moment_x = Some(from_moment_x);
                                record.from_moment_y = Some(from_moment_y);
                                record.axial = Some(axial);
                            }
                        }
                        record
                    })
            })
            .collect()
    }
}
