//! Equipment configuration and ASCE 7-16 component seismic demand.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::geometry::Point;

/// Load combination used to factor the seismic force and the resisting dead load.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(try_from = "String")]
pub enum LoadCombination {
    /// Strength design: dead load factor `0.9 − 0.2·Sds`.
    #[default]
    Lrfd,
    /// Allowable stress design: dead load factor `0.6 − 0.14·Sds`, seismic force × 0.7.
    Asd,
}

impl FromStr for LoadCombination {
    type Err = ConfigError;

    /// Parse the `"LRFD"` and `"ASD"` selectors.
    ///
    /// # Examples
    /// ```
    /// use anchorx::LoadCombination;
    ///
    /// assert_eq!("ASD".parse::<LoadCombination>().ok(), Some(LoadCombination::Asd));
    /// assert!("WSD".parse::<LoadCombination>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "LRFD" => Ok(Self::Lrfd),
            "ASD" => Ok(Self::Asd),
            other => Err(ConfigError::UnknownLoadCombination(other.to_owned())),
        }
    }
}

impl TryFrom<String> for LoadCombination {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LoadCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lrfd => "LRFD",
            Self::Asd => "ASD",
        })
    }
}

/// Seismic and geometric parameters of a piece of equipment.
///
/// Field names follow ASCE 7-16 chapter 13 notation. The defaults describe a
/// 4000 lb rooftop unit on a 44 ft building in a high seismic zone.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EquipmentConfig {
    /// Name or identifier of the equipment.
    pub name: String,
    /// Short period design spectral acceleration, `Sds`.
    pub sds: f64,
    /// Component importance factor, `Ip`.
    pub ip: f64,
    /// Average roof height of the structure, `h`.
    pub h: f64,
    /// Height of the point of attachment, `z`.
    pub z: f64,
    /// Component amplification factor, `ap`.
    pub ap: f64,
    /// Component response modification factor, `Rp`.
    pub rp: f64,
    /// Component overstrength factor, `Ω`.
    pub omega: f64,
    /// Operating weight of the equipment.
    pub weight: f64,
    /// Elevation of the center of gravity above the anchorage plane.
    pub cg_z: f64,
    /// Plan location of the center of gravity; the anchor centroid when omitted.
    pub mass_center: Option<Point>,
    /// Load combination applied to the demands.
    pub load_combination: LoadCombination,
    /// Use the overstrength-level force `Emh` instead of `Fp`.
    pub use_omega: bool,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            name: String::from("equipment"),
            sds: 1.85,
            ip: 1.0,
            h: 44.0,
            z: 44.0,
            ap: 2.5,
            rp: 2.0,
            omega: 2.0,
            weight: 4000.0,
            cg_z: 50.0,
            mass_center: None,
            load_combination: LoadCombination::Lrfd,
            use_omega: true,
        }
    }
}

impl EquipmentConfig {
    /// Parse a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, including unknown load
    /// combination selectors, and [`ConfigError::NonPositive`] when a divisor
    /// field is not strictly positive.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{EquipmentConfig, LoadCombination};
    ///
    /// let config = EquipmentConfig::from_json(r#"{"name": "AHU4", "load_combination": "ASD"}"#)
    ///     .expect("valid configuration");
    /// assert_eq!(config.load_combination, LoadCombination::Asd);
    /// assert!(EquipmentConfig::from_json(r#"{"load_combination": "ULS"}"#).is_err());
    /// ```
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parameters that appear as divisors in the force equations.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("h", self.h), ("rp", self.rp), ("ip", self.ip)] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Factored forces derived from an [`EquipmentConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeismicDemand {
    /// Governing seismic coefficient `Fp / Wp` after clamping and ASD scaling.
    pub fp: f64,
    /// Overstrength-level coefficient `Ω · Fp / Wp`.
    pub emh: f64,
    /// Dead load factor of the selected load combination.
    pub weight_factor: f64,
    /// Governing horizontal force.
    pub horizontal: f64,
    /// Factored dead load resisting overturning, positive.
    pub vertical: f64,
}

impl SeismicDemand {
    /// Evaluate ASCE 7-16 equations 13.3-1 to 13.3-3 for the configuration.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{EquipmentConfig, SeismicDemand};
    ///
    /// let demand = SeismicDemand::from_config(&EquipmentConfig::default());
    /// // Fp = 2.775 lies inside its bounds; with Ω = 2 the force is 2 × 2.775 × 4000 lb.
    /// assert!((demand.horizontal - 22_200.0).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn from_config(config: &EquipmentConfig) -> Self {
        let fp = 0.4 * config.ap * config.sds / (config.rp / config.ip)
            * (1.0 + 2.0 * config.z / config.h);
        let fp_max = 1.6 * config.sds * config.ip;
        let fp_min = 0.3 * config.sds * config.ip;
        let fp = fp.clamp(fp_min, fp_max);

        let (fp, weight_factor) = match config.load_combination {
            LoadCombination::Lrfd => (fp, 0.9 - 0.2 * config.sds),
            LoadCombination::Asd => (0.7 * fp, 0.6 - 0.7 * 0.2 * config.sds),
        };
        let emh = fp * config.omega;
        let coefficient = if config.use_omega { emh } else { fp };

        let demand = Self {
            fp,
            emh,
            weight_factor,
            horizontal: coefficient * config.weight,
            vertical: weight_factor * config.weight,
        };
        log::debug!(
            "{}: Fp = {:.4}, Emh = {:.4}, dead load factor = {:.4} ({})",
            config.name,
            demand.fp,
            demand.emh,
            demand.weight_factor,
            config.load_combination
        );
        demand
    }

    /// Dead load with the sign convention of the stilt model, downward negative.
    #[must_use]
    pub fn signed_dead_load(&self) -> f64 {
        -self.vertical
    }
}
