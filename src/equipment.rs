//! The equipment model tying configuration, layout and solution together.

use std::ops::Range;
use std::time::Instant;

use crate::boundary::BoundaryCondition;
use crate::errors::{AnalysisError, ConfigError, LayoutError};
use crate::geometry::Point;
use crate::layout::{AnchorLayout, GridMode};
use crate::orientation::ORIENTATION_COUNT;
use crate::records::{AnchorRecord, EquipmentRecord};
use crate::results::Solution;
use crate::seismic::EquipmentConfig;
use crate::sweep::SweepContext;

/// A piece of equipment with its anchorage and the result of its latest solve.
///
/// Editing the layout discards any previous solution; results are only
/// available between a successful [`Equipment::solve`] and the next edit.
#[derive(Clone, Debug)]
pub struct Equipment {
    /// Seismic and geometric parameters.
    config: EquipmentConfig,
    /// Footprint and anchors in the unrotated frame.
    layout: AnchorLayout,
    /// Result of the latest successful solve, if still current.
    solution: Option<Solution>,
}

impl Equipment {
    /// Create equipment with an empty layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] when a divisor parameter is not
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{Equipment, EquipmentConfig};
    ///
    /// let equipment = Equipment::new(EquipmentConfig::default()).expect("valid configuration");
    /// assert_eq!(equipment.layout().anchor_count(), 0);
    /// assert!(!equipment.is_solved());
    /// ```
    pub fn new(config: EquipmentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            layout: AnchorLayout::new(),
            solution: None,
        })
    }

    /// Create equipment from a JSON configuration.
    ///
    /// # Errors
    ///
    /// See [`EquipmentConfig::from_json`].
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Self::new(EquipmentConfig::from_json(source)?)
    }

    /// Seismic and geometric parameters.
    #[must_use]
    pub fn config(&self) -> &EquipmentConfig {
        &self.config
    }

    /// Footprint and anchors in the unrotated frame.
    #[must_use]
    pub fn layout(&self) -> &AnchorLayout {
        &self.layout
    }

    /// Name of the equipment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Append an axis-aligned rectangle to the footprint.
    ///
    /// # Errors
    ///
    /// See [`AnchorLayout::add_footprint`].
    pub fn add_footprint(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
    ) -> Result<(), LayoutError> {
        self.invalidate();
        self.layout.add_footprint(origin, width, height)
    }

    /// Append a single anchor and return its tag.
    pub fn add_anchor(&mut self, position: Point) -> usize {
        self.invalidate();
        self.layout.add_anchor(position)
    }

    /// Append a grid of anchors and return the range of new tags.
    ///
    /// # Errors
    ///
    /// See [`AnchorLayout::add_anchor_group`].
    pub fn add_anchor_group(
        &mut self,
        origin: Point,
        width: f64,
        height: f64,
        nx: usize,
        ny: usize,
        mode: GridMode,
    ) -> Result<Range<usize>, LayoutError> {
        self.invalidate();
        self.layout.add_anchor_group(origin, width, height, nx, ny, mode)
    }

    /// Sweep every orientation with the pivot or stilt model.
    ///
    /// Any earlier solution is discarded first, so a failed solve leaves the
    /// equipment unsolved.
    ///
    /// # Errors
    ///
    /// Returns the [`AnalysisError`] precondition failure of the selected model.
    ///
    /// # Examples
    /// ```
    /// use anchorx::{point, Equipment, EquipmentConfig, GridMode};
    ///
    /// let mut equipment = Equipment::new(EquipmentConfig::default()).expect("valid configuration");
    /// equipment
    ///     .add_footprint(point(0.0, 0.0), 80.0, 80.0)
    ///     .expect("valid footprint");
    /// equipment
    ///     .add_anchor_group(point(5.0, 5.0), 70.0, 70.0, 2, 2, GridMode::Perimeter)
    ///     .expect("valid grid");
    /// equipment.solve(false).expect("pivot solve");
    /// assert!(equipment.is_solved());
    /// ```
    pub fn solve(&mut self, on_stilt: bool) -> Result<(), AnalysisError> {
        self.solve_with(BoundaryCondition::from_stilt_flag(on_stilt))
    }

    /// Sweep every orientation with an explicit boundary condition.
    ///
    /// # Errors
    ///
    /// See [`Equipment::solve`].
    pub fn solve_with(&mut self, boundary: BoundaryCondition) -> Result<(), AnalysisError> {
        self.solution = None;
        log::info!(
            "solving {} ({:?}) over {} orientations",
            self.config.name,
            boundary,
            ORIENTATION_COUNT
        );
        let started = Instant::now();
        let solution = SweepContext::prepare(&self.layout, &self.config, boundary)?.run()?;
        log::info!(
            "solved {} ({:?}) with {} anchors in {:.4} s",
            self.config.name,
            boundary,
            self.layout.anchor_count(),
            started.elapsed().as_secs_f64()
        );
        self.solution = Some(solution);
        Ok(())
    }

    /// Whether results from a solve are available.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Result of the latest solve.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotSolved`] before a successful solve or after
    /// the layout has changed.
    pub fn solution(&self) -> Result<&Solution, AnalysisError> {
        self.solution.as_ref().ok_or(AnalysisError::NotSolved)
    }

    /// Equipment rows of the latest solve.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotSolved`] when no solution is current.
    pub fn equipment_records(&self) -> Result<Vec<EquipmentRecord>, AnalysisError> {
        self.solution().map(Solution::equipment_records)
    }

    /// Anchor rows of the latest solve.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotSolved`] when no solution is current.
    pub fn anchor_records(&self) -> Result<Vec<AnchorRecord>, AnalysisError> {
        self.solution().map(Solution::anchor_records)
    }

    /// Discard results that no longer describe the layout.
    fn invalidate(&mut self) {
        if self.solution.take().is_some() {
            log::debug!("layout of {} changed; discarding solution", self.config.name);
        }
    }
}
