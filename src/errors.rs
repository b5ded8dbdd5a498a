//! Error types produced while configuring, laying out or solving equipment anchorage.

use thiserror::Error;

/// Error returned when an equipment configuration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the load combination selector is neither `"LRFD"` nor `"ASD"`.
    #[error("load combination {0:?} not recognized; expected \"LRFD\" or \"ASD\"")]
    UnknownLoadCombination(String),
    /// Returned when a parameter used as a divisor is zero or negative.
    #[error("{field} must be positive (received {value})")]
    NonPositive {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a JSON configuration cannot be parsed.
    #[error("invalid equipment configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned when a footprint or anchor group cannot be generated.
///
/// # Examples
///
/// ```
/// use anchorx::{point, AnchorLayout, GridMode, LayoutError};
///
/// let mut layout = AnchorLayout::new();
/// let error = layout
///     .add_anchor_group(point(0.0, 0.0), 10.0, 10.0, 0, 2, GridMode::Full)
///     .expect_err("empty grid is rejected");
/// assert_eq!(error, LayoutError::EmptyGrid { nx: 0, ny: 2 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Returned when an anchor grid has no anchors along one of its axes.
    #[error("anchor grid needs at least one anchor per axis (received {nx} x {ny})")]
    EmptyGrid {
        /// Requested number of anchors along X.
        nx: usize,
        /// Requested number of anchors along Y.
        ny: usize,
    },
    /// Returned when a rectangle is given a negative or non-finite extent.
    #[error("rectangle extents must be finite and non-negative (received {width} x {height})")]
    InvalidExtent {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
}

/// Error returned when the rotation sweep cannot be carried out.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the centroid of an empty anchor group is requested.
    #[error("equipment has no anchors; add at least one anchor before solving")]
    NoAnchors,
    /// Returned when results are queried before a successful solve.
    #[error("equipment has not been solved; call solve() first")]
    NotSolved,
    /// Returned when pivot mode has no footprint to locate the pivot line.
    #[error("pivot mode requires at least one footprint")]
    NoFootprint,
    /// Returned when stilt mode is requested for collinear anchors.
    #[error("anchor group cannot resist biaxial bending (Ix = {ix}, Iy = {iy})")]
    DegenerateInertia {
        /// Moment of inertia about the principal X axis.
        ix: f64,
        /// Moment of inertia about the principal Y axis.
        iy: f64,
    },
    /// Returned when all anchors coincide but the mass center is eccentric.
    #[error("in-plane torsion cannot be resisted: polar moment of inertia is zero")]
    UnresistedTorsion,
    /// Returned when no anchor lies below the pivot line while overturning remains.
    #[error("no anchor is active below the pivot line at {degrees} degrees")]
    NoActiveAnchors {
        /// Orientation at which the failure was detected.
        degrees: f64,
    },
}
