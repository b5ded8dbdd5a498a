#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod boundary;
pub mod equipment;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod orientation;
mod pivot;
pub mod records;
pub mod results;
pub mod section;
pub mod seismic;
mod stilt;
pub mod sweep;

pub use boundary::{BoundaryCondition, PrincipalAxes};
pub use equipment::Equipment;
pub use errors::{AnalysisError, ConfigError, LayoutError};
pub use geometry::{point, Footprint, Point};
pub use layout::{Anchor, AnchorLayout, GridMode};
pub use orientation::{Orientation, ORIENTATION_COUNT, STEP_DEGREES};
pub use records::{AnchorRecord, EquipmentRecord};
pub use results::{
    AnchorDemand, AnchorSeries, BoundaryDetail, Envelope, Governing, OrientationSummary,
    Solution, TensionDetail,
};
pub use section::{centroid, Inertia};
pub use seismic::{EquipmentConfig, LoadCombination, SeismicDemand};
pub use sweep::{BaseGeometry, SweepContext};
