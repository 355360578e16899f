//! Frame-rate-independent zoom toward a moving target.

pub mod engine;
pub mod limits;
pub mod precision;
pub mod request;

pub use engine::{ZoomOutcome, advance, effective_speed, normalized_speed};
pub use limits::ZoomLimits;
pub use precision::{ParsePrecisionError, PrecisionMode};
pub use request::{TimingMode, ZoomRequest};
