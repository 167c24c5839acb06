//! Error types for gridlife_core.

use thiserror::Error;

/// Failures that prevent a simulation from being constructed.
///
/// Nothing raised during a running tick ends up here: removals of missing
/// entities and empty candidate sets are absorbed as no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The food countdown may never start above its reset value.
    #[error(
        "food generation countdown ({countdown}) must be less than or equal to its max ({max})"
    )]
    CountdownExceedsMax { countdown: u32, max: u32 },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// Result type alias for gridlife_core operations.
pub type Result<T> = std::result::Result<T, SimError>;
