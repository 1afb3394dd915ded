//! Error types
//!
//! Constructor misuse is fatal (panics) on the plain constructors. The
//! `try_*` constructors, configuration parsing and checkpoint restore report
//! the same conditions through these types instead.

use thiserror::Error;

/// Invalid raw generator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("The state must not be all zeros")]
    AllZero,

    #[error("The pointer must be within 0..16 (got {0})")]
    PointerOutOfRange(usize),
}

/// Invalid generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Failure to save or restore a generator snapshot
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot holds an invalid state: {0}")]
    InvalidState(#[from] StateError),
}
