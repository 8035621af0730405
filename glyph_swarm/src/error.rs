//! Error types for the swarm core.
//!
//! Per-frame work never fails; only construction and configuration do.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    /// A configuration constant is outside its usable range.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SwarmError>;
