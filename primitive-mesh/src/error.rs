//! Error type for mesh generation and upload

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A generator parameter would divide by zero or sample nothing.
    #[error("invalid {shape} argument: {reason}")]
    InvalidArgument {
        shape: &'static str,
        reason: String,
    },
    /// An attribute array is too long to address with 32-bit counts.
    #[error("{what} count {count} exceeds u32::MAX")]
    CountOverflow { what: &'static str, count: usize },
    /// The GPU backend rejected an allocation or upload.
    #[error("GPU backend error: {0}")]
    Backend(String),
}

impl MeshError {
    pub(crate) fn invalid(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            shape,
            reason: reason.into(),
        }
    }
}
