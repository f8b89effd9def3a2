//! Error types for owned buffers and the demonstration driver.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// The only way a buffer operation can fail: the allocator refused the request.
///
/// Raised by construction, copy and copy-assignment. Moves never allocate and
/// so never produce this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("failed to allocate {requested} elements: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl BufferError {
    /// Wraps a failed reservation of `requested` elements.
    pub fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }

    /// Number of elements that could not be allocated.
    pub fn requested(&self) -> usize {
        match self {
            Self::Allocation { requested, .. } => *requested,
        }
    }
}

/// Errors surfaced while running the demonstration.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("buffer operation failed: {0}")]
    Buffer(#[from] BufferError),
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),
}
