// Owned Buffer Lifecycle
// A heap-owning value type with deep copy, move, and exactly-once release.
//
// - buffer: the OwnedBuffer type and its copy/move operations
// - error:  BufferError (allocation failure) and DemoError
// - stats:  per-thread allocation accounting
// - demo:   the demonstration driver used by the owned_buffer_demo binary

pub mod buffer;
pub mod demo;
pub mod error;
pub mod stats;

pub use buffer::{OwnedBuffer, DEFAULT_LEN};
pub use error::{BufferError, DemoError};
pub use stats::AllocationStats;
