// Allocation accounting for owned buffers.
// Counters are per thread, so tests running in parallel never see each other's buffers.
use std::cell::Cell;

thread_local! {
    static ACQUIRED: Cell<usize> = const { Cell::new(0) };
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Point-in-time view of the current thread's allocation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocationStats {
    pub acquired: usize,
    pub released: usize,
}

impl AllocationStats {
    /// Allocations acquired but not yet released.
    /// Saturates at zero when a `reset` happened while buffers were alive.
    pub fn live(&self) -> usize {
        self.acquired.saturating_sub(self.released)
    }

    /// Counter movement between an earlier snapshot and this one.
    /// Counters zeroed by `reset` in between report no movement.
    pub fn since(&self, earlier: AllocationStats) -> AllocationStats {
        AllocationStats {
            acquired: self.acquired.saturating_sub(earlier.acquired),
            released: self.released.saturating_sub(earlier.released),
        }
    }
}

/// Current counters for this thread.
pub fn snapshot() -> AllocationStats {
    AllocationStats {
        acquired: ACQUIRED.with(Cell::get),
        released: RELEASED.with(Cell::get),
    }
}

/// Zeroes this thread's counters. Buffers still alive are not forgotten by
/// the allocator, only by the accounting.
pub fn reset() {
    ACQUIRED.with(|c| c.set(0));
    RELEASED.with(|c| c.set(0));
}

pub(crate) fn record_acquire() {
    ACQUIRED.with(|c| c.set(c.get() + 1));
}

pub(crate) fn record_release() {
    RELEASED.with(|c| c.set(c.get() + 1));
}
