// Owned Buffer: Copy and Move Semantics over a Heap Allocation
//
// An `OwnedBuffer` exclusively owns a boxed slice of integers. Copies are deep,
// moves hand the allocation over and leave the source empty, and `Drop`
// releases the allocation exactly once.
use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::ops::{Deref, DerefMut};

use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::error::BufferError;
use crate::stats;

/// Length used when no explicit length is requested.
pub const DEFAULT_LEN: usize = 10;

/// A fixed-length sequence of `i32` on the heap with a single owner.
///
/// The empty state (length 0) owns no allocation. It is what a fresh
/// zero-length buffer looks like and what a buffer becomes after
/// [`OwnedBuffer::take`] moves its contents out.
#[derive(Debug, PartialEq, Eq)]
pub struct OwnedBuffer {
    elements: Box<[i32]>,
}

impl OwnedBuffer {
    /// Allocates `len` elements and sets element `i` to `i`.
    ///
    /// Values past `i32::MAX` wrap.
    pub fn new(len: usize) -> Result<Self, BufferError> {
        Self::try_collect(len, (0..len).map(|i| i as i32))
    }

    /// Same as `new(DEFAULT_LEN)`.
    pub fn with_default_len() -> Result<Self, BufferError> {
        Self::new(DEFAULT_LEN)
    }

    /// A buffer that owns nothing.
    pub fn empty() -> Self {
        OwnedBuffer {
            elements: Box::default(),
        }
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::try_collect(self.len(), self.elements.iter().copied())
    }

    /// Copy-assignment: replaces this buffer's contents with a copy of `source`.
    ///
    /// The new allocation is built before the old one is released, so on
    /// failure `self` is left exactly as it was.
    pub fn try_assign_from(&mut self, source: &OwnedBuffer) -> Result<(), BufferError> {
        self.replace_with(|| source.try_clone())
    }

    // Builds the replacement first; `self` is only dropped once it succeeded.
    fn replace_with<F>(&mut self, build: F) -> Result<(), BufferError>
    where
        F: FnOnce() -> Result<OwnedBuffer, BufferError>,
    {
        let fresh = build()?;
        debug!(from = self.len(), to = fresh.len(), "copy-assigning buffer");
        *self = fresh;
        Ok(())
    }

    /// Move: transfers the allocation into the returned buffer and leaves
    /// `self` empty. Never allocates.
    pub fn take(&mut self) -> OwnedBuffer {
        debug!(len = self.len(), "moving buffer");
        OwnedBuffer {
            elements: mem::take(&mut self.elements),
        }
    }

    /// Move-assignment: releases this buffer's allocation, takes over
    /// `source`'s and leaves `source` empty. Never allocates.
    pub fn move_assign(&mut self, source: &mut OwnedBuffer) {
        *self = source.take();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.elements
    }

    /// Writes the elements as one space-separated, newline-terminated line.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    fn try_collect<I>(len: usize, values: I) -> Result<Self, BufferError>
    where
        I: Iterator<Item = i32>,
    {
        let mut elements: Vec<i32> = Vec::new();
        if let Err(source) = elements.try_reserve_exact(len) {
            warn!(requested = len, error = %source, "buffer allocation failed");
            return Err(BufferError::allocation(len, source));
        }
        elements.extend(values);
        Ok(Self::adopt(elements.into_boxed_slice()))
    }

    // Takes ownership of a freshly allocated slice and accounts for it.
    fn adopt(elements: Box<[i32]>) -> Self {
        if !elements.is_empty() {
            stats::record_acquire();
            trace!(len = elements.len(), "acquired buffer");
        }
        OwnedBuffer { elements }
    }
}

impl Clone for OwnedBuffer {
    /// Infallible copy. Allocation failure aborts, like any std collection;
    /// use [`OwnedBuffer::try_clone`] to observe it instead.
    fn clone(&self) -> Self {
        Self::adopt(self.elements.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        let fresh = source.clone();
        debug!(from = self.len(), to = fresh.len(), "copy-assigning buffer");
        *self = fresh;
    }
}

impl Drop for OwnedBuffer {
    fn drop(&mut self) {
        if !self.elements.is_empty() {
            stats::record_release();
            trace!(len = self.elements.len(), "released buffer");
        }
    }
}

impl Deref for OwnedBuffer {
    type Target = [i32];
    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl DerefMut for OwnedBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elements
    }
}

impl fmt::Display for OwnedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements.iter().format(" "))
    }
}
