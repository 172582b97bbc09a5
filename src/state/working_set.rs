// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The working set: codewords accepted along the current branch.
//!
//! The working set doubles as the search trail. A checkpoint is just its
//! length, and rewinding truncates back to it, so popping a tentative choice
//! on backtrack is O(1).
//!
//! Invariants (checked in debug builds):
//! - universe indices are strictly increasing in insertion order
//! - only `push` and `rewind_to` mutate it

use crate::codeword::Codeword;

#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    /// Universe index of each accepted codeword.
    indices: Vec<usize>,
    /// The accepted codewords, decoded once on acceptance.
    codewords: Vec<Codeword>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tentatively accept `codeword`, found at `index` in the universe.
    pub fn push(&mut self, index: usize, codeword: Codeword) {
        debug_assert!(
            self.indices.last().map_or(true, |&last| index > last),
            "Working set must grow in universe order: {} after {:?}",
            index,
            self.indices.last()
        );
        self.indices.push(index);
        self.codewords.push(codeword);
    }

    /// Current position, to rewind to later.
    pub fn checkpoint(&self) -> usize {
        self.indices.len()
    }

    /// Undo every push made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.indices.truncate(checkpoint);
        self.codewords.truncate(checkpoint);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Universe index of the most recently accepted codeword.
    pub fn last_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// First universe index still open to this branch.
    pub fn next_candidate(&self) -> usize {
        self.last_index().map_or(0, |last| last + 1)
    }

    pub fn codewords(&self) -> &[Codeword] {
        &self.codewords
    }
}
