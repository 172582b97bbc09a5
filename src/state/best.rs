// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Best-found accumulator.

use crate::codeword::Codeword;

/// The largest valid code seen so far.
///
/// Only ever replaced by a strictly larger code, so its size never decreases
/// and among equally large codes the first one offered wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestFound {
    code: Vec<Codeword>,
}

impl BestFound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `candidate` in if it is strictly larger. Returns true on replacement.
    pub fn offer(&mut self, candidate: &[Codeword]) -> bool {
        if candidate.len() > self.code.len() {
            self.code = candidate.to_vec();
            true
        } else {
            false
        }
    }

    /// Take `other` if it is strictly larger. Returns true on replacement.
    pub fn merge(&mut self, other: BestFound) -> bool {
        if other.code.len() > self.code.len() {
            self.code = other.code;
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn code(&self) -> &[Codeword] {
        &self.code
    }

    pub fn into_code(self) -> Vec<Codeword> {
        self.code
    }
}
