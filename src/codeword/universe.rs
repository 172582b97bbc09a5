// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The codeword universe: all q^n codewords of length n in lexicographic order.
//!
//! Position 0 is the most significant symbol, so the codeword at index `i` is
//! `i` written in base q with n digits. The universe is never materialized by
//! the search; candidates are decoded from their index on demand, which keeps
//! large universes (4^12 codewords) cheap to hold.

use super::{Codeword, MAX_ALPHABET};
use crate::config::{validate_alphabet, validate_length};
use crate::error::CodeSearchError;

/// The ordered candidate pool for codewords of a given length and alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe {
    length: usize,
    alphabet: usize,
    size: usize,
}

impl Universe {
    /// Create the universe of codewords of `length` symbols over `alphabet` symbols.
    pub fn new(length: usize, alphabet: usize) -> Result<Self, CodeSearchError> {
        if alphabet == 0 || alphabet > MAX_ALPHABET {
            return Err(CodeSearchError::InvalidParameter {
                name: "q",
                value: alphabet as i64,
                reason: "alphabet size must be between 1 and 36",
            });
        }
        let mut size: usize = 1;
        for _ in 0..length {
            size = size
                .checked_mul(alphabet)
                .ok_or(CodeSearchError::UniverseTooLarge {
                    n: length,
                    q: alphabet,
                })?;
        }
        Ok(Self {
            length,
            alphabet,
            size,
        })
    }

    /// Codeword length n.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Alphabet size q.
    pub fn alphabet(&self) -> usize {
        self.alphabet
    }

    /// Number of codewords, q^n.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Never true: even n = 0 has the empty codeword.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Decode the codeword at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn codeword_at(&self, index: usize) -> Codeword {
        assert!(index < self.size, "Universe index out of range: {}", index);
        let mut symbols = vec![0u8; self.length];
        let mut rest = index;
        for slot in symbols.iter_mut().rev() {
            *slot = (rest % self.alphabet) as u8;
            rest /= self.alphabet;
        }
        Codeword(symbols)
    }

    /// Decode the codeword at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Codeword> {
        (index < self.size).then(|| self.codeword_at(index))
    }

    /// Position of `codeword` in this universe, if it belongs to it.
    pub fn index_of(&self, codeword: &Codeword) -> Option<usize> {
        if codeword.len() != self.length {
            return None;
        }
        codeword.symbols().iter().try_fold(0usize, |acc, &s| {
            ((s as usize) < self.alphabet).then(|| acc * self.alphabet + s as usize)
        })
    }

    /// Iterate all codewords in universe order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Codeword> + '_ {
        (0..self.size).map(move |i| self.codeword_at(i))
    }
}

/// Produce all q^n codewords of length n, lexicographically ordered.
///
/// Fails with `InvalidParameter` if `n < 0` or `q < 1`.
pub fn generate_codewords(n: i64, q: i64) -> Result<Vec<Codeword>, CodeSearchError> {
    let universe = Universe::new(validate_length(n)?, validate_alphabet(q)?)?;
    Ok(universe.iter().collect())
}
