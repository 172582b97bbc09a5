// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Codewords over the alphabet {0, ..., q-1}.
//!
//! A codeword is a fixed-length sequence of symbols. Symbols are stored as
//! `u8` and rendered as base-36 digits, so an alphabet may hold at most
//! [`MAX_ALPHABET`] symbols. For q <= 10 the rendering is the familiar
//! digit string (`"0120"`).
//!
//! - `universe`: the lexicographically ordered set of all q^n codewords

pub mod universe;

pub use universe::{generate_codewords, Universe};

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CodeSearchError;

/// Largest supported alphabet (one base-36 digit per symbol).
pub const MAX_ALPHABET: usize = 36;

/// An immutable sequence of symbols.
///
/// Ordering is lexicographic over the symbols, which for codewords of equal
/// length is the order of the [`Universe`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codeword(Vec<u8>);

impl Codeword {
    /// Wrap a symbol sequence.
    ///
    /// # Panics
    ///
    /// Panics if any symbol is `>= MAX_ALPHABET`.
    pub fn new(symbols: Vec<u8>) -> Self {
        assert!(
            symbols.iter().all(|&s| (s as usize) < MAX_ALPHABET),
            "Symbol out of range: {:?}",
            symbols
        );
        Self(symbols)
    }

    /// The empty codeword (the only codeword of length 0).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First symbol, or `None` for the empty codeword.
    pub fn leading_symbol(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// True when every symbol is 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.0.iter().all(|&s| s <= 1)
    }
}

impl AsRef<[u8]> for Codeword {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.0 {
            // Constructors guarantee symbol < 36.
            let digit = char::from_digit(u32::from(symbol), MAX_ALPHABET as u32).unwrap_or('?');
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for Codeword {
    type Err = CodeSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                c.to_digit(MAX_ALPHABET as u32)
                    .map(|d| d as u8)
                    .ok_or_else(|| CodeSearchError::InvalidCodeword(s.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Self)
    }
}

impl Serialize for Codeword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
