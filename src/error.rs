// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for code search.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeSearchError {
    /// A search parameter is out of its permitted range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// q^n does not fit in the address space.
    #[error("universe of {q}^{n} codewords is too large")]
    UniverseTooLarge { n: usize, q: usize },

    /// Text that does not parse as a codeword.
    #[error("invalid codeword: {0}")]
    InvalidCodeword(String),

    /// Hamming distance requested between codewords of different lengths.
    #[error("codeword lengths differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Brute-force enumeration refused because the universe is too big.
    #[error("brute force over {size} codewords exceeds limit of {limit}")]
    SearchSpaceTooLarge { size: usize, limit: usize },
}
