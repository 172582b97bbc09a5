// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hamming distance with a bit-parallel path for binary codewords.
//!
//! Binary codewords are packed into `u64` words and compared with
//! `count_ones` of the exclusive-or. Both paths agree on every pair of
//! equal-length binary inputs; the packed path is only an optimization.
//!
//! Inputs must have equal length. The unchecked functions compare the
//! common prefix only; [`checked_hamming_distance`] reports the mismatch.

use crate::codeword::Codeword;
use crate::error::CodeSearchError;

/// Position-wise comparison, valid for any alphabet.
pub fn hamming_general(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len(), "Hamming distance needs equal lengths");
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Popcount of the exclusive-or of the packed inputs.
///
/// Returns `None` unless both inputs are binary.
pub fn hamming_fast(a: &[u8], b: &[u8]) -> Option<usize> {
    debug_assert_eq!(a.len(), b.len(), "Hamming distance needs equal lengths");
    if a.iter().chain(b).any(|&s| s > 1) {
        return None;
    }
    let distance = a
        .chunks(64)
        .zip(b.chunks(64))
        .map(|(ca, cb)| (pack(ca) ^ pack(cb)).count_ones() as usize)
        .sum();
    Some(distance)
}

fn pack(bits: &[u8]) -> u64 {
    bits.iter().fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Hamming distance between two symbol sequences of equal length.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    hamming_fast(a, b).unwrap_or_else(|| hamming_general(a, b))
}

/// Hamming distance between two codewords of equal length.
pub fn calculate_hamming_distance(a: &Codeword, b: &Codeword) -> usize {
    hamming_distance(a.symbols(), b.symbols())
}

/// Hamming distance, failing on a length mismatch instead of assuming it away.
pub fn checked_hamming_distance(a: &Codeword, b: &Codeword) -> Result<usize, CodeSearchError> {
    if a.len() != b.len() {
        return Err(CodeSearchError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(calculate_hamming_distance(a, b))
}
