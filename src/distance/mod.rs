// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distance oracles and code validity.
//!
//! - `edit`: Levenshtein distance
//! - `hamming`: Hamming distance with a packed binary fast path
//!
//! The [`Metric`] selects which oracles a code must satisfy. In combined
//! mode Hamming distance is checked first against every member: it is an
//! upper bound on edit distance for equal-length codewords, so a Hamming
//! failure rejects the candidate without running the quadratic edit table.

pub mod edit;
pub mod hamming;

pub use edit::{calculate_edit_distance, edit_distance};
pub use hamming::{
    calculate_hamming_distance, checked_hamming_distance, hamming_distance, hamming_fast,
    hamming_general,
};

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::codeword::Codeword;

/// Distance requirement applied to every pair of codewords in a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Edit distance only.
    #[default]
    Edit,
    /// Hamming distance only.
    Hamming,
    /// Both Hamming and edit distance.
    Combined,
}

/// Which oracle turned a candidate away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Hamming,
    Edit,
}

/// Check that `candidate` is at distance `>= d` from every member of `code`.
pub fn check_addition(
    code: &[Codeword],
    candidate: &Codeword,
    d: usize,
    metric: Metric,
) -> Result<(), Rejection> {
    let hamming_ok = || {
        code.iter()
            .all(|member| calculate_hamming_distance(member, candidate) >= d)
    };
    let edit_ok = || {
        code.iter()
            .all(|member| calculate_edit_distance(member, candidate) >= d)
    };

    match metric {
        Metric::Edit if !edit_ok() => Err(Rejection::Edit),
        Metric::Hamming if !hamming_ok() => Err(Rejection::Hamming),
        Metric::Combined if !hamming_ok() => Err(Rejection::Hamming),
        Metric::Combined if !edit_ok() => Err(Rejection::Edit),
        _ => Ok(()),
    }
}

/// True when `candidate` can join `code` without breaking the distance bound.
pub fn is_code_valid_after_addition(
    code: &[Codeword],
    candidate: &Codeword,
    d: usize,
    metric: Metric,
) -> bool {
    check_addition(code, candidate, d, metric).is_ok()
}

/// True when every pair of codewords in `code` is at distance `>= d`.
pub fn is_code_valid(code: &[Codeword], d: usize, metric: Metric) -> bool {
    (0..code.len()).all(|i| is_code_valid_after_addition(&code[..i], &code[i], d, metric))
}
