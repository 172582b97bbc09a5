// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force baseline: check every subset of the universe.
//!
//! Subsets are tried largest first and, within a size, in lexicographic order
//! of their universe indices. The first valid subset is therefore the same
//! code an unpruned backtracking search returns, which makes this a useful
//! oracle for small universes and nothing more.

use std::time::Instant;

use super::SearchOutcome;
use crate::codeword::Codeword;
use crate::config::SearchParams;
use crate::distance::{is_code_valid, Metric};
use crate::error::CodeSearchError;
use crate::state::{Counters, Statistics};

/// Largest universe brute force will enumerate (2^20 subsets).
pub const BRUTE_FORCE_LIMIT: usize = 20;

/// Advance `indices` to the next k-combination of `0..n` in lexicographic order.
///
/// Returns false once the last combination has been passed.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
        return false;
    };
    indices[pos] += 1;
    for i in pos + 1..k {
        indices[i] = indices[i - 1] + 1;
    }
    true
}

/// Find a largest valid code (or the first valid code of the target size) by
/// enumerating subsets.
///
/// Fails with `SearchSpaceTooLarge` above [`BRUTE_FORCE_LIMIT`] codewords.
pub fn brute_force(params: &SearchParams, metric: Metric) -> Result<SearchOutcome, CodeSearchError> {
    let started = Instant::now();
    let universe = params.universe()?;
    if universe.len() > BRUTE_FORCE_LIMIT {
        return Err(CodeSearchError::SearchSpaceTooLarge {
            size: universe.len(),
            limit: BRUTE_FORCE_LIMIT,
        });
    }

    let all: Vec<Codeword> = universe.iter().collect();
    let sizes: Vec<usize> = match params.target {
        Some(m) if m <= all.len() => vec![m],
        Some(_) => Vec::new(),
        None => (0..=all.len()).rev().collect(),
    };

    let mut statistics = Statistics::new();
    for size in sizes {
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            statistics.increment_counter(Counters::Nodes);
            let subset: Vec<Codeword> = indices.iter().map(|&i| all[i].clone()).collect();
            if is_code_valid(&subset, params.min_distance, metric) {
                return Ok(SearchOutcome {
                    code: subset,
                    elapsed: started.elapsed(),
                    statistics,
                    exhausted: true,
                });
            }
            if !next_combination(&mut indices, all.len()) {
                break;
            }
        }
    }

    Ok(SearchOutcome {
        code: Vec::new(),
        elapsed: started.elapsed(),
        statistics,
        exhausted: true,
    })
}
