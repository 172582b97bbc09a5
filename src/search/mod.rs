// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-level search coordinators.
//!
//! - [`find_optimal_code`]: single-threaded depth-first search
//! - [`parallel::find_optimal_code_parallel`]: one task per top-level candidate
//! - [`brute_force::brute_force`]: full subset enumeration, the baseline
//!
//! Every coordinator validates its parameters first and returns either an
//! error or a [`SearchOutcome`]; a search never fails part way.

pub mod brute_force;
pub mod parallel;

pub use brute_force::{brute_force, BRUTE_FORCE_LIMIT};
pub use parallel::find_optimal_code_parallel;

use std::time::{Duration, Instant};

use crate::codeword::Codeword;
use crate::config::{SearchConfig, SearchParams};
use crate::context::SearchContext;
use crate::distance::Metric;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::CodeSearchError;
use crate::predicates::{ExtendCodePredicate, FailPredicate};
use crate::state::Statistics;
use crate::symmetry::StartSymbolThresholds;

/// Result of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The best valid code found, in universe order.
    pub code: Vec<Codeword>,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    pub statistics: Statistics,
    /// False if the search stopped early at the target size.
    pub exhausted: bool,
}

impl SearchOutcome {
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// The code-building program: extend until exhausted.
pub(crate) fn code_search_program() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(ExtendCodePredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

pub(crate) fn announce(params: &SearchParams, config: &SearchConfig, mode: &str) {
    if config.verbose {
        let thresholds = if config.thresholds.is_none() {
            "none".to_string()
        } else {
            format!("[{}]", config.thresholds)
        };
        eprintln!(
            "[Search] {} search: n={} q={} d={} target={:?} metric={} thresholds={}",
            mode,
            params.length,
            params.alphabet,
            params.min_distance,
            params.target,
            config.metric,
            thresholds
        );
    }
}

/// Find a maximum-size code (or the first code of the target size).
pub fn find_optimal_code(
    params: &SearchParams,
    config: &SearchConfig,
) -> Result<SearchOutcome, CodeSearchError> {
    announce(params, config, "sequential");
    let started = Instant::now();
    let mut ctx = SearchContext::new(*params, config.clone())?;

    let suspended = code_search_program().search(&mut ctx).is_some();

    let outcome = SearchOutcome {
        code: ctx.best.into_code(),
        elapsed: started.elapsed(),
        statistics: ctx.statistics,
        exhausted: !suspended,
    };
    if config.verbose {
        eprintln!(
            "[Search] done: {} codewords in {:.2?}",
            outcome.len(),
            outcome.elapsed
        );
    }
    Ok(outcome)
}

/// Search from raw parameters with the given metric and default configuration.
///
/// Target-size searches use the reference leading-symbol thresholds; unbounded
/// searches do not prune.
pub fn search(
    n: i64,
    q: i64,
    d: i64,
    target: Option<i64>,
    metric: Metric,
) -> Result<SearchOutcome, CodeSearchError> {
    let params = SearchParams::new(n, q, d, target)?;
    let thresholds = match params.target {
        Some(_) => StartSymbolThresholds::reference(),
        None => StartSymbolThresholds::none(),
    };
    let config = SearchConfig {
        thresholds,
        ..SearchConfig::with_metric(metric)
    };
    find_optimal_code(&params, &config)
}

/// Unbounded edit-distance search without symbol pruning.
pub fn find_optimal_code_with_backtracking(
    n: i64,
    q: i64,
    d: i64,
) -> Result<(Vec<Codeword>, Duration), CodeSearchError> {
    search(n, q, d, None, Metric::Edit).map(|outcome| (outcome.code, outcome.elapsed))
}

/// Edit-distance search for a code of size `m`, with the reference thresholds.
pub fn find_code_of_size(
    n: i64,
    q: i64,
    d: i64,
    m: i64,
) -> Result<(Vec<Codeword>, Duration), CodeSearchError> {
    search(n, q, d, Some(m), Metric::Edit).map(|outcome| (outcome.code, outcome.elapsed))
}
