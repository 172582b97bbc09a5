// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel search over top-level candidates.
//!
//! Siblings at the root are independent once the working set is fixed, so
//! each admissible top-level codeword gets its own context and engine on the
//! rayon pool. Nothing is shared while branches run except a lowest-index
//! marker used to skip branches that can no longer win a target-size search.
//!
//! Branch results are reduced in universe order with the strictly-larger rule,
//! which reproduces the sequential result exactly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use super::{announce, code_search_program, SearchOutcome};
use crate::config::{SearchConfig, SearchParams};
use crate::context::{Admission, SearchContext};
use crate::error::CodeSearchError;
use crate::state::{BestFound, Statistics};

/// What one top-level branch produced.
#[derive(Debug, Default)]
struct BranchResult {
    best: BestFound,
    statistics: Statistics,
    suspended: bool,
}

/// Explore every code whose first codeword is universe `index`.
fn explore_branch(
    params: &SearchParams,
    config: &SearchConfig,
    index: usize,
    first_hit: &AtomicUsize,
) -> Result<BranchResult, CodeSearchError> {
    // A lower branch already reached the target; its code comes first.
    if first_hit.load(Ordering::Relaxed) < index {
        return Ok(BranchResult::default());
    }

    let mut ctx = SearchContext::new(*params, config.clone())?;
    let candidate = ctx.universe.codeword_at(index);
    if ctx.admission(&candidate) != Admission::Admitted {
        return Ok(BranchResult {
            statistics: ctx.statistics,
            ..BranchResult::default()
        });
    }
    ctx.working.push(index, candidate);

    let suspended = code_search_program().search(&mut ctx).is_some();
    if suspended {
        first_hit.fetch_min(index, Ordering::Relaxed);
    }

    Ok(BranchResult {
        best: ctx.best,
        statistics: ctx.statistics,
        suspended,
    })
}

/// Parallel counterpart of [`find_optimal_code`](super::find_optimal_code).
///
/// Returns the same code as the sequential search.
pub fn find_optimal_code_parallel(
    params: &SearchParams,
    config: &SearchConfig,
) -> Result<SearchOutcome, CodeSearchError> {
    announce(params, config, "parallel");
    let started = Instant::now();

    // The root call: level 0, empty working set.
    let mut root = SearchContext::new(*params, config.clone())?;
    root.tick();
    if params.target == Some(0) {
        return Ok(SearchOutcome {
            code: Vec::new(),
            elapsed: started.elapsed(),
            statistics: root.statistics,
            exhausted: !config.halt_on_target,
        });
    }

    let halt = params.target.is_some() && config.halt_on_target;
    let first_hit = AtomicUsize::new(usize::MAX);
    let branches = (0..root.universe.len())
        .into_par_iter()
        .map(|index| {
            let marker = if halt { &first_hit } else { &NEVER };
            explore_branch(params, config, index, marker)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut best = BestFound::new();
    let mut statistics = root.statistics;
    let mut suspended = false;
    for branch in branches {
        statistics.absorb(&branch.statistics);
        best.merge(branch.best);
        suspended |= branch.suspended;
    }

    if config.verbose {
        eprintln!(
            "[Search] done: {} codewords in {:.2?}",
            best.len(),
            started.elapsed()
        );
    }

    Ok(SearchOutcome {
        code: best.into_code(),
        elapsed: started.elapsed(),
        statistics,
        exhausted: !suspended,
    })
}

/// Marker for searches that never skip branches.
static NEVER: AtomicUsize = AtomicUsize::new(usize::MAX);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::search::find_optimal_code;
    use crate::symmetry::StartSymbolThresholds;

    fn both(params: SearchParams, config: SearchConfig) -> (SearchOutcome, SearchOutcome) {
        (
            find_optimal_code(&params, &config).unwrap(),
            find_optimal_code_parallel(&params, &config).unwrap(),
        )
    }

    #[test]
    fn test_parallel_matches_sequential_unbounded() {
        let (seq, par) = both(
            SearchParams::new(4, 3, 3, None).unwrap(),
            SearchConfig::with_metric(Metric::Edit),
        );
        assert_eq!(seq.code, par.code);
        assert!(par.exhausted);
    }

    #[test]
    fn test_parallel_matches_sequential_with_target() {
        let config = SearchConfig {
            thresholds: StartSymbolThresholds::reference(),
            ..SearchConfig::default()
        };
        let (seq, par) = both(SearchParams::new(5, 2, 2, Some(6)).unwrap(), config);
        assert_eq!(seq.code, par.code);
        assert_eq!(par.len(), 6);
        assert!(!par.exhausted);
    }

    #[test]
    fn test_parallel_zero_target() {
        let params = SearchParams::new(3, 2, 1, Some(0)).unwrap();
        let outcome = find_optimal_code_parallel(&params, &SearchConfig::default()).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_parallel_zero_length() {
        let params = SearchParams::new(0, 2, 4, None).unwrap();
        let outcome = find_optimal_code_parallel(&params, &SearchConfig::default()).unwrap();
        assert_eq!(outcome.len(), 1);
    }
}
