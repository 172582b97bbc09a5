// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining fixed problem data and mutable search state.
//!
//! - Fixed: the universe, validated parameters and configuration. Never
//!   changes during a search and is cheap to clone, so parallel branches each
//!   take their own.
//! - Mutable: the working set, the best-found code and statistics. Owned by
//!   exactly one search; only the working set is rewound on backtrack.

use std::time::Instant;

use crate::codeword::{Codeword, Universe};
use crate::config::{SearchConfig, SearchParams};
use crate::distance::{check_addition, Rejection};
use crate::error::CodeSearchError;
use crate::state::{BestFound, Counters, Statistics, WorkingSet};

/// Outcome of examining one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    /// Leading symbol not yet allowed at this level.
    SymbolStart,
    /// Too close to a member of the working set.
    TooClose(Rejection),
}

/// Search context passed through the engine.
///
/// ```text
/// SearchContext {
///     universe, params, config,   // fixed
///     working, best, statistics,  // mutable, owned
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub universe: Universe,
    pub params: SearchParams,
    pub config: SearchConfig,
    /// Codewords accepted along the current branch; also the trail.
    pub working: WorkingSet,
    /// Largest valid code found so far.
    pub best: BestFound,
    pub statistics: Statistics,
    started: Instant,
}

impl SearchContext {
    /// Create a context with an empty working set.
    pub fn new(params: SearchParams, config: SearchConfig) -> Result<Self, CodeSearchError> {
        Ok(Self {
            universe: params.universe()?,
            params,
            config,
            working: WorkingSet::new(),
            best: BestFound::new(),
            statistics: Statistics::new(),
            started: Instant::now(),
        })
    }

    /// Current recursion level: the number of accepted codewords.
    pub fn level(&self) -> usize {
        self.working.len()
    }

    /// Whether the working set has reached the configured target size.
    pub fn at_target(&self) -> bool {
        self.params.target == Some(self.working.len())
    }

    /// Decide whether `candidate` may join the working set.
    ///
    /// The leading-symbol check is free, so it runs before any distance oracle.
    pub fn admission(&mut self, candidate: &Codeword) -> Admission {
        if !self.config.thresholds.admits(candidate, self.level()) {
            self.statistics
                .increment_counter(Counters::SymbolStartRejections);
            return Admission::SymbolStart;
        }
        match check_addition(
            self.working.codewords(),
            candidate,
            self.params.min_distance,
            self.config.metric,
        ) {
            Ok(()) => Admission::Admitted,
            Err(rejection) => {
                self.statistics.increment_counter(match rejection {
                    Rejection::Hamming => Counters::HammingRejections,
                    Rejection::Edit => Counters::EditRejections,
                });
                Admission::TooClose(rejection)
            }
        }
    }

    /// Offer the working set to the best-found accumulator.
    pub fn record_best(&mut self) -> bool {
        let improved = self.best.offer(self.working.codewords());
        if improved {
            self.statistics.increment_counter(Counters::Improvements);
            if self.config.verbose {
                eprintln!(
                    "[Search] best code now has {} codewords ({:.2?})",
                    self.best.len(),
                    self.started.elapsed()
                );
            }
        }
        improved
    }

    /// Count a node and print a progress line every `report_every` nodes.
    pub fn tick(&mut self) {
        self.statistics.increment_counter(Counters::Nodes);
        let nodes = self.statistics.get(Counters::Nodes);
        if self.config.verbose && self.config.report_every > 0 && nodes % self.config.report_every == 0 {
            eprintln!(
                "[Search] {} nodes, level {}, best {} ({:.2?})",
                nodes,
                self.level(),
                self.best.len(),
                self.started.elapsed()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::symmetry::StartSymbolThresholds;

    fn context(n: i64, q: i64, d: i64, config: SearchConfig) -> SearchContext {
        SearchContext::new(SearchParams::new(n, q, d, None).unwrap(), config).unwrap()
    }

    #[test]
    fn test_new_context_is_empty() {
        let ctx = context(3, 2, 2, SearchConfig::default());
        assert_eq!(ctx.level(), 0);
        assert!(ctx.best.is_empty());
        assert_eq!(ctx.universe.len(), 8);
    }

    #[test]
    fn test_admission_by_distance() {
        let mut ctx = context(3, 2, 2, SearchConfig::default());
        let first = ctx.universe.codeword_at(0);
        ctx.working.push(0, first);

        let near = ctx.universe.codeword_at(1); // 001
        assert_eq!(ctx.admission(&near), Admission::TooClose(Rejection::Edit));
        let far = ctx.universe.codeword_at(3); // 011
        assert_eq!(ctx.admission(&far), Admission::Admitted);
        assert_eq!(ctx.statistics.get(Counters::EditRejections), 1);
    }

    #[test]
    fn test_admission_by_symbol_start() {
        let config = SearchConfig {
            thresholds: StartSymbolThresholds::reference(),
            ..SearchConfig::with_metric(Metric::Hamming)
        };
        let mut ctx = context(2, 2, 1, config);
        let candidate = ctx.universe.codeword_at(2); // 10
        assert_eq!(ctx.admission(&candidate), Admission::SymbolStart);
        assert_eq!(ctx.statistics.get(Counters::SymbolStartRejections), 1);
    }

    #[test]
    fn test_at_target() {
        let params = SearchParams::new(2, 2, 1, Some(1)).unwrap();
        let mut ctx = SearchContext::new(params, SearchConfig::default()).unwrap();
        assert!(!ctx.at_target());
        let first = ctx.universe.codeword_at(0);
        ctx.working.push(0, first);
        assert!(ctx.at_target());
    }

    #[test]
    fn test_record_best_counts_improvements() {
        let mut ctx = context(2, 2, 1, SearchConfig::default());
        assert!(!ctx.record_best());
        let first = ctx.universe.codeword_at(0);
        ctx.working.push(0, first);
        assert!(ctx.record_best());
        assert!(!ctx.record_best());
        assert_eq!(ctx.statistics.get(Counters::Improvements), 1);
    }
}
