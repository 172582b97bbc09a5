// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search parameters and runtime configuration.
//!
//! Parameters arrive as signed integers (as a driver would read them) and are
//! validated once into [`SearchParams`]; everything downstream works with
//! `usize`.

use crate::codeword::{Universe, MAX_ALPHABET};
use crate::distance::Metric;
use crate::error::CodeSearchError;
use crate::symmetry::StartSymbolThresholds;

pub(crate) fn validate_length(n: i64) -> Result<usize, CodeSearchError> {
    usize::try_from(n).map_err(|_| CodeSearchError::InvalidParameter {
        name: "n",
        value: n,
        reason: "codeword length must be non-negative",
    })
}

pub(crate) fn validate_alphabet(q: i64) -> Result<usize, CodeSearchError> {
    match usize::try_from(q) {
        Ok(q) if (1..=MAX_ALPHABET).contains(&q) => Ok(q),
        _ => Err(CodeSearchError::InvalidParameter {
            name: "q",
            value: q,
            reason: "alphabet size must be between 1 and 36",
        }),
    }
}

fn validate_distance(d: i64) -> Result<usize, CodeSearchError> {
    usize::try_from(d).map_err(|_| CodeSearchError::InvalidParameter {
        name: "d",
        value: d,
        reason: "minimum distance must be non-negative",
    })
}

fn validate_target(m: i64) -> Result<usize, CodeSearchError> {
    usize::try_from(m).map_err(|_| CodeSearchError::InvalidParameter {
        name: "M",
        value: m,
        reason: "target code size must be non-negative",
    })
}

/// Validated problem parameters (n, q, d, M).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Codeword length n.
    pub length: usize,
    /// Alphabet size q.
    pub alphabet: usize,
    /// Minimum pairwise distance d.
    pub min_distance: usize,
    /// Target code size M; `None` maximizes without bound.
    pub target: Option<usize>,
}

impl SearchParams {
    /// Validate raw parameters.
    ///
    /// Fails with `InvalidParameter` if `n < 0`, `q < 1` (or `q > 36`), `d < 0`
    /// or `M < 0`, and with `UniverseTooLarge` if q^n overflows.
    pub fn new(n: i64, q: i64, d: i64, target: Option<i64>) -> Result<Self, CodeSearchError> {
        let params = Self {
            length: validate_length(n)?,
            alphabet: validate_alphabet(q)?,
            min_distance: validate_distance(d)?,
            target: target.map(validate_target).transpose()?,
        };
        params.universe()?;
        Ok(params)
    }

    /// The candidate universe for these parameters.
    pub fn universe(&self) -> Result<Universe, CodeSearchError> {
        Universe::new(self.length, self.alphabet)
    }
}

/// How the search runs, independent of the problem parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Distance oracle(s) a code must satisfy.
    pub metric: Metric,
    /// Minimum level at which each leading symbol may be chosen.
    pub thresholds: StartSymbolThresholds,
    /// Stop the whole search as soon as a target-size code is found.
    ///
    /// The result is the same either way, since a later code of the target
    /// size never replaces the first one.
    pub halt_on_target: bool,
    /// Emit `[Search]` progress lines on stderr.
    pub verbose: bool,
    /// Progress line period, in engine nodes (0 disables).
    pub report_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Edit,
            thresholds: StartSymbolThresholds::none(),
            halt_on_target: true,
            verbose: false,
            report_every: 1_000_000,
        }
    }
}

impl SearchConfig {
    /// Default configuration with the given metric.
    pub fn with_metric(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = SearchParams::new(5, 2, 2, Some(9)).unwrap();
        assert_eq!(params.length, 5);
        assert_eq!(params.alphabet, 2);
        assert_eq!(params.min_distance, 2);
        assert_eq!(params.target, Some(9));
        assert_eq!(params.universe().unwrap().len(), 32);
    }

    #[test]
    fn test_rejects_each_negative_parameter() {
        let names: Vec<&str> = [
            SearchParams::new(-1, 2, 1, None),
            SearchParams::new(3, 0, 1, None),
            SearchParams::new(3, 2, -1, None),
            SearchParams::new(3, 2, 1, Some(-1)),
        ]
        .into_iter()
        .map(|r| match r {
            Err(CodeSearchError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {:?}", other),
        })
        .collect();
        assert_eq!(names, vec!["n", "q", "d", "M"]);
    }

    #[test]
    fn test_rejects_wide_alphabet() {
        assert!(SearchParams::new(2, 37, 1, None).is_err());
        assert!(SearchParams::new(2, 36, 1, None).is_ok());
    }

    #[test]
    fn test_rejects_huge_universe() {
        assert_eq!(
            SearchParams::new(100, 4, 1, None),
            Err(CodeSearchError::UniverseTooLarge { n: 100, q: 4 })
        );
    }

    #[test]
    fn test_zero_values_are_allowed() {
        let params = SearchParams::new(0, 1, 0, Some(0)).unwrap();
        assert_eq!(params.universe().unwrap().len(), 1);
    }
}
