// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use codeword_search::context::{Admission, SearchContext};
use codeword_search::distance::{is_code_valid_after_addition, Metric};
use codeword_search::{
    Codeword, Predicate, PredicateResult, SearchConfig, SearchParams, Universe,
};

/// Small problems whose universe brute force can still enumerate.
pub const SMALL_SHAPES: &[(i64, i64)] = &[
    (0, 2),
    (1, 2),
    (2, 2),
    (3, 2),
    (4, 2),
    (1, 3),
    (2, 3),
    (1, 4),
    (2, 4),
];

pub const METRICS: [Metric; 3] = [Metric::Edit, Metric::Hamming, Metric::Combined];

pub fn params(n: i64, q: i64, d: i64, target: Option<i64>) -> SearchParams {
    SearchParams::new(n, q, d, target).unwrap()
}

/// Default configuration: no symbol pruning, halt on target.
pub fn unpruned(metric: Metric) -> SearchConfig {
    SearchConfig::with_metric(metric)
}

pub fn code(words: &[&str]) -> Vec<Codeword> {
    words.iter().map(|w| w.parse().unwrap()).collect()
}

pub fn strings(code: &[Codeword]) -> Vec<String> {
    code.iter().map(|c| c.to_string()).collect()
}

/// Assert that no universe codeword outside `code` could be added to it.
pub fn assert_maximal(code: &[Codeword], universe: &Universe, d: usize, metric: Metric) {
    for candidate in universe.iter() {
        if code.contains(&candidate) {
            continue;
        }
        assert!(
            !is_code_valid_after_addition(code, &candidate, d, metric),
            "{} could still join {:?} (d={}, metric={})",
            candidate,
            strings(code),
            d,
            metric
        );
    }
}

/// A predicate that seeds the working set with fixed codewords.
///
/// This is used in tests to search below a known prefix, bypassing the
/// enumeration of the first levels.
#[derive(Debug)]
pub struct FixedPrefixPredicate(pub Vec<&'static str>);

impl Predicate for FixedPrefixPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        for word in &self.0 {
            let codeword: Codeword = word.parse().unwrap();
            let Some(index) = ctx.universe.index_of(&codeword) else {
                eprintln!("{} is not in the universe", word);
                return PredicateResult::Failure;
            };
            if ctx.admission(&codeword) != Admission::Admitted {
                return PredicateResult::Failure;
            }
            ctx.working.push(index, codeword);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "FixedPrefix"
    }
}

/// Wraps a predicate and counts its `try_pred` calls.
#[derive(Debug)]
pub struct Counted<P: Predicate> {
    pub inner: P,
    pub tries: Rc<Cell<usize>>,
}

impl<P: Predicate> Predicate for Counted<P> {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        self.tries.set(self.tries.get() + 1);
        self.inner.try_pred(ctx, round)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        self.inner.retry_pred(ctx, round, choice)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
