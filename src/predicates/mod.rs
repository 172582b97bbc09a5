// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `extend`: ExtendCodePredicate, one level of the code-building recursion
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod extend;

pub use extend::ExtendCodePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing backtracking. Ending a program with it makes the
/// engine explore every alternative.
///
/// # Example
///
/// ```
/// use codeword_search::config::{SearchConfig, SearchParams};
/// use codeword_search::context::SearchContext;
/// use codeword_search::engine::EngineBuilder;
/// use codeword_search::predicates::FailPredicate;
///
/// let params = SearchParams::new(2, 2, 1, None).unwrap();
/// let mut ctx = SearchContext::new(params, SearchConfig::default()).unwrap();
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, leaving the context as it stands.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
