// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendCodePredicate - grows the working set one codeword per round.
//!
//! Each round is one recursion level. The level itself is read from the
//! working set, which may already hold a seeded prefix. `try_pred` records
//! the working set and opens one choice per codeword after the last accepted
//! one; `retry_pred` admits or rejects a single candidate. The engine's
//! rewind between choices is the pop that undoes a tentative acceptance.

use crate::context::{Admission, SearchContext};
use crate::engine::{Predicate, PredicateResult};

/// One level of the depth-first code search.
///
/// # Recording
///
/// - No target: the working set is offered to the best-found code on every
///   round, replacing it when strictly larger.
/// - Target M: nothing is recorded until the working set holds M codewords.
///   It is then offered and the branch ends: with `halt_on_target` the whole
///   search suspends, otherwise only this branch fails back. Both give the
///   same result, since a later M-sized code never replaces the first.
///
/// # Choices
///
/// Choice `i` is universe index `next_candidate + i`, so siblings are tried
/// in ascending universe order and each subtree only sees later codewords.
#[derive(Debug)]
pub struct ExtendCodePredicate;

impl Predicate for ExtendCodePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.tick();

        match ctx.params.target {
            None => {
                ctx.record_best();
            }
            Some(_) if ctx.at_target() => {
                ctx.record_best();
                return if ctx.config.halt_on_target {
                    PredicateResult::Suspend
                } else {
                    PredicateResult::Failure
                };
            }
            Some(_) => {}
        }

        let remaining = ctx.universe.len() - ctx.working.next_candidate();
        if remaining == 0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(remaining)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let index = ctx.working.next_candidate() + choice;
        let candidate = ctx.universe.codeword_at(index);

        match ctx.admission(&candidate) {
            Admission::Admitted => {
                ctx.working.push(index, candidate);
                PredicateResult::SuccessSamePredicate
            }
            Admission::SymbolStart | Admission::TooClose(_) => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "ExtendCode"
    }
}
