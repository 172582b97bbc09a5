// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. Depth-first recursion is replaced by an explicit stack of
//! choice points, so search depth is bounded by memory rather than the
//! native call stack.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//! - The working-set checkpoint to rewind to before each attempt
//!
//! Execution model:
//! 1. Call try_pred(round) on the predicate at the top of the stack
//! 2. If Success: advance to next predicate (the entry has no alternatives,
//!    so it is popped when control returns to it)
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use codeword_search::config::{SearchConfig, SearchParams};
//! use codeword_search::context::SearchContext;
//! use codeword_search::engine::EngineBuilder;
//! use codeword_search::predicates::{ExtendCodePredicate, FailPredicate};
//!
//! let params = SearchParams::new(3, 2, 2, None).unwrap();
//! let mut ctx = SearchContext::new(params, SearchConfig::default()).unwrap();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ExtendCodePredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Exhaustive: the engine is consumed and the answer is left in the context.
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.best.len(), 4);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Working-set length to restore before each attempt.
    checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if a predicate suspended the search
    /// - `None` if the search space is exhausted
    ///
    /// Results are left in `ctx`, not in the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without a
    /// terminal predicate), or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }

        self.stack.push(StackEntry::new(0, 0, ctx.working.checkpoint()));

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted
            };

            ctx.working.rewind_to(entry.checkpoint);

            if !entry.in_choice_mode {
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.consume_top();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.consume_top();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.checkpoint = ctx.working.checkpoint();
                        }
                    }
                    PredicateResult::Suspend => return Some(self),
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// A deterministic success has no alternatives: pop the entry when
    /// control returns to it instead of calling `try_pred` again.
    fn consume_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.in_choice_mode = true;
            entry.current_choice = 0;
            entry.num_choices = 0;
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let Some(current) = self.stack.last() else {
            return;
        };
        let next_index = current.predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without a terminal predicate. \
                 Programs must end with a Fail or Suspend predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.working.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let Some(current) = self.stack.last() else {
            return;
        };
        let entry = StackEntry::new(
            current.predicate_index,
            current.round + 1,
            ctx.working.checkpoint(),
        );
        self.stack.push(entry);
    }

    /// Returns (try_count, retry_count) for the last search.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a predicate program that is guaranteed to end with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, completing the program.
    pub fn terminal<T: TerminalPredicate + 'static>(self, predicate: Box<T>) -> TerminatedBuilder {
        let mut predicates = self.predicates;
        predicates.push(predicate);
        TerminatedBuilder { predicates }
    }
}

/// A complete predicate program, ready to build.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
