// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for maximum-size codes.
//!
//! Given a codeword length n, an alphabet {0, ..., q-1} and a minimum
//! distance d, find a largest set of codewords whose pairwise distance is at
//! least d under edit distance, Hamming distance, or both.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Fixed data
//!
//! Never changes during search:
//! - The codeword universe, decoded from an index on demand
//! - Validated parameters and configuration
//!
//! ## Tier 2: Dynamic data
//!
//! Changes during search:
//! - WorkingSet - the code under construction, doubling as the trail
//! - BestFound - the largest valid code so far
//! - Statistics - node and rejection counters
//!
//! # Search Algorithm
//!
//! Depth-first search over subsets of the universe. Each level accepts one
//! more codeword, chosen only from codewords after the previous one so every
//! subset is reached once. A candidate must be far enough from every accepted
//! codeword and its leading symbol must be unlocked at the current level.
//! The recursion runs on the predicate engine in [`engine`], which rewinds
//! the working set between sibling choices.
//!
//! # Parallelization
//!
//! Subtrees under different first codewords are independent, so
//! [`search::find_optimal_code_parallel`] runs one engine per first codeword
//! and reduces the results in universe order.
//!
//! # Example
//!
//! ```
//! use codeword_search::distance::{is_code_valid, Metric};
//! use codeword_search::search::search;
//!
//! let outcome = search(4, 2, 2, None, Metric::Edit).unwrap();
//! assert!(is_code_valid(&outcome.code, 2, Metric::Edit));
//! ```

pub mod codeword;
pub mod config;
pub mod context;
pub mod distance;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod search;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use codeword::{generate_codewords, Codeword, Universe};
pub use config::{SearchConfig, SearchParams};
pub use context::SearchContext;
pub use distance::{calculate_edit_distance, calculate_hamming_distance, is_code_valid, Metric};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::CodeSearchError;
pub use search::{find_optimal_code, find_optimal_code_parallel, search, SearchOutcome};
pub use symmetry::StartSymbolThresholds;
