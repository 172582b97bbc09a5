// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - `working_set`: the code under construction, restored by rewinding
//! - `best`: the largest valid code seen so far
//! - `statistics`: counters for nodes and rejections

pub mod best;
pub mod statistics;
pub mod working_set;

pub use best::BestFound;
pub use statistics::{Counters, Statistics};
pub use working_set::WorkingSet;
