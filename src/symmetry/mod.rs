// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry breaking by leading symbol.
//!
//! Permuting the alphabet maps a code onto another code of the same size, so
//! most of the search tree is a relabelling of some other branch. The search
//! only lets a codeword starting with symbol `s` join the code once the code
//! already holds a given number of codewords, which front-loads small leading
//! symbols and discards many of those relabelled branches.
//!
//! The cut is lossy: it can miss the true optimum.
//!
//! ## Module Structure
//!
//! - `thresholds`: per-symbol minimum levels
//! - `mod`: Public API and re-exports

pub mod thresholds;

pub use thresholds::StartSymbolThresholds;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::Codeword;

    #[test]
    fn test_reference_thresholds_gate_codewords() {
        let thresholds = StartSymbolThresholds::reference();
        let one: Codeword = "1000".parse().unwrap();
        let three: Codeword = "3000".parse().unwrap();

        assert!(!thresholds.admits(&one, 2));
        assert!(thresholds.admits(&one, 3));
        assert!(!thresholds.admits(&three, 6));
        assert!(thresholds.admits(&three, 7));
    }
}
