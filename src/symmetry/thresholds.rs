// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum level per leading symbol.

use std::fmt;
use std::str::FromStr;

use crate::codeword::Codeword;
use crate::error::CodeSearchError;

/// Minimum search level (working-set size) at which a codeword with a given
/// leading symbol becomes admissible.
///
/// Entry `s - 1` holds the threshold for symbol `s`. Symbol 0 is always
/// admissible, as is any symbol without an entry. The empty codeword has no
/// leading symbol and is always admissible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartSymbolThresholds {
    levels: Vec<usize>,
}

impl StartSymbolThresholds {
    /// No pruning: every leading symbol is admissible at every level.
    pub fn none() -> Self {
        Self { levels: Vec::new() }
    }

    /// The fixed set used by the target-size search: symbol 1 from level 3,
    /// symbol 2 from level 5, symbol 3 from level 7.
    pub fn reference() -> Self {
        Self::new(vec![3, 5, 7])
    }

    /// Thresholds for symbols 1, 2, ... in order.
    pub fn new(levels: Vec<usize>) -> Self {
        Self { levels }
    }

    /// Threshold for `symbol`, or `None` if it is unrestricted.
    pub fn threshold(&self, symbol: u8) -> Option<usize> {
        match symbol {
            0 => None,
            s => self.levels.get(s as usize - 1).copied(),
        }
    }

    /// True if a codeword starting with `symbol` may be chosen at `level`.
    pub fn allows(&self, symbol: u8, level: usize) -> bool {
        self.threshold(symbol).map_or(true, |min| level >= min)
    }

    /// True if `codeword` may be chosen at `level`.
    pub fn admits(&self, codeword: &Codeword, level: usize) -> bool {
        codeword
            .leading_symbol()
            .map_or(true, |symbol| self.allows(symbol, level))
    }

    /// True when no symbol is restricted.
    pub fn is_none(&self) -> bool {
        self.levels.iter().all(|&level| level == 0)
    }
}

impl fmt::Display for StartSymbolThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.levels.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Parses a comma separated list such as `"3,5,7"`; the empty string means no pruning.
impl FromStr for StartSymbolThresholds {
    type Err = CodeSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::none());
        }
        s.split(',')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| CodeSearchError::InvalidParameter {
                        name: "thresholds",
                        value: -1,
                        reason: "thresholds must be a comma separated list of levels",
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_zero_always_allowed() {
        let thresholds = StartSymbolThresholds::new(vec![100]);
        assert!(thresholds.allows(0, 0));
        assert_eq!(thresholds.threshold(0), None);
    }

    #[test]
    fn test_unlisted_symbols_allowed() {
        let thresholds = StartSymbolThresholds::reference();
        assert!(thresholds.allows(4, 0));
        assert!(thresholds.allows(9, 0));
    }

    #[test]
    fn test_reference_levels() {
        let thresholds = StartSymbolThresholds::reference();
        assert_eq!(thresholds.threshold(1), Some(3));
        assert_eq!(thresholds.threshold(2), Some(5));
        assert_eq!(thresholds.threshold(3), Some(7));
        assert!(!thresholds.allows(2, 4));
        assert!(thresholds.allows(2, 5));
    }

    #[test]
    fn test_none_allows_everything() {
        let thresholds = StartSymbolThresholds::none();
        assert!(thresholds.is_none());
        for symbol in 0..10 {
            assert!(thresholds.allows(symbol, 0));
        }
    }

    #[test]
    fn test_empty_codeword_admitted() {
        assert!(StartSymbolThresholds::reference().admits(&Codeword::empty(), 0));
    }

    #[test]
    fn test_parse_and_display() {
        let thresholds: StartSymbolThresholds = "3, 5,7".parse().unwrap();
        assert_eq!(thresholds, StartSymbolThresholds::reference());
        assert_eq!(thresholds.to_string(), "3,5,7");
        assert_eq!("".parse::<StartSymbolThresholds>(), Ok(StartSymbolThresholds::none()));
        assert!("3,x".parse::<StartSymbolThresholds>().is_err());
    }
}
