// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Levenshtein (edit) distance.

use crate::codeword::Codeword;

/// Minimum number of single-symbol insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Classic prefix table: `dp[i][0] = i`, `dp[0][j] = j`, and
/// `dp[i][j] = dp[i-1][j-1]` on a symbol match, else
/// `1 + min(dp[i-1][j], dp[i][j-1], dp[i-1][j-1])`. Only two rows of the
/// table are live at a time. Inputs may differ in length.
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &sa) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &sb) in b.iter().enumerate() {
            current[j + 1] = if sa == sb {
                previous[j]
            } else {
                1 + previous[j + 1].min(current[j]).min(previous[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Edit distance between two codewords.
pub fn calculate_edit_distance(a: &Codeword, b: &Codeword) -> usize {
    edit_distance(a.symbols(), b.symbols())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cw(s: &str) -> Codeword {
        s.parse().unwrap()
    }

    #[test]
    fn test_unequal_lengths() {
        // Substitute 2 -> 1, then append 1.
        assert_eq!(calculate_edit_distance(&cw("200"), &cw("1001")), 2);
        assert_eq!(calculate_edit_distance(&cw("1001"), &cw("200")), 2);
        assert_eq!(calculate_edit_distance(&cw("22"), &cw("1001")), 4);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(edit_distance(&[], &[]), 0);
        assert_eq!(edit_distance(&[], &[1, 2, 3]), 3);
        assert_eq!(edit_distance(&[0, 0], &[]), 2);
    }

    #[test]
    fn test_identical() {
        assert_eq!(calculate_edit_distance(&cw("01201"), &cw("01201")), 0);
    }

    #[test]
    fn test_shift_is_cheaper_than_hamming() {
        // Hamming distance 4, but delete-first + append-last costs 2.
        assert_eq!(calculate_edit_distance(&cw("0101"), &cw("1010")), 2);
    }

    #[test]
    fn test_distinct_constant_words() {
        assert_eq!(calculate_edit_distance(&cw("000"), &cw("111")), 3);
        assert_eq!(calculate_edit_distance(&cw("111"), &cw("222")), 3);
    }
}
