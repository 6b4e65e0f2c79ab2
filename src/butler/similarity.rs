//! Ratcliff/Obershelp string similarity.
//!
//! The ratio is `2 * M / T`, where `T` is the total number of characters in both
//! strings and `M` the number of characters in the matching blocks. Blocks are found
//! by taking the longest common substring, then recursing on the unmatched pieces to
//! its left and right. Ties go to the block starting earliest in `a`, then in `b`.

/// Similarity of `a` and `b` in `0.0..=1.0`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(start_a, start_b, len)`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[j - blo + 1]: length of the common run ending at (i - 1, j) on the previous row
    let mut run = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut next = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let size = run[j - blo] + 1;
            next[j - blo + 1] = size;
            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }
        run = next;
    }
    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn identical_and_disjoint_strings() {
        assert!(close(ratio("search", "search"), 1.0));
        assert!(close(ratio("abc", "xyz"), 0.0));
        assert!(close(ratio("", ""), 1.0));
        assert!(close(ratio("abc", ""), 0.0));
    }

    #[test]
    fn matches_classic_reference_values() {
        // 2 * 3 / 8
        assert!(close(ratio("abcd", "bcde"), 0.75));
        // "remove" vs "remvoe": blocks "rem", "o", "e" -> 2 * 5 / 12
        assert!(close(ratio("remove", "remvoe"), 10.0 / 12.0));
        // longest block "a", then nothing on either side
        assert!(close(ratio("ab", "ba"), 0.5));
    }

    #[test]
    fn recurses_on_both_sides_of_the_longest_block() {
        // "sort" is the longest block, "x" on the left and "s" on the right match too
        assert!(close(ratio("xsorts", "xysortzs"), 2.0 * 6.0 / 14.0));
    }
}
