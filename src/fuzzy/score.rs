//! Subsequence scorer
//!
//! A single greedy left-to-right pass: each query character takes the
//! first candidate character at or after the cursor that equals it. No
//! alternative alignments are explored.

/// Points for every matched character
pub const MATCH_SCORE: u32 = 1;
/// Bonus when a match directly follows the previous match
pub const CONSECUTIVE_BONUS: u32 = 5;
/// Bonus when a match starts a path segment
pub const SEGMENT_START_BONUS: u32 = 3;
/// Separator that marks path segment boundaries
pub const PATH_SEPARATOR: char = '/';

/// Score `candidate` against `query`
///
/// Returns `None` when the query characters do not all appear, in order,
/// in the candidate (case-insensitive). An empty query matches anything
/// with a score of 0.
///
/// # Examples
///
/// ```
/// use goto_folder::fuzzy::score;
///
/// assert_eq!(score("", "src"), Some(0));
/// assert!(score("srcabout", "src/app/about").is_some());
/// assert_eq!(score("zzz", "src/app/about"), None);
/// assert!(score("ab", "xaby") > score("ab", "axby"));
/// ```
#[must_use]
pub fn score(query: &str, candidate: &str) -> Option<u32> {
    scan(query, candidate, |_| {})
}

/// Candidate character indices consumed by the greedy scan
///
/// Returns `None` under the same conditions as [`score`]. Indices count
/// characters of the original candidate, even where lowercasing expands a
/// character into several.
#[must_use]
pub fn matched_positions(query: &str, candidate: &str) -> Option<Vec<usize>> {
    let mut positions: Vec<usize> = Vec::new();
    scan(query, candidate, |idx| {
        if positions.last() != Some(&idx) {
            positions.push(idx);
        }
    })
    .map(|_| positions)
}

/// Lowercase `text` one character at a time
///
/// The second vector maps every lowered character back to the index of
/// the original character it came from.
fn lowered(text: &str) -> (Vec<char>, Vec<usize>) {
    let mut chars = Vec::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            chars.push(lower);
            origin.push(idx);
        }
    }
    (chars, origin)
}

fn scan(query: &str, candidate: &str, mut on_match: impl FnMut(usize)) -> Option<u32> {
    if query.is_empty() {
        return Some(0);
    }

    let (query, _) = lowered(query);
    let (candidate, origin) = lowered(candidate);

    let mut query_idx = 0;
    let mut candidate_idx = 0;
    let mut total = 0;
    let mut last_match: Option<usize> = None;

    while query_idx < query.len() && candidate_idx < candidate.len() {
        if query[query_idx] == candidate[candidate_idx] {
            if last_match.is_some_and(|last| last + 1 == candidate_idx) {
                total += CONSECUTIVE_BONUS;
            }
            if candidate_idx > 0 && candidate[candidate_idx - 1] == PATH_SEPARATOR {
                total += SEGMENT_START_BONUS;
            }
            total += MATCH_SCORE;

            on_match(origin[candidate_idx]);
            last_match = Some(candidate_idx);
            query_idx += 1;
        }
        candidate_idx += 1;
    }

    (query_idx == query.len()).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(score("", ""), Some(0));
        assert_eq!(score("", "src/app"), Some(0));
    }

    #[test]
    fn test_non_empty_query_against_empty_candidate() {
        assert_eq!(score("a", ""), None);
    }

    #[test]
    fn test_subsequence_required() {
        assert!(score("sa", "src/app").is_some());
        assert_eq!(score("sa", "src/app"), Some(5));
        assert_eq!(score("zzz", "src/app/about"), None);
        assert_eq!(score("ppa", "app"), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("SRC", "src"), score("src", "SRC"));
        assert!(score("About", "src/app/about").is_some());
    }

    #[test]
    fn test_contiguous_run_scores_higher() {
        // "ab" contiguous: 1 + (5 + 1)
        assert_eq!(score("ab", "xaby"), Some(7));
        // "ab" separated: 1 + 1
        assert_eq!(score("ab", "axby"), Some(2));
        assert!(score("ab", "xaby") > score("ab", "axby"));
    }

    #[test]
    fn test_segment_start_bonus() {
        assert_eq!(score("a", "x/ay"), Some(MATCH_SCORE + SEGMENT_START_BONUS));
        assert_eq!(score("a", "xxay"), Some(MATCH_SCORE));
    }

    #[test]
    fn test_first_character_gets_no_segment_bonus() {
        assert_eq!(score("s", "src"), Some(1));
    }

    #[test]
    fn test_greedy_alignment_is_not_optimal() {
        // The first 'a' is taken, so the adjacent "ab" run is never seen.
        assert_eq!(score("ab", "a/ab"), Some(2));
    }

    #[test]
    fn test_end_to_end_score() {
        let value = score("srcabout", "src/app/about").unwrap();
        assert!(value > 0);
        assert_eq!(score("src", "src/app/about"), Some(13));
    }

    #[test]
    fn test_matched_positions() {
        assert_eq!(matched_positions("sa", "src/app"), Some(vec![0, 4]));
        assert_eq!(matched_positions("", "src"), Some(vec![]));
        assert_eq!(matched_positions("q", "src"), None);
    }

    #[test]
    fn test_positions_follow_original_characters() {
        // 'İ' lowercases to two characters
        assert_eq!(matched_positions("app", "İ/app"), Some(vec![2, 3, 4]));
        assert_eq!(matched_positions("i", "İx"), Some(vec![0]));
        assert_eq!(score("app", "İ/app"), score("app", "x/app"));
    }
}
