//! Filter and order candidates by score

use super::score::score;

/// A candidate that matched, identified by its position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked {
    /// Index of the candidate in the ranked slice
    pub index: usize,
    /// Match score (higher is better)
    pub score: u32,
}

/// Score every item and keep the matches, best first
///
/// `key` selects the text each item is matched against. Non-matching items
/// are dropped. The sort is stable, so items with equal scores keep their
/// input order.
///
/// # Examples
///
/// ```
/// use goto_folder::fuzzy::rank;
///
/// let paths = ["docs", "src/app/about", "src/about"];
/// let ranked = rank("about", &paths, |p| *p);
///
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(paths[ranked[0].index], "src/about");
/// ```
pub fn rank<T, F>(query: &str, items: &[T], key: F) -> Vec<Ranked>
where
    F: Fn(&T) -> &str,
{
    let mut ranked: Vec<Ranked> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| score(query, key(item)).map(|score| Ranked { index, score }))
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
