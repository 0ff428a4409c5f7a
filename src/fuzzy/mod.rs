//! Fuzzy ranking of folder paths
//!
//! [`score`] decides whether a query is an order-preserving, case-insensitive
//! subsequence of a candidate and how well it lines up; [`rank`] applies it
//! to a whole candidate list.

mod rank;
mod score;

pub use rank::{Ranked, rank};
pub use score::{
    CONSECUTIVE_BONUS, MATCH_SCORE, PATH_SEPARATOR, SEGMENT_START_BONUS, matched_positions, score,
};
