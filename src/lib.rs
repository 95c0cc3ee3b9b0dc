//! Title-matching and ranking engine for Arcaea chart-view video search.
//!
//! Given free-text titles returned by an external video search and a target
//! song/difficulty pair, decides which results are plausibly the chart video
//! for that song and ranks them by relevance. Also builds the deterministic
//! query string that drives the search. Every function here is pure and
//! total: no I/O, no shared state, no failure modes.

pub mod fuzzy;
pub mod models;
pub mod normalize;
pub mod query;
pub mod rating;
pub mod scoring;

pub use fuzzy::fuzzy_title_match;
pub use normalize::normalize_song_title;
pub use query::build_search_query;
pub use scoring::rank_search_results;
