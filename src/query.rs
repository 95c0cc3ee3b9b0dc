//! Construction of the literal query string sent to the video-search
//! provider.

use crate::models::Difficulty;
use crate::normalize::normalize_song_title;

/// Build the provider search query for a song/difficulty pair.
///
/// Future/Beyond/Eternal charts have plenty of dedicated chart-view uploads,
/// so the query asks for them explicitly. Past/Present have far fewer, and an
/// exact-title search performs better there. Difficulty names are matched
/// exact-case (`"Future"`, not `"future"`); any other spelling falls through
/// to the default query shape.
pub fn build_search_query(song_title: &str, difficulty: &str) -> String {
    let title = normalize_song_title(song_title);

    match Difficulty::from_exact(difficulty) {
        Some(d) if d.has_chart_view_uploads() => {
            format!("Arcaea {title} {difficulty} chart view")
        }
        Some(_) => format!("Arcaea {title} {difficulty}"),
        None => format!("Arcaea {title} chart view"),
    }
}
