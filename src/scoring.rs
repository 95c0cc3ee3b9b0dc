//! Scoring and ranking of provider search results.
//!
//! Each candidate item is scored against the target song/difficulty pair,
//! non-matches are filtered out, and survivors are returned best-first.
//! Scoring is a pure function of the item title and the target: no item's
//! score depends on any other item.

use std::cmp::Reverse;

use crate::fuzzy::fuzzy_title_match;
use crate::models::{Difficulty, RawSearchItem, ScoredItem};
use crate::normalize::{normalize_characters, normalize_song_title};

// ============================================================================
// Score Weights
// ============================================================================

/// Fuzzy song-title match. The only criterion that gates inclusion.
pub const TITLE_MATCH_SCORE: i32 = 10;

/// Title mentions the requested difficulty (by name or abbreviation).
pub const DIFFICULTY_BONUS: i32 = 5;

/// Title advertises itself as a dedicated chart-view video.
pub const CHART_VIEW_BONUS: i32 = 2;

/// Minimum score to survive filtering. Equal to the title-match score:
/// difficulty and chart-view bonuses alone can never qualify an item.
pub const ACCEPT_THRESHOLD: i32 = 10;

/// Lowercase, space-delimited form of the stylized "II" cluster as it
/// appears in normalized-then-lowercased video titles.
const STYLIZED_II_LOWER: &str = " \u{035F}\u{035D}\u{035E}ii\u{0301}\u{0315} ";

// ============================================================================
// Ranking
// ============================================================================

/// Score `items` against `(song_title, difficulty)`, drop non-matches, and
/// return the survivors ordered by descending score. Ties keep their input
/// order. An empty `difficulty` means no difficulty was requested.
///
/// Returns an empty vector when nothing qualifies; the caller reads that as
/// "no relevant video found", not as an error.
pub fn rank_search_results(
    items: Vec<RawSearchItem>,
    song_title: &str,
    difficulty: &str,
) -> Vec<RawSearchItem> {
    if items.is_empty() {
        return Vec::new();
    }

    let target = normalize_song_title(song_title).to_lowercase();
    let difficulty_lower = difficulty.to_lowercase();
    let known_difficulty = Difficulty::from_input(&difficulty_lower);

    let mut scored: Vec<ScoredItem> = items
        .into_iter()
        .map(|item| {
            let score = score_title(&item.title, &target, &difficulty_lower, known_difficulty);
            ScoredItem { item, score }
        })
        .collect();

    scored.retain(|entry| entry.score >= ACCEPT_THRESHOLD);
    // sort_by_key is stable, preserving input order on equal scores
    scored.sort_by_key(|entry| Reverse(entry.score));

    scored.into_iter().map(|entry| entry.item).collect()
}

fn score_title(
    raw_title: &str,
    target: &str,
    difficulty_lower: &str,
    known_difficulty: Option<Difficulty>,
) -> i32 {
    let mut title = normalize_characters(raw_title).to_lowercase();
    if title.contains(STYLIZED_II_LOWER) {
        title = title.replace(STYLIZED_II_LOWER, "ii");
    }

    let mut score = 0;

    if fuzzy_title_match(&title, target) {
        score += TITLE_MATCH_SCORE;
    }

    if !difficulty_lower.is_empty() {
        let mentioned = match known_difficulty {
            Some(d) => d.aliases().iter().any(|alias| title.contains(alias)),
            // Unrecognized difficulty strings match themselves literally
            None => title.contains(difficulty_lower),
        };
        // No penalty on mismatch: the absent bonus is signal enough, and
        // these titles are already ambiguous
        if mentioned {
            score += DIFFICULTY_BONUS;
        }
    }

    if title.contains("chart view") || title.contains("chart_view") {
        score += CHART_VIEW_BONUS;
    }

    score
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::STYLIZED_II;

    fn item(id: &str, title: &str) -> RawSearchItem {
        RawSearchItem {
            video_id: id.to_string(),
            title: title.to_string(),
            channel_title: "Chart Player".to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_search_results(Vec::new(), "Fractures", "Future").is_empty());
    }

    #[test]
    fn test_exact_match_passes_threshold() {
        // +10 title, +2 chart view = 12
        let ranked = rank_search_results(
            vec![item("a", "Song Name - Chart View")],
            "Song Name",
            "",
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].video_id, "a");
    }

    #[test]
    fn test_difficulty_bonus_does_not_gate() {
        // Title matches but difficulty doesn't: +10 alone clears the threshold
        let ranked = rank_search_results(
            vec![item("a", "Vicious Heroism FTR Chart View")],
            "Vicious Heroism",
            "Past",
        );
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_unrelated_title_excluded() {
        let ranked = rank_search_results(
            vec![item("a", "Completely Unrelated Video")],
            "Fractures",
            "",
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_bonuses_alone_cannot_qualify() {
        // Difficulty mention + chart view = 7, below threshold
        let ranked = rank_search_results(
            vec![item("a", "Some Other Song FTR Chart View")],
            "Fractures",
            "Future",
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_difficulty_alias_ordering() {
        let ranked = rank_search_results(
            vec![
                item("pst", "Fractures PST Chart View"),
                item("byd", "Fractures BYD Chart View"),
            ],
            "Fractures",
            "Beyond",
        );
        // BYD item scores 17 (10+5+2), PST item 12
        assert_eq!(ranked[0].video_id, "byd");
        assert_eq!(ranked[1].video_id, "pst");
    }

    #[test]
    fn test_unknown_difficulty_matches_literally() {
        let ranked = rank_search_results(
            vec![
                item("hit", "Fractures ultima chart view"),
                item("miss", "Fractures chart view"),
            ],
            "Fractures",
            "Ultima",
        );
        assert_eq!(ranked[0].video_id, "hit");
        assert_eq!(ranked[1].video_id, "miss");
    }

    #[test]
    fn test_stable_order_on_ties() {
        let ranked = rank_search_results(
            vec![
                item("first", "Fractures Chart View"),
                item("second", "Fractures chart_view upload"),
            ],
            "Fractures",
            "",
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].video_id, "first");
        assert_eq!(ranked[1].video_id, "second");
    }

    #[test]
    fn test_smart_quotes_in_item_title() {
        let ranked = rank_search_results(
            vec![item("a", "Arcaea L\u{2019}amour FTR Chart View")],
            "L'amour",
            "Future",
        );
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_stylized_ii_title() {
        let raw = format!("Arcaea Lament Rain{STYLIZED_II} Chart View");
        let target = format!("Lament Rain{STYLIZED_II}");
        let ranked = rank_search_results(vec![item("a", &raw)], &target, "");
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_typo_in_item_title_still_matches() {
        let ranked = rank_search_results(
            vec![item("a", "Arcaea Fractures Chart View")],
            "Fracture",
            "",
        );
        assert_eq!(ranked.len(), 1);
    }
}
