//! Core data models for chart-view video matching.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search Items
// ============================================================================

/// Raw result from the external video-search provider.
/// The matching core reads these and never mutates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchItem {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
}

/// Item paired with its relevance score. Transient: created during ranking,
/// discarded after filtering and sorting.
#[derive(Clone, Debug)]
pub struct ScoredItem {
    pub item: RawSearchItem,
    pub score: i32,
}

/// Caller-facing video descriptor built from a surviving search item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartVideo {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub video_url: String,
}

impl ChartVideo {
    pub fn from_item(item: &RawSearchItem) -> Self {
        Self {
            id: item.video_id.clone(),
            title: item.title.clone(),
            channel_title: item.channel_title.clone(),
            video_url: format!("https://www.youtube.com/watch?v={}", item.video_id),
        }
    }
}

// ============================================================================
// Difficulty
// ============================================================================

/// Chart difficulty. One variant per difficulty removes the "unrecognized
/// key" ambiguity of a string-keyed map; free-text difficulty strings from
/// external input are validated into this enum at the boundary, and unknown
/// strings fall back to matching themselves literally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Past,
    Present,
    Future,
    Eternal,
    Beyond,
}

impl Difficulty {
    /// Capitalized display name, as used in provider queries.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Past => "Past",
            Difficulty::Present => "Present",
            Difficulty::Future => "Future",
            Difficulty::Eternal => "Eternal",
            Difficulty::Beyond => "Beyond",
        }
    }

    /// Lowercase substrings that count as a difficulty mention in a title.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Difficulty::Past => &["past", "pst"],
            Difficulty::Present => &["present", "prs"],
            Difficulty::Future => &["future", "ftr"],
            Difficulty::Eternal => &["eternal", "etr"],
            Difficulty::Beyond => &["beyond", "byd"],
        }
    }

    /// Three-letter badge shown in the catalog UI.
    pub fn abbrev(self) -> &'static str {
        match self {
            Difficulty::Past => "PST",
            Difficulty::Present => "PRS",
            Difficulty::Future => "FTR",
            Difficulty::Eternal => "ETR",
            Difficulty::Beyond => "BYD",
        }
    }

    /// Display color for the difficulty badge.
    pub fn color_hex(self) -> &'static str {
        match self {
            Difficulty::Past => "#4caed1",
            Difficulty::Present => "#8fad4c",
            Difficulty::Future => "#822c68",
            Difficulty::Eternal => "#8571a3",
            Difficulty::Beyond => "#b5112e",
        }
    }

    /// Future/Beyond/Eternal charts have enough dedicated chart-view uploads
    /// that the provider query should ask for them explicitly.
    pub fn has_chart_view_uploads(self) -> bool {
        matches!(
            self,
            Difficulty::Future | Difficulty::Eternal | Difficulty::Beyond
        )
    }

    /// Case-insensitive parse of a full difficulty name. Used at the scoring
    /// boundary, where input has already been lowercased.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "past" => Some(Difficulty::Past),
            "present" => Some(Difficulty::Present),
            "future" => Some(Difficulty::Future),
            "eternal" => Some(Difficulty::Eternal),
            "beyond" => Some(Difficulty::Beyond),
            _ => None,
        }
    }

    /// Exact-case parse. The query builder matches capitalized names only, so
    /// a lowercase variant falls through to the default query shape. Existing
    /// behavior, kept deliberately.
    pub fn from_exact(s: &str) -> Option<Self> {
        match s {
            "Past" => Some(Difficulty::Past),
            "Present" => Some(Difficulty::Present),
            "Future" => Some(Difficulty::Future),
            "Eternal" => Some(Difficulty::Eternal),
            "Beyond" => Some(Difficulty::Beyond),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
