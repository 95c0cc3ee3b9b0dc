//! Normalization for song titles and free-text video titles.
//!
//! Everything downstream (tokenizing, fuzzy matching, scoring) assumes its
//! input went through these functions, so the comparable form is defined
//! here and nowhere else.

use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Glyph Constants
// ============================================================================

/// NFKD form of the stylized "II" glyph cluster used by one catalog title.
/// Stored post-decomposition (marks in canonical order, roman numeral already
/// expanded to `II`) so the substitution fires on the string
/// `normalize_characters` actually produces.
pub(crate) const STYLIZED_II: &str = " \u{035F}\u{035D}\u{035E}II\u{0301}\u{0315}";

/// Smart apostrophe / prime variants folded to ASCII `'`.
const SMART_APOSTROPHES: [char; 5] = ['\u{2018}', '\u{2019}', '\u{201B}', '\u{2032}', '\u{2035}'];

/// Smart quote / double-prime variants folded to ASCII `"`.
const SMART_QUOTES: [char; 5] = ['\u{201C}', '\u{201D}', '\u{201F}', '\u{2033}', '\u{2036}'];

// ============================================================================
// Normalization Functions
// ============================================================================

/// Canonicalize arbitrary text into a comparable form.
///
/// Applies NFKD decomposition so visually-identical glyphs encoded
/// differently compare equal character-by-character, folds smart quote
/// variants to their ASCII counterparts, and trims surrounding whitespace.
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_characters(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let decomposed: String = text.nfkd().collect();
    decomposed
        .replace(SMART_APOSTROPHES, "'")
        .replace(SMART_QUOTES, "\"")
        .trim()
        .to_string()
}

/// Normalize a catalog song title for matching and query construction.
///
/// On top of `normalize_characters`, rewrites the stylized "II" glyph
/// cluster to literal `II`, then strips dash-delimited subtitles: provider
/// titles for long classical/doujin-style songs tend to carry a
/// ` -subtitle-` tail that hurts matching, so everything from the first
/// ` -` onward is dropped (`"Misdeed -la bonté de Dieu..."` becomes
/// `"Misdeed"`). Total over all inputs, never errors.
pub fn normalize_song_title(raw_title: &str) -> String {
    let mut title = normalize_characters(raw_title);

    if title.contains(STYLIZED_II) {
        title = title.replace(STYLIZED_II, "II");
    }

    if let Some((head, _)) = title.split_once(" -") {
        title = head.to_string();
    }

    title.trim().to_string()
}

// ============================================================================
// Tests
// ============================================================================
