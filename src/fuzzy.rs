//! Tokenized fuzzy title matching.
//!
//! Decides whether a candidate video title "contains" a target song title.
//! Exact substring containment is the fast path; otherwise both strings are
//! tokenized and each target word must find a candidate word within a small
//! edit-distance tolerance. Inputs are expected to already be normalized and
//! lowercased by the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use strsim::levenshtein;

// ============================================================================
// Tokenization
// ============================================================================

/// Word separators: whitespace plus the punctuation commonly found in
/// video titles. Consecutive separators collapse to one boundary.
static TOKEN_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s\-_:;,.()\[\]{}'"]+"#).unwrap());

/// Split text into word tokens, dropping empty results.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_SEPARATORS
        .split(text)
        .filter(|t| !t.is_empty())
        .collect()
}

// ============================================================================
// Matching Policy
// ============================================================================

/// Fraction of target tokens that must find a tolerant match.
const COVERAGE_THRESHOLD: f64 = 0.8;

/// Candidate tokens whose char length differs from the target token's by
/// more than this are skipped without computing a distance.
const LENGTH_FILTER: usize = 2;

/// Edits tolerated for a target token of the given char length.
/// Longer words absorb more typos; very short words must match exactly.
fn allowed_edits(token_len: usize) -> usize {
    if token_len > 6 {
        2
    } else if token_len > 3 {
        1
    } else {
        0
    }
}

/// Returns true when `candidate` plausibly contains `target`.
///
/// Containment is checked verbatim first (case-sensitive on whatever case
/// the caller passed in). The fallback tokenizes both strings and, for each
/// target token, searches the candidate tokens for the lowest Levenshtein
/// distance, stopping early on an exact hit. At least 80% of the target's
/// words must land within their tolerance for an overall match.
pub fn fuzzy_title_match(candidate: &str, target: &str) -> bool {
    if candidate.contains(target) {
        return true;
    }

    let candidate_tokens = tokenize(candidate);
    let target_tokens = tokenize(target);

    if target_tokens.is_empty() {
        return false;
    }

    let mut matched = 0usize;

    for &target_token in &target_tokens {
        let target_len = target_token.chars().count();
        let mut best = usize::MAX;

        for &candidate_token in &candidate_tokens {
            if candidate_token == target_token {
                best = 0;
                break;
            }
            // Skip distance computation on obviously dissimilar lengths
            let candidate_len = candidate_token.chars().count();
            if candidate_len.abs_diff(target_len) <= LENGTH_FILTER {
                best = best.min(levenshtein(candidate_token, target_token));
            }
        }

        if best <= allowed_edits(target_len) {
            matched += 1;
        }
    }

    matched as f64 / target_tokens.len() as f64 >= COVERAGE_THRESHOLD
}

// ============================================================================
// Tests
// ============================================================================
