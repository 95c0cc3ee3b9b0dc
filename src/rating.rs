//! Play-rating math for catalog display.
//!
//! Converts a chart constant and an in-game score into the play rating shown
//! next to catalog entries. Unrelated to matching, but shares the crate with
//! the engine that surfaces the chart videos for those same entries.

/// Score modifier: 10M+ caps at 2.0, 9.8M–10M interpolates linearly from 1.0,
/// below 9.8M falls off from 1.0 toward negative values.
pub fn score_modifier(score: u32) -> f64 {
    if score >= 10_000_000 {
        2.0
    } else if score >= 9_800_000 {
        1.0 + f64::from(score - 9_800_000) / 200_000.0
    } else {
        (f64::from(score) - 9_500_000.0) / 300_000.0
    }
}

/// Play rating = chart constant + score modifier, floored at zero.
pub fn play_rating(constant: f64, score: u32) -> f64 {
    (constant + score_modifier(score)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_caps_at_two() {
        assert_eq!(score_modifier(10_000_000), 2.0);
        assert_eq!(score_modifier(10_002_221), 2.0);
    }

    #[test]
    fn test_modifier_interpolation() {
        assert_eq!(score_modifier(9_800_000), 1.0);
        assert!((score_modifier(9_900_000) - 1.5).abs() < 1e-9);
        assert!((score_modifier(9_500_000) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_play_rating_floor() {
        // Very low scores cannot drag the rating below zero
        assert_eq!(play_rating(8.0, 0), 0.0);
        assert!((play_rating(11.3, 10_000_000) - 13.3).abs() < 1e-9);
    }
}
