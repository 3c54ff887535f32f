//! Tone and length resolution.
//!
//! A pure lookup layer: every `(ContentType, LengthTier)` pair maps to
//! exactly one character or word band, and every `Tone` maps to fixed
//! instructional prose. Exhaustive matches keep the tables total; there is
//! no way to hand this module a combination it cannot resolve.

use crate::schema::{ContentType, LengthTier, Tone};

/// Band description substituted into the length instruction. Total over the
/// full cross product.
pub fn length_band(content_type: ContentType, tier: LengthTier) -> &'static str {
    match (content_type, tier) {
        (ContentType::Tweet, LengthTier::Short) => "under 140 characters",
        (ContentType::Tweet, LengthTier::Medium) => "140 to 200 characters",
        (ContentType::Tweet, LengthTier::Long) => "200 to 280 characters",
        (ContentType::Thread, LengthTier::Short) => "5 to 7 tweets",
        (ContentType::Thread, LengthTier::Medium) => "7 to 10 tweets",
        (ContentType::Thread, LengthTier::Long) => "10 to 14 tweets",
        (ContentType::Article, LengthTier::Short) => "800 to 1200 words",
        (ContentType::Article, LengthTier::Medium) => "1500 to 2500 words",
        (ContentType::Article, LengthTier::Long) => "2500 to 4000 words",
    }
}

/// Classify a tweet's character count into its tier. The bands are strict
/// and mutually exclusive: short is [0,140), medium is [140,200], long is
/// (200,280]. Counts above 280 do not fit any tier.
pub fn tweet_tier(char_count: usize) -> Option<LengthTier> {
    if char_count < 140 {
        Some(LengthTier::Short)
    } else if char_count <= 200 {
        Some(LengthTier::Medium)
    } else if char_count <= 280 {
        Some(LengthTier::Long)
    } else {
        None
    }
}

pub fn tone_text(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "Tone: professional. Measured and precise. Full sentences, no slang, \
             no exclamation marks. Authority comes from specificity, not volume. \
             Think of a respected practitioner writing to peers."
        }
        Tone::Casual => {
            "Tone: casual. Conversational and direct, like messaging a sharp \
             friend. Contractions are fine, fragments are fine when they land. \
             Warm but never sloppy; relaxed is not the same as vague."
        }
        Tone::Bold => {
            "Tone: bold. Take a clear position and defend it. Strong verbs, \
             declarative sentences, no hedging qualifiers. Comfortable being \
             disagreed with; never comfortable being ignored."
        }
        Tone::Educational => {
            "Tone: educational. Teach, do not lecture. Build from what the \
             reader already knows toward one new idea, define terms the first \
             time they appear, and favor worked examples over abstractions."
        }
        Tone::Inspirational => {
            "Tone: inspirational. Grounded optimism. Show the climb, not just \
             the summit; specifics about the struggle make the payoff credible. \
             No empty hype words and no manufactured triumph."
        }
    }
}

/// Render the tone and length instruction block for a config. Missing tone
/// and length fall back to the documented defaults (casual, medium).
pub fn resolve(content_type: ContentType, tone: Option<Tone>, length: Option<LengthTier>) -> String {
    let tone = tone.unwrap_or(Tone::Casual);
    let tier = length.unwrap_or(LengthTier::Medium);
    let band = length_band(content_type, tier);

    let mut text = String::new();
    match content_type {
        ContentType::Tweet => {
            text.push_str(&format!(
                "Length: each post must land at {band}. Count characters, not words; \
                 the band is a hard constraint, not a suggestion."
            ));
        }
        ContentType::Thread => {
            text.push_str(&format!(
                "Length: the thread should run {band}, every tweet under 280 \
                 characters and able to stand alone when seen out of context."
            ));
        }
        ContentType::Article => {
            text.push_str(&format!(
                "Length: the piece should run {band}. Depth earns the length; \
                 padding to hit the band is worse than coming in short."
            ));
        }
    }
    text.push('\n');
    text.push_str(tone_text(tone));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_resolves_to_prose() {
        for content_type in ContentType::all() {
            for tier in LengthTier::all() {
                let band = length_band(*content_type, *tier);
                assert!(!band.trim().is_empty(), "{content_type}/{tier} band empty");
            }
        }
    }

    #[test]
    fn tweet_tiers_are_disjoint_and_cover_the_full_range() {
        for count in 0..=280 {
            let tier = tweet_tier(count);
            let expected = if count < 140 {
                LengthTier::Short
            } else if count <= 200 {
                LengthTier::Medium
            } else {
                LengthTier::Long
            };
            assert_eq!(tier, Some(expected), "count {count}");
        }
        assert_eq!(tweet_tier(281), None);
    }

    #[test]
    fn tweet_tier_boundaries_are_exact() {
        assert_eq!(tweet_tier(139), Some(LengthTier::Short));
        assert_eq!(tweet_tier(140), Some(LengthTier::Medium));
        assert_eq!(tweet_tier(200), Some(LengthTier::Medium));
        assert_eq!(tweet_tier(201), Some(LengthTier::Long));
        assert_eq!(tweet_tier(280), Some(LengthTier::Long));
    }

    #[test]
    fn resolve_defaults_to_casual_medium() {
        let text = resolve(ContentType::Tweet, None, None);
        assert!(text.contains("140 to 200 characters"));
        assert!(text.contains("Tone: casual"));
    }

    #[test]
    fn resolve_substitutes_the_requested_band() {
        let text = resolve(
            ContentType::Article,
            Some(Tone::Educational),
            Some(LengthTier::Long),
        );
        assert!(text.contains("2500 to 4000 words"));
        assert!(text.contains("Tone: educational"));
    }
}
