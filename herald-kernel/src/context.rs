//! Renders an author voice profile into directive prose.
//!
//! Rendering is a sequence of append-if-present steps: absent fields are
//! skipped entirely, so the output never contains placeholder text. An
//! absent or fully empty profile renders to the empty string and the
//! compiler drops the section.

use crate::config::VoiceProfile;

/// Which profile shape a strategy consumes. Coarse strategies see the 0-100
/// sliders; extended strategies see the categorical tone preferences. The
/// two never mix in one rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileShape {
    Coarse,
    Extended,
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
        out.push_str(&format!("- {label}: {value}\n"));
    }
}

fn push_slider(out: &mut String, label: &str, value: Option<u8>) {
    if let Some(value) = value {
        out.push_str(&format!("- {label}: {}/100\n", value.min(100)));
    }
}

pub fn render(profile: Option<&VoiceProfile>, shape: ProfileShape) -> String {
    let Some(profile) = profile else {
        return String::new();
    };

    let mut body = String::new();
    push_field(&mut body, "Niche", profile.niche.as_deref());
    push_field(&mut body, "Content goal", profile.content_goal.as_deref());
    push_field(&mut body, "Voice style", profile.voice_style.as_deref());

    let accounts: Vec<&str> = profile
        .admired_accounts
        .iter()
        .map(|account| account.trim())
        .filter(|account| !account.is_empty())
        .collect();
    if !accounts.is_empty() {
        body.push_str(&format!("- Writes in the orbit of: {}\n", accounts.join(", ")));
    }

    push_field(&mut body, "Target audience", profile.target_audience.as_deref());
    push_field(&mut body, "Personal brand", profile.personal_brand.as_deref());

    match shape {
        ProfileShape::Coarse => {
            push_slider(&mut body, "Formality", profile.formality);
            push_slider(&mut body, "Technical depth", profile.technical_depth);
            push_slider(&mut body, "Humor", profile.humor);
        }
        ProfileShape::Extended => {
            if let Some(preferences) = &profile.tone_preferences {
                push_field(&mut body, "Confidence", preferences.confidence.as_deref());
                push_field(
                    &mut body,
                    "Technical depth",
                    preferences.technical_depth.as_deref(),
                );
                push_field(&mut body, "Personality", preferences.personality.as_deref());
                push_field(
                    &mut body,
                    "Exposition style",
                    preferences.exposition_style.as_deref(),
                );
                push_field(
                    &mut body,
                    "Honesty level",
                    preferences.honesty_level.as_deref(),
                );
            }
        }
    }

    if body.is_empty() {
        return String::new();
    }

    let mut block = String::from(
        "Write as this author. Match their register and interests; never \
         invent details the profile does not state.\n",
    );
    block.push_str(&body);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TonePreferences;

    fn full_profile() -> VoiceProfile {
        VoiceProfile {
            niche: Some("developer tooling".to_string()),
            content_goal: Some("grow an audience of staff engineers".to_string()),
            voice_style: Some("dry, example-heavy".to_string()),
            admired_accounts: vec!["@mitchellh".to_string(), "@rakyll".to_string()],
            target_audience: Some("senior backend engineers".to_string()),
            personal_brand: Some("the person who benchmarks everything".to_string()),
            formality: Some(35),
            technical_depth: Some(90),
            humor: Some(55),
            tone_preferences: Some(TonePreferences {
                confidence: Some("high".to_string()),
                technical_depth: Some("deep".to_string()),
                personality: Some("wry".to_string()),
                exposition_style: Some("first principles".to_string()),
                honesty_level: Some("blunt".to_string()),
            }),
        }
    }

    #[test]
    fn absent_profile_renders_nothing() {
        assert_eq!(render(None, ProfileShape::Coarse), "");
        assert_eq!(render(None, ProfileShape::Extended), "");
    }

    #[test]
    fn empty_profile_renders_nothing() {
        let profile = VoiceProfile::default();
        assert_eq!(render(Some(&profile), ProfileShape::Coarse), "");
        assert_eq!(render(Some(&profile), ProfileShape::Extended), "");
    }

    #[test]
    fn partial_profile_renders_only_present_fields() {
        let profile = VoiceProfile {
            niche: Some("fintech".to_string()),
            ..VoiceProfile::default()
        };
        let block = render(Some(&profile), ProfileShape::Coarse);
        assert!(block.contains("- Niche: fintech"));
        assert!(!block.contains("Content goal"));
        assert!(!block.contains("Formality"));
        assert!(!block.contains("undefined"));
        assert!(!block.contains("null"));
    }

    #[test]
    fn whitespace_only_fields_are_treated_as_absent() {
        let profile = VoiceProfile {
            niche: Some("   ".to_string()),
            admired_accounts: vec!["  ".to_string()],
            ..VoiceProfile::default()
        };
        assert_eq!(render(Some(&profile), ProfileShape::Coarse), "");
    }

    #[test]
    fn coarse_shape_renders_sliders_and_never_preferences() {
        let block = render(Some(&full_profile()), ProfileShape::Coarse);
        assert!(block.contains("- Formality: 35/100"));
        assert!(block.contains("- Technical depth: 90/100"));
        assert!(!block.contains("Exposition style"));
        assert!(!block.contains("wry"));
    }

    #[test]
    fn extended_shape_renders_preferences_and_never_sliders() {
        let block = render(Some(&full_profile()), ProfileShape::Extended);
        assert!(block.contains("- Confidence: high"));
        assert!(block.contains("- Exposition style: first principles"));
        assert!(!block.contains("/100"));
    }

    #[test]
    fn sliders_above_the_scale_are_clamped() {
        let profile = VoiceProfile {
            humor: Some(250),
            ..VoiceProfile::default()
        };
        let block = render(Some(&profile), ProfileShape::Coarse);
        assert!(block.contains("- Humor: 100/100"));
    }

    #[test]
    fn admired_accounts_render_as_one_line() {
        let block = render(Some(&full_profile()), ProfileShape::Coarse);
        assert!(block.contains("- Writes in the orbit of: @mitchellh, @rakyll"));
    }
}
