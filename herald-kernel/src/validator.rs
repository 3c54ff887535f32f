//! Post-generation distribution checks.
//!
//! Scans finished text for the suppression triggers documented in the
//! knowledge module and returns advisory warnings. Independent of the
//! compiler: it needs only the text, runs every check every time, and is
//! total over all inputs. Warnings are data for the caller to act on,
//! never errors.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    ExternalLink,
    HashtagOveruse,
    EngagementBait,
    AwkwardLength,
    WeakOpening,
}

impl WarningKind {
    /// Report order. `validate` runs the checks in exactly this sequence.
    pub fn all() -> &'static [WarningKind] {
        const ALL: &[WarningKind] = &[
            WarningKind::ExternalLink,
            WarningKind::HashtagOveruse,
            WarningKind::EngagementBait,
            WarningKind::AwkwardLength,
            WarningKind::WeakOpening,
        ];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::ExternalLink => "external-link",
            WarningKind::HashtagOveruse => "hashtag-overuse",
            WarningKind::EngagementBait => "engagement-bait",
            WarningKind::AwkwardLength => "awkward-length",
            WarningKind::WeakOpening => "weak-opening",
        }
    }
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("url pattern")
});

static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern"));

// Word boundaries matter: `rt if` as a bare substring would fire inside
// "support if".
static BAIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\blike if you agree\b",
        r"(?i)\bretweet if\b",
        r"(?i)\bshare if you\b",
        r"(?i)\blike and retweet\b",
        r"(?i)\brt if\b",
        r"(?i)\blike this if\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("bait pattern"))
    .collect()
});

const HEDGE_OPENERS: &[&str] = &["i think", "in my opinion", "i believe", "just wanted to"];

const MAX_HASHTAGS: usize = 2;
const AWKWARD_MIN_CHARS: usize = 280;
const AWKWARD_MAX_CHARS: usize = 500;

fn check_external_link(text: &str) -> Option<Warning> {
    URL_PATTERN.is_match(text).then(|| Warning {
        kind: WarningKind::ExternalLink,
        message: "Contains a link in the body. Body links are heavily \
                  down-ranked; post the link as a reply instead."
            .to_string(),
    })
}

fn check_hashtag_overuse(text: &str) -> Option<Warning> {
    let count = HASHTAG_PATTERN.find_iter(text).count();
    (count > MAX_HASHTAGS).then(|| Warning {
        kind: WarningKind::HashtagOveruse,
        message: format!(
            "Uses {count} hashtags. More than {MAX_HASHTAGS} reads as spam \
             to the ranking system; cut to the one or two that matter."
        ),
    })
}

fn check_engagement_bait(text: &str) -> Option<Warning> {
    BAIT_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(text))
        .then(|| Warning {
            kind: WarningKind::EngagementBait,
            message: "Contains engagement-bait phrasing, which the platform \
                      detects and demotes. Let the content earn the \
                      interaction."
                .to_string(),
        })
}

fn check_awkward_length(text: &str) -> Option<Warning> {
    let chars = text.chars().count();
    (chars > AWKWARD_MIN_CHARS && chars < AWKWARD_MAX_CHARS).then(|| Warning {
        kind: WarningKind::AwkwardLength,
        message: format!(
            "Runs {chars} characters: too long for a single post, too short \
             for long-form. Tighten it under {AWKWARD_MIN_CHARS} or commit \
             to a thread."
        ),
    })
}

fn check_weak_opening(text: &str) -> Option<Warning> {
    let first_line = text.lines().next().unwrap_or("").trim().to_lowercase();
    HEDGE_OPENERS
        .iter()
        .any(|opener| first_line.starts_with(opener))
        .then(|| Warning {
            kind: WarningKind::WeakOpening,
            message: "Opens with a hedge. The first line decides whether \
                      anyone reads the second; state the point directly."
                .to_string(),
        })
}

/// Run every check, in the fixed report order, and return whatever fired.
/// Total over all inputs; the empty string returns an empty list.
pub fn validate(text: &str) -> Vec<Warning> {
    let mut warnings = Vec::new();
    warnings.extend(check_external_link(text));
    warnings.extend(check_hashtag_overuse(text));
    warnings.extend(check_engagement_bait(text));
    warnings.extend(check_awkward_length(text));
    warnings.extend(check_weak_opening(text));
    warnings
}
