use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{ContentType, LengthTier, StrategyId, Tone};

/// The only failure surface of the kernel. Raised before any directive text
/// is produced; a config that makes it past construction compiles cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyTopic,
    UnknownStrategy(String),
    Malformed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyTopic => {
                write!(f, "topic must be non-empty after trimming")
            }
            ConfigError::UnknownStrategy(name) => {
                write!(f, "no strategy is registered under `{name}`")
            }
            ConfigError::Malformed(detail) => {
                write!(f, "malformed generation config: {detail}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Categorical tone preferences consumed by strategies that want more than
/// the coarse sliders. Every field is independently optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TonePreferences {
    pub confidence: Option<String>,
    pub technical_depth: Option<String>,
    pub personality: Option<String>,
    pub exposition_style: Option<String>,
    pub honesty_level: Option<String>,
}

impl TonePreferences {
    pub fn is_empty(&self) -> bool {
        self.confidence.is_none()
            && self.technical_depth.is_none()
            && self.personality.is_none()
            && self.exposition_style.is_none()
            && self.honesty_level.is_none()
    }
}

/// Author voice profile. Every field is independently optional: the
/// renderer emits only what is present, so an all-`None` profile
/// contributes nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub niche: Option<String>,
    pub content_goal: Option<String>,
    pub voice_style: Option<String>,
    #[serde(default)]
    pub admired_accounts: Vec<String>,
    pub target_audience: Option<String>,
    pub personal_brand: Option<String>,
    /// Coarse sliders, 0-100. Values above 100 are clamped at render time.
    pub formality: Option<u8>,
    pub technical_depth: Option<u8>,
    pub humor: Option<u8>,
    pub tone_preferences: Option<TonePreferences>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub topic: String,
    pub content_type: ContentType,
    pub strategy: StrategyId,
    pub tone: Option<Tone>,
    pub length: Option<LengthTier>,
    pub profile: Option<VoiceProfile>,
    pub additional_context: Option<String>,
    #[serde(default)]
    pub include_hook_suggestions: bool,
}

impl GenerationConfig {
    pub fn new(topic: impl Into<String>, content_type: ContentType, strategy: StrategyId) -> Self {
        Self {
            topic: topic.into(),
            content_type,
            strategy,
            tone: None,
            length: None,
            profile: None,
            additional_context: None,
            include_hook_suggestions: false,
        }
    }

    /// Build a config from a raw JSON value, the shape the request layer
    /// holds after decoding a request body. Unknown strategy names and
    /// blank topics surface as typed errors here rather than as opaque
    /// deserialization failures.
    pub fn from_json(value: Value) -> Result<Self, ConfigError> {
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::Malformed("expected a JSON object".to_string()))?;

        if let Some(strategy) = object.get("strategy") {
            let name = strategy.as_str().ok_or_else(|| {
                ConfigError::Malformed("`strategy` must be a string".to_string())
            })?;
            if StrategyId::parse(name).is_none() {
                return Err(ConfigError::UnknownStrategy(name.to_string()));
            }
        }

        let config: GenerationConfig = serde_json::from_value(value)
            .map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs whose topic is empty after trimming. Invoked by both
    /// `from_json` and `compile`, so hand-built configs get the same check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topic.trim().is_empty() {
            return Err(ConfigError::EmptyTopic);
        }
        Ok(())
    }

    pub fn tone_or_default(&self) -> Tone {
        self.tone.unwrap_or(Tone::Casual)
    }

    pub fn length_or_default(&self) -> LengthTier {
        self.length.unwrap_or(LengthTier::Medium)
    }
}
