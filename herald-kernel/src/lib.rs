pub mod compiler;
pub mod config;
pub mod context;
pub mod contract;
pub mod knowledge;
pub mod schema;
pub mod strategy;
pub mod tone;
pub mod validator;

pub use compiler::{Directives, compile};
pub use config::{ConfigError, GenerationConfig, TonePreferences, VoiceProfile};
pub use schema::{Archetype, ContentType, LengthTier, PostType, StrategyId, Tone};
pub use validator::{Warning, WarningKind, validate};
