//! The directive compiler.
//!
//! Pure assembly: a validated config is rendered into one system directive
//! and one user directive. Ordering inside the system directive is load
//! bearing: knowledge first, strategy structure next, the format contract
//! always last, so the most recently stated rules are the ones that decide
//! parseability if the engine drops instructions.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::{ConfigError, GenerationConfig};
use crate::schema::{PostType, StrategyId};
use crate::{context, contract, knowledge, strategy, tone};

const SYSTEM_PREAMBLE: &str = "You are a social content strategist who writes \
short-form posts that earn organic distribution. You draft exactly what is \
asked for, in the structure asked for, and nothing else.";

/// The compiler's only output: two prose instruction blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Directives {
    pub system_directive: String,
    pub user_directive: String,
}

impl Directives {
    /// Stable content digest for memoization and audit trails. Identical
    /// configs compile to identical directives, so the fingerprint doubles
    /// as a cache key.
    pub fn fingerprint_hex(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        let digest = Sha256::digest(bytes);
        Ok(format!("{digest:x}"))
    }
}

fn append_section(directive: &mut String, tag: &str, body: &str) {
    directive.push_str(&format!("<{tag}>\n"));
    directive.push_str(body.trim());
    directive.push_str(&format!("\n</{tag}>\n\n"));
}

fn build_system_directive(config: &GenerationConfig, strategy: &strategy::Strategy) -> String {
    let mut directive = String::from(SYSTEM_PREAMBLE);
    directive.push_str("\n\n");

    append_section(&mut directive, "platformKnowledge", knowledge::PLATFORM_MECHANICS);
    append_section(&mut directive, "voiceGuidelines", knowledge::VOICE_GUIDELINES);
    append_section(&mut directive, "hookCraft", knowledge::HOOK_CRAFT);

    let mut structure = String::from(strategy.structure_rules);
    if config.strategy == StrategyId::PostType(PostType::BuildInPublic) {
        structure.push_str("\n\n");
        structure.push_str(strategy::post_types::metric_guidance(
            &config.topic,
            config.additional_context.as_deref(),
        ));
    }
    append_section(&mut directive, "structureRules", &structure);

    append_section(
        &mut directive,
        "toneAndLength",
        &tone::resolve(config.content_type, config.tone, config.length),
    );

    let voice = context::render(config.profile.as_ref(), strategy.profile_shape);
    if !voice.is_empty() {
        append_section(&mut directive, "authorVoice", &voice);
    }

    append_section(
        &mut directive,
        "formatContract",
        &contract::format_rules(&strategy.output_contract, config.content_type),
    );

    directive.trim_end().to_string()
}

fn build_user_directive(config: &GenerationConfig, strategy: &strategy::Strategy) -> String {
    let mut directive = String::from(
        "Draft content for the topic below. Follow the system instructions exactly.\n\n",
    );

    append_section(&mut directive, "topic", config.topic.trim());

    if let Some(additional) = config
        .additional_context
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        append_section(&mut directive, "additionalContext", additional);
    }

    if config.include_hook_suggestions {
        let mut hooks = String::new();
        for hook in strategy.hook_examples {
            hooks.push_str(&format!("- {}: {}\n", hook.label, hook.template));
        }
        hooks.push_str(
            "Treat these as starting shapes for opening lines, not text to copy verbatim.",
        );
        append_section(&mut directive, "hookSuggestions", &hooks);
    }

    directive.trim_end().to_string()
}

/// Compile a config into its directive pair. Referentially transparent: the
/// same config always yields byte-identical output, so callers are free to
/// retry, parallelize, or memoize.
pub fn compile(config: &GenerationConfig) -> Result<Directives, ConfigError> {
    config.validate()?;
    let strategy = strategy::get(config.strategy);

    Ok(Directives {
        system_directive: build_system_directive(config, strategy),
        user_directive: build_user_directive(config, strategy),
    })
}
