use herald_kernel::{
    Archetype, ConfigError, ContentType, GenerationConfig, LengthTier, PostType, StrategyId, Tone,
    WarningKind, compile, validate,
};
use serde_json::json;

fn config_for(strategy: StrategyId, content_type: ContentType) -> GenerationConfig {
    let mut config = GenerationConfig::new("how we cut cold starts", content_type, strategy);
    config.tone = Some(Tone::Educational);
    config.length = Some(LengthTier::Medium);
    config
}

#[test]
fn every_strategy_compiles_for_every_content_type() {
    for strategy in StrategyId::all() {
        for content_type in ContentType::all() {
            let directives =
                compile(&config_for(*strategy, *content_type)).expect("compile");
            assert!(!directives.system_directive.is_empty());
            assert!(!directives.user_directive.is_empty());
            assert!(directives.system_directive.contains("<formatContract>"));
            assert!(directives.user_directive.contains("<topic>"));
        }
    }
}

#[test]
fn identical_configs_compile_to_identical_bytes() {
    for strategy in StrategyId::all() {
        let config = config_for(*strategy, ContentType::Thread);
        let first = compile(&config).expect("first");
        let second = compile(&config).expect("second");
        assert_eq!(first.system_directive, second.system_directive);
        assert_eq!(first.user_directive, second.user_directive);
        assert_eq!(
            first.fingerprint_hex().expect("digest"),
            second.fingerprint_hex().expect("digest")
        );
    }
}

#[test]
fn switching_strategies_never_disturbs_the_user_directive() {
    let baseline = compile(&config_for(
        StrategyId::Archetype(Archetype::Balanced),
        ContentType::Thread,
    ))
    .expect("baseline");

    for strategy in StrategyId::all() {
        let directives =
            compile(&config_for(*strategy, ContentType::Thread)).expect("compile");
        assert_eq!(
            directives.user_directive, baseline.user_directive,
            "user directive drifted for {strategy}"
        );
    }
}

#[test]
fn directives_without_a_profile_contain_no_placeholders() {
    for strategy in StrategyId::all() {
        let directives = compile(&config_for(*strategy, ContentType::Tweet)).expect("compile");
        for leaked in ["undefined", "null", "None", "Some("] {
            assert!(
                !directives.system_directive.contains(leaked),
                "{strategy} leaked `{leaked}`"
            );
            assert!(
                !directives.user_directive.contains(leaked),
                "{strategy} leaked `{leaked}`"
            );
        }
    }
}

#[test]
fn ladder_post_types_emit_three_distinct_variant_ranges() {
    for post_type in [PostType::AlphaThread, PostType::ProtocolBreakdown] {
        let directives = compile(&config_for(
            StrategyId::PostType(post_type),
            ContentType::Thread,
        ))
        .expect("compile");
        let system = &directives.system_directive;

        assert!(system.contains("Variant 1 (short,"));
        assert!(system.contains("Variant 2 (medium,"));
        assert!(system.contains("Variant 3 (long,"));

        let ranges: Vec<&str> = system
            .match_indices("tweets):")
            .map(|(at, _)| &system[system[..at].rfind('(').expect("label open") + 1..at])
            .collect();
        assert_eq!(ranges.len(), 3, "{post_type}");
        assert_ne!(ranges[0], ranges[1]);
        assert_ne!(ranges[1], ranges[2]);
    }
}

#[test]
fn protocol_breakdown_directives_demand_a_limitation() {
    let directives = compile(&config_for(
        StrategyId::PostType(PostType::ProtocolBreakdown),
        ContentType::Thread,
    ))
    .expect("compile");
    assert!(
        directives
            .system_directive
            .contains("limitation, risk, or downside")
    );
}

#[test]
fn article_directives_demand_a_closing_question() {
    let directives = compile(&config_for(
        StrategyId::PostType(PostType::Article),
        ContentType::Article,
    ))
    .expect("compile");
    let system = &directives.system_directive;
    assert!(system.contains("one document"));
    assert!(system.contains("question"));
    assert!(!system.contains("Option 1:"));
}

#[test]
fn json_configs_reject_unknown_strategies_and_blank_topics() {
    let err = GenerationConfig::from_json(json!({
        "topic": "anything",
        "content_type": "tweet",
        "strategy": "not-a-real-id"
    }))
    .expect_err("unknown id");
    assert_eq!(err, ConfigError::UnknownStrategy("not-a-real-id".to_string()));

    let err = GenerationConfig::from_json(json!({
        "topic": "   ",
        "content_type": "tweet",
        "strategy": "balanced"
    }))
    .expect_err("blank topic");
    assert_eq!(err, ConfigError::EmptyTopic);
}

#[test]
fn validator_flags_the_documented_suppression_triggers() {
    let cases: &[(&str, WarningKind)] = &[
        (
            "Check this out: https://example.com it's great",
            WarningKind::ExternalLink,
        ),
        (
            "Great news #ai #ml #crypto #web3 #tech",
            WarningKind::HashtagOveruse,
        ),
        (
            "Like and retweet if you agree!",
            WarningKind::EngagementBait,
        ),
        (
            "I think this might be useful to some people.",
            WarningKind::WeakOpening,
        ),
    ];
    for (text, expected) in cases {
        let kinds: Vec<WarningKind> = validate(text).into_iter().map(|w| w.kind).collect();
        assert!(kinds.contains(expected), "{text:?} missing {expected}");
    }

    let kinds: Vec<WarningKind> = validate(&"x".repeat(350))
        .into_iter()
        .map(|w| w.kind)
        .collect();
    assert!(kinds.contains(&WarningKind::AwkwardLength));

    assert!(validate("Shipped a new release today. Four major fixes.").is_empty());
}

#[test]
fn compiled_directives_round_trip_through_the_validator_cleanly() {
    // The validator is independent of the compiler, but a directive pair
    // should never itself trip the bait or link checks it warns about.
    let directives = compile(&config_for(
        StrategyId::Archetype(Archetype::ViralCatalyst),
        ContentType::Tweet,
    ))
    .expect("compile");
    let kinds: Vec<WarningKind> = validate(&directives.user_directive)
        .into_iter()
        .map(|w| w.kind)
        .collect();
    assert!(!kinds.contains(&WarningKind::ExternalLink));
    assert!(!kinds.contains(&WarningKind::EngagementBait));
}
