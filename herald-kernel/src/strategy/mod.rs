//! The strategy registry.
//!
//! One static `Strategy` record per archetype and post type, served by an
//! exhaustive lookup. Adding a strategy means adding an enum variant and
//! letting the compiler point at every match that must learn about it;
//! there is no default entry and no fallback.

pub mod archetypes;
pub mod post_types;

use crate::context::ProfileShape;
use crate::contract::OutputContract;
use crate::schema::{Archetype, PostType, StrategyId};

/// A named opening-line pattern with a fill-in template.
#[derive(Clone, Copy, Debug)]
pub struct HookPattern {
    pub label: &'static str,
    pub template: &'static str,
}

/// Everything the compiler needs to know about one way of writing a post.
#[derive(Clone, Copy, Debug)]
pub struct Strategy {
    pub id: StrategyId,
    /// One line on what this strategy optimizes for.
    pub summary: &'static str,
    /// Structural and persuasion rules, stated to the engine verbatim.
    pub structure_rules: &'static str,
    pub hook_examples: &'static [HookPattern],
    pub output_contract: OutputContract,
    pub profile_shape: ProfileShape,
}

pub fn get(id: StrategyId) -> &'static Strategy {
    match id {
        StrategyId::Archetype(Archetype::ScrollStopper) => &archetypes::SCROLL_STOPPER,
        StrategyId::Archetype(Archetype::DebateStarter) => &archetypes::DEBATE_STARTER,
        StrategyId::Archetype(Archetype::ViralCatalyst) => &archetypes::VIRAL_CATALYST,
        StrategyId::Archetype(Archetype::Balanced) => &archetypes::BALANCED,
        StrategyId::PostType(PostType::AlphaThread) => &post_types::ALPHA_THREAD,
        StrategyId::PostType(PostType::BuildInPublic) => &post_types::BUILD_IN_PUBLIC,
        StrategyId::PostType(PostType::ProtocolBreakdown) => &post_types::PROTOCOL_BREAKDOWN,
        StrategyId::PostType(PostType::Article) => &post_types::ARTICLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_its_own_strategy() {
        for id in StrategyId::all() {
            let strategy = get(*id);
            assert_eq!(strategy.id, *id);
            assert!(!strategy.summary.trim().is_empty());
            assert!(!strategy.structure_rules.trim().is_empty());
        }
    }

    #[test]
    fn every_strategy_ships_hook_patterns() {
        for id in StrategyId::all() {
            let strategy = get(*id);
            assert!(
                !strategy.hook_examples.is_empty(),
                "{id} has no hook patterns"
            );
            for hook in strategy.hook_examples {
                assert!(!hook.label.trim().is_empty());
                assert!(!hook.template.trim().is_empty());
            }
        }
    }

    #[test]
    fn archetypes_share_the_three_option_contract() {
        for archetype in Archetype::all() {
            let strategy = get(StrategyId::Archetype(*archetype));
            assert_eq!(strategy.output_contract, OutputContract::ThreeOptions);
            assert_eq!(strategy.profile_shape, ProfileShape::Coarse);
        }
    }

    #[test]
    fn thread_post_types_carry_disjoint_ladders() {
        for post_type in [PostType::AlphaThread, PostType::ProtocolBreakdown] {
            let strategy = get(StrategyId::PostType(post_type));
            let ranges = strategy
                .output_contract
                .variant_ranges()
                .expect("ladder contract");
            assert!(!ranges[0].overlaps(&ranges[1]), "{post_type}: short/medium");
            assert!(!ranges[1].overlaps(&ranges[2]), "{post_type}: medium/long");
            assert!(!ranges[0].overlaps(&ranges[2]), "{post_type}: short/long");
            assert!(ranges[0].max < ranges[1].min);
            assert!(ranges[1].max < ranges[2].min);
        }
    }

    #[test]
    fn protocol_breakdown_requires_a_limitation() {
        let strategy = get(StrategyId::PostType(PostType::ProtocolBreakdown));
        assert!(matches!(
            strategy.output_contract,
            OutputContract::VariantLadder {
                require_limitation: true,
                ..
            }
        ));
    }

    #[test]
    fn build_in_public_stays_compact() {
        let strategy = get(StrategyId::PostType(PostType::BuildInPublic));
        assert_eq!(
            strategy.output_contract,
            OutputContract::CompactOptions { max_tweets: 3 }
        );
    }

    #[test]
    fn article_is_a_single_piece() {
        let strategy = get(StrategyId::PostType(PostType::Article));
        assert_eq!(strategy.output_contract, OutputContract::SinglePiece);
    }
}
