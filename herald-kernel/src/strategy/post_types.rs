//! Genre post types.
//!
//! Unlike the archetypes, each of these owns a structural contract specific
//! to its genre: the thread genres ladder three variants by depth, the
//! progress-update genre caps total length, and the article genre produces
//! a single document.

use crate::context::ProfileShape;
use crate::contract::{OutputContract, TweetRange};
use crate::schema::{PostType, StrategyId};

use super::{HookPattern, Strategy};

pub static ALPHA_THREAD: Strategy = Strategy {
    id: StrategyId::PostType(PostType::AlphaThread),
    summary: "Insider-insight thread: earns the follow by giving away knowledge that sounds expensive.",
    structure_rules: r#"Post type: alpha thread.

The genre promise is privileged insight: the reader should finish feeling
they learned something the average practitioner in the niche does not
know yet. The thread trades generosity for authority.

Structure each variant as:
1. Hook tweet. Name the insight and why it is not common knowledge. The
   hook must make a concrete promise the thread then keeps.
2. Stakes tweet. Why this matters now: what changes, who wins, what it
   costs to not know.
3. Insight body. The core of the thread: each tweet delivers one discrete,
   self-contained point with its evidence in the same tweet. A reader
   seeing any single tweet out of context should still get value from it.
4. Implication tweet. What the insights mean together; the second-order
   consequence a casual reader would miss.
5. Closing tweet. Recap the promise kept, then one specific question that
   invites practitioners to add their own experience.

Depth ladder:
- The short variant covers the insight at announcement depth: what and
  why it matters.
- The medium variant adds mechanism: how it works, with evidence.
- The long variant adds practice: how to act on it, failure modes, and
  edge cases.
Each deeper variant must add new material, never restate the shorter one
with padding."#,
    hook_examples: &[
        HookPattern {
            label: "quiet shift",
            template: "{change} quietly happened over the last {period}. Almost nobody has updated on it:",
        },
        HookPattern {
            label: "insider framing",
            template: "People inside {niche} have stopped doing {practice}. The reason tells you where this is going:",
        },
        HookPattern {
            label: "paid-for knowledge",
            template: "{lesson} took me {cost} to learn. The full picture, free:",
        },
        HookPattern {
            label: "early signal",
            template: "Three signals that {prediction}, and what to do before it's consensus:",
        },
    ],
    output_contract: OutputContract::VariantLadder {
        short: TweetRange::new(5, 7),
        medium: TweetRange::new(8, 10),
        long: TweetRange::new(11, 14),
        require_limitation: false,
    },
    profile_shape: ProfileShape::Extended,
};

pub static PROTOCOL_BREAKDOWN: Strategy = Strategy {
    id: StrategyId::PostType(PostType::ProtocolBreakdown),
    summary: "Technical deep dive: explains how a system actually works, credibility anchored by stated limitations.",
    structure_rules: r#"Post type: protocol breakdown.

A technical teardown of how a system, protocol, or mechanism works. The
audience is technical and allergic to marketing; credibility is the whole
game, and nothing builds it faster than being straight about weaknesses.

Structure each variant as:
1. Hook tweet. The mechanism's most surprising property, stated
   concretely. Not "a deep dive on X" but the actual surprising thing.
2. Problem tweet. What the system exists to solve and why the obvious
   solutions fail.
3. Mechanism body. How it actually works, one moving part per tweet, in
   causal order. Use real numbers wherever they exist: throughput,
   latency, costs, limits. Analogies may support a mechanism tweet but
   never replace it.
4. Limitations. At least one tweet in every variant stating a real
   limitation, trade-off, or failure mode of the design. This is
   mandatory: a breakdown with no stated downside reads as advertising
   and dies in the replies.
5. Verdict tweet. Where this design genuinely fits, where it does not,
   and what you would watch next.

Depth ladder:
- The short variant covers problem and core mechanism.
- The medium variant adds the supporting machinery and numbers.
- The long variant adds edge cases, failure modes, and comparisons to
  rival designs.

Technical register: precise terms used correctly, no hype vocabulary, no
"revolutionary". If a claim cannot be made concrete, cut it."#,
    hook_examples: &[
        HookPattern {
            label: "surprising mechanism",
            template: "{system} does {counterintuitive thing} on every {operation}. It's the reason {headline property} works:",
        },
        HookPattern {
            label: "load-bearing number",
            template: "{specific number} is doing all the work in {system}'s design. Breakdown:",
        },
        HookPattern {
            label: "failure-first",
            template: "{system} breaks in a specific, predictable way. Understanding it teaches you the whole design:",
        },
        HookPattern {
            label: "design trade",
            template: "{system} gave up {sacrificed property} to get {gained property}. Whether that trade holds up:",
        },
    ],
    output_contract: OutputContract::VariantLadder {
        short: TweetRange::new(6, 8),
        medium: TweetRange::new(9, 11),
        long: TweetRange::new(12, 15),
        require_limitation: true,
    },
    profile_shape: ProfileShape::Extended,
};

pub static BUILD_IN_PUBLIC: Strategy = Strategy {
    id: StrategyId::PostType(PostType::BuildInPublic),
    summary: "Progress update: short, honest, metric-anchored log of building something, never a thread.",
    structure_rules: r#"Post type: build in public.

A working log, not an announcement. The audience follows for the honest
texture of building: what moved, what the numbers say, what it felt like,
what's next. Compression is the genre: this is never a long thread.

Every option follows Update → Metric → Reflection → Ask:
1. Update. What concretely happened since the last post. Shipped, broke,
   decided, learned; specific, not "progress on several fronts".
2. Metric. The number that grounds the update. Only numbers the author
   actually supplied may appear; see the metric rule below.
3. Reflection. One honest line on what it means: the doubt, the surprise,
   the small win. This is the line that makes the post a person and not a
   changelog.
4. Ask. One lightweight, specific request: an opinion, an experience, a
   pointer. Not "any feedback welcome".

Metric rule: never invent, estimate, or extrapolate numbers. The only
figures allowed in any option are figures present in the supplied topic
or context. Losses and flat weeks are posted with the same plainness as
wins; a fabricated metric destroys the only asset this genre has."#,
    hook_examples: &[
        HookPattern {
            label: "plain ship",
            template: "Shipped {thing} this week. {metric or honest state}.",
        },
        HookPattern {
            label: "honest miss",
            template: "Aimed for {goal}, landed at {actual}. Here's what ate the gap.",
        },
        HookPattern {
            label: "small milestone",
            template: "{milestone}. Took {duration} longer than planned and I'd do it again.",
        },
        HookPattern {
            label: "decision log",
            template: "Decided to {decision} after {trigger}. Betting that {rationale}.",
        },
    ],
    output_contract: OutputContract::CompactOptions { max_tweets: 3 },
    profile_shape: ProfileShape::Extended,
};

pub static ARTICLE: Strategy = Strategy {
    id: StrategyId::PostType(PostType::Article),
    summary: "Native long-form: one complete piece that rewards the click the platform gave it.",
    structure_rules: r#"Post type: article.

Native long-form. The platform boosts long-form that keeps readers
on-platform, and readers grant one click of trust; the piece must repay
it with an actual argument, not a stretched thread.

Structure the piece as:
1. Title. The article's one claim, stated plainly. No colons-and-cleverness
   unless the cleverness is doing work.
2. Opening. The strongest concrete instance of the claim: a story, a
   number, a failure. Two paragraphs maximum before the reader knows
   exactly what the piece will argue.
3. Body. Sections with short, descriptive subheads. Each section advances
   the argument one step; each contains at least one concrete example,
   number, or named case. A section that only restates the previous one
   in different words gets cut.
4. Turn. One section that takes the strongest objection seriously and
   answers it honestly, conceding what should be conceded.
5. Close. The claim restated with the evidence now behind it, what the
   reader should do differently, and a final line that is a direct
   question to the reader. The closing question is mandatory: it is what
   converts a read into a reply.

Register: written prose, not thread-speak. Full paragraphs, no numbered
tweet cadence, no "let's dive in"."#,
    hook_examples: &[
        HookPattern {
            label: "thesis title",
            template: "{practice} is {verdict}, and the evidence has been public for {period}",
        },
        HookPattern {
            label: "case-study title",
            template: "What {concrete event} taught us about {domain}",
        },
        HookPattern {
            label: "numbered argument",
            template: "{small number} reasons {common belief} stopped being true",
        },
        HookPattern {
            label: "journey title",
            template: "From {starting state} to {ending state}: notes from {duration} of {practice}",
        },
    ],
    output_contract: OutputContract::SinglePiece,
    profile_shape: ProfileShape::Extended,
};

/// Metric guidance appended to build-in-public directives. When the caller
/// supplied no digits anywhere in topic or context, the engine gets an
/// explicit qualitative-only instruction instead of a license to improvise.
pub fn metric_guidance(topic: &str, additional_context: Option<&str>) -> &'static str {
    let supplied = has_metric(topic)
        || additional_context.map(has_metric).unwrap_or(false);
    if supplied {
        "Use only the numbers supplied in the topic and context, exactly as \
         given. Do not round them into nicer figures or derive new ones."
    } else {
        "No metrics were supplied. Keep every option fully qualitative: \
         describe progress in words and do not include any numbers, \
         percentages, or counts."
    }
}

fn has_metric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_guidance_locks_to_supplied_numbers() {
        let guidance = metric_guidance("MRR hit $4,200 this week", None);
        assert!(guidance.contains("exactly as"));
    }

    #[test]
    fn metric_guidance_goes_qualitative_without_numbers() {
        let guidance = metric_guidance("slow week on the editor rewrite", None);
        assert!(guidance.contains("qualitative"));
    }

    #[test]
    fn metrics_in_context_count_as_supplied() {
        let guidance = metric_guidance("weekly update", Some("signups went 80 -> 140"));
        assert!(guidance.contains("exactly as"));
    }
}
