//! Persuasion archetypes.
//!
//! All four share the three-option output contract; what differs is the
//! engagement signal each one is built to maximize and the structure the
//! engine is told to follow.

use crate::context::ProfileShape;
use crate::contract::OutputContract;
use crate::schema::{Archetype, StrategyId};

use super::{HookPattern, Strategy};

pub static SCROLL_STOPPER: Strategy = Strategy {
    id: StrategyId::Archetype(Archetype::ScrollStopper),
    summary: "Built to halt the scroll: maximizes dwell time and profile clicks from cold readers.",
    structure_rules: r#"Persuasion strategy: scroll-stopper.

The reader is mid-scroll, thumb moving, and owes you nothing. The post
wins by making stopping feel cheaper than continuing.

Structure every option as:
1. Hook. One line that interrupts the pattern of the feed: a result that
   looks impossible, a number that looks wrong, an admission nobody makes
   in public. No wind-up, no context.
2. Context. One or two lines that make the hook legible: what you were
   doing, what was at stake. Only as much as the payoff needs.
3. Evidence. The concrete substance that makes the hook true: the number,
   the before/after, the thing that actually happened. This is where
   specificity lives; vague evidence retroactively kills the hook.
4. Insight. The transferable lesson. What the reader can take away even
   if they never touch your exact situation.
5. Call to action. Low-friction and specific: a question about their
   version of the problem, or an invitation to push back. Never "thoughts?"

Each of the three options must take a genuinely different angle on the
topic, not three rewordings of one angle. Vary which element carries the
surprise: once the result, once the mistake, once the mechanism."#,
    hook_examples: &[
        HookPattern {
            label: "impossible result",
            template: "{specific result} in {timeframe that sounds too short}. Here's what actually did it.",
        },
        HookPattern {
            label: "public admission",
            template: "I {embarrassing mistake} for {duration}. Nobody told me because nobody knew.",
        },
        HookPattern {
            label: "wrong-looking number",
            template: "{metric} went from {before} to {after}. We changed one thing.",
        },
        HookPattern {
            label: "quiet contradiction",
            template: "Everyone optimizes {common target}. The wins were all in {neglected target}.",
        },
        HookPattern {
            label: "before/after cut",
            template: "Last {period}: {bad state}. This {period}: {good state}. The difference was not what I expected.",
        },
    ],
    output_contract: OutputContract::ThreeOptions,
    profile_shape: ProfileShape::Coarse,
};

pub static DEBATE_STARTER: Strategy = Strategy {
    id: StrategyId::Archetype(Archetype::DebateStarter),
    summary: "Built for the reply column: stakes out a defensible contrarian position people need to answer.",
    structure_rules: r#"Persuasion strategy: debate-starter.

Replies are the heaviest ranking signal on the platform, and people reply
to things they disagree with more than things they applaud. The post
should be impossible to read without forming a position.

Structure every option as:
1. Claim. A clear, falsifiable position stated as fact, not framed as
   opinion. "Unpopular opinion:" prefixes soften the claim; never use
   them.
2. Steelman. One line granting the strongest version of the opposing
   view. This is what separates a debate from a rant, and it doubles the
   reply rate from people who hold that view.
3. Rebuttal. Why the position holds anyway: the evidence, experience, or
   mechanism the opposing view misses.
4. Invitation. Close by naming the conditions under which you'd be wrong,
   or asking which part people reject. Give dissent a specific door to
   walk through.

Rules of engagement:
- The claim must be genuinely defensible. Manufactured outrage and
  strawmen draw dunks, not debate, and dunks do not convert to follows.
- Punch at ideas, never at named people or groups.
- Pick claims where reasonable practitioners actually split; a claim
  everyone agrees with is a scroll-past, a claim nobody holds is a troll.

The three options should differ in claim, not just phrasing: one aimed at
tooling orthodoxy, one at process orthodoxy, one at a quieter assumption
nobody states out loud, or whatever split fits the topic."#,
    hook_examples: &[
        HookPattern {
            label: "inverted credential",
            template: "{common practice} is a symptom of {deeper failure}, not a solution to it.",
        },
        HookPattern {
            label: "sacred cow",
            template: "{beloved tool/practice} made sense in {old context}. It's been the wrong default for years.",
        },
        HookPattern {
            label: "forced choice",
            template: "You can have {desirable thing A} or {desirable thing B}. The teams claiming both are lying about one.",
        },
        HookPattern {
            label: "majority error",
            template: "Most teams doing {practice} would ship better software if they stopped entirely.",
        },
        HookPattern {
            label: "conditional heresy",
            template: "{contrarian claim}, unless {narrow condition}, and almost nobody is in that condition.",
        },
    ],
    output_contract: OutputContract::ThreeOptions,
    profile_shape: ProfileShape::Coarse,
};

pub static VIRAL_CATALYST: Strategy = Strategy {
    id: StrategyId::Archetype(Archetype::ViralCatalyst),
    summary: "Built to be reposted: compresses maximum standalone utility into a shareable unit.",
    structure_rules: r#"Persuasion strategy: viral-catalyst.

A repost is a reader spending their own credibility on your post. People
repost what makes them look sharp for having found it: dense utility,
complete in itself, worth saving.

Structure every option as:
1. Promise. Name exactly what the reader walks away with, scoped tightly
   enough to be deliverable in one post.
2. Payoff. The substance, compressed to its limit. Every line should
   survive the test "would someone screenshot this line alone?" Cut any
   line that is setup for another line.
3. Compression. One closing line that restates the core insight in its
   most quotable form. This is the line people quote when they repost.

Rules:
- Utility over opinion. Catalyst posts are reference material, not
  commentary; the reader should be able to act on the content without
  knowing who wrote it.
- No cliffhangers and no "follow me for part 2". The post must be whole;
  withheld value reads as bait and earns mutes, not reposts.
- Never ask for the repost. The share trigger is density, not a plea;
  asking triggers the platform's engagement-bait demotion and reader
  contempt simultaneously.

Differentiate the three options by packaging: one ruthless distillation
of principles, one concrete numbers-and-steps version, one framed as the
mistakes-to-avoid inverse."#,
    hook_examples: &[
        HookPattern {
            label: "complete distillation",
            template: "Everything I know about {topic} after {credential-earning duration}, in one post:",
        },
        HookPattern {
            label: "expensive lesson, free",
            template: "This cost {price paid} to learn. You get it in {reading time}:",
        },
        HookPattern {
            label: "the short list",
            template: "{small number} things that account for most of the results in {domain}:",
        },
        HookPattern {
            label: "inverse guide",
            template: "How to fail at {topic}, from someone who tried every way:",
        },
        HookPattern {
            label: "borrowed authority",
            template: "The {practice} used by {respected group}, and why it transfers to {reader's context}:",
        },
    ],
    output_contract: OutputContract::ThreeOptions,
    profile_shape: ProfileShape::Coarse,
};

pub static BALANCED: Strategy = Strategy {
    id: StrategyId::Archetype(Archetype::Balanced),
    summary: "The default register: substance first, with enough craft to travel but nothing engineered.",
    structure_rules: r#"Persuasion strategy: balanced.

No single engagement signal is being chased. The post should read like a
sharp practitioner sharing something true, written well enough that the
algorithm has no reason to bury it and no tricks it could punish.

Structure every option as:
1. Hook. A clear, honest first line that states the most interesting part
   up front. Interesting, not engineered; the test is whether the line
   would survive being said out loud to a colleague.
2. Context. The minimum the reader needs to follow.
3. Substance. The observation, result, or argument, with at least one
   concrete detail doing real work.
4. Close. End with either the implication or a genuine question you want
   answered. Either is fine; forced engagement hooks are not.

Rules:
- Lead with the most specific thing you have. Specificity is the whole
  strategy.
- It is fine for an option to be quiet. A true, useful post at moderate
  reach compounds better than a stunt.
- Differentiate the three options by register: one observational, one
  analytical, one personal."#,
    hook_examples: &[
        HookPattern {
            label: "plain surprising fact",
            template: "{concrete observation from the work}, and it keeps being true everywhere I look.",
        },
        HookPattern {
            label: "lesson stated flat",
            template: "After {experience}: {the one-line lesson}.",
        },
        HookPattern {
            label: "useful distinction",
            template: "{thing A} and {thing B} look the same from outside. The difference decides {outcome}.",
        },
        HookPattern {
            label: "honest question",
            template: "Genuine question for people doing {practice}: {specific question}?",
        },
    ],
    output_contract: OutputContract::ThreeOptions,
    profile_shape: ProfileShape::Coarse,
};
