//! Static rule text embedded into every system directive.
//!
//! Everything the compiler knows about platform distribution mechanics and
//! house style lives here as plain constants so it can be audited and tuned
//! in one place. Nothing in this module is parameterized.

/// How the platform decides what to show. The generation engine gets this
/// verbatim so its drafts optimize for the right signals from the start.
pub const PLATFORM_MECHANICS: &str = r#"How distribution works on this platform:

Engagement weight hierarchy (strongest signal first):
1. Replies and quote posts. A post that makes people respond outranks one
   that merely gets liked. Ten replies beat a hundred passive likes.
2. Reposts. Each repost re-enters the post into new follower graphs.
3. Profile clicks and follows attributed to the post.
4. Dwell time. Readers pausing on a post, expanding it, or reading a full
   thread counts even if they never press a button.
5. Likes. The weakest positive signal; treat them as a floor, not a goal.

The early-lifetime window:
- The first 30 to 60 minutes decide a post's ceiling. The algorithm shows
  the post to a small slice of followers and measures engagement velocity;
  strong early velocity earns progressively wider distribution, weak
  velocity buries it.
- Everything about the draft should maximize the odds that the first
  hundred viewers interact: the opening line carries most of that burden.

Suppression triggers (each one measurably cuts reach):
- External links in the post body. The platform keeps users on-platform;
  body links are the single most reliable reach killer. If a link matters,
  say so and put it in a reply.
- More than two hashtags. Hashtag stuffing reads as spam to both the
  ranking system and human readers.
- Engagement-bait phrasing ("like if you agree", "repost if", and
  relatives). The ranking system detects and demotes these patterns.
- Posts in the dead zone between a tight post and a real long-form piece:
  too long to scan, too short to reward the click.

Boost behavior:
- Native media and native long-form text are favored over anything that
  sends users away.
- Replying to early responders extends the engagement window and compounds
  velocity.
- Consistent posting cadence raises the baseline slice of followers who
  see each new post."#;

/// House style for everything the engine drafts, whatever the strategy.
pub const VOICE_GUIDELINES: &str = r#"Voice and style rules:

- Write like one person talking to another. No press-release voice, no
  "we are thrilled to announce", no corporate hedging.
- Short sentences. Cut every word that does not earn its place. One idea
  per sentence, one argument per post.
- Concrete beats abstract: numbers, names, and specifics over claims.
  "Cut build time from 40 to 9 minutes" not "dramatically improved
  performance".
- No emoji walls. One emoji is seasoning; five is noise.
- Never open with a hedge ("I think", "In my opinion", "Just wanted to").
  The reader grants no authority you do not claim.
- Line breaks are pacing. Whitespace between beats makes a post scannable;
  dense blocks get scrolled past.
- Plain words over jargon unless the audience is explicitly technical, and
  even then prefer the shortest accurate term.
- Confidence without arrogance: state positions directly, acknowledge real
  trade-offs, never manufacture certainty."#;

/// What separates a working hook from a throat-clearing opener. Strategy
/// entries carry their own hook pattern lists; this is the shared craft.
pub const HOOK_CRAFT: &str = r#"Hook construction:

- The first line is the whole ad for the rest of the post. Readers decide
  in under a second whether to stop scrolling.
- A hook makes a specific promise: a result, a contrarian claim, a number
  that looks wrong, a mistake admitted. Vague curiosity ("a few thoughts
  on...") is not a promise.
- Front-load the surprising element. "We deleted half our tests and
  shipped faster" beats "Here's what happened when we rethought testing".
- Never spend the first line on context. Context is what paragraph two is
  for.
- The hook must be honest: the post has to cash the check the first line
  writes. Bait that the body does not pay off trains readers to skip the
  author."#;
