//! Machine-parseable output formatting rules.
//!
//! The request layer splits the engine's free-text response into discrete
//! candidates using the delimiters emitted here, so this grammar is a
//! contract with downstream parsing code, not styling advice. The compiler
//! appends these rules after everything else: the last stated instruction
//! is the one an engine is most likely to honor, and parseability is the
//! instruction that cannot be lost.

use crate::schema::ContentType;

/// Inclusive tweet-count range for one thread variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweetRange {
    pub min: u8,
    pub max: u8,
}

impl TweetRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn overlaps(&self, other: &TweetRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl std::fmt::Display for TweetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {} tweets", self.min, self.max)
    }
}

/// Structural shape of the engine's response, owned by each strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputContract {
    /// Three labeled, self-contained options plus rationale and a
    /// recommendation. The shared archetype contract.
    ThreeOptions,
    /// Three options, each a compact run of at most `max_tweets` tweets.
    CompactOptions { max_tweets: u8 },
    /// Three variants of strictly increasing depth, each with its own
    /// tweet-count range. Ranges must not overlap.
    VariantLadder {
        short: TweetRange,
        medium: TweetRange,
        long: TweetRange,
        require_limitation: bool,
    },
    /// One long-form document, no alternatives.
    SinglePiece,
}

impl OutputContract {
    /// The ladder ranges, for contracts that have one.
    pub fn variant_ranges(&self) -> Option<[TweetRange; 3]> {
        match self {
            OutputContract::VariantLadder {
                short,
                medium,
                long,
                ..
            } => Some([*short, *medium, *long]),
            _ => None,
        }
    }
}

fn push_option_grammar(rules: &mut String, content_type: ContentType, max_tweets: Option<u8>) {
    rules.push_str(
        "Produce exactly 3 options. Label each one on its own line as \
         `Option 1:`, `Option 2:`, `Option 3:` with nothing else on the \
         label line.\n",
    );
    match content_type {
        ContentType::Thread => {
            rules.push_str(
                "Inside each option, number every tweet as `1/`, `2/`, and so \
                 on, with the tweet text immediately after the slash and no \
                 space between the number, the slash, and the text. One tweet \
                 per line.\n",
            );
        }
        ContentType::Tweet | ContentType::Article => {
            rules.push_str(
                "Each option is one self-contained piece of text with no \
                 internal numbering.\n",
            );
        }
    }
    if let Some(max_tweets) = max_tweets {
        rules.push_str(&format!(
            "Each option contains at most {max_tweets} tweets. When an option \
             has more than one tweet, number them `1/`, `2/` in the same \
             no-space style.\n"
        ));
    }
    rules.push_str(
        "After Option 3, write one rationale line per option in the form \
         `Option N: <one sentence on why it works>`.\n\
         End with a single line `Recommendation: Option N` naming exactly \
         one option.\n",
    );
}

fn push_ladder_grammar(
    rules: &mut String,
    short: TweetRange,
    medium: TweetRange,
    long: TweetRange,
    require_limitation: bool,
) {
    rules.push_str(&format!(
        "Produce exactly 3 variants of increasing depth, labeled on their \
         own lines:\n\
         `Variant 1 (short, {short}):`\n\
         `Variant 2 (medium, {medium}):`\n\
         `Variant 3 (long, {long}):`\n\
         The three tweet counts are disjoint; a variant outside its range is \
         invalid output.\n",
    ));
    rules.push_str(
        "Number every tweet as `1/`, `2/`, and so on, with the text \
         immediately after the slash and no space between the number, the \
         slash, and the text. One tweet per line.\n",
    );
    if require_limitation {
        rules.push_str(
            "Every variant must contain at least one tweet that states a real \
             limitation, risk, or downside of the subject.\n",
        );
    }
    rules.push_str(
        "After Variant 3, write one rationale line per variant in the form \
         `Variant N: <one sentence on why it works>`.\n\
         End with a single line `Recommendation: Variant N` naming exactly \
         one variant.\n",
    );
}

/// Render the literal formatting grammar for a contract. Appended verbatim
/// to the end of the system directive.
pub fn format_rules(contract: &OutputContract, content_type: ContentType) -> String {
    let mut rules = String::from("Respond in exactly this format, with no preamble and no commentary outside it:\n");
    match contract {
        OutputContract::ThreeOptions => {
            push_option_grammar(&mut rules, content_type, None);
        }
        OutputContract::CompactOptions { max_tweets } => {
            push_option_grammar(&mut rules, ContentType::Tweet, Some(*max_tweets));
        }
        OutputContract::VariantLadder {
            short,
            medium,
            long,
            require_limitation,
        } => {
            push_ladder_grammar(&mut rules, *short, *medium, *long, *require_limitation);
        }
        OutputContract::SinglePiece => {
            rules.push_str(
                "Produce one document and nothing else: a title on the first \
                 line, then the body. No options, no variants, no rationale \
                 block.\n\
                 The final line of the body must be a question that invites \
                 readers to respond.\n",
            );
        }
    }
    rules.push_str("Plain text only: no markdown code fences and no bullet syntax unless the post itself calls for it.\n");
    rules
}
