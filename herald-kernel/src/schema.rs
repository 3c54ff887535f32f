use serde::{Deserialize, Serialize};

/// Persuasion archetypes. Each one maps to exactly one registry strategy;
/// callers pick these per post, never per account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    ScrollStopper,
    DebateStarter,
    ViralCatalyst,
    Balanced,
}

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        const ALL: &[Archetype] = &[
            Archetype::ScrollStopper,
            Archetype::DebateStarter,
            Archetype::ViralCatalyst,
            Archetype::Balanced,
        ];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::ScrollStopper => "scroll-stopper",
            Archetype::DebateStarter => "debate-starter",
            Archetype::ViralCatalyst => "viral-catalyst",
            Archetype::Balanced => "balanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "scroll-stopper" => Some(Archetype::ScrollStopper),
            "debate-starter" => Some(Archetype::DebateStarter),
            "viral-catalyst" => Some(Archetype::ViralCatalyst),
            "balanced" => Some(Archetype::Balanced),
            _ => None,
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Archetype {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown archetype `{value}`"))
    }
}

/// Genre templates with their own structural requirements, orthogonal to the
/// persuasion archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostType {
    AlphaThread,
    BuildInPublic,
    ProtocolBreakdown,
    Article,
}

impl PostType {
    pub fn all() -> &'static [PostType] {
        const ALL: &[PostType] = &[
            PostType::AlphaThread,
            PostType::BuildInPublic,
            PostType::ProtocolBreakdown,
            PostType::Article,
        ];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::AlphaThread => "alpha-thread",
            PostType::BuildInPublic => "build-in-public",
            PostType::ProtocolBreakdown => "protocol-breakdown",
            PostType::Article => "article",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "alpha-thread" => Some(PostType::AlphaThread),
            "build-in-public" => Some(PostType::BuildInPublic),
            "protocol-breakdown" => Some(PostType::ProtocolBreakdown),
            "article" => Some(PostType::Article),
            _ => None,
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PostType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown post type `{value}`"))
    }
}

/// Registry key: the two taxonomies unified behind one lookup. Archetype ids
/// win on a name collision, though the two namespaces are currently disjoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyId {
    Archetype(Archetype),
    PostType(PostType),
}

impl StrategyId {
    pub fn all() -> &'static [StrategyId] {
        const ALL: &[StrategyId] = &[
            StrategyId::Archetype(Archetype::ScrollStopper),
            StrategyId::Archetype(Archetype::DebateStarter),
            StrategyId::Archetype(Archetype::ViralCatalyst),
            StrategyId::Archetype(Archetype::Balanced),
            StrategyId::PostType(PostType::AlphaThread),
            StrategyId::PostType(PostType::BuildInPublic),
            StrategyId::PostType(PostType::ProtocolBreakdown),
            StrategyId::PostType(PostType::Article),
        ];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::Archetype(archetype) => archetype.as_str(),
            StrategyId::PostType(post_type) => post_type.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Archetype::parse(value)
            .map(StrategyId::Archetype)
            .or_else(|| PostType::parse(value).map(StrategyId::PostType))
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StrategyId {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown strategy `{value}`"))
    }
}

impl Serialize for StrategyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StrategyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        StrategyId::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown strategy `{value}`")))
    }
}

/// Content container the directives describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Tweet,
    Thread,
    Article,
}

impl ContentType {
    pub fn all() -> &'static [ContentType] {
        const ALL: &[ContentType] = &[
            ContentType::Tweet,
            ContentType::Thread,
            ContentType::Article,
        ];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Tweet => "tweet",
            ContentType::Thread => "thread",
            ContentType::Article => "article",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "tweet" => Some(ContentType::Tweet),
            "thread" => Some(ContentType::Thread),
            "article" => Some(ContentType::Article),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown content type `{value}`"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Professional,
    Casual,
    Bold,
    Educational,
    Inspirational,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        const ALL: &[Tone] = &[
            Tone::Professional,
            Tone::Casual,
            Tone::Bold,
            Tone::Educational,
            Tone::Inspirational,
        ];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Bold => "bold",
            Tone::Educational => "educational",
            Tone::Inspirational => "inspirational",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "bold" => Some(Tone::Bold),
            "educational" => Some(Tone::Educational),
            "inspirational" => Some(Tone::Inspirational),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown tone `{value}`"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthTier {
    Short,
    Medium,
    Long,
}

impl LengthTier {
    pub fn all() -> &'static [LengthTier] {
        const ALL: &[LengthTier] = &[LengthTier::Short, LengthTier::Medium, LengthTier::Long];
        ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Long => "long",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "short" => Some(LengthTier::Short),
            "medium" => Some(LengthTier::Medium),
            "long" => Some(LengthTier::Long),
            _ => None,
        }
    }
}

impl std::fmt::Display for LengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LengthTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown length tier `{value}`"))
    }
}
