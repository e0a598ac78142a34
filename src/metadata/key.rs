//! Typed metadata keys.
//!
//! Provider and tool configuration travels as flat, dot-namespaced string
//! keys (`model.temperature`, `rapida.credential_id`). Every key the
//! console understands gets a variant here; anything else is carried in
//! [`MetadataKey::Other`] unchanged so unknown configuration survives a
//! round trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! metadata_keys {
    ($( $(#[$meta:meta])* $variant:ident => $wire:literal, )+) => {
        /// A recognized metadata key, or a passthrough for unrecognized ones.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MetadataKey {
            $( $(#[$meta])* $variant, )+
            /// Key not known to this crate; preserved verbatim.
            Other(String),
        }

        impl MetadataKey {
            /// Every recognized key, in declaration order.
            pub const KNOWN: &'static [MetadataKey] = &[ $( MetadataKey::$variant, )+ ];

            /// Wire representation of the key.
            pub fn as_str(&self) -> &str {
                match self {
                    $( MetadataKey::$variant => $wire, )+
                    MetadataKey::Other(raw) => raw.as_str(),
                }
            }

            fn known(raw: &str) -> Option<Self> {
                match raw {
                    $( $wire => Some(MetadataKey::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

metadata_keys! {
    CredentialId => "rapida.credential_id",

    ModelId => "model.id",
    ModelName => "model.name",
    ModelTemperature => "model.temperature",
    ModelTopP => "model.top_p",
    ModelTopK => "model.top_k",
    /// Cohere's spelling of top_p.
    ModelP => "model.p",
    /// Cohere's spelling of top_k.
    ModelK => "model.k",
    ModelFrequencyPenalty => "model.frequency_penalty",
    ModelPresencePenalty => "model.presence_penalty",
    ModelMaxCompletionTokens => "model.max_completion_tokens",
    ModelMaxTokens => "model.max_tokens",
    ModelMaxOutputTokens => "model.max_output_tokens",
    ModelResponseFormat => "model.response_format",
    ModelReasoningEffort => "model.reasoning_effort",
    ModelSeed => "model.seed",
    ModelServiceTier => "model.service_tier",
    ModelTopLogprobs => "model.top_logprobs",
    ModelMetadata => "model.metadata",
    ModelStop => "model.stop",
    ModelStopSequences => "model.stop_sequences",
    ModelToolChoice => "model.tool_choice",
    ModelUser => "model.user",
    ModelContainer => "model.container",
    ModelThinking => "model.thinking",
    ModelCandidateCount => "model.candidate_count",
    ModelSafetyMode => "model.safety_mode",

    ListenLanguage => "listen.language",
    ListenModel => "listen.model",
    ListenThreshold => "listen.threshold",
    ListenKeywords => "listen.keywords",

    SpeakLanguage => "speak.language",
    SpeakVoiceId => "speak.voice.id",
    SpeakModel => "speak.model",

    RerankTopN => "rerank.top_n",

    StorageBucket => "storage.bucket",
    StorageRegion => "storage.region",

    Phone => "phone",

    ToolMethod => "tool.method",
    ToolEndpoint => "tool.endpoint",
    ToolHeaders => "tool.headers",
    ToolParameters => "tool.parameters",
    ToolEndpointId => "tool.endpoint_id",
    ToolKnowledgeId => "tool.knowledge_id",
    ToolSearchType => "tool.search_type",
    ToolTopK => "tool.top_k",
    ToolScoreThreshold => "tool.score_threshold",
    ToolMaxHoldTime => "tool.max_hold_time",
}

impl MetadataKey {
    /// Whether this key is a passthrough rather than a recognized key.
    pub fn is_other(&self) -> bool {
        matches!(self, MetadataKey::Other(_))
    }

    /// Whether the wire key starts with `prefix` (e.g. `"microphone."`).
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }
}

impl From<&str> for MetadataKey {
    fn from(raw: &str) -> Self {
        Self::known(raw).unwrap_or_else(|| MetadataKey::Other(raw.to_string()))
    }
}

impl From<String> for MetadataKey {
    fn from(raw: String) -> Self {
        Self::known(&raw).unwrap_or(MetadataKey::Other(raw))
    }
}

impl FromStr for MetadataKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for MetadataKey {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for MetadataKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for MetadataKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetadataKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(MetadataKey::from)
    }
}
