//! Closed provider registry and dispatch.
//!
//! Every configurable integration is identified by a category and a code.
//! Codes collide across categories (`openai` is a text, embedding and speech
//! provider), so dispatch always takes both.

pub mod catalog;
mod embedding;
mod reranker;
mod speech_to_text;
mod storage;
mod telephony;
mod text;
mod text_to_speech;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::descriptor::ProviderDescriptor;
use crate::error::{MetadataError, ValidationError};
use crate::metadata::MetadataRecord;

/// Provider category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Text,
    SpeechToText,
    TextToSpeech,
    Embedding,
    Reranker,
    Storage,
    Telephony,
    Tool,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 8] = [
        ProviderKind::Text,
        ProviderKind::SpeechToText,
        ProviderKind::TextToSpeech,
        ProviderKind::Embedding,
        ProviderKind::Reranker,
        ProviderKind::Storage,
        ProviderKind::Telephony,
        ProviderKind::Tool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::SpeechToText => "stt",
            Self::TextToSpeech => "tts",
            Self::Embedding => "embedding",
            Self::Reranker => "reranker",
            Self::Storage => "storage",
            Self::Telephony => "telephony",
            Self::Tool => "tool",
        }
    }

    /// Message reported when validating against an unregistered code.
    pub fn unknown_provider_message(&self) -> &'static str {
        match self {
            Self::Text => "Please select a valid model and provider.",
            Self::Embedding => "Please select a valid provider and model for embedding",
            _ => "Please select a valid provider.",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "text" | "llm" | "text_generation" => Some(Self::Text),
            "stt" | "speech_to_text" => Some(Self::SpeechToText),
            "tts" | "text_to_speech" => Some(Self::TextToSpeech),
            "embedding" | "embeddings" => Some(Self::Embedding),
            "reranker" | "rerank" | "reranking" => Some(Self::Reranker),
            "storage" => Some(Self::Storage),
            "telephony" => Some(Self::Telephony),
            "tool" | "tools" => Some(Self::Tool),
            _ => None,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = MetadataError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| MetadataError::UnknownKind(value.to_string()))
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving a provider code.
#[derive(Debug, Clone)]
pub enum Dispatch {
    Known(&'static ProviderDescriptor),
    /// Unrecognized code: assembly passes the record through, validation
    /// always fails.
    Unknown { kind: ProviderKind, code: String },
}

impl Dispatch {
    pub fn descriptor(&self) -> Option<&'static ProviderDescriptor> {
        match self {
            Self::Known(descriptor) => Some(*descriptor),
            Self::Unknown { .. } => None,
        }
    }

    pub fn assemble(&self, existing: &MetadataRecord) -> MetadataRecord {
        match self {
            Self::Known(descriptor) => descriptor.assemble(existing),
            Self::Unknown { .. } => existing.clone(),
        }
    }

    pub fn validate(&self, options: &MetadataRecord) -> Result<(), ValidationError> {
        match self {
            Self::Known(descriptor) => descriptor.validate(options),
            Self::Unknown { kind, .. } => {
                Err(ValidationError::new(kind.unknown_provider_message()))
            }
        }
    }

    pub fn is_valid(&self, options: &MetadataRecord) -> bool {
        self.validate(options).is_ok()
    }

    /// Strict variant for callers that treat an unknown code as an error.
    pub fn require(self) -> Result<&'static ProviderDescriptor, MetadataError> {
        match self {
            Self::Known(descriptor) => Ok(descriptor),
            Self::Unknown { kind, code } => Err(MetadataError::UnknownProvider {
                kind: kind.to_string(),
                code,
            }),
        }
    }
}

/// Lookup table of every provider and tool descriptor.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<&'static ProviderDescriptor>,
}

impl Registry {
    /// Registry holding every built-in provider and tool.
    pub fn builtin() -> Self {
        let descriptors = [
            text::DESCRIPTORS,
            speech_to_text::DESCRIPTORS,
            text_to_speech::DESCRIPTORS,
            embedding::DESCRIPTORS,
            reranker::DESCRIPTORS,
            storage::DESCRIPTORS,
            telephony::DESCRIPTORS,
            crate::tools::DESCRIPTORS,
        ]
        .into_iter()
        .flatten()
        .collect();
        Self { descriptors }
    }

    /// Empty registry, for callers assembling their own set.
    pub fn empty() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Add a descriptor. A later registration shadows an earlier one with
    /// the same kind and code.
    pub fn register(&mut self, descriptor: &'static ProviderDescriptor) {
        self.descriptors.insert(0, descriptor);
    }

    pub fn dispatch(&self, kind: ProviderKind, code: &str) -> Dispatch {
        let code = code.trim();
        match self
            .descriptors
            .iter()
            .copied()
            .find(|d| d.kind == kind && d.matches(code))
        {
            Some(descriptor) => Dispatch::Known(descriptor),
            None => {
                tracing::warn!(kind = %kind, code, "Unknown provider code");
                Dispatch::Unknown {
                    kind,
                    code: code.to_string(),
                }
            }
        }
    }

    /// Assemble `existing` for a known provider and validate the result.
    ///
    /// Unknown codes fail with [`MetadataError::UnknownProvider`] instead of
    /// passing the record through.
    pub fn prepare(
        &self,
        kind: ProviderKind,
        code: &str,
        existing: &MetadataRecord,
    ) -> crate::Result<MetadataRecord> {
        let descriptor = self.dispatch(kind, code).require()?;
        let assembled = descriptor.assemble(existing);
        descriptor.validate(&assembled)?;
        Ok(assembled)
    }

    /// Registered codes for `kind`, in registration order.
    pub fn providers(&self, kind: ProviderKind) -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = Vec::new();
        for descriptor in self.descriptors.iter().filter(|d| d.kind == kind) {
            if !codes.contains(&descriptor.code) {
                codes.push(descriptor.code);
            }
        }
        codes
    }

    pub fn descriptors(
        &self,
        kind: ProviderKind,
    ) -> impl Iterator<Item = &'static ProviderDescriptor> + '_ {
        self.descriptors
            .iter()
            .copied()
            .filter(move |d| d.kind == kind)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!(
            "speech-to-text".parse::<ProviderKind>().unwrap(),
            ProviderKind::SpeechToText
        );
        assert_eq!("TTS".parse::<ProviderKind>().unwrap(), ProviderKind::TextToSpeech);
        assert_eq!("llm".parse::<ProviderKind>().unwrap(), ProviderKind::Text);
        assert!(matches!(
            "video".parse::<ProviderKind>(),
            Err(MetadataError::UnknownKind(_))
        ));
        for kind in ProviderKind::ALL {
            assert_eq!(ProviderKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn same_code_resolves_per_kind() {
        let registry = Registry::builtin();
        let text = registry.dispatch(ProviderKind::Text, "openai").require().unwrap();
        let tts = registry
            .dispatch(ProviderKind::TextToSpeech, "openai")
            .require()
            .unwrap();
        assert_eq!(text.kind, ProviderKind::Text);
        assert_eq!(tts.kind, ProviderKind::TextToSpeech);
    }

    #[test]
    fn aliases_dispatch_to_canonical_descriptor() {
        let registry = Registry::builtin();
        let gemini = registry.dispatch(ProviderKind::Text, "google").require().unwrap();
        assert_eq!(gemini.code, "gemini");
        let azure = registry
            .dispatch(ProviderKind::Text, "azure-openai")
            .require()
            .unwrap();
        assert_eq!(azure.code, "azure");
    }

    #[test]
    fn unknown_code_is_identity_and_invalid() {
        let registry = Registry::builtin();
        let input = record(&[("listen.language", "xx"), ("custom.flag", "1")]);
        let dispatch = registry.dispatch(ProviderKind::SpeechToText, "whisper-9000");

        assert!(dispatch.descriptor().is_none());
        assert_eq!(dispatch.assemble(&input), input);
        let err = dispatch.validate(&input).unwrap_err();
        assert_eq!(err.message, "Please select a valid provider.");
        assert!(!dispatch.is_valid(&MetadataRecord::new()));
    }

    #[test]
    fn unknown_text_and_embedding_codes_use_category_message() {
        let registry = Registry::builtin();
        let text = registry.dispatch(ProviderKind::Text, "bedrock");
        assert_eq!(
            text.validate(&MetadataRecord::new()).unwrap_err().message,
            "Please select a valid model and provider."
        );
        let embedding = registry.dispatch(ProviderKind::Embedding, "mistral");
        assert_eq!(
            embedding.validate(&MetadataRecord::new()).unwrap_err().message,
            "Please select a valid provider and model for embedding"
        );
    }

    #[test]
    fn require_reports_unknown_provider() {
        let err = Registry::builtin()
            .dispatch(ProviderKind::Storage, "dropbox")
            .require()
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown storage provider: dropbox");
    }

    #[test]
    fn prepare_assembles_then_validates() {
        let registry = Registry::builtin();
        let ready = registry
            .prepare(
                ProviderKind::Reranker,
                "cohere",
                &record(&[("rapida.credential_id", "c"), ("stale.key", "x")]),
            )
            .unwrap();
        assert_eq!(ready.get(&crate::metadata::MetadataKey::RerankTopN), Some("3"));
        assert!(!ready.contains(&crate::metadata::MetadataKey::from("stale.key")));

        let missing = registry.prepare(ProviderKind::Reranker, "cohere", &MetadataRecord::new());
        assert!(matches!(missing, Err(crate::error::Error::Validation(_))));

        let unknown = registry.prepare(ProviderKind::Reranker, "jina", &MetadataRecord::new());
        assert!(matches!(
            unknown,
            Err(crate::error::Error::Metadata(MetadataError::UnknownProvider { .. }))
        ));
    }

    #[test]
    fn every_kind_has_providers() {
        let registry = Registry::builtin();
        for kind in ProviderKind::ALL {
            assert!(!registry.providers(kind).is_empty(), "{kind} has no providers");
        }
        assert_eq!(
            registry.providers(ProviderKind::SpeechToText),
            vec!["deepgram", "assemblyai"]
        );
    }

    #[test]
    fn descriptor_fields_and_keep_are_consistent() {
        let registry = Registry::builtin();
        for kind in ProviderKind::ALL {
            for descriptor in registry.descriptors(kind) {
                for key in descriptor.keep {
                    assert!(
                        descriptor.fields.iter().any(|f| &f.key == key),
                        "{}/{} keeps {key} without reconciling it",
                        kind,
                        descriptor.code
                    );
                }
            }
        }
    }

    #[test]
    fn every_descriptor_is_idempotent_on_empty_input() {
        let registry = Registry::builtin();
        for kind in ProviderKind::ALL {
            for descriptor in registry.descriptors(kind) {
                let once = descriptor.assemble(&MetadataRecord::new());
                assert_eq!(descriptor.assemble(&once), once, "{kind}/{}", descriptor.code);
            }
        }
    }

    #[test]
    fn registered_descriptor_shadows_builtin() {
        static CUSTOM: ProviderDescriptor = ProviderDescriptor {
            kind: ProviderKind::Storage,
            code: "aws",
            aliases: &[],
            name: "Custom AWS",
            fields: &[],
            keep: &[],
            passthrough: None,
            rules: &[],
        };
        let mut registry = Registry::builtin();
        registry.register(&CUSTOM);
        let resolved = registry.dispatch(ProviderKind::Storage, "aws").require().unwrap();
        assert_eq!(resolved.name, "Custom AWS");
        assert_eq!(registry.providers(ProviderKind::Storage), vec!["aws", "gcp"]);
    }
}
