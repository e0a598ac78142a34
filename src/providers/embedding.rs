//! Embedding providers used by knowledge bases.

use super::ProviderKind;
use super::catalog;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::reconcile::Predicate;
use crate::validate::Rule;

const KEEP: &[K] = &[K::CredentialId, K::ModelId, K::ModelName];

const fn model_fields(
    id: (&'static str, Predicate),
    name: (&'static str, Predicate),
) -> [FieldSpec; 3] {
    [
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::new(K::ModelId, Some(id.0), Some(id.1)),
        FieldSpec::new(K::ModelName, Some(name.0), Some(name.1)),
    ]
}

const fn model_rules(credential_message: &'static str, id: Predicate) -> [Rule; 2] {
    [
        Rule::Required {
            key: K::CredentialId,
            message: credential_message,
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: id,
            message: "Please check and select valid model from dropdown.",
        },
    ]
}

const OPENAI: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Embedding,
    code: "openai",
    aliases: &[],
    name: "OpenAI",
    fields: &model_fields(
        (
            "openai/text-embedding-3-small",
            catalog::is_openai_embedding_model_id,
        ),
        ("text-embedding-3-small", catalog::is_openai_embedding_model_name),
    ),
    keep: KEEP,
    passthrough: None,
    rules: &model_rules(
        "Please check and provide a valid credentials for openai",
        catalog::is_openai_embedding_model_id,
    ),
};

const COHERE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Embedding,
    code: "cohere",
    aliases: &[],
    name: "Cohere",
    fields: &model_fields(
        (
            "cohere/embed-english-v3.0",
            catalog::is_cohere_embedding_model_id,
        ),
        ("embed-english-v3.0", catalog::is_cohere_embedding_model_name),
    ),
    keep: KEEP,
    passthrough: None,
    rules: &model_rules(
        "Please check and provide a valid credentials for cohere",
        catalog::is_cohere_embedding_model_id,
    ),
};

const GOOGLE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Embedding,
    code: "google",
    aliases: &["gemini"],
    name: "Google",
    fields: &model_fields(
        (
            "google/gemini-embedding-001",
            catalog::is_google_embedding_model_id,
        ),
        ("gemini-embedding-001", catalog::is_google_embedding_model_name),
    ),
    keep: KEEP,
    passthrough: None,
    rules: &model_rules(
        "Please check and provide a valid credentials for google.",
        catalog::is_google_embedding_model_id,
    ),
};

const VOYAGE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Embedding,
    code: "voyageai",
    aliases: &["voyage"],
    name: "Voyage AI",
    fields: &model_fields(
        ("voyageai/voyage-3", catalog::is_voyage_embedding_model_id),
        ("voyage-3", catalog::is_voyage_embedding_model_name),
    ),
    keep: KEEP,
    passthrough: None,
    rules: &model_rules(
        "Please check and provide a valid credentials for voyageai",
        catalog::is_voyage_embedding_model_id,
    ),
};

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[COHERE, OPENAI, GOOGLE, VOYAGE];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::metadata::MetadataRecord;

    #[test]
    fn openai_embedding_defaults() {
        let input: MetadataRecord = [("rapida.credential_id", "c"), ("model.temperature", "0.2")]
            .into_iter()
            .collect();
        let out = OPENAI.assemble(&input);
        let keys: Vec<&str> = out.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["rapida.credential_id", "model.id", "model.name"]);
        assert!(OPENAI.is_valid(&out));
    }

    #[test]
    fn text_model_is_not_an_embedding_model() {
        let input: MetadataRecord = [("model.id", "voyageai/voyage-3")].into_iter().collect();
        let out = COHERE.assemble(&input);
        assert_eq!(out.get(&K::ModelId), Some("cohere/embed-english-v3.0"));
        assert!(!VOYAGE.is_valid(&input));
    }
}
