//! Rerankers applied to knowledge retrieval results.

use super::ProviderKind;
use super::catalog;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::validate::Rule;

const TOP_N: &str = "Please check and provide a correct value for top_n it should be greater then 1.";

fn is_top_n(value: &str) -> bool {
    value.trim().parse::<u32>().is_ok_and(|n| n >= 1)
}

const KEEP: &[K] = &[K::CredentialId, K::ModelId, K::ModelName, K::RerankTopN];

const COHERE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Reranker,
    code: "cohere",
    aliases: &[],
    name: "Cohere",
    fields: &[
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::new(
            K::ModelId,
            Some("cohere/rerank-v3.5"),
            Some(catalog::is_cohere_rerank_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("rerank-v3.5"),
            Some(catalog::is_cohere_rerank_model_name),
        ),
        FieldSpec::new(K::RerankTopN, Some("3"), Some(is_top_n)),
    ],
    keep: KEEP,
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for cohere",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_cohere_rerank_model_id,
            message: "Please check and select valid model from dropdown.",
        },
        Rule::MinInt {
            key: K::RerankTopN,
            min: 1,
            required: true,
            message: TOP_N,
        },
    ],
};

const VOYAGE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Reranker,
    code: "voyageai",
    aliases: &["voyage"],
    name: "Voyage AI",
    fields: &[
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::new(
            K::ModelId,
            Some("voyageai/rerank-2"),
            Some(catalog::is_voyage_rerank_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("rerank-2"),
            Some(catalog::is_voyage_rerank_model_name),
        ),
        FieldSpec::new(K::RerankTopN, Some("3"), Some(is_top_n)),
    ],
    keep: KEEP,
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for voyageai",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_voyage_rerank_model_id,
            message: "Please check and select valid model from dropdown.",
        },
        Rule::MinInt {
            key: K::RerankTopN,
            min: 1,
            required: true,
            message: TOP_N,
        },
    ],
};

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[COHERE, VOYAGE];
