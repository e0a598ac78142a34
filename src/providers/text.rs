//! Text generation providers.

use super::ProviderKind;
use super::catalog;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::validate::Rule;

const SELECT_MODEL: &str = "Please check and select valid model from dropdown.";
const TEMPERATURE: &str =
    "Please check and provide a correct value for temperature any decimal value between 0 to 1";
const TOP_P: &str =
    "Please check and provide a correct value for top_p any decimal value between 0 to 1";
const FREQUENCY_PENALTY: &str =
    "Please check and provide a correct value for frequency_penalty a valid value between -2 to 2.";
const PRESENCE_PENALTY: &str = "Please check and provide a correct value for presence_penalty any decimal value between -2 to 2";
const MAX_COMPLETION_TOKENS: &str = "Please check and provide a correct value for max_completion_tokens it should be greater then 1.";
const METADATA: &str = "Please check and provide a correct value for metadata.";

const fn temperature() -> Rule {
    Rule::Range {
        key: K::ModelTemperature,
        min: 0.0,
        max: 1.0,
        required: true,
        message: TEMPERATURE,
    }
}

const fn penalty(key: K, required: bool, message: &'static str) -> Rule {
    Rule::Range {
        key,
        min: -2.0,
        max: 2.0,
        required,
        message,
    }
}

const fn unit(key: K, required: bool, message: &'static str) -> Rule {
    Rule::Range {
        key,
        min: 0.0,
        max: 1.0,
        required,
        message,
    }
}

const fn positive(key: K, required: bool, message: &'static str) -> Rule {
    Rule::MinInt {
        key,
        min: 1,
        required,
        message,
    }
}

const OPENAI: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Text,
    code: "openai",
    aliases: &[],
    name: "OpenAI",
    fields: &[
        FieldSpec::new(
            K::ModelId,
            Some("openai/gpt-4"),
            Some(catalog::is_openai_text_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("gpt-4"),
            Some(catalog::is_openai_text_model_name),
        ),
        FieldSpec::new(K::ModelFrequencyPenalty, Some("0"), None),
        FieldSpec::new(K::ModelTemperature, Some("0.7"), None),
        FieldSpec::new(K::ModelTopP, Some("1"), None),
        FieldSpec::new(K::ModelPresencePenalty, Some("0"), None),
        FieldSpec::new(K::ModelMaxCompletionTokens, Some("2048"), None),
        FieldSpec::passthrough(K::ModelResponseFormat),
        FieldSpec::passthrough(K::ModelStop),
        FieldSpec::passthrough(K::ModelToolChoice),
        FieldSpec::passthrough(K::ModelUser),
        FieldSpec::passthrough(K::ModelMetadata),
        FieldSpec::passthrough(K::ModelSeed),
        FieldSpec::passthrough(K::ModelReasoningEffort),
        FieldSpec::passthrough(K::ModelServiceTier),
        FieldSpec::passthrough(K::ModelTopLogprobs),
        FieldSpec::passthrough(K::CredentialId),
    ],
    keep: &[
        K::CredentialId,
        K::ModelId,
        K::ModelName,
        K::ModelFrequencyPenalty,
        K::ModelTemperature,
        K::ModelTopP,
        K::ModelPresencePenalty,
        K::ModelMaxCompletionTokens,
        K::ModelResponseFormat,
        K::ModelReasoningEffort,
        K::ModelSeed,
        K::ModelServiceTier,
        K::ModelTopLogprobs,
        K::ModelMetadata,
    ],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for openai",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_openai_text_model_id,
            message: SELECT_MODEL,
        },
        penalty(K::ModelFrequencyPenalty, true, FREQUENCY_PENALTY),
        temperature(),
        unit(K::ModelTopP, true, TOP_P),
        penalty(K::ModelPresencePenalty, true, PRESENCE_PENALTY),
        positive(K::ModelMaxCompletionTokens, true, MAX_COMPLETION_TOKENS),
        Rule::ResponseFormat {
            key: K::ModelResponseFormat,
        },
        Rule::Json {
            key: K::ModelMetadata,
            message: METADATA,
        },
    ],
};

const AZURE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Text,
    code: "azure",
    aliases: &["azure-openai", "azure_openai"],
    name: "Azure OpenAI",
    fields: &[
        FieldSpec::new(
            K::ModelId,
            Some("azure/gpt-4o"),
            Some(catalog::is_azure_text_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("gpt-4o"),
            Some(catalog::is_azure_text_model_name),
        ),
        FieldSpec::new(K::ModelFrequencyPenalty, Some("0"), None),
        FieldSpec::new(K::ModelTemperature, Some("0.7"), None),
        FieldSpec::new(K::ModelTopP, Some("1"), None),
        FieldSpec::passthrough(K::ModelPresencePenalty),
        FieldSpec::new(K::ModelMaxCompletionTokens, Some("2048"), None),
        FieldSpec::passthrough(K::ModelResponseFormat),
        FieldSpec::passthrough(K::ModelStop),
        FieldSpec::passthrough(K::ModelToolChoice),
        FieldSpec::passthrough(K::ModelUser),
        FieldSpec::passthrough(K::ModelMetadata),
        FieldSpec::new(K::CredentialId, Some(""), None),
    ],
    keep: &[
        K::CredentialId,
        K::ModelId,
        K::ModelName,
        K::ModelFrequencyPenalty,
        K::ModelTemperature,
        K::ModelTopP,
        K::ModelPresencePenalty,
        K::ModelMaxCompletionTokens,
        K::ModelMetadata,
        K::ModelResponseFormat,
        K::ModelStop,
        K::ModelToolChoice,
        K::ModelUser,
    ],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for azure openai",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_azure_text_model_id,
            message: SELECT_MODEL,
        },
        penalty(K::ModelFrequencyPenalty, false, FREQUENCY_PENALTY),
        temperature(),
        unit(K::ModelTopP, true, TOP_P),
        penalty(K::ModelPresencePenalty, false, PRESENCE_PENALTY),
        positive(K::ModelMaxCompletionTokens, true, MAX_COMPLETION_TOKENS),
        Rule::ResponseFormat {
            key: K::ModelResponseFormat,
        },
        Rule::Json {
            key: K::ModelMetadata,
            message: METADATA,
        },
    ],
};

const ANTHROPIC: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Text,
    code: "anthropic",
    aliases: &[],
    name: "Anthropic",
    fields: &[
        FieldSpec::new(
            K::ModelId,
            Some("anthropic/claude-opus-4-20250514"),
            Some(catalog::is_anthropic_text_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("claude-opus-4-20250514"),
            Some(catalog::is_anthropic_text_model_name),
        ),
        FieldSpec::new(K::ModelMaxTokens, Some("1028"), None),
        FieldSpec::new(K::ModelTemperature, Some("1.0"), None),
        FieldSpec::new(
            K::ModelServiceTier,
            Some("auto"),
            Some(catalog::is_anthropic_service_tier),
        ),
        FieldSpec::passthrough(K::ModelThinking),
        FieldSpec::passthrough(K::ModelTopK),
        FieldSpec::passthrough(K::ModelTopP),
        FieldSpec::passthrough(K::ModelStopSequences),
        FieldSpec::passthrough(K::ModelMetadata),
        FieldSpec::passthrough(K::ModelContainer),
        FieldSpec::passthrough(K::CredentialId),
    ],
    keep: &[
        K::CredentialId,
        K::ModelId,
        K::ModelName,
        K::ModelMaxTokens,
        K::ModelTemperature,
        K::ModelTopK,
        K::ModelTopP,
        K::ModelStopSequences,
        K::ModelMetadata,
        K::ModelContainer,
        K::ModelServiceTier,
        K::ModelThinking,
    ],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for anthropic.",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_anthropic_text_model_id,
            message: SELECT_MODEL,
        },
        penalty(
            K::ModelTopK,
            false,
            "Please check and provide a correct value for top_k a valid value between -2 to 2.",
        ),
        temperature(),
        unit(K::ModelTopP, false, TOP_P),
        positive(
            K::ModelMaxTokens,
            true,
            "Please check and provide a correct value for max_tokens.",
        ),
        Rule::Json {
            key: K::ModelThinking,
            message: "Please check and provide a correct value for thinking.",
        },
        Rule::Json {
            key: K::ModelMetadata,
            message: METADATA,
        },
    ],
};

const COHERE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Text,
    code: "cohere",
    aliases: &[],
    name: "Cohere",
    fields: &[
        FieldSpec::new(
            K::ModelId,
            Some("cohere/command-a-03-2025"),
            Some(catalog::is_cohere_text_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("command-a-03-2025"),
            Some(catalog::is_cohere_text_model_name),
        ),
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::new(K::ModelMaxTokens, Some("2048"), None),
        FieldSpec::passthrough(K::ModelTemperature),
        FieldSpec::passthrough(K::ModelP),
        FieldSpec::passthrough(K::ModelK),
        FieldSpec::passthrough(K::ModelFrequencyPenalty),
        FieldSpec::passthrough(K::ModelPresencePenalty),
        FieldSpec::new(K::ModelStopSequences, Some(""), None),
        FieldSpec::new(
            K::ModelSafetyMode,
            Some("CONTEXTUAL"),
            Some(catalog::is_cohere_safety_mode),
        ),
        FieldSpec::passthrough(K::ModelSeed),
        FieldSpec::passthrough(K::ModelResponseFormat),
    ],
    keep: &[
        K::CredentialId,
        K::ModelId,
        K::ModelName,
        K::ModelMaxTokens,
        K::ModelTemperature,
        K::ModelP,
        K::ModelK,
        K::ModelFrequencyPenalty,
        K::ModelPresencePenalty,
        K::ModelStopSequences,
        K::ModelSafetyMode,
        K::ModelSeed,
        K::ModelResponseFormat,
    ],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for cohere",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_cohere_text_model_id,
            message: SELECT_MODEL,
        },
        temperature(),
        penalty(
            K::ModelFrequencyPenalty,
            false,
            "Please check and provide a correct value for frequency_penalty any decimal value between -2 to 2",
        ),
        penalty(K::ModelPresencePenalty, false, PRESENCE_PENALTY),
        unit(K::ModelP, false, TOP_P),
        penalty(
            K::ModelK,
            false,
            "Please check and provide a correct value for top_k any decimal value between -2 to 2",
        ),
        positive(
            K::ModelMaxTokens,
            true,
            "Please check and provide a correct value for max_completion_token.",
        ),
        Rule::ResponseFormat {
            key: K::ModelResponseFormat,
        },
    ],
};

const GEMINI: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Text,
    code: "gemini",
    aliases: &["google"],
    name: "Gemini",
    fields: &[
        FieldSpec::new(
            K::ModelId,
            Some("google/gemini-2.5-pro"),
            Some(catalog::is_gemini_text_model_id),
        ),
        FieldSpec::new(
            K::ModelName,
            Some("gemini-2.5-pro"),
            Some(catalog::is_gemini_text_model_name),
        ),
        FieldSpec::new(K::ModelCandidateCount, Some("1"), None),
        FieldSpec::new(K::ModelTemperature, Some("1"), None),
        FieldSpec::new(K::ModelMaxOutputTokens, Some("2048"), None),
        FieldSpec::new(K::ModelStopSequences, Some("STOP!"), None),
        FieldSpec::new(K::ModelPresencePenalty, Some("0.0"), None),
        FieldSpec::new(K::ModelFrequencyPenalty, Some("0.0"), None),
        FieldSpec::passthrough(K::ModelResponseFormat),
        FieldSpec::passthrough(K::ModelTopP),
        FieldSpec::passthrough(K::ModelTopK),
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::passthrough(K::ModelSeed),
    ],
    keep: &[
        K::CredentialId,
        K::ModelId,
        K::ModelName,
        K::ModelFrequencyPenalty,
        K::ModelPresencePenalty,
        K::ModelTemperature,
        K::ModelTopP,
        K::ModelTopK,
        K::ModelCandidateCount,
        K::ModelSeed,
        K::ModelMaxOutputTokens,
        K::ModelResponseFormat,
        K::ModelStopSequences,
    ],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: "Please check and provide a valid credentials for google.",
        },
        Rule::OneOf {
            key: K::ModelId,
            allowed: catalog::is_gemini_text_model_id,
            message: SELECT_MODEL,
        },
        penalty(
            K::ModelPresencePenalty,
            false,
            "Please check and provide a correct value for presence_penalty a valid value between -2 to 2.",
        ),
        penalty(K::ModelFrequencyPenalty, false, FREQUENCY_PENALTY),
        temperature(),
        unit(K::ModelTopP, false, TOP_P),
        positive(
            K::ModelMaxOutputTokens,
            false,
            "Please check and provide a correct value for max_completion_tokens",
        ),
        Rule::ResponseFormat {
            key: K::ModelResponseFormat,
        },
    ],
};

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[OPENAI, AZURE, ANTHROPIC, COHERE, GEMINI];
