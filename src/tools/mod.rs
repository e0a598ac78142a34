//! Built-in assistant tools.
//!
//! Each tool carries a metadata record reconciled and validated the same way
//! as a provider, plus a function-calling definition (name, description and a
//! JSON-schema `parameters` string) handed to the language model.

mod definition;

pub use self::definition::{ToolDefinition, default_tool_definition};

use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::providers::ProviderKind;
use crate::validate::Rule;

pub const KNOWLEDGE_RETRIEVAL: &str = "knowledge_retrieval";
pub const API_REQUEST: &str = "api_request";
pub const ENDPOINT: &str = "endpoint";
pub const PUT_ON_HOLD: &str = "put_on_hold";
pub const END_OF_CONVERSATION: &str = "end_of_conversation";

pub static SEARCH_TYPES: &[&str] = &["hybrid-search", "semantic-search", "full-text-search"];

pub static HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];

fn is_search_type(value: &str) -> bool {
    SEARCH_TYPES.contains(&value)
}

fn is_http_method(value: &str) -> bool {
    HTTP_METHODS.contains(&value)
}

fn is_top_k(value: &str) -> bool {
    value
        .trim()
        .parse::<i64>()
        .is_ok_and(|n| (1..=10).contains(&n))
}

fn is_score_threshold(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| (0.0..=1.0).contains(&n))
}

fn is_hold_time(value: &str) -> bool {
    value.trim().parse::<i64>().is_ok_and(|n| n >= 1)
}

const PARAMETERS: &str = "Please provide valid parameters, each parameter needs a type, a name and a value.";

const KNOWLEDGE_RETRIEVAL_TOOL: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Tool,
    code: KNOWLEDGE_RETRIEVAL,
    aliases: &[],
    name: "Knowledge Retrieval",
    fields: &[
        FieldSpec::passthrough(K::ToolKnowledgeId),
        FieldSpec::new(K::ToolSearchType, Some("hybrid-search"), Some(is_search_type)),
        FieldSpec::new(K::ToolTopK, Some("5"), Some(is_top_k)),
        FieldSpec::new(K::ToolScoreThreshold, Some("0.5"), Some(is_score_threshold)),
    ],
    keep: &[
        K::ToolKnowledgeId,
        K::ToolSearchType,
        K::ToolTopK,
        K::ToolScoreThreshold,
    ],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::ToolKnowledgeId,
            message: "Please select a valid knowledge.",
        },
        Rule::OneOf {
            key: K::ToolSearchType,
            allowed: is_search_type,
            message: "Please select a valid retrieval setting.",
        },
        Rule::OneOf {
            key: K::ToolTopK,
            allowed: is_top_k,
            message: "Please provide a valid top k between 1 and 10.",
        },
        Rule::Range {
            key: K::ToolScoreThreshold,
            min: 0.0,
            max: 1.0,
            required: true,
            message: "Please provide a valid score threshold between 0 and 1.",
        },
    ],
};

const API_REQUEST_TOOL: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Tool,
    code: API_REQUEST,
    aliases: &[],
    name: "API request",
    fields: &[
        FieldSpec::new(K::ToolMethod, Some("POST"), Some(is_http_method)),
        FieldSpec::passthrough(K::ToolEndpoint),
        FieldSpec::passthrough(K::ToolHeaders),
        FieldSpec::passthrough(K::ToolParameters),
    ],
    keep: &[
        K::ToolMethod,
        K::ToolEndpoint,
        K::ToolHeaders,
        K::ToolParameters,
    ],
    passthrough: None,
    rules: &[
        Rule::OneOf {
            key: K::ToolMethod,
            allowed: is_http_method,
            message: "Please select a valid http method.",
        },
        Rule::Url {
            key: K::ToolEndpoint,
            message: "Please provide a valid server url.",
        },
        Rule::StringMap {
            key: K::ToolHeaders,
            message: "Please provide valid headers as key value pairs.",
        },
        Rule::Parameters {
            key: K::ToolParameters,
            message: PARAMETERS,
        },
    ],
};

const ENDPOINT_TOOL: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Tool,
    code: ENDPOINT,
    aliases: &[],
    name: "Endpoint (LLM Call)",
    fields: &[
        FieldSpec::passthrough(K::ToolEndpointId),
        FieldSpec::passthrough(K::ToolParameters),
    ],
    keep: &[K::ToolEndpointId, K::ToolParameters],
    passthrough: None,
    rules: &[
        Rule::Required {
            key: K::ToolEndpointId,
            message: "Please select a valid endpoint.",
        },
        Rule::Parameters {
            key: K::ToolParameters,
            message: PARAMETERS,
        },
    ],
};

const PUT_ON_HOLD_TOOL: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Tool,
    code: PUT_ON_HOLD,
    aliases: &[],
    name: "Put on hold",
    fields: &[FieldSpec::new(K::ToolMaxHoldTime, Some("5"), Some(is_hold_time))],
    keep: &[K::ToolMaxHoldTime],
    passthrough: None,
    rules: &[Rule::MinInt {
        key: K::ToolMaxHoldTime,
        min: 1,
        required: true,
        message: "Please provide a valid max hold time.",
    }],
};

const END_OF_CONVERSATION_TOOL: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::Tool,
    code: END_OF_CONVERSATION,
    aliases: &[],
    name: "End of conversation",
    fields: &[],
    keep: &[],
    passthrough: None,
    rules: &[],
};

pub(crate) static DESCRIPTORS: &[ProviderDescriptor] = &[
    KNOWLEDGE_RETRIEVAL_TOOL,
    API_REQUEST_TOOL,
    ENDPOINT_TOOL,
    PUT_ON_HOLD_TOOL,
    END_OF_CONVERSATION_TOOL,
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::metadata::MetadataRecord;

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn knowledge_retrieval_defaults() {
        let out = KNOWLEDGE_RETRIEVAL_TOOL.assemble(&record(&[
            ("tool.knowledge_id", "kb-1"),
            ("tool.top_k", "25"),
        ]));
        assert_eq!(
            out,
            record(&[
                ("tool.knowledge_id", "kb-1"),
                ("tool.search_type", "hybrid-search"),
                ("tool.top_k", "5"),
                ("tool.score_threshold", "0.5"),
            ])
        );
        assert!(KNOWLEDGE_RETRIEVAL_TOOL.is_valid(&out));
    }

    #[test]
    fn knowledge_retrieval_needs_a_knowledge_base() {
        let out = KNOWLEDGE_RETRIEVAL_TOOL.assemble(&MetadataRecord::new());
        assert_eq!(
            KNOWLEDGE_RETRIEVAL_TOOL.validate(&out).unwrap_err().message,
            "Please select a valid knowledge."
        );
    }

    #[test]
    fn knowledge_retrieval_top_k_must_be_whole() {
        let options = record(&[
            ("tool.knowledge_id", "kb-1"),
            ("tool.search_type", "semantic-search"),
            ("tool.top_k", "5.5"),
            ("tool.score_threshold", "0.5"),
        ]);
        let err = KNOWLEDGE_RETRIEVAL_TOOL.validate(&options).unwrap_err();
        assert_eq!(err.key.as_deref(), Some("tool.top_k"));
        assert!(KNOWLEDGE_RETRIEVAL_TOOL.is_valid(&options.with_value(K::ToolTopK, "10")));
        assert!(!KNOWLEDGE_RETRIEVAL_TOOL.is_valid(&options.with_value(K::ToolTopK, "11")));
    }

    #[test]
    fn api_request_defaults_to_post() {
        let out = API_REQUEST_TOOL.assemble(&record(&[("tool.method", "TRACE")]));
        assert_eq!(out, record(&[("tool.method", "POST")]));
    }

    #[test]
    fn api_request_headers_must_be_string_map() {
        let options = record(&[
            ("tool.method", "GET"),
            ("tool.endpoint", "https://api.example.com/orders"),
            ("tool.headers", r#"{"Authorization": 42}"#),
            ("tool.parameters", r#"{"assistant.name":"v"}"#),
        ]);
        let err = API_REQUEST_TOOL.validate(&options).unwrap_err();
        assert_eq!(err.key.as_deref(), Some("tool.headers"));
        assert!(API_REQUEST_TOOL.is_valid(&options.with_value(K::ToolHeaders, "")));
    }

    #[test]
    fn endpoint_tool_requires_endpoint_and_parameters() {
        let options = record(&[("tool.endpoint_id", "ep-9")]);
        assert_eq!(
            ENDPOINT_TOOL.validate(&options).unwrap_err().message,
            PARAMETERS
        );
        assert!(ENDPOINT_TOOL.is_valid(
            &options.with_value(K::ToolParameters, r#"{"conversation.messages":"history"}"#)
        ));
    }

    #[test]
    fn put_on_hold_rejects_zero() {
        let out = PUT_ON_HOLD_TOOL.assemble(&record(&[("tool.max_hold_time", "0")]));
        assert_eq!(out.get(&K::ToolMaxHoldTime), Some("5"));
        assert!(!PUT_ON_HOLD_TOOL.is_valid(&out.with_value(K::ToolMaxHoldTime, "0")));
    }

    #[test]
    fn end_of_conversation_is_always_valid() {
        let input = record(&[("anything", "goes")]);
        assert!(END_OF_CONVERSATION_TOOL.assemble(&input).is_empty());
        assert!(END_OF_CONVERSATION_TOOL.is_valid(&input));
    }
}
