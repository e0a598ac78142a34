use serde::{Deserialize, Serialize};

use super::{API_REQUEST, END_OF_CONVERSATION, ENDPOINT, KNOWLEDGE_RETRIEVAL, PUT_ON_HOLD};

/// Function-calling definition shown to the model for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the call arguments, kept as a raw string.
    pub parameters: String,
}

impl ToolDefinition {
    fn from_static(name: &str, description: &str, parameters: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: parameters.to_string(),
        }
    }

    /// A definition the console accepts as-is: every field filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty() && !self.parameters.is_empty()
    }
}

fn knowledge_retrieval() -> ToolDefinition {
    ToolDefinition::from_static(
        "knowledge_query",
        "Use this tool to search the knowledge base for information relevant to the user's question.",
        r#"{"type":"object","properties":{"context":{"type":"string","description":"Standalone search query built from the conversation."}},"required":["context"]}"#,
    )
}

fn api_request() -> ToolDefinition {
    ToolDefinition::from_static(
        "api_request",
        "Use this tool to call an external API with details collected from the user.",
        r#"{"type":"object","properties":{"query":{"type":"string","description":"Details required by the API request."}},"required":["query"]}"#,
    )
}

fn endpoint() -> ToolDefinition {
    ToolDefinition::from_static(
        "endpoint_call",
        "Use this tool to run the configured endpoint and return its result.",
        r#"{"type":"object","properties":{"input":{"type":"string","description":"Input passed to the endpoint."}},"required":["input"]}"#,
    )
}

fn put_on_hold() -> ToolDefinition {
    ToolDefinition::from_static(
        "put_on_hold",
        "Use this tool when the user asks to wait or hold the conversation for a moment.",
        r#"{"type":"object","properties":{"reason":{"type":"string","description":"Why the conversation is put on hold."}},"required":["reason"]}"#,
    )
}

fn end_of_conversation() -> ToolDefinition {
    ToolDefinition::from_static(
        "end_conversation",
        "Use this tool when the user wants to end the conversation or the task is complete.",
        r#"{"type":"object","properties":{"reason":{"type":"string","description":"Why the conversation is ending."}},"required":["reason"]}"#,
    )
}

/// Resolve the definition to store for tool `code`.
///
/// A complete `existing` definition wins. Otherwise the tool's built-in
/// definition is returned; unknown codes get the endpoint definition.
pub fn default_tool_definition(code: &str, existing: Option<&ToolDefinition>) -> ToolDefinition {
    if let Some(existing) = existing.filter(|d| d.is_complete()) {
        return existing.clone();
    }

    match code {
        KNOWLEDGE_RETRIEVAL => knowledge_retrieval(),
        API_REQUEST => api_request(),
        ENDPOINT => endpoint(),
        PUT_ON_HOLD => put_on_hold(),
        END_OF_CONVERSATION => end_of_conversation(),
        other => {
            tracing::debug!(code = other, "Unknown tool code, using endpoint definition");
            endpoint()
        }
    }
}
