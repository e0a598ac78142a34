//! Declarative Config Validator rules.
//!
//! A provider declares an ordered list of [`Rule`]s. Validation walks them in
//! order and stops at the first failure, so the operator sees one actionable
//! message. A failed validation never touches the record.

use serde_json::Value;

use crate::error::ValidationError;
use crate::metadata::{MetadataKey, MetadataRecord};
use crate::reconcile::Predicate;

const RESPONSE_FORMAT_TYPES: [&str; 3] = ["text", "json_object", "json_schema"];

/// One validation constraint over a metadata record.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Key must be present with a non-empty value.
    Required {
        key: MetadataKey,
        message: &'static str,
    },
    /// Key must be present and its value accepted by `allowed`.
    OneOf {
        key: MetadataKey,
        allowed: Predicate,
        message: &'static str,
    },
    /// Decimal value within `[min, max]`.
    Range {
        key: MetadataKey,
        min: f64,
        max: f64,
        required: bool,
        message: &'static str,
    },
    /// Integer value of at least `min`.
    MinInt {
        key: MetadataKey,
        min: i64,
        required: bool,
        message: &'static str,
    },
    /// If present, the value must parse as JSON.
    Json {
        key: MetadataKey,
        message: &'static str,
    },
    /// If present, an object whose `type` is text, json_object or
    /// json_schema (the latter also needs a `json_schema` member).
    ResponseFormat { key: MetadataKey },
    /// Absolute http(s) URL, required.
    Url {
        key: MetadataKey,
        message: &'static str,
    },
    /// If present and non-empty, a JSON object of string values.
    StringMap {
        key: MetadataKey,
        message: &'static str,
    },
    /// Required non-empty JSON object of string values keyed `type.name`.
    Parameters {
        key: MetadataKey,
        message: &'static str,
    },
}

impl Rule {
    pub fn key(&self) -> &MetadataKey {
        match self {
            Rule::Required { key, .. }
            | Rule::OneOf { key, .. }
            | Rule::Range { key, .. }
            | Rule::MinInt { key, .. }
            | Rule::Json { key, .. }
            | Rule::ResponseFormat { key }
            | Rule::Url { key, .. }
            | Rule::StringMap { key, .. }
            | Rule::Parameters { key, .. } => key,
        }
    }

    /// Check this rule against `record`.
    pub fn check(&self, record: &MetadataRecord) -> Result<(), ValidationError> {
        let value = record.get(self.key());
        let fail = |message: &str| Err(ValidationError::for_key(self.key().as_str(), message));

        match self {
            Rule::Required { message, .. } => match value {
                Some(v) if !v.is_empty() => Ok(()),
                _ => fail(*message),
            },
            Rule::OneOf {
                allowed, message, ..
            } => match value {
                Some(v) if allowed(v) => Ok(()),
                _ => fail(*message),
            },
            Rule::Range {
                min,
                max,
                required,
                message,
                ..
            } => match value {
                None if !required => Ok(()),
                None => fail(*message),
                Some(v) => match parse_decimal(v) {
                    Some(n) if n >= *min && n <= *max => Ok(()),
                    _ => fail(*message),
                },
            },
            Rule::MinInt {
                min,
                required,
                message,
                ..
            } => match value {
                None if !required => Ok(()),
                None => fail(*message),
                Some(v) => match v.trim().parse::<i64>() {
                    Ok(n) if n >= *min => Ok(()),
                    _ => fail(*message),
                },
            },
            Rule::Json { message, .. } => match value {
                None => Ok(()),
                Some(v) => match serde_json::from_str::<Value>(v) {
                    Ok(_) => Ok(()),
                    Err(_) => fail(*message),
                },
            },
            Rule::ResponseFormat { .. } => match value {
                None => Ok(()),
                Some(v) => check_response_format(v).or_else(|message| fail(message)),
            },
            Rule::Url { message, .. } => match value {
                Some(v) if is_http_url(v) => Ok(()),
                _ => fail(*message),
            },
            Rule::StringMap { message, .. } => match value {
                None => Ok(()),
                Some(v) if v.trim().is_empty() => Ok(()),
                Some(v) => match parse_string_map(v) {
                    Some(_) => Ok(()),
                    None => fail(*message),
                },
            },
            Rule::Parameters { message, .. } => match value.and_then(parse_string_map) {
                Some(map) if !map.is_empty() && map.keys().all(|k| is_typed_name(k)) => Ok(()),
                _ => fail(*message),
            },
        }
    }
}

/// Run `rules` in order, stopping at the first failure.
pub fn validate(rules: &[Rule], record: &MetadataRecord) -> Result<(), ValidationError> {
    for rule in rules {
        if let Err(err) = rule.check(record) {
            tracing::debug!(key = %rule.key(), message = %err.message, "Metadata validation failed");
            return Err(err);
        }
    }
    Ok(())
}

/// Strict decimal parse: the trimmed value must be a finite number.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn check_response_format(raw: &str) -> Result<(), &'static str> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|_| "Please check and provide a correct value for response_format.")?;

    let kind = parsed
        .as_object()
        .and_then(|obj| obj.get("type"))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or("Please check and provide a correct value for response_format it should be a valid json object.")?;

    if !RESPONSE_FORMAT_TYPES.contains(&kind) {
        return Err(
            "Please check and provide a correct value for response_format it should have type with text, json_object, json_schema.",
        );
    }

    let has_schema = parsed
        .get("json_schema")
        .is_some_and(|schema| !schema.is_null());
    if kind == "json_schema" && !has_schema {
        return Err(
            "Please check and provide a correct value for response_format it should have valid json_schema.",
        );
    }

    Ok(())
}

fn is_http_url(raw: &str) -> bool {
    match url::Url::parse(raw.trim()) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

fn parse_string_map(raw: &str) -> Option<serde_json::Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) if map.values().all(Value::is_string) => Some(map),
        _ => None,
    }
}

/// `type.name` with both halves non-empty.
fn is_typed_name(key: &str) -> bool {
    key.split_once('.')
        .is_some_and(|(kind, name)| !kind.is_empty() && !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn temperature_rule() -> Rule {
        Rule::Range {
            key: MetadataKey::ModelTemperature,
            min: 0.0,
            max: 1.0,
            required: true,
            message: "temperature",
        }
    }

    #[test]
    fn required_rejects_empty_value() {
        let rule = Rule::Required {
            key: MetadataKey::CredentialId,
            message: "credential",
        };
        assert!(rule.check(&record(&[("rapida.credential_id", "")])).is_err());
        assert!(rule.check(&record(&[])).is_err());
        assert!(rule.check(&record(&[("rapida.credential_id", "abc")])).is_ok());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let rule = temperature_rule();
        assert!(rule.check(&record(&[("model.temperature", "0")])).is_ok());
        assert!(rule.check(&record(&[("model.temperature", "1")])).is_ok());
        assert!(rule.check(&record(&[("model.temperature", "1.5")])).is_err());
        assert!(rule.check(&record(&[("model.temperature", "-0.1")])).is_err());
        assert!(rule.check(&record(&[("model.temperature", "warm")])).is_err());
        assert!(rule.check(&record(&[("model.temperature", "NaN")])).is_err());
    }

    #[test]
    fn optional_range_skips_absent_key() {
        let rule = Rule::Range {
            key: MetadataKey::ModelTopP,
            min: 0.0,
            max: 1.0,
            required: false,
            message: "top_p",
        };
        assert!(rule.check(&record(&[])).is_ok());
        assert!(rule.check(&record(&[("model.top_p", "2")])).is_err());
    }

    #[test]
    fn min_int_rejects_zero_and_fractions() {
        let rule = Rule::MinInt {
            key: MetadataKey::ModelMaxTokens,
            min: 1,
            required: true,
            message: "max_tokens",
        };
        assert!(rule.check(&record(&[("model.max_tokens", "1028")])).is_ok());
        assert!(rule.check(&record(&[("model.max_tokens", "0")])).is_err());
        assert!(rule.check(&record(&[("model.max_tokens", "12.5")])).is_err());
    }

    #[test]
    fn response_format_messages_follow_failure_kind() {
        let rule = Rule::ResponseFormat {
            key: MetadataKey::ModelResponseFormat,
        };
        let msg = |raw: &str| {
            rule.check(&record(&[("model.response_format", raw)]))
                .unwrap_err()
                .message
        };

        assert!(msg("{").ends_with("for response_format."));
        assert!(msg("{}").contains("valid json object"));
        assert!(msg(r#"{"type":"xml"}"#).contains("text, json_object, json_schema"));
        assert!(msg(r#"{"type":"json_schema"}"#).contains("valid json_schema"));

        assert!(rule.check(&record(&[])).is_ok());
        assert!(
            rule.check(&record(&[(
                "model.response_format",
                r#"{"type":"json_schema","json_schema":{"name":"x"}}"#
            )]))
            .is_ok()
        );
    }

    #[test]
    fn url_requires_http_scheme_and_host() {
        let rule = Rule::Url {
            key: MetadataKey::ToolEndpoint,
            message: "endpoint",
        };
        assert!(rule.check(&record(&[("tool.endpoint", "not a url")])).is_err());
        assert!(rule.check(&record(&[("tool.endpoint", "ftp://x.io/a")])).is_err());
        assert!(
            rule.check(&record(&[("tool.endpoint", "https://api.example.com/v1")]))
                .is_ok()
        );
    }

    #[test]
    fn parameters_need_typed_string_entries() {
        let rule = Rule::Parameters {
            key: MetadataKey::ToolParameters,
            message: "parameters",
        };
        let check = |raw: &str| rule.check(&record(&[("tool.parameters", raw)]));

        assert!(check(r#"{"string.q":"v"}"#).is_ok());
        assert!(check("{}").is_err());
        assert!(check(r#"{"q":"v"}"#).is_err());
        assert!(check(r#"{"string.q":1}"#).is_err());
        assert!(check("[]").is_err());
    }

    #[test]
    fn validation_stops_at_first_failure() {
        let rules = [
            Rule::Required {
                key: MetadataKey::CredentialId,
                message: "credential",
            },
            temperature_rule(),
        ];
        let err = validate(&rules, &record(&[("model.temperature", "5")])).unwrap_err();
        assert_eq!(err.message, "credential");
        assert_eq!(err.key.as_deref(), Some("rapida.credential_id"));
    }
}
