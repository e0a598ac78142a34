//! Field reconciliation.
//!
//! Derives the value a single key should carry from what the record already
//! holds, an optional default, and an optional validity predicate: keep the
//! existing value if it is still valid, otherwise fall back to the default
//! if that is valid, otherwise drop the key.

use crate::metadata::{MetadataKey, MetadataPair, MetadataRecord};

/// Validity predicate over a raw metadata value.
pub type Predicate = fn(&str) -> bool;

/// Reconcile one key against an existing record.
///
/// Never fails: an absent result means the key should be omitted. An empty
/// string is a present value unless `is_valid` rejects it.
pub fn reconcile(
    existing: &MetadataRecord,
    key: &MetadataKey,
    default_value: Option<&str>,
    is_valid: Option<&dyn Fn(&str) -> bool>,
) -> Option<MetadataPair> {
    let accepts = |value: &str| is_valid.is_none_or(|check| check(value));

    if let Some(candidate) = existing.get(key) {
        if accepts(candidate) {
            return Some(MetadataPair::new(key.clone(), candidate));
        }
        tracing::debug!(key = %key, value = candidate, "Existing metadata value rejected");
    }

    match default_value {
        Some(default) if accepts(default) => {
            tracing::debug!(key = %key, default, "Falling back to default metadata value");
            Some(MetadataPair::new(key.clone(), default))
        }
        Some(default) => {
            tracing::debug!(key = %key, default, "Default metadata value rejected, dropping key");
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn is_small_number(value: &str) -> bool {
        value.parse::<f64>().is_ok_and(|n| (0.0..=1.0).contains(&n))
    }

    #[test]
    fn missing_key_uses_valid_default() {
        let pair = reconcile(
            &MetadataRecord::new(),
            &MetadataKey::ModelTemperature,
            Some("0.7"),
            Some(&is_small_number),
        );
        assert_eq!(pair, Some(MetadataPair::new("model.temperature", "0.7")));
    }

    #[test]
    fn valid_existing_value_wins_over_default() {
        let rec = record(&[("model.temperature", "0.2")]);
        let pair = reconcile(
            &rec,
            &MetadataKey::ModelTemperature,
            Some("0.7"),
            Some(&is_small_number),
        );
        assert_eq!(pair, Some(MetadataPair::new("model.temperature", "0.2")));
    }

    #[test]
    fn invalid_existing_value_falls_back_to_default() {
        let rec = record(&[("model.temperature", "7")]);
        let pair = reconcile(
            &rec,
            &MetadataKey::ModelTemperature,
            Some("0.7"),
            Some(&is_small_number),
        );
        assert_eq!(pair, Some(MetadataPair::new("model.temperature", "0.7")));
    }

    #[test]
    fn invalid_existing_and_invalid_default_drop_the_key() {
        let rec = record(&[("model.temperature", "7")]);
        let pair = reconcile(
            &rec,
            &MetadataKey::ModelTemperature,
            Some("9"),
            Some(&is_small_number),
        );
        assert_eq!(pair, None);
    }

    #[test]
    fn no_validator_keeps_whatever_exists() {
        let rec = record(&[("model.seed", "not-a-number")]);
        let pair = reconcile(&rec, &MetadataKey::ModelSeed, Some("1"), None);
        assert_eq!(pair, Some(MetadataPair::new("model.seed", "not-a-number")));
    }

    #[test]
    fn empty_string_is_found_without_validator() {
        let rec = record(&[("listen.keywords", "")]);
        let pair = reconcile(&rec, &MetadataKey::ListenKeywords, Some("default"), None);
        assert_eq!(pair, Some(MetadataPair::new("listen.keywords", "")));
    }

    #[test]
    fn missing_key_without_default_is_dropped() {
        let pair = reconcile(&MetadataRecord::new(), &MetadataKey::CredentialId, None, None);
        assert_eq!(pair, None);
    }
}
