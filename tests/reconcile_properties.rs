//! Property tests for field reconciliation and provider assembly.
//!
//! Records are drawn from a pool mixing every key the built-in providers
//! know about, passthrough namespaces and unrelated keys, with values that
//! are sometimes catalog defaults and sometimes garbage.

use proptest::prelude::*;
use rapida_metadata::reconcile::reconcile;
use rapida_metadata::{MetadataKey, MetadataRecord, ProviderDescriptor, ProviderKind, Registry};

// =============================================================================
// Helper Functions
// =============================================================================

fn all_descriptors() -> Vec<&'static ProviderDescriptor> {
    let registry = Registry::builtin();
    ProviderKind::ALL
        .into_iter()
        .flat_map(|kind| registry.descriptors(kind).collect::<Vec<_>>())
        .collect()
}

fn key_pool() -> Vec<String> {
    let mut keys: Vec<String> = all_descriptors()
        .iter()
        .flat_map(|d| d.fields.iter().map(|f| f.key.as_str().to_string()))
        .collect();
    keys.extend(
        [
            "microphone.eos.timeout",
            "microphone.vad.threshold",
            "speaker.pronunciation",
            "assistant.name",
            "custom.flag",
            "",
        ]
        .map(String::from),
    );
    keys.sort();
    keys.dedup();
    keys
}

fn value_pool() -> Vec<String> {
    let mut values: Vec<String> = all_descriptors()
        .iter()
        .flat_map(|d| d.fields.iter().filter_map(|f| f.default.map(String::from)))
        .collect();
    values.extend(
        ["", "-1", "0", "1.5", "42", "not a url", "{}", "null", "gpt-2"].map(String::from),
    );
    values.sort();
    values.dedup();
    values
}

fn arb_record() -> impl Strategy<Value = MetadataRecord> {
    let pair = (
        prop::sample::select(key_pool()),
        prop_oneof![prop::sample::select(value_pool()), ".{0,12}"],
    );
    prop::collection::vec(pair, 0..24).prop_map(|pairs| pairs.into_iter().collect())
}

fn arb_descriptor() -> impl Strategy<Value = &'static ProviderDescriptor> {
    prop::sample::select(all_descriptors())
}

fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

// =============================================================================
// Tests without parameters (outside proptest! macro)
// =============================================================================

#[test]
fn prop_missing_key_takes_valid_default() {
    let key = MetadataKey::ListenThreshold;
    let pair = reconcile(&MetadataRecord::new(), &key, Some("0.5"), Some(&is_numeric)).unwrap();
    assert_eq!(pair.value, "0.5");
}

#[test]
fn prop_invalid_default_drops_key() {
    let key = MetadataKey::ListenThreshold;
    let existing: MetadataRecord = [("listen.threshold", "loud")].into_iter().collect();
    assert!(reconcile(&existing, &key, Some("also loud"), Some(&is_numeric)).is_none());
}

// =============================================================================
// Reconcile Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_valid_existing_value_is_never_replaced(value in "[0-9]{1,4}(\\.[0-9]{1,3})?", default in ".{0,6}") {
        let key = MetadataKey::ModelTemperature;
        let existing: MetadataRecord = [(key.clone(), value.clone())].into_iter().collect();
        let pair = reconcile(&existing, &key, Some(&default), Some(&is_numeric)).unwrap();
        prop_assert_eq!(pair.value, value);
    }

    #[test]
    fn prop_reconciled_value_always_passes_check(record in arb_record(), default in ".{0,6}") {
        let key = MetadataKey::ModelTemperature;
        if let Some(pair) = reconcile(&record, &key, Some(&default), Some(&is_numeric)) {
            prop_assert!(is_numeric(&pair.value));
        }
    }

    // =========================================================================
    // Assembly Property Tests
    // =========================================================================

    #[test]
    fn prop_assemble_is_idempotent(descriptor in arb_descriptor(), record in arb_record()) {
        let once = descriptor.assemble(&record);
        prop_assert_eq!(descriptor.assemble(&once), once);
    }

    #[test]
    fn prop_assemble_only_emits_kept_or_passthrough_keys(descriptor in arb_descriptor(), record in arb_record()) {
        for key in descriptor.assemble(&record).keys() {
            let kept = descriptor.keep.contains(key);
            let passthrough = descriptor.passthrough.is_some_and(|prefix| key.has_prefix(prefix));
            prop_assert!(kept || passthrough, "{} emitted {}", descriptor.code, key);
        }
    }

    #[test]
    fn prop_assemble_never_keeps_invalid_values(descriptor in arb_descriptor(), record in arb_record()) {
        let out = descriptor.assemble(&record);
        for field in descriptor.fields {
            if let (Some(check), Some(value)) = (field.check, out.get(&field.key)) {
                prop_assert!(check(value), "{} kept {}={:?}", descriptor.code, field.key, value);
            }
        }
    }

    #[test]
    fn prop_assemble_preserves_keep_order(descriptor in arb_descriptor(), record in arb_record()) {
        let out = descriptor.assemble(&record);
        let positions: Vec<usize> = out
            .keys()
            .filter_map(|key| descriptor.keep.iter().position(|k| k == key))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
