//! Provider descriptors and the generic Config Assembler.
//!
//! A descriptor is the static authority for one provider or tool: which keys
//! it reconciles (with defaults and validity predicates), which keys survive
//! assembly, which foreign namespace it passes through untouched, and the
//! rules its Config Validator applies.

use crate::error::ValidationError;
use crate::metadata::{MetadataKey, MetadataPair, MetadataRecord};
use crate::providers::ProviderKind;
use crate::reconcile::{Predicate, reconcile};
use crate::validate::{Rule, validate};

/// One reconciled field: key, optional default, optional validity check.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: MetadataKey,
    pub default: Option<&'static str>,
    pub check: Option<Predicate>,
}

impl FieldSpec {
    pub const fn new(
        key: MetadataKey,
        default: Option<&'static str>,
        check: Option<Predicate>,
    ) -> Self {
        Self {
            key,
            default,
            check,
        }
    }

    /// Field with no default and no validator: kept only if already set.
    pub const fn passthrough(key: MetadataKey) -> Self {
        Self::new(key, None, None)
    }

    pub fn reconcile(&self, existing: &MetadataRecord) -> Option<MetadataPair> {
        reconcile(
            existing,
            &self.key,
            self.default,
            self.check.as_ref().map(|f| f as &dyn Fn(&str) -> bool),
        )
    }
}

/// Static description of a provider or built-in tool.
#[derive(Debug)]
pub struct ProviderDescriptor {
    pub kind: ProviderKind,
    pub code: &'static str,
    /// Alternate codes the console also sends for this provider.
    pub aliases: &'static [&'static str],
    pub name: &'static str,
    /// Fields reconciled by the assembler, in evaluation order.
    pub fields: &'static [FieldSpec],
    /// Keys that survive assembly, in output order.
    pub keep: &'static [MetadataKey],
    /// Foreign namespace (e.g. `"microphone."`) appended unchanged.
    pub passthrough: Option<&'static str>,
    pub rules: &'static [Rule],
}

impl ProviderDescriptor {
    pub fn matches(&self, code: &str) -> bool {
        self.code == code || self.aliases.contains(&code)
    }

    /// Build the record this provider should carry, starting from `existing`.
    ///
    /// The result holds only `keep` keys (in `keep` order) followed by any
    /// passthrough pairs. Applying it to its own output changes nothing.
    pub fn assemble(&self, existing: &MetadataRecord) -> MetadataRecord {
        let reconciled: Vec<MetadataPair> = self
            .fields
            .iter()
            .filter_map(|field| field.reconcile(existing))
            .collect();

        let mut assembled: MetadataRecord = self
            .keep
            .iter()
            .filter_map(|key| reconciled.iter().find(|pair| &pair.key == key).cloned())
            .collect();

        if let Some(prefix) = self.passthrough {
            assembled.extend(existing.with_prefix(prefix).cloned());
        }

        assembled
    }

    /// Apply this provider's rules in order; the first failure wins.
    pub fn validate(&self, options: &MetadataRecord) -> Result<(), ValidationError> {
        validate(self.rules, options)
    }

    pub fn is_valid(&self, options: &MetadataRecord) -> bool {
        self.validate(options).is_ok()
    }
}
