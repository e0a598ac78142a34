//! Telephony carriers for phone deployments.

use super::ProviderKind;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::validate::Rule;

const INVALID: &str = "Please provide a valid telephony providers for phone call.";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::passthrough(K::CredentialId),
    FieldSpec::passthrough(K::Phone),
];

const KEEP: &[K] = &[K::CredentialId, K::Phone];

const RULES: &[Rule] = &[
    Rule::Required {
        key: K::CredentialId,
        message: INVALID,
    },
    Rule::Required {
        key: K::Phone,
        message: INVALID,
    },
];

const fn carrier(code: &'static str, name: &'static str) -> ProviderDescriptor {
    ProviderDescriptor {
        kind: ProviderKind::Telephony,
        code,
        aliases: &[],
        name,
        fields: FIELDS,
        keep: KEEP,
        passthrough: None,
        rules: RULES,
    }
}

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[
    carrier("twilio", "Twilio"),
    carrier("vonage", "Vonage"),
    carrier("exotel", "Exotel"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataRecord;

    #[test]
    fn carrier_needs_credential_and_phone() {
        let twilio = &DESCRIPTORS[0];
        let input: MetadataRecord = [
            ("rapida.credential_id", "tw"),
            ("phone", "+14155550123"),
            ("listen.model", "nova-3"),
        ]
        .into_iter()
        .collect();
        let out = twilio.assemble(&input);
        assert_eq!(out.len(), 2);
        assert!(twilio.is_valid(&out));
        assert!(!twilio.is_valid(&out.with_value(K::Phone, "")));
    }

    #[test]
    fn formatted_phone_number_is_accepted() {
        let vonage = &DESCRIPTORS[1];
        let input: MetadataRecord = [("rapida.credential_id", "vn"), ("phone", "+1 415-555-0100")]
            .into_iter()
            .collect();
        let out = vonage.assemble(&input);
        assert_eq!(out.get(&K::Phone), Some("+1 415-555-0100"));
        assert!(vonage.is_valid(&out));
    }
}
