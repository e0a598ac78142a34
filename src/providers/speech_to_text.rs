//! Speech-to-text providers. Both carry the `microphone.*` namespace
//! (VAD, end-of-speech and noise settings) through assembly untouched.

use super::ProviderKind;
use super::catalog;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::validate::Rule;

const MICROPHONE: &str = "microphone.";

const DEEPGRAM_INVALID: &str = "Please check and provide valid configuration for deepgram.";
const ASSEMBLYAI_INVALID: &str = "Please check and provide valid configuration for assemblyai.";

const DEEPGRAM: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::SpeechToText,
    code: "deepgram",
    aliases: &[],
    name: "Deepgram",
    fields: &[
        FieldSpec::new(
            K::ListenLanguage,
            Some("multi"),
            Some(catalog::is_deepgram_stt_language),
        ),
        FieldSpec::new(
            K::ListenModel,
            Some("nova-3"),
            Some(catalog::is_deepgram_stt_model),
        ),
        FieldSpec::new(
            K::ListenThreshold,
            Some("0.5"),
            Some(catalog::is_unit_interval),
        ),
        FieldSpec::new(K::ListenKeywords, Some(""), None),
        FieldSpec::passthrough(K::CredentialId),
    ],
    keep: &[
        K::CredentialId,
        K::ListenLanguage,
        K::ListenModel,
        K::ListenThreshold,
        K::ListenKeywords,
    ],
    passthrough: Some(MICROPHONE),
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: DEEPGRAM_INVALID,
        },
        Rule::OneOf {
            key: K::ListenLanguage,
            allowed: catalog::is_deepgram_stt_language,
            message: DEEPGRAM_INVALID,
        },
        Rule::OneOf {
            key: K::ListenModel,
            allowed: catalog::is_deepgram_stt_model,
            message: DEEPGRAM_INVALID,
        },
    ],
};

const ASSEMBLYAI: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::SpeechToText,
    code: "assemblyai",
    aliases: &["assembly-ai"],
    name: "AssemblyAI",
    fields: &[
        FieldSpec::new(
            K::ListenLanguage,
            Some("en"),
            Some(catalog::is_whisper_language),
        ),
        FieldSpec::new(
            K::ListenModel,
            Some("slam-1"),
            Some(catalog::is_assemblyai_stt_model),
        ),
        FieldSpec::new(K::ListenThreshold, Some("0.5"), None),
        FieldSpec::passthrough(K::CredentialId),
    ],
    keep: &[
        K::CredentialId,
        K::ListenLanguage,
        K::ListenModel,
        K::ListenThreshold,
    ],
    passthrough: Some(MICROPHONE),
    rules: &[
        Rule::Required {
            key: K::CredentialId,
            message: ASSEMBLYAI_INVALID,
        },
        Rule::OneOf {
            key: K::ListenLanguage,
            allowed: catalog::is_whisper_language,
            message: ASSEMBLYAI_INVALID,
        },
        Rule::OneOf {
            key: K::ListenModel,
            allowed: catalog::is_assemblyai_stt_model,
            message: ASSEMBLYAI_INVALID,
        },
    ],
};

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[DEEPGRAM, ASSEMBLYAI];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::metadata::MetadataRecord;

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn deepgram_defaults_on_empty_input() {
        assert_eq!(
            DEEPGRAM.assemble(&MetadataRecord::new()),
            record(&[
                ("listen.language", "multi"),
                ("listen.model", "nova-3"),
                ("listen.threshold", "0.5"),
                ("listen.keywords", ""),
            ])
        );
    }

    #[test]
    fn deepgram_carries_microphone_settings() {
        let input = record(&[
            ("microphone.vad.provider", "silero"),
            ("listen.model", "whisper"),
            ("speaker.voice", "x"),
            ("microphone.eos.timeout", "700"),
        ]);
        let out = DEEPGRAM.assemble(&input);

        assert_eq!(out.get(&K::ListenModel), Some("nova-3"));
        let tail: Vec<&str> = out.iter().skip(4).map(|p| p.key.as_str()).collect();
        assert_eq!(tail, vec!["microphone.vad.provider", "microphone.eos.timeout"]);
        assert!(!out.contains(&K::from("speaker.voice")));
    }

    #[test]
    fn assemblyai_replaces_unknown_language() {
        let out = ASSEMBLYAI.assemble(&record(&[("listen.language", "klingon")]));
        assert_eq!(out.get(&K::ListenLanguage), Some("en"));
        assert_eq!(out.get(&K::ListenModel), Some("slam-1"));
    }

    #[test]
    fn boolean_style_validators_use_generic_message() {
        let out = DEEPGRAM.assemble(&MetadataRecord::new());
        assert_eq!(DEEPGRAM.validate(&out).unwrap_err().message, DEEPGRAM_INVALID);
        assert!(DEEPGRAM.is_valid(&out.with_value(K::CredentialId, "cred")));

        let bad_model = record(&[
            ("rapida.credential_id", "cred"),
            ("listen.language", "en"),
            ("listen.model", "best"),
        ]);
        let err = ASSEMBLYAI.validate(&bad_model).unwrap_err();
        assert_eq!(err.key.as_deref(), Some("listen.model"));
    }
}
