//! Text-to-speech providers. `speaker.*` settings (pronunciation, pacing)
//! pass through assembly unchanged.

use super::ProviderKind;
use super::catalog;
use crate::descriptor::{FieldSpec, ProviderDescriptor};
use crate::metadata::MetadataKey as K;
use crate::reconcile::Predicate;
use crate::validate::Rule;

const SPEAKER: &str = "speaker.";

const SPEAK_KEEP: &[K] = &[
    K::CredentialId,
    K::SpeakLanguage,
    K::SpeakVoiceId,
    K::SpeakModel,
];

const fn speak_fields(
    language: (&'static str, Predicate),
    voice: (&'static str, Predicate),
    model: (&'static str, Predicate),
) -> [FieldSpec; 4] {
    [
        FieldSpec::passthrough(K::CredentialId),
        FieldSpec::new(K::SpeakLanguage, Some(language.0), Some(language.1)),
        FieldSpec::new(K::SpeakVoiceId, Some(voice.0), Some(voice.1)),
        FieldSpec::new(K::SpeakModel, Some(model.0), Some(model.1)),
    ]
}

const fn speak_rules(
    message: &'static str,
    language: Predicate,
    voice: Predicate,
    model: Predicate,
) -> [Rule; 4] {
    [
        Rule::Required {
            key: K::CredentialId,
            message,
        },
        Rule::OneOf {
            key: K::SpeakLanguage,
            allowed: language,
            message,
        },
        Rule::OneOf {
            key: K::SpeakVoiceId,
            allowed: voice,
            message,
        },
        Rule::OneOf {
            key: K::SpeakModel,
            allowed: model,
            message,
        },
    ]
}

const DEEPGRAM: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::TextToSpeech,
    code: "deepgram",
    aliases: &[],
    name: "Deepgram",
    fields: &speak_fields(
        ("en", catalog::is_deepgram_tts_language),
        ("thalia", catalog::is_deepgram_tts_voice),
        ("aura-2", catalog::is_deepgram_tts_model),
    ),
    keep: SPEAK_KEEP,
    passthrough: Some(SPEAKER),
    rules: &speak_rules(
        "Please check and provide valid configuration for deepgram.",
        catalog::is_deepgram_tts_language,
        catalog::is_deepgram_tts_voice,
        catalog::is_deepgram_tts_model,
    ),
};

const GOOGLE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::TextToSpeech,
    code: "google",
    aliases: &["google-cloud"],
    name: "Google Cloud Text-to-Speech",
    fields: &speak_fields(
        ("en-US", catalog::is_google_tts_language),
        ("achernar", catalog::is_google_tts_voice),
        ("Chirp3-HD", catalog::is_google_tts_model),
    ),
    keep: SPEAK_KEEP,
    passthrough: Some(SPEAKER),
    rules: &speak_rules(
        "Please check and provide valid configuration for google.",
        catalog::is_google_tts_language,
        catalog::is_google_tts_voice,
        catalog::is_google_tts_model,
    ),
};

const OPENAI: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::TextToSpeech,
    code: "openai",
    aliases: &[],
    name: "OpenAI",
    fields: &speak_fields(
        ("en", catalog::is_whisper_language),
        ("alloy", catalog::is_openai_tts_voice),
        ("gpt-4o-mini-tts", catalog::is_openai_tts_model),
    ),
    keep: SPEAK_KEEP,
    passthrough: Some(SPEAKER),
    rules: &speak_rules(
        "Please check and provide valid configuration for openai.",
        catalog::is_whisper_language,
        catalog::is_openai_tts_voice,
        catalog::is_openai_tts_model,
    ),
};

pub(super) static DESCRIPTORS: &[ProviderDescriptor] = &[DEEPGRAM, GOOGLE, OPENAI];
