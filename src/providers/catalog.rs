//! Static model, voice and language catalogs.
//!
//! These mirror the option lists the console offers in its dropdowns. A
//! value outside its catalog is treated as stale configuration: the
//! assembler replaces it with the default, the validator rejects it.

/// A selectable model: backend id plus the provider-facing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelEntry {
    pub id: &'static str,
    pub name: &'static str,
}

const fn model(id: &'static str, name: &'static str) -> ModelEntry {
    ModelEntry { id, name }
}

fn has_id(models: &[ModelEntry], value: &str) -> bool {
    models.iter().any(|m| m.id == value)
}

fn has_name(models: &[ModelEntry], value: &str) -> bool {
    models.iter().any(|m| m.name == value)
}

// ── Text generation ──────────────────────────────────────────

pub static OPENAI_TEXT_MODELS: &[ModelEntry] = &[
    model("openai/gpt-4", "gpt-4"),
    model("openai/gpt-4-0613", "gpt-4-0613"),
    model("openai/gpt-3.5-turbo", "gpt-3.5-turbo"),
    model("openai/gpt-3.5-turbo-16k", "gpt-3.5-turbo-16k"),
    model("openai/gpt-3.5-turbo-16k-0613", "gpt-3.5-turbo-16k-0613"),
    model("openai/gpt-4o", "gpt-4o"),
    model("openai/gpt-4-turbo-preview", "gpt-4-turbo-preview"),
    model("openai/gpt-4-turbo", "gpt-4-turbo"),
    model("openai/gpt-4.1-mini", "gpt-4.1-mini"),
    model("openai/gpt-4.1-nano", "gpt-4.1-nano"),
    model("openai/o3-mini", "o3-mini"),
    model("openai/gpt-4o-mini", "gpt-4o-mini"),
    model("openai/o4-mini", "o4-mini"),
    model("openai/o3", "o3"),
    model("openai/o3-pro", "o3-pro"),
    model("openai/o1", "o1"),
    model("openai/o1-pro", "o1-pro"),
];

pub static AZURE_TEXT_MODELS: &[ModelEntry] = &[
    model("azure/gpt-4o", "gpt-4o"),
    model("azure/gpt-4o-mini", "gpt-4o-mini"),
    model("azure/gpt-4.1-nano", "gpt-4.1-nano"),
];

pub static ANTHROPIC_TEXT_MODELS: &[ModelEntry] = &[
    model("anthropic/claude-opus-4-20250514", "claude-opus-4-20250514"),
    model("anthropic/claude-sonnet-4-20250514", "claude-sonnet-4-20250514"),
    model("anthropic/claude-3-7-sonnet-20250219", "claude-3-7-sonnet-20250219"),
    model("anthropic/claude-3-5-haiku-20241022", "claude-3-5-haiku-20241022"),
    model("anthropic/claude-3-5-sonnet-20241022", "claude-3-5-sonnet-20241022"),
];

pub static COHERE_TEXT_MODELS: &[ModelEntry] = &[
    model("cohere/command-a-03-2025", "command-a-03-2025"),
    model("cohere/command-r7b-12-2024", "command-r7b-12-2024"),
    model("cohere/command-r-plus-04-2024", "command-r-plus-04-2024"),
    model("cohere/command-r-plus", "command-r-plus"),
    model("cohere/command-r-08-2024", "command-r-08-2024"),
    model("cohere/command-r-03-2024", "command-r-03-2024"),
    model("cohere/command-r", "command-r"),
    model("cohere/command", "command"),
    model("cohere/command-nightly", "command-nightly"),
    model("cohere/command-light", "command-light"),
    model("cohere/command-light-nightly", "command-light-nightly"),
];

pub static GEMINI_TEXT_MODELS: &[ModelEntry] = &[
    model("google/gemini-2.5-pro", "gemini-2.5-pro"),
    model("google/gemini-2.5-flash", "gemini-2.5-flash"),
    model(
        "google/gemini-2.5-flash-lite-preview-06-17",
        "gemini-2.5-flash-lite-preview-06-17",
    ),
    model("google/gemini-2.0-flash", "gemini-2.0-flash"),
    model("google/gemini-2.0-flash-lite", "gemini-2.0-flash-lite"),
];

pub fn is_openai_text_model_id(value: &str) -> bool {
    has_id(OPENAI_TEXT_MODELS, value)
}

pub fn is_openai_text_model_name(value: &str) -> bool {
    has_name(OPENAI_TEXT_MODELS, value)
}

pub fn is_azure_text_model_id(value: &str) -> bool {
    has_id(AZURE_TEXT_MODELS, value)
}

pub fn is_azure_text_model_name(value: &str) -> bool {
    has_name(AZURE_TEXT_MODELS, value)
}

pub fn is_anthropic_text_model_id(value: &str) -> bool {
    has_id(ANTHROPIC_TEXT_MODELS, value)
}

pub fn is_anthropic_text_model_name(value: &str) -> bool {
    has_name(ANTHROPIC_TEXT_MODELS, value)
}

pub fn is_cohere_text_model_id(value: &str) -> bool {
    has_id(COHERE_TEXT_MODELS, value)
}

pub fn is_cohere_text_model_name(value: &str) -> bool {
    has_name(COHERE_TEXT_MODELS, value)
}

pub fn is_gemini_text_model_id(value: &str) -> bool {
    has_id(GEMINI_TEXT_MODELS, value)
}

pub fn is_gemini_text_model_name(value: &str) -> bool {
    has_name(GEMINI_TEXT_MODELS, value)
}

// ── Speech to text ───────────────────────────────────────────

/// Languages accepted by Whisper-family models (AssemblyAI, OpenAI speech).
pub static WHISPER_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "as", "az", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es",
    "et", "eu", "fa", "fi", "fil", "fr", "ga", "gl", "gu", "he", "hi", "hr", "hu", "hy", "id", "is",
    "it", "ja", "jv", "ka", "kk", "km", "kn", "ko", "lo", "lt", "lv", "mk", "ml", "mn", "mr", "ms",
    "mt", "my", "nb", "ne", "nl", "or", "pa", "pl", "ps", "pt", "ro", "ru", "si", "sk", "sl", "so",
    "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tr", "uk", "ur", "uz", "vi", "zh", "zu",
];

pub static ASSEMBLYAI_STT_MODELS: &[&str] = &["slam-1", "universal", "nano", "universal-streaming"];

pub static DEEPGRAM_STT_MODELS: &[&str] = &["nova-3", "nova-2", "nova", "enhanced", "base"];

/// `multi` enables Deepgram's multilingual code-switching mode.
pub static DEEPGRAM_STT_LANGUAGES: &[&str] = &[
    "multi", "en", "en-US", "en-GB", "en-AU", "en-IN", "es", "fr", "de", "hi", "ru", "pt", "ja",
    "it", "nl",
];

pub fn is_whisper_language(value: &str) -> bool {
    WHISPER_LANGUAGES.contains(&value)
}

pub fn is_assemblyai_stt_model(value: &str) -> bool {
    ASSEMBLYAI_STT_MODELS.contains(&value)
}

pub fn is_deepgram_stt_model(value: &str) -> bool {
    DEEPGRAM_STT_MODELS.contains(&value)
}

pub fn is_deepgram_stt_language(value: &str) -> bool {
    DEEPGRAM_STT_LANGUAGES.contains(&value)
}

/// Endpointing confidence threshold in `[0, 1]`.
pub fn is_unit_interval(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| (0.0..=1.0).contains(&n))
}

// ── Text to speech ───────────────────────────────────────────

pub static DEEPGRAM_TTS_LANGUAGES: &[&str] =
    &["en", "es", "fr", "de", "hi", "ru", "pt", "ja", "it", "nl"];

pub static DEEPGRAM_TTS_VOICES: &[&str] = &[
    "thalia", "zeus", "andromeda", "apollo", "athena", "draco", "selene", "hyperion", "theia",
    "vesta", "celeste", "eros",
];

pub static DEEPGRAM_TTS_MODELS: &[&str] = &["aura-2"];

pub static GOOGLE_TTS_LANGUAGES: &[&str] = &[
    "ar-XA", "bn-IN", "da-DK", "nl-BE", "nl-NL", "en-AU", "en-IN", "en-GB", "en-US", "fi-FI",
    "fr-CA", "fr-FR", "de-DE", "gu-IN", "hi-IN", "id-ID", "it-IT", "ja-JP", "kn-IN", "ko-KR",
    "ml-IN", "cmn-CN", "mr-IN", "nb-NO", "pl-PL", "pt-BR", "ru-RU", "es-ES", "es-US", "sw-KE",
    "sv-SE", "ta-IN", "te-IN", "th-TH", "tr-TR", "uk-UA", "ur-IN", "vi-VN",
];

pub static GOOGLE_TTS_VOICES: &[&str] = &[
    "achernar",
    "achird",
    "algenib",
    "algieba",
    "alnilam",
    "aoede",
    "autonoe",
    "callirrhoe",
    "charon",
    "despina",
    "enceladus",
    "erinome",
    "fenrir",
    "gacrux",
    "iapetus",
    "kore",
    "laomedeia",
    "leda",
    "orus",
    "pulcherrima",
    "puck",
    "rasalgethi",
    "sadachbia",
    "sadaltager",
    "schedar",
    "sulafat",
    "umbriel",
    "vindemiatrix",
    "zephyr",
    "zubenelgenubi",
];

pub static GOOGLE_TTS_MODELS: &[&str] = &["Chirp3-HD"];

pub static OPENAI_TTS_VOICES: &[&str] = &["alloy", "echo", "fable", "onyx", "nova", "shimmer"];

pub static OPENAI_TTS_MODELS: &[&str] = &["tts-1", "tts-1-hd", "gpt-4o-mini-tts"];

pub fn is_deepgram_tts_language(value: &str) -> bool {
    DEEPGRAM_TTS_LANGUAGES.contains(&value)
}

pub fn is_deepgram_tts_voice(value: &str) -> bool {
    DEEPGRAM_TTS_VOICES.contains(&value)
}

pub fn is_deepgram_tts_model(value: &str) -> bool {
    DEEPGRAM_TTS_MODELS.contains(&value)
}

pub fn is_google_tts_language(value: &str) -> bool {
    GOOGLE_TTS_LANGUAGES.contains(&value)
}

pub fn is_google_tts_voice(value: &str) -> bool {
    GOOGLE_TTS_VOICES.contains(&value)
}

pub fn is_google_tts_model(value: &str) -> bool {
    GOOGLE_TTS_MODELS.contains(&value)
}

pub fn is_openai_tts_voice(value: &str) -> bool {
    OPENAI_TTS_VOICES.contains(&value)
}

pub fn is_openai_tts_model(value: &str) -> bool {
    OPENAI_TTS_MODELS.contains(&value)
}

// ── Embedding and reranking ──────────────────────────────────

pub static OPENAI_EMBEDDING_MODELS: &[ModelEntry] = &[
    model("openai/text-embedding-3-small", "text-embedding-3-small"),
    model("openai/text-embedding-3-large", "text-embedding-3-large"),
    model("openai/text-embedding-ada-002", "text-embedding-ada-002"),
];

pub static COHERE_EMBEDDING_MODELS: &[ModelEntry] = &[
    model("cohere/embed-english-v3.0", "embed-english-v3.0"),
    model("cohere/embed-multilingual-v3.0", "embed-multilingual-v3.0"),
    model("cohere/embed-english-light-v3.0", "embed-english-light-v3.0"),
    model("cohere/embed-multilingual-light-v3.0", "embed-multilingual-light-v3.0"),
];

pub static GOOGLE_EMBEDDING_MODELS: &[ModelEntry] = &[
    model("google/gemini-embedding-001", "gemini-embedding-001"),
    model("google/text-embedding-004", "text-embedding-004"),
];

pub static VOYAGE_EMBEDDING_MODELS: &[ModelEntry] = &[
    model("voyageai/voyage-3", "voyage-3"),
    model("voyageai/voyage-3-lite", "voyage-3-lite"),
    model("voyageai/voyage-code-3", "voyage-code-3"),
];

pub static COHERE_RERANK_MODELS: &[ModelEntry] = &[
    model("cohere/rerank-v3.5", "rerank-v3.5"),
    model("cohere/rerank-english-v3.0", "rerank-english-v3.0"),
    model("cohere/rerank-multilingual-v3.0", "rerank-multilingual-v3.0"),
];

pub static VOYAGE_RERANK_MODELS: &[ModelEntry] = &[
    model("voyageai/rerank-2", "rerank-2"),
    model("voyageai/rerank-2-lite", "rerank-2-lite"),
];

pub fn is_openai_embedding_model_id(value: &str) -> bool {
    has_id(OPENAI_EMBEDDING_MODELS, value)
}

pub fn is_openai_embedding_model_name(value: &str) -> bool {
    has_name(OPENAI_EMBEDDING_MODELS, value)
}

pub fn is_cohere_embedding_model_id(value: &str) -> bool {
    has_id(COHERE_EMBEDDING_MODELS, value)
}

pub fn is_cohere_embedding_model_name(value: &str) -> bool {
    has_name(COHERE_EMBEDDING_MODELS, value)
}

pub fn is_google_embedding_model_id(value: &str) -> bool {
    has_id(GOOGLE_EMBEDDING_MODELS, value)
}

pub fn is_google_embedding_model_name(value: &str) -> bool {
    has_name(GOOGLE_EMBEDDING_MODELS, value)
}

pub fn is_voyage_embedding_model_id(value: &str) -> bool {
    has_id(VOYAGE_EMBEDDING_MODELS, value)
}

pub fn is_voyage_embedding_model_name(value: &str) -> bool {
    has_name(VOYAGE_EMBEDDING_MODELS, value)
}

pub fn is_cohere_rerank_model_id(value: &str) -> bool {
    has_id(COHERE_RERANK_MODELS, value)
}

pub fn is_cohere_rerank_model_name(value: &str) -> bool {
    has_name(COHERE_RERANK_MODELS, value)
}

pub fn is_voyage_rerank_model_id(value: &str) -> bool {
    has_id(VOYAGE_RERANK_MODELS, value)
}

pub fn is_voyage_rerank_model_name(value: &str) -> bool {
    has_name(VOYAGE_RERANK_MODELS, value)
}

// ── Misc option lists ────────────────────────────────────────

pub static OPENAI_REASONING_EFFORTS: &[&str] = &["low", "medium", "high"];

pub static COHERE_SAFETY_MODES: &[&str] = &["CONTEXTUAL", "STRICT", "NONE"];

pub static ANTHROPIC_SERVICE_TIERS: &[&str] = &["auto", "standard_only"];

pub fn is_openai_reasoning_effort(value: &str) -> bool {
    OPENAI_REASONING_EFFORTS.contains(&value)
}

pub fn is_cohere_safety_mode(value: &str) -> bool {
    COHERE_SAFETY_MODES.contains(&value)
}

pub fn is_anthropic_service_tier(value: &str) -> bool {
    ANTHROPIC_SERVICE_TIERS.contains(&value)
}

/// Non-empty after trimming.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
