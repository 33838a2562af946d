use serde::{Deserialize, Serialize};

// 一次翻译请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_lang: String, // ISO-639-1 风格语言代码, 如 "kn", "hi", "it"
}

impl TranslationRequest {
    /// Store both strings verbatim; no validation, empty text is allowed.
    pub fn new(source_text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_lang: target_lang.into(),
        }
    }
}

// 翻译结果 (原文, 译文)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
}
