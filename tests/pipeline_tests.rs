//! End-to-end pipeline tests with a stubbed translation service

use async_trait::async_trait;
use tl::application::translate::translate_request;
use tl::domain::error::TlError;
use tl::domain::model::TranslationRequest;
use tl::domain::traits::Translator;
use tl::presentation::table::render_grid;

/// Deterministic stand-in for the live service
struct StubTranslator {
    reply: &'static str,
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String, TlError> {
        Ok(self.reply.to_string())
    }
}

struct UnreachableTranslator;

#[async_trait]
impl Translator for UnreachableTranslator {
    async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String, TlError> {
        Err(TlError::Api("service unreachable".to_string()))
    }
}

#[tokio::test]
async fn test_hello_to_kannada_table() {
    let stub = StubTranslator { reply: "ನಮಸ್ಕಾರ" };
    let request = TranslationRequest::new("Hello", "kn");

    let result = translate_request(&stub, &request).await.unwrap();
    let table = render_grid(&result, "Kannada");
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[1].contains("Language:") && lines[1].contains("Word/Sentence"));
    assert!(lines[3].contains("English") && lines[3].contains("Hello"));
    assert!(lines[5].contains("Kannada") && lines[5].contains("ನಮಸ್ಕಾರ"));
}

#[tokio::test]
async fn test_empty_input_to_hindi_table() {
    let stub = StubTranslator { reply: "" };
    let request = TranslationRequest::new("", "hi");

    let result = translate_request(&stub, &request).await.unwrap();
    let table = render_grid(&result, "Hindi");
    let lines: Vec<&str> = table.lines().collect();

    // Well-formed grid with empty cells
    assert_eq!(lines.len(), 7);
    assert!(lines[3].contains("English"));
    assert!(lines[5].contains("Hindi"));
}

#[tokio::test]
async fn test_two_runs_render_identically() {
    let stub = StubTranslator { reply: "Ciao" };
    let request = TranslationRequest::new("Hello", "it");

    let first = translate_request(&stub, &request).await.unwrap();
    let second = translate_request(&stub, &request).await.unwrap();
    assert_eq!(render_grid(&first, "Italian"), render_grid(&second, "Italian"));
}

#[tokio::test]
async fn test_failure_produces_no_table() {
    let request = TranslationRequest::new("Hello", "kn");

    // The error propagates before any rendering can happen
    let result = translate_request(&UnreachableTranslator, &request).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_label_does_not_follow_target_lang() {
    // Known inconsistency, preserved on purpose: the label row comes from
    // config, so a different target code alone leaves the label unchanged
    let stub = StubTranslator { reply: "नमस्ते" };
    let request = TranslationRequest::new("Hello", "hi");

    let result = translate_request(&stub, &request).await.unwrap();
    let table = render_grid(&result, "Kannada");
    assert!(table.contains("Kannada"));
    assert!(!table.contains("Hindi"));
}
