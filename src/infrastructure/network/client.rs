use crate::domain::error::TlError;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by the public Google translate web endpoint
///
/// The endpoint is the same one the translate.google.com frontend uses; it
/// takes a source language of `auto` and returns translated segments as a
/// nested JSON array.
pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TlError> {
        translate_google_impl(&self.client, text, target_lang).await
    }
}

// Internal implementation
async fn translate_google_impl(
    client: &Client,
    text: &str,
    target_lang: &str,
) -> Result<String, TlError> {
    let params = [
        ("client", "gtx"),
        ("sl", "auto"),
        ("tl", target_lang),
        ("dt", "t"),
        ("q", text),
    ];

    let response = client.get(TRANSLATE_URL).query(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        // 400 is what the endpoint returns for an unknown language code
        let hint = if status.as_u16() == 400 {
            " (check the target language code)"
        } else {
            ""
        };
        return Err(TlError::Api(format!(
            "Translate API returned HTTP {}{}",
            status.as_u16(),
            hint
        )));
    }

    let body = response.json::<Value>().await?;
    parse_translation(&body, text)
}

/// Extract the translated text from the endpoint's nested-array payload.
///
/// Shape: `[[["<translated>", "<original>", ...], ...], ...]` where long
/// inputs are split into several segments that concatenate to the full
/// translation.
fn parse_translation(body: &Value, text: &str) -> Result<String, TlError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TlError::Api("Malformed translation response".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }

    // Empty input legitimately translates to nothing
    if translated.is_empty() && !text.is_empty() {
        return Err(TlError::Api("Empty translation response".to_string()));
    }

    Ok(translated)
}
