use crate::domain::error::TlError;
use crate::domain::model::{TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use tracing::debug;

/// Run one translation request against the given translator.
///
/// Nothing is cached: calling this twice with the same request issues two
/// service calls. Any translator failure propagates unchanged.
pub async fn translate_request(
    translator: &dyn Translator,
    request: &TranslationRequest,
) -> Result<TranslationResult, TlError> {
    debug!(
        target_lang = %request.target_lang,
        chars = request.source_text.chars().count(),
        "sending translation request"
    );

    let translated = translator
        .translate(&request.source_text, &request.target_lang)
        .await?;

    Ok(TranslationResult {
        original: request.source_text.clone(),
        translated,
    })
}
