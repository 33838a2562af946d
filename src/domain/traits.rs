use crate::domain::error::TlError;
use async_trait::async_trait;

/// Trait for translation services
///
/// This trait provides an abstraction for different translation providers.
/// Implementations can be swapped without changing the calling code, and
/// tests substitute a stub so the pipeline runs without a real network.
#[async_trait]
pub trait Translator {
    /// Translate `text` into the language named by `target_lang`
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TlError>;
}
