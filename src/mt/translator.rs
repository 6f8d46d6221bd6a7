//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! enabling support for different MT backends (Google Translate, mock, etc.)
//! without coupling the library to any specific implementation. The file
//! translation pipeline receives the provider by reference, so tests can
//! substitute a deterministic double for the live service.

use crate::mt::error::MtResult;
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations of this trait handle the actual translation work, whether
/// through an API (Google Translate) or deterministic logic (Mock).
///
/// Translation is async to support I/O-bound providers; callers issue one
/// request at a time.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "en", "en-US")
    /// * `target_locale` - Target language code (e.g., "fr", "zh-CN")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for diagnostics to identify which provider handled a translation.
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code to lowercase, preserving any region subtag
///
/// Google Translate accepts region-qualified codes such as `zh-CN` and
/// `zh-TW` and distinguishes between them, so the region must survive:
/// - `EN` → `en`
/// - `zh-CN` → `zh-cn` is wrong for the API, so only the language part is
///   lowercased: `ZH-cn` → `zh-CN`
pub fn normalize_locale(locale: &str) -> String {
    match locale.split_once('-') {
        Some((lang, region)) => format!("{}-{}", lang.to_lowercase(), region.to_uppercase()),
        None => locale.to_lowercase(),
    }
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code is non-empty and contains only alphanumeric
/// characters, hyphens, and underscores (following ISO 639 conventions).
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(crate::mt::error::MtError::InvalidLocale(
            "Locale code is empty".to_string(),
        ));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(crate::mt::error::MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
