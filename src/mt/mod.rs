/// Machine Translation Module
///
/// This module provides the translation capability behind the quoted-string
/// file translator. It consists of:
///
/// 1. **MT Trait** - Generic `MachineTranslator` trait for provider abstraction
/// 2. **Google Translate Provider** - Real translations via Google Translate API v2
/// 3. **Mock Provider** - Deterministic test double, no network required
/// 4. **Error Types** - Typed failures for configuration, network and translation
///
/// The file-translation pipeline in [`crate::locfile`] accepts any
/// `MachineTranslator` by reference; construct a provider at the boundary
/// and inject it.
///
/// # Example
///
/// ```ignore
/// use locfile_mt::locfile::{TranslateOptions, translate_file};
/// use locfile_mt::mt::GoogleTranslateProvider;
/// use std::path::Path;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = GoogleTranslateProvider::from_env()?;
///     let options = TranslateOptions::new(Path::new("loc.yml"), "zh-CN");
///     let report = translate_file(&provider, &options).await?;
///     println!("{} fragments translated", report.fragments_translated);
///     Ok(())
/// }
/// ```
pub mod error;
pub mod google_translate;
pub mod mock;
pub mod translator;

#[cfg(test)]
mod integration_tests;

pub use error::{MtError, MtResult};
pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::{MachineTranslator, normalize_locale, validate_locale};
