//! Quoted-string translation for line-oriented localization files
//!
//! A localization file is treated as opaque lines of key/value text. Only
//! the contents of double-quoted substrings are translated; keys,
//! indentation, punctuation and line terminators pass through unchanged.
//! Each quoted value is segmented first (see [`crate::segment`]) so that
//! placeholders survive translation verbatim, and a fragment that fails to
//! translate keeps its original text without aborting the run.

use crate::mt::error::MtError;
use crate::mt::translator::MachineTranslator;
use crate::segment::segment;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Pattern for a quoted span: the shortest run between two `"` characters
const QUOTED_PATTERN: &str = r#""([^"]*)""#;

fn quoted_regex() -> &'static Regex {
    static QUOTED_RE: OnceLock<Regex> = OnceLock::new();
    QUOTED_RE.get_or_init(|| Regex::new(QUOTED_PATTERN).unwrap())
}

/// Configuration for one file-translation run
///
/// Built once at the boundary (CLI or caller) and handed to
/// [`translate_file`]; the translation logic itself performs no interactive
/// I/O.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Path of the localization file to translate
    pub source: PathBuf,
    /// Language the quoted strings are written in
    pub source_locale: String,
    /// Language to translate into
    pub target_locale: String,
    /// Where to write the result; `None` overwrites the source file
    pub destination: Option<PathBuf>,
}

impl TranslateOptions {
    /// Default source language of the quoted strings
    pub const DEFAULT_SOURCE_LOCALE: &'static str = "en";

    /// Default target language (Simplified Chinese)
    pub const DEFAULT_TARGET_LOCALE: &'static str = "zh-CN";

    /// Create options for translating `source` into `target_locale`,
    /// overwriting the source file in place
    pub fn new(source: &Path, target_locale: &str) -> Self {
        TranslateOptions {
            source: source.to_path_buf(),
            source_locale: Self::DEFAULT_SOURCE_LOCALE.to_string(),
            target_locale: target_locale.to_string(),
            destination: None,
        }
    }

    /// Override the source language
    pub fn with_source_locale(&mut self, locale: &str) -> &mut Self {
        self.source_locale = locale.to_string();
        self
    }

    /// Write the result to `path` instead of overwriting the source
    pub fn with_destination(&mut self, path: &Path) -> &mut Self {
        self.destination = Some(path.to_path_buf());
        self
    }

    /// The path the translated file will be written to
    pub fn output_path(&self) -> &Path {
        self.destination.as_deref().unwrap_or(&self.source)
    }
}

/// Outcome summary of one file-translation run
///
/// Fragment-level translation failures are recovered locally; they surface
/// here as counts and user-facing warnings rather than as errors.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    /// Lines read from the source file
    pub lines: usize,
    /// Distinct quoted values processed across all lines
    pub quoted_spans: usize,
    /// Literal fragments successfully translated
    pub fragments_translated: usize,
    /// Literal fragments that kept their original text after a failure
    pub fragments_failed: usize,
    /// User-facing warnings, one per failed fragment
    pub warnings: Vec<String>,
}

/// Error types for file-level translation
///
/// These are the fatal conditions; a single failed fragment never aborts
/// the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocFileError {
    /// Source file does not exist; nothing is written
    FileNotFound(PathBuf),
    /// Source file could not be read; nothing is written
    Read(PathBuf, String),
    /// Source file is not valid UTF-8 text; nothing is written
    Parse(PathBuf, String),
    /// Destination could not be written after translation completed
    Write(PathBuf, String),
}

impl std::fmt::Display for LocFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocFileError::FileNotFound(path) => {
                write!(f, "File not found: {}", path.display())
            }
            LocFileError::Read(path, msg) => {
                write!(f, "Failed to read '{}': {}", path.display(), msg)
            }
            LocFileError::Parse(path, msg) => {
                write!(f, "Failed to decode '{}' as UTF-8 text: {}", path.display(), msg)
            }
            LocFileError::Write(path, msg) => {
                write!(f, "Failed to write '{}': {}", path.display(), msg)
            }
        }
    }
}

impl std::error::Error for LocFileError {}

/// Extract the quoted values of a line, left to right, deduplicated by
/// exact string equality in first-occurrence order.
///
/// A value that appears more than once on the line is returned once; its
/// later occurrences are deliberately left alone by [`translate_line`].
pub fn quoted_values(line: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for caps in quoted_regex().captures_iter(line) {
        let value = caps[1].to_string();
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

/// Translate the literal fragments of one quoted value, keeping
/// placeholders untouched.
///
/// The value is segmented, each `Literal` token is sent to the provider one
/// at a time, and the tokens are concatenated back in their original order.
/// A fragment whose translation fails keeps its original text and is
/// recorded in the report (fail-soft).
pub async fn translate_quoted_text(
    provider: &dyn MachineTranslator,
    text: &str,
    source_locale: &str,
    target_locale: &str,
    report: &mut FileReport,
) -> String {
    let mut rebuilt = String::new();

    for token in segment(text) {
        if token.is_literal() {
            match provider
                .translate(&token.text, source_locale, target_locale)
                .await
            {
                Ok(translated) => {
                    report.fragments_translated += 1;
                    rebuilt.push_str(&translated);
                }
                Err(e) => {
                    report.fragments_failed += 1;
                    report
                        .warnings
                        .push(fragment_warning(&token.text, &e));
                    rebuilt.push_str(&token.text);
                }
            }
        } else {
            rebuilt.push_str(&token.text);
        }
    }

    rebuilt
}

fn fragment_warning(fragment: &str, error: &MtError) -> String {
    format!("Failed to translate fragment {:?}: {}", fragment, error)
}

/// Translate every distinct quoted value of a line and substitute the
/// results back in.
///
/// Substitution replaces the first occurrence of `"value"` in the current
/// line only. A line with no quoted spans is returned unchanged.
pub async fn translate_line(
    provider: &dyn MachineTranslator,
    line: &str,
    source_locale: &str,
    target_locale: &str,
    report: &mut FileReport,
) -> String {
    let mut modified = line.to_string();

    for value in quoted_values(line) {
        report.quoted_spans += 1;
        let translated =
            translate_quoted_text(provider, &value, source_locale, target_locale, report).await;
        let needle = format!("\"{}\"", value);
        let replacement = format!("\"{}\"", translated);
        modified = modified.replacen(&needle, &replacement, 1);
    }

    modified
}

/// Split text into lines, each keeping its trailing terminator if present.
///
/// The last line may have no terminator. Splitting on the `\n` byte keeps
/// `\r\n` terminators intact inside their line.
fn split_lines_keep_ends(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (idx, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(&text[start..=idx]);
            start = idx + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Translate the quoted strings of a localization file.
///
/// Lines are processed strictly in file order, quoted values within a line
/// strictly left to right, one provider call at a time. Non-quoted content
/// and line terminators are byte-identical in the output.
///
/// # Errors
///
/// * [`LocFileError::FileNotFound`] - source path does not exist
/// * [`LocFileError::Read`] - source could not be read
/// * [`LocFileError::Parse`] - source is not valid UTF-8
/// * [`LocFileError::Write`] - destination could not be written
///
/// All four abort before (or instead of) producing output; fragment-level
/// translation failures never do.
pub async fn translate_file(
    provider: &dyn MachineTranslator,
    options: &TranslateOptions,
) -> Result<FileReport, LocFileError> {
    if !options.source.exists() {
        return Err(LocFileError::FileNotFound(options.source.clone()));
    }

    let bytes = fs::read(&options.source)
        .map_err(|e| LocFileError::Read(options.source.clone(), e.to_string()))?;
    let content = String::from_utf8(bytes)
        .map_err(|e| LocFileError::Parse(options.source.clone(), e.to_string()))?;

    let mut report = FileReport::default();
    let mut output = String::with_capacity(content.len());

    for line in split_lines_keep_ends(&content) {
        report.lines += 1;
        let translated = translate_line(
            provider,
            line,
            &options.source_locale,
            &options.target_locale,
            &mut report,
        )
        .await;
        output.push_str(&translated);
    }

    let destination = options.output_path();
    fs::write(destination, output)
        .map_err(|e| LocFileError::Write(destination.to_path_buf(), e.to_string()))?;

    Ok(report)
}
