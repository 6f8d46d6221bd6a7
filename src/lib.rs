//! Machine translation for quoted strings in line-oriented localization
//! files.
//!
//! The input file is treated as opaque lines; only the contents of
//! double-quoted substrings are translated, and templating placeholders
//! (`#...#`, `$...$`, `[...]`) and newline characters inside them pass
//! through the translation provider untouched. See [`segment`] for the
//! splitting algorithm, [`locfile`] for the file pipeline, and [`mt`] for
//! the provider layer.

pub mod locfile;
pub mod mt;
pub mod segment;

// Re-export the main entry points for convenient access
pub use locfile::{FileReport, LocFileError, TranslateOptions, translate_file};
pub use mt::{GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator, MtError};
pub use segment::{Token, TokenKind, segment};
