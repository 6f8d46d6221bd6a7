//! Splitting text into literal and placeholder tokens
//!
//! Localization strings embed templating syntax that must survive machine
//! translation byte-for-byte: `#...#` formatting markers, `$...$` variable
//! substitutions, `[...]` scripted expressions, and explicit newline
//! characters. Segmenting a string first guarantees that only literal
//! natural-language text is ever handed to a translation provider.

use regex::Regex;
use std::sync::OnceLock;

/// Combined placeholder pattern. Alternatives are tried left to right with
/// leftmost-first semantics, so the alternative that starts earliest wins.
const PLACEHOLDER_PATTERN: &str = r"#[^#]*#|\$[^$]*\$|\[[^\]]*\]|\n";

/// Compiled placeholder pattern, built once per process
fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).unwrap())
}

/// Kind of a segmented token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Natural-language text, eligible for translation
    Literal,
    /// Templating syntax or a line break, passed through untouched
    Placeholder,
}

/// One span of a segmented string
///
/// Tokens are immutable once produced; the token texts of a segmented
/// string, concatenated in order, reconstruct that string exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Whether this span is translatable text or protected syntax
    pub kind: TokenKind,
    /// The exact substring of the input this token covers
    pub text: String,
}

impl Token {
    /// Create a literal (translatable) token
    pub fn literal(text: &str) -> Self {
        Token {
            kind: TokenKind::Literal,
            text: text.to_string(),
        }
    }

    /// Create a placeholder (protected) token
    pub fn placeholder(text: &str) -> Self {
        Token {
            kind: TokenKind::Placeholder,
            text: text.to_string(),
        }
    }

    /// Returns true if this token should be sent to translation
    pub fn is_literal(&self) -> bool {
        self.kind == TokenKind::Literal
    }
}

/// Split `text` into an ordered sequence of literal and placeholder tokens.
///
/// A substring is recognized as a placeholder when it matches one of:
///
/// 1. `#` followed by zero or more non-`#` characters and a closing `#`
/// 2. `$` followed by zero or more non-`$` characters and a closing `$`
/// 3. `[` followed by zero or more non-`]` characters and a closing `]`
/// 4. a single newline character
///
/// Everything else is literal text; consecutive non-placeholder characters
/// are grouped into a single `Literal` token. Empty spans between adjacent
/// placeholders are dropped. Unpaired delimiters are ordinary literal text.
///
/// Total for all inputs, including the empty string.
///
/// # Example
///
/// ```ignore
/// use locfile_mt::segment::{segment, TokenKind};
///
/// let tokens = segment("Hello #name#, welcome!");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Placeholder);
/// assert_eq!(tokens[1].text, "#name#");
/// ```
pub fn segment(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for m in placeholder_regex().find_iter(text) {
        if m.start() > last_end {
            tokens.push(Token::literal(&text[last_end..m.start()]));
        }
        tokens.push(Token::placeholder(m.as_str()));
        last_end = m.end();
    }

    if last_end < text.len() {
        tokens.push(Token::literal(&text[last_end..]));
    }

    tokens
}
