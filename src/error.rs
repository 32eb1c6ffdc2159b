use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use std::fmt::{self, Display};
use thiserror::Error;

/// A location in the source text.
///
/// `line` and `column` are 1-based, `column` counts characters. `offset` is the
/// 0-based byte index into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    #[must_use]
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Every way a document can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    UnexpectedCharacter,
    UnexpectedEndOfInput,
    UnterminatedString,
    InvalidEscapeSequence,
    InvalidUnicodeEscape,
    InvalidNumberFormat,
    InvalidLiteral,
    ExpectedColon,
    ExpectedCommaOrBrace,
    ExpectedCommaOrBracket,
    TrailingComma,
    DuplicateKey,
    UnterminatedObject,
    UnterminatedArray,
    TrailingContent,
    NestingTooDeep,
}

impl ErrorKind {
    /// Stable diagnostic code, e.g. `json::trailing_comma`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "json::empty_input",
            ErrorKind::UnexpectedCharacter => "json::unexpected_character",
            ErrorKind::UnexpectedEndOfInput => "json::unexpected_eof",
            ErrorKind::UnterminatedString => "json::unterminated_string",
            ErrorKind::InvalidEscapeSequence => "json::invalid_escape",
            ErrorKind::InvalidUnicodeEscape => "json::invalid_unicode_escape",
            ErrorKind::InvalidNumberFormat => "json::invalid_number",
            ErrorKind::InvalidLiteral => "json::invalid_literal",
            ErrorKind::ExpectedColon => "json::expected_colon",
            ErrorKind::ExpectedCommaOrBrace => "json::expected_comma_or_brace",
            ErrorKind::ExpectedCommaOrBracket => "json::expected_comma_or_bracket",
            ErrorKind::TrailingComma => "json::trailing_comma",
            ErrorKind::DuplicateKey => "json::duplicate_key",
            ErrorKind::UnterminatedObject => "json::unterminated_object",
            ErrorKind::UnterminatedArray => "json::unterminated_array",
            ErrorKind::TrailingContent => "json::trailing_content",
            ErrorKind::NestingTooDeep => "json::nesting_too_deep",
        }
    }

    fn help(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "A JSON document must contain exactly one value.",
            ErrorKind::UnexpectedCharacter => {
                "This character cannot start or appear inside a JSON value here."
            }
            ErrorKind::UnexpectedEndOfInput => "The input ended where a value was expected.",
            ErrorKind::UnterminatedString => "Close the string with a double quote.",
            ErrorKind::InvalidEscapeSequence => {
                "Valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX."
            }
            ErrorKind::InvalidUnicodeEscape => {
                "\\u must be followed by exactly four hex digits; surrogates must come in pairs."
            }
            ErrorKind::InvalidNumberFormat => {
                "Numbers have no leading zeros, need digits after '.', and digits after an exponent."
            }
            ErrorKind::InvalidLiteral => "The only bare words are true, false and null.",
            ErrorKind::ExpectedColon => "Separate an object key from its value with ':'.",
            ErrorKind::ExpectedCommaOrBrace => "Separate members with ',' or close the object with '}'.",
            ErrorKind::ExpectedCommaOrBracket => {
                "Separate elements with ',' or close the array with ']'."
            }
            ErrorKind::TrailingComma => "Remove the comma before the closing bracket.",
            ErrorKind::DuplicateKey => "Each key may appear only once in an object.",
            ErrorKind::UnterminatedObject => "The object was never closed with '}'.",
            ErrorKind::UnterminatedArray => "The array was never closed with ']'.",
            ErrorKind::TrailingContent => "Only whitespace may follow the document's value.",
            ErrorKind::NestingTooDeep => "Reduce nesting or raise ParserOptions::max_depth.",
        }
    }
}

/// A rejected document: what went wrong, where, and the source it came from.
#[derive(Error, Debug, Clone)]
#[error("{message} at {position}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: Position,
    pub message: String,
    span: SourceSpan,
    src: NamedSource<String>,
}

impl ParseError {
    pub(crate) fn new(
        kind: ErrorKind,
        position: Position,
        span: SourceSpan,
        message: impl Into<String>,
        src: NamedSource<String>,
    ) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
            span,
            src,
        }
    }

    /// The source range the diagnostic label covers. It starts at `position`
    /// except for duplicate keys, where it covers the repeated key.
    #[must_use]
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.kind.help()))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.message.clone()),
            self.span,
        ))))
    }
}
