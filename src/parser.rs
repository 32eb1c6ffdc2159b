use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, Position};
use crate::options::ParserOptions;
use crate::value::{Map, Value};
use log::{debug, trace};
use miette::{NamedSource, SourceSpan};

/// A recursive descent parser for strict JSON.
///
/// Every decoder only moves the shared cursor forward, so a document is parsed
/// in one linear scan. The first violation stops the parse.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source_name: String,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &ParserOptions::default())
    }

    pub fn with_options(input: &'a str, options: &ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            source_name: options.source_name.clone(),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Current scanner position.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    // === Main Parsing Methods ===

    /// Document ::= ws Value ws EOF
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        debug!(
            "parsing {} ({} bytes)",
            self.source_name,
            self.cursor.input().len()
        );
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return Err(self.error_here(
                ErrorKind::EmptyInput,
                "expected a JSON value, found empty input",
            ));
        }

        let value = self.parse_value()?;

        self.cursor.skip_whitespace();
        if let Some(c) = self.cursor.peek() {
            return Err(self.error_here(
                ErrorKind::TrailingContent,
                format!("unexpected '{c}' after the end of the document"),
            ));
        }
        debug!("parsed {} as {}", self.source_name, value.type_name());
        Ok(value)
    }

    /// Value ::= Object | Array | String | Number | "true" | "false" | "null"
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        let Some(c) = self.cursor.peek() else {
            return Err(self.error_here(
                ErrorKind::UnexpectedEndOfInput,
                "expected a value, found end of input",
            ));
        };
        trace!("value '{}' at {}", c, self.cursor.position());

        match c {
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            '"' => self.parse_string().map(Value::String),
            't' => self.parse_literal("true", Value::Boolean(true)),
            'f' => self.parse_literal("false", Value::Boolean(false)),
            'n' => self.parse_literal("null", Value::Null),
            '-' | '0'..='9' => self.parse_number().map(Value::Number),
            other => Err(self.error_here(
                ErrorKind::UnexpectedCharacter,
                format!("unexpected character '{}', expected a value", other.escape_debug()),
            )),
        }
    }

    /// Object ::= "{" ws [ Member { "," ws Member } ] "}"
    /// Member ::= String ws ":" ws Value ws
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let open = self.enter_nested()?;
        let mut members = Map::new();

        self.cursor.skip_whitespace();
        if self.peek_within(ErrorKind::UnterminatedObject, open)? == '}' {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(Value::Object(members));
        }

        loop {
            // Expect a key.
            let key_start = self.cursor.position();
            let c = self.peek_within(ErrorKind::UnterminatedObject, open)?;
            if c != '"' {
                return Err(self.error_here(
                    ErrorKind::UnexpectedCharacter,
                    format!("expected a string key, found '{}'", c.escape_debug()),
                ));
            }
            let key = self.parse_string()?;
            if members.contains_key(&key) {
                let len = self.cursor.offset() - key_start.offset;
                return Err(self.error_spanning(
                    ErrorKind::DuplicateKey,
                    self.cursor.position(),
                    (key_start.offset, len).into(),
                    format!("duplicate key \"{key}\" starting at {key_start}"),
                ));
            }

            self.cursor.skip_whitespace();
            match self.peek_within(ErrorKind::UnterminatedObject, open)? {
                ':' => {
                    self.cursor.advance();
                }
                other => {
                    return Err(self.error_here(
                        ErrorKind::ExpectedColon,
                        format!(
                            "expected ':' after key \"{key}\", found '{}'",
                            other.escape_debug()
                        ),
                    ))
                }
            }

            self.cursor.skip_whitespace();
            self.peek_within(ErrorKind::UnterminatedObject, open)?;
            let value = self.parse_value()?;
            members.insert(key, value);

            // Expect a comma or the closing brace.
            self.cursor.skip_whitespace();
            match self.peek_within(ErrorKind::UnterminatedObject, open)? {
                ',' => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                    if self.peek_within(ErrorKind::UnterminatedObject, open)? == '}' {
                        return Err(self.error_here(
                            ErrorKind::TrailingComma,
                            "trailing comma before '}'",
                        ));
                    }
                }
                '}' => {
                    self.cursor.advance();
                    break;
                }
                other => {
                    return Err(self.error_here(
                        ErrorKind::ExpectedCommaOrBrace,
                        format!(
                            "expected ',' or '}}' after object member, found '{}'",
                            other.escape_debug()
                        ),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    /// Array ::= "[" ws [ Value { "," ws Value } ] "]"
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let open = self.enter_nested()?;
        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.peek_within(ErrorKind::UnterminatedArray, open)? == ']' {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.peek_within(ErrorKind::UnterminatedArray, open)? {
                ',' => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                    if self.peek_within(ErrorKind::UnterminatedArray, open)? == ']' {
                        return Err(self.error_here(
                            ErrorKind::TrailingComma,
                            "trailing comma before ']'",
                        ));
                    }
                }
                ']' => {
                    self.cursor.advance();
                    break;
                }
                other => {
                    return Err(self.error_here(
                        ErrorKind::ExpectedCommaOrBracket,
                        format!(
                            "expected ',' or ']' after array element, found '{}'",
                            other.escape_debug()
                        ),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Matches `literal` in full before consuming anything.
    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value, ParseError> {
        if self.cursor.advance_literal(literal) {
            return Ok(value);
        }
        let found: String = self
            .cursor
            .rest()
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .take(literal.len())
            .collect();
        let len = found.len().max(1);
        Err(self.error_at(
            ErrorKind::InvalidLiteral,
            self.cursor.position(),
            len,
            format!("invalid literal '{found}', expected '{literal}'"),
        ))
    }

    // === Helper Methods ===

    /// Consumes an opening bracket, enforcing the nesting limit.
    fn enter_nested(&mut self) -> Result<Position, ParseError> {
        let open = self.cursor.position();
        self.depth += 1;
        if let Some(max) = self.max_depth {
            if self.depth > max {
                return Err(self.error_here(
                    ErrorKind::NestingTooDeep,
                    format!("nesting exceeds the maximum depth of {max}"),
                ));
            }
        }
        self.cursor.advance();
        Ok(open)
    }

    /// Peeks the next character, reporting end of input as `kind` for the
    /// container opened at `open`.
    fn peek_within(&self, kind: ErrorKind, open: Position) -> Result<char, ParseError> {
        self.cursor.peek().ok_or_else(|| {
            let what = if kind == ErrorKind::UnterminatedArray {
                "array"
            } else {
                "object"
            };
            self.error_here(
                kind,
                format!("unterminated {what} opened at {open}"),
            )
        })
    }

    pub(crate) fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn error_at(
        &self,
        kind: ErrorKind,
        position: Position,
        len: usize,
        message: impl Into<String>,
    ) -> ParseError {
        self.error_spanning(kind, position, (position.offset, len).into(), message)
    }

    /// An error reported at `position` whose label covers `span`.
    pub(crate) fn error_spanning(
        &self,
        kind: ErrorKind,
        position: Position,
        span: SourceSpan,
        message: impl Into<String>,
    ) -> ParseError {
        let error = ParseError::new(
            kind,
            position,
            span,
            message,
            NamedSource::new(&self.source_name, self.cursor.input().to_string()),
        );
        debug!("rejected {}: [{}] {}", self.source_name, kind.code(), error);
        error
    }

    /// An error at the scanner's current position, spanning the next character.
    pub(crate) fn error_here(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        let len = self.cursor.peek().map_or(0, char::len_utf8);
        self.error_at(kind, self.cursor.position(), len, message)
    }
}
