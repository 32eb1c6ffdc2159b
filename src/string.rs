//! String literal decoding.
//!
//! Escapes are resolved while scanning, so each input character is looked at
//! exactly once and multi-byte characters are copied whole.

use crate::error::{ErrorKind, ParseError, Position};
use crate::parser::Parser;

const HIGH_SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

impl Parser<'_> {
    /// String ::= '"' { Char | Escape } '"'
    pub(crate) fn parse_string(&mut self) -> Result<String, ParseError> {
        let open = self.cursor().position();
        self.cursor_mut().advance();
        let mut out = String::new();

        loop {
            let Some(c) = self.cursor().peek() else {
                return Err(self.error_here(
                    ErrorKind::UnterminatedString,
                    format!("unterminated string opened at {open}"),
                ));
            };
            match c {
                '"' => {
                    self.cursor_mut().advance();
                    return Ok(out);
                }
                '\\' => {
                    let escape = self.cursor().position();
                    self.cursor_mut().advance();
                    self.parse_escape(escape, open, &mut out)?;
                }
                c if c < '\u{20}' => {
                    return Err(self.error_here(
                        ErrorKind::UnexpectedCharacter,
                        format!("control character U+{:04X} must be escaped", c as u32),
                    ));
                }
                c => {
                    self.cursor_mut().advance();
                    out.push(c);
                }
            }
        }
    }

    /// Escape ::= '\' ( '"' | '\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u' Hex4 )
    fn parse_escape(
        &mut self,
        escape: Position,
        open: Position,
        out: &mut String,
    ) -> Result<(), ParseError> {
        let Some(c) = self.cursor().peek() else {
            return Err(self.error_here(
                ErrorKind::UnterminatedString,
                format!("unterminated string opened at {open}"),
            ));
        };
        let unescaped = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                self.cursor_mut().advance();
                let c = self.parse_unicode_escape(escape)?;
                out.push(c);
                return Ok(());
            }
            other => {
                return Err(self.error_here(
                    ErrorKind::InvalidEscapeSequence,
                    format!("invalid escape sequence '\\{}'", other.escape_debug()),
                ))
            }
        };
        self.cursor_mut().advance();
        out.push(unescaped);
        Ok(())
    }

    /// Decodes the code point of a `\u` escape whose `\u` is already consumed,
    /// joining a surrogate pair into one character.
    fn parse_unicode_escape(&mut self, escape: Position) -> Result<char, ParseError> {
        let unit = self.parse_hex4()?;

        let code_point = if HIGH_SURROGATES.contains(&unit) {
            let low_escape = self.cursor().position();
            if !self.cursor_mut().advance_literal("\\u") {
                return Err(self.error_at(
                    ErrorKind::InvalidUnicodeEscape,
                    escape,
                    6,
                    format!("unpaired high surrogate \\u{unit:04X}"),
                ));
            }
            let low = self.parse_hex4()?;
            if !LOW_SURROGATES.contains(&low) {
                return Err(self.error_at(
                    ErrorKind::InvalidUnicodeEscape,
                    low_escape,
                    6,
                    format!("expected a low surrogate after \\u{unit:04X}, found \\u{low:04X}"),
                ));
            }
            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
        } else if LOW_SURROGATES.contains(&unit) {
            return Err(self.error_at(
                ErrorKind::InvalidUnicodeEscape,
                escape,
                6,
                format!("unpaired low surrogate \\u{unit:04X}"),
            ));
        } else {
            unit
        };

        char::from_u32(code_point).ok_or_else(|| {
            self.error_at(
                ErrorKind::InvalidUnicodeEscape,
                escape,
                6,
                format!("\\u{code_point:04X} is not a valid code point"),
            )
        })
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut unit = 0;
        for _ in 0..4 {
            let digit = self.cursor().peek().and_then(|c| c.to_digit(16));
            let Some(digit) = digit else {
                let found = match self.cursor().peek() {
                    Some(c) => format!("'{}'", c.escape_debug()),
                    None => "end of input".to_string(),
                };
                return Err(self.error_here(
                    ErrorKind::InvalidUnicodeEscape,
                    format!("expected four hex digits after \\u, found {found}"),
                ));
            };
            self.cursor_mut().advance();
            unit = unit * 16 + digit;
        }
        Ok(unit)
    }
}
