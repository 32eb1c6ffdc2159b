//! Number literal decoding.
//!
//! The grammar is enforced while scanning, so the scanned span is always
//! accepted by `f64::from_str`. Literals too large for `f64` become infinity.

use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;

impl Parser<'_> {
    /// Number ::= [ "-" ] ( "0" | [1-9] Digit* ) [ "." Digit+ ] [ ( "e" | "E" ) [ "+" | "-" ] Digit+ ]
    ///
    /// The grammar is checked while scanning; only the matched span is handed
    /// to the float conversion.
    pub(crate) fn parse_number(&mut self) -> Result<f64, ParseError> {
        let start = self.cursor().position();
        self.cursor_mut().eat('-');

        match self.cursor().peek() {
            Some('0') => {
                self.cursor_mut().advance();
                if let Some(c @ '0'..='9') = self.cursor().peek() {
                    return Err(self.error_here(
                        ErrorKind::InvalidNumberFormat,
                        format!("leading zero followed by '{c}'"),
                    ));
                }
            }
            Some('1'..='9') => self.skip_digits(),
            _ => return Err(self.expected_digit("after '-'")),
        }

        if self.cursor_mut().eat('.') {
            if !self.at_digit() {
                return Err(self.expected_digit("after the decimal point"));
            }
            self.skip_digits();
        }

        if self.cursor_mut().eat('e') || self.cursor_mut().eat('E') {
            if !self.cursor_mut().eat('+') {
                self.cursor_mut().eat('-');
            }
            if !self.at_digit() {
                return Err(self.expected_digit("in the exponent"));
            }
            self.skip_digits();
        }

        let literal = self.cursor().slice_from(start.offset);
        // Grammar-valid spans always convert; kept so a conversion bug surfaces
        // as a parse error instead of a panic.
        literal.parse::<f64>().map_err(|e| {
            self.error_at(
                ErrorKind::InvalidNumberFormat,
                start,
                literal.len(),
                format!("invalid number '{literal}': {e}"),
            )
        })
    }

    fn at_digit(&self) -> bool {
        matches!(self.cursor().peek(), Some('0'..='9'))
    }

    fn skip_digits(&mut self) {
        while self.at_digit() {
            self.cursor_mut().advance();
        }
    }

    fn expected_digit(&self, context: &str) -> ParseError {
        let found = match self.cursor().peek() {
            Some(c) => format!("'{}'", c.escape_debug()),
            None => "end of input".to_string(),
        };
        self.error_here(
            ErrorKind::InvalidNumberFormat,
            format!("expected a digit {context}, found {found}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ErrorKind, ParseError};
    use crate::parser::Parser;
    use crate::value::Value;

    fn number_ok(source: &str) -> f64 {
        match Parser::new(source).parse_document() {
            Ok(Value::Number(n)) => n,
            other => panic!("expected a number from {source:?}, got {other:?}"),
        }
    }

    fn number_err(source: &str) -> ParseError {
        Parser::new(source).parse_document().unwrap_err()
    }

    #[test]
    fn test_integers() {
        assert_eq!(number_ok("0"), 0.0);
        assert_eq!(number_ok("-0"), 0.0);
        assert!(number_ok("-0").is_sign_negative());
        assert_eq!(number_ok("42"), 42.0);
        assert_eq!(number_ok("-1234567890"), -1_234_567_890.0);
    }

    #[test]
    fn test_fractions_and_exponents() {
        assert_eq!(number_ok("1e2"), 100.0);
        assert_eq!(number_ok("1e-2"), 0.01);
        assert_eq!(number_ok("0.0"), 0.0);
        assert_eq!(number_ok("3.25"), 3.25);
        assert_eq!(number_ok("2.5E+3"), 2500.0);
        assert_eq!(number_ok("-0.5e1"), -5.0);
        assert_eq!(number_ok("0e0"), 0.0);
    }

    #[test]
    fn test_overflow_is_infinite() {
        assert_eq!(number_ok("1e400"), f64::INFINITY);
        assert_eq!(number_ok("-1e400"), f64::NEG_INFINITY);
        assert_eq!(number_ok("1e-400"), 0.0);
    }

    #[test]
    fn test_leading_zeros() {
        let err = number_err("00");
        assert_eq!(err.kind, ErrorKind::InvalidNumberFormat);
        assert_eq!(err.position.offset, 1);
        assert_eq!(number_err("01").kind, ErrorKind::InvalidNumberFormat);
        assert_eq!(number_err("-01").kind, ErrorKind::InvalidNumberFormat);
    }

    #[test]
    fn test_incomplete_numbers() {
        let err = number_err("123.");
        assert_eq!(err.kind, ErrorKind::InvalidNumberFormat);
        assert_eq!(err.position.offset, 4);

        for source in ["-", "-a", "1.e5", "1e", "1e+", "[1E-]", "-.5"] {
            assert_eq!(
                number_err(source).kind,
                ErrorKind::InvalidNumberFormat,
                "{source}"
            );
        }
    }

    #[test]
    fn test_number_followed_by_garbage() {
        assert_eq!(number_err("1.5.3").kind, ErrorKind::TrailingContent);
        assert_eq!(number_err("12abc").kind, ErrorKind::TrailingContent);
        assert_eq!(number_err("[1x]").kind, ErrorKind::ExpectedCommaOrBracket);
    }

    #[test]
    fn test_leading_dot_and_plus_rejected() {
        assert_eq!(number_err(".5").kind, ErrorKind::UnexpectedCharacter);
        assert_eq!(number_err("+5").kind, ErrorKind::UnexpectedCharacter);
    }
}
