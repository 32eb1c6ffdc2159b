use crate::error::ParseError;
use crate::options::ParserOptions;
use crate::parser::Parser;
use crate::value::{ElementCounts, JsonText, Value, ValueKind};
use serde::Serialize;

/// Parses `text` as a single strict JSON document.
///
/// # Errors
///
/// Returns the first `ParseError` found while scanning.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, &ParserOptions::default())
}

/// Like [`parse`], with explicit configuration.
///
/// # Errors
///
/// Returns the first `ParseError` found while scanning.
pub fn parse_with_options(text: &str, options: &ParserOptions) -> Result<Value, ParseError> {
    Parser::with_options(text, options).parse_document()
}

/// Checks that `text` is a strict JSON document. Succeeds exactly when
/// [`parse`] would.
///
/// # Errors
///
/// Returns the same `ParseError` that [`parse`] would.
pub fn validate(text: &str) -> Result<(), ParseError> {
    validate_with_options(text, &ParserOptions::default())
}

/// Like [`validate`], with explicit configuration.
///
/// # Errors
///
/// Returns the same `ParseError` that [`parse_with_options`] would.
pub fn validate_with_options(text: &str, options: &ParserOptions) -> Result<(), ParseError> {
    parse_with_options(text, options).map(|_| ())
}

#[must_use]
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}

/// The result of a successful analysis of a JSON document: the value itself
/// plus a summary of its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub kind: ValueKind,
    pub counts: ElementCounts,
    pub value: Value,
}

impl Analysis {
    /// Serializes the analysis into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct Json<'a> {
            kind: ValueKind,
            counts: ElementCounts,
            value: JsonText<'a>,
        }

        serde_json::to_string_pretty(&Json {
            kind: self.kind,
            counts: self.counts,
            value: JsonText(&self.value),
        })
    }

    /// Serializes the analysis into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Parses `text` and summarizes the resulting tree.
///
/// # Errors
///
/// Returns a `ParseError` if `text` is not a strict JSON document.
pub fn analyze(text: &str, options: &ParserOptions) -> Result<Analysis, ParseError> {
    let value = parse_with_options(text, options)?;
    Ok(Analysis {
        kind: value.kind(),
        counts: value.count_elements(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_simple_parse_to_json() {
        let source = r#"
        {
            "name": "My App",
            "version": 1.0,
            "is_enabled": true,
            "features": ["a", "b", "c"],
            "config": {
                "host": "localhost",
                "port": 8080
            }
        }
    "#;

        let expected_json = serde_json::json!({
            "name": "My App",
            "version": 1.0,
            "is_enabled": true,
            "features": ["a", "b", "c"],
            "config": {
                "host": "localhost",
                "port": 8080.0,
            }
        });

        let value = parse(source).unwrap();
        let result = value.to_json().unwrap();
        let result_json: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(result_json, expected_json);
    }

    #[test]
    fn test_validate_agrees_with_parse() {
        for source in ["{}", "[1, 2", r#"{"a":1,"a":2}"#, "  ", "null", "01"] {
            let parsed = parse(source).map(|_| ());
            let validated = validate(source);
            assert_eq!(parsed.is_ok(), validated.is_ok(), "{source}");
            if let (Err(a), Err(b)) = (parsed, validated) {
                assert_eq!(a.kind, b.kind);
                assert_eq!(a.position, b.position);
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(r#"{"ok": [true, null]}"#));
        assert!(!is_valid("{ok: true}"));
    }

    #[test]
    fn test_analyze() {
        let analysis = analyze(
            r#"{"users": [{"name": "a", "admin": false}, {"name": "b", "admin": null}]}"#,
            &ParserOptions::default(),
        )
        .unwrap();
        assert_eq!(analysis.kind, ValueKind::Object);
        assert_eq!(analysis.counts.objects, 3);
        assert_eq!(analysis.counts.arrays, 1);
        assert_eq!(analysis.counts.strings, 2);
        assert_eq!(analysis.counts.booleans, 1);
        assert_eq!(analysis.counts.nulls, 1);
        assert_eq!(analysis.counts.numbers, 0);
    }

    #[test]
    fn test_analysis_to_json() {
        let analysis = analyze("[1, \"x\"]", &ParserOptions::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&analysis.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "array");
        assert_eq!(json["counts"]["numbers"], 1);
        assert_eq!(json["counts"]["strings"], 1);
        assert_eq!(json["value"], serde_json::json!([1.0, "x"]));
    }

    #[test]
    fn test_analysis_to_json_keeps_overflowed_numbers() {
        let analysis = analyze("[-1e400]", &ParserOptions::default()).unwrap();
        let json = analysis.to_json().unwrap();
        assert!(json.contains("-1e999"), "{json}");
    }

    #[test]
    fn test_analysis_to_yaml() {
        let analysis = analyze("true", &ParserOptions::default()).unwrap();
        let yaml = analysis.to_yaml().unwrap();
        assert!(yaml.starts_with("kind: boolean\n"), "{yaml}");
        assert!(yaml.ends_with("value: true\n"), "{yaml}");
    }

    #[test]
    fn test_analyze_rejects_invalid() {
        let err = analyze("[1,]", &ParserOptions::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TrailingComma);
    }
}
