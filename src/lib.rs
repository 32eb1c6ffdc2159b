pub mod api;
pub mod cursor;
pub mod error;
mod number;
pub mod options;
pub mod parser;
mod string;
pub mod value;

pub use api::{
    analyze, is_valid, parse, parse_with_options, validate, validate_with_options, Analysis,
};
pub use error::{ErrorKind, ParseError, Position};
pub use options::ParserOptions;
pub use value::{ElementCounts, Map, Value, ValueKind};
