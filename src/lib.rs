pub mod cli;
pub mod config;
pub mod converter;

pub use config::Config;
pub use converter::{
    convert, convert_value, to_camel_case, to_dot_case, to_kebab_case, validate, CaseStyle,
};

use serde::Serialize;
use thiserror::Error;

/// The only error the conversion API produces: the value handed in was not a
/// string. Empty and whitespace-only strings are valid inputs, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input must be a string")]
pub struct InvalidInputError;

/// One converted input, as reported by the CLI's JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub style: CaseStyle,
}
