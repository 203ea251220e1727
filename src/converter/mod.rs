pub mod formatter;
pub mod tokenizer;

use crate::InvalidInputError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Target case style for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dot => write!(f, "dot"),
        }
    }
}

/// Check that a loosely typed value is a string and return it trimmed.
///
/// Null, numbers, booleans, arrays and objects are all rejected with
/// [`InvalidInputError`]. A string that trims down to nothing is still
/// accepted; the formatters turn it into an empty output.
pub fn validate(value: &Value) -> Result<&str, InvalidInputError> {
    match value {
        Value::String(s) => Ok(s.trim()),
        _ => Err(InvalidInputError),
    }
}

/// Convert a string to the given case style.
///
/// The pipeline is trim → tokenize → format. Pure and stateless: the same
/// input always produces the same output.
pub fn convert(input: &str, style: CaseStyle) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    // The dot is only a word delimiter when dot.case itself is the target,
    // so already-converted dot.case strings split back into the same words.
    let segments = tokenizer::segments(trimmed, style == CaseStyle::Dot);

    match style {
        CaseStyle::Camel => formatter::camel(&segments),
        CaseStyle::Kebab => formatter::join(&segments, "-"),
        CaseStyle::Dot => formatter::join(&segments, "."),
    }
}

/// Convert a loosely typed value, rejecting anything that is not a string.
pub fn convert_value(value: &Value, style: CaseStyle) -> Result<String, InvalidInputError> {
    validate(value).map(|s| convert(s, style))
}

pub fn to_camel_case(input: &str) -> String {
    convert(input, CaseStyle::Camel)
}

pub fn to_kebab_case(input: &str) -> String {
    convert(input, CaseStyle::Kebab)
}

pub fn to_dot_case(input: &str) -> String {
    convert(input, CaseStyle::Dot)
}
