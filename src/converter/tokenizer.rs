//! Splits a trimmed identifier-like string into lowercase word segments.
//!
//! The rules are tried in priority order; the first one that applies wins
//! for the whole input:
//!
//! 1. Explicit delimiters present: split on runs of them.
//! 2. Whole string is uppercase letters/digits: one segment.
//! 3. Case transitions: single-pass scan inserting boundaries.
//! 4. No boundary found: one segment.

/// Previous-character class tracked by the case-transition scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    LowerOrDigit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_lowercase() || c.is_numeric() {
            CharClass::LowerOrDigit
        } else {
            CharClass::Other
        }
    }
}

fn is_delimiter(c: char, dot_is_delimiter: bool) -> bool {
    c == '_' || c == '-' || c.is_whitespace() || (dot_is_delimiter && c == '.')
}

/// Extract the ordered word segments of `input`.
///
/// `input` must already be trimmed and non-empty. The dot only counts as a
/// delimiter when the caller is producing dot.case.
pub fn segments(input: &str, dot_is_delimiter: bool) -> Vec<String> {
    if input.chars().any(|c| is_delimiter(c, dot_is_delimiter)) {
        return input
            .split(|c: char| is_delimiter(c, dot_is_delimiter))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect();
    }

    // An all-caps alphanumeric run is one token, never split further.
    if input.chars().all(|c| c.is_uppercase() || c.is_numeric()) {
        return vec![input.to_lowercase()];
    }

    split_case_transitions(input)
}

/// Scan left to right, classifying the previous character to decide where a
/// new word begins. Two transitions open a boundary before an uppercase
/// letter: the previous character was lowercase or a digit (camel boundary),
/// or the previous character was uppercase and the next one is lowercase
/// (acronym-to-word boundary, "XMLHttp" -> "XML" / "Http"). Digits never open
/// a boundary themselves, so they stay attached to the run they follow.
fn split_case_transitions(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Other;

    for (i, &c) in chars.iter().enumerate() {
        let boundary = c.is_uppercase()
            && !current.is_empty()
            && match prev {
                CharClass::LowerOrDigit => true,
                CharClass::Upper => {
                    matches!(chars.get(i + 1), Some(next) if next.is_lowercase())
                }
                CharClass::Other => false,
            };

        if boundary {
            words.push(current.to_lowercase());
            current.clear();
        }
        current.push(c);
        prev = CharClass::of(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
