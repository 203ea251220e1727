//! Joins word segments into a target case style. Segments arrive lowercase
//! from the tokenizer, so the formatters only ever add casing back.

/// Join segments as camelCase: first segment as-is, the rest capitalized,
/// no separator. An empty segment list yields an empty string.
pub fn camel(segments: &[String]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            out.push_str(&capitalize(segment));
        }
    }
    out
}

/// Join segments with a fixed separator (kebab-case, dot.case).
pub fn join(segments: &[String], separator: &str) -> String {
    segments.join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
