/// Utilities for records output format
/// Escape a string for embedding in a quoted records field.
/// Backslashes are doubled before `"` becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Render a node id as a single records token.
///
/// Ids containing whitespace, quotes, backslashes, `=` or `,` are quoted so
/// the line stays splittable on spaces and id lists on commas.
pub fn record_token(id: &str) -> String {
    if id.is_empty()
        || id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\\' | '=' | ','))
    {
        format!("\"{}\"", escape_quotes(id))
    } else {
        id.to_string()
    }
}

/// Header line for records output
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H pathtrace=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
