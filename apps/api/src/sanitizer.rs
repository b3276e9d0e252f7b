//! Response Sanitizer — recovers a parseable JSON object from free-form model
//! output. Model text is adversarial by default: it may wrap the object in
//! markdown fences, surround it with commentary, or omit it entirely.

use serde_json::Value;

use crate::errors::AppError;

const SNIPPET_LIMIT: usize = 200;

/// Recovers the first complete JSON object embedded in `raw` and parses it.
///
/// Pipeline:
/// 1. Strip every ``` fence marker (with or without a language tag), trim.
/// 2. Scan for the first balanced `{...}`, tracking brace depth and string
///    literals so braces inside strings cannot confuse the scan.
/// 3. No candidate at all → `NoJsonFound`. Candidate that does not parse →
///    `MalformedJson` with the parser diagnostic and the offending substring.
///
/// The parsed value is returned as-is: no schema validation is performed, so
/// callers receive whatever keys the model actually produced.
pub fn sanitize_response(raw: &str) -> Result<Value, AppError> {
    let cleaned = strip_code_fences(raw);
    let candidate = find_json_object(&cleaned).ok_or(AppError::NoJsonFound)?;

    serde_json::from_str(candidate).map_err(|e| AppError::MalformedJson {
        detail: e.to_string(),
        snippet: truncate(candidate),
    })
}

/// Removes every occurrence of a fenced code-block marker, tagged or bare.
/// `"```json"` must go before `"```"` or the tag would be left behind.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Locates the first complete balanced JSON object in `text`.
///
/// Starts at the first `{` and walks forward counting brace depth, skipping
/// string literals (including `\` escapes). Returns `None` when there is no
/// `{` at all, or when depth never returns to zero — a truncated object with
/// no closing brace is "not found", not "malformed".
fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

fn truncate(s: &str) -> String {
    if s.len() <= SNIPPET_LIMIT {
        return s.to_string();
    }
    let mut end = SNIPPET_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
