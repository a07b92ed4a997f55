// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

#[cfg(test)]
mod tests;

const DELIMITERS: [&str; 4] = ["{{ ", " }}", "{{", "}}"];
const SEPARATORS: [char; 4] = [' ', '.', '-', '&'];

/// Turns a dotted path into a template-safe identifier.
///
/// Distinct paths can map to the same identifier (e.g. `a-b` and `a b`).
pub fn sanitize_identifier(raw: &str, sites_key: &str) -> String {
    let mut stripped = raw.to_string();
    for delimiter in DELIMITERS {
        stripped = stripped.replace(delimiter, "");
    }

    let stripped = strip_sites_prefix(&stripped, sites_key);
    stripped.replace(&SEPARATORS[..], "_")
}

fn strip_sites_prefix<'a>(path: &'a str, sites_key: &str) -> &'a str {
    let unrooted = path.strip_prefix('.').unwrap_or(path);
    if unrooted == sites_key {
        return "";
    }

    match unrooted.strip_prefix(sites_key).and_then(|rest| rest.strip_prefix('.')) {
        Some(rest) => rest,
        None => path,
    }
}

pub fn placeholder(identifier: &str) -> String {
    format!("{{{{{}}}}}", identifier)
}

/// Returns the identifier if `value` is exactly one placeholder token.
pub fn placeholder_identifier(value: &str) -> Option<&str> {
    let inner = value.strip_prefix("{{")?.strip_suffix("}}")?.trim();
    if inner.is_empty() || inner.contains("{{") || inner.contains("}}") {
        return None;
    }
    Some(inner)
}
