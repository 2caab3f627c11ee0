//! Manifest text: the newline-delimited child-name format behind listings.

use std::cmp::Ordering;

/// Render a generated manifest for a directory resource.
///
/// Names are sorted case-insensitively, lowercase first on ties (the order a
/// default collator gives plain file names), and each is followed by `\n`.
pub fn render<I, S>(names: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort_by(|a, b| collation_order(a, b));

    let mut manifest = Vec::new();
    for name in names {
        manifest.extend_from_slice(name.as_bytes());
        manifest.push(b'\n');
    }
    manifest
}

fn collation_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// Split manifest text into lines.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. A final terminator does
/// not produce a trailing empty entry, but blank lines in between are kept as
/// empty strings.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c| c == '\n' || c == '\r') {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}
