//! Best-effort plain-text excerpts from raw markup.
//!
//! This is a summarizer, not a markdown parser: it only has to produce
//! readable plain text for list views and description fallbacks.

pub const DEFAULT_MAX_LEN: usize = 200;

/// Produce a plain-text excerpt of `markup`, at most `max_len` characters
/// plus an ellipsis when truncated. Total: never panics, empty input
/// yields an empty string.
pub fn generate(markup: &str, max_len: usize) -> String {
    let mut pieces: Vec<String> = Vec::new();
    let mut in_fence = false;
    for line in markup.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let no_markers = strip_line_markers(trimmed);
        let resolved = resolve_links(&no_markers);
        let plain: String = resolved
            .chars()
            .filter(|c| !matches!(c, '*' | '_' | '`' | '~' | '#'))
            .collect();
        if !plain.trim().is_empty() {
            pieces.push(plain);
        }
    }
    let collapsed = pieces
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&collapsed, max_len)
}

/// Strip heading, blockquote and list markers from the start of a line.
fn strip_line_markers(line: &str) -> String {
    let mut rest = line;
    loop {
        let before = rest;
        rest = rest
            .trim_start_matches('#')
            .trim_start_matches('>')
            .trim_start();
        if let Some(tail) = rest.strip_prefix("- ") {
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("* ") {
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("+ ") {
            rest = tail;
        } else {
            let digits = rest.chars().take_while(char::is_ascii_digit).count();
            if digits > 0 {
                let after = &rest[digits..];
                if let Some(tail) = after.strip_prefix(". ").or_else(|| after.strip_prefix(") ")) {
                    rest = tail;
                }
            }
        }
        if rest == before {
            return rest.to_string();
        }
    }
}

/// Reduce `![alt](url)` and `[text](url)` to their bare text.
fn resolve_links(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '!' if chars.get(i + 1) == Some(&'[') => match bracket_text(&chars, i + 1) {
                Some((text, next)) => {
                    out.push_str(&text);
                    i = next;
                }
                None => {
                    out.push('!');
                    i += 1;
                }
            },
            '[' => match bracket_text(&chars, i) {
                Some((text, next)) => {
                    out.push_str(&text);
                    i = next;
                }
                None => i += 1,
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Given `chars[open] == '['`, return the bracketed text and the position
/// after the bracket pair and any trailing `(...)` target.
fn bracket_text(chars: &[char], open: usize) -> Option<(String, usize)> {
    let close = (open + 1..chars.len()).find(|&j| chars[j] == ']')?;
    let text: String = chars[open + 1..close].iter().collect();
    let mut next = close + 1;
    if chars.get(next) == Some(&'(') {
        if let Some(end) = (next + 1..chars.len()).find(|&j| chars[j] == ')') {
            next = end + 1;
        }
    }
    Some((text, next))
}

fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut.trim_end())
}
