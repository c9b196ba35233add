//! Front-matter extraction for annotated content files.
//!
//! The header is YAML between `---` delimiters; it is parsed with
//! serde_yaml and converted to `serde_json::Value` so downstream handling
//! is uniform regardless of which category produced the file.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// A content file split into its metadata header and prose body.
#[derive(Debug, Clone, Default)]
pub struct RawDocument {
    pub meta: BTreeMap<String, Value>,
    pub body: String,
}

/// The header opened with `---` but could not be parsed as a YAML mapping.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct ParseError {
    pub reason: String,
}

/// Split a content file into front-matter fields and body.
///
/// A file without an opening `---` line is not an error: it has an empty
/// metadata bag and the whole input as body. A header that opens but does
/// not parse as a YAML mapping is a `ParseError`.
pub fn split_document(input: &str) -> Result<RawDocument, ParseError> {
    let stripped = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = stripped.lines();
    let opens = matches!(lines.next(), Some(first) if first.trim_end() == "---");
    if !opens {
        return Ok(RawDocument {
            meta: BTreeMap::new(),
            body: stripped.to_string(),
        });
    }

    let mut yaml_lines: Vec<&str> = Vec::new();
    let mut body_lines: Vec<&str> = Vec::new();
    let mut closed = false;
    for line in lines {
        if closed {
            body_lines.push(line);
            continue;
        }
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            closed = true;
            continue;
        }
        yaml_lines.push(line);
    }
    if !closed {
        return Err(ParseError {
            reason: "unterminated front-matter block".to_string(),
        });
    }

    let body = body_lines.join("\n");
    let raw_yaml = yaml_lines.join("\n");
    if raw_yaml.trim().is_empty() {
        return Ok(RawDocument {
            meta: BTreeMap::new(),
            body,
        });
    }

    let meta = parse_yaml_to_json_map(&raw_yaml)?;
    Ok(RawDocument { meta, body })
}

fn parse_yaml_to_json_map(yaml: &str) -> Result<BTreeMap<String, Value>, ParseError> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| ParseError {
        reason: e.to_string(),
    })?;
    let json_value: Value = serde_json::to_value(yaml_value).map_err(|e| ParseError {
        reason: e.to_string(),
    })?;
    match json_value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(ParseError {
            reason: format!("expected a mapping, got {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header() {
        let input = "---\ntitle: Two Sum\ndifficulty: Easy\n---\n# Two Sum\nBody";
        let doc = split_document(input).unwrap();
        assert_eq!(doc.meta["title"], Value::String("Two Sum".into()));
        assert_eq!(doc.meta["difficulty"], Value::String("Easy".into()));
        assert_eq!(doc.body, "# Two Sum\nBody");
    }

    #[test]
    fn header_with_lists() {
        let input = "---\ntopics:\n  - array\n  - hash-table\n---\nbody";
        let doc = split_document(input).unwrap();
        let topics = doc.meta["topics"].as_array().unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0], Value::String("array".into()));
    }

    #[test]
    fn no_header_is_all_body() {
        let doc = split_document("# Title\nBody").unwrap();
        assert!(doc.meta.is_empty());
        assert_eq!(doc.body, "# Title\nBody");
    }

    #[test]
    fn bom_is_tolerated() {
        let doc = split_document("\u{feff}---\ntitle: X\n---\n").unwrap();
        assert_eq!(doc.meta["title"], Value::String("X".into()));
    }

    #[test]
    fn unterminated_header_is_rejected() {
        assert!(split_document("---\ntitle: X\nno closing fence").is_err());
    }

    #[test]
    fn scalar_header_is_rejected() {
        assert!(split_document("---\njust a string\n---\n").is_err());
    }
}
