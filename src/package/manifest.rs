//! Script reading from package.json.
//!
//! The manifest is read fresh from the working directory on every query and
//! never cached. A missing file or an unusable `scripts` field yields an
//! empty mapping; a file that exists but is not valid JSON is the one hard
//! failure in the system and is propagated to the top level.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, RsrError};

/// Read the `scripts` mapping from `<dir>/package.json`.
///
/// A missing file yields an empty mapping. A `scripts` field that is absent
/// or not a JSON object (array, primitive, null) also yields an empty
/// mapping; entries whose values are not strings are skipped.
///
/// # Errors
///
/// Returns [`RsrError::ManifestParse`] when the file exists but is not valid
/// JSON.
pub fn manifest_scripts(dir: &Path) -> Result<BTreeMap<String, String>> {
    let path = dir.join("package.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(RsrError::IoWithContext {
                operation: "read".to_string(),
                path,
                source,
            })
        }
    };

    manifest_scripts_from_json(&content).map_err(|e| RsrError::ManifestParse {
        path,
        message: format_json_error(&content, &e),
    })
}

/// Extract the scripts mapping from raw package.json content.
///
/// # Errors
///
/// Returns the underlying serde error when the content is not valid JSON.
///
/// # Examples
///
/// ```
/// use rs_runner::package::manifest_scripts_from_json;
///
/// let json = r#"{"scripts": {"dev": "vite", "build": "vite build"}}"#;
/// let scripts = manifest_scripts_from_json(json).unwrap();
/// assert_eq!(scripts.len(), 2);
/// ```
pub fn manifest_scripts_from_json(
    content: &str,
) -> std::result::Result<BTreeMap<String, String>, serde_json::Error> {
    let json: serde_json::Value = serde_json::from_str(content)?;

    let mut scripts = BTreeMap::new();
    if let Some(map) = json.get("scripts").and_then(|s| s.as_object()) {
        for (name, command) in map {
            if let Some(command) = command.as_str() {
                scripts.insert(name.clone(), command.to_string());
            }
        }
    }

    Ok(scripts)
}

/// Format a JSON parsing error with the offending line for context.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}
