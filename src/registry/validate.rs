//! Advisory validation of user-supplied script commands.
//!
//! The only hard rule is that a command must not be empty. Everything else
//! is advisory: commands matching known-dangerous shell patterns get a
//! warning that is shown to the user but never blocks saving or running.

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns that might indicate issues in scripts.
static SUSPICIOUS_PATTERNS: Lazy<[(Regex, &'static str); 3]> = Lazy::new(|| {
    [
        (
            Regex::new(r";\s*rm\s+-rf\s+/").expect("valid pattern"),
            "dangerous rm -rf /",
        ),
        (
            Regex::new(r">\s*/dev/sd[a-z]").expect("valid pattern"),
            "writes to block device",
        ),
        (
            Regex::new(r"\$\([^)]*\).*\$\([^)]*\)").expect("valid pattern"),
            "nested command substitution (verify intent)",
        ),
    ]
});

/// Result of validating a script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCheck {
    /// Whether the command may be saved at all.
    pub valid: bool,
    /// Advisory warnings; for an invalid command the first entry is the
    /// rejection message.
    pub warnings: Vec<String>,
}

/// Validate a script command.
///
/// # Examples
///
/// ```
/// use rs_runner::registry::validate_script;
///
/// assert!(!validate_script("   ").valid);
/// assert!(validate_script("eslint .").valid);
/// ```
pub fn validate_script(command: &str) -> ScriptCheck {
    if command.trim().is_empty() {
        return ScriptCheck {
            valid: false,
            warnings: vec!["Script command cannot be empty".to_string()],
        };
    }

    let warnings = SUSPICIOUS_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(command))
        .map(|(_, message)| (*message).to_string())
        .collect();

    ScriptCheck {
        valid: true,
        warnings,
    }
}
