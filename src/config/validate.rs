//! Required-field validation.
//!
//! Configuration templates mark fields that must be supplied before use
//! with the [`REQUIRED`] sentinel string. [`Config::validate`] scans the
//! whole tree and reports every unresolved marker.

use toml::Value;

use super::{Config, ConfigError};

/// Sentinel string marking a leaf as "must be filled in before use".
///
/// This is an ordinary string value, distinguishable only by exact
/// equality, so a real configuration value that happens to equal it will
/// be reported as unresolved. The bracketed form makes an accidental
/// collision unlikely but not impossible.
pub const REQUIRED: &str = "[REQUIRED]";

/// Whether `value` is an unresolved required marker.
///
/// All sentinel checks go through here so the marker representation can
/// change without touching call sites.
pub fn is_required_marker(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == REQUIRED)
}

impl Config {
    /// Scans the whole tree for unresolved [`REQUIRED`] markers.
    ///
    /// Returns one [`ConfigError::Required`] per marker found, each
    /// carrying the dotted path of the offending leaf; an empty vector
    /// means the configuration is complete. The scan never stops at the
    /// first failure, and sibling order is unspecified.
    ///
    /// Array elements are not descended into: a marker inside an array is
    /// not reported. This mirrors how templates are written (markers sit
    /// at leaf keys, not inside lists) and is a known gap.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Explicit work list rather than call recursion: nesting depth is
        // unbounded and must not be limited by the call stack.
        let mut pending: Vec<(String, &Value)> = self
            .root
            .iter()
            .map(|(key, value)| (key.clone(), value))
            .collect();

        while let Some((path, node)) = pending.pop() {
            match node {
                Value::Table(table) => {
                    for (key, child) in table {
                        pending.push((format!("{path}.{key}"), child));
                    }
                }
                value if is_required_marker(value) => {
                    errors.push(ConfigError::Required { path });
                }
                _ => {}
            }
        }

        errors
    }
}
