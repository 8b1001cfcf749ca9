//! Immutable snapshot of the process environment.
//!
//! The resolver is a pure function of one of these snapshots, so tests can
//! build synthetic environments without mutating the real process state.

use std::collections::BTreeMap;
use std::env;

/// Ordered map of environment variable name → value, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    ///
    /// Entries with non-UTF-8 names or values are skipped; the variables the
    /// resolver cares about are all plain ASCII.
    pub fn capture() -> Self {
        Self {
            vars: env::vars_os()
                .filter_map(|(name, value)| {
                    Some((name.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
        }
    }

    /// An empty snapshot (no variables set).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from explicit name/value pairs.
    pub fn from_iter<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Truthiness of `name` under the bundler host's coercion rules:
    /// unset and empty string are falsy, every other value is truthy
    /// (including `"0"` and `"false"`).
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Entries whose names start with one of `prefixes`, in name order.
    pub fn visible<'a>(&'a self, prefixes: &[String]) -> Vec<(&'a str, &'a str)> {
        self.vars
            .iter()
            .filter(|(name, _)| prefixes.iter().any(|prefix| name.starts_with(prefix)))
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}
