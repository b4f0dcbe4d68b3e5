//! The dynamic configuration tree and its path primitives.
//!
//! A [`Config`] is a nested mapping of string keys to [`toml::Value`] nodes.
//! All higher-level operations (typed accessors, validation, overrides) are
//! built on the two primitives here: [`Config::get`] and [`Config::set`].

use toml::{Table, Value};

/// A dynamically-typed configuration tree.
///
/// The root is always a table; nested nodes may be scalars, arrays, or
/// further tables, addressed by paths of string keys. A `Config` owns its
/// entire subtree: `clone()` deep-copies, so a write into one instance is
/// never observable from another.
///
/// Not safe for concurrent mutation; callers needing shared access must
/// provide their own exclusion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub(crate) root: Table,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the root table.
    pub fn root(&self) -> &Table {
        &self.root
    }

    /// Walks `path` one segment at a time and returns the node at the end.
    ///
    /// At every non-final segment the current node must be a table; if the
    /// key is missing or holds a non-table value, the result is `None`.
    /// Absence is a first-class outcome here, never an error. An empty path
    /// returns `None`.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (last, intermediate) = path.split_last()?;

        let mut current = &self.root;
        for segment in intermediate {
            current = current.get(*segment)?.as_table()?;
        }

        current.get(*last)
    }

    /// Looks up a dotted path, e.g. `"service.env.port"`.
    ///
    /// Splits on `.` and delegates to [`get`](Self::get). Segments are not
    /// escaped, so a key containing a literal `.` is not addressable
    /// through this form.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let segments: Vec<&str> = path.split('.').collect();
        self.get(&segments)
    }

    /// Writes `value` at `path`, creating intermediate tables as needed.
    ///
    /// Intermediate segments descend into existing tables; any non-table
    /// value in the way (scalar, array, missing key) is destructively
    /// replaced by a fresh empty table. This auto-vivification is
    /// intentional last-writer-wins behavior, and a footgun: writing
    /// through `a.b` when `a.b` holds a scalar discards that scalar. The
    /// final key is overwritten unconditionally.
    ///
    /// An empty path is a no-op: there is no final key to assign.
    pub fn set(&mut self, path: &[&str], value: Value) {
        let Some((last, intermediate)) = path.split_last() else {
            return;
        };

        let mut current = &mut self.root;
        for segment in intermediate {
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Table(Table::new()));
            if !slot.is_table() {
                *slot = Value::Table(Table::new());
            }
            current = slot.as_table_mut().expect("slot was just made a table");
        }

        current.insert(last.to_string(), value);
    }

    /// Writes `value` at a dotted path, e.g. `"service.env.port"`.
    pub fn set_path(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        self.set(&segments, value);
    }
}
