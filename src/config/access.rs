//! Typed accessors over the configuration tree.
//!
//! Each getter retrieves the node at a dotted path and narrows it to the
//! requested type. Absence and shape mismatch are distinct failures:
//! a missing path is always [`ConfigError::NotFound`], a present value of
//! the wrong shape is always [`ConfigError::Conversion`].

use toml::{Table, Value};

use super::{Config, ConfigError};

/// The integer narrowing rule: only stored integers qualify.
///
/// There is no coercion from float or string, so `get_int` on a stored
/// `3.0` fails rather than truncating.
fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        _ => None,
    }
}

/// The float narrowing rule: stored floats pass through, stored integers
/// are widened. Strings never coerce.
fn float_value(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

impl Config {
    fn lookup(&self, path: &str) -> Result<&Value, ConfigError> {
        self.get_path(path).ok_or_else(|| ConfigError::NotFound {
            path: path.to_string(),
        })
    }

    /// Returns the string at `path`.
    pub fn get_str(&self, path: &str) -> Result<String, ConfigError> {
        match self.lookup(path)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ConfigError::Conversion {
                path: path.to_string(),
                target: "string",
            }),
        }
    }

    /// Returns the boolean at `path`.
    pub fn get_bool(&self, path: &str) -> Result<bool, ConfigError> {
        match self.lookup(path)? {
            Value::Boolean(b) => Ok(*b),
            _ => Err(ConfigError::Conversion {
                path: path.to_string(),
                target: "bool",
            }),
        }
    }

    /// Returns the integer at `path`. Floats do not coerce.
    pub fn get_int(&self, path: &str) -> Result<i64, ConfigError> {
        let value = self.lookup(path)?;
        int_value(value).ok_or_else(|| ConfigError::Conversion {
            path: path.to_string(),
            target: "integer",
        })
    }

    /// Returns the float at `path`. Stored integers are widened to `f64`.
    pub fn get_float(&self, path: &str) -> Result<f64, ConfigError> {
        let value = self.lookup(path)?;
        float_value(value).ok_or_else(|| ConfigError::Conversion {
            path: path.to_string(),
            target: "float",
        })
    }

    /// Returns the table at `path` as a borrow into the tree.
    ///
    /// No defensive copy is made; clone the result if you need an isolated
    /// snapshot.
    pub fn get_table(&self, path: &str) -> Result<&Table, ConfigError> {
        match self.lookup(path)? {
            Value::Table(t) => Ok(t),
            _ => Err(ConfigError::Conversion {
                path: path.to_string(),
                target: "table",
            }),
        }
    }

    /// Returns the array at `path` as a borrow into the tree.
    pub fn get_array(&self, path: &str) -> Result<&[Value], ConfigError> {
        match self.lookup(path)? {
            Value::Array(a) => Ok(a),
            _ => Err(ConfigError::Conversion {
                path: path.to_string(),
                target: "array",
            }),
        }
    }

    /// Returns the array at `path` with every element narrowed to a string.
    ///
    /// All-or-nothing: the first non-string element fails the whole call,
    /// even if earlier elements were valid strings.
    pub fn get_string_array(&self, path: &str) -> Result<Vec<String>, ConfigError> {
        let array = self.get_array(path)?;
        let mut strings = Vec::with_capacity(array.len());
        for element in array {
            match element {
                Value::String(s) => strings.push(s.clone()),
                _ => {
                    return Err(ConfigError::Conversion {
                        path: path.to_string(),
                        target: "string array",
                    })
                }
            }
        }
        Ok(strings)
    }
}
