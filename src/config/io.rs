//! The serialization boundary: TOML decode/encode, file loading, CLI
//! overrides, and typed deserialization of the whole tree.

use std::fmt;
use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use toml::Value;

use super::{Config, ConfigError};

impl Config {
    /// Decodes a configuration from a TOML document.
    ///
    /// Parse errors from the TOML layer are passed through verbatim.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let root = toml::from_str(document)?;
        Ok(Self { root })
    }

    /// Decodes a configuration from a byte stream of TOML.
    pub fn read(mut reader: impl Read) -> Result<Self, ConfigError> {
        let mut document = String::new();
        reader.read_to_string(&mut document)?;
        Self::from_toml(&document)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// A missing file is [`ConfigError::FileNotFound`]; use
    /// [`from_file_optional`](Self::from_file_optional) for files that may
    /// legitimately be absent.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::from_file_optional(&path)? {
            Some(config) => Ok(config),
            None => Err(ConfigError::FileNotFound(path.as_ref().to_path_buf())),
        }
    }

    /// Loads a configuration from a TOML file, or `None` if it doesn't exist.
    pub fn from_file_optional(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(document) => Self::from_toml(&document).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Encodes the tree as a TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(&self.root)?)
    }

    /// Encodes the tree as TOML into a byte stream.
    pub fn write(&self, mut writer: impl Write) -> Result<(), ConfigError> {
        writer.write_all(self.to_toml()?.as_bytes())?;
        Ok(())
    }

    /// Returns a readable stream over the TOML encoding, for piping the
    /// configuration elsewhere.
    pub fn reader(&self) -> Result<Cursor<Vec<u8>>, ConfigError> {
        Ok(Cursor::new(self.to_toml()?.into_bytes()))
    }

    /// Applies a `dotted.path:value` override, as supplied on a command
    /// line (`-k service.port:8080`).
    ///
    /// The value is stored as a string; interpreting it further is the
    /// caller's concern. Everything after the first `:` belongs to the
    /// value, so values may themselves contain colons.
    pub fn apply_override(&mut self, spec: &str) -> Result<(), ConfigError> {
        match spec.split_once(':') {
            Some((path, value)) if !path.is_empty() => {
                self.set_path(path, Value::String(value.to_string()));
                Ok(())
            }
            _ => Err(ConfigError::InvalidOverride(spec.to_string())),
        }
    }

    /// Deserializes the whole tree into a typed structure.
    ///
    /// Useful once [`validate`](Self::validate) has passed and the shape
    /// is known; typed access without a schema stays available through the
    /// getters.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        Ok(Value::Table(self.root.clone()).try_into()?)
    }
}

/// Pretty-printed TOML rendering of the whole tree, for diagnostics.
///
/// Never fails: if the tree cannot be encoded, a fixed error string is
/// rendered instead of propagating the failure.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match toml::to_string_pretty(&self.root) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => f.write_str("error rendering config as TOML"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
        name = "api"
        replicas = 3
        [service.env]
        host = "localhost"
        port = 8080
        tags = ["web", "prod"]
    "#;

    #[test]
    fn test_round_trip() {
        let decoded = Config::from_toml(SAMPLE).unwrap();
        let encoded = decoded.to_toml().unwrap();
        let round_tripped = Config::from_toml(&encoded).unwrap();
        assert_eq!(round_tripped, decoded);
    }

    #[test]
    fn test_read_from_stream() {
        let config = Config::read(SAMPLE.as_bytes()).unwrap();
        assert_eq!(config.get_int("service.env.port").unwrap(), 8080);
    }

    #[test]
    fn test_parse_error_passes_through() {
        let result = Config::from_toml("not [ valid toml =");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_write_then_read_stream() {
        let config = Config::from_toml(SAMPLE).unwrap();
        let mut buffer = Vec::new();
        config.write(&mut buffer).unwrap();
        let reloaded = Config::read(buffer.as_slice()).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_reader_view() {
        let config = Config::from_toml("key = \"value\"").unwrap();
        let mut rendered = String::new();
        config
            .reader()
            .unwrap()
            .read_to_string(&mut rendered)
            .unwrap();
        assert!(rendered.contains("key = \"value\""));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.get_int("port").unwrap(), 8080);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/deploy.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

        let optional = Config::from_file_optional("/nonexistent/deploy.toml").unwrap();
        assert!(optional.is_none());
    }

    #[test]
    fn test_apply_override() {
        let mut config = Config::from_toml(SAMPLE).unwrap();
        config.apply_override("service.env.port:9090").unwrap();

        // Overrides land as strings; typing them is the caller's job.
        assert_eq!(config.get_str("service.env.port").unwrap(), "9090");
    }

    #[test]
    fn test_apply_override_value_may_contain_colons() {
        let mut config = Config::new();
        config
            .apply_override("service.url:http://localhost:8080")
            .unwrap();
        assert_eq!(
            config.get_str("service.url").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_apply_override_rejects_malformed_spec() {
        let mut config = Config::new();
        assert!(matches!(
            config.apply_override("no-colon-here"),
            Err(ConfigError::InvalidOverride(_))
        ));
        assert!(matches!(
            config.apply_override(":value-without-path"),
            Err(ConfigError::InvalidOverride(_))
        ));
    }

    #[test]
    fn test_display_renders_tree() {
        let config = Config::from_toml(SAMPLE).unwrap();
        let rendered = config.to_string();
        assert!(rendered.contains("[service.env]"));
        assert!(rendered.contains("port = 8080"));
    }

    #[test]
    fn test_deserialize_into_typed_struct() {
        use serde::Deserialize;

        #[derive(Debug, Deserialize)]
        struct Deployment {
            name: String,
            replicas: i64,
        }

        let config = Config::from_toml(SAMPLE).unwrap();
        let deployment: Deployment = config.deserialize().unwrap();
        assert_eq!(deployment.name, "api");
        assert_eq!(deployment.replicas, 3);
    }

    #[test]
    fn test_deserialize_shape_mismatch_passes_toml_error_through() {
        use serde::Deserialize;

        #[derive(Debug, Deserialize)]
        struct Wrong {
            #[allow(dead_code)]
            missing_field: String,
        }

        let config = Config::from_toml("name = \"api\"").unwrap();
        let result: Result<Wrong, _> = config.deserialize();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
