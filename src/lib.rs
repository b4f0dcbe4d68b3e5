//! Dynamically-typed configuration container for deployment tooling.
//!
//! Configuration arrives as nested TOML tables (service name, environment,
//! setting) and is exposed through dotted-path accessors with explicit
//! narrowing errors. Template files mark fields that must be supplied with
//! the [`REQUIRED`] sentinel; [`Config::validate`] reports every field
//! still unfilled.
//!
//! ```no_run
//! use deploy_config::Config;
//!
//! let mut config = Config::from_file("deploy.toml")?;
//! config.apply_override("service.env.port:8080")?;
//!
//! let missing = config.validate();
//! for err in &missing {
//!     eprintln!("{err}");
//! }
//! # Ok::<(), deploy_config::ConfigError>(())
//! ```

pub mod config;

pub use config::{is_required_marker, Config, ConfigError, REQUIRED};
