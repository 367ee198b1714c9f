//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation against the rule registry in [`validator`]
//!
//! # Example
//!
//! ```
//! use tsc_lint::config::{load_config, validate, RuleLevel};
//! use tsc_lint::lint::RuleRegistry;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".tsc-lint.yml"), "rules:\n  all: error\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config, &RuleRegistry::with_builtins()).unwrap();
//! assert_eq!(config.rule("all").unwrap().level, Some(RuleLevel::Error));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_config, find_project_root, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{LintConfig, RuleLevel, RuleSetting};
pub use validator::{validate, validate_config, ValidationError};
