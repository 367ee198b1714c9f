//! Configuration file discovery and loading.
//!
//! The configuration lives in `.tsc-lint.yml` at the project root. A
//! project without one lints with every rule at its default severity.

use crate::config::schema::LintConfig;
use crate::error::{Result, TscLintError};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".tsc-lint.yml";

/// Find the project config at `<project_root>/.tsc-lint.yml`.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. a `.tsc-lint.yml` file (primary indicator)
/// 2. a `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TscLintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TscLintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LintConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    // An empty file is a valid, empty configuration.
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TscLintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit `config_override` must exist. Otherwise the project config
/// is used when present, and the defaults when it is not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LintConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!(
                "No {} in {}, using defaults",
                CONFIG_FILE_NAME,
                project_root.display()
            );
            Ok(LintConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleLevel;
    use tempfile::TempDir;

    #[test]
    fn find_config_in_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "rules: {}").unwrap();

        assert_eq!(
            find_config(temp.path()),
            Some(temp.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config(temp.path()).is_none());
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let nested = temp.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_falls_back_to_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("packages");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn load_config_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn load_config_reads_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "rules:\n  all: error\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config.rule("all").unwrap().level, Some(RuleLevel::Error));
    }

    #[test]
    fn load_config_override_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.yml");

        let result = load_config(temp.path(), Some(&missing));

        assert!(matches!(result, Err(TscLintError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_override_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "rules:\n  all: error\n").unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "rules:\n  all: off\n").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();

        assert_eq!(config.rule("all").unwrap().level, Some(RuleLevel::Off));
    }

    #[test]
    fn parse_error_includes_path() {
        let result = parse_config("rules: [", Path::new("broken.yml"));
        match result {
            Err(TscLintError::ConfigParseError { path, .. }) => {
                assert_eq!(path, PathBuf::from("broken.yml"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("\n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, LintConfig::default());
    }
}
