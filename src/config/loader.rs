//! Configuration file loading.

use crate::config::schema::FlavorConfig;
use crate::error::{FlavorError, Result};
use std::fs;
use std::path::Path;

/// Load a config file and parse it into [`FlavorConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<FlavorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlavorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FlavorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`FlavorConfig`].
///
/// An empty document yields the default (empty) config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<FlavorConfig> {
    if content.trim().is_empty() {
        return Ok(FlavorConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| FlavorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config at `path`, or the empty config when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FlavorConfig> {
    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_config_file(path)
        }
        None => Ok(FlavorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, FlavorError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "signatures: {not: [a list").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, FlavorError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn invalid_element_path_is_parse_error() {
        let yaml = r#"
signatures:
  - flavor: mysql
    all_needed: true
    elements: [/usr/sbin/mysqld]
"#;
        let err = parse_config(yaml, &PathBuf::from("c.yml")).unwrap_err();
        assert!(matches!(err, FlavorError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_file_is_default_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "\n").unwrap();

        assert!(load_config_file(&path).unwrap().is_empty());
    }

    #[test]
    fn load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            r#"
flavors:
  percona:
    description: Percona Server for MySQL
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(
            config.flavors["percona"].description.as_deref(),
            Some("Percona Server for MySQL")
        );
    }

    #[test]
    fn no_path_is_empty_config() {
        assert!(load_config(None).unwrap().is_empty());
    }
}
