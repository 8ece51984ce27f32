//! Settings file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::schema::Settings;
use crate::error::{FlowError, Result};

/// Load a settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlowError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FlowError::Io(e)
        }
    })?;

    debug!("Loaded settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the default settings.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| FlowError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use tempfile::TempDir;

    #[test]
    fn loads_all_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stepflow.yml");
        fs::write(&path, "output: verbose\ncolor: false\ninteractive: false\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.output, Some(OutputMode::Verbose));
        assert_eq!(settings.color, Some(false));
        assert_eq!(settings.interactive, Some(false));
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, FlowError::ConfigNotFound { path: p } if p == path));
    }

    #[test]
    fn empty_file_is_default() {
        let settings = parse_settings("  \n", Path::new("s.yml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_settings("output: [unclosed", Path::new("s.yml")).unwrap_err();
        assert!(matches!(err, FlowError::ConfigParseError { .. }));
    }

    #[test]
    fn unknown_output_mode_is_parse_error() {
        let err = parse_settings("output: loud", Path::new("s.yml")).unwrap_err();
        assert!(matches!(err, FlowError::ConfigParseError { .. }));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = parse_settings("colour: true", Path::new("s.yml")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("s.yml"), "{}", message);
    }
}
