use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::render::{parse_color, ColorSequence};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
    /// Use colored output by default
    pub color: bool,
    /// Color names cycled through per depth level
    pub colors: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            color: true,
            colors: vec![
                "white".to_string(),
                "purple".to_string(),
                "yellow".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location if one exists, falling back to built-in defaults.
    ///
    /// An explicit path that cannot be read or parsed is an error; a
    /// missing default-location file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Default config file location: `<config dir>/treeline/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("treeline").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Fail on bad color names at load time rather than mid-render
        self.display.color_sequence().map(|_| ())
    }
}

impl DisplayConfig {
    /// Resolve the configured color names into a cycle of terminal colors.
    pub fn color_sequence(&self) -> Result<ColorSequence, ConfigError> {
        let mut colors = Vec::with_capacity(self.colors.len());
        for name in &self.colors {
            let color = parse_color(name)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown color '{}'", name)))?;
            colors.push(color);
        }
        ColorSequence::new(colors)
            .ok_or_else(|| ConfigError::Invalid("colors must not be empty".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(!config.display.show_hidden);
        assert!(config.display.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("colors"));
    }

    #[test]
    fn default_colors_resolve() {
        let seq = DisplayConfig::default().color_sequence().unwrap();
        assert_eq!(seq.color_for_depth(1), Color::Magenta);
        assert_eq!(seq.color_for_depth(2), Color::Yellow);
        assert_eq!(seq.color_for_depth(3), Color::White);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [display]
            show_hidden = true
            "#,
        )
        .unwrap();

        assert!(config.display.show_hidden);
        assert!(config.display.color);
        assert_eq!(config.display.colors.len(), 3);
    }

    #[test]
    fn unknown_color_is_invalid() {
        let config = DisplayConfig {
            colors: vec!["chartreuse".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.color_sequence(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn empty_colors_are_invalid() {
        let config = DisplayConfig {
            colors: vec![],
            ..Default::default()
        };
        assert!(matches!(
            config.color_sequence(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ncolor = false").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.display.color);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/treeline.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn load_malformed_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn load_bad_color_name_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ncolors = [\"mauve\"]").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
