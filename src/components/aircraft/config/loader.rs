use std::path::Path;
use thiserror::Error;

use super::AircraftConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Serialisation format of an aircraft file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Files without an extension are read as YAML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(Self::Yaml),
            Some(ext) => match ext.to_ascii_lowercase().as_str() {
                "yaml" | "yml" => Ok(Self::Yaml),
                "json" => Ok(Self::Json),
                other => Err(ConfigError::UnsupportedFormat(other.to_string())),
            },
        }
    }
}

pub(super) fn parse(contents: &str, format: ConfigFormat) -> Result<AircraftConfig, ConfigError> {
    let config: AircraftConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        ConfigFormat::Json => serde_json::from_str(contents)?,
    };

    if config.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "aircraft name must not be empty".to_string(),
        ));
    }

    Ok(config.validated())
}

pub(super) fn load<P: AsRef<Path>>(path: P) -> Result<AircraftConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    parse(&contents, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("aircraft")).unwrap(), ConfigFormat::Yaml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.toml")),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "name: Glider\nphysics:\n  mass: 300.0\nlift: {{}}\n").unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.name, "Glider");
        assert_eq!(config.physics.mass, 300.0);
        assert!(config.lift.is_some());
        assert!(config.engine.is_none());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"name": "Dart", "engine": {{"max_thrust": 900.0}}}}"#).unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.name, "Dart");
        assert_eq!(config.engine.unwrap().max_thrust, 900.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let result = parse("name: [unterminated", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = parse("name: '  '", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
