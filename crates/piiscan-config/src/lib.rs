use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-level config file
pub const PROJECT_FILE: &str = "piiscan.toml";

/// Configuration for the piiscan driver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Column holding the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Candidate columns holding the JSON blob, first present wins
    #[serde(default = "default_data_columns")]
    pub data_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report written by `scan` when no output path is given
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            data_columns: default_data_columns(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_id_column() -> String {
    "record_id".to_string()
}

fn default_data_columns() -> Vec<String> {
    vec!["Data_json".to_string(), "data_json".to_string()]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("redacted_output_candidate_full_name.csv")
}

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    Global(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::Global(p) => p,
        }
    }
}

impl Config {
    /// Resolve config: explicit path, then nearest piiscan.toml, then global
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load_from(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        let current = std::env::current_dir()?;
        if let Some(path) = Self::find_project_file_from(&current) {
            let config = Self::load_from(&path)?;
            return Ok((config, ConfigSource::Project(path)));
        }

        let config = Self::load()?;
        Ok((config, ConfigSource::Global(Self::config_path())))
    }

    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save(&path)?;
            tracing::debug!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Write config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get global config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "piiscan", "piiscan") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.piiscan/config.toml")
        }
    }

    /// Find piiscan.toml by walking up from given directory
    pub fn find_project_file_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_FILE);
            if candidate.exists() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.id_column, "record_id");
        assert_eq!(config.input.data_columns, vec!["Data_json", "data_json"]);
        assert_eq!(
            config.output.path,
            PathBuf::from("redacted_output_candidate_full_name.csv")
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[input]
data_columns = ["payload"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input.id_column, "record_id");
        assert_eq!(config.input.data_columns, vec!["payload"]);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_find_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = Config::default();
        config.output.path = PathBuf::from("report.csv");
        config.save(&dir.path().join(PROJECT_FILE)).unwrap();

        let found = Config::find_project_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(PROJECT_FILE));

        let (loaded, source) = Config::resolve(Some(&found)).unwrap();
        assert_eq!(loaded.output.path, PathBuf::from("report.csv"));
        assert_eq!(source, ConfigSource::Explicit(found));
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        std::fs::write(&path, "input = 3").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
