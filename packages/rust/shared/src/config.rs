//! Application configuration for acrofilter.
//!
//! User config lives at `~/.acrofilter/acrofilter.toml`.
//! CLI arguments override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AcrofilterError, Result};
use crate::types::DEFAULT_MAX_ACRONYM_LENGTH;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "acrofilter.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".acrofilter";

// ---------------------------------------------------------------------------
// Config structs (matching acrofilter.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token extraction settings.
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Glossary document settings.
    #[serde(default)]
    pub glossary: GlossaryConfig,
}

/// `[extraction]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Longest token still considered an acronym.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

fn default_max_length() -> usize {
    DEFAULT_MAX_ACRONYM_LENGTH
}

/// `[glossary]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryConfig {
    /// Write `output_glossary.docx` when a table is supplied.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Run config (runtime, merged from config + CLI arguments)
// ---------------------------------------------------------------------------

/// Everything one run needs, built once at startup and passed to each stage.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source `.docx` document.
    pub document: PathBuf,
    /// Existing acronym table to import, if any.
    pub table: Option<PathBuf>,
    /// Directory receiving `output_dict.csv` and `output_glossary.docx`.
    pub output_dir: PathBuf,
    /// Longest token still considered an acronym.
    pub max_length: usize,
    /// Whether to write the glossary document when a table is supplied.
    pub generate_glossary: bool,
}

impl RunConfig {
    /// Merge CLI arguments with the loaded application config.
    pub fn new(
        document: impl Into<PathBuf>,
        table: Option<PathBuf>,
        output_dir: impl Into<PathBuf>,
        config: &AppConfig,
    ) -> Self {
        Self {
            document: document.into(),
            table,
            output_dir: output_dir.into(),
            max_length: config.extraction.max_length,
            generate_glossary: config.glossary.enabled,
        }
    }

    /// Reject settings that would make every run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(AcrofilterError::validation(
                "extraction.max_length must be at least 1",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.acrofilter/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AcrofilterError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.acrofilter/acrofilter.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "no home directory, using default config");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AcrofilterError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        AcrofilterError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| AcrofilterError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| AcrofilterError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| AcrofilterError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("max_length = 7"));
        assert!(toml_str.contains("enabled = true"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[glossary]
enabled = false
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert!(!config.glossary.enabled);
        assert_eq!(config.extraction.max_length, DEFAULT_MAX_ACRONYM_LENGTH);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[extraction]\nmax_length = 10\n").expect("write config");

        let config = load_config_from(&path).expect("load");
        assert_eq!(config.extraction.max_length, 10);
        assert!(config.glossary.enabled);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[extraction\nmax_length = ").expect("write config");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, AcrofilterError::Config { .. }));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/acrofilter.toml")).unwrap_err();
        assert!(matches!(err, AcrofilterError::Io { .. }));
    }

    #[test]
    fn run_config_from_app_config() {
        let app = AppConfig::default();
        let run = RunConfig::new("srr.docx", Some("dict.csv".into()), ".", &app);
        assert_eq!(run.max_length, 7);
        assert!(run.generate_glossary);
        assert_eq!(run.table.as_deref(), Some(Path::new("dict.csv")));
        assert!(run.validate().is_ok());
    }

    #[test]
    fn zero_max_length_rejected() {
        let mut app = AppConfig::default();
        app.extraction.max_length = 0;
        let run = RunConfig::new("srr.docx", None, ".", &app);
        let err = run.validate().unwrap_err();
        assert!(err.to_string().contains("max_length"));
    }
}
