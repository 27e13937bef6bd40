//! Configuration loading.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "queue_plot.toml";

/// Display and input settings. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlotConfig {
    /// Log file read at startup.
    pub log_path: PathBuf,
    /// Treat the log as raw kernel console output and keep only `::=` sample lines.
    pub console_capture: bool,
    /// Native window title.
    pub window_title: String,
    /// Initial visibility of the per-process summary panel.
    pub show_summary: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("logs"),
            console_capture: false,
            window_title: "MLFQ queue levels".to_string(),
            show_summary: true,
        }
    }
}

impl PlotConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be read or
    /// parsed is an error.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            log::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(config_path).with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("mlfq-queue-plot-no-such-config.toml");
        let config = PlotConfig::load(&path).unwrap();
        assert_eq!(config, PlotConfig::default());
        assert_eq!(config.log_path, PathBuf::from("logs"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PlotConfig = toml::from_str("log-path = \"run/console.txt\"\nconsole-capture = true\n").unwrap();
        assert_eq!(config.log_path, PathBuf::from("run/console.txt"));
        assert!(config.console_capture);
        assert_eq!(config.window_title, "MLFQ queue levels");
        assert!(config.show_summary);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let path = std::env::temp_dir().join(format!("mlfq-queue-plot-bad-config-{}.toml", std::process::id()));
        std::fs::write(&path, "show-summary = \"maybe\"\n").unwrap();
        let err = PlotConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        std::fs::remove_file(path).ok();
    }
}
