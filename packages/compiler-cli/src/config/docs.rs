use crate::ngtsc::docs::ExtractorOptions;
use crate::ngtsc::logging::LogLevel;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ng-docs.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocsConfig {
    /// Glob patterns of sources to document.
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// File the JSON entries are written to; stdout when absent.
    pub output: Option<PathBuf>,
    pub log_level: LogLevel,
    pub pretty: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            include: vec!["**/*.ts".to_string()],
            exclude: vec!["**/node_modules/**".to_string(), "**/*.spec.ts".to_string()],
            output: None,
            log_level: LogLevel::default(),
            pretty: false,
        }
    }
}

impl DocsConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: DocsConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Loads `ng-docs.json` from `dir` when present, defaults otherwise.
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn extractor_options(&self) -> ExtractorOptions {
        ExtractorOptions {
            include_patterns: self.include.clone(),
            exclude_patterns: self.exclude.clone(),
        }
    }
}
