//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::pipeline::{PipelineConfig, ReportPipeline};

use super::types::ReportConfig;

/// Loads and provides access to report configuration.
///
/// # File Format
///
/// ```text
/// report:
///   format: csv                 # csv | html
///   sort_direction: ascending   # ascending | descending
///   redaction_mode: document    # document | field
/// html:
///   wrap_document: false
///   title: Employee Report
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_reporter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/report.yaml")?;
/// let pipeline = loader.pipeline();
/// # Ok::<(), salary_reporter::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Returns [`ReportError::ConfigNotFound`] if the file cannot be read and
    /// [`ReportError::ConfigParseError`] if it is not valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| ReportError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded report configuration");
        Ok(Self { config })
    }

    fn parse(content: &str) -> Result<ReportConfig, String> {
        // serde_yaml reads an empty document as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(ReportConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Returns the pipeline settings.
    pub fn pipeline_config(&self) -> PipelineConfig {
        self.config.pipeline_config()
    }

    /// Builds a pipeline bound to the configured settings.
    pub fn pipeline(&self) -> ReportPipeline {
        ReportPipeline::new(self.pipeline_config())
    }
}
