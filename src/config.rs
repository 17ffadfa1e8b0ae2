use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::report::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MedianConfiguration {
    /// Cases run when the user enters an empty line
    pub demo_cases: Vec<Vec<f64>>,
    /// Format of the printed reports
    pub output: OutputFormat,
}

impl Default for MedianConfiguration {
    fn default() -> MedianConfiguration {
        MedianConfiguration {
            demo_cases: vec![
                vec![1.0, 3.0, 5.0],
                vec![4.0, 2.0, 1.0, 3.0],
                vec![10.0, 10.0, 10.0, 10.0, 10.0],
                vec![7.5, 2.3, 4.1, 9.8],
            ],
            output: OutputFormat::Text,
        }
    }
}

impl MedianConfiguration {
    pub fn load(conf_path: &Path) -> Result<MedianConfiguration> {
        let config_string = fs::read_to_string(conf_path)
            .with_context(|| format!("could not read {}", conf_path.display()))?;
        let median_config = toml::from_str(&config_string)
            .with_context(|| format!("could not parse {}", conf_path.display()))?;
        Ok(median_config)
    }
}
