//! Tunable sampling constants for shape resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sampling parameters used by the shape resolver.
///
/// All fields default individually, so a config file may set only the
/// values it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Maximum boundary vertices sampled per country in the vertex pass.
    pub samples_per_country: usize,
    /// Points per side of the grid laid over a circle's bounding square.
    pub circle_grid_size: usize,
    /// Points per side of the grid laid over a polygon's bounding box.
    pub polygon_grid_size: usize,
    /// Equirectangular conversion factor for the circle grid.
    pub km_per_degree: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            samples_per_country: 30,
            circle_grid_size: 20,
            polygon_grid_size: 25,
            km_per_degree: 111.0,
        }
    }
}

impl DetectionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DetectionConfig =
            toml::from_str(content).context("Failed to parse detection config")?;
        if !(config.km_per_degree.is_finite() && config.km_per_degree > 0.0) {
            anyhow::bail!(
                "km_per_degree must be positive, got {}",
                config.km_per_degree
            );
        }
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read detection config file")?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.samples_per_country, 30);
        assert_eq!(config.circle_grid_size, 20);
        assert_eq!(config.polygon_grid_size, 25);
        assert_eq!(config.km_per_degree, 111.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DetectionConfig::from_toml_str("polygon_grid_size = 40\n").unwrap();
        assert_eq!(config.polygon_grid_size, 40);
        assert_eq!(config.circle_grid_size, 20);
        assert_eq!(config.samples_per_country, 30);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = DetectionConfig::from_toml_str("").unwrap();
        assert_eq!(config, DetectionConfig::default());
    }

    #[test]
    fn test_rejects_bad_km_per_degree() {
        assert!(DetectionConfig::from_toml_str("km_per_degree = 0.0\n").is_err());
        assert!(DetectionConfig::from_toml_str("km_per_degree = -5.0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(DetectionConfig::from_toml_str("circle_grid_size = \"many\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "samples_per_country = 12").unwrap();
        writeln!(file, "circle_grid_size = 8").unwrap();

        let config = DetectionConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.samples_per_country, 12);
        assert_eq!(config.circle_grid_size, 8);
        assert_eq!(config.km_per_degree, 111.0);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(DetectionConfig::load_from_file("/nonexistent/detection.toml").is_err());
    }
}
