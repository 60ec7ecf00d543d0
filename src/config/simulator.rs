//! Top-level SimulatorConfig and its map/noise sections.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::defaults;
use super::scan::ScanConfig;

/// Map ingestion settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Occupancy values in `[0, free_threshold]` are free, everything else
    /// (including negative "unknown" values) is occupied.
    #[serde(default = "defaults::free_threshold")]
    pub free_threshold: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            free_threshold: defaults::free_threshold(),
        }
    }
}

/// Noise generator settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    /// RNG seed (0 = seed from entropy)
    #[serde(default)]
    pub seed: u64,
}

/// Full Drishti configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Lidar and opponent parameters
    #[serde(default)]
    pub scan: ScanConfig,

    /// Map ingestion settings
    #[serde(default)]
    pub map: MapSettings,

    /// Noise generator settings
    #[serde(default)]
    pub noise: NoiseSettings,
}

impl SimulatorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/drishti.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/drishti.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate the scan section
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.scan.validate()?;
        Ok(config)
    }
}
