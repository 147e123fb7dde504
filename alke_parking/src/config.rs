use crate::fee::VehicleClass;
use crate::lot::DEFAULT_CAPACITY;
use crate::vehicle::Vehicle;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LotConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for LotConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

impl LotConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read lot config at {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("invalid lot config in {}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let cfg: LotConfig = serde_json::from_str(data)?;
        if cfg.capacity == 0 {
            bail!("capacity must be at least 1");
        }
        Ok(cfg)
    }
}

/// One vehicle of the demo fleet. `parked_minutes` back-dates the arrival.
#[derive(Deserialize, Debug, Clone)]
pub struct FleetEntry {
    pub plate: String,
    pub class: VehicleClass,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub parked_minutes: u32,
}

impl FleetEntry {
    pub fn arriving(&self, now: DateTime<Utc>) -> Vehicle {
        Vehicle {
            plate: self.plate.clone(),
            class: self.class,
            check_in_time: now - Duration::minutes(i64::from(self.parked_minutes)),
            discount_code: self.discount_code.clone(),
        }
    }
}

pub fn load_fleet(path: &Path) -> Result<Vec<FleetEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read fleet at {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid fleet JSON in {}", path.display()))
}

/// Find `file` under the usual data directories, whether run from the
/// workspace root, the crate directory, or next to the binary.
pub fn resolve_data_path(file: &str) -> Option<PathBuf> {
    let candidates = [
        PathBuf::from("data").join(file),
        PathBuf::from("alke_parking/data").join(file),
        {
            let mut p = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
            p.pop(); // exe dir
            p.push("data");
            p.push(file);
            p
        },
    ];

    candidates.into_iter().find(|c| c.exists())
}
