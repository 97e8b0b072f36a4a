use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::app::Result;
use crate::config::OutputConfig;
use crate::domain::WeeklyUpdate;
use crate::store::{Store, VehicleData};

/// Pretty-printed JSON files on disk, one per artifact.
#[derive(Debug, Clone)]
pub struct JsonStore {
    weekly_update: PathBuf,
    vehicle_data: PathBuf,
}

impl JsonStore {
    pub fn new(weekly_update: impl Into<PathBuf>, vehicle_data: impl Into<PathBuf>) -> Self {
        Self {
            weekly_update: weekly_update.into(),
            vehicle_data: vehicle_data.into(),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(output.weekly_update.clone(), output.vehicle_data.clone())
    }

    pub fn weekly_update_path(&self) -> &Path {
        &self.weekly_update
    }

    pub fn vehicle_data_path(&self) -> &Path {
        &self.vehicle_data
    }

    pub fn with_weekly_update_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.weekly_update = path.into();
        self
    }

    pub fn with_vehicle_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vehicle_data = path.into();
        self
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;

    debug!("Wrote {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

impl Store for JsonStore {
    fn save_weekly_update(&self, update: &WeeklyUpdate) -> Result<()> {
        write_json(&self.weekly_update, update)
    }

    fn load_weekly_update(&self) -> Result<Option<WeeklyUpdate>> {
        read_json(&self.weekly_update)
    }

    fn save_vehicle_data(&self, vehicles: &VehicleData) -> Result<()> {
        write_json(&self.vehicle_data, vehicles)
    }

    fn load_vehicle_data(&self) -> Result<Option<VehicleData>> {
        read_json(&self.vehicle_data)
    }
}
