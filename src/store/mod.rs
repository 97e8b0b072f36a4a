pub mod json;

use std::collections::BTreeMap;

use crate::app::Result;
use crate::domain::{VehicleRecord, WeeklyUpdate};

pub use json::JsonStore;

/// Vehicle name -> catalog data, as persisted by the resolve pass.
pub type VehicleData = BTreeMap<String, VehicleRecord>;

pub trait Store {
    // Weekly update
    fn save_weekly_update(&self, update: &WeeklyUpdate) -> Result<()>;
    fn load_weekly_update(&self) -> Result<Option<WeeklyUpdate>>;

    // Vehicle data
    fn save_vehicle_data(&self, vehicles: &VehicleData) -> Result<()>;
    fn load_vehicle_data(&self) -> Result<Option<VehicleData>>;
}
