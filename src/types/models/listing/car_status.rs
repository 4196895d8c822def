use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

pub fn default_car_status() -> CarStatus {
    CarStatus::Available
}
