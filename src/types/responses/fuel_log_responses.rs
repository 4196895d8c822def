use serde::Serialize;

use crate::{
    models::{car_model::Car, fuel_log_model::FuelLog},
    utils::analytics_utils::FuelSummary,
};

/// A fuel log populated with the car it belongs to.
#[derive(Debug, Serialize)]
pub struct FuelLogWithCar {
    #[serde(flatten)]
    pub log: FuelLog,
    pub car: Car,
}

#[derive(Debug, Serialize)]
pub struct FuelLogListResponse {
    pub logs: Vec<FuelLog>,
    pub summary: FuelSummary,
}
