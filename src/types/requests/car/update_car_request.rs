use crate::types::models::listing::car_status::CarStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CarStatus>,
}
