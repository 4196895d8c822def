use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuelLogRequest {
    /// Id of the car the fill-up belongs to.
    pub car: String,

    pub date: NaiveDate,

    pub liters: f64,

    pub total_cost: f64,

    #[serde(default)]
    pub price_per_liter: Option<f64>,

    #[serde(default)]
    pub odometer: Option<f64>,

    #[serde(default)]
    pub station: Option<String>,

    #[serde(default)]
    pub note: Option<String>,
}
