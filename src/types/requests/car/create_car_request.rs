use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    pub vehicle_name: String,

    pub plate_number: String,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub year: Option<i32>,

    pub daily_rate: f64,

    #[serde(default)]
    pub commission_level: Option<String>,
}
