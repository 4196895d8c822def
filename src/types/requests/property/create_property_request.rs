use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub title: String,

    pub city: String,

    pub address: String,

    pub nightly_rate: f64,

    pub capacity: u32,

    #[serde(default)]
    pub commission_level: Option<String>,
}
