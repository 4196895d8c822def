use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommissionLevelRequest {
    pub name: String,

    pub online_rate: f64,

    pub direct_rate: f64,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommissionLevelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
}
