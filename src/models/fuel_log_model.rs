use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FuelLog {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub owner_id: ObjectId,

    pub car_id: ObjectId,

    pub date: DateTime<Utc>,

    pub liters: f64,

    pub total_cost: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_liter: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
