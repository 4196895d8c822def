use crate::types::models::listing::property_status::{PropertyStatus, default_property_status};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub owner_id: ObjectId,

    pub title: String,

    pub city: String,

    pub address: String,

    pub nightly_rate: f64,

    pub capacity: u32,

    #[serde(default = "default_property_status")]
    pub status: PropertyStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_level_id: Option<ObjectId>,

    #[serde(default)]
    pub assigned_worker_ids: Vec<ObjectId>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
