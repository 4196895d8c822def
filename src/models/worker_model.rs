use crate::types::models::worker::{
    privileges::WorkerPrivileges,
    worker_status::{WorkerStatus, default_worker_status},
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub owner_id: ObjectId,

    pub name: String,

    pub email: String,

    pub phone: String,

    pub national_id: String,

    pub position: String,

    pub department: String,

    pub salary: f64,

    #[serde(default)]
    pub privileges: WorkerPrivileges,

    #[serde(default)]
    pub assigned_property_ids: Vec<ObjectId>,

    #[serde(default = "default_worker_status")]
    pub status: WorkerStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Login account created for this worker, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_user_id: Option<ObjectId>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
