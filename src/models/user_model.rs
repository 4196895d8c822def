use crate::types::models::user::{
    defaults::{default_role, default_status},
    role::Role,
    user_status::UserStatus,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    pub email: String,

    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default = "default_role")]
    pub role: Role,

    #[serde(default = "default_status")]
    pub status: UserStatus,

    /// Set on accounts created for staff; links back to the worker document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<ObjectId>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
