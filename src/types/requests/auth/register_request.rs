use crate::types::models::user::{defaults::default_role, role::Role};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,

    pub email: String,

    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Only owner and guest accounts self-register; staff accounts are
    /// provisioned through worker management.
    #[serde(default = "default_role")]
    pub role: Role,
}
