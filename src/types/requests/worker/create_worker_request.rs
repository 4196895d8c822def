use crate::types::models::worker::privileges::PrivilegesPatch;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    pub name: String,

    pub email: String,

    pub phone: String,

    pub national_id: String,

    pub position: String,

    pub department: String,

    pub salary: f64,

    /// Overlay on the default privileges template; omitted keys keep the
    /// template value.
    #[serde(default)]
    pub privileges: PrivilegesPatch,

    #[serde(default)]
    pub assigned_property_ids: Vec<String>,

    #[serde(default)]
    pub avatar: Option<String>,
}
