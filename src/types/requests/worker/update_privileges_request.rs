use crate::types::models::worker::privileges::PrivilegesPatch;
use serde::Deserialize;

/// PATCH body: the partial privileges map itself.
#[derive(Debug, Deserialize)]
pub struct UpdatePrivilegesRequest {
    #[serde(flatten)]
    pub privileges: PrivilegesPatch,
}
