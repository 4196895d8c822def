use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkerStatus {
    Active,
    Inactive,
    Suspended,
    Terminated,
}

pub fn default_worker_status() -> WorkerStatus {
    WorkerStatus::Active
}
