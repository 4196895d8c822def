use crate::types::models::ticket::ticket_priority::{TicketPriority, default_priority};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTicketRequest {
    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    pub subject: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default = "default_priority")]
    pub priority: TicketPriority,

    pub message: String,
}
