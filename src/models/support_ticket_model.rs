use crate::types::models::ticket::{
    response_author::ResponseAuthor,
    ticket_priority::{TicketPriority, default_priority},
    ticket_status::TicketStatus,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub author: ResponseAuthor,

    pub message: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_ticket_status() -> TicketStatus {
    TicketStatus::Open
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub subject: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default = "default_priority")]
    pub priority: TicketPriority,

    pub message: String,

    pub ticket_number: String,

    #[serde(default = "default_ticket_status")]
    pub status: TicketStatus,

    #[serde(default)]
    pub responses: Vec<TicketResponse>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
