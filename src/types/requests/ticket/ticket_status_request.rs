use crate::types::models::ticket::ticket_status::TicketStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TicketStatusRequest {
    pub status: TicketStatus,
}
