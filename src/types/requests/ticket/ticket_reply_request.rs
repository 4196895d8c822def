use serde::Deserialize;

/// Staff reply to a ticket by id.
#[derive(Debug, Deserialize)]
pub struct TicketReplyRequest {
    pub message: String,
}

/// Requester reply, authorized by ticket number plus contact email.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterReplyRequest {
    pub ticket_number: String,

    pub email: String,

    pub message: String,
}
