use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSubmittedResponse {
    pub ticket_number: String,
}
