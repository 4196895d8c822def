use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackTicketQuery {
    pub ticket_number: String,

    /// Capability check for unauthenticated callers.
    #[serde(default)]
    pub email: Option<String>,
}
