use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerAccountResponse {
    pub email: String,

    /// Present only when the password was generated server-side; it is not
    /// retrievable afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password: Option<String>,
}
