use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Login email; defaults to the worker's contact email.
    #[serde(default)]
    pub email: Option<String>,

    pub password: String,
}
