use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// When omitted a temporary password is generated and returned once.
    #[serde(default)]
    pub password: Option<String>,
}
