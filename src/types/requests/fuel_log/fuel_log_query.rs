use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLogQuery {
    #[serde(default)]
    pub car: Option<String>,

    #[serde(default)]
    pub from: Option<NaiveDate>,

    #[serde(default)]
    pub to: Option<NaiveDate>,

    /// Admin-only: scope the listing to another owner.
    #[serde(default)]
    pub owner: Option<String>,
}
