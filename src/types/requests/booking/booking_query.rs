use crate::types::models::booking::{booking_kind::BookingKind, booking_status::BookingStatus};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuery {
    #[serde(default)]
    pub kind: Option<BookingKind>,

    #[serde(default)]
    pub status: Option<BookingStatus>,

    #[serde(default)]
    pub from: Option<NaiveDate>,

    #[serde(default)]
    pub to: Option<NaiveDate>,
}
