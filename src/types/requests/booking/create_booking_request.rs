use crate::types::models::booking::{booking_channel::BookingChannel, booking_kind::BookingKind};
use chrono::NaiveDate;
use serde::Deserialize;

fn default_channel() -> BookingChannel {
    BookingChannel::Online
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub kind: BookingKind,

    /// Property or car id; required unless the booking is a flight.
    #[serde(default)]
    pub listing: Option<String>,

    #[serde(default)]
    pub route: Option<String>,

    #[serde(default)]
    pub airline: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub total_amount: f64,

    #[serde(default = "default_channel")]
    pub channel: BookingChannel,

    /// Owner-chosen flat rate for listings without a commission level.
    #[serde(default)]
    pub commission_rate: Option<f64>,

    /// Admin-only: book on behalf of another guest.
    #[serde(default)]
    pub guest: Option<String>,
}
