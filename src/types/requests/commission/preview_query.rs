use crate::types::models::booking::booking_channel::BookingChannel;
use serde::Deserialize;

/// Either a direct `rate`, or a `level` id plus `channel`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewQuery {
    pub price: f64,

    #[serde(default)]
    pub rate: Option<f64>,

    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub channel: Option<BookingChannel>,
}
