use crate::types::models::booking::{
    booking_channel::BookingChannel, booking_kind::BookingKind, booking_status::BookingStatus,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub kind: BookingKind,

    pub guest_id: ObjectId,

    /// Property or car being booked; flights carry route/airline instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<ObjectId>,

    /// Owner of the booked listing; absent for flight bookings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    pub total_amount: f64,

    pub status: BookingStatus,

    pub channel: BookingChannel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_amount: Option<f64>,

    #[serde(default)]
    pub commission_paid: bool,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
