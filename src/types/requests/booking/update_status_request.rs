use crate::types::models::booking::booking_status::BookingStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}
