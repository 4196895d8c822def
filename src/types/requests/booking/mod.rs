pub mod analytics_query;
pub mod booking_query;
pub mod create_booking_request;
pub mod update_status_request;
