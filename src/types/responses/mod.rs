pub mod api_response;
pub mod fuel_log_responses;
pub mod ticket_responses;
pub mod worker_responses;
