pub mod submit_ticket_request;
pub mod ticket_reply_request;
pub mod ticket_status_request;
pub mod track_ticket_query;
