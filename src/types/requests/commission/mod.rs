pub mod commission_level_request;
pub mod preview_query;
