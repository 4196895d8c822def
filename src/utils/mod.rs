pub mod analytics_utils;
pub mod auth_utils;
pub mod commission_utils;
pub mod date_utils;
pub mod ticket_utils;
pub mod validation_utils;
