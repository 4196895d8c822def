pub mod booking_model;
pub mod car_model;
pub mod commission_level_model;
pub mod fuel_log_model;
pub mod property_model;
pub mod support_ticket_model;
pub mod user_model;
pub mod worker_model;
