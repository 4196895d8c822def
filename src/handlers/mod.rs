pub mod auth_handler;
pub mod booking_handler;
pub mod car_handler;
pub mod commission_level_handler;
pub mod fuel_log_handler;
pub mod property_handler;
pub mod ticket_handler;
pub mod worker_handler;
