pub mod booking_service;
pub mod car_service;
pub mod commission_service;
pub mod fuel_log_service;
pub mod property_service;
pub mod ticket_service;
pub mod user_service;
pub mod worker_service;
