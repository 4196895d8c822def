pub mod booking_repository;
pub mod car_repository;
pub mod commission_level_repository;
pub mod fuel_log_repository;
pub mod property_repository;
pub mod support_ticket_repository;
pub mod user_repository;
pub mod worker_repository;
