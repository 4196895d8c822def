pub mod auth_routes;
pub mod booking_routes;
pub mod car_routes;
pub mod commission_routes;
pub mod fuel_log_routes;
pub mod property_routes;
pub mod ticket_routes;
pub mod worker_routes;
