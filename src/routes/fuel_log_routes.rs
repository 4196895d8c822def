use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::fuel_log_handler::{
        create_fuel_log_handler, delete_fuel_log_handler, list_fuel_logs_handler,
    },
    services::fuel_log_service::FuelLogService,
};

pub fn configure_fuel_log_routes(
    cfg: &mut web::ServiceConfig,
    fuel_log_service_data: web::Data<Arc<FuelLogService>>,
) {
    cfg.service(
        web::scope("/car-fuel-logs")
            .wrap(configure_cors())
            .app_data(fuel_log_service_data)
            .route("", web::get().to(list_fuel_logs_handler))
            .route("", web::post().to(create_fuel_log_handler))
            .route("/{id}", web::delete().to(delete_fuel_log_handler)),
    );
}
