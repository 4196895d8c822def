use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::car_handler::{
        create_car_handler, delete_car_handler, get_car_handler, list_cars_handler,
        update_car_handler,
    },
    services::car_service::CarService,
};

pub fn configure_car_routes(
    cfg: &mut web::ServiceConfig,
    car_service_data: web::Data<Arc<CarService>>,
) {
    cfg.service(
        web::scope("/cars")
            .wrap(configure_cors())
            .app_data(car_service_data)
            .route("", web::get().to(list_cars_handler))
            .route("", web::post().to(create_car_handler))
            .route("/{id}", web::get().to(get_car_handler))
            .route("/{id}", web::put().to(update_car_handler))
            .route("/{id}", web::delete().to(delete_car_handler)),
    );
}
