use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::property_handler::{
        create_property_handler, delete_property_handler, get_property_handler,
        list_properties_handler, update_property_handler,
    },
    services::property_service::PropertyService,
};

pub fn configure_property_routes(
    cfg: &mut web::ServiceConfig,
    property_service_data: web::Data<Arc<PropertyService>>,
) {
    cfg.service(
        web::scope("/properties")
            .wrap(configure_cors())
            .app_data(property_service_data)
            .route("", web::get().to(list_properties_handler))
            .route("", web::post().to(create_property_handler))
            .route("/{id}", web::get().to(get_property_handler))
            .route("/{id}", web::put().to(update_property_handler))
            .route("/{id}", web::delete().to(delete_property_handler)),
    );
}
