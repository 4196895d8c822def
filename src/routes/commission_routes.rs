use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::commission_level_handler::{
        commission_preview_handler, create_commission_level_handler,
        delete_commission_level_handler, list_commission_levels_handler,
        update_commission_level_handler,
    },
    services::commission_service::CommissionService,
};

pub fn configure_commission_routes(
    cfg: &mut web::ServiceConfig,
    commission_service_data: web::Data<Arc<CommissionService>>,
) {
    cfg.service(
        web::scope("/commission-levels")
            .wrap(configure_cors())
            .app_data(commission_service_data)
            .route("", web::get().to(list_commission_levels_handler))
            .route("", web::post().to(create_commission_level_handler))
            .route("/preview", web::get().to(commission_preview_handler))
            .route("/{id}", web::put().to(update_commission_level_handler))
            .route("/{id}", web::delete().to(delete_commission_level_handler)),
    );
}
