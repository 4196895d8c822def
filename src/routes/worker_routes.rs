use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::worker_handler::{
        create_account_handler, create_worker_handler, delete_worker_handler, get_worker_handler,
        list_workers_handler, reset_password_handler, update_privileges_handler,
        update_worker_handler,
    },
    services::worker_service::WorkerService,
};

pub fn configure_worker_routes(
    cfg: &mut web::ServiceConfig,
    worker_service_data: web::Data<Arc<WorkerService>>,
) {
    cfg.service(
        web::scope("/workers")
            .wrap(configure_cors())
            .app_data(worker_service_data)
            .route("", web::get().to(list_workers_handler))
            .route("", web::post().to(create_worker_handler))
            .route("/{id}", web::get().to(get_worker_handler))
            .route("/{id}", web::put().to(update_worker_handler))
            .route("/{id}", web::delete().to(delete_worker_handler))
            .route("/{id}/privileges", web::patch().to(update_privileges_handler))
            .route("/{id}/account", web::post().to(create_account_handler))
            .route("/{id}/reset-password", web::post().to(reset_password_handler)),
    );
}
