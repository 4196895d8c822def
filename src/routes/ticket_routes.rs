use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::ticket_handler::{
        list_tickets_handler, requester_reply_handler, respond_ticket_handler,
        submit_ticket_handler, track_ticket_handler, update_ticket_status_handler,
    },
    services::ticket_service::TicketService,
};

pub fn configure_ticket_routes(
    cfg: &mut web::ServiceConfig,
    ticket_service_data: web::Data<Arc<TicketService>>,
) {
    cfg.service(
        web::scope("/support-tickets")
            .wrap(configure_cors())
            .app_data(ticket_service_data)
            .route("", web::get().to(list_tickets_handler))
            .route("", web::post().to(submit_ticket_handler))
            .route("/track", web::get().to(track_ticket_handler))
            .route("/replies", web::post().to(requester_reply_handler))
            .route("/{id}/responses", web::post().to(respond_ticket_handler))
            .route("/{id}/status", web::patch().to(update_ticket_status_handler)),
    );
}
