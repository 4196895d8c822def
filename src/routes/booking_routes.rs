use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::booking_handler::{
        booking_analytics_handler, create_booking_handler, list_bookings_handler,
        set_commission_paid_handler, update_booking_status_handler,
    },
    services::booking_service::BookingService,
};

pub fn configure_booking_routes(
    cfg: &mut web::ServiceConfig,
    booking_service_data: web::Data<Arc<BookingService>>,
) {
    cfg.service(
        web::scope("/bookings")
            .wrap(configure_cors())
            .app_data(booking_service_data)
            .route("", web::get().to(list_bookings_handler))
            .route("", web::post().to(create_booking_handler))
            .route("/analytics", web::get().to(booking_analytics_handler))
            .route("/{id}/status", web::patch().to(update_booking_status_handler))
            .route(
                "/{id}/commission-paid",
                web::patch().to(set_commission_paid_handler),
            ),
    );
}
