use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::booking_service::BookingService,
    types::{
        requests::booking::{
            analytics_query::AnalyticsQuery, booking_query::BookingQuery,
            create_booking_request::CreateBookingRequest, update_status_request::UpdateStatusRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::{auth_utils::authenticate, validation_utils::handle_service_error},
};
use serde::Deserialize;

pub async fn create_booking_handler(
    req: HttpRequest,
    booking_service: web::Data<Arc<BookingService>>,
    new_booking: web::Json<CreateBookingRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match booking_service
        .create_booking(&actor, new_booking.into_inner())
        .await
    {
        Ok(booking) => HttpResponse::Created().json(ApiResponse::success(
            "Booking created successfully.",
            booking,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn list_bookings_handler(
    req: HttpRequest,
    booking_service: web::Data<Arc<BookingService>>,
    query: web::Query<BookingQuery>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match booking_service
        .list_bookings(&actor, query.into_inner())
        .await
    {
        Ok(bookings) => HttpResponse::Ok().json(ApiResponse::success(
            "Bookings fetched successfully.",
            bookings,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_booking_status_handler(
    req: HttpRequest,
    booking_service: web::Data<Arc<BookingService>>,
    id: web::Path<String>,
    update: web::Json<UpdateStatusRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match booking_service
        .update_status(&actor, &id, update.into_inner().status)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(
            "Booking status updated successfully.",
            booking,
        )),
        Err(err) => handle_service_error(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct CommissionPaidRequest {
    pub paid: bool,
}

pub async fn set_commission_paid_handler(
    req: HttpRequest,
    booking_service: web::Data<Arc<BookingService>>,
    id: web::Path<String>,
    update: web::Json<CommissionPaidRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match booking_service
        .set_commission_paid(&actor, &id, update.paid)
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(ApiResponse::success(
            "Commission settlement updated.",
            booking,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn booking_analytics_handler(
    req: HttpRequest,
    booking_service: web::Data<Arc<BookingService>>,
    query: web::Query<AnalyticsQuery>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match booking_service.analytics(&actor, query.into_inner()).await {
        Ok(analytics) => HttpResponse::Ok().json(ApiResponse::success(
            "Booking analytics computed successfully.",
            analytics,
        )),
        Err(err) => handle_service_error(err),
    }
}
