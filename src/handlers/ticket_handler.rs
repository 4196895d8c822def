use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    services::ticket_service::TicketService,
    types::{
        models::ticket::ticket_status::TicketStatus,
        requests::ticket::{
            submit_ticket_request::SubmitTicketRequest,
            ticket_reply_request::{RequesterReplyRequest, TicketReplyRequest},
            ticket_status_request::TicketStatusRequest,
            track_ticket_query::TrackTicketQuery,
        },
        responses::{api_response::ApiResponse, ticket_responses::TicketSubmittedResponse},
    },
    utils::{
        auth_utils::authenticate,
        validation_utils::{
            handle_service_error, handle_validation_error, validate_ticket_data,
        },
    },
};

/// Public endpoint: no session required to ask for help.
pub async fn submit_ticket_handler(
    ticket_service: web::Data<Arc<TicketService>>,
    new_ticket: web::Json<SubmitTicketRequest>,
) -> HttpResponse {
    let data = new_ticket.into_inner();

    if let Err(errs) = validate_ticket_data(&data) {
        return handle_validation_error(errs, "Invalid ticket data");
    }

    match ticket_service.submit(data).await {
        Ok(ticket) => HttpResponse::Created().json(ApiResponse::success(
            "Support ticket submitted successfully.",
            TicketSubmittedResponse {
                ticket_number: ticket.ticket_number,
            },
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn track_ticket_handler(
    req: HttpRequest,
    ticket_service: web::Data<Arc<TicketService>>,
    query: web::Query<TrackTicketQuery>,
) -> HttpResponse {
    // Tracking works with or without a session; staff skip the email check.
    let actor = authenticate(&req).ok();

    match ticket_service.track(actor.as_ref(), query.into_inner()).await {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(
            "Ticket fetched successfully.",
            ticket,
        )),
        Err(err) => handle_service_error(err),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TicketListQuery {
    pub status: Option<TicketStatus>,
}

pub async fn list_tickets_handler(
    req: HttpRequest,
    ticket_service: web::Data<Arc<TicketService>>,
    query: web::Query<TicketListQuery>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match ticket_service.list(&actor, query.status).await {
        Ok(tickets) => HttpResponse::Ok().json(ApiResponse::success(
            "Tickets fetched successfully.",
            tickets,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn respond_ticket_handler(
    req: HttpRequest,
    ticket_service: web::Data<Arc<TicketService>>,
    id: web::Path<String>,
    reply: web::Json<TicketReplyRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match ticket_service
        .respond(&actor, &id, reply.into_inner())
        .await
    {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(
            "Response added successfully.",
            ticket,
        )),
        Err(err) => handle_service_error(err),
    }
}

/// Requesters reply without a session, authorized by ticket number + email.
pub async fn requester_reply_handler(
    ticket_service: web::Data<Arc<TicketService>>,
    reply: web::Json<RequesterReplyRequest>,
) -> HttpResponse {
    match ticket_service.requester_respond(reply.into_inner()).await {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(
            "Response added successfully.",
            ticket,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_ticket_status_handler(
    req: HttpRequest,
    ticket_service: web::Data<Arc<TicketService>>,
    id: web::Path<String>,
    update: web::Json<TicketStatusRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match ticket_service
        .update_status(&actor, &id, update.into_inner().status)
        .await
    {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(
            "Ticket status updated successfully.",
            ticket,
        )),
        Err(err) => handle_service_error(err),
    }
}
