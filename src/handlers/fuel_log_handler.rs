use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::fuel_log_service::FuelLogService,
    types::{
        requests::fuel_log::{
            create_fuel_log_request::CreateFuelLogRequest, fuel_log_query::FuelLogQuery,
        },
        responses::api_response::ApiResponse,
    },
    utils::{auth_utils::authenticate, validation_utils::handle_service_error},
};

pub async fn list_fuel_logs_handler(
    req: HttpRequest,
    fuel_log_service: web::Data<Arc<FuelLogService>>,
    query: web::Query<FuelLogQuery>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match fuel_log_service.list_logs(&actor, query.into_inner()).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(
            "Fuel logs fetched successfully.",
            result,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn create_fuel_log_handler(
    req: HttpRequest,
    fuel_log_service: web::Data<Arc<FuelLogService>>,
    new_log: web::Json<CreateFuelLogRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match fuel_log_service
        .create_log(&actor, new_log.into_inner())
        .await
    {
        Ok(log) => HttpResponse::Created().json(ApiResponse::success(
            "Fuel log added successfully.",
            log,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn delete_fuel_log_handler(
    req: HttpRequest,
    fuel_log_service: web::Data<Arc<FuelLogService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match fuel_log_service.delete_log(&actor, &id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Fuel log deleted successfully.",
        )),
        Err(err) => handle_service_error(err),
    }
}
