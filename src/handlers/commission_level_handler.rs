use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::commission_service::CommissionService,
    types::{
        requests::commission::{
            commission_level_request::{
                CreateCommissionLevelRequest, UpdateCommissionLevelRequest,
            },
            preview_query::PreviewQuery,
        },
        responses::api_response::ApiResponse,
    },
    utils::{auth_utils::authenticate, validation_utils::handle_service_error},
};

pub async fn create_commission_level_handler(
    req: HttpRequest,
    commission_service: web::Data<Arc<CommissionService>>,
    new_level: web::Json<CreateCommissionLevelRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match commission_service
        .create_level(&actor, new_level.into_inner())
        .await
    {
        Ok(level) => HttpResponse::Created().json(ApiResponse::success(
            "Commission level created successfully.",
            level,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn list_commission_levels_handler(
    req: HttpRequest,
    commission_service: web::Data<Arc<CommissionService>>,
) -> HttpResponse {
    if let Err(err) = authenticate(&req) {
        return handle_service_error(err);
    }

    match commission_service.list_levels().await {
        Ok(levels) => HttpResponse::Ok().json(ApiResponse::success(
            "Commission levels fetched successfully.",
            levels,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_commission_level_handler(
    req: HttpRequest,
    commission_service: web::Data<Arc<CommissionService>>,
    id: web::Path<String>,
    update: web::Json<UpdateCommissionLevelRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match commission_service
        .update_level(&actor, &id, update.into_inner())
        .await
    {
        Ok(level) => HttpResponse::Ok().json(ApiResponse::success(
            "Commission level updated successfully.",
            level,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn delete_commission_level_handler(
    req: HttpRequest,
    commission_service: web::Data<Arc<CommissionService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match commission_service.delete_level(&actor, &id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Commission level deleted successfully.",
        )),
        Err(err) => handle_service_error(err),
    }
}

/// Client-side live preview; the persisted amount is always recomputed
/// server-side.
pub async fn commission_preview_handler(
    req: HttpRequest,
    commission_service: web::Data<Arc<CommissionService>>,
    query: web::Query<PreviewQuery>,
) -> HttpResponse {
    if let Err(err) = authenticate(&req) {
        return handle_service_error(err);
    }

    match commission_service.preview(query.into_inner()).await {
        Ok(preview) => HttpResponse::Ok().json(ApiResponse::success(
            "Commission preview computed successfully.",
            preview,
        )),
        Err(err) => handle_service_error(err),
    }
}
