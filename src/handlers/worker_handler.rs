use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::worker_service::WorkerService,
    types::{
        requests::worker::{
            create_account_request::CreateAccountRequest,
            create_worker_request::CreateWorkerRequest,
            reset_password_request::ResetPasswordRequest,
            update_privileges_request::UpdatePrivilegesRequest,
            update_worker_request::UpdateWorkerRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::{
        auth_utils::authenticate,
        validation_utils::{
            handle_service_error, handle_validation_error, validate_worker_data,
        },
    },
};

pub async fn create_worker_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    new_worker: web::Json<CreateWorkerRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    let data = new_worker.into_inner();
    if let Err(errs) = validate_worker_data(&data) {
        return handle_validation_error(errs, "Invalid worker data");
    }

    match worker_service.create_worker(&actor, data).await {
        Ok(worker) => HttpResponse::Created().json(ApiResponse::success(
            "Worker added successfully.",
            worker,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn list_workers_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service.list_workers(&actor).await {
        Ok(workers) => HttpResponse::Ok().json(ApiResponse::success(
            "Workers fetched successfully.",
            workers,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn get_worker_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service.get_worker(&actor, &id).await {
        Ok(worker) => HttpResponse::Ok().json(ApiResponse::success(
            "Worker fetched successfully.",
            worker,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_worker_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    id: web::Path<String>,
    update: web::Json<UpdateWorkerRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service
        .update_worker(&actor, &id, update.into_inner())
        .await
    {
        Ok(worker) => HttpResponse::Ok().json(ApiResponse::success(
            "Worker updated successfully.",
            worker,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_privileges_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    id: web::Path<String>,
    patch: web::Json<UpdatePrivilegesRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service
        .update_privileges(&actor, &id, patch.into_inner())
        .await
    {
        Ok(worker) => HttpResponse::Ok().json(ApiResponse::success(
            "Privileges updated successfully.",
            worker,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn create_account_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    id: web::Path<String>,
    account: web::Json<CreateAccountRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service
        .create_account(&actor, &id, account.into_inner())
        .await
    {
        Ok(result) => HttpResponse::Created().json(ApiResponse::success(
            "Worker account created successfully.",
            result,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn reset_password_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    id: web::Path<String>,
    reset: web::Json<ResetPasswordRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service
        .reset_password(&actor, &id, reset.into_inner())
        .await
    {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(
            "Password reset successfully.",
            result,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn delete_worker_handler(
    req: HttpRequest,
    worker_service: web::Data<Arc<WorkerService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match worker_service.delete_worker(&actor, &id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Worker deleted successfully.",
        )),
        Err(err) => handle_service_error(err),
    }
}
