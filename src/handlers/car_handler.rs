use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::car_service::CarService,
    types::{
        requests::car::{
            create_car_request::CreateCarRequest, update_car_request::UpdateCarRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::{auth_utils::authenticate, validation_utils::handle_service_error},
};

pub async fn create_car_handler(
    req: HttpRequest,
    car_service: web::Data<Arc<CarService>>,
    new_car: web::Json<CreateCarRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match car_service.create_car(&actor, new_car.into_inner()).await {
        Ok(car) => {
            HttpResponse::Created().json(ApiResponse::success("Car added successfully.", car))
        }
        Err(err) => handle_service_error(err),
    }
}

pub async fn list_cars_handler(
    req: HttpRequest,
    car_service: web::Data<Arc<CarService>>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match car_service.list_cars(&actor).await {
        Ok(cars) => HttpResponse::Ok().json(ApiResponse::success(
            "Cars fetched successfully.",
            cars,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn get_car_handler(
    req: HttpRequest,
    car_service: web::Data<Arc<CarService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match car_service.get_car(&actor, &id).await {
        Ok(car) => HttpResponse::Ok().json(ApiResponse::success("Car fetched successfully.", car)),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_car_handler(
    req: HttpRequest,
    car_service: web::Data<Arc<CarService>>,
    id: web::Path<String>,
    update: web::Json<UpdateCarRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match car_service
        .update_car(&actor, &id, update.into_inner())
        .await
    {
        Ok(car) => HttpResponse::Ok().json(ApiResponse::success("Car updated successfully.", car)),
        Err(err) => handle_service_error(err),
    }
}

pub async fn delete_car_handler(
    req: HttpRequest,
    car_service: web::Data<Arc<CarService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match car_service.delete_car(&actor, &id).await {
        Ok(()) => {
            HttpResponse::Ok().json(ApiResponse::<()>::message_only("Car deleted successfully."))
        }
        Err(err) => handle_service_error(err),
    }
}
