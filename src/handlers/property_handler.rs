use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::property_service::PropertyService,
    types::{
        requests::property::{
            create_property_request::CreatePropertyRequest,
            update_property_request::UpdatePropertyRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::{auth_utils::authenticate, validation_utils::handle_service_error},
};

pub async fn create_property_handler(
    req: HttpRequest,
    property_service: web::Data<Arc<PropertyService>>,
    new_property: web::Json<CreatePropertyRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match property_service
        .create_property(&actor, new_property.into_inner())
        .await
    {
        Ok(property) => HttpResponse::Created().json(ApiResponse::success(
            "Property listed successfully.",
            property,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn list_properties_handler(
    req: HttpRequest,
    property_service: web::Data<Arc<PropertyService>>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match property_service.list_properties(&actor).await {
        Ok(properties) => HttpResponse::Ok().json(ApiResponse::success(
            "Properties fetched successfully.",
            properties,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn get_property_handler(
    req: HttpRequest,
    property_service: web::Data<Arc<PropertyService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match property_service.get_property(&actor, &id).await {
        Ok(property) => HttpResponse::Ok().json(ApiResponse::success(
            "Property fetched successfully.",
            property,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn update_property_handler(
    req: HttpRequest,
    property_service: web::Data<Arc<PropertyService>>,
    id: web::Path<String>,
    update: web::Json<UpdatePropertyRequest>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match property_service
        .update_property(&actor, &id, update.into_inner())
        .await
    {
        Ok(property) => HttpResponse::Ok().json(ApiResponse::success(
            "Property updated successfully.",
            property,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn delete_property_handler(
    req: HttpRequest,
    property_service: web::Data<Arc<PropertyService>>,
    id: web::Path<String>,
) -> HttpResponse {
    let actor = match authenticate(&req) {
        Ok(actor) => actor,
        Err(err) => return handle_service_error(err),
    };

    match property_service.delete_property(&actor, &id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Property deleted successfully.",
        )),
        Err(err) => handle_service_error(err),
    }
}
