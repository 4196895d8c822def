use actix_web::{
    HttpResponse,
    cookie::{Cookie, SameSite, time::Duration},
    web,
};
use log::info;
use std::sync::Arc;

use crate::{
    constants::COOKIE_NAME,
    services::user_service::UserService,
    types::{
        requests::auth::{login_request::LoginRequest, register_request::RegisterRequest},
        responses::api_response::ApiResponse,
    },
    utils::{
        auth_utils::generate_cookie,
        validation_utils::{
            handle_service_error, handle_validation_error, validate_login_data,
            validate_register_data,
        },
    },
};

pub async fn register_user_handler(
    user_service: web::Data<Arc<UserService>>,
    new_user: web::Json<RegisterRequest>,
) -> HttpResponse {
    let data = new_user.into_inner();

    if let Err(errs) = validate_register_data(&data) {
        return handle_validation_error(errs, "Invalid registration data");
    }

    match user_service.register_user(data).await {
        Ok(user) => HttpResponse::Created().json(ApiResponse::success(
            "Account successfully created.",
            user,
        )),
        Err(err) => handle_service_error(err),
    }
}

pub async fn jwt_login_handler(
    user_service: web::Data<Arc<UserService>>,
    credentials: web::Json<LoginRequest>,
) -> HttpResponse {
    let data = credentials.into_inner();

    if let Err(errs) = validate_login_data(&data) {
        return handle_validation_error(errs, "Invalid login credentials");
    }

    match user_service
        .authenticate_user(&data.email, &data.password)
        .await
    {
        Ok((user, token)) => {
            info!("User {} successfully logged in.", data.email);
            let cookie = generate_cookie(token);
            HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::success("Login successful", user))
        }
        Err(err) => handle_service_error(err),
    }
}

pub async fn logout_user_handler() -> HttpResponse {
    let expired = Cookie::build((*COOKIE_NAME).clone(), "")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(Duration::new(0, 0))
        .finish();

    HttpResponse::Ok()
        .cookie(expired)
        .json(ApiResponse::<()>::message_only("Logged out successfully."))
}
