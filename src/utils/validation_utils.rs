use actix_web::HttpResponse;
use bson::oid::ObjectId;
use log::error;
use serde_json::json;
use std::{borrow::Cow, collections::HashMap};
use validator::{ValidationError, ValidationErrors};

use crate::{
    errors::ServiceError,
    types::{
        requests::{
            auth::{login_request::LoginRequest, register_request::RegisterRequest},
            ticket::submit_ticket_request::SubmitTicketRequest,
            worker::create_worker_request::CreateWorkerRequest,
        },
        responses::api_response::{ApiResponse, ErrorDetails},
    },
    validations::{
        email::validate_email, name::validate_name, password::validate_password,
        phone::validate_phone,
    },
};

pub fn parse_object_id(value: &str, entity: &'static str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(value)
        .map_err(|_| ServiceError::validation(format!("Invalid {} id", entity)))
}

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

pub fn handle_validation_error(errors: ValidationErrors, msg: &str) -> HttpResponse {
    let error_details = ErrorDetails {
        details: Some(json!(&errors)),
    };
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg, error_details))
}

/// Maps the service error taxonomy onto status codes. Database and internal
/// failures are logged here with their full detail and answered with a
/// generic message only.
pub fn handle_service_error(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error(msg, ErrorDetails { details: None })),
        ServiceError::Unauthorized(msg) => HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error(msg, ErrorDetails { details: None })),
        ServiceError::Forbidden(msg) => HttpResponse::Forbidden()
            .json(ApiResponse::<()>::error(msg, ErrorDetails { details: None })),
        ServiceError::NotFound(entity) => HttpResponse::NotFound().json(ApiResponse::<()>::error(
            format!("{} not found", entity),
            ErrorDetails { details: None },
        )),
        ServiceError::Conflict(msg) => HttpResponse::Conflict()
            .json(ApiResponse::<()>::error(msg, ErrorDetails { details: None })),
        ServiceError::Database(err) => {
            error!("Database error: {err}");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Internal server error",
                ErrorDetails { details: None },
            ))
        }
        ServiceError::Internal(err) => {
            error!("Internal error: {err:#}");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Internal server error",
                ErrorDetails { details: None },
            ))
        }
    }
}

pub fn validate_register_data(data: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(&data.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password(&data.password) {
        errors.add("password", e);
    }
    if let Some(phone) = data.phone.as_deref() {
        if let Err(e) = validate_phone(phone) {
            errors.add("phone", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_login_data(data: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if data.password.is_empty() {
        errors.add(
            "password",
            add_error(
                "password.empty",
                "Password must not be empty".to_string(),
                "",
            ),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_ticket_data(data: &SubmitTicketRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(&data.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if data.subject.trim().is_empty() {
        errors.add(
            "subject",
            add_error(
                "subject.empty",
                "Subject must not be empty".to_string(),
                &data.subject,
            ),
        );
    }
    if data.message.trim().is_empty() {
        errors.add(
            "message",
            add_error(
                "message.empty",
                "Message must not be empty".to_string(),
                &data.message,
            ),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_worker_data(data: &CreateWorkerRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(&data.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if let Err(e) = validate_phone(&data.phone) {
        errors.add("phone", e);
    }
    if data.national_id.trim().is_empty() {
        errors.add(
            "nationalId",
            add_error(
                "national_id.empty",
                "National id must not be empty".to_string(),
                &data.national_id,
            ),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_request() -> SubmitTicketRequest {
        SubmitTicketRequest {
            name: "Sara Ahmed".to_string(),
            email: "sara@example.com".to_string(),
            phone: None,
            subject: "Refund request".to_string(),
            category: None,
            priority: crate::types::models::ticket::ticket_priority::default_priority(),
            message: "The booking was cancelled but not refunded.".to_string(),
        }
    }

    #[test]
    fn complete_ticket_passes() {
        assert!(validate_ticket_data(&ticket_request()).is_ok());
    }

    #[test]
    fn blank_subject_and_message_fail() {
        let mut bad = ticket_request();
        bad.subject = "  ".to_string();
        bad.message = String::new();

        let errors = validate_ticket_data(&bad).unwrap_err();
        assert!(errors.errors().contains_key("subject"));
        assert!(errors.errors().contains_key("message"));
    }
}
