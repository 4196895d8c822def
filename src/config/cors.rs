use actix_cors::Cors;
use actix_web::http::header;

use crate::constants::CORS_ALLOWED_ORIGIN;

pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin((*CORS_ALLOWED_ORIGIN).as_str())
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(3600)
}
