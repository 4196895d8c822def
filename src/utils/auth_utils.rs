use actix_web::{
    HttpRequest,
    cookie::{Cookie, SameSite, time::Duration},
};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use bson::oid::ObjectId;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{COOKIE_NAME, JWT_SECRET},
    errors::ServiceError,
    models::{user_model::User, worker_model::Worker},
    repositories::worker_repository::WorkerRepository,
    types::models::{user::role::Role, worker::privileges::WorkerPrivileges},
};

const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: usize,
}

/// The authenticated caller, as carried by the session token.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ObjectId,
    pub email: String,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn generate_jwt(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.id.map(|id| id.to_hex()).unwrap_or_default(),
        email: user.email.clone(),
        role: user.role,
        exp: (Utc::now().timestamp() + TOKEN_TTL_SECS) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret((*JWT_SECRET).as_bytes()),
    )
}

pub fn decode_jwt(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret((*JWT_SECRET).as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

pub fn generate_cookie(token: String) -> Cookie<'static> {
    Cookie::build((*COOKIE_NAME).clone(), token)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(Duration::seconds(TOKEN_TTL_SECS))
        .finish()
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Session check: the token comes from the session cookie or a bearer header.
pub fn authenticate(req: &HttpRequest) -> Result<Actor, ServiceError> {
    let token = req
        .cookie(&COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| bearer_token(req))
        .ok_or_else(|| ServiceError::Unauthorized("Missing authentication token".to_string()))?;

    let claims = decode_jwt(&token)
        .map_err(|_| ServiceError::Unauthorized("Invalid or expired token".to_string()))?;

    let id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| ServiceError::Unauthorized("Invalid token subject".to_string()))?;

    Ok(Actor {
        id,
        email: claims.email,
        role: claims.role,
    })
}

/// Resolves what slice of owner data the actor may touch: admins are
/// unscoped, owners see their own, workers see their employer's data when the
/// named privilege is granted. Guests are turned away.
pub async fn worker_scope(
    actor: &Actor,
    workers: &WorkerRepository,
    allowed: fn(&WorkerPrivileges) -> bool,
) -> Result<Option<ObjectId>, ServiceError> {
    match actor.role {
        Role::Admin => Ok(None),
        Role::Owner => Ok(Some(actor.id)),
        Role::Worker => {
            let worker = require_worker(actor, workers, allowed).await?;
            Ok(Some(worker.owner_id))
        }
        Role::Guest => Err(ServiceError::forbidden(
            "This resource is not available to guest accounts",
        )),
    }
}

pub async fn require_worker(
    actor: &Actor,
    workers: &WorkerRepository,
    allowed: fn(&WorkerPrivileges) -> bool,
) -> Result<Worker, ServiceError> {
    let worker = workers
        .find_by_account_user_id(actor.id)
        .await?
        .ok_or_else(|| ServiceError::forbidden("No worker profile linked to this account"))?;

    if !allowed(&worker.privileges) {
        return Err(ServiceError::forbidden(
            "Your account does not have this privilege",
        ));
    }

    Ok(worker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("S3cret!pass").unwrap();
        assert_ne!(hash, "S3cret!pass");
        assert!(verify_password("S3cret!pass", &hash).unwrap());
        assert!(!verify_password("wrong-pass", &hash).unwrap());
    }
}
