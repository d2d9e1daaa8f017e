use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use thiserror::Error;
use crate::error::ApiError;

/// Errors raised while authenticating a request
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingToken,

    #[error("Authorization header must use the Bearer scheme")]
    InvalidScheme,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token subject is not a user id: {0}")]
    InvalidSubject(String),
}

/// Token subject; issuers encode the user id either as a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    Id(i64),
    Text(String),
}

/// JWT claims issued by the account service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Subject,
    pub exp: u64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, AuthError> {
        match &self.sub {
            Subject::Id(id) => Ok(*id),
            Subject::Text(text) => text
                .parse()
                .map_err(|_| AuthError::InvalidSubject(text.clone())),
        }
    }
}

/// HS256 bearer token validator
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_secs;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }

    /// Validate an `Authorization` header value and return the user id
    pub fn authenticate(&self, header_value: Option<&str>) -> Result<i64, AuthError> {
        let value = header_value.ok_or(AuthError::MissingToken)?;
        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidScheme)?;

        self.validate(token)?.user_id()
    }
}

/// Authenticated caller, extracted from the bearer token
///
/// Only proves the token is valid. Handlers still check that the user
/// exists and is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate_request(req))
    }
}

fn authenticate_request(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let validator = req
        .app_data::<web::Data<JwtValidator>>()
        .ok_or_else(|| ApiError::Internal("JWT validator not configured".to_string()))?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match validator.authenticate(header_value) {
        Ok(user_id) => Ok(AuthUser { user_id }),
        Err(e) => {
            tracing::debug!("Rejected request to {}: {}", req.path(), e);
            Err(e.into())
        }
    }
}
