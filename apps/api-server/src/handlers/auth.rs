//! Session handlers: register, login, logout, session status.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use pulse_core::domain::User;
use pulse_core::ports::{PasswordService, TokenService};
use pulse_core::project::UserView;
use pulse_shared::MessageResponse;
use pulse_shared::dto::{AuthResponse, AuthStatusResponse, LoginRequest, RegisterRequest};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let username = req.username.as_deref().unwrap_or("").to_lowercase();
    let password = req.password.as_deref().unwrap_or("");
    if username.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("Send all required fields.".to_string()));
    }

    if state.users.exists(&username).await? {
        return Err(AppError::Conflict(
            "This username is already in use.".to_string(),
        ));
    }

    let password_hash = password_service.hash(password)?;

    let user = User::new(&username, password_hash);
    let saved = state.users.save(user).await?;

    let token = token_service.generate_token(saved.id, &saved.username)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let username = req.username.as_deref().unwrap_or("").to_lowercase();
    let password = req.password.as_deref().unwrap_or("");
    if username.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("Send all required fields.".to_string()));
    }

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid username or password".to_string()))?;

    let valid = password_service.verify(password, &user.password_hash)?;
    if !valid {
        return Err(AppError::BadRequest(
            "Invalid username or password".to_string(),
        ));
    }

    let token = token_service.generate_token(user.id, &user.username)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// DELETE /logout
///
/// Tokens are stateless; logging out is the client dropping its token.
/// Kept for wire compatibility, answering the redirect the old clients
/// expect.
pub async fn logout() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .json(MessageResponse::new("Logged out"))
}

/// GET / - whether the caller holds a valid session.
pub async fn session_status(identity: OptionalIdentity) -> HttpResponse {
    HttpResponse::Ok().json(AuthStatusResponse {
        authenticated: identity.0.is_some(),
    })
}

/// GET /get_user - the caller's own public record.
pub async fn get_user(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserView::from(&user)))
}
