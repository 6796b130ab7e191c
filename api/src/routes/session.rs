use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use diesel::prelude::*;
use serde::Deserialize;
use tower_cookies::Cookies;

use pavilion_auth::password::verify_password;
use pavilion_db::{users, PoolExt};

use crate::{
    auth::{Authenticated, UserInfo},
    shared_state::AppState,
    Error,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserInfo>, Error> {
    let email = payload.email.clone();
    let user = state
        .db
        .interact(move |conn| {
            users::table
                .filter(users::email.eq(email))
                .first::<pavilion_db::users::User>(conn)
                .optional()
                .map_err(Error::from)
        })
        .await?
        .ok_or(Error::InvalidCredentials)?;

    let hash = user.password_hash.ok_or(Error::InvalidCredentials)?;

    // Argon2 verification is slow by design; keep it off the async workers.
    tokio::task::spawn_blocking(move || verify_password(&payload.password, &hash))
        .await
        .map_err(|e| Error::Generic(e.into()))?
        .map_err(|_| Error::InvalidCredentials)?;

    state.sessions.create_session(&cookies, user.id).await?;

    Ok(Json(UserInfo {
        user_id: user.id,
        name: user.name,
        email: user.email,
        is_admin: user.is_admin,
    }))
}

async fn current_user(Authenticated(user): Authenticated) -> Json<UserInfo> {
    Json(user)
}

async fn logout(State(state): State<AppState>, cookies: Cookies) -> Result<StatusCode, Error> {
    state.sessions.delete_session(&cookies).await?;
    Ok(StatusCode::OK)
}

pub fn configure() -> Router<AppState> {
    Router::new().route("/session", get(current_user).post(login).delete(logout))
}
