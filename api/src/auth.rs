use async_trait::async_trait;
use auth::session::{SessionCookieManager, SessionManager};
use auth::AuthenticationLayer;
use axum::{extract::FromRequestParts, http::request::Parts};
use base64::Engine;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use ulid::Ulid;
use uuid::Uuid;

use db::object_id::UserId;

use pavilion_auth as auth;
use pavilion_db as db;

use crate::Error;

#[derive(Clone)]
pub struct SessionStore {
    pub db: db::Pool,
}

#[derive(Clone, Queryable)]
pub struct SessionData {
    user_id: UserId,
    name: String,
    email: String,
    is_admin: bool,
}

#[async_trait]
impl auth::session::SessionStore for SessionStore {
    type UserId = UserId;
    type SessionFetchData = SessionData;
    type Error = crate::Error;

    async fn create_session(
        &self,
        user_id: UserId,
        expires: DateTime<Utc>,
    ) -> Result<String, Self::Error> {
        let conn = self.db.get().await?;
        let session = conn
            .interact(move |conn| {
                let input = db::sessions::Session {
                    id: Ulid::new().into(),
                    user_id,
                    expires,
                };

                diesel::insert_into(db::sessions::table)
                    .values(&input)
                    .execute(conn)?;

                Ok::<Uuid, crate::Error>(input.id)
            })
            .await??;

        Ok(session.to_string())
    }

    async fn get_session(&self, id: &str) -> Result<Option<SessionData>, Self::Error> {
        let session_id = id.parse::<Uuid>().map_err(|_| Error::InvalidSessionId)?;
        let conn = self.db.get().await?;
        let data = conn
            .interact(move |conn| {
                db::sessions::table
                    .inner_join(db::users::table)
                    .filter(db::sessions::id.eq(session_id))
                    .filter(db::sessions::expires.gt(diesel::dsl::now))
                    .select((
                        db::sessions::user_id,
                        db::users::name,
                        db::users::email,
                        db::users::is_admin,
                    ))
                    .first::<SessionData>(conn)
                    .optional()
            })
            .await??;

        Ok(data)
    }

    async fn delete_session(&self, id: &str) -> Result<(), Self::Error> {
        let session_id = id.parse::<Uuid>().map_err(|_| Error::InvalidSessionId)?;
        let conn = self.db.get().await?;
        conn.interact(move |conn| {
            diesel::delete(db::sessions::table)
                .filter(db::sessions::id.eq(session_id))
                .execute(conn)
        })
        .await??;

        Ok(())
    }
}

/// The user attached to the current request.
#[derive(Clone, Debug, Serialize)]
pub struct UserInfo {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<SessionData> for UserInfo {
    fn from(s: SessionData) -> Self {
        UserInfo {
            user_id: s.user_id,
            name: s.name,
            email: s.email,
            is_admin: s.is_admin,
        }
    }
}

/// Extractor that requires a logged-in user.
pub struct Authenticated(pub UserInfo);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserInfo>()
            .cloned()
            .map(Authenticated)
            .ok_or(Error::Unauthenticated)
    }
}

/// Extractor that requires a logged-in administrator.
pub struct AdminUser(pub UserInfo);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Authenticated(user) = Authenticated::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(Error::NotAdmin);
        }

        Ok(AdminUser(user))
    }
}

pub fn session_manager(
    db: db::Pool,
    cookie_name: String,
    cookie_key_b64: &str,
) -> SessionManager<SessionStore> {
    let cookie_key = tower_cookies::Key::from(
        &base64::engine::general_purpose::STANDARD
            .decode(cookie_key_b64)
            .expect("cookie_key must be base64"),
    );

    SessionManager {
        store: SessionStore { db },
        cookies: SessionCookieManager {
            signing_key: cookie_key,
            cookie_name,
        },
        expire_days: 30,
    }
}

pub fn auth_layer(
    sessions: SessionManager<SessionStore>,
) -> AuthenticationLayer<SessionStore, UserInfo> {
    AuthenticationLayer::new(sessions)
}
