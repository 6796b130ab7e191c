use async_trait::async_trait;
use axum::{body::Body, http::Request};
use chrono::{DateTime, Duration, Utc};
use tower_cookies::{Cookie, Cookies, Key};

/// Persistence for sessions. The application supplies the backing table;
/// this crate only dictates the shape of the operations.
#[async_trait]
pub trait SessionStore: Clone + Send + Sync + 'static {
    type UserId: Send;
    type SessionFetchData: Send;
    type Error: Send;

    /// Create a session row and return its ID in string form.
    async fn create_session(
        &self,
        user_id: Self::UserId,
        expires: DateTime<Utc>,
    ) -> Result<String, Self::Error>;

    /// Look up an unexpired session. A missing or expired session is
    /// `Ok(None)`, not an error.
    async fn get_session(&self, id: &str) -> Result<Option<Self::SessionFetchData>, Self::Error>;

    async fn delete_session(&self, id: &str) -> Result<(), Self::Error>;
}

/// Reads and writes the signed session cookie.
#[derive(Clone)]
pub struct SessionCookieManager {
    pub signing_key: Key,
    pub cookie_name: String,
}

impl SessionCookieManager {
    pub fn get_session_cookie(&self, cookies: &Cookies) -> Option<String> {
        cookies
            .signed(&self.signing_key)
            .get(&self.cookie_name)
            .map(|c| c.value().to_string())
    }

    pub fn set_session_cookie(&self, cookies: &Cookies, value: String) {
        let cookie = Cookie::build(self.cookie_name.clone(), value)
            .http_only(true)
            .same_site(tower_cookies::cookie::SameSite::Lax)
            .path("/")
            .finish();
        cookies.signed(&self.signing_key).add(cookie);
    }

    pub fn clear_session_cookie(&self, cookies: &Cookies) {
        let mut cookie = Cookie::new(self.cookie_name.clone(), "");
        cookie.set_path("/");
        cookies.signed(&self.signing_key).remove(cookie);
    }
}

#[derive(Clone)]
pub struct SessionManager<STORE: SessionStore> {
    pub store: STORE,
    pub cookies: SessionCookieManager,
    pub expire_days: i64,
}

impl<STORE: SessionStore> SessionManager<STORE> {
    /// Create a session for the user and set the cookie on the response.
    pub async fn create_session(
        &self,
        cookies: &Cookies,
        user_id: STORE::UserId,
    ) -> Result<(), STORE::Error> {
        let expires = Utc::now() + Duration::days(self.expire_days);
        let session_id = self.store.create_session(user_id, expires).await?;
        self.cookies.set_session_cookie(cookies, session_id);
        Ok(())
    }

    /// Resolve the session referenced by the request's cookie, if any.
    pub async fn get_session(
        &self,
        req: &Request<Body>,
    ) -> Result<Option<STORE::SessionFetchData>, STORE::Error> {
        // The Cookies extension is inserted by CookieManagerLayer, which
        // must run before this.
        let Some(cookies) = req.extensions().get::<Cookies>() else {
            return Ok(None);
        };

        let Some(session_id) = self.cookies.get_session_cookie(cookies) else {
            return Ok(None);
        };

        self.store.get_session(&session_id).await
    }

    /// Delete the session referenced by the cookie and clear the cookie.
    pub async fn delete_session(&self, cookies: &Cookies) -> Result<(), STORE::Error> {
        if let Some(session_id) = self.cookies.get_session_cookie(cookies) {
            self.store.delete_session(&session_id).await?;
        }

        self.cookies.clear_session_cookie(cookies);
        Ok(())
    }
}
