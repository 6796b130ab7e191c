use std::marker::PhantomData;

use axum::{
    body::{Body, BoxBody},
    http::{Request, Response},
    response::IntoResponse,
};
use futures::future::BoxFuture;
use tower::{Layer, Service};

use crate::session::{SessionManager, SessionStore};

/// Tower layer that resolves the request's session cookie and, when it maps
/// to a live session, stores `USERDATA` in the request extensions. Requests
/// without a session pass through untouched; handlers that need a user
/// enforce that themselves.
pub struct AuthenticationLayer<SESSIONSTORE: SessionStore, USERDATA>
where
    USERDATA: From<SESSIONSTORE::SessionFetchData> + Clone + Send + Sync + 'static,
{
    pub sessions: SessionManager<SESSIONSTORE>,

    user_data_phantom: PhantomData<USERDATA>,
}

impl<SESSIONSTORE: SessionStore, USERDATA> AuthenticationLayer<SESSIONSTORE, USERDATA>
where
    USERDATA: From<SESSIONSTORE::SessionFetchData> + Clone + Send + Sync + 'static,
{
    pub fn new(session_manager: SessionManager<SESSIONSTORE>) -> Self {
        Self {
            sessions: session_manager,
            user_data_phantom: PhantomData,
        }
    }
}

impl<SESSIONSTORE: SessionStore, USERDATA> Clone for AuthenticationLayer<SESSIONSTORE, USERDATA>
where
    USERDATA: From<SESSIONSTORE::SessionFetchData> + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            user_data_phantom: PhantomData,
        }
    }
}

impl<S: Service<Request<Body>>, SESSIONSTORE: SessionStore, USERDATA> Layer<S>
    for AuthenticationLayer<SESSIONSTORE, USERDATA>
where
    SESSIONSTORE::Error: IntoResponse,
    USERDATA: From<SESSIONSTORE::SessionFetchData> + Clone + Send + Sync + 'static,
{
    type Service = Authenticator<S, SESSIONSTORE, USERDATA>;

    fn layer(&self, inner: S) -> Self::Service {
        Authenticator {
            sessions: self.sessions.clone(),
            user_data_phantom: PhantomData,
            inner,
        }
    }
}

pub struct Authenticator<S: Service<Request<Body>>, SESSIONSTORE: SessionStore, USERDATA>
where
    USERDATA: From<SESSIONSTORE::SessionFetchData>,
{
    sessions: SessionManager<SESSIONSTORE>,
    user_data_phantom: PhantomData<USERDATA>,
    inner: S,
}

impl<S, SESSIONSTORE, USERDATA> Clone for Authenticator<S, SESSIONSTORE, USERDATA>
where
    S: Service<Request<Body>> + Clone,
    SESSIONSTORE: SessionStore,
    USERDATA: From<SESSIONSTORE::SessionFetchData>,
{
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            user_data_phantom: PhantomData,
            inner: self.inner.clone(),
        }
    }
}

impl<S, SESSIONSTORE, USERDATA> Service<Request<Body>> for Authenticator<S, SESSIONSTORE, USERDATA>
where
    S: Service<Request<Body>> + Send + Clone + 'static,
    S::Future: Send + 'static,
    S::Response: IntoResponse + Send + 'static,
    SESSIONSTORE: SessionStore,
    SESSIONSTORE::Error: IntoResponse,
    USERDATA: From<SESSIONSTORE::SessionFetchData> + Clone + Send + Sync + 'static,
{
    type Response = Response<BoxBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let inner = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, inner);

        let sessions = self.sessions.clone();
        Box::pin(async move {
            match sessions.get_session(&req).await {
                Ok(Some(data)) => {
                    req.extensions_mut().insert(USERDATA::from(data));
                }
                Ok(None) => {}
                Err(e) => return Ok(e.into_response()),
            }

            Ok(inner.call(req).await?.into_response())
        })
    }
}
