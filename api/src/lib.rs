pub mod auth;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod obfuscate_errors;
pub mod panic_handler;
pub mod routes;
pub mod shared_state;
pub mod tracing_config;

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{routing::IntoMakeService, Router};
use hyper::server::conn::AddrIncoming;
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{event, Level};

pub use error::{Error, Result};

use crate::{
    auth::{auth_layer, session_manager},
    obfuscate_errors::ObfuscateErrorLayer,
    shared_state::InnerState,
};

pub struct Server {
    pub host: String,
    pub port: u16,
    pub server: axum::Server<AddrIncoming, IntoMakeService<Router>>,
}

pub async fn run_server(config: config::Config) -> Result<Server, anyhow::Error> {
    let db = pavilion_db::connect(config.database_url.as_str(), 32)?;

    let production = config.env != "development" && !cfg!(debug_assertions);

    let logo_provider = match &config.logo_s3_bucket {
        Some(bucket) => pavilion_storage::Provider::S3 {
            bucket: bucket.clone(),
        },
        None => pavilion_storage::Provider::Local {
            path: config.logo_local_dir.clone(),
        },
    };
    let logos = logo_provider.create_operator(&config.logo_url_base)?;

    let sessions = session_manager(
        db.clone(),
        config.session_cookie_name.clone(),
        &config.cookie_key,
    );

    let state = Arc::new(InnerState {
        production,
        db,
        logos,
        sessions: sessions.clone(),
    });

    let app = routes::configure_routes(state).layer(
        // Global middlewares
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(move |err| {
                panic_handler::handle_panic(production, err)
            }))
            .layer(ObfuscateErrorLayer::new(production))
            .compression()
            .decompression()
            .layer(CookieManagerLayer::new())
            .set_x_request_id(MakeRequestUuid)
            .propagate_x_request_id()
            .layer(auth_layer(sessions))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO)),
            )
            .into_inner(),
    );

    let bind_ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((bind_ip, config.port));
    let builder = axum::Server::bind(&addr);

    let server = builder.serve(app.into_make_service());
    // Asking the listener gives the real port when 0 was requested.
    let port = server.local_addr().port();
    event!(Level::INFO, "Listening on {}:{}", config.host, port);

    Ok(Server {
        host: config.host,
        port,
        server,
    })
}
