use axum::{extract::State, routing::get, Json, Router};
use diesel::prelude::*;

use pavilion_db::PoolExt;

use crate::{shared_state::AppState, Error};

async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, Error> {
    state
        .db
        .interact(|conn| {
            diesel::sql_query("SELECT 1")
                .execute(conn)
                .map_err(Error::from)
        })
        .await?;

    Ok(Json(serde_json::json!({ "state": "ok" })))
}

pub fn configure() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
