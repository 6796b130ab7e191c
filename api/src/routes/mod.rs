use axum::Router;

use crate::shared_state::AppState;

pub mod applications;
pub mod committee;
pub mod health;
pub mod matches;
pub mod players;
pub mod practices;
pub mod session;
pub mod sponsors;

pub fn configure_routes(state: AppState) -> Router {
    let api = Router::new()
        .merge(health::configure())
        .merge(matches::configure())
        .merge(practices::configure())
        .merge(players::configure())
        .merge(committee::configure())
        .merge(sponsors::configure())
        .merge(applications::configure())
        .merge(session::configure());

    Router::new().nest("/api", api).with_state(state)
}
