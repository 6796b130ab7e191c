use std::sync::Arc;

use pavilion_auth::session::SessionManager;

use crate::auth::SessionStore;

pub struct InnerState {
    pub production: bool,
    pub db: pavilion_db::Pool,

    /// Object store holding sponsor logos.
    pub logos: pavilion_storage::Operator,

    pub sessions: SessionManager<SessionStore>,
}

pub type AppState = Arc<InnerState>;
