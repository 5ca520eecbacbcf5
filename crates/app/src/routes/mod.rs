mod banks;
mod health;
mod sessions;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub use sessions::{WordInput, WordOutput, WordResult};

/// All HTTP routes. Middleware layers are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/banks", get(banks::list_banks))
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/:id",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/word", post(sessions::submit_word))
        .with_state(state)
}
