//! Route definitions for the `/maintenance` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Routes mounted at `/maintenance`.
///
/// ```text
/// GET    /templates              -> list_templates   (?entity_type)
/// GET    /templates/{id}         -> get_template
/// POST   /suggestions            -> suggest
/// POST   /suggestions/accept     -> accept_suggestion
/// POST   /suggestions/dismiss    -> dismiss_suggestion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(maintenance::list_templates))
        .route("/templates/{id}", get(maintenance::get_template))
        .route("/suggestions", post(maintenance::suggest))
        .route("/suggestions/accept", post(maintenance::accept_suggestion))
        .route("/suggestions/dismiss", post(maintenance::dismiss_suggestion))
}
