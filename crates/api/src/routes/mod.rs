pub mod health;
pub mod maintenance;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /maintenance/templates                 list catalog (?entity_type)
/// /maintenance/templates/{id}            get one template
/// /maintenance/suggestions               compute suggestions (POST)
/// /maintenance/suggestions/accept        suggestion -> task draft (POST)
/// /maintenance/suggestions/dismiss       suggestion -> dismissal (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/maintenance", maintenance::router())
}
