//! The `{ "data": ... }` body every successful maintenance endpoint returns.
//!
//! Errors use a different shape (`{ "error", "code" }`, see [`crate::error`]),
//! so clients can branch on the presence of `data`.

use serde::Serialize;

/// Success envelope wrapping templates, suggestions, drafts, or dismissals.
///
/// ```ignore
/// let suggestions = suggest_maintenance_tasks(&state.catalog, &input);
/// Json(DataResponse { data: suggestions })
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
