//! Handlers for the `/maintenance` resource.
//!
//! Exposes the template catalog, suggestion computation, and the two
//! conversions the UI performs on a suggestion (accept into a task draft,
//! dismiss into a dismissal record). Nothing here persists; the caller owns
//! the task and dismissal stores.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use hearth_core::error::CoreError;
use hearth_core::property::{InventoryItem, Property, Space};
use hearth_core::suggestions::catalog::{find_template, templates_for};
use hearth_core::suggestions::{
    suggest_maintenance_tasks, DismissedMaintenanceSuggestion, EntityType, ExistingTaskRef,
    MaintenanceSuggestion, MaintenanceTaskDraft, MaintenanceTemplate, SuggestionInput,
};
use hearth_core::types::Timestamp;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ── Catalog ──────────────────────────────────────────────────────────

/// Query parameters for listing templates.
#[derive(Debug, Deserialize)]
pub struct ListTemplatesParams {
    pub entity_type: Option<EntityType>,
}

/// GET /api/v1/maintenance/templates?entity_type=X
///
/// List the catalog in evaluation order, optionally narrowed to one entity type.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<ListTemplatesParams>,
) -> Json<DataResponse<Vec<MaintenanceTemplate>>> {
    let templates = match params.entity_type {
        Some(entity_type) => templates_for(&state.catalog, entity_type)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.as_ref().clone(),
    };
    Json(DataResponse { data: templates })
}

/// GET /api/v1/maintenance/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<MaintenanceTemplate>>> {
    let template = find_template(&state.catalog, &id)
        .cloned()
        .ok_or(CoreError::NotFound {
            entity: "MaintenanceTemplate",
            id,
        })?;
    Ok(Json(DataResponse { data: template }))
}

// ── Suggestions ──────────────────────────────────────────────────────

/// Request body for computing suggestions.
///
/// `space` / `inventory_item` must be present for the matching
/// `entity_type`; when missing the response is simply empty.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Clock override; defaults to server time.
    pub now: Option<Timestamp>,
    pub entity_type: EntityType,
    pub property: Property,
    pub space: Option<Space>,
    pub inventory_item: Option<InventoryItem>,
    #[serde(default)]
    pub existing_tasks: Vec<ExistingTaskRef>,
    #[serde(default)]
    pub dismissed: Vec<DismissedMaintenanceSuggestion>,
}

/// POST /api/v1/maintenance/suggestions
///
/// Evaluate the catalog against one entity.
pub async fn suggest(
    State(state): State<AppState>,
    Json(input): Json<SuggestRequest>,
) -> Json<DataResponse<Vec<MaintenanceSuggestion>>> {
    let engine_input = SuggestionInput {
        now: Some(input.now.unwrap_or_else(Utc::now)),
        entity_type: input.entity_type,
        property: &input.property,
        space: input.space.as_ref(),
        inventory_item: input.inventory_item.as_ref(),
        existing_tasks: &input.existing_tasks,
        dismissed: &input.dismissed,
    };

    let suggestions = suggest_maintenance_tasks(&state.catalog, &engine_input);

    tracing::debug!(
        entity_type = input.entity_type.as_str(),
        property_id = %input.property.id,
        existing_tasks = input.existing_tasks.len(),
        dismissed = input.dismissed.len(),
        suggestions = suggestions.len(),
        "Computed maintenance suggestions"
    );

    Json(DataResponse { data: suggestions })
}

/// POST /api/v1/maintenance/suggestions/accept
///
/// Convert a suggestion into the task the caller should create. Returns 201.
pub async fn accept_suggestion(
    Json(suggestion): Json<MaintenanceSuggestion>,
) -> AppResult<(StatusCode, Json<DataResponse<MaintenanceTaskDraft>>)> {
    suggestion.validate_identity()?;
    let draft = suggestion.to_task_draft();

    tracing::info!(
        template_id = %draft.source_template_id,
        property_id = %draft.property_id,
        "Suggestion accepted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}

/// Request body for dismissing a suggestion.
#[derive(Debug, Deserialize)]
pub struct DismissRequest {
    pub suggestion: MaintenanceSuggestion,
    /// Defaults to server time.
    pub dismissed_at_utc: Option<Timestamp>,
}

/// POST /api/v1/maintenance/suggestions/dismiss
///
/// Convert a suggestion into the dismissal record the caller should append.
/// Returns 201.
pub async fn dismiss_suggestion(
    Json(input): Json<DismissRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<DismissedMaintenanceSuggestion>>)> {
    input.suggestion.validate_identity()?;
    let dismissal = DismissedMaintenanceSuggestion::for_suggestion(
        &input.suggestion,
        input.dismissed_at_utc.unwrap_or_else(Utc::now),
    );

    tracing::info!(
        template_id = %dismissal.template_id,
        entity_type = dismissal.entity_type.as_str(),
        entity_id = %dismissal.entity_id,
        "Suggestion dismissed"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: dismissal })))
}
