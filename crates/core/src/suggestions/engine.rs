//! Suggestion engine: pure logic, no database access.
//!
//! Given one target entity and the caller's dedup collections, filters the
//! catalog down to applicable, undismissed, unfulfilled templates and
//! projects each survivor into a [`MaintenanceSuggestion`]. Output follows
//! catalog order.

use chrono::{Duration, Utc};

use super::matching::{
    applies_to_entity, is_dismissed, is_fulfilled, satisfies_age_conditions, TargetEntity,
};
use super::reason::build_reason;
use super::suggestion::{
    merge_tags, DismissedMaintenanceSuggestion, ExistingTaskRef, MaintenanceSuggestion,
    SuggestionSource, SuggestionTarget,
};
use super::template::{EntityType, MaintenanceTemplate};
use crate::property::{InventoryItem, Property, Space};
use crate::types::Timestamp;

/// Everything the engine needs for one call. All collections are borrowed
/// and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    /// Clock override; `None` means the current time.
    pub now: Option<Timestamp>,
    pub entity_type: EntityType,
    /// Owning property, required for every entity type.
    pub property: &'a Property,
    pub space: Option<&'a Space>,
    pub inventory_item: Option<&'a InventoryItem>,
    pub existing_tasks: &'a [ExistingTaskRef],
    pub dismissed: &'a [DismissedMaintenanceSuggestion],
}

impl<'a> SuggestionInput<'a> {
    pub fn for_property(property: &'a Property) -> Self {
        Self {
            now: None,
            entity_type: EntityType::Property,
            property,
            space: None,
            inventory_item: None,
            existing_tasks: &[],
            dismissed: &[],
        }
    }

    pub fn for_space(property: &'a Property, space: &'a Space) -> Self {
        Self {
            entity_type: EntityType::Space,
            space: Some(space),
            ..Self::for_property(property)
        }
    }

    pub fn for_inventory(property: &'a Property, item: &'a InventoryItem) -> Self {
        Self {
            entity_type: EntityType::Inventory,
            inventory_item: Some(item),
            ..Self::for_property(property)
        }
    }

    pub fn with_now(self, now: Timestamp) -> Self {
        Self {
            now: Some(now),
            ..self
        }
    }

    pub fn with_existing_tasks(self, existing_tasks: &'a [ExistingTaskRef]) -> Self {
        Self {
            existing_tasks,
            ..self
        }
    }

    pub fn with_dismissed(self, dismissed: &'a [DismissedMaintenanceSuggestion]) -> Self {
        Self { dismissed, ..self }
    }
}

/// Evaluate `templates` against the entity described by `input`.
///
/// Returns an empty list when the entity named by `input.entity_type` was not
/// supplied. Never fails.
pub fn suggest_maintenance_tasks(
    templates: &[MaintenanceTemplate],
    input: &SuggestionInput<'_>,
) -> Vec<MaintenanceSuggestion> {
    let Some(entity) = TargetEntity::resolve(
        input.entity_type,
        input.property,
        input.space,
        input.inventory_item,
    ) else {
        return Vec::new();
    };

    let now = input.now.unwrap_or_else(Utc::now);
    let age = entity.age_years(now);

    templates
        .iter()
        .filter(|t| applies_to_entity(&t.applies_to, &entity))
        .filter(|t| satisfies_age_conditions(t.conditions.as_ref(), age))
        .filter(|t| !is_dismissed(input.dismissed, &t.id, &entity))
        .filter(|t| !is_fulfilled(input.existing_tasks, t, &entity))
        .map(|t| project(t, input.property, &entity, age, now))
        .collect()
}

fn project(
    template: &MaintenanceTemplate,
    property: &Property,
    entity: &TargetEntity<'_>,
    age: Option<f64>,
    now: Timestamp,
) -> MaintenanceSuggestion {
    let due_date_utc = template
        .due_in_days()
        .and_then(Duration::try_days)
        .and_then(|offset| now.checked_add_signed(offset));

    let target = SuggestionTarget {
        property_id: property.id.clone(),
        space_ids: match entity {
            TargetEntity::Space(space) => vec![space.id.clone()],
            _ => Vec::new(),
        },
        required_inventory_ids: match entity {
            TargetEntity::Inventory(item) => vec![item.id.clone()],
            _ => Vec::new(),
        },
    };

    MaintenanceSuggestion {
        source: SuggestionSource::Template,
        template_id: template.id.clone(),
        entity_type: entity.entity_type(),
        entity_id: entity.id().to_string(),
        title: template.task.title.clone(),
        description: template.task.description.clone(),
        reason: build_reason(template, entity, age),
        due_date_utc,
        recurrence: template.recurrence(),
        priority: template.task.priority,
        tags: merge_tags(&template.task.tags),
        estimated_cost: template.task.estimated_cost,
        labor_hours_estimate: template.task.labor_hours_estimate,
        target,
    }
}
