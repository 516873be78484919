//! What happens to a suggestion once the user acts on it.
//!
//! Accepting produces a [`MaintenanceTaskDraft`] for the task store; its
//! `source_template_id` is what suppresses the suggestion next time.
//! Rejecting produces a [`DismissedMaintenanceSuggestion`] for the dismissal
//! store.

use serde::{Deserialize, Serialize};

use super::suggestion::{DismissedMaintenanceSuggestion, ExistingTaskRef, MaintenanceSuggestion};
use super::template::{Recurrence, TaskPriority};
use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Seed for a real maintenance task created from an accepted suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTaskDraft {
    pub source_template_id: String,
    pub property_id: EntityId,
    pub space_ids: Vec<EntityId>,
    pub required_inventory_ids: Vec<EntityId>,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub tags: Vec<String>,
    pub due_date_utc: Option<Timestamp>,
    pub recurrence: Option<Recurrence>,
    pub estimated_cost: Option<f64>,
    pub labor_hours_estimate: Option<f64>,
}

impl From<&MaintenanceTaskDraft> for ExistingTaskRef {
    fn from(draft: &MaintenanceTaskDraft) -> Self {
        Self {
            source_template_id: Some(draft.source_template_id.clone()),
            property_id: draft.property_id.clone(),
            space_ids: draft.space_ids.clone(),
            required_inventory_ids: draft.required_inventory_ids.clone(),
        }
    }
}

impl MaintenanceSuggestion {
    /// Reject suggestions that cannot be linked back to a template and entity.
    pub fn validate_identity(&self) -> Result<(), CoreError> {
        if self.template_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Suggestion template_id must not be empty".to_string(),
            ));
        }
        if self.entity_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Suggestion entity_id must not be empty".to_string(),
            ));
        }
        if self.target.property_id.trim().is_empty() {
            return Err(CoreError::Validation(
                "Suggestion target.property_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the task to create when the user accepts this suggestion.
    pub fn to_task_draft(&self) -> MaintenanceTaskDraft {
        MaintenanceTaskDraft {
            source_template_id: self.template_id.clone(),
            property_id: self.target.property_id.clone(),
            space_ids: self.target.space_ids.clone(),
            required_inventory_ids: self.target.required_inventory_ids.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            tags: self.tags.clone(),
            due_date_utc: self.due_date_utc,
            recurrence: self.recurrence,
            estimated_cost: self.estimated_cost,
            labor_hours_estimate: self.labor_hours_estimate,
        }
    }
}

impl DismissedMaintenanceSuggestion {
    /// Record the user's rejection of `suggestion`.
    pub fn for_suggestion(suggestion: &MaintenanceSuggestion, dismissed_at_utc: Timestamp) -> Self {
        Self {
            template_id: suggestion.template_id.clone(),
            entity_type: suggestion.entity_type,
            entity_id: suggestion.entity_id.clone(),
            dismissed_at_utc,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;
    use crate::property::{InventoryItem, Property, Space, SpaceType};
    use crate::suggestions::engine::{suggest_maintenance_tasks, SuggestionInput};
    use crate::suggestions::template::{AppliesTo, MaintenanceTemplate, TemplateTask};

    fn property() -> Property {
        Property {
            id: "p1".to_string(),
            name: None,
            property_type: "House".to_string(),
            construction_year: None,
        }
    }

    fn template(id: &str, applies_to: AppliesTo) -> MaintenanceTemplate {
        MaintenanceTemplate {
            id: id.to_string(),
            applies_to,
            conditions: None,
            schedule: None,
            task: TemplateTask {
                title: "Flush water heater".to_string(),
                description: None,
                priority: TaskPriority::Medium,
                tags: vec!["Plumbing".to_string()],
                estimated_cost: None,
                labor_hours_estimate: Some(1.0),
            },
        }
    }

    #[test]
    fn draft_carries_template_link_and_target() {
        let p = property();
        let heater = InventoryItem {
            id: "i9".to_string(),
            property_id: "p1".to_string(),
            name: "Water heater".to_string(),
            category: None,
            purchase_date: None,
        };
        let catalog = [template(
            "flush",
            AppliesTo::Inventory {
                inventory_category_includes: vec![],
                inventory_name_includes: vec!["heater".to_string()],
            },
        )];
        let suggestion =
            suggest_maintenance_tasks(&catalog, &SuggestionInput::for_inventory(&p, &heater))
                .remove(0);

        let draft = suggestion.to_task_draft();
        assert_eq!(draft.source_template_id, "flush");
        assert_eq!(draft.property_id, "p1");
        assert!(draft.space_ids.is_empty());
        assert_eq!(draft.required_inventory_ids, ["i9"]);
        assert_eq!(draft.tags, ["Suggested", "Plumbing"]);
        assert_eq!(draft.labor_hours_estimate, Some(1.0));
    }

    #[test]
    fn accepted_suggestion_is_not_suggested_again() {
        let p = property();
        let kitchen = Space {
            id: "s1".to_string(),
            property_id: "p1".to_string(),
            name: None,
            space_type: SpaceType::Kitchen,
        };
        let catalog = [template(
            "degrease",
            AppliesTo::Space {
                space_types: vec![],
            },
        )];
        let input = SuggestionInput::for_space(&p, &kitchen);
        let first = suggest_maintenance_tasks(&catalog, &input);
        assert_eq!(first.len(), 1);

        let tasks = [ExistingTaskRef::from(&first[0].to_task_draft())];
        let second = suggest_maintenance_tasks(&catalog, &input.with_existing_tasks(&tasks));
        assert!(second.is_empty());
    }

    #[test]
    fn dismissed_suggestion_is_not_suggested_again() {
        let p = property();
        let catalog = [template(
            "gutters",
            AppliesTo::Property {
                property_types: vec![],
            },
        )];
        let input = SuggestionInput::for_property(&p);
        let first = suggest_maintenance_tasks(&catalog, &input);

        let dismissed = [DismissedMaintenanceSuggestion::for_suggestion(
            &first[0],
            Utc::now(),
        )];
        assert_eq!(dismissed[0].key(), first[0].key());
        let second = suggest_maintenance_tasks(&catalog, &input.with_dismissed(&dismissed));
        assert!(second.is_empty());
    }

    #[test]
    fn blank_identity_rejected() {
        let p = property();
        let catalog = [template(
            "gutters",
            AppliesTo::Property {
                property_types: vec![],
            },
        )];
        let mut suggestion =
            suggest_maintenance_tasks(&catalog, &SuggestionInput::for_property(&p)).remove(0);
        assert!(suggestion.validate_identity().is_ok());

        suggestion.target.property_id = " ".to_string();
        assert_matches!(suggestion.validate_identity(), Err(CoreError::Validation(_)));

        suggestion.template_id = String::new();
        assert_matches!(
            suggestion.validate_identity(),
            Err(CoreError::Validation(msg)) if msg.contains("template_id")
        );
    }
}
