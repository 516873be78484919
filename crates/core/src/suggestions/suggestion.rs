//! Suggestion output and the dedup inputs (existing tasks, dismissals).

use serde::{Deserialize, Serialize};

use super::template::{EntityType, Recurrence, TaskPriority};
use crate::types::{EntityId, Timestamp};

/// Tag prepended to every suggestion.
pub const SUGGESTED_TAG: &str = "Suggested";

/// Composite identity of a (template, entity) pairing.
///
/// Compared field by field, so ids containing separators cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuggestionKey {
    pub template_id: String,
    pub entity_type: EntityType,
    pub entity_id: EntityId,
}

// ---------------------------------------------------------------------------
// Dedup inputs
// ---------------------------------------------------------------------------

/// A user's rejection of a suggestion. Permanently suppresses the template
/// for that one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DismissedMaintenanceSuggestion {
    pub template_id: String,
    pub entity_type: EntityType,
    pub entity_id: EntityId,
    pub dismissed_at_utc: Timestamp,
}

impl DismissedMaintenanceSuggestion {
    pub fn key(&self) -> SuggestionKey {
        SuggestionKey {
            template_id: self.template_id.clone(),
            entity_type: self.entity_type,
            entity_id: self.entity_id.clone(),
        }
    }

    /// Whether this dismissal covers the given pairing.
    pub fn matches(&self, template_id: &str, entity_type: EntityType, entity_id: &str) -> bool {
        self.template_id == template_id
            && self.entity_type == entity_type
            && self.entity_id == entity_id
    }
}

/// The slice of a maintenance task needed to detect already-fulfilled
/// templates. Task status is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingTaskRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_template_id: Option<String>,
    pub property_id: EntityId,
    #[serde(default)]
    pub space_ids: Vec<EntityId>,
    #[serde(default)]
    pub required_inventory_ids: Vec<EntityId>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Where a suggestion came from. Only catalog templates exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    #[default]
    Template,
}

/// How to scope a real task created from the suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionTarget {
    pub property_id: EntityId,
    #[serde(default)]
    pub space_ids: Vec<EntityId>,
    #[serde(default)]
    pub required_inventory_ids: Vec<EntityId>,
}

/// A transient recommendation produced by matching one template against one
/// entity. Never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSuggestion {
    #[serde(default)]
    pub source: SuggestionSource,
    pub template_id: String,
    pub entity_type: EntityType,
    pub entity_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub due_date_utc: Option<Timestamp>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub labor_hours_estimate: Option<f64>,
    pub target: SuggestionTarget,
}

impl MaintenanceSuggestion {
    pub fn key(&self) -> SuggestionKey {
        SuggestionKey {
            template_id: self.template_id.clone(),
            entity_type: self.entity_type,
            entity_id: self.entity_id.clone(),
        }
    }
}

/// `"Suggested"` followed by `template_tags` in order, without duplicates.
pub fn merge_tags(template_tags: &[String]) -> Vec<String> {
    let mut tags = vec![SUGGESTED_TAG.to_string()];
    for tag in template_tags {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn suggested_tag_comes_first() {
        let tags = merge_tags(&strings(&["Plumbing", "Safety"]));
        assert_eq!(tags, strings(&["Suggested", "Plumbing", "Safety"]));
    }

    #[test]
    fn duplicate_tags_removed() {
        let tags = merge_tags(&strings(&["Roof", "Suggested", "Roof"]));
        assert_eq!(tags, strings(&["Suggested", "Roof"]));
    }

    #[test]
    fn no_template_tags_yields_only_suggested() {
        assert_eq!(merge_tags(&[]), strings(&["Suggested"]));
    }

    #[test]
    fn separator_characters_do_not_collide() {
        let dismissal = DismissedMaintenanceSuggestion {
            template_id: "a::space".to_string(),
            entity_type: EntityType::Space,
            entity_id: "b".to_string(),
            dismissed_at_utc: chrono::Utc::now(),
        };
        assert!(dismissal.matches("a::space", EntityType::Space, "b"));
        assert!(!dismissal.matches("a", EntityType::Space, "space::b"));
    }

    #[test]
    fn existing_task_lists_default_to_empty() {
        let task: ExistingTaskRef =
            serde_json::from_str(r#"{"source_template_id":"t1","property_id":"p1"}"#).unwrap();
        assert!(task.space_ids.is_empty());
        assert!(task.required_inventory_ids.is_empty());
    }

    #[test]
    fn source_serializes_as_template() {
        assert_eq!(
            serde_json::to_string(&SuggestionSource::Template).unwrap(),
            "\"template\""
        );
    }
}
