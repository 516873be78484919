//! Template filters: applicability, age gates, dismissal, and fulfillment.
//!
//! Every function here is a pure predicate over borrowed inputs.

use super::age::{inventory_age_years, property_age_years};
use super::suggestion::{DismissedMaintenanceSuggestion, ExistingTaskRef};
use super::template::{AgeConditions, AppliesTo, EntityType, MaintenanceTemplate};
use crate::property::{InventoryItem, Property, Space};
use crate::types::Timestamp;

/// The concrete entity a suggestion run is evaluated against.
#[derive(Debug, Clone, Copy)]
pub enum TargetEntity<'a> {
    Property(&'a Property),
    Space(&'a Space),
    Inventory(&'a InventoryItem),
}

impl<'a> TargetEntity<'a> {
    /// Pick the entity named by `entity_type`, or `None` when the caller did
    /// not supply it.
    pub fn resolve(
        entity_type: EntityType,
        property: &'a Property,
        space: Option<&'a Space>,
        inventory_item: Option<&'a InventoryItem>,
    ) -> Option<Self> {
        match entity_type {
            EntityType::Property => Some(Self::Property(property)),
            EntityType::Space => space.map(Self::Space),
            EntityType::Inventory => inventory_item.map(Self::Inventory),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Property(_) => EntityType::Property,
            Self::Space(_) => EntityType::Space,
            Self::Inventory(_) => EntityType::Inventory,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            Self::Property(p) => &p.id,
            Self::Space(s) => &s.id,
            Self::Inventory(i) => &i.id,
        }
    }

    /// Age in years; spaces never have one.
    pub fn age_years(&self, now: Timestamp) -> Option<f64> {
        match self {
            Self::Property(p) => property_age_years(p.construction_year, now),
            Self::Space(_) => None,
            Self::Inventory(i) => inventory_age_years(i.purchase_date.as_deref(), now),
        }
    }
}

// ---------------------------------------------------------------------------
// Applicability
// ---------------------------------------------------------------------------

/// Whether the template's type-scoped filters accept the entity.
pub fn applies_to_entity(applies_to: &AppliesTo, entity: &TargetEntity<'_>) -> bool {
    match (applies_to, entity) {
        (AppliesTo::Property { property_types }, TargetEntity::Property(property)) => {
            property_types.is_empty()
                || property_types
                    .iter()
                    .any(|t| t.to_lowercase() == property.property_type.to_lowercase())
        }
        (AppliesTo::Space { space_types }, TargetEntity::Space(space)) => {
            space_types.is_empty() || space_types.contains(&space.space_type)
        }
        (
            AppliesTo::Inventory {
                inventory_category_includes,
                inventory_name_includes,
            },
            TargetEntity::Inventory(item),
        ) => {
            let category_ok = inventory_category_includes.is_empty()
                || item
                    .category
                    .as_deref()
                    .is_some_and(|category| contains_any(category, inventory_category_includes));
            let name_ok = inventory_name_includes.is_empty()
                || contains_any(&item.name, inventory_name_includes);
            category_ok && name_ok
        }
        _ => false,
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

// ---------------------------------------------------------------------------
// Age gates
// ---------------------------------------------------------------------------

/// Unknown age fails a minimum but passes a maximum.
pub fn satisfies_age_conditions(conditions: Option<&AgeConditions>, age: Option<f64>) -> bool {
    let Some(conditions) = conditions else {
        return true;
    };
    if let Some(min) = conditions.min_age_years {
        match age {
            None => return false,
            Some(age) if age < min => return false,
            Some(_) => {}
        }
    }
    if let (Some(max), Some(age)) = (conditions.max_age_years, age) {
        if age > max {
            return false;
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Dedup
// ---------------------------------------------------------------------------

pub fn is_dismissed(
    dismissed: &[DismissedMaintenanceSuggestion],
    template_id: &str,
    entity: &TargetEntity<'_>,
) -> bool {
    dismissed
        .iter()
        .any(|d| d.matches(template_id, entity.entity_type(), entity.id()))
}

/// Whether a task generated from this template already covers the entity.
///
/// Property suggestions are fulfilled by a property-wide task (no spaces);
/// space and inventory suggestions by a task scoped to that space or item.
pub fn is_fulfilled(
    existing_tasks: &[ExistingTaskRef],
    template: &MaintenanceTemplate,
    entity: &TargetEntity<'_>,
) -> bool {
    existing_tasks
        .iter()
        .filter(|task| task.source_template_id.as_deref() == Some(template.id.as_str()))
        .any(|task| match entity {
            TargetEntity::Property(_) => task.space_ids.is_empty(),
            TargetEntity::Space(space) => task.space_ids.iter().any(|id| *id == space.id),
            TargetEntity::Inventory(item) => {
                task.required_inventory_ids.iter().any(|id| *id == item.id)
            }
        })
}
