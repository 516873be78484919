//! Maintenance template types.

use serde::{Deserialize, Serialize};

use crate::property::SpaceType;

// ---------------------------------------------------------------------------
// Entity type
// ---------------------------------------------------------------------------

/// The kind of entity a template targets and a suggestion is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Property,
    Space,
    Inventory,
}

impl EntityType {
    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Space => "space",
            Self::Inventory => "inventory",
        }
    }
}

// ---------------------------------------------------------------------------
// Applicability
// ---------------------------------------------------------------------------

/// Which entities a template applies to, with filters scoped to that entity
/// type. An empty filter list matches every entity of the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity_type", rename_all = "lowercase")]
pub enum AppliesTo {
    Property {
        /// Matched case-insensitively against `Property::property_type`.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        property_types: Vec<String>,
    },
    Space {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        space_types: Vec<SpaceType>,
    },
    Inventory {
        /// Case-insensitive substrings of the item category.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        inventory_category_includes: Vec<String>,
        /// Case-insensitive substrings of the item name.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        inventory_name_includes: Vec<String>,
    },
}

impl AppliesTo {
    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Property { .. } => EntityType::Property,
            Self::Space { .. } => EntityType::Space,
            Self::Inventory { .. } => EntityType::Inventory,
        }
    }
}

/// Age gates, in years. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age_years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_years: Option<f64>,
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl RecurrenceFrequency {
    /// Adverb form used when the interval is 1 (`"quarterly"`).
    pub fn adverb(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Singular unit noun used for longer intervals (`"every 2 years"`).
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Quarterly => "quarter",
            Self::Yearly => "year",
        }
    }
}

fn default_interval() -> u32 {
    1
}

/// How often the suggested task should repeat once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub frequency: RecurrenceFrequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
}

impl Recurrence {
    /// Human-readable cadence, e.g. `"quarterly"` or `"every 2 years"`.
    pub fn cadence(&self) -> String {
        if self.interval <= 1 {
            self.frequency.adverb().to_string()
        } else {
            format!("every {} {}s", self.interval, self.frequency.unit())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Days from "now" until the suggested task is due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_in_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

// ---------------------------------------------------------------------------
// Task payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// The task a template proposes when it matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_hours_estimate: Option<f64>,
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// A static rule describing when and what maintenance to suggest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTemplate {
    /// Stable identifier. Written back onto created tasks as
    /// `source_template_id` and used as the dismissal key.
    pub id: String,
    pub applies_to: AppliesTo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<AgeConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    pub task: TemplateTask,
}

impl MaintenanceTemplate {
    pub fn due_in_days(&self) -> Option<i64> {
        self.schedule.as_ref().and_then(|s| s.due_in_days)
    }

    pub fn recurrence(&self) -> Option<Recurrence> {
        self.schedule.as_ref().and_then(|s| s.recurrence)
    }
}
