//! Property, space, and inventory item shapes consumed by the suggestion engine.
//!
//! These are the minimal views the entity modules must supply. The full CRUD
//! entities live with their owning stores; only the fields that drive
//! template matching and age computation are modelled here.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// A property (house, apartment, cabin, ...). Every suggestion target belongs
/// to exactly one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form type label, e.g. `"House"` or `"Apartment"`.
    pub property_type: String,
    /// Calendar year of construction, not a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Space
// ---------------------------------------------------------------------------

/// Room or area category of a [`Space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceType {
    Bathroom,
    Kitchen,
    Bedroom,
    LivingRoom,
    DiningRoom,
    Office,
    Laundry,
    Garage,
    Basement,
    Attic,
    Hallway,
    Outdoor,
    Storage,
    Other,
}

impl SpaceType {
    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::Bedroom => "Bedroom",
            Self::LivingRoom => "LivingRoom",
            Self::DiningRoom => "DiningRoom",
            Self::Office => "Office",
            Self::Laundry => "Laundry",
            Self::Garage => "Garage",
            Self::Basement => "Basement",
            Self::Attic => "Attic",
            Self::Hallway => "Hallway",
            Self::Outdoor => "Outdoor",
            Self::Storage => "Storage",
            Self::Other => "Other",
        }
    }

    /// Lowercase, space-separated label for prose (`LivingRoom` -> `living room`).
    pub fn label(&self) -> String {
        let mut label = String::new();
        for (i, ch) in self.as_str().chars().enumerate() {
            if ch.is_uppercase() && i > 0 {
                label.push(' ');
            }
            label.extend(ch.to_lowercase());
        }
        label
    }
}

/// A room or area within a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: EntityId,
    pub property_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub space_type: SpaceType,
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// A tracked item (appliance, fixture, furniture) belonging to a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: EntityId,
    pub property_id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Raw purchase date as entered (RFC 3339 or `YYYY-MM-DD`). Kept
    /// unparsed so that garbage input degrades to an unknown age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
}
