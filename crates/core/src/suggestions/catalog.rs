//! Maintenance template catalog: the built-in templates, a JSON loader for
//! externally supplied catalogs, and authoring checks.
//!
//! The engine never validates templates itself. A template that is badly
//! authored simply fails to match, so [`validate_catalog`] is run by tests
//! and once at service startup.

use std::collections::HashSet;
use std::path::Path;

use super::template::{
    AgeConditions, AppliesTo, EntityType, MaintenanceTemplate, Recurrence, RecurrenceFrequency,
    Schedule, TaskPriority, TemplateTask,
};
use crate::error::CoreError;
use crate::property::SpaceType;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Find a template by id.
pub fn find_template<'a>(
    catalog: &'a [MaintenanceTemplate],
    id: &str,
) -> Option<&'a MaintenanceTemplate> {
    catalog.iter().find(|t| t.id == id)
}

/// Templates targeting `entity_type`, in catalog order.
pub fn templates_for(
    catalog: &[MaintenanceTemplate],
    entity_type: EntityType,
) -> Vec<&MaintenanceTemplate> {
    catalog
        .iter()
        .filter(|t| t.applies_to.entity_type() == entity_type)
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check catalog authoring invariants. Returns the first problem found.
pub fn validate_catalog(catalog: &[MaintenanceTemplate]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for template in catalog {
        validate_template(template)?;
        if !seen.insert(template.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate template id '{}'",
                template.id
            )));
        }
    }
    Ok(())
}

/// Check a single template in isolation.
pub fn validate_template(template: &MaintenanceTemplate) -> Result<(), CoreError> {
    let id = &template.id;
    if id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Template id must not be empty".to_string(),
        ));
    }
    if template.task.title.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Template '{id}' has an empty task title"
        )));
    }

    if let Some(AgeConditions {
        min_age_years,
        max_age_years,
    }) = &template.conditions
    {
        for bound in [min_age_years, max_age_years].into_iter().flatten() {
            if !bound.is_finite() || *bound < 0.0 {
                return Err(CoreError::Validation(format!(
                    "Template '{id}' has an invalid age bound {bound}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (min_age_years, max_age_years) {
            if min > max {
                return Err(CoreError::Validation(format!(
                    "Template '{id}' has min_age_years {min} greater than max_age_years {max}"
                )));
            }
        }
    }

    if let Some(days) = template.due_in_days() {
        if days < 0 {
            return Err(CoreError::Validation(format!(
                "Template '{id}' has negative due_in_days {days}"
            )));
        }
    }
    if let Some(recurrence) = template.recurrence() {
        if recurrence.interval == 0 {
            return Err(CoreError::Validation(format!(
                "Template '{id}' has a recurrence interval of 0"
            )));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a JSON array of templates and validate it.
pub fn parse_catalog(json: &str) -> Result<Vec<MaintenanceTemplate>, CoreError> {
    let catalog: Vec<MaintenanceTemplate> = serde_json::from_str(json)
        .map_err(|e| CoreError::Catalog(format!("Invalid catalog JSON: {e}")))?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Read and validate a catalog file.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<MaintenanceTemplate>, CoreError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        CoreError::Catalog(format!("Failed to read catalog {}: {e}", path.display()))
    })?;
    parse_catalog(&json)
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

fn task(title: &str, description: &str, priority: TaskPriority, tags: &[&str]) -> TemplateTask {
    TemplateTask {
        title: title.to_string(),
        description: Some(description.to_string()),
        priority,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        estimated_cost: None,
        labor_hours_estimate: None,
    }
}

fn every(frequency: RecurrenceFrequency, due_in_days: i64) -> Option<Schedule> {
    Some(Schedule {
        due_in_days: Some(due_in_days),
        recurrence: Some(Recurrence {
            frequency,
            interval: 1,
        }),
    })
}

fn once(due_in_days: i64) -> Option<Schedule> {
    Some(Schedule {
        due_in_days: Some(due_in_days),
        recurrence: None,
    })
}

fn older_than(years: f64) -> Option<AgeConditions> {
    Some(AgeConditions {
        min_age_years: Some(years),
        max_age_years: None,
    })
}

fn property_types(types: &[&str]) -> AppliesTo {
    AppliesTo::Property {
        property_types: types.iter().map(|t| t.to_string()).collect(),
    }
}

fn inventory(categories: &[&str], names: &[&str]) -> AppliesTo {
    AppliesTo::Inventory {
        inventory_category_includes: categories.iter().map(|c| c.to_string()).collect(),
        inventory_name_includes: names.iter().map(|n| n.to_string()).collect(),
    }
}

/// The built-in template catalog, in evaluation order.
pub fn default_catalog() -> Vec<MaintenanceTemplate> {
    use RecurrenceFrequency::{Monthly, Quarterly, Yearly};
    use TaskPriority::{High, Low, Medium};

    vec![
        // -- Property ---------------------------------------------------------
        MaintenanceTemplate {
            id: "property-roof-inspection".to_string(),
            applies_to: property_types(&["House", "Cabin", "Townhouse"]),
            conditions: older_than(5.0),
            schedule: every(Yearly, 30),
            task: TemplateTask {
                estimated_cost: Some(250.0),
                labor_hours_estimate: Some(2.0),
                ..task(
                    "Inspect roof",
                    "Check shingles, flashing and seals for damage or wear.",
                    High,
                    &["Roof", "Exterior"],
                )
            },
        },
        MaintenanceTemplate {
            id: "property-gutter-cleaning".to_string(),
            applies_to: property_types(&["House", "Cabin", "Townhouse"]),
            conditions: None,
            schedule: every(Yearly, 60),
            task: TemplateTask {
                labor_hours_estimate: Some(3.0),
                ..task(
                    "Clean gutters and downspouts",
                    "Remove leaves and debris, confirm downspouts drain away from the foundation.",
                    Medium,
                    &["Exterior"],
                )
            },
        },
        MaintenanceTemplate {
            id: "property-smoke-detector-test".to_string(),
            applies_to: property_types(&[]),
            conditions: None,
            schedule: every(Monthly, 7),
            task: task(
                "Test smoke and CO detectors",
                "Press the test button on every detector and replace weak batteries.",
                High,
                &["Safety"],
            ),
        },
        MaintenanceTemplate {
            id: "property-electrical-inspection".to_string(),
            applies_to: property_types(&[]),
            conditions: older_than(25.0),
            schedule: once(90),
            task: TemplateTask {
                estimated_cost: Some(400.0),
                ..task(
                    "Schedule electrical inspection",
                    "Have a licensed electrician inspect the panel and wiring.",
                    Medium,
                    &["Electrical", "Safety"],
                )
            },
        },
        MaintenanceTemplate {
            id: "property-new-build-walkthrough".to_string(),
            applies_to: property_types(&[]),
            conditions: Some(AgeConditions {
                min_age_years: None,
                max_age_years: Some(1.0),
            }),
            schedule: once(30),
            task: task(
                "Warranty walkthrough",
                "List defects to report before the builder warranty expires.",
                Medium,
                &["Warranty"],
            ),
        },
        // -- Space ------------------------------------------------------------
        MaintenanceTemplate {
            id: "space-bathroom-sealant".to_string(),
            applies_to: AppliesTo::Space {
                space_types: vec![SpaceType::Bathroom],
            },
            conditions: None,
            schedule: every(Quarterly, 14),
            task: TemplateTask {
                labor_hours_estimate: Some(1.0),
                ..task(
                    "Clean bathroom sealant",
                    "Clean silicone around tub, shower and sink; reseal where mould persists.",
                    Low,
                    &["Plumbing", "Cleaning"],
                )
            },
        },
        MaintenanceTemplate {
            id: "space-kitchen-range-hood-filter".to_string(),
            applies_to: AppliesTo::Space {
                space_types: vec![SpaceType::Kitchen],
            },
            conditions: None,
            schedule: every(Quarterly, 14),
            task: task(
                "Clean range hood filter",
                "Soak the grease filter in hot soapy water or replace it.",
                Low,
                &["Cleaning"],
            ),
        },
        MaintenanceTemplate {
            id: "space-laundry-dryer-vent".to_string(),
            applies_to: AppliesTo::Space {
                space_types: vec![SpaceType::Laundry],
            },
            conditions: None,
            schedule: every(Yearly, 30),
            task: task(
                "Clean dryer vent duct",
                "Clear lint from the full vent run to the exterior flap.",
                High,
                &["Safety"],
            ),
        },
        MaintenanceTemplate {
            id: "space-basement-moisture-check".to_string(),
            applies_to: AppliesTo::Space {
                space_types: vec![SpaceType::Basement, SpaceType::Attic],
            },
            conditions: None,
            schedule: every(Yearly, 30),
            task: task(
                "Check for moisture and leaks",
                "Look for damp spots, mould, and signs of water intrusion.",
                Medium,
                &["Inspection"],
            ),
        },
        MaintenanceTemplate {
            id: "space-garage-door-lubrication".to_string(),
            applies_to: AppliesTo::Space {
                space_types: vec![SpaceType::Garage],
            },
            conditions: None,
            schedule: every(Yearly, 30),
            task: task(
                "Lubricate garage door",
                "Lubricate rollers, hinges and springs; test the auto-reverse.",
                Low,
                &["Safety"],
            ),
        },
        // -- Inventory --------------------------------------------------------
        MaintenanceTemplate {
            id: "inventory-water-heater-flush".to_string(),
            applies_to: inventory(&[], &["water heater"]),
            conditions: None,
            schedule: every(Yearly, 30),
            task: TemplateTask {
                labor_hours_estimate: Some(1.5),
                ..task(
                    "Flush water heater",
                    "Drain sediment from the tank and test the pressure relief valve.",
                    Medium,
                    &["Plumbing"],
                )
            },
        },
        MaintenanceTemplate {
            id: "inventory-water-heater-replacement".to_string(),
            applies_to: inventory(&[], &["water heater"]),
            conditions: older_than(10.0),
            schedule: once(180),
            task: TemplateTask {
                estimated_cost: Some(1500.0),
                ..task(
                    "Plan water heater replacement",
                    "Tank heaters typically last 8-12 years; budget for a replacement.",
                    Medium,
                    &["Plumbing", "Budget"],
                )
            },
        },
        MaintenanceTemplate {
            id: "inventory-dryer-lint-trap".to_string(),
            applies_to: inventory(&["Appliance"], &["dryer"]),
            conditions: None,
            schedule: every(Quarterly, 7),
            task: task(
                "Deep-clean dryer lint trap",
                "Wash the lint screen and vacuum the trap housing.",
                Low,
                &["Appliance", "Safety"],
            ),
        },
        MaintenanceTemplate {
            id: "inventory-hvac-filter".to_string(),
            applies_to: inventory(&["HVAC"], &[]),
            conditions: None,
            schedule: every(Quarterly, 14),
            task: task(
                "Replace HVAC filter",
                "Swap the air filter; note the size on the unit for next time.",
                Medium,
                &["HVAC"],
            ),
        },
        MaintenanceTemplate {
            id: "inventory-hvac-service".to_string(),
            applies_to: inventory(&["HVAC"], &[]),
            conditions: older_than(2.0),
            schedule: every(Yearly, 45),
            task: TemplateTask {
                estimated_cost: Some(180.0),
                ..task(
                    "Professional HVAC service",
                    "Book a technician to clean coils and check refrigerant.",
                    Medium,
                    &["HVAC"],
                )
            },
        },
        MaintenanceTemplate {
            id: "inventory-refrigerator-coils".to_string(),
            applies_to: inventory(&["Appliance"], &["fridge", "refrigerator"]),
            conditions: None,
            schedule: every(Yearly, 30),
            task: task(
                "Vacuum refrigerator coils",
                "Dusty condenser coils make the compressor work harder.",
                Low,
                &["Appliance", "Cleaning"],
            ),
        },
        MaintenanceTemplate {
            id: "inventory-appliance-warranty-check".to_string(),
            applies_to: inventory(&["Appliance"], &[]),
            conditions: Some(AgeConditions {
                min_age_years: None,
                max_age_years: Some(1.0),
            }),
            schedule: once(14),
            task: task(
                "Register appliance warranty",
                "Register the product and file the receipt with the documents.",
                Low,
                &["Warranty"],
            ),
        },
    ]
}
