//! Human-readable justification text for suggestions.

use super::age::whole_years;
use super::matching::TargetEntity;
use super::template::MaintenanceTemplate;

/// Build the `reason` prose for a matched template.
pub fn build_reason(
    template: &MaintenanceTemplate,
    entity: &TargetEntity<'_>,
    age: Option<f64>,
) -> String {
    match entity {
        TargetEntity::Property(property) => {
            let mut reason = format!("Recommended for {} properties.", property.property_type);
            if let Some(age) = age {
                reason.push_str(&format!(" This property is {}.", years_old(age)));
            }
            reason
        }
        TargetEntity::Space(space) => {
            let mut reason = format!("Recommended for {} spaces.", space.space_type.label());
            if let Some(recurrence) = template.recurrence() {
                reason.push_str(&format!(" Recommended {}.", recurrence.cadence()));
            }
            reason
        }
        TargetEntity::Inventory(item) => {
            let mut reason = format!("Suggested for {}", item.name);
            if let Some(category) = item.category.as_deref().filter(|c| !c.trim().is_empty()) {
                reason.push_str(&format!(" ({category})"));
            }
            match (age, template.due_in_days()) {
                (Some(age), _) => reason.push_str(&format!(", which is {}.", years_old(age))),
                (None, Some(days)) => {
                    reason.push_str(&format!(" within the next {days} {}.", plural(days, "day")))
                }
                (None, None) => reason.push('.'),
            }
            reason
        }
    }
}

fn years_old(age: f64) -> String {
    let years = whole_years(age);
    format!("~{years} {} old", plural(years, "year"))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{InventoryItem, Property, Space, SpaceType};
    use crate::suggestions::template::{
        AppliesTo, Recurrence, RecurrenceFrequency, Schedule, TemplateTask,
    };

    fn template(schedule: Option<Schedule>) -> MaintenanceTemplate {
        MaintenanceTemplate {
            id: "t1".to_string(),
            applies_to: AppliesTo::Space {
                space_types: vec![],
            },
            conditions: None,
            schedule,
            task: TemplateTask {
                title: "Task".to_string(),
                description: None,
                priority: Default::default(),
                tags: vec![],
                estimated_cost: None,
                labor_hours_estimate: None,
            },
        }
    }

    fn recurring(frequency: RecurrenceFrequency) -> Option<Schedule> {
        Some(Schedule {
            due_in_days: None,
            recurrence: Some(Recurrence {
                frequency,
                interval: 1,
            }),
        })
    }

    fn due_in(days: i64) -> Option<Schedule> {
        Some(Schedule {
            due_in_days: Some(days),
            recurrence: None,
        })
    }

    fn dryer(category: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: "i1".to_string(),
            property_id: "p1".to_string(),
            name: "Dryer".to_string(),
            category: category.map(str::to_string),
            purchase_date: None,
        }
    }

    #[test]
    fn property_reason_with_age() {
        let property = Property {
            id: "p1".to_string(),
            name: None,
            property_type: "House".to_string(),
            construction_year: Some(2018),
        };
        let reason = build_reason(&template(None), &TargetEntity::Property(&property), Some(6.0));
        assert_eq!(
            reason,
            "Recommended for House properties. This property is ~6 years old."
        );
    }

    #[test]
    fn property_reason_without_age() {
        let property = Property {
            id: "p1".to_string(),
            name: None,
            property_type: "Cabin".to_string(),
            construction_year: None,
        };
        let reason = build_reason(&template(None), &TargetEntity::Property(&property), None);
        assert_eq!(reason, "Recommended for Cabin properties.");
    }

    #[test]
    fn space_reason_appends_cadence() {
        let space = Space {
            id: "s1".to_string(),
            property_id: "p1".to_string(),
            name: None,
            space_type: SpaceType::LivingRoom,
        };
        let reason = build_reason(
            &template(recurring(RecurrenceFrequency::Yearly)),
            &TargetEntity::Space(&space),
            None,
        );
        assert_eq!(
            reason,
            "Recommended for living room spaces. Recommended yearly."
        );
    }

    #[test]
    fn space_reason_without_recurrence() {
        let space = Space {
            id: "s1".to_string(),
            property_id: "p1".to_string(),
            name: None,
            space_type: SpaceType::Garage,
        };
        let reason = build_reason(&template(due_in(7)), &TargetEntity::Space(&space), None);
        assert_eq!(reason, "Recommended for garage spaces.");
    }

    #[test]
    fn inventory_reason_prefers_age_over_due_hint() {
        let item = dryer(Some("Appliance"));
        let reason = build_reason(
            &template(due_in(30)),
            &TargetEntity::Inventory(&item),
            Some(1.2),
        );
        assert_eq!(reason, "Suggested for Dryer (Appliance), which is ~1 year old.");
    }

    #[test]
    fn inventory_reason_falls_back_to_due_hint() {
        let item = dryer(None);
        let reason = build_reason(&template(due_in(30)), &TargetEntity::Inventory(&item), None);
        assert_eq!(reason, "Suggested for Dryer within the next 30 days.");
    }

    #[test]
    fn inventory_reason_without_age_or_hint() {
        let item = dryer(Some("  "));
        let reason = build_reason(&template(None), &TargetEntity::Inventory(&item), None);
        assert_eq!(reason, "Suggested for Dryer.");
    }
}
