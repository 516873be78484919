//! Maintenance suggestion engine.
//!
//! Matches a catalog of [`MaintenanceTemplate`]s against one property, space,
//! or inventory item and produces deduplicated [`MaintenanceSuggestion`]s.
//! Pure logic throughout: no clocks beyond the injectable `now`, no I/O
//! beyond the explicit catalog file loader.

pub mod age;
pub mod catalog;
pub mod engine;
pub mod matching;
pub mod outcome;
pub mod reason;
pub mod suggestion;
pub mod template;

pub use engine::{suggest_maintenance_tasks, SuggestionInput};
pub use outcome::MaintenanceTaskDraft;
pub use suggestion::{
    DismissedMaintenanceSuggestion, ExistingTaskRef, MaintenanceSuggestion, SuggestionKey,
    SuggestionSource, SuggestionTarget,
};
pub use template::{
    AgeConditions, AppliesTo, EntityType, MaintenanceTemplate, Recurrence, RecurrenceFrequency,
    Schedule, TaskPriority, TemplateTask,
};
