//! Hearth core domain logic.
//!
//! Pure, database-free building blocks shared by the API and any future
//! worker or CLI tooling: entity shapes, the maintenance template catalog,
//! and the suggestion engine.

pub mod error;
pub mod property;
pub mod suggestions;
pub mod types;
