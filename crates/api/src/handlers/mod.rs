//! Request handlers.
//!
//! Handlers are thin: they deserialize the request, delegate to
//! `hearth_core`, and map errors via [`crate::error::AppError`].

pub mod maintenance;
