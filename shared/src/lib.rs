//! Shared types and models for the Book My Seat client
//!
//! This crate contains types shared between the client core, its tests,
//! and any host application embedding the core.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
