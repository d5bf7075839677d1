//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the API layer. Repository traits
//! are implemented by the infrastructure layer and consumed by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
