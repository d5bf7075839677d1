//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers one method
//! per use case.
//!
//! # Available Services
//!
//! - [`services::planet_service::PlanetService`] - Planet catalog use cases

pub mod services;
