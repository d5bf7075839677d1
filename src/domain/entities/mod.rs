//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Planet`] - A persisted catalog record
//! - [`NewPlanet`] - Input for creating a record (no `id` yet)
//! - [`PlanetProbe`] - Query-by-example template used for filtered listing

pub mod planet;

pub use planet::{NewPlanet, Planet, PlanetProbe};
