//! Country Resolver - find the countries a map shape or line touches.
//!
//! The caller owns the boundary dataset: build a [`CountrySet`] once and pass
//! it to the resolvers in [`pip`], or wrap it in a [`CountryDetector`] to run
//! shape resolution off the calling thread.

pub mod config;
pub mod error;
pub mod models;
pub mod pip;

#[cfg(test)]
mod fixtures;

pub use config::DetectionConfig;
pub use error::{DetectError, ShapeError};
pub use models::{Country, CountryGeometry, CountrySet, Line, LineEndpoints, Shape};
pub use pip::CountryDetector;
