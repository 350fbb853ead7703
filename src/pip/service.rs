//! Detection service: owns the country set and runs shape resolution off
//! the caller's thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::line::detect_countries_for_line;
use super::shape::detect_countries_in_shape;
use crate::config::DetectionConfig;
use crate::error::DetectError;
use crate::models::{CountrySet, Line, LineEndpoints, Shape};

/// Country detection for a map-interaction layer.
///
/// Shape resolution runs on tokio's blocking pool so an async UI loop never
/// stalls on it. Every request can take a generation ticket; a result whose
/// ticket is no longer current belongs to a shape the user has already
/// replaced and should be dropped.
pub struct CountryDetector {
    countries: Arc<CountrySet>,
    config: DetectionConfig,
    generation: AtomicU64,
}

impl CountryDetector {
    pub fn new(countries: Arc<CountrySet>, config: DetectionConfig) -> Self {
        Self {
            countries,
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new request, invalidating all earlier tickets.
    pub fn begin_request(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the latest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Resolve a shape on the blocking pool.
    pub async fn detect_countries_in_shape(&self, shape: Shape) -> Result<Vec<String>, DetectError> {
        let countries = Arc::clone(&self.countries);
        let config = self.config.clone();
        let names = tokio::task::spawn_blocking(move || {
            detect_countries_in_shape(&shape, &countries, &config)
        })
        .await?;
        Ok(names)
    }

    /// Resolve a shape, returning `None` if a newer request began meanwhile.
    pub async fn detect_latest(&self, shape: Shape) -> Result<Option<Vec<String>>, DetectError> {
        let ticket = self.begin_request();
        let names = self.detect_countries_in_shape(shape).await?;

        if self.is_current(ticket) {
            Ok(Some(names))
        } else {
            debug!("Discarding stale detection result for request {}", ticket);
            Ok(None)
        }
    }

    /// Endpoint lookup is two point tests, cheap enough to run inline.
    pub fn detect_countries_for_line(&self, line: &Line) -> LineEndpoints {
        detect_countries_for_line(line, &self.countries)
    }

    pub fn countries(&self) -> &CountrySet {
        &self.countries
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}
