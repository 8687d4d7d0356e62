//! Biz Directory - LLC service-provider directory
//!
//! This library loads business listings from CSV or JSON, matches them to
//! use-case categories (widening to generic business services when a
//! category has no hits), filters them by state and city, and ranks them by
//! rating and review count. The HTTP layer serves the resulting page models.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize_phone, rank, CategoryMatch, CategoryMatcher};
pub use crate::models::{BusinessRecord, CategoryInfo, DataSource, LocationFilter, StateCostInfo};
pub use crate::services::{Directory, LoadError, Taxonomy};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let directory = Directory::new(
            services::sample_records(),
            DataSource::EmbeddedSample,
            Taxonomy::embedded().unwrap(),
            true,
        );
        assert!(!directory.is_empty());
        assert_eq!(normalize_phone("5551234567"), "+1 (555) 123-4567");
    }
}
