//! Display projections for project records.
//!
//! # Responsibility
//! - Render the project body for the detail page.
//! - Shape records into card view models for listings.

pub mod body;
pub mod card;
