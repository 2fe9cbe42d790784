//! In-memory listing filter.
//!
//! # Responsibility
//! - Hold the filter panel state (search, type, role, tags).
//! - Apply it to an already-sorted listing.
//!
//! # See also
//! - `service::project_service` for producing the listing.

pub mod project_filter;
