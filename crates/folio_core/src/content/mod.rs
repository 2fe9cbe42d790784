//! Content file decoding and content-root configuration.
//!
//! # Responsibility
//! - Split authored files into structured header and body.
//! - Resolve where project files live on disk.
//!
//! # See also
//! - `repo::project_repo` for directory traversal.

pub mod config;
pub mod front_matter;
