//! Repository layer abstractions and file-backed implementation.
//!
//! # Responsibility
//! - Define use-case oriented content access contracts.
//! - Isolate filesystem layout details from service orchestration.
//!
//! # Invariants
//! - A missing content root is an empty repository, not an error.
//! - Unknown slugs are reported as `Ok(None)`, never as I/O errors.

pub mod project_repo;
