//! Typed records for portfolio project content.
//!
//! # Responsibility
//! - Define the canonical project record decoded from front matter.
//! - Own the closed vocabularies (type, role, status) and their labels.
//!
//! # Invariants
//! - Every project is identified by a slug unique within one content root.
//! - Records are immutable snapshots of one file read.

pub mod project;
