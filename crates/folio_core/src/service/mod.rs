//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads into page-level listing APIs.
//! - Keep callers decoupled from content storage details.

pub mod project_service;
