//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into tracker-level operations.
//! - Keep the CLI decoupled from storage details.

pub mod parcel_service;
