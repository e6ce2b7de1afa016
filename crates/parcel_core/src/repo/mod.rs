//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the parcel data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`,
//!   `PreconditionFailed`) in addition to DB transport errors.
//! - Repositories do not log; callers decide what is worth recording.

pub mod parcel_repo;
