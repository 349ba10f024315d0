//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! pricing engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common checkout scenarios
//! - `builders`: Builder patterns for quote inputs and API request bodies
//! - `assertions`: Custom assertion helpers for invoice records
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
