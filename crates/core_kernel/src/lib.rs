//! Core Kernel - Foundational types for the storefront pricing engine
//!
//! This crate provides the building blocks shared by the pricing domain and
//! the HTTP boundary:
//! - Money types with precise decimal arithmetic and whole-unit rounding
//! - Calendar helpers for invoice and service-period dates
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate, round_to_unit, sanitize_f64};
pub use temporal::{DateRange, Timezone, TemporalError, add_days};
pub use identifiers::{QuoteId, SessionId};
pub use error::CoreError;
