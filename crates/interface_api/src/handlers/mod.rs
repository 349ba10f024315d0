//! Request handlers

pub mod catalog;
pub mod health;
pub mod quotes;
pub mod referrals;
