//! Request and response bodies

pub mod catalog;
pub mod quote;
pub mod referral;
