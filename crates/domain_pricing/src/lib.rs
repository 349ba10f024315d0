//! Pricing Domain - VPS Checkout Quotes and Proforma Invoices
//!
//! This crate turns a server configuration chosen at checkout into a fully
//! itemised, tax-split invoice record.
//!
//! # Pipeline
//!
//! Every recompute runs the whole pipeline from the configuration snapshot:
//! - **Tariff**: base plan price plus add-ons, times the number of servers
//! - **Discount**: a promo code worth a fixed percentage of the subtotal
//! - **Tax**: 18% GST, split CGST/SGST in the seller's home state, IGST
//!   elsewhere in the country, nothing abroad
//! - **Presentation**: currency from the billing country, locale formatting
//!   and the amount in words
//! - **Assembly**: invoice number and dates fixed by the checkout session
//!
//! All amounts are whole currency units; every intermediate product is
//! rounded half away from zero.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{compute_invoice, BillingAddress, BillingCycle, InvoiceSession,
//!     ReferenceData, ServerConfiguration};
//!
//! let reference = ReferenceData::standard();
//! let plan = reference.plans.get("vps-standard")?;
//! let config = ServerConfiguration::for_plan(plan, BillingCycle::Annual).with_quantity(2);
//! let session = InvoiceSession::open(Timezone::default());
//!
//! let quote = compute_invoice(
//!     &config,
//!     &BillingAddress::new("India", "Uttar Pradesh"),
//!     Some("WELCOME10"),
//!     &reference,
//!     &session,
//! );
//! println!("{} ({})", quote.invoice.formatted_total, quote.invoice.amount_in_words);
//! ```

pub mod catalog;
pub mod configuration;
pub mod cycle;
pub mod tariff;
pub mod discount;
pub mod tax;
pub mod currency;
pub mod invoice;
pub mod engine;
pub mod referral;
pub mod error;

pub use catalog::{AddOnCatalog, AddOnCategory, Plan, PlanCatalog, PricePeriod, ResourceTier, TierEntry};
pub use configuration::{AddOnSelections, BillingAddress, ServerConfiguration, UnitBounds};
pub use cycle::BillingCycle;
pub use tariff::{LineItem, TariffBreakdown, TariffResolver};
pub use discount::{PromoOutcome, PromoStatus, PromoTable};
pub use tax::{TaxBreakdown, TaxComputation, TaxRegime, TaxRuleSet};
pub use currency::{
    amount_in_words, CountryDirectory, CountryEntry, CurrencyPresenter, CurrencyResolver,
    DefaultCurrencyResolver, LocaleFormat,
};
pub use invoice::{InvoiceAssembler, InvoiceRecord, InvoiceSession, PaymentAmount};
pub use engine::{compute_invoice, PricingEngine, Quote, ReferenceData};
pub use referral::{default_commission_rate, referrals_to_cover};
pub use error::PricingError;
