//! Pricing engine
//!
//! This module wires the pipeline together: tariff resolution, promo
//! discount, GST, currency presentation and invoice assembly. Reference data
//! is loaded once and shared read-only between callers.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{AddOnCatalog, PlanCatalog};
use crate::configuration::{BillingAddress, ServerConfiguration};
use crate::currency::{CountryDirectory, CurrencyPresenter, CurrencyResolver};
use crate::discount::{PromoStatus, PromoTable};
use crate::error::PricingError;
use crate::invoice::{InvoiceAssembler, InvoiceRecord, InvoiceSession};
use crate::tariff::TariffResolver;
use crate::tax::TaxRuleSet;

/// Static tables every quote is priced against
///
/// Every table has a built-in default, so a partial JSON document only
/// overrides the sections it names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub plans: PlanCatalog,
    pub add_ons: AddOnCatalog,
    pub promos: PromoTable,
    pub tax_rules: TaxRuleSet,
    pub countries: CountryDirectory,
}

impl ReferenceData {
    /// The storefront's built-in tables
    pub fn standard() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON reference document
    pub fn from_json(json: &str) -> Result<Self, PricingError> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Reads and validates a JSON reference document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            plans = data.plans.plans().len(),
            promos = data.promos.len(),
            countries = data.countries.entries.len(),
            "Loaded reference data"
        );
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.plans.plans().is_empty() {
            return Err(PricingError::invalid_reference("plan catalog is empty"));
        }
        self.add_ons.validate()?;
        self.promos.validate()?;
        self.tax_rules.validate()?;
        Ok(())
    }

    /// Address the tax rules are applied to
    ///
    /// A blank country, or one the directory does not list, is billed in the
    /// default currency and so is taxed in the seller's own jurisdiction.
    pub fn tax_address(&self, address: &BillingAddress) -> BillingAddress {
        let resolvable = self.tax_rules.is_domestic(&address.country)
            || self.countries.find(&address.country).is_some();
        if resolvable {
            return address.clone();
        }

        debug!(
            country = %address.country,
            jurisdiction = %self.tax_rules.domestic_country,
            "Unresolved country, taxing in the domestic jurisdiction"
        );
        BillingAddress::new(self.tax_rules.domestic_country.clone(), address.state.clone())
    }
}

/// A computed quote: the invoice plus what happened to the promo code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub invoice: InvoiceRecord,
    pub promo: PromoStatus,
}

/// Prices configurations against reference data
///
/// The engine holds no state of its own and can be shared freely. Currency
/// resolution defaults to the reference data's country directory and can be
/// swapped for any other [`CurrencyResolver`].
pub struct PricingEngine<'a> {
    reference: &'a ReferenceData,
    resolver: &'a dyn CurrencyResolver,
}

impl<'a> PricingEngine<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            resolver: &reference.countries,
        }
    }

    pub fn with_resolver(mut self, resolver: &'a dyn CurrencyResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        self.reference
    }

    /// Computes a full quote for a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The checkout selection, base price already cycle-adjusted
    /// * `address` - Billing address, used for the tax regime and currency
    /// * `promo_code` - Code entered by the customer, if any
    /// * `session` - Fixes the invoice number and dates across recomputes
    ///
    /// # Returns
    ///
    /// The rebuilt invoice record and the promo status. Nothing here fails:
    /// out-of-range counts are clamped, unknown codes are flagged, and
    /// unresolvable countries fall back to the default currency and the
    /// seller's jurisdiction.
    pub fn quote(
        &self,
        config: &ServerConfiguration,
        address: &BillingAddress,
        promo_code: Option<&str>,
        session: &InvoiceSession,
    ) -> Quote {
        let tariff = TariffResolver::new(&self.reference.add_ons).resolve(config);
        let promo = self.reference.promos.apply_promo(tariff.subtotal, promo_code);
        let tax = self.reference.tax_rules.compute(
            tariff.subtotal,
            promo.discount,
            &self.reference.tax_address(address),
        );
        let presenter = CurrencyPresenter::for_country(self.resolver, &address.country);

        let invoice = InvoiceAssembler::new(session, presenter).assemble(
            &config.plan_id,
            config.billing_cycle,
            tariff,
            &promo,
            &tax,
        );

        debug!(
            invoice_number = %invoice.invoice_number,
            currency = %invoice.currency,
            total = %invoice.total,
            "Assembled invoice"
        );

        Quote {
            invoice,
            promo: promo.status,
        }
    }
}

/// Computes a quote using the reference data's own country directory
pub fn compute_invoice(
    config: &ServerConfiguration,
    address: &BillingAddress,
    promo_code: Option<&str>,
    reference: &ReferenceData,
    session: &InvoiceSession,
) -> Quote {
    PricingEngine::new(reference).quote(config, address, promo_code, session)
}
