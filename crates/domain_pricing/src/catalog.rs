//! Plan and add-on catalogs
//!
//! Static reference data loaded once and shared read-only between requests.
//! Per-unit add-ons (IPv4, storage, bandwidth) carry a unit price; tiered
//! add-ons are grouped by category and each tier carries a fixed price that
//! is either monthly or, for SSL certificates, annual.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::round_to_unit;

use crate::error::PricingError;

/// Compute and bandwidth resources of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceTier {
    pub vcpu: u32,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub bandwidth_tb: u32,
}

impl ResourceTier {
    pub fn new(vcpu: u32, ram_gb: u32, storage_gb: u32, bandwidth_tb: u32) -> Self {
        Self { vcpu, ram_gb, storage_gb, bandwidth_tb }
    }

    /// Short summary used in line item descriptions
    pub fn summary(&self) -> String {
        format!(
            "{} vCPU / {} GB RAM / {} GB SSD / {} TB bandwidth",
            self.vcpu, self.ram_gb, self.storage_gb, self.bandwidth_tb
        )
    }
}

/// A server plan offered in the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub resources: ResourceTier,
    /// List price per month before any billing-cycle discount
    pub monthly_price: Decimal,
}

impl Plan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resources: ResourceTier,
        monthly_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resources,
            monthly_price,
        }
    }
}

/// Catalog of plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// The storefront's published plans
    pub fn standard() -> Self {
        Self::new(vec![
            Plan::new("vps-starter", "VPS Starter", ResourceTier::new(1, 2, 40, 1), dec!(799)),
            Plan::new("vps-basic", "VPS Basic", ResourceTier::new(2, 4, 80, 2), dec!(1499)),
            Plan::new("vps-standard", "VPS Standard", ResourceTier::new(4, 8, 160, 4), dec!(2000)),
            Plan::new("vps-pro", "VPS Pro", ResourceTier::new(8, 16, 320, 8), dec!(3999)),
            Plan::new("vps-business", "VPS Business", ResourceTier::new(16, 32, 640, 16), dec!(7999)),
        ])
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Looks up a plan by id, ignoring case
    pub fn get(&self, id: &str) -> Result<&Plan, PricingError> {
        let id = id.trim();
        self.plans
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| PricingError::PlanNotFound(id.to_string()))
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Categories of tiered add-ons; one tier per category at most
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnCategory {
    /// Plesk control panel licence
    ControlPanel,
    BackupStorage,
    SslCertificate,
    Support,
    ManagedService,
    DdosProtection,
}

impl AddOnCategory {
    pub const ALL: [AddOnCategory; 6] = [
        AddOnCategory::ControlPanel,
        AddOnCategory::BackupStorage,
        AddOnCategory::SslCertificate,
        AddOnCategory::Support,
        AddOnCategory::ManagedService,
        AddOnCategory::DdosProtection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddOnCategory::ControlPanel => "Control panel",
            AddOnCategory::BackupStorage => "Backup storage",
            AddOnCategory::SslCertificate => "SSL certificate",
            AddOnCategory::Support => "Support package",
            AddOnCategory::ManagedService => "Managed service",
            AddOnCategory::DdosProtection => "DDoS protection",
        }
    }
}

/// How often a catalog price is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePeriod {
    #[default]
    Monthly,
    Annual,
}

#[derive(Deserialize)]
struct TierEntryDocument {
    id: String,
    label: String,
    price: Decimal,
    #[serde(default)]
    period: PricePeriod,
}

impl From<TierEntryDocument> for TierEntry {
    fn from(doc: TierEntryDocument) -> Self {
        TierEntry::new(doc.id, doc.label, doc.price, doc.period)
    }
}

/// One selectable tier of an add-on category
///
/// The monthly contribution is derived once, when the entry is built. Annual
/// prices are divided by twelve and rounded to the whole unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TierEntryDocument")]
pub struct TierEntry {
    pub id: String,
    pub label: String,
    pub price: Decimal,
    pub period: PricePeriod,
    monthly_price: Decimal,
}

impl TierEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, price: Decimal, period: PricePeriod) -> Self {
        let monthly_price = match period {
            PricePeriod::Monthly => price,
            PricePeriod::Annual => round_to_unit(price / dec!(12)),
        };
        Self {
            id: id.into(),
            label: label.into(),
            price,
            period,
            monthly_price,
        }
    }

    pub fn monthly(id: impl Into<String>, label: impl Into<String>, price: Decimal) -> Self {
        Self::new(id, label, price, PricePeriod::Monthly)
    }

    pub fn annual(id: impl Into<String>, label: impl Into<String>, price: Decimal) -> Self {
        Self::new(id, label, price, PricePeriod::Annual)
    }

    /// Contribution of this tier to the per-server monthly cost
    pub fn monthly_price(&self) -> Decimal {
        self.monthly_price
    }
}

/// Prices of every add-on the checkout offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCatalog {
    pub ipv4_unit_price: Decimal,
    pub storage_gb_unit_price: Decimal,
    pub bandwidth_tb_unit_price: Decimal,
    #[serde(default)]
    tiers: BTreeMap<AddOnCategory, Vec<TierEntry>>,
}

impl AddOnCatalog {
    /// Creates a catalog with unit prices and no tiers
    pub fn new(ipv4_unit_price: Decimal, storage_gb_unit_price: Decimal, bandwidth_tb_unit_price: Decimal) -> Self {
        Self {
            ipv4_unit_price,
            storage_gb_unit_price,
            bandwidth_tb_unit_price,
            tiers: BTreeMap::new(),
        }
    }

    /// The storefront's published add-on prices
    pub fn standard() -> Self {
        Self::new(dec!(200), dec!(2), dec!(150))
            .with_tier(AddOnCategory::ControlPanel, TierEntry::monthly("plesk-web-admin", "Plesk Web Admin (10 domains)", dec!(800)))
            .with_tier(AddOnCategory::ControlPanel, TierEntry::monthly("plesk-web-pro", "Plesk Web Pro (30 domains)", dec!(1500)))
            .with_tier(AddOnCategory::ControlPanel, TierEntry::monthly("plesk-web-host", "Plesk Web Host (unlimited)", dec!(2500)))
            .with_tier(AddOnCategory::BackupStorage, TierEntry::monthly("backup-50", "Backup storage 50 GB", dec!(250)))
            .with_tier(AddOnCategory::BackupStorage, TierEntry::monthly("backup-100", "Backup storage 100 GB", dec!(450)))
            .with_tier(AddOnCategory::BackupStorage, TierEntry::monthly("backup-250", "Backup storage 250 GB", dec!(1000)))
            .with_tier(AddOnCategory::SslCertificate, TierEntry::annual("positive-ssl", "PositiveSSL", dec!(999)))
            .with_tier(AddOnCategory::SslCertificate, TierEntry::annual("wildcard-ssl", "PositiveSSL Wildcard", dec!(7999)))
            .with_tier(AddOnCategory::SslCertificate, TierEntry::annual("ev-ssl", "EV SSL", dec!(14999)))
            .with_tier(AddOnCategory::Support, TierEntry::monthly("priority", "Priority support", dec!(999)))
            .with_tier(AddOnCategory::Support, TierEntry::monthly("premium", "Premium support (24x7 phone)", dec!(2499)))
            .with_tier(AddOnCategory::ManagedService, TierEntry::monthly("managed-basic", "Managed basic", dec!(1499)))
            .with_tier(AddOnCategory::ManagedService, TierEntry::monthly("managed-full", "Fully managed", dec!(2999)))
            .with_tier(AddOnCategory::DdosProtection, TierEntry::monthly("ddos-advanced", "Advanced DDoS protection", dec!(1999)))
            .with_tier(AddOnCategory::DdosProtection, TierEntry::monthly("ddos-enterprise", "Enterprise DDoS protection", dec!(4999)))
    }

    /// Adds a tier to a category
    pub fn with_tier(mut self, category: AddOnCategory, entry: TierEntry) -> Self {
        self.tiers.entry(category).or_default().push(entry);
        self
    }

    /// Tiers offered in a category
    pub fn tiers(&self, category: AddOnCategory) -> &[TierEntry] {
        self.tiers.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds a tier by id within its category
    pub fn tier(&self, category: AddOnCategory, id: &str) -> Option<&TierEntry> {
        let id = id.trim();
        self.tiers(category).iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Checks prices are non-negative and tier ids unique per category
    pub fn validate(&self) -> Result<(), PricingError> {
        let unit_prices = [
            ("ipv4_unit_price", self.ipv4_unit_price),
            ("storage_gb_unit_price", self.storage_gb_unit_price),
            ("bandwidth_tb_unit_price", self.bandwidth_tb_unit_price),
        ];
        for (name, price) in unit_prices {
            if price.is_sign_negative() && !price.is_zero() {
                return Err(PricingError::invalid_reference(format!("{name} is negative")));
            }
        }

        for (category, entries) in &self.tiers {
            for (i, entry) in entries.iter().enumerate() {
                if entry.price.is_sign_negative() && !entry.price.is_zero() {
                    return Err(PricingError::invalid_reference(format!(
                        "{} tier '{}' has a negative price",
                        category.label(),
                        entry.id
                    )));
                }
                if entries[..i].iter().any(|e| e.id.eq_ignore_ascii_case(&entry.id)) {
                    return Err(PricingError::invalid_reference(format!(
                        "{} tier '{}' is listed twice",
                        category.label(),
                        entry.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for AddOnCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
