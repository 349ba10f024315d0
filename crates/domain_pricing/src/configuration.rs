//! Checkout selections
//!
//! A `ServerConfiguration` is a snapshot of what the customer picked. Every
//! change in the checkout produces a fresh snapshot through the `with_*`
//! methods; nothing is updated in place. Counts arrive straight from JSON and
//! may be out of range, so they are stored as given and clamped when read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{AddOnCategory, Plan, ResourceTier};
use crate::cycle::BillingCycle;

/// Lowest number of servers in one order
pub const MIN_QUANTITY: u32 = 1;
/// Highest number of servers in one order
pub const MAX_QUANTITY: u32 = 100;

/// Inclusive bounds and step of a per-unit add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl UnitBounds {
    /// Clamps into range and snaps down onto the step grid
    pub fn clamp(&self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min), i64::from(self.max)) as u32;
        let step = self.step.max(1);
        clamped - (clamped - self.min) % step
    }
}

pub const IPV4_BOUNDS: UnitBounds = UnitBounds { min: 0, max: 10, step: 1 };
pub const STORAGE_GB_BOUNDS: UnitBounds = UnitBounds { min: 0, max: 1000, step: 10 };
pub const BANDWIDTH_TB_BOUNDS: UnitBounds = UnitBounds { min: 0, max: 100, step: 1 };
pub const QUANTITY_BOUNDS: UnitBounds = UnitBounds { min: MIN_QUANTITY, max: MAX_QUANTITY, step: 1 };

/// Optional extras chosen for each server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnSelections {
    pub extra_ipv4: i64,
    pub extra_storage_gb: i64,
    pub extra_bandwidth_tb: i64,
    pub control_panel: Option<String>,
    pub backup_storage: Option<String>,
    pub ssl_certificate: Option<String>,
    pub support: Option<String>,
    pub managed_service: Option<String>,
    pub ddos_protection: Option<String>,
}

impl AddOnSelections {
    pub fn ipv4_count(&self) -> u32 {
        IPV4_BOUNDS.clamp(self.extra_ipv4)
    }

    pub fn storage_gb(&self) -> u32 {
        STORAGE_GB_BOUNDS.clamp(self.extra_storage_gb)
    }

    pub fn bandwidth_tb(&self) -> u32 {
        BANDWIDTH_TB_BOUNDS.clamp(self.extra_bandwidth_tb)
    }

    fn slot(&self, category: AddOnCategory) -> &Option<String> {
        match category {
            AddOnCategory::ControlPanel => &self.control_panel,
            AddOnCategory::BackupStorage => &self.backup_storage,
            AddOnCategory::SslCertificate => &self.ssl_certificate,
            AddOnCategory::Support => &self.support,
            AddOnCategory::ManagedService => &self.managed_service,
            AddOnCategory::DdosProtection => &self.ddos_protection,
        }
    }

    fn slot_mut(&mut self, category: AddOnCategory) -> &mut Option<String> {
        match category {
            AddOnCategory::ControlPanel => &mut self.control_panel,
            AddOnCategory::BackupStorage => &mut self.backup_storage,
            AddOnCategory::SslCertificate => &mut self.ssl_certificate,
            AddOnCategory::Support => &mut self.support,
            AddOnCategory::ManagedService => &mut self.managed_service,
            AddOnCategory::DdosProtection => &mut self.ddos_protection,
        }
    }

    /// Selected tier id in a category; blank ids count as no selection
    pub fn tier(&self, category: AddOnCategory) -> Option<&str> {
        self.slot(category)
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Selects a tier, replacing any previous tier in the same category
    pub fn with_tier(mut self, category: AddOnCategory, tier_id: impl Into<String>) -> Self {
        *self.slot_mut(category) = Some(tier_id.into());
        self
    }

    /// Clears the selection in a category
    pub fn without_tier(mut self, category: AddOnCategory) -> Self {
        *self.slot_mut(category) = None;
        self
    }

    pub fn with_ipv4(mut self, count: i64) -> Self {
        self.extra_ipv4 = count;
        self
    }

    pub fn with_storage_gb(mut self, gb: i64) -> Self {
        self.extra_storage_gb = gb;
        self
    }

    pub fn with_bandwidth_tb(mut self, tb: i64) -> Self {
        self.extra_bandwidth_tb = tb;
        self
    }
}

/// Immutable snapshot of one checkout selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfiguration {
    pub plan_id: String,
    #[serde(default)]
    pub resources: ResourceTier,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
    /// Plan list price per month, before the cycle discount
    pub list_monthly_price: Decimal,
    /// Plan price per month after the cycle discount
    pub base_monthly_price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub add_ons: AddOnSelections,
}

fn default_quantity() -> i64 {
    i64::from(MIN_QUANTITY)
}

impl ServerConfiguration {
    /// Starts a configuration for a plan on a billing cycle
    pub fn for_plan(plan: &Plan, cycle: BillingCycle) -> Self {
        Self {
            plan_id: plan.id.clone(),
            resources: plan.resources,
            billing_cycle: cycle,
            list_monthly_price: plan.monthly_price,
            base_monthly_price: cycle.monthly_equivalent(plan.monthly_price),
            quantity: default_quantity(),
            add_ons: AddOnSelections::default(),
        }
    }

    /// Switches billing cycle, re-deriving the discounted base price
    pub fn with_billing_cycle(&self, cycle: BillingCycle) -> Self {
        Self {
            billing_cycle: cycle,
            base_monthly_price: cycle.monthly_equivalent(self.list_monthly_price),
            ..self.clone()
        }
    }

    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn with_add_ons(&self, add_ons: AddOnSelections) -> Self {
        Self {
            add_ons,
            ..self.clone()
        }
    }

    /// Number of servers, clamped to the order limits
    pub fn effective_quantity(&self) -> u32 {
        QUANTITY_BOUNDS.clamp(self.quantity)
    }
}

/// Where the customer is billed; drives tax regime and currency only
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    pub country: String,
    pub state: String,
}

impl BillingAddress {
    pub fn new(country: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            state: state.into(),
        }
    }
}
