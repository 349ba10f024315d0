//! Tariff resolution
//!
//! Turns a configuration into priced line items for a single server, then
//! multiplies by the number of servers to get the pre-discount subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{AddOnCatalog, AddOnCategory};
use crate::configuration::ServerConfiguration;

/// A priced line on the quote, per server per month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            amount: unit_price * Decimal::from(quantity),
        }
    }
}

/// Result of resolving a configuration against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffBreakdown {
    /// Base plan line followed by one line per active add-on
    pub line_items: Vec<LineItem>,
    pub base_monthly_price: Decimal,
    pub add_on_monthly_cost: Decimal,
    pub per_server_monthly_cost: Decimal,
    pub quantity: u32,
    /// Per-server cost times quantity, never negative
    pub subtotal: Decimal,
}

/// Prices configurations against an add-on catalog
#[derive(Debug, Clone, Copy)]
pub struct TariffResolver<'a> {
    catalog: &'a AddOnCatalog,
}

impl<'a> TariffResolver<'a> {
    pub fn new(catalog: &'a AddOnCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves a configuration into line items and a subtotal
    pub fn resolve(&self, config: &ServerConfiguration) -> TariffBreakdown {
        let base = config.base_monthly_price.max(Decimal::ZERO);
        let mut line_items = vec![LineItem::new(
            format!("{} ({})", config.plan_id, config.resources.summary()),
            1,
            base,
        )];

        let add_ons = self.add_on_items(config);
        let add_on_monthly_cost: Decimal = add_ons.iter().map(|item| item.amount).sum();
        line_items.extend(add_ons);

        let per_server_monthly_cost = base + add_on_monthly_cost;
        let quantity = config.effective_quantity();
        let subtotal = (per_server_monthly_cost * Decimal::from(quantity)).max(Decimal::ZERO);

        debug!(
            plan = %config.plan_id,
            %per_server_monthly_cost,
            quantity,
            %subtotal,
            "Resolved tariff"
        );

        TariffBreakdown {
            line_items,
            base_monthly_price: base,
            add_on_monthly_cost,
            per_server_monthly_cost,
            quantity,
            subtotal,
        }
    }

    fn add_on_items(&self, config: &ServerConfiguration) -> Vec<LineItem> {
        let selections = &config.add_ons;
        let mut items = Vec::new();

        let per_unit = [
            ("Additional IPv4 address", selections.ipv4_count(), self.catalog.ipv4_unit_price),
            ("Extra storage (GB)", selections.storage_gb(), self.catalog.storage_gb_unit_price),
            ("Extra bandwidth (TB)", selections.bandwidth_tb(), self.catalog.bandwidth_tb_unit_price),
        ];
        for (description, count, unit_price) in per_unit {
            if count > 0 {
                items.push(LineItem::new(description, count, unit_price.max(Decimal::ZERO)));
            }
        }

        for category in AddOnCategory::ALL {
            let Some(tier_id) = selections.tier(category) else {
                continue;
            };
            match self.catalog.tier(category, tier_id) {
                Some(tier) => items.push(LineItem::new(
                    format!("{}: {}", category.label(), tier.label),
                    1,
                    tier.monthly_price().max(Decimal::ZERO),
                )),
                None => warn!(?category, tier_id, "Ignoring unknown add-on tier"),
            }
        }

        items
    }
}
