//! Catalog DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_pricing::{AddOnCatalog, BillingCycle, Plan, ReferenceData};

#[derive(Debug, Serialize)]
pub struct BillingCycleView {
    pub cycle: BillingCycle,
    pub label: &'static str,
    pub months: u32,
    pub discount_percent: Decimal,
}

impl From<BillingCycle> for BillingCycleView {
    fn from(cycle: BillingCycle) -> Self {
        Self {
            cycle,
            label: cycle.label(),
            months: cycle.months(),
            discount_percent: cycle.discount_rate().as_percentage(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub plans: Vec<Plan>,
    pub add_ons: AddOnCatalog,
    pub billing_cycles: Vec<BillingCycleView>,
}

impl From<&ReferenceData> for CatalogResponse {
    fn from(reference: &ReferenceData) -> Self {
        Self {
            plans: reference.plans.plans().to_vec(),
            add_ons: reference.add_ons.clone(),
            billing_cycles: BillingCycle::ALL.into_iter().map(BillingCycleView::from).collect(),
        }
    }
}
