//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating checkout inputs, including
//! out-of-range counts the pipeline is expected to clamp.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::Currency;
use domain_pricing::{AddOnCategory, AddOnSelections, BillingAddress, BillingCycle};

use crate::builders::QuoteBuilder;

/// Strategy for generating Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy for generating billing cycles
pub fn billing_cycle_strategy() -> impl Strategy<Value = BillingCycle> {
    prop::sample::select(BillingCycle::ALL.to_vec())
}

/// Strategy for generating plan ids from the standard catalog
pub fn plan_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("vps-starter".to_string()),
        Just("vps-basic".to_string()),
        Just("vps-standard".to_string()),
        Just("vps-pro".to_string()),
        Just("vps-business".to_string()),
    ]
}

/// Strategy for promo inputs: known, unknown, blank and absent codes
pub fn promo_code_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("WELCOME10".to_string())),
        Just(Some(" save20 ".to_string())),
        Just(Some("BOGUS".to_string())),
        Just(Some(String::new())),
        "[A-Z0-9]{1,12}".prop_map(Some),
    ]
}

/// Strategy for billing addresses across every tax regime
pub fn address_strategy() -> impl Strategy<Value = BillingAddress> {
    prop_oneof![
        Just(BillingAddress::new("India", "Uttar Pradesh")),
        Just(BillingAddress::new("Bharat", "U.P.")),
        Just(BillingAddress::new("India", "Tamil Nadu")),
        Just(BillingAddress::new("IN", "")),
        Just(BillingAddress::new("United Kingdom", "London")),
        Just(BillingAddress::new("", "")),
    ]
}

/// Strategy for add-on selections, counts deliberately out of range
pub fn add_on_selections_strategy() -> impl Strategy<Value = AddOnSelections> {
    (
        -5i64..20,
        -50i64..1500,
        -5i64..150,
        prop::option::of(prop::sample::select(vec!["plesk-web-admin", "plesk-web-host", "cpanel"])),
        prop::option::of(prop::sample::select(vec!["positive-ssl", "ev-ssl"])),
    )
        .prop_map(|(ipv4, storage, bandwidth, panel, ssl)| {
            let mut selections = AddOnSelections::default()
                .with_ipv4(ipv4)
                .with_storage_gb(storage)
                .with_bandwidth_tb(bandwidth);
            if let Some(panel) = panel {
                selections = selections.with_tier(AddOnCategory::ControlPanel, panel);
            }
            if let Some(ssl) = ssl {
                selections = selections.with_tier(AddOnCategory::SslCertificate, ssl);
            }
            selections
        })
}

/// Strategy for whole-unit amounts, including negatives
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..100_000_000i64).prop_map(Decimal::from)
}

/// Strategy for amounts with up to four fraction digits
pub fn fractional_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64, 0u32..5u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for complete quote builders
pub fn quote_builder_strategy() -> impl Strategy<Value = QuoteBuilder> {
    (
        plan_id_strategy(),
        billing_cycle_strategy(),
        -10i64..200,
        add_on_selections_strategy(),
        address_strategy(),
        promo_code_strategy(),
    )
        .prop_map(|(plan, cycle, quantity, add_ons, address, promo)| {
            let builder = QuoteBuilder::new()
                .with_plan(plan)
                .with_billing_cycle(cycle)
                .with_quantity(quantity)
                .with_add_ons(add_ons)
                .with_address(address);
            match promo {
                Some(code) => builder.with_promo(code),
                None => builder,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_quotes_keep_subtotal_non_negative(builder in quote_builder_strategy()) {
            let invoice = builder.compute().invoice;
            prop_assert!(invoice.subtotal >= Decimal::ZERO);
            prop_assert!(invoice.quantity >= 1 && invoice.quantity <= 100);
        }

        #[test]
        fn generated_currency_has_a_code(currency in currency_strategy()) {
            prop_assert_eq!(currency.code().len(), 3);
        }
    }
}
