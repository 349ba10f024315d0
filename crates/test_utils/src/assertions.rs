//! Custom Test Assertions
//!
//! Provides assertion helpers for invoice records that give more meaningful
//! failure messages than comparing fields one by one.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_pricing::{InvoiceRecord, TaxRegime};

/// Asserts that two Money values are equal in currency and amount
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts the tax parts of an invoice add back up to its totals
///
/// # Panics
///
/// Panics if CGST + SGST + IGST differs from the total tax, if the total is
/// not taxable amount plus tax, or if the populated parts do not match the
/// regime.
pub fn assert_tax_reconciles(invoice: &InvoiceRecord) {
    let tax = &invoice.tax;
    assert_eq!(
        tax.cgst + tax.sgst + tax.igst,
        invoice.total_tax,
        "Tax parts do not sum to total tax: cgst={}, sgst={}, igst={}, total_tax={}",
        tax.cgst,
        tax.sgst,
        tax.igst,
        invoice.total_tax
    );
    assert_eq!(
        invoice.total,
        invoice.taxable_amount + invoice.total_tax,
        "Total {} is not taxable {} plus tax {}",
        invoice.total,
        invoice.taxable_amount,
        invoice.total_tax
    );

    match invoice.tax_regime {
        TaxRegime::IntraState => assert!(
            tax.igst.is_zero() && tax.sgst - tax.cgst <= Decimal::ONE,
            "Intra-state split is uneven: cgst={}, sgst={}, igst={}",
            tax.cgst,
            tax.sgst,
            tax.igst
        ),
        TaxRegime::InterState => assert!(
            tax.cgst.is_zero() && tax.sgst.is_zero(),
            "Inter-state invoice has CGST/SGST: cgst={}, sgst={}",
            tax.cgst,
            tax.sgst
        ),
        TaxRegime::Exempt => assert!(
            invoice.total_tax.is_zero(),
            "Exempt invoice carries tax {}",
            invoice.total_tax
        ),
    }
}

/// Asserts the promo discount stays within the subtotal
pub fn assert_discount_bounded(invoice: &InvoiceRecord) {
    assert!(
        invoice.promo_discount >= Decimal::ZERO && invoice.promo_discount <= invoice.subtotal,
        "Discount {} outside [0, {}]",
        invoice.promo_discount,
        invoice.subtotal
    );
    assert!(
        invoice.taxable_amount >= Decimal::ZERO,
        "Negative taxable amount {}",
        invoice.taxable_amount
    );
}

/// Asserts every amount on the invoice is a whole currency unit
pub fn assert_whole_units(invoice: &InvoiceRecord) {
    let amounts = [
        ("subtotal", invoice.subtotal),
        ("promo_discount", invoice.promo_discount),
        ("taxable_amount", invoice.taxable_amount),
        ("total_tax", invoice.total_tax),
        ("total", invoice.total),
    ];
    for (name, amount) in amounts {
        assert_eq!(amount, amount.trunc(), "{name} is not a whole unit: {amount}");
    }
}
