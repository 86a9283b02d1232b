//! Invoice total calculation: subtotal, discount, GST breakdown, grand total

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::tax::gst::line_tax;
use crate::types::{LineItem, TaxConfiguration};

/// Computed money breakdown for an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line totals before discount and tax
    pub subtotal: BigDecimal,
    /// Discount applied to the subtotal
    pub discount_amount: BigDecimal,
    /// Total CGST across all lines
    pub cgst: BigDecimal,
    /// Total SGST across all lines
    pub sgst: BigDecimal,
    /// Total IGST across all lines
    pub igst: BigDecimal,
    /// Grand total: discounted subtotal plus all GST
    pub total: BigDecimal,
}

impl InvoiceTotals {
    /// Totals for an empty invoice
    pub fn zero() -> Self {
        Self {
            subtotal: BigDecimal::from(0),
            discount_amount: BigDecimal::from(0),
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: BigDecimal::from(0),
            total: BigDecimal::from(0),
        }
    }

    /// Total GST amount across all components
    pub fn total_gst(&self) -> BigDecimal {
        &self.cgst + &self.sgst + &self.igst
    }
}

/// Compute invoice totals from line items, a uniform discount percentage,
/// and a tax configuration
///
/// Tax is computed per line on the discounted line amount, then summed.
/// Lines carry their own GST rates, so taxing an aggregate would give the
/// wrong answer whenever rates differ across lines.
///
/// Pure and infallible: no hidden state, identical inputs give identical
/// outputs. Input-range checks (quantity, rate and discount bounds) live in
/// [`crate::utils::validation`], applied at invoice submission.
pub fn compute_totals(
    line_items: &[LineItem],
    discount_percent: &BigDecimal,
    tax_config: &TaxConfiguration,
) -> InvoiceTotals {
    let hundred = BigDecimal::from(100);
    let discount_factor = (&hundred - discount_percent) / &hundred;

    let mut totals = InvoiceTotals::zero();

    for item in line_items {
        let line_total = item.line_total();
        let line_discounted = &line_total * &discount_factor;

        let tax = line_tax(&line_discounted, &item.gst_rate, tax_config);
        totals.cgst += tax.cgst;
        totals.sgst += tax.sgst;
        totals.igst += tax.igst;

        totals.subtotal += line_total;
    }

    totals.discount_amount = &totals.subtotal * discount_percent / &hundred;
    totals.total = &totals.subtotal * &discount_factor
        + &totals.cgst
        + &totals.sgst
        + &totals.igst;

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(cost: i64, qty: u32, rate: i64) -> LineItem {
        LineItem::new(
            "Service".to_string(),
            BigDecimal::from(cost),
            qty,
            BigDecimal::from(rate),
        )
    }

    #[test]
    fn test_intra_state_single_item() {
        let totals = compute_totals(
            &[item(1000, 1, 18)],
            &BigDecimal::from(0),
            &TaxConfiguration::intra_state(),
        );

        assert_eq!(totals.subtotal, BigDecimal::from(1000));
        assert_eq!(totals.cgst, BigDecimal::from(90));
        assert_eq!(totals.sgst, BigDecimal::from(90));
        assert_eq!(totals.igst, BigDecimal::from(0));
        assert_eq!(totals.total, BigDecimal::from(1180));
    }

    #[test]
    fn test_inter_state_single_item() {
        let totals = compute_totals(
            &[item(1000, 1, 18)],
            &BigDecimal::from(0),
            &TaxConfiguration::inter_state(),
        );

        assert_eq!(totals.cgst, BigDecimal::from(0));
        assert_eq!(totals.sgst, BigDecimal::from(0));
        assert_eq!(totals.igst, BigDecimal::from(180));
        assert_eq!(totals.total, BigDecimal::from(1180));
    }

    #[test]
    fn test_discount_applied_before_tax() {
        let totals = compute_totals(
            &[item(1000, 1, 18)],
            &BigDecimal::from(10),
            &TaxConfiguration::intra_state(),
        );

        // Discounted line amount is 900, taxed at 9% per component
        assert_eq!(totals.subtotal, BigDecimal::from(1000));
        assert_eq!(totals.discount_amount, BigDecimal::from(100));
        assert_eq!(totals.cgst, BigDecimal::from(81));
        assert_eq!(totals.sgst, BigDecimal::from(81));
        assert_eq!(totals.total, BigDecimal::from(1062));
    }

    #[test]
    fn test_gst_disabled() {
        let totals = compute_totals(
            &[item(1000, 1, 18), item(500, 2, 5)],
            &BigDecimal::from(10),
            &TaxConfiguration::without_gst(),
        );

        assert_eq!(totals.subtotal, BigDecimal::from(2000));
        assert_eq!(totals.total_gst(), BigDecimal::from(0));
        assert_eq!(totals.total, BigDecimal::from(1800));
    }

    #[test]
    fn test_mixed_rates_taxed_per_line() {
        // 18% consultation plus 5% medicines: an aggregate rate would be wrong
        let totals = compute_totals(
            &[item(1000, 1, 18), item(200, 2, 5)],
            &BigDecimal::from(0),
            &TaxConfiguration::intra_state(),
        );

        // 1000 * 9% + 400 * 2.5% = 90 + 10 per component
        assert_eq!(totals.subtotal, BigDecimal::from(1400));
        assert_eq!(totals.cgst, BigDecimal::from(100));
        assert_eq!(totals.sgst, BigDecimal::from(100));
        assert_eq!(totals.total, BigDecimal::from(1600));
    }

    #[test]
    fn test_quantity_multiplies_line_total() {
        let totals = compute_totals(
            &[item(250, 4, 12)],
            &BigDecimal::from(0),
            &TaxConfiguration::inter_state(),
        );

        assert_eq!(totals.subtotal, BigDecimal::from(1000));
        assert_eq!(totals.igst, BigDecimal::from(120));
        assert_eq!(totals.total, BigDecimal::from(1120));
    }

    #[test]
    fn test_full_discount() {
        let totals = compute_totals(
            &[item(1000, 1, 18)],
            &BigDecimal::from(100),
            &TaxConfiguration::intra_state(),
        );

        assert_eq!(totals.discount_amount, BigDecimal::from(1000));
        assert_eq!(totals.total, BigDecimal::from(0));
    }

    #[test]
    fn test_empty_invoice() {
        let totals = compute_totals(
            &[],
            &BigDecimal::from(0),
            &TaxConfiguration::intra_state(),
        );
        assert_eq!(totals, InvoiceTotals::zero());
    }

    #[test]
    fn test_idempotent() {
        let items = [item(1000, 1, 18), item(300, 3, 12)];
        let first = compute_totals(&items, &BigDecimal::from(5), &TaxConfiguration::intra_state());
        let second = compute_totals(&items, &BigDecimal::from(5), &TaxConfiguration::intra_state());
        assert_eq!(first, second);
    }

    #[test]
    fn test_invariant_total_decomposition() {
        let items = [item(799, 2, 18), item(150, 3, 5)];
        let totals = compute_totals(
            &items,
            &BigDecimal::from(15),
            &TaxConfiguration::intra_state(),
        );

        let expected = &totals.subtotal - &totals.discount_amount
            + &totals.cgst
            + &totals.sgst
            + &totals.igst;
        assert_eq!(totals.total, expected);
        assert_eq!(totals.cgst, totals.sgst);
    }
}
