//! Validation utilities for billing inputs

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Validate that a unit cost is not negative
pub fn validate_unit_cost(unit_cost: &BigDecimal) -> BillingResult<()> {
    if *unit_cost < BigDecimal::from(0) {
        Err(BillingError::Validation(
            "Unit cost cannot be negative".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a quantity is at least 1
pub fn validate_quantity(quantity: u32) -> BillingResult<()> {
    if quantity < 1 {
        Err(BillingError::Validation(
            "Quantity must be at least 1".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a GST rate percentage is within the legal slab range
pub fn validate_gst_rate_percent(gst_rate: &BigDecimal) -> BillingResult<()> {
    if *gst_rate < BigDecimal::from(0) || *gst_rate > BigDecimal::from(28) {
        return Err(BillingError::Validation(format!(
            "GST rate must be between 0 and 28 percent, got {}",
            gst_rate
        )));
    }
    Ok(())
}

/// Validate that a discount percentage is within [0, 100]
pub fn validate_discount_percent(discount: &BigDecimal) -> BillingResult<()> {
    if *discount < BigDecimal::from(0) || *discount > BigDecimal::from(100) {
        return Err(BillingError::Validation(format!(
            "Discount must be between 0 and 100 percent, got {}",
            discount
        )));
    }
    Ok(())
}

/// Validate a single line item's numeric fields
pub fn validate_line_item(item: &LineItem) -> BillingResult<()> {
    validate_unit_cost(&item.unit_cost)?;
    validate_quantity(item.quantity)?;
    validate_gst_rate_percent(&item.gst_rate)?;
    Ok(())
}

/// Strict invoice validator layering the numeric range checks on top of the
/// default structural rules
pub struct StrictInvoiceValidator;

impl InvoiceValidator for StrictInvoiceValidator {
    fn validate_invoice(&self, invoice: &Invoice) -> BillingResult<()> {
        DefaultInvoiceValidator.validate_invoice(invoice)?;

        validate_discount_percent(&invoice.discount_percent)?;
        for item in &invoice.line_items {
            validate_line_item(item)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost_bounds() {
        assert!(validate_unit_cost(&BigDecimal::from(0)).is_ok());
        assert!(validate_unit_cost(&BigDecimal::from(500)).is_ok());
        assert!(validate_unit_cost(&BigDecimal::from(-1)).is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_gst_rate_bounds() {
        assert!(validate_gst_rate_percent(&BigDecimal::from(0)).is_ok());
        assert!(validate_gst_rate_percent(&BigDecimal::from(28)).is_ok());
        assert!(validate_gst_rate_percent(&BigDecimal::from(29)).is_err());
        assert!(validate_gst_rate_percent(&BigDecimal::from(-5)).is_err());
    }

    #[test]
    fn test_discount_bounds() {
        assert!(validate_discount_percent(&BigDecimal::from(0)).is_ok());
        assert!(validate_discount_percent(&BigDecimal::from(100)).is_ok());
        assert!(validate_discount_percent(&BigDecimal::from(101)).is_err());
    }
}
