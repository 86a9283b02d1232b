//! Payment state transitions for invoices

use bigdecimal::BigDecimal;

use crate::types::{BillingError, BillingResult, Invoice, PaymentStatus};

/// Derive the payment status from an invoice total and cumulative paid amount
///
/// `Paid` when the total is covered, `Partial` when something but not
/// everything has been paid, `Pending` when nothing has. A zero-total invoice
/// is `Paid` outright. Cancellation is a separate action and never derived.
pub fn derive_status(total: &BigDecimal, paid_amount: &BigDecimal) -> PaymentStatus {
    if paid_amount >= total {
        PaymentStatus::Paid
    } else if *paid_amount > BigDecimal::from(0) {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Pending
    }
}

impl Invoice {
    /// Apply a payment to the invoice
    ///
    /// The amount must be positive and must not exceed the outstanding
    /// balance; the paid amount only ever increases. Recomputes the payment
    /// status from the updated paid amount.
    pub fn apply_payment(&mut self, amount: &BigDecimal) -> BillingResult<()> {
        if self.is_cancelled() {
            return Err(BillingError::InvoiceCancelled(self.id.to_string()));
        }

        if *amount <= BigDecimal::from(0) {
            return Err(BillingError::InvalidPaymentAmount(
                "Payment amount must be positive".to_string(),
            ));
        }

        let balance = self.balance_due();
        if *amount > balance {
            return Err(BillingError::InvalidPaymentAmount(format!(
                "Payment amount {} exceeds outstanding balance {}",
                amount, balance
            )));
        }

        self.paid_amount += amount;
        self.status = derive_status(&self.totals.total, &self.paid_amount);
        self.updated_at = chrono::Utc::now().naive_utc();

        Ok(())
    }

    /// Cancel the invoice, blocking any further payments
    pub fn cancel(&mut self) {
        self.status = PaymentStatus::Cancelled;
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}
