//! Traits for storage abstraction and extensibility

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::*;

/// Storage abstraction for invoices and receipts
///
/// This trait allows the billing core to work with any storage backend
/// (PostgreSQL, MySQL, SQLite, in-memory, etc.) by implementing these methods.
#[async_trait]
pub trait InvoiceStorage: Send + Sync {
    /// Save an invoice to storage
    async fn save_invoice(&mut self, invoice: &Invoice) -> BillingResult<()>;

    /// Get an invoice by ID
    async fn get_invoice(&self, invoice_id: Uuid) -> BillingResult<Option<Invoice>>;

    /// List all invoices, optionally filtered by payment status
    async fn list_invoices(&self, status: Option<PaymentStatus>) -> BillingResult<Vec<Invoice>>;

    /// List invoices issued within a date range (inclusive on both ends)
    async fn get_invoices_by_date_range(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> BillingResult<Vec<Invoice>>;

    /// Update an existing invoice
    async fn update_invoice(&mut self, invoice: &Invoice) -> BillingResult<()>;

    /// Delete an invoice
    async fn delete_invoice(&mut self, invoice_id: Uuid) -> BillingResult<()>;

    /// Save a payment receipt
    async fn save_receipt(&mut self, receipt: &Receipt) -> BillingResult<()>;

    /// List all receipts recorded against an invoice
    async fn get_invoice_receipts(&self, invoice_id: Uuid) -> BillingResult<Vec<Receipt>>;
}

/// Trait for implementing custom invoice validation rules
pub trait InvoiceValidator: Send + Sync {
    /// Validate an invoice before it is persisted
    fn validate_invoice(&self, invoice: &Invoice) -> BillingResult<()>;
}

/// Default invoice validator with basic rules
pub struct DefaultInvoiceValidator;

impl InvoiceValidator for DefaultInvoiceValidator {
    fn validate_invoice(&self, invoice: &Invoice) -> BillingResult<()> {
        if invoice.line_items.is_empty() {
            return Err(BillingError::Validation(
                "Invoice must have at least one line item".to_string(),
            ));
        }

        for item in &invoice.line_items {
            if item.description.trim().is_empty() {
                return Err(BillingError::Validation(
                    "Line item description cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
