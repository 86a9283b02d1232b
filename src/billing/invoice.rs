//! Invoice lifecycle management over a storage backend

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::StrictInvoiceValidator;

/// Parameters for creating a new invoice
pub struct NewInvoiceParams {
    pub date: NaiveDate,
    pub patient_ref: Option<String>,
    pub line_items: Vec<LineItem>,
    pub discount_percent: BigDecimal,
    pub tax_config: TaxConfiguration,
}

/// Invoice manager for handling invoice and payment operations
pub struct InvoiceManager<S: InvoiceStorage> {
    storage: S,
    validator: Box<dyn InvoiceValidator>,
}

impl<S: InvoiceStorage> InvoiceManager<S> {
    /// Create a new invoice manager with the strict validator
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(StrictInvoiceValidator),
        }
    }

    /// Create a new invoice manager with a custom validator
    pub fn with_validator(storage: S, validator: Box<dyn InvoiceValidator>) -> Self {
        Self { storage, validator }
    }

    /// Create and persist a new invoice
    ///
    /// Totals are computed at creation and stored with the invoice; the
    /// validator runs before anything is saved.
    pub async fn create_invoice(&mut self, params: NewInvoiceParams) -> BillingResult<Invoice> {
        let invoice = Invoice::new(
            params.date,
            params.patient_ref,
            params.line_items,
            params.discount_percent,
            params.tax_config,
        );

        self.validator.validate_invoice(&invoice)?;
        self.storage.save_invoice(&invoice).await?;

        Ok(invoice)
    }

    /// Get an invoice by ID
    pub async fn get_invoice(&self, invoice_id: Uuid) -> BillingResult<Option<Invoice>> {
        self.storage.get_invoice(invoice_id).await
    }

    /// Get an invoice by ID, returning an error if not found
    pub async fn get_invoice_required(&self, invoice_id: Uuid) -> BillingResult<Invoice> {
        self.storage
            .get_invoice(invoice_id)
            .await?
            .ok_or_else(|| BillingError::InvoiceNotFound(invoice_id.to_string()))
    }

    /// List all invoices, optionally filtered by payment status
    pub async fn list_invoices(
        &self,
        status: Option<PaymentStatus>,
    ) -> BillingResult<Vec<Invoice>> {
        self.storage.list_invoices(status).await
    }

    /// List invoices issued within a date range
    pub async fn get_invoices_by_date_range(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> BillingResult<Vec<Invoice>> {
        self.storage
            .get_invoices_by_date_range(start_date, end_date)
            .await
    }

    /// Record a payment against an invoice and produce a receipt
    ///
    /// The payment is applied through the invoice's own state transition,
    /// so amount bounds and cancellation rules are enforced before anything
    /// is persisted.
    pub async fn record_payment(
        &mut self,
        invoice_id: Uuid,
        amount: BigDecimal,
        date: NaiveDate,
    ) -> BillingResult<Receipt> {
        let mut invoice = self.get_invoice_required(invoice_id).await?;

        invoice.apply_payment(&amount)?;

        let receipt = Receipt::new(invoice.id, amount, invoice.balance_due(), date);

        self.storage.update_invoice(&invoice).await?;
        self.storage.save_receipt(&receipt).await?;

        Ok(receipt)
    }

    /// List all receipts recorded against an invoice
    pub async fn get_invoice_receipts(&self, invoice_id: Uuid) -> BillingResult<Vec<Receipt>> {
        self.storage.get_invoice_receipts(invoice_id).await
    }

    /// Cancel an invoice
    pub async fn cancel_invoice(&mut self, invoice_id: Uuid) -> BillingResult<Invoice> {
        let mut invoice = self.get_invoice_required(invoice_id).await?;
        invoice.cancel();
        self.storage.update_invoice(&invoice).await?;
        Ok(invoice)
    }

    /// Summarize billing and GST collected over a period
    ///
    /// Cancelled invoices are excluded from all aggregates.
    pub async fn gst_summary(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BillingResult<GstSummary> {
        let invoices = self
            .get_invoices_by_date_range(Some(start_date), Some(end_date))
            .await?;

        let mut summary = GstSummary::empty(start_date, end_date);

        for invoice in invoices.iter().filter(|i| !i.is_cancelled()) {
            summary.invoice_count += 1;
            summary.total_billed += &invoice.totals.total;
            summary.total_cgst += &invoice.totals.cgst;
            summary.total_sgst += &invoice.totals.sgst;
            summary.total_igst += &invoice.totals.igst;
            summary.total_collected += &invoice.paid_amount;
            summary.outstanding += invoice.balance_due();
        }

        Ok(summary)
    }
}

/// Billing and GST totals for a reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Number of non-cancelled invoices in the period
    pub invoice_count: usize,
    /// Sum of invoice grand totals
    pub total_billed: BigDecimal,
    pub total_cgst: BigDecimal,
    pub total_sgst: BigDecimal,
    pub total_igst: BigDecimal,
    /// Sum of paid amounts
    pub total_collected: BigDecimal,
    /// Sum of outstanding balances
    pub outstanding: BigDecimal,
}

impl GstSummary {
    fn empty(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            invoice_count: 0,
            total_billed: BigDecimal::from(0),
            total_cgst: BigDecimal::from(0),
            total_sgst: BigDecimal::from(0),
            total_igst: BigDecimal::from(0),
            total_collected: BigDecimal::from(0),
            outstanding: BigDecimal::from(0),
        }
    }

    /// Total GST collected across all components
    pub fn total_gst(&self) -> BigDecimal {
        &self.total_cgst + &self.total_sgst + &self.total_igst
    }
}
