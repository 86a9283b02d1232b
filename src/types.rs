//! Core types and data structures for the billing system

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::billing::calculator::{compute_totals, InvoiceTotals};
use crate::billing::payment::derive_status;

/// A single billable line on an invoice
///
/// Line items are immutable once attached to an invoice; edits happen by
/// rebuilding the invoice before submission. Numeric fields default to zero
/// when absent from serialized input; validation (not deserialization) is
/// responsible for rejecting a zero quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Service or item description (e.g. "Consultation", "X-Ray")
    pub description: String,
    /// Price per unit before discount and tax
    #[serde(default)]
    pub unit_cost: BigDecimal,
    /// Number of units, at least 1 for a valid line
    #[serde(default)]
    pub quantity: u32,
    /// GST rate percentage for this line (0 to 28)
    #[serde(default)]
    pub gst_rate: BigDecimal,
}

impl LineItem {
    /// Create a new line item
    pub fn new(
        description: String,
        unit_cost: BigDecimal,
        quantity: u32,
        gst_rate: BigDecimal,
    ) -> Self {
        Self {
            description,
            unit_cost,
            quantity,
            gst_rate,
        }
    }

    /// Line total before discount and tax
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_cost * BigDecimal::from(self.quantity)
    }
}

/// Tax configuration governing how GST is applied to an invoice
///
/// When `include_gst` is false no tax is computed at all. When true, the
/// place-of-supply flag decides the split: inter-state supplies are taxed
/// entirely as IGST, intra-state supplies split the rate evenly between
/// CGST and SGST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    /// Whether GST is applied at all
    pub include_gst: bool,
    /// Whether the supply crosses state lines (IGST instead of CGST+SGST)
    pub is_inter_state: bool,
}

impl TaxConfiguration {
    /// GST disabled, no tax computed
    pub fn without_gst() -> Self {
        Self {
            include_gst: false,
            is_inter_state: false,
        }
    }

    /// Intra-state supply: tax split evenly between CGST and SGST
    pub fn intra_state() -> Self {
        Self {
            include_gst: true,
            is_inter_state: false,
        }
    }

    /// Inter-state supply: tax assigned entirely to IGST
    pub fn inter_state() -> Self {
        Self {
            include_gst: true,
            is_inter_state: true,
        }
    }
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self::without_gst()
    }
}

/// Payment status of an invoice, derived from paid amount versus total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing paid yet
    Pending,
    /// Partially paid, balance outstanding
    Partial,
    /// Fully paid
    Paid,
    /// Cancelled, no further payments accepted
    Cancelled,
}

/// A clinic invoice with computed totals and payment state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice
    pub id: Uuid,
    /// Date the invoice was issued
    pub date: NaiveDate,
    /// Optional patient reference (registration number, name, etc.)
    pub patient_ref: Option<String>,
    /// Billable lines
    pub line_items: Vec<LineItem>,
    /// Discount percentage applied uniformly to the pre-tax subtotal (0 to 100)
    pub discount_percent: BigDecimal,
    /// GST configuration for this invoice
    pub tax_config: TaxConfiguration,
    /// Derived subtotal, tax breakdown, and grand total
    pub totals: InvoiceTotals,
    /// Cumulative amount paid, only ever increases until total is reached
    pub paid_amount: BigDecimal,
    /// Current payment status
    pub status: PaymentStatus,
    /// Additional metadata
    pub metadata: HashMap<String, String>,
    /// When the invoice was created
    pub created_at: NaiveDateTime,
    /// When the invoice was last updated
    pub updated_at: NaiveDateTime,
}

impl Invoice {
    /// Create a new invoice, computing totals from its line items
    pub fn new(
        date: NaiveDate,
        patient_ref: Option<String>,
        line_items: Vec<LineItem>,
        discount_percent: BigDecimal,
        tax_config: TaxConfiguration,
    ) -> Self {
        let totals = compute_totals(&line_items, &discount_percent, &tax_config);
        let paid_amount = BigDecimal::from(0);
        // A zero-total invoice (100% discount, zero-cost lines) has nothing
        // owed and starts out Paid.
        let status = derive_status(&totals.total, &paid_amount);
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4(),
            date,
            patient_ref,
            line_items,
            discount_percent,
            tax_config,
            totals,
            paid_amount,
            status,
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Amount still owed on the invoice
    pub fn balance_due(&self) -> BigDecimal {
        &self.totals.total - &self.paid_amount
    }

    /// Whether the invoice has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.status == PaymentStatus::Cancelled
    }
}

/// Record of a single accepted payment against an invoice
///
/// Rendering (PDF, print) is out of scope here; this is the data the
/// receipt layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier for the receipt
    pub id: Uuid,
    /// Invoice this payment was applied to
    pub invoice_id: Uuid,
    /// Amount paid in this installment
    pub amount: BigDecimal,
    /// Balance remaining on the invoice after this payment
    pub balance_due: BigDecimal,
    /// Date of payment
    pub date: NaiveDate,
    /// When the receipt was created
    pub created_at: NaiveDateTime,
}

impl Receipt {
    /// Create a new receipt for a payment against an invoice
    pub fn new(
        invoice_id: Uuid,
        amount: BigDecimal,
        balance_due: BigDecimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_id,
            amount,
            balance_due,
            date,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Errors that can occur in the billing system
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(String),
    #[error("Invalid payment amount: {0}")]
    InvalidPaymentAmount(String),
    #[error("Invoice is cancelled: {0}")]
    InvoiceCancelled(String),
}

/// Result type for billing operations
pub type BillingResult<T> = Result<T, BillingError>;
