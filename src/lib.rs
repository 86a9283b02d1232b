//! # Billing Core
//!
//! A clinic billing library providing invoice calculation with Indian GST
//! compliance, discounting, payment tracking, and receipt records.
//!
//! ## Features
//!
//! - **Invoice calculation**: per-line GST on discounted amounts, summed into
//!   an invoice-level breakdown and grand total
//! - **GST compliance**: CGST/SGST split for intra-state supplies, IGST for
//!   inter-state supplies
//! - **Payment tracking**: monotonic paid amounts with a derived
//!   Pending/Partial/Paid status and explicit cancellation
//! - **Receipts**: a data record per accepted payment
//! - **Reporting**: period GST summaries across invoices
//! - **Storage abstraction**: database-agnostic design with trait-based storage
//!
//! ## Quick Start
//!
//! ```rust
//! use billing_core::{compute_totals, LineItem, TaxConfiguration};
//! use bigdecimal::BigDecimal;
//!
//! let items = vec![LineItem::new(
//!     "Consultation".to_string(),
//!     BigDecimal::from(1000),
//!     1,
//!     BigDecimal::from(18),
//! )];
//!
//! let totals = compute_totals(&items, &BigDecimal::from(0), &TaxConfiguration::intra_state());
//! assert_eq!(totals.total, BigDecimal::from(1180));
//! ```

pub mod billing;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use billing::*;
pub use tax::gst::*;
pub use traits::*;
pub use types::*;
