//! Billing module containing the invoice calculator, payment transitions,
//! and invoice lifecycle management

pub mod calculator;
pub mod invoice;
pub mod payment;

pub use calculator::*;
pub use invoice::*;
pub use payment::*;
