//! GST (Goods and Services Tax) slab rates and the per-line split used by
//! the invoice calculator

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::TaxConfiguration;

/// Standard Indian GST slabs as they apply to clinic billing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Exempt healthcare services (most clinical consultations) - 0%
    ExemptHealthcare,
    /// Essential medicines - 5%
    Medicines,
    /// Medical devices and diagnostics - 12%
    MedicalDevices,
    /// General services and supplies - 18%
    GeneralServices,
    /// Cosmetic and elective procedures - 28%
    Cosmetic,
}

impl GstSlab {
    /// The rate percentage for this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstSlab::ExemptHealthcare => BigDecimal::from(0),
            GstSlab::Medicines => BigDecimal::from(5),
            GstSlab::MedicalDevices => BigDecimal::from(12),
            GstSlab::GeneralServices => BigDecimal::from(18),
            GstSlab::Cosmetic => BigDecimal::from(28),
        }
    }
}

/// CGST/SGST/IGST amounts for a single taxed amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstAmounts {
    pub cgst: BigDecimal,
    pub sgst: BigDecimal,
    pub igst: BigDecimal,
}

impl GstAmounts {
    /// All components zero
    pub fn zero() -> Self {
        Self {
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: BigDecimal::from(0),
        }
    }

    /// Sum of all components
    pub fn total(&self) -> BigDecimal {
        &self.cgst + &self.sgst + &self.igst
    }
}

/// Compute the GST amounts for one taxable amount at one rate
///
/// Each invoice line is taxed independently through this function because
/// lines may carry different GST rates; the invoice-level breakdown is the
/// sum of per-line amounts, never an aggregate-then-split.
///
/// The split follows Indian GST convention: inter-state supplies carry the
/// whole rate as IGST, intra-state supplies put exactly half the stated rate
/// into each of CGST and SGST.
pub fn line_tax(
    taxable_amount: &BigDecimal,
    gst_rate_percent: &BigDecimal,
    config: &TaxConfiguration,
) -> GstAmounts {
    if !config.include_gst {
        return GstAmounts::zero();
    }

    let hundred = BigDecimal::from(100);
    if config.is_inter_state {
        GstAmounts {
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: taxable_amount * gst_rate_percent / hundred,
        }
    } else {
        let half_rate = gst_rate_percent / BigDecimal::from(2);
        let half_tax = taxable_amount * half_rate / hundred;
        GstAmounts {
            cgst: half_tax.clone(),
            sgst: half_tax,
            igst: BigDecimal::from(0),
        }
    }
}
