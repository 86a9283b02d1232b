//! GST breakdown examples for clinic invoices

use bigdecimal::BigDecimal;
use billing_core::{compute_totals, GstSlab, LineItem, TaxConfiguration};

fn main() {
    println!("🧾 Billing Core - GST Breakdown Examples\n");

    println!("📊 Standard GST Slabs for Clinic Billing:");
    let slabs = [
        (GstSlab::ExemptHealthcare, "Exempt healthcare services"),
        (GstSlab::Medicines, "Essential medicines"),
        (GstSlab::MedicalDevices, "Medical devices and diagnostics"),
        (GstSlab::GeneralServices, "General services and supplies"),
        (GstSlab::Cosmetic, "Cosmetic and elective procedures"),
    ];

    for (slab, description) in slabs.iter() {
        println!("  {:?}: {}% - {}", slab, slab.rate(), description);
    }
    println!();

    let items = vec![
        LineItem::new(
            "Specialist consultation".to_string(),
            BigDecimal::from(1000),
            1,
            GstSlab::GeneralServices.rate(),
        ),
        LineItem::new(
            "Antibiotic course".to_string(),
            BigDecimal::from(120),
            2,
            GstSlab::Medicines.rate(),
        ),
    ];

    println!("🏥 Intra-state Invoice (CGST + SGST):");
    let intra = compute_totals(
        &items,
        &BigDecimal::from(0),
        &TaxConfiguration::intra_state(),
    );
    println!("  Subtotal:    ₹{}", intra.subtotal);
    println!("  CGST:        ₹{}", intra.cgst);
    println!("  SGST:        ₹{}", intra.sgst);
    println!("  IGST:        ₹{}", intra.igst);
    println!("  Grand Total: ₹{}", intra.total);
    println!();

    println!("🌍 Inter-state Invoice (IGST only):");
    let inter = compute_totals(
        &items,
        &BigDecimal::from(0),
        &TaxConfiguration::inter_state(),
    );
    println!("  Subtotal:    ₹{}", inter.subtotal);
    println!("  CGST:        ₹{}", inter.cgst);
    println!("  SGST:        ₹{}", inter.sgst);
    println!("  IGST:        ₹{}", inter.igst);
    println!("  Grand Total: ₹{}", inter.total);
    println!();

    println!("💸 Same Invoice with a 10% Discount (intra-state):");
    let discounted = compute_totals(
        &items,
        &BigDecimal::from(10),
        &TaxConfiguration::intra_state(),
    );
    println!("  Subtotal:    ₹{}", discounted.subtotal);
    println!("  Discount:    ₹{}", discounted.discount_amount);
    println!("  Total GST:   ₹{}", discounted.total_gst());
    println!("  Grand Total: ₹{}", discounted.total);
}
