//! End-to-end clinic invoicing example: create an invoice, take payments,
//! and summarize GST for the month

use bigdecimal::BigDecimal;
use billing_core::{
    utils::MemoryStorage, InvoiceManager, LineItem, NewInvoiceParams, TaxConfiguration,
};
use chrono::NaiveDate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏥 Billing Core - Clinic Invoice Walkthrough\n");

    let storage = MemoryStorage::new();
    let mut manager = InvoiceManager::new(storage);

    let visit_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let invoice = manager
        .create_invoice(NewInvoiceParams {
            date: visit_date,
            patient_ref: Some("PAT-1001".to_string()),
            line_items: vec![
                LineItem::new(
                    "Consultation".to_string(),
                    BigDecimal::from(1000),
                    1,
                    BigDecimal::from(18),
                ),
                LineItem::new(
                    "Dressing kit".to_string(),
                    BigDecimal::from(150),
                    1,
                    BigDecimal::from(12),
                ),
            ],
            discount_percent: BigDecimal::from(5),
            tax_config: TaxConfiguration::intra_state(),
        })
        .await?;

    println!("📄 Invoice {} for {:?}", invoice.id, invoice.patient_ref);
    println!("  Subtotal:    ₹{}", invoice.totals.subtotal);
    println!("  Discount:    ₹{}", invoice.totals.discount_amount);
    println!("  CGST:        ₹{}", invoice.totals.cgst);
    println!("  SGST:        ₹{}", invoice.totals.sgst);
    println!("  Grand Total: ₹{}", invoice.totals.total);
    println!();

    let first = manager
        .record_payment(invoice.id, BigDecimal::from(800), visit_date)
        .await?;
    println!(
        "💳 Payment of ₹{} received, balance ₹{}",
        first.amount, first.balance_due
    );

    let second = manager
        .record_payment(
            invoice.id,
            first.balance_due.clone(),
            NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
        )
        .await?;
    println!(
        "💳 Payment of ₹{} received, balance ₹{}",
        second.amount, second.balance_due
    );

    let settled = manager.get_invoice_required(invoice.id).await?;
    println!("  Status: {:?}\n", settled.status);

    let summary = manager
        .gst_summary(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .await?;

    println!("📈 March GST Summary:");
    println!("  Invoices:   {}", summary.invoice_count);
    println!("  Billed:     ₹{}", summary.total_billed);
    println!("  CGST:       ₹{}", summary.total_cgst);
    println!("  SGST:       ₹{}", summary.total_sgst);
    println!("  IGST:       ₹{}", summary.total_igst);
    println!("  Collected:  ₹{}", summary.total_collected);
    println!("  Outstanding: ₹{}", summary.outstanding);

    Ok(())
}
