//! In-memory storage implementation for testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    invoices: Arc<RwLock<HashMap<Uuid, Invoice>>>,
    receipts: Arc<RwLock<HashMap<Uuid, Receipt>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.invoices.write().unwrap().clear();
        self.receipts.write().unwrap().clear();
    }
}

#[async_trait]
impl InvoiceStorage for MemoryStorage {
    async fn save_invoice(&mut self, invoice: &Invoice) -> BillingResult<()> {
        self.invoices
            .write()
            .unwrap()
            .insert(invoice.id, invoice.clone());
        Ok(())
    }

    async fn get_invoice(&self, invoice_id: Uuid) -> BillingResult<Option<Invoice>> {
        Ok(self.invoices.read().unwrap().get(&invoice_id).cloned())
    }

    async fn list_invoices(&self, status: Option<PaymentStatus>) -> BillingResult<Vec<Invoice>> {
        let invoices = self.invoices.read().unwrap();
        let filtered: Vec<Invoice> = invoices
            .values()
            .filter(|invoice| status.is_none_or(|s| invoice.status == s))
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn get_invoices_by_date_range(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> BillingResult<Vec<Invoice>> {
        let invoices = self.invoices.read().unwrap();
        let filtered: Vec<Invoice> = invoices
            .values()
            .filter(|invoice| {
                if let Some(start) = start_date {
                    if invoice.date < start {
                        return false;
                    }
                }
                if let Some(end) = end_date {
                    if invoice.date > end {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn update_invoice(&mut self, invoice: &Invoice) -> BillingResult<()> {
        if self.invoices.read().unwrap().contains_key(&invoice.id) {
            self.invoices
                .write()
                .unwrap()
                .insert(invoice.id, invoice.clone());
            Ok(())
        } else {
            Err(BillingError::InvoiceNotFound(invoice.id.to_string()))
        }
    }

    async fn delete_invoice(&mut self, invoice_id: Uuid) -> BillingResult<()> {
        if self.invoices.write().unwrap().remove(&invoice_id).is_some() {
            Ok(())
        } else {
            Err(BillingError::InvoiceNotFound(invoice_id.to_string()))
        }
    }

    async fn save_receipt(&mut self, receipt: &Receipt) -> BillingResult<()> {
        self.receipts
            .write()
            .unwrap()
            .insert(receipt.id, receipt.clone());
        Ok(())
    }

    async fn get_invoice_receipts(&self, invoice_id: Uuid) -> BillingResult<Vec<Receipt>> {
        let receipts = self.receipts.read().unwrap();
        let mut matching: Vec<Receipt> = receipts
            .values()
            .filter(|receipt| receipt.invoice_id == invoice_id)
            .cloned()
            .collect();
        matching.sort_by_key(|receipt| receipt.created_at);
        Ok(matching)
    }
}
