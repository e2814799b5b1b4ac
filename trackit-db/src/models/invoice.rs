use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub name: HeaplessString<50>,
    pub description: HeaplessString<100>,
    pub quantity: u32,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Longest order reference an invoice can be raised against.
pub const ORDER_REF_MAX_LEN: usize = 30;

/// Invoice issued for a shipment. Generated on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceModel {
    /// Derived from the order reference; `INV-` is one longer than `TRK`
    pub invoice_number: HeaplessString<{ ORDER_REF_MAX_LEN + 1 }>,
    pub issued_on: NaiveDate,
    pub customer_name: HeaplessString<100>,
    pub address: HeaplessString<200>,

    /// Tracking reference the invoice was raised against
    pub order_ref: HeaplessString<ORDER_REF_MAX_LEN>,

    pub items: Vec<InvoiceLineItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl InvoiceModel {
    /// Issue date in long form, e.g. `03 January 2026`
    pub fn issued_on_display(&self) -> String {
        self.issued_on.format("%d %B %Y").to_string()
    }
}
