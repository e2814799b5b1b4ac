use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use trackit_api::{ApiError, ApiResult};
use trackit_db::models::invoice::{InvoiceLineItem, InvoiceModel};
use trackit_db::utils::heapless_string;

use crate::mock_data::FEATURED_TRACKING_NUMBER;

/// Invoice number used when no order reference is given.
pub const FALLBACK_INVOICE_NUMBER: &str = "INV-999999";

const BILL_TO_NAME: &str = "John Smith";
const BILL_TO_ADDRESS: &str = "123 Main Street, San Francisco, CA 94102";

/// 5% tax on the subtotal
const TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

fn invalid(e: String) -> ApiError {
    ApiError::ValidationError(e)
}

fn line_item(name: &str, description: &str, rate: Decimal) -> ApiResult<InvoiceLineItem> {
    Ok(InvoiceLineItem {
        name: heapless_string(name).map_err(invalid)?,
        description: heapless_string(description).map_err(invalid)?,
        quantity: 1,
        rate,
        amount: rate,
    })
}

/// Derives the invoice number from an order reference: the first `TRK`
/// becomes `INV-`.
pub fn invoice_number_for(order_ref: Option<&str>) -> String {
    match order_ref {
        Some(order_ref) => order_ref.replacen("TRK", "INV-", 1),
        None => FALLBACK_INVOICE_NUMBER.to_string(),
    }
}

/// Builds the invoice for a shipment. A blank reference counts as missing.
pub fn generate_invoice(order_ref: Option<&str>, issued_on: NaiveDate) -> ApiResult<InvoiceModel> {
    let order_ref = order_ref.map(str::trim).filter(|r| !r.is_empty());

    let items = vec![
        line_item(
            "Standard Shipping Fee",
            "Express delivery - Zone A to Zone B",
            Decimal::new(7500, 2),
        )?,
        line_item("Fuel Surcharge", "Variable logistics surcharge", Decimal::new(1071, 2))?,
    ];

    let subtotal: Decimal = items.iter().map(|item| item.amount).sum();
    let tax = (subtotal * TAX_RATE).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + tax;

    let invoice = InvoiceModel {
        invoice_number: heapless_string(&invoice_number_for(order_ref)).map_err(invalid)?,
        issued_on,
        customer_name: heapless_string(BILL_TO_NAME).map_err(invalid)?,
        address: heapless_string(BILL_TO_ADDRESS).map_err(invalid)?,
        order_ref: heapless_string(order_ref.unwrap_or(FEATURED_TRACKING_NUMBER)).map_err(invalid)?,
        items,
        subtotal,
        tax,
        total,
    };
    tracing::debug!(invoice_number = %invoice.invoice_number, total = %invoice.total, "invoice generated");

    Ok(invoice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackit_db::models::invoice::ORDER_REF_MAX_LEN;

    fn jan_3() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
    }

    #[test]
    fn test_invoice_for_reference() {
        let invoice = generate_invoice(Some("TRK987654321"), jan_3()).unwrap();

        assert_eq!(invoice.invoice_number.as_str(), "INV-987654321");
        assert_eq!(invoice.order_ref.as_str(), "TRK987654321");
        assert_eq!(invoice.customer_name.as_str(), "John Smith");
        assert_eq!(invoice.issued_on_display(), "03 January 2026");

        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].amount, Decimal::new(7500, 2));
        assert_eq!(invoice.items[1].name.as_str(), "Fuel Surcharge");
        assert_eq!(invoice.subtotal, Decimal::new(8571, 2));
        assert_eq!(invoice.tax, Decimal::new(429, 2));
        assert_eq!(invoice.total, Decimal::new(9000, 2));
    }

    #[test]
    fn test_invoice_without_reference() {
        for order_ref in [None, Some(""), Some("   ")] {
            let invoice = generate_invoice(order_ref, jan_3()).unwrap();
            assert_eq!(invoice.invoice_number.as_str(), FALLBACK_INVOICE_NUMBER);
            assert_eq!(invoice.order_ref.as_str(), "TRK123456789");
        }
    }

    #[test]
    fn test_invoice_number_replaces_first_prefix_only() {
        assert_eq!(invoice_number_for(Some("TRKTRK1")), "INV-TRK1");
        assert_eq!(invoice_number_for(Some("ABC123")), "ABC123");
    }

    #[test]
    fn test_reference_length_limit() {
        let longest = format!("TRK{}", "1".repeat(ORDER_REF_MAX_LEN - 3));
        let invoice = generate_invoice(Some(&longest), jan_3()).unwrap();
        assert_eq!(invoice.order_ref.as_str(), longest);
        assert_eq!(invoice.invoice_number.as_str(), format!("INV-{}", "1".repeat(ORDER_REF_MAX_LEN - 3)));

        let overlong = format!("{longest}1");
        let result = generate_invoice(Some(&overlong), jan_3());
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}
