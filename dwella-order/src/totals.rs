use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use dwella_catalog::ZoneTable;

use crate::models::OrderItem;

/// Flat 7.5% VAT applied to the item subtotal. Fixed at the module level;
/// not configurable per call.
pub const TAX_RATE: f64 = 0.075;

/// Monetary breakdown of an order, whole naira throughout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: i64,
    pub tax: i64,
    pub delivery_fee: i64,
    pub total: i64,
}

/// Computes subtotal, tax, delivery fee and grand total for a cart.
///
/// Inputs are whole naira, so rounding happens only at the tax step. An
/// empty cart still carries the location's delivery fee: the fee depends on
/// where the order ships, not on what is in it. Quantities and prices are
/// not validated here; that is the caller's contract.
pub fn calculate_order_total(items: &[OrderItem], location: &str, zones: &ZoneTable) -> OrderTotals {
    let subtotal: i64 = items.iter().map(OrderItem::line_total).sum();
    let tax = (subtotal as f64 * TAX_RATE).round() as i64;
    let delivery_fee = zones.delivery_fee(location);

    OrderTotals {
        subtotal,
        tax,
        delivery_fee,
        total: subtotal + tax + delivery_fee,
    }
}

/// Projects the estimated delivery date from now.
pub fn estimate_delivery(location: &str, zones: &ZoneTable) -> DateTime<Utc> {
    estimate_delivery_from(location, zones, Utc::now())
}

/// Same projection from an explicit starting instant. Uses the same zone
/// resolution (and the same fallback) as the fee lookup, so the two can
/// never disagree on whether a location matched.
pub fn estimate_delivery_from(location: &str, zones: &ZoneTable, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(zones.estimated_days(location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dwella_catalog::{Product, FALLBACK_DELIVERY_FEE, FALLBACK_ESTIMATED_DAYS};

    fn item(price: i64, quantity: u32) -> OrderItem {
        let product = Product {
            id: "test-product".to_string(),
            name: "Test Product".to_string(),
            description: String::new(),
            price,
            original_price: None,
            image: String::new(),
            features: vec![],
            category: "Security".to_string(),
            in_stock: true,
            stock_count: 10,
            installation_required: false,
            warranty: "1 Year".to_string(),
        };
        OrderItem::from_product(&product, quantity)
    }

    #[test]
    fn test_total_arithmetic() {
        let zones = ZoneTable::default();
        // Ikeja resolves to Lagos Mainland (fee 2500).
        let totals = calculate_order_total(&[item(100000, 2)], "Ikeja", &zones);

        assert_eq!(totals.subtotal, 200000);
        assert_eq!(totals.tax, 15000);
        assert_eq!(totals.delivery_fee, 2500);
        assert_eq!(totals.total, 217500);
    }

    #[test]
    fn test_empty_cart_still_charges_delivery() {
        let zones = ZoneTable::default();
        let totals = calculate_order_total(&[], "Ikeja", &zones);

        assert_eq!(totals.subtotal, 0);
        assert_eq!(totals.tax, 0);
        assert_eq!(totals.delivery_fee, 2500);
        assert_eq!(totals.total, 2500);
    }

    #[test]
    fn test_tax_rounds_at_the_tax_step() {
        let zones = ZoneTable::default();
        // 7.5% of 1001 is 75.075, which rounds to 75.
        let totals = calculate_order_total(&[item(1001, 1)], "Yaba", &zones);
        assert_eq!(totals.tax, 75);
        assert_eq!(totals.total, 1001 + 75 + 2500);
    }

    #[test]
    fn test_unlisted_location_uses_shared_fallback() {
        let zones = ZoneTable::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let totals = calculate_order_total(&[], "Enugu", &zones);
        let eta = estimate_delivery_from("Enugu", &zones, now);

        assert_eq!(totals.delivery_fee, FALLBACK_DELIVERY_FEE);
        assert_eq!((eta - now).num_days(), FALLBACK_ESTIMATED_DAYS);
    }

    #[test]
    fn test_estimate_crosses_month_boundary() {
        let zones = ZoneTable::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 30, 8, 0, 0).unwrap();

        // Kano: 4 transit days, lands in February.
        let eta = estimate_delivery_from("Sabon Gari, Kano", &zones, now);
        assert_eq!(eta, Utc.with_ymd_and_hms(2025, 2, 3, 8, 0, 0).unwrap());
    }
}
