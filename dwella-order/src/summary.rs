use url::Url;

use dwella_core::format_naira;

use crate::models::Order;

/// Renders the order summary handed off to WhatsApp.
///
/// The string is sent verbatim (URL-encoded) into the messaging deep link
/// and read by a human operator on the other end, so line breaks, the bullet
/// character and the currency formatting are all part of the contract. Pure
/// function of the order: the same order always renders byte-identically.
pub fn generate_order_summary(order: &Order) -> String {
    let items_list = order
        .items
        .iter()
        .map(|item| {
            format!(
                "• {} (Qty: {}) - {}",
                item.product.name,
                item.quantity,
                format_naira(item.line_total())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let estimated_delivery = order
        .estimated_delivery
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "TBD".to_string());

    format!(
        "🛒 NEW ORDER - {id}\n\
         \n\
         👤 Customer Details:\n\
         Name: {name}\n\
         Phone: {phone}\n\
         Location: {location}\n\
         \n\
         📦 Order Items:\n\
         {items_list}\n\
         \n\
         💰 Order Summary:\n\
         Subtotal: {subtotal}\n\
         Tax (7.5%): {tax}\n\
         Delivery: {delivery_fee}\n\
         TOTAL: {total}\n\
         \n\
         🚚 Estimated Delivery: {estimated_delivery}\n\
         \n\
         Please confirm this order and provide payment instructions.",
        id = order.id,
        name = order.customer.name,
        phone = order.customer.phone,
        location = order.customer.location,
        items_list = items_list,
        subtotal = format_naira(order.subtotal),
        tax = format_naira(order.tax),
        delivery_fee = format_naira(order.delivery_fee),
        total = format_naira(order.total),
        estimated_delivery = estimated_delivery,
    )
}

/// Builds the `wa.me` deep link that opens WhatsApp with `message`
/// pre-filled. `business_number` is digits only, country code included.
pub fn whatsapp_order_url(business_number: &str, message: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("https://wa.me/{}", business_number))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
    use chrono::TimeZone;
    use chrono::Utc;
    use dwella_catalog::Product;
    use uuid::Uuid;

    fn fixed_order() -> Order {
        let product = Product {
            id: "smart-door-lock-01".to_string(),
            name: "Smart Door Lock Pro (Z-18)".to_string(),
            description: String::new(),
            price: 100000,
            original_price: None,
            image: String::new(),
            features: vec![],
            category: "Security".to_string(),
            in_stock: true,
            stock_count: 5,
            installation_required: true,
            warranty: "2 Years".to_string(),
        };

        Order {
            id: "DT12345678ABCD".to_string(),
            customer: Customer {
                id: Uuid::nil(),
                name: "Ada Obi".to_string(),
                phone: "+2348012345678".to_string(),
                email: None,
                location: "Ikeja".to_string(),
                address: None,
            },
            items: vec![OrderItem::from_product(&product, 2)],
            subtotal: 200000,
            tax: 15000,
            delivery_fee: 2500,
            total: 217500,
            payment_method: PaymentMethod::Whatsapp,
            payment_status: PaymentStatus::Pending,
            order_status: OrderStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2025, 3, 9, 10, 30, 0).unwrap(),
            estimated_delivery: Some(Utc.with_ymd_and_hms(2025, 3, 10, 10, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_summary_template_is_exact() {
        let expected = "🛒 NEW ORDER - DT12345678ABCD\n\
            \n\
            👤 Customer Details:\n\
            Name: Ada Obi\n\
            Phone: +2348012345678\n\
            Location: Ikeja\n\
            \n\
            📦 Order Items:\n\
            • Smart Door Lock Pro (Z-18) (Qty: 2) - ₦200,000\n\
            \n\
            💰 Order Summary:\n\
            Subtotal: ₦200,000\n\
            Tax (7.5%): ₦15,000\n\
            Delivery: ₦2,500\n\
            TOTAL: ₦217,500\n\
            \n\
            🚚 Estimated Delivery: 10/03/2025\n\
            \n\
            Please confirm this order and provide payment instructions.";

        assert_eq!(generate_order_summary(&fixed_order()), expected);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let order = fixed_order();
        assert_eq!(generate_order_summary(&order), generate_order_summary(&order));
    }

    #[test]
    fn test_each_item_gets_a_bullet_line() {
        let mut order = fixed_order();
        let second = Product {
            id: "cctv-system-01".to_string(),
            name: "Solar HD CCTV Security System".to_string(),
            price: 95230,
            ..order.items[0].product.clone()
        };
        order.items.push(OrderItem::from_product(&second, 1));

        let summary = generate_order_summary(&order);
        assert!(summary.contains("• Smart Door Lock Pro (Z-18) (Qty: 2) - ₦200,000"));
        assert!(summary.contains("• Solar HD CCTV Security System (Qty: 1) - ₦95,230"));
    }

    #[test]
    fn test_deep_link_encodes_message() {
        let url = whatsapp_order_url("2349137487240", "NEW ORDER - DT12345678ABCD").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/2349137487240");
        let text = url
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(text, "NEW ORDER - DT12345678ABCD");
    }
}
