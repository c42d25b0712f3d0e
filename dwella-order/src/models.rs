use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dwella_catalog::Product;
use dwella_core::payment::CheckoutRequest;

/// How the customer chose to pay at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paystack,
    Flutterwave,
    Whatsapp,
}

/// Order-side payment state, settled by gateway verification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// Fulfillment state. Any status is settable from any other: the operator
/// reviews orders by hand and occasionally needs to jump states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
}

/// The buyer as captured by the order form. `location` is free text and is
/// the key for delivery-zone resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub address: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            location: location.into(),
            address: None,
        }
    }
}

/// One catalog line in an order. `product` is a denormalized snapshot and
/// `price` is the unit price frozen at order time, in whole naira.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product: Product,
    pub quantity: u32,
    pub price: i64,
}

impl OrderItem {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            product: product.clone(),
            quantity,
            price: product.price,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

/// A customer's requested purchase with computed totals and a
/// payment/fulfillment status pair. All monetary fields are whole naira.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub tax: i64,
    pub delivery_fee: i64,
    pub total: i64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: Option<DateTime<Utc>>,
}

impl Order {
    /// What a payment gateway needs to open a hosted checkout for this order.
    pub fn checkout_request(&self) -> CheckoutRequest {
        CheckoutRequest {
            order_id: self.id.clone(),
            amount: self.total,
            customer_name: self.customer.name.clone(),
            customer_phone: self.customer.phone.clone(),
            customer_email: self.customer.email.clone(),
        }
    }
}
