use std::collections::HashMap;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use dwella_catalog::ZoneTable;

use crate::models::{Customer, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
use crate::totals::{calculate_order_total, estimate_delivery_from};

/// Order registry and lifecycle manager.
///
/// Orders live in an in-memory map keyed by id; durable storage, if the
/// embedding application needs any, sits behind it. Single-operator,
/// low-volume retail: concurrent mutation of the same id is last-write-wins
/// and would need per-order serialization before running behind a server.
pub struct OrderManager {
    orders: HashMap<String, Order>,
    zones: ZoneTable,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::with_zones(ZoneTable::default())
    }

    pub fn with_zones(zones: ZoneTable) -> Self {
        Self {
            orders: HashMap::new(),
            zones,
        }
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    /// Assembles and registers a new order in `pending/pending` state.
    /// Totals and the delivery estimate both resolve the zone from
    /// `customer.location`, so they always agree on the matched zone.
    pub fn create_order(
        &mut self,
        customer: Customer,
        items: Vec<OrderItem>,
        payment_method: PaymentMethod,
    ) -> Order {
        let now = Utc::now();
        let totals = calculate_order_total(&items, &customer.location, &self.zones);
        let estimated_delivery = estimate_delivery_from(&customer.location, &self.zones, now);

        let order = Order {
            id: generate_order_id(),
            customer,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            delivery_fee: totals.delivery_fee,
            total: totals.total,
            payment_method,
            payment_status: PaymentStatus::Pending,
            order_status: OrderStatus::Pending,
            created_at: now,
            estimated_delivery: Some(estimated_delivery),
        };

        tracing::info!(order_id = %order.id, total = order.total, "order created");
        self.orders.insert(order.id.clone(), order.clone());
        order
    }

    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn all_orders(&self) -> Vec<&Order> {
        self.orders.values().collect()
    }

    /// Sets the fulfillment status directly. No transition guard: the
    /// operator may jump states when reconciling by hand. Returns `false`
    /// when the id is unknown.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        match self.orders.get_mut(order_id) {
            Some(order) => {
                order.order_status = status;
                true
            }
            None => {
                tracing::warn!(%order_id, "order status update for unknown order");
                false
            }
        }
    }

    /// Sets the payment status. A completed payment additionally confirms
    /// the order; no other fulfillment transition is automated, and a failed
    /// payment leaves the fulfillment status untouched. Returns `false`
    /// when the id is unknown.
    pub fn update_payment_status(&mut self, order_id: &str, status: PaymentStatus) -> bool {
        match self.orders.get_mut(order_id) {
            Some(order) => {
                order.payment_status = status;
                if status == PaymentStatus::Completed {
                    order.order_status = OrderStatus::Confirmed;
                }
                true
            }
            None => {
                tracing::warn!(%order_id, "payment status update for unknown order");
                false
            }
        }
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

/// `"DT"` + the last 8 digits of the epoch-millis clock + 4 random uppercase
/// alphanumeric characters. Human-readable and mostly unique: two orders
/// created within the same millisecond window can collide on the random
/// suffix, which manual order review tolerates. Not a uniqueness guarantee.
fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let time_part = &millis[millis.len().saturating_sub(8)..];
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    format!("DT{}{}", time_part, suffix)
}
