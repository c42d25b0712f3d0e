pub mod manager;
pub mod models;
pub mod orchestrator;
pub mod summary;
pub mod totals;

pub use manager::OrderManager;
pub use models::{Customer, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
pub use orchestrator::{MockGateway, PaymentOrchestrator};
pub use summary::{generate_order_summary, whatsapp_order_url};
pub use totals::{calculate_order_total, estimate_delivery, OrderTotals, TAX_RATE};
