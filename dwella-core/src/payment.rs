use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::BoxError;

/// Supported hosted-checkout providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    Paystack,
    Flutterwave,
}

/// Transaction status as reported by the provider on verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatus {
    Pending,
    Success,
    Failed,
}

/// Everything a gateway needs to open a hosted checkout for one order.
/// Amounts are whole naira; providers that bill in kobo convert internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub order_id: String,
    pub amount: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
}

/// A hosted-checkout session returned by payment initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub gateway: GatewayKind,
    pub authorization_url: String,
    pub reference: String,
    pub created_at: DateTime<Utc>,
}

/// Result of verifying a transaction reference with the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVerification {
    pub gateway: GatewayKind,
    pub reference: String,
    pub status: GatewayStatus,
    pub amount: i64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session with the provider.
    async fn initialize(&self, request: &CheckoutRequest) -> Result<CheckoutSession, BoxError>;

    /// Look up the final status of a transaction reference.
    async fn verify(&self, reference: &str) -> Result<PaymentVerification, BoxError>;
}
