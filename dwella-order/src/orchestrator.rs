use std::sync::Arc;

use chrono::Utc;

use dwella_core::payment::{
    CheckoutRequest, CheckoutSession, GatewayKind, GatewayStatus, PaymentGateway,
    PaymentVerification,
};
use dwella_core::BoxError;

use crate::models::{Order, PaymentStatus};

/// Drives hosted-checkout sessions through the configured gateway and maps
/// provider verdicts onto the order-side payment status.
pub struct PaymentOrchestrator {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentOrchestrator {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Open a hosted checkout for an order's grand total.
    pub async fn initialize_payment(&self, order: &Order) -> Result<CheckoutSession, BoxError> {
        tracing::info!(order_id = %order.id, amount = order.total, "initializing payment");
        self.gateway.initialize(&order.checkout_request()).await
    }

    /// Verify a transaction reference with the provider and translate the
    /// outcome. The caller applies the result with
    /// `OrderManager::update_payment_status`, which also handles the
    /// completed-payment order confirmation.
    pub async fn confirm_payment(&self, reference: &str) -> Result<PaymentStatus, BoxError> {
        let verification = self.gateway.verify(reference).await?;

        if verification.status != GatewayStatus::Success {
            tracing::warn!(
                %reference,
                status = ?verification.status,
                "payment verification did not succeed"
            );
        }

        Ok(match verification.status {
            GatewayStatus::Success => PaymentStatus::Completed,
            GatewayStatus::Failed => PaymentStatus::Failed,
            GatewayStatus::Pending => PaymentStatus::Pending,
        })
    }
}

/// In-process gateway used by tests and local runs.
pub struct MockGateway;

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    async fn initialize(&self, request: &CheckoutRequest) -> Result<CheckoutSession, BoxError> {
        Ok(CheckoutSession {
            gateway: GatewayKind::Paystack,
            authorization_url: format!("https://checkout.mock/{}", request.order_id),
            reference: request.order_id.clone(),
            created_at: Utc::now(),
        })
    }

    async fn verify(&self, reference: &str) -> Result<PaymentVerification, BoxError> {
        // References starting with "fail" simulate a declined transaction.
        let status = if reference.starts_with("fail") {
            GatewayStatus::Failed
        } else {
            GatewayStatus::Success
        };

        Ok(PaymentVerification {
            gateway: GatewayKind::Paystack,
            reference: reference.to_string(),
            status,
            amount: 0,
            currency: "NGN".to_string(),
        })
    }
}
