//! Flutterwave integration via REST API (no SDK dependency).

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use dwella_core::payment::{
    CheckoutRequest, CheckoutSession, GatewayKind, GatewayStatus, PaymentGateway,
    PaymentVerification,
};
use dwella_core::BoxError;

use crate::GatewayError;

const API_BASE: &str = "https://api.flutterwave.com/v3";

pub struct FlutterwaveGateway {
    client: reqwest::Client,
    secret_key: String,
    callback_base_url: String,
}

impl FlutterwaveGateway {
    pub fn new(secret_key: impl Into<String>, callback_base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            callback_base_url: callback_base_url.into(),
        }
    }
}

/// Flutterwave references must be unique per attempt, not per order, so the
/// order id is suffixed with the clock: `DT_{order id}_{epoch millis}`.
fn build_tx_ref(order_id: &str, now_millis: i64) -> String {
    format!("DT_{}_{}", order_id, now_millis)
}

/// Request body for `POST /payments`. Amounts stay in whole naira;
/// Flutterwave takes the major unit directly.
fn build_payment_payload(
    request: &CheckoutRequest,
    tx_ref: &str,
    callback_base_url: &str,
) -> serde_json::Value {
    let email = request
        .customer_email
        .clone()
        .unwrap_or_else(|| format!("{}@dwellatech.ng", phone_digits(&request.customer_phone)));

    json!({
        "tx_ref": tx_ref,
        "amount": request.amount,
        "currency": "NGN",
        "redirect_url": format!("{}/payment/success", callback_base_url),
        "payment_options": "card,mobilemoney,ussd,banktransfer",
        "customer": {
            "email": email,
            "phonenumber": request.customer_phone,
            "name": request.customer_name,
        },
        "customizations": {
            "title": "DwellaTech Solutions",
            "description": format!("Payment for Order {}", request.order_id),
        },
        "meta": {
            "order_id": request.order_id,
            "customer_phone": request.customer_phone,
        },
    })
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[async_trait]
impl PaymentGateway for FlutterwaveGateway {
    async fn initialize(&self, request: &CheckoutRequest) -> Result<CheckoutSession, BoxError> {
        let tx_ref = build_tx_ref(&request.order_id, Utc::now().timestamp_millis());
        let payload = build_payment_payload(request, &tx_ref, &self.callback_base_url);

        let resp: serde_json::Value = self
            .client
            .post(format!("{}/payments", API_BASE))
            .bearer_auth(&self.secret_key)
            .json(&payload)
            .send()
            .await
            .map_err(GatewayError::Http)?
            .json()
            .await
            .map_err(GatewayError::Http)?;

        if resp["status"].as_str() != Some("success") {
            let message = resp["message"].as_str().unwrap_or("unknown error").to_string();
            return Err(GatewayError::Provider(message).into());
        }

        let link = resp["data"]["link"]
            .as_str()
            .ok_or_else(|| GatewayError::MalformedResponse(resp.to_string()))?;

        tracing::info!(order_id = %request.order_id, %tx_ref, "flutterwave checkout created");

        Ok(CheckoutSession {
            gateway: GatewayKind::Flutterwave,
            authorization_url: link.to_string(),
            reference: tx_ref,
            created_at: Utc::now(),
        })
    }

    async fn verify(&self, reference: &str) -> Result<PaymentVerification, BoxError> {
        let resp: serde_json::Value = self
            .client
            .get(format!("{}/transactions/{}/verify", API_BASE, reference))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(GatewayError::Http)?
            .json()
            .await
            .map_err(GatewayError::Http)?;

        if resp["status"].as_str() != Some("success") {
            let message = resp["message"].as_str().unwrap_or("unknown error").to_string();
            return Err(GatewayError::Provider(message).into());
        }

        let status = match resp["data"]["status"].as_str() {
            Some("successful") => GatewayStatus::Success,
            Some("failed") => GatewayStatus::Failed,
            _ => GatewayStatus::Pending,
        };

        let amount = resp["data"]["amount"].as_i64().unwrap_or(0);
        let currency = resp["data"]["currency"].as_str().unwrap_or("NGN").to_string();

        Ok(PaymentVerification {
            gateway: GatewayKind::Flutterwave,
            reference: reference.to_string(),
            status,
            amount,
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CheckoutRequest {
        CheckoutRequest {
            order_id: "DT12345678ABCD".to_string(),
            amount: 95230,
            customer_name: "Chidi Eze".to_string(),
            customer_phone: "+2348098765432".to_string(),
            customer_email: None,
        }
    }

    #[test]
    fn test_tx_ref_embeds_order_and_clock() {
        let tx_ref = build_tx_ref("DT12345678ABCD", 1750000000000);
        assert_eq!(tx_ref, "DT_DT12345678ABCD_1750000000000");
    }

    #[test]
    fn test_payload_uses_whole_naira() {
        let tx_ref = build_tx_ref(&request().order_id, 1750000000000);
        let payload = build_payment_payload(&request(), &tx_ref, "https://shop.dwellatech.ng");

        assert_eq!(payload["amount"], 95230);
        assert_eq!(payload["currency"], "NGN");
        assert_eq!(payload["tx_ref"], tx_ref.as_str());
        assert_eq!(payload["customer"]["email"], "2348098765432@dwellatech.ng");
        assert_eq!(
            payload["customizations"]["description"],
            "Payment for Order DT12345678ABCD"
        );
    }
}
