//! Paystack integration via REST API (no SDK dependency).

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use dwella_core::payment::{
    CheckoutRequest, CheckoutSession, GatewayKind, GatewayStatus, PaymentGateway,
    PaymentVerification,
};
use dwella_core::BoxError;

use crate::GatewayError;

const API_BASE: &str = "https://api.paystack.co";

pub struct PaystackGateway {
    client: reqwest::Client,
    secret_key: String,
    callback_base_url: String,
}

impl PaystackGateway {
    pub fn new(secret_key: impl Into<String>, callback_base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            callback_base_url: callback_base_url.into(),
        }
    }
}

/// Request body for `POST /transaction/initialize`. Paystack bills in kobo,
/// so the whole-naira order total is scaled by 100. Customers without an
/// email get a synthetic one derived from their phone number, which Paystack
/// requires but the storefront does not.
fn build_initialize_payload(request: &CheckoutRequest, callback_base_url: &str) -> serde_json::Value {
    let email = request
        .customer_email
        .clone()
        .unwrap_or_else(|| format!("{}@dwellatech.ng", phone_digits(&request.customer_phone)));

    json!({
        "email": email,
        "amount": request.amount * 100,
        "reference": request.order_id,
        "callback_url": format!("{}/payment/success", callback_base_url),
        "cancel_action": format!("{}/payment/cancel", callback_base_url),
        "metadata": {
            "order_id": request.order_id,
            "customer_name": request.customer_name,
            "customer_phone": request.customer_phone,
        },
        "channels": ["card", "bank", "ussd", "qr", "mobile_money", "bank_transfer"],
    })
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[async_trait]
impl PaymentGateway for PaystackGateway {
    async fn initialize(&self, request: &CheckoutRequest) -> Result<CheckoutSession, BoxError> {
        let payload = build_initialize_payload(request, &self.callback_base_url);

        let resp: serde_json::Value = self
            .client
            .post(format!("{}/transaction/initialize", API_BASE))
            .bearer_auth(&self.secret_key)
            .json(&payload)
            .send()
            .await
            .map_err(GatewayError::Http)?
            .json()
            .await
            .map_err(GatewayError::Http)?;

        if !resp["status"].as_bool().unwrap_or(false) {
            let message = resp["message"].as_str().unwrap_or("unknown error").to_string();
            return Err(GatewayError::Provider(message).into());
        }

        let authorization_url = resp["data"]["authorization_url"]
            .as_str()
            .ok_or_else(|| GatewayError::MalformedResponse(resp.to_string()))?;
        let reference = resp["data"]["reference"]
            .as_str()
            .ok_or_else(|| GatewayError::MalformedResponse(resp.to_string()))?;

        tracing::info!(order_id = %request.order_id, %reference, "paystack checkout created");

        Ok(CheckoutSession {
            gateway: GatewayKind::Paystack,
            authorization_url: authorization_url.to_string(),
            reference: reference.to_string(),
            created_at: Utc::now(),
        })
    }

    async fn verify(&self, reference: &str) -> Result<PaymentVerification, BoxError> {
        let resp: serde_json::Value = self
            .client
            .get(format!("{}/transaction/verify/{}", API_BASE, reference))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(GatewayError::Http)?
            .json()
            .await
            .map_err(GatewayError::Http)?;

        if !resp["status"].as_bool().unwrap_or(false) {
            let message = resp["message"].as_str().unwrap_or("unknown error").to_string();
            return Err(GatewayError::Provider(message).into());
        }

        let status = match resp["data"]["status"].as_str() {
            Some("success") => GatewayStatus::Success,
            Some("failed") | Some("abandoned") => GatewayStatus::Failed,
            _ => GatewayStatus::Pending,
        };

        // Amount comes back in kobo.
        let amount = resp["data"]["amount"].as_i64().unwrap_or(0) / 100;
        let currency = resp["data"]["currency"].as_str().unwrap_or("NGN").to_string();

        Ok(PaymentVerification {
            gateway: GatewayKind::Paystack,
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

    fn request(email: Option<&str>) -> CheckoutRequest {
        CheckoutRequest {
            order_id: "DT12345678ABCD".to_string(),
            amount: 217500,
            customer_name: "Ada Obi".to_string(),
            customer_phone: "+234 801 234 5678".to_string(),
            customer_email: email.map(String::from),
        }
    }

    #[test]
    fn test_payload_bills_in_kobo_with_order_reference() {
        let payload = build_initialize_payload(&request(Some("ada@example.com")), "https://shop.dwellatech.ng");

        assert_eq!(payload["amount"], 21750000);
        assert_eq!(payload["reference"], "DT12345678ABCD");
        assert_eq!(payload["email"], "ada@example.com");
        assert_eq!(payload["callback_url"], "https://shop.dwellatech.ng/payment/success");
        assert_eq!(payload["metadata"]["order_id"], "DT12345678ABCD");
    }

    #[test]
    fn test_missing_email_falls_back_to_phone_digits() {
        let payload = build_initialize_payload(&request(None), "https://shop.dwellatech.ng");
        assert_eq!(payload["email"], "2348012345678@dwellatech.ng");
    }
}
