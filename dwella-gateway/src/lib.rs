pub mod app_config;
pub mod flutterwave;
pub mod paystack;
pub mod webhook;

pub use app_config::Config;
pub use flutterwave::FlutterwaveGateway;
pub use paystack::PaystackGateway;

/// Errors surfaced by the hosted-checkout providers.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected the request: {0}")]
    Provider(String),

    #[error("Unexpected provider response: {0}")]
    MalformedResponse(String),
}
