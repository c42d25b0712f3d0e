pub mod money;
pub mod payment;

pub use money::format_naira;
pub use payment::{
    CheckoutRequest, CheckoutSession, GatewayKind, GatewayStatus, PaymentGateway,
    PaymentVerification,
};

/// Boxed error type used at the async gateway seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
