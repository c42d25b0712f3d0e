use serde::{Deserialize, Serialize};

/// A catalog entry. `price` and `original_price` are whole naira; the
/// snapshot copied into an order item at checkout freezes the price at order
/// time, so later catalog edits never move an existing order's totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub original_price: Option<i64>,
    pub image: String,
    pub features: Vec<String>,
    pub category: String,
    pub in_stock: bool,
    pub stock_count: u32,
    pub installation_required: bool,
    pub warranty: String,
}

/// The products the storefront ships with before any admin edits.
pub fn starter_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "smart-door-lock-01".to_string(),
            name: "Smart Door Lock Pro (Z-18)".to_string(),
            description: "Keyless entry with biometric and PIN access.".to_string(),
            price: 144350,
            original_price: Some(155350),
            image: "/images/big-handle1.png".to_string(),
            features: vec![
                "Fingerprint & PIN Access".to_string(),
                "Mobile App Control".to_string(),
                "Auto-Lock Security".to_string(),
                "Battery Backup".to_string(),
            ],
            category: "Security".to_string(),
            in_stock: true,
            stock_count: 25,
            installation_required: true,
            warranty: "2 Years".to_string(),
        },
        Product {
            id: "cctv-system-01".to_string(),
            name: "Solar HD CCTV Security System (Dual-lens)".to_string(),
            description: "Solar 4-camera HD surveillance with night vision.".to_string(),
            price: 95230,
            original_price: Some(117041),
            image: "/images/cctv2.png".to_string(),
            features: vec![
                "4 HD Cameras (1080p)".to_string(),
                "Night Vision Technology".to_string(),
                "Motion Detection Alerts".to_string(),
                "Cloud Storage Option".to_string(),
            ],
            category: "Security".to_string(),
            in_stock: true,
            stock_count: 33,
            installation_required: true,
            warranty: "2 Years".to_string(),
        },
        Product {
            id: "home-automation-01".to_string(),
            name: "Smart Home Automation Kit".to_string(),
            description: "Complete home automation with voice control.".to_string(),
            price: 32415,
            original_price: Some(44603),
            image: "/images/switch22.png".to_string(),
            features: vec![
                "Voice Control Integration".to_string(),
                "Smart Lighting Control".to_string(),
                "Energy Monitoring".to_string(),
            ],
            category: "Automation".to_string(),
            in_stock: true,
            stock_count: 63,
            installation_required: true,
            warranty: "2 Years".to_string(),
        },
        Product {
            id: "smart-lock-k30t-01".to_string(),
            name: "Smart Door Lock (K30T)".to_string(),
            description: "Facial recognition lock with audio/video intercom.".to_string(),
            price: 207211,
            original_price: Some(219303),
            image: "/images/k30-lock1.png".to_string(),
            features: vec![
                "Facial Recognition".to_string(),
                "One-time Password".to_string(),
                "Rechargeable Lithium Battery".to_string(),
            ],
            category: "Security".to_string(),
            in_stock: true,
            stock_count: 12,
            installation_required: true,
            warranty: "2 Years".to_string(),
        },
    ]
}
