pub mod product;
pub mod registry;
pub mod zones;

pub use product::{starter_catalog, Product};
pub use registry::{CatalogError, CatalogManager};
pub use zones::{DeliveryZone, ZoneTable, FALLBACK_DELIVERY_FEE, FALLBACK_ESTIMATED_DAYS};
