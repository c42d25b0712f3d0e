use serde::{Deserialize, Serialize};

/// Delivery fee charged when no configured zone matches a location (naira).
pub const FALLBACK_DELIVERY_FEE: i64 = 7500;

/// Transit estimate used when no configured zone matches a location (days).
pub const FALLBACK_ESTIMATED_DAYS: i64 = 7;

/// A named geographic grouping of delivery areas sharing one fee, transit
/// estimate and installation policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryZone {
    pub name: String,
    pub areas: Vec<String>,
    pub delivery_fee: i64,
    pub estimated_days: i64,
    pub installation_available: bool,
}

/// Immutable, ordered delivery-zone table.
///
/// Declaration order is part of the resolution contract: when a location
/// string happens to contain area names from more than one zone, the
/// earliest-declared zone wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneTable {
    zones: Vec<DeliveryZone>,
}

impl ZoneTable {
    pub fn new(zones: Vec<DeliveryZone>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[DeliveryZone] {
        &self.zones
    }

    /// Resolves a free-text location to a zone: the first zone (in table
    /// order) with any area string that is a case-insensitive substring of
    /// the location. Pure function of the location and the table.
    pub fn resolve(&self, location: &str) -> Option<&DeliveryZone> {
        let needle = location.to_lowercase();
        self.zones
            .iter()
            .find(|zone| zone.areas.iter().any(|area| needle.contains(&area.to_lowercase())))
    }

    /// Delivery fee for a location, falling back to the unlisted-area fee.
    pub fn delivery_fee(&self, location: &str) -> i64 {
        self.resolve(location)
            .map(|zone| zone.delivery_fee)
            .unwrap_or(FALLBACK_DELIVERY_FEE)
    }

    /// Transit estimate for a location, falling back to the unlisted-area
    /// estimate. Agrees with `delivery_fee` on what counts as a miss.
    pub fn estimated_days(&self, location: &str) -> i64 {
        self.resolve(location)
            .map(|zone| zone.estimated_days)
            .unwrap_or(FALLBACK_ESTIMATED_DAYS)
    }
}

impl Default for ZoneTable {
    /// The storefront's shipped coverage map.
    fn default() -> Self {
        Self::new(vec![
            zone(
                "Lagos Mainland",
                &["Ikeja", "Surulere", "Yaba", "Mushin", "Alimosho", "Agege"],
                2500,
                1,
                true,
            ),
            zone(
                "Lagos Island",
                &["Victoria Island", "Ikoyi", "Lekki", "Ajah", "Lagos Island"],
                3000,
                1,
                true,
            ),
            zone(
                "Abuja",
                &["Garki", "Wuse", "Maitama", "Asokoro", "Gwarinpa", "Kubwa"],
                4000,
                2,
                true,
            ),
            zone(
                "Port Harcourt",
                &["GRA", "Trans Amadi", "Mile 1", "Mile 2", "Diobu"],
                5000,
                3,
                true,
            ),
            zone("Kano", &["Sabon Gari", "Fagge", "Nassarawa", "Gwale"], 6000, 4, false),
            zone("Ibadan", &["Bodija", "Ring Road", "Dugbe", "Mokola", "UI"], 4500, 3, true),
        ])
    }
}

fn zone(
    name: &str,
    areas: &[&str],
    delivery_fee: i64,
    estimated_days: i64,
    installation_available: bool,
) -> DeliveryZone {
    DeliveryZone {
        name: name.to_string(),
        areas: areas.iter().map(|a| a.to_string()).collect(),
        delivery_fee,
        estimated_days,
        installation_available,
    }
}
