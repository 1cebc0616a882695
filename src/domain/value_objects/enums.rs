//! # Domain Enums
//!
//! Closed enumerations for the quoting domain.
//!
//! - [`Zone`] - Geographic tier of a shipment
//! - [`ServiceLevel`] - Carrier tier (SLA)
//! - [`AddOnService`] - Optional surcharges layered on a price
//! - [`PricingStrategyKind`] - Base-price algorithm selector
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic tier used by zone-based pricing.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::Zone;
///
/// let zone: Zone = "regional".parse().unwrap();
/// assert_eq!(zone, Zone::Regional);
/// assert_eq!(zone.to_string(), "REGIONAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Zone {
    /// Same city or metropolitan area.
    Local = 0,
    /// Same state or neighbouring region.
    Regional = 1,
    /// Anywhere in the country.
    National = 2,
    /// Cross-border.
    International = 3,
}

impl Zone {
    /// Every zone, nearest first.
    pub const ALL: [Self; 4] = [
        Self::Local,
        Self::Regional,
        Self::National,
        Self::International,
    ];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "LOCAL"),
            Self::Regional => write!(f, "REGIONAL"),
            Self::National => write!(f, "NATIONAL"),
            Self::International => write!(f, "INTERNATIONAL"),
        }
    }
}

impl FromStr for Zone {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOCAL" => Ok(Self::Local),
            "REGIONAL" => Ok(Self::Regional),
            "NATIONAL" => Ok(Self::National),
            "INTERNATIONAL" => Ok(Self::International),
            _ => Err(ParseEnumError::InvalidValue("Zone", s.to_string())),
        }
    }
}

/// Carrier tier requested for a shipment.
///
/// Each level maps to exactly one carrier in
/// [`CarrierFactory`](crate::domain::entities::carrier::CarrierFactory).
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::ServiceLevel;
///
/// assert_eq!("priority".parse::<ServiceLevel>().unwrap(), ServiceLevel::Priority);
/// assert_eq!(ServiceLevel::Economy.to_string(), "ECONOMY");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ServiceLevel {
    /// Slowest and cheapest.
    Economy = 0,
    /// Default tier.
    #[default]
    Standard = 1,
    /// Fastest and most expensive.
    Priority = 2,
}

impl ServiceLevel {
    /// Every service level, cheapest first.
    pub const ALL: [Self; 3] = [Self::Economy, Self::Standard, Self::Priority];
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Economy => write!(f, "ECONOMY"),
            Self::Standard => write!(f, "STANDARD"),
            Self::Priority => write!(f, "PRIORITY"),
        }
    }
}

impl FromStr for ServiceLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ECONOMY" => Ok(Self::Economy),
            "STANDARD" => Ok(Self::Standard),
            "PRIORITY" => Ok(Self::Priority),
            _ => Err(ParseEnumError::InvalidValue("ServiceLevel", s.to_string())),
        }
    }
}

/// Optional service surcharged on top of the carrier-adjusted price.
///
/// The discriminant is the canonical application order: tolls first,
/// insurance on the toll-inclusive price, packaging last.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::AddOnService;
///
/// assert!(AddOnService::Toll < AddOnService::Insurance);
/// assert_eq!("packaging".parse::<AddOnService>().unwrap(), AddOnService::Packaging);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AddOnService {
    /// Road tolls, flat amount.
    Toll = 0,
    /// Cargo insurance, percentage of the running price.
    Insurance = 1,
    /// Reinforced packaging, flat amount.
    Packaging = 2,
}

impl AddOnService {
    /// Every add-on in canonical application order.
    pub const ALL: [Self; 3] = [Self::Toll, Self::Insurance, Self::Packaging];

    /// Returns true if the surcharge is a fixed amount.
    #[inline]
    #[must_use]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Toll | Self::Packaging)
    }
}

impl fmt::Display for AddOnService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toll => write!(f, "TOLL"),
            Self::Insurance => write!(f, "INSURANCE"),
            Self::Packaging => write!(f, "PACKAGING"),
        }
    }
}

impl FromStr for AddOnService {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TOLL" => Ok(Self::Toll),
            "INSURANCE" => Ok(Self::Insurance),
            "PACKAGING" => Ok(Self::Packaging),
            _ => Err(ParseEnumError::InvalidValue("AddOnService", s.to_string())),
        }
    }
}

/// Selects which algorithm computes the base price of a quote.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::PricingStrategyKind;
///
/// let kind: PricingStrategyKind = "by-volume".parse().unwrap();
/// assert_eq!(kind, PricingStrategyKind::ByVolume);
/// assert_eq!(kind.label(), "Volume rate");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PricingStrategyKind {
    /// Flat rate per zone.
    #[default]
    ByZone = 0,
    /// Rate per kilogram.
    ByWeight = 1,
    /// Rate per cubic metre, floored at the weight charge.
    ByVolume = 2,
    /// Zone rate times the express multiplier.
    Express = 3,
}

impl PricingStrategyKind {
    /// Every strategy kind.
    pub const ALL: [Self; 4] = [Self::ByZone, Self::ByWeight, Self::ByVolume, Self::Express];

    /// Human-readable label used in price breakdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ByZone => "Zone rate",
            Self::ByWeight => "Weight rate",
            Self::ByVolume => "Volume rate",
            Self::Express => "Express window",
        }
    }
}

impl fmt::Display for PricingStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByZone => write!(f, "BY_ZONE"),
            Self::ByWeight => write!(f, "BY_WEIGHT"),
            Self::ByVolume => write!(f, "BY_VOLUME"),
            Self::Express => write!(f, "EXPRESS"),
        }
    }
}

impl FromStr for PricingStrategyKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "BY_ZONE" | "BYZONE" | "ZONE" => Ok(Self::ByZone),
            "BY_WEIGHT" | "BYWEIGHT" | "WEIGHT" => Ok(Self::ByWeight),
            "BY_VOLUME" | "BYVOLUME" | "VOLUME" => Ok(Self::ByVolume),
            "EXPRESS" => Ok(Self::Express),
            _ => Err(ParseEnumError::InvalidValue(
                "PricingStrategyKind",
                s.to_string(),
            )),
        }
    }
}

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod zone {
        use super::*;

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
            assert_eq!("NATIONAL".parse::<Zone>().unwrap(), Zone::National);
            assert_eq!(" International ".parse::<Zone>().unwrap(), Zone::International);
        }

        #[test]
        fn parse_rejects_unknown() {
            let err = "orbital".parse::<Zone>().unwrap_err();
            assert_eq!(err.to_string(), "invalid Zone value: 'orbital'");
        }

        #[test]
        fn display_roundtrips_through_from_str() {
            for zone in Zone::ALL {
                assert_eq!(zone.to_string().parse::<Zone>().unwrap(), zone);
            }
        }

        #[test]
        fn serde_uses_screaming_case() {
            let json = serde_json::to_string(&Zone::Regional).unwrap();
            assert_eq!(json, "\"REGIONAL\"");
        }
    }

    mod service_level {
        use super::*;

        #[test]
        fn default_is_standard() {
            assert_eq!(ServiceLevel::default(), ServiceLevel::Standard);
        }

        #[test]
        fn display_roundtrips_through_from_str() {
            for level in ServiceLevel::ALL {
                assert_eq!(level.to_string().parse::<ServiceLevel>().unwrap(), level);
            }
        }

        #[test]
        fn parse_rejects_unknown() {
            assert!("overnight".parse::<ServiceLevel>().is_err());
        }
    }

    mod add_on_service {
        use super::*;

        #[test]
        fn canonical_order_is_toll_insurance_packaging() {
            let mut shuffled = vec![
                AddOnService::Packaging,
                AddOnService::Toll,
                AddOnService::Insurance,
            ];
            shuffled.sort();
            assert_eq!(shuffled, AddOnService::ALL.to_vec());
        }

        #[test]
        fn flat_surcharges() {
            assert!(AddOnService::Toll.is_flat());
            assert!(AddOnService::Packaging.is_flat());
            assert!(!AddOnService::Insurance.is_flat());
        }

        #[test]
        fn parse_rejects_unknown() {
            assert!("gift_wrap".parse::<AddOnService>().is_err());
        }
    }

    mod pricing_strategy_kind {
        use super::*;

        #[test]
        fn parse_accepts_aliases() {
            assert_eq!(
                "by_zone".parse::<PricingStrategyKind>().unwrap(),
                PricingStrategyKind::ByZone
            );
            assert_eq!(
                "weight".parse::<PricingStrategyKind>().unwrap(),
                PricingStrategyKind::ByWeight
            );
            assert_eq!(
                "express".parse::<PricingStrategyKind>().unwrap(),
                PricingStrategyKind::Express
            );
        }

        #[test]
        fn display_roundtrips_through_from_str() {
            for kind in PricingStrategyKind::ALL {
                assert_eq!(
                    kind.to_string().parse::<PricingStrategyKind>().unwrap(),
                    kind
                );
            }
        }

        #[test]
        fn labels_are_distinct() {
            let labels: std::collections::HashSet<_> = PricingStrategyKind::ALL
                .iter()
                .map(|k| k.label())
                .collect();
            assert_eq!(labels.len(), PricingStrategyKind::ALL.len());
        }
    }
}
