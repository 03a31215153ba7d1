//! Subscription plans

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::catalog::error::{CatalogError, Result};
use crate::catalog::ids::PlanId;

/// Streaming quality tier offered by a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "SD")]
    Sd,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "Full HD")]
    FullHd,
    #[serde(rename = "4K")]
    UltraHd,
}

impl Quality {
    /// Human-readable tier label
    pub fn label(&self) -> &'static str {
        match self {
            Quality::Sd => "SD",
            Quality::Hd => "HD",
            Quality::FullHd => "Full HD",
            Quality::UltraHd => "4K",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sd" => Ok(Quality::Sd),
            "hd" | "720p" => Ok(Quality::Hd),
            "full hd" | "fullhd" | "fhd" | "1080p" => Ok(Quality::FullHd),
            "4k" | "uhd" | "ultra hd" | "ultrahd" | "2160p" => Ok(Quality::UltraHd),
            _ => Err(CatalogError::unknown_quality(s)),
        }
    }
}

/// A subscription tier
///
/// Plans are shared between the service and every subscribed user via
/// `Rc<Plan>`. The monthly price is the only mutable field and uses interior
/// mutability so a price change is visible through every reference.
///
/// # Example
///
/// ```rust
/// use reelhouse_domain::catalog::{Plan, PlanId, Quality};
/// use rust_decimal_macros::dec;
///
/// let plan = Plan::new(PlanId::new(1), "Basic", dec!(8.99), 1, Quality::Sd).unwrap();
/// assert_eq!(plan.to_string(), "Basic (SD, 1 screens, $8.99)");
/// ```
///
/// Plans are only built through `new`, never deserialized:
///
/// ```compile_fail
/// fn from_json<T: serde::de::DeserializeOwned>() {}
/// from_json::<reelhouse_domain::catalog::Plan>();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    id: PlanId,
    name: String,
    monthly_price: Cell<Decimal>,
    screens: u32,
    quality: Quality,
}

impl Plan {
    /// Create a new plan
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidPrice` if `monthly_price` is not positive
    /// - `CatalogError::InvalidScreens` if `screens` is zero
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        monthly_price: Decimal,
        screens: u32,
        quality: Quality,
    ) -> Result<Self> {
        if monthly_price <= Decimal::ZERO {
            return Err(CatalogError::InvalidPrice(monthly_price));
        }
        if screens == 0 {
            return Err(CatalogError::InvalidScreens);
        }

        Ok(Self {
            id,
            name: name.into(),
            monthly_price: Cell::new(monthly_price),
            screens,
            quality,
        })
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_price(&self) -> Decimal {
        self.monthly_price.get()
    }

    pub fn screens(&self) -> u32 {
        self.screens
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Change the monthly price
    ///
    /// Non-positive prices are ignored and the current price is kept.
    /// Accepted prices are stored exactly, without rounding to cents.
    pub fn set_monthly_price(&self, price: Decimal) {
        if price > Decimal::ZERO {
            self.monthly_price.set(price);
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} screens, ${})",
            self.name,
            self.quality,
            self.screens,
            self.monthly_price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn premium() -> Plan {
        Plan::new(PlanId::new(2), "Premium", dec!(15.99), 4, Quality::UltraHd).unwrap()
    }

    #[test]
    fn test_plan_creation() {
        let plan = premium();

        assert_eq!(plan.id(), PlanId::new(2));
        assert_eq!(plan.name(), "Premium");
        assert_eq!(plan.monthly_price(), dec!(15.99));
        assert_eq!(plan.screens(), 4);
        assert_eq!(plan.quality(), Quality::UltraHd);
    }

    #[test]
    fn test_plan_rejects_non_positive_price() {
        let result = Plan::new(PlanId::new(1), "Free", Decimal::ZERO, 1, Quality::Sd);
        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn test_plan_rejects_zero_screens() {
        let result = Plan::new(PlanId::new(1), "None", dec!(1), 0, Quality::Sd);
        assert_eq!(result.unwrap_err(), CatalogError::InvalidScreens);
    }

    #[test]
    fn test_set_monthly_price_applies_positive_values() {
        let plan = premium();
        plan.set_monthly_price(dec!(17.49));
        assert_eq!(plan.monthly_price(), dec!(17.49));
    }

    #[test]
    fn test_set_monthly_price_ignores_non_positive_values() {
        let plan = premium();

        plan.set_monthly_price(Decimal::ZERO);
        assert_eq!(plan.monthly_price(), dec!(15.99));

        plan.set_monthly_price(dec!(-5));
        assert_eq!(plan.monthly_price(), dec!(15.99));
    }

    #[test]
    fn test_set_monthly_price_keeps_sub_cent_precision() {
        let plan = premium();

        plan.set_monthly_price(dec!(9.995));
        assert_eq!(plan.monthly_price(), dec!(9.995));
        assert_eq!(plan.to_string(), "Premium (4K, 4 screens, $9.995)");

        plan.set_monthly_price(dec!(0.004));
        assert_eq!(plan.monthly_price(), dec!(0.004));

        plan.set_monthly_price(dec!(-0.001));
        assert_eq!(plan.monthly_price(), dec!(0.004));

        let tiny = Plan::new(PlanId::new(3), "Trial", dec!(0.004), 1, Quality::Sd).unwrap();
        assert_eq!(tiny.monthly_price(), dec!(0.004));
    }

    #[test]
    fn test_plan_display() {
        assert_eq!(premium().to_string(), "Premium (4K, 4 screens, $15.99)");
    }

    #[test]
    fn test_quality_parsing() {
        assert_eq!("sd".parse::<Quality>().unwrap(), Quality::Sd);
        assert_eq!("4K".parse::<Quality>().unwrap(), Quality::UltraHd);
        assert_eq!("Full HD".parse::<Quality>().unwrap(), Quality::FullHd);
        assert!("8K".parse::<Quality>().is_err());
    }
}
