use serde::Serialize;

use solid_core::{DesignError, DesignResult, ValueObject};

/// A non-negative, finite price.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DesignResult<Self> {
        if !amount.is_finite() {
            return Err(DesignError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DesignError::validation("price must not be negative"));
        }
        // `-0.0` passes the sign check above; store it as `+0.0`.
        Ok(Self(amount + 0.0))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Scale by `factor`, clamped to `0.0..=1.0`. A NaN factor leaves the price as is.
    pub fn scaled(self, factor: f64) -> Self {
        if factor.is_nan() {
            return self;
        }
        Self(self.0 * factor.clamp(0.0, 1.0) + 0.0)
    }

    /// Take `amount` off, never going below zero. Non-positive or NaN amounts
    /// leave the price as is.
    pub fn saturating_sub(self, amount: f64) -> Self {
        if amount.is_nan() || amount <= 0.0 {
            return self;
        }
        let rest = self.0 - amount;
        if rest > 0.0 { Self(rest) } else { Self::ZERO }
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Something for sale. Holds data and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    price: Price,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> DesignResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DesignError::validation("item name must not be blank"));
        }
        Ok(Self {
            name,
            price: Price::new(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl ValueObject for Item {}

/// Renders items for display; the item itself knows nothing about presentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemPresenter;

impl ItemPresenter {
    pub fn describe(&self, item: &Item) -> String {
        format!("{} costs {}", item.name(), item.price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_keeps_name_and_price() {
        let item = Item::new("Laptop", 999.99).unwrap();
        assert_eq!(item.name(), "Laptop");
        assert_eq!(item.price().amount(), 999.99);
    }

    #[test]
    fn item_rejects_blank_name() {
        let err = Item::new("  ", 10.0).unwrap_err();
        match err {
            DesignError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn price_rejects_negative_and_non_finite_amounts() {
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
        assert!(Price::new(0.0).is_ok());
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let item = Item::new("Sticker", -0.0).unwrap();
        assert!(item.price().amount().is_sign_positive());
        assert_eq!(ItemPresenter.describe(&item), "Sticker costs $0.00");
    }

    #[test]
    fn saturating_sub_clamps_at_zero() {
        let price = Price::new(10.0).unwrap();
        assert_eq!(price.saturating_sub(2.5).amount(), 7.5);
        assert_eq!(price.saturating_sub(25.0), Price::ZERO);
        assert_eq!(price.saturating_sub(f64::INFINITY), Price::ZERO);
        assert_eq!(price.saturating_sub(-3.0), price);
        assert_eq!(price.saturating_sub(f64::NAN), price);
    }

    #[test]
    fn scaled_clamps_its_factor() {
        let price = Price::new(10.0).unwrap();
        assert_eq!(price.scaled(0.5).amount(), 5.0);
        assert_eq!(price.scaled(2.0), price);
        assert_eq!(price.scaled(-1.0), Price::ZERO);
        assert_eq!(price.scaled(f64::NAN), price);
    }

    #[test]
    fn presenter_describes_item() {
        let item = Item::new("Laptop", 999.99).unwrap();
        assert_eq!(ItemPresenter.describe(&item), "Laptop costs $999.99");
    }

    #[test]
    fn item_serializes_as_plain_record() {
        let item = Item::new("Laptop", 999.99).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Laptop", "price": 999.99 }));
    }
}
