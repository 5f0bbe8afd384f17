//! Discount policies and the checkout that applies them.
//!
//! `Checkout` only ever sees `&dyn DiscountPolicy`. A new policy is a new type
//! implementing the trait; nothing in this module changes.

use solid_core::{DesignError, DesignResult};

use crate::item::{Item, Price};

/// Stateless mapping from a price to a (discounted) price.
///
/// Implementations must accept every valid [`Price`] and return a valid one.
pub trait DiscountPolicy {
    /// Short human-readable name, e.g. `"10% off"`.
    fn name(&self) -> &str;

    fn apply(&self, price: Price) -> Price;
}

/// Take a fixed percentage off the price.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageDiscount {
    percent: f64,
    name: String,
}

impl PercentageDiscount {
    /// `percent` must lie in `0..=100`.
    pub fn new(percent: f64) -> DesignResult<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(DesignError::validation(format!(
                "discount percent must be within 0..=100 (got {percent})"
            )));
        }
        Ok(Self {
            percent,
            name: format!("{percent}% off"),
        })
    }

    pub fn ten() -> Self {
        Self {
            percent: 10.0,
            name: "10% off".to_string(),
        }
    }

    pub fn twenty() -> Self {
        Self {
            percent: 20.0,
            name: "20% off".to_string(),
        }
    }
}

impl DiscountPolicy for PercentageDiscount {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, price: Price) -> Price {
        price.scaled(1.0 - self.percent / 100.0)
    }
}

/// Prices items through whichever policy it was given.
pub struct Checkout<'a> {
    policy: &'a dyn DiscountPolicy,
}

impl<'a> Checkout<'a> {
    pub fn new(policy: &'a dyn DiscountPolicy) -> Self {
        Self { policy }
    }

    pub fn price_for(&self, item: &Item) -> Price {
        let discounted = self.policy.apply(item.price());
        tracing::debug!(
            item = item.name(),
            policy = self.policy.name(),
            before = item.price().amount(),
            after = discounted.amount(),
            "discount applied"
        );
        discounted
    }

    pub fn quote(&self, item: &Item) -> String {
        format!(
            "{} with {}: {}",
            item.name(),
            self.policy.name(),
            self.price_for(item)
        )
    }
}
