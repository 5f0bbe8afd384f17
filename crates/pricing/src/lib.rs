//! Pricing examples.
//!
//! - **Single responsibility**: [`Item`] only holds data; [`ItemPresenter`] only
//!   renders it.
//! - **Open/closed**: [`Checkout`] prices items through the [`DiscountPolicy`]
//!   trait, so new policies are added without touching it.

pub mod discount;
pub mod item;

pub use discount::{Checkout, DiscountPolicy, PercentageDiscount};
pub use item::{Item, ItemPresenter, Price};
