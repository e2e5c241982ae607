//! Visitor double dispatch over a closed set of shop items.
//!
//! Each item picks the visitor method for its own concrete type, so a call
//! to `accept` always lands on exactly one visitor operation. New visitors
//! need no item changes; a new item forces every visitor to grow.

use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Alcoholic drink.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Liquor {
    pub price: f64,
}

/// Tobacco product.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tobacco {
    pub price: f64,
}

/// Everyday necessity.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Necessity {
    pub price: f64,
}

/// One operation per item variant.
pub trait Visitor {
    type Output;

    fn visit_liquor(&mut self, liquor: &Liquor) -> Self::Output;
    fn visit_tobacco(&mut self, tobacco: &Tobacco) -> Self::Output;
    fn visit_necessity(&mut self, necessity: &Necessity) -> Self::Output;
}

/// Values that route a visitor to the operation matching their variant.
pub trait Visitable {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output;
}

impl Visitable for Liquor {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_liquor(self)
    }
}

impl Visitable for Tobacco {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_tobacco(self)
    }
}

impl Visitable for Necessity {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_necessity(self)
    }
}

/// Any shop item, as a tagged union.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Item {
    Liquor(Liquor),
    Tobacco(Tobacco),
    Necessity(Necessity),
}

impl Variant for Item {
    fn tag(&self) -> &str {
        match self {
            Self::Liquor(_) => "Liquor",
            Self::Tobacco(_) => "Tobacco",
            Self::Necessity(_) => "Necessity",
        }
    }
}

impl Visitable for Item {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        trace!(item = self.tag(), "Dispatching visitor");
        match self {
            Self::Liquor(liquor) => liquor.accept(visitor),
            Self::Tobacco(tobacco) => tobacco.accept(visitor),
            Self::Necessity(necessity) => necessity.accept(visitor),
        }
    }
}

impl From<Liquor> for Item {
    fn from(liquor: Liquor) -> Self {
        Self::Liquor(liquor)
    }
}

impl From<Tobacco> for Item {
    fn from(tobacco: Tobacco) -> Self {
        Self::Tobacco(tobacco)
    }
}

impl From<Necessity> for Item {
    fn from(necessity: Necessity) -> Self {
        Self::Necessity(necessity)
    }
}

/// Price including tax, rounded to cents.
///
/// Rates: liquor 18%, tobacco 32%, necessity 1%.
///
/// # Example
///
/// ```rust
/// use patterns::dispatch::{Item, Necessity, TaxVisitor, Tobacco, Visitable};
///
/// let mut tax = TaxVisitor;
/// assert_eq!(Tobacco { price: 12.0 }.accept(&mut tax), 15.84);
///
/// let milk = Item::from(Necessity { price: 100.0 });
/// assert_eq!(milk.accept(&mut tax), 101.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TaxVisitor;

impl TaxVisitor {
    const LIQUOR_RATE: f64 = 0.18;
    const TOBACCO_RATE: f64 = 0.32;
    const NECESSITY_RATE: f64 = 0.01;

    fn taxed(price: f64, rate: f64) -> f64 {
        round_cents(price * rate + price)
    }
}

impl Visitor for TaxVisitor {
    type Output = f64;

    fn visit_liquor(&mut self, liquor: &Liquor) -> f64 {
        Self::taxed(liquor.price, Self::LIQUOR_RATE)
    }

    fn visit_tobacco(&mut self, tobacco: &Tobacco) -> f64 {
        Self::taxed(tobacco.price, Self::TOBACCO_RATE)
    }

    fn visit_necessity(&mut self, necessity: &Necessity) -> f64 {
        Self::taxed(necessity.price, Self::NECESSITY_RATE)
    }
}

/// Untaxed shelf price.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriceVisitor;

impl Visitor for PriceVisitor {
    type Output = f64;

    fn visit_liquor(&mut self, liquor: &Liquor) -> f64 {
        liquor.price
    }

    fn visit_tobacco(&mut self, tobacco: &Tobacco) -> f64 {
        tobacco.price
    }

    fn visit_necessity(&mut self, necessity: &Necessity) -> f64 {
        necessity.price
    }
}

/// Round to two decimals, ties to even.
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}
