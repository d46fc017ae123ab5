use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::Serialize;

use super::{format_price, DEFAULT_CURRENCY_SYMBOL};

/// Dedup key for pizzas: the ingredient set plus the lowercased base.
///
/// Ingredients are sorted and deduplicated but otherwise kept verbatim, so
/// `["Tomate", "Mozzarella"]` and `["Mozzarella", "Tomate"]` share a key while
/// `["tomate", "mozzarella"]` does not.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PizzaKey {
    ingredients: Vec<String>,
    base: String,
}

impl PizzaKey {
    pub fn new<S: AsRef<str>>(ingredients: &[S], base: &str) -> Self {
        let mut ingredients: Vec<String> =
            ingredients.iter().map(|ingredient| ingredient.as_ref().to_owned()).collect();
        ingredients.sort();
        ingredients.dedup();

        Self { ingredients, base: normalize_base(base) }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Pizza {
    name: String,
    price: Decimal,
    description: String,
    ingredients: Box<[String]>,
    base: String,
}

impl Pizza {
    /// Recognised bases. Other values are kept as given (lowercased).
    pub const KNOWN_BASES: [&'static str; 2] = ["tomate", "crème"];

    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
        ingredients: Vec<String>,
        base: &str,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            ingredients: ingredients.into_boxed_slice(),
            base: normalize_base(base),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn has_known_base(&self) -> bool {
        Self::KNOWN_BASES.contains(&self.base.as_str())
    }

    pub fn key(&self) -> PizzaKey {
        PizzaKey::new(&self.ingredients, &self.base)
    }

    pub fn label(&self, currency_symbol: &str) -> String {
        format!(
            "{} ({}) - {} - {} : {}",
            self.name,
            self.base,
            self.description,
            self.ingredients.join(", "),
            format_price(self.price, currency_symbol)
        )
    }
}

impl PartialEq for Pizza {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pizza {}

impl Hash for Pizza {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(DEFAULT_CURRENCY_SYMBOL))
    }
}

fn normalize_base(base: &str) -> String {
    base.to_lowercase()
}
