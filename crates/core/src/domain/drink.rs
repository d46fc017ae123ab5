use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::Serialize;

use super::{format_price, NameKey, DEFAULT_CURRENCY_SYMBOL};

#[derive(Clone, Debug, Serialize)]
pub struct Drink {
    name: String,
    price: Decimal,
    alcohol: bool,
}

impl Drink {
    pub fn new(name: impl Into<String>, price: Decimal, alcohol: bool) -> Self {
        Self { name: name.into(), price, alcohol }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn contains_alcohol(&self) -> bool {
        self.alcohol
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }

    pub fn label(&self, currency_symbol: &str) -> String {
        let alcohol = if self.alcohol { "Avec Alcool" } else { "Sans Alcool" };
        format!("{} - {} : {}", self.name, alcohol, format_price(self.price, currency_symbol))
    }
}

impl PartialEq for Drink {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Drink {}

impl Hash for Drink {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(DEFAULT_CURRENCY_SYMBOL))
    }
}
