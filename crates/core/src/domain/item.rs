use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Dessert, Drink, Pizza};
use crate::errors::CarteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pizza,
    Drink,
    Dessert,
}

impl Category {
    /// Lookup order used by `CartePizzeria::remove` and by rendering.
    pub const ALL: [Category; 3] = [Category::Pizza, Category::Drink, Category::Dessert];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pizza => "pizza",
            Self::Drink => "drink",
            Self::Dessert => "dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Pizza(Pizza),
    Drink(Drink),
    Dessert(Dessert),
}

impl MenuItem {
    pub fn category(&self) -> Category {
        match self {
            Self::Pizza(_) => Category::Pizza,
            Self::Drink(_) => Category::Drink,
            Self::Dessert(_) => Category::Dessert,
        }
    }

    pub fn name(&self) -> &str {
        self.as_item_ref().name()
    }

    pub fn price(&self) -> Decimal {
        self.as_item_ref().price()
    }

    pub fn label(&self, currency_symbol: &str) -> String {
        self.as_item_ref().label(currency_symbol)
    }

    pub fn as_item_ref(&self) -> MenuItemRef<'_> {
        match self {
            Self::Pizza(pizza) => MenuItemRef::Pizza(pizza),
            Self::Drink(drink) => MenuItemRef::Drink(drink),
            Self::Dessert(dessert) => MenuItemRef::Dessert(dessert),
        }
    }
}

impl From<Pizza> for MenuItem {
    fn from(value: Pizza) -> Self {
        Self::Pizza(value)
    }
}

impl From<Drink> for MenuItem {
    fn from(value: Drink) -> Self {
        Self::Drink(value)
    }
}

impl From<Dessert> for MenuItem {
    fn from(value: Dessert) -> Self {
        Self::Dessert(value)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pizza(pizza) => pizza.fmt(f),
            Self::Drink(drink) => drink.fmt(f),
            Self::Dessert(dessert) => dessert.fmt(f),
        }
    }
}

/// Borrowed view of an item held by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItemRef<'a> {
    Pizza(&'a Pizza),
    Drink(&'a Drink),
    Dessert(&'a Dessert),
}

impl<'a> MenuItemRef<'a> {
    pub fn category(self) -> Category {
        match self {
            Self::Pizza(_) => Category::Pizza,
            Self::Drink(_) => Category::Drink,
            Self::Dessert(_) => Category::Dessert,
        }
    }

    pub fn name(self) -> &'a str {
        match self {
            Self::Pizza(pizza) => pizza.name(),
            Self::Drink(drink) => drink.name(),
            Self::Dessert(dessert) => dessert.name(),
        }
    }

    pub fn price(self) -> Decimal {
        match self {
            Self::Pizza(pizza) => pizza.price(),
            Self::Drink(drink) => drink.price(),
            Self::Dessert(dessert) => dessert.price(),
        }
    }

    pub fn label(self, currency_symbol: &str) -> String {
        match self {
            Self::Pizza(pizza) => pizza.label(currency_symbol),
            Self::Drink(drink) => drink.label(currency_symbol),
            Self::Dessert(dessert) => dessert.label(currency_symbol),
        }
    }
}

/// Loosely typed item as decoded from JSON or TOML. The `kind` tag is only
/// checked when the record is converted into a `MenuItem`; pizzas must carry a `base`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub kind: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub alcohol: bool,
    #[serde(default)]
    pub home_made: bool,
}

impl TryFrom<ItemRecord> for MenuItem {
    type Error = CarteError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        match record.kind.trim().to_lowercase().as_str() {
            "pizza" => {
                let Some(base) = record.base else {
                    return Err(CarteError::IncompleteRecord { name: record.name, field: "base" });
                };
                Ok(Self::Pizza(Pizza::new(
                    record.name,
                    record.price,
                    record.description,
                    record.ingredients,
                    &base,
                )))
            }
            "drink" | "boisson" => {
                Ok(Self::Drink(Drink::new(record.name, record.price, record.alcohol)))
            }
            "dessert" => Ok(Self::Dessert(Dessert::new(
                record.name,
                record.price,
                record.ingredients,
                record.home_made,
            ))),
            _ => Err(CarteError::UnsupportedItemType { kind: record.kind }),
        }
    }
}
