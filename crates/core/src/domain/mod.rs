pub mod dessert;
pub mod drink;
pub mod item;
pub mod pizza;

use rust_decimal::Decimal;

pub use dessert::Dessert;
pub use drink::Drink;
pub use item::{Category, ItemRecord, MenuItem, MenuItemRef};
pub use pizza::{Pizza, PizzaKey};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Case-insensitive name used to dedup drinks and desserts and to match `remove` lookups.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }
}

pub(crate) fn format_price(price: Decimal, currency_symbol: &str) -> String {
    format!("{price}{currency_symbol}")
}
