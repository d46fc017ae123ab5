use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::Serialize;

use super::{format_price, NameKey, DEFAULT_CURRENCY_SYMBOL};

#[derive(Clone, Debug, Serialize)]
pub struct Dessert {
    name: String,
    price: Decimal,
    ingredients: Box<[String]>,
    home_made: bool,
}

impl Dessert {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        ingredients: Vec<String>,
        home_made: bool,
    ) -> Self {
        Self { name: name.into(), price, ingredients: ingredients.into_boxed_slice(), home_made }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn is_home_made(&self) -> bool {
        self.home_made
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }

    pub fn label(&self, currency_symbol: &str) -> String {
        let origin = if self.home_made { "Fait Maison" } else { "Industriel" };
        format!("{} - {} : {}", self.name, origin, format_price(self.price, currency_symbol))
    }
}

impl PartialEq for Dessert {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Dessert {}

impl Hash for Dessert {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Dessert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(DEFAULT_CURRENCY_SYMBOL))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::Dessert;

    #[test]
    fn equality_only_looks_at_the_name() {
        let homemade = Dessert::new(
            "Tiramisu",
            Decimal::new(65, 1),
            vec!["Mascarpone".to_string(), "Café".to_string()],
            true,
        );
        let bought = Dessert::new("tiramisu", Decimal::new(5, 0), Vec::new(), false);

        assert_eq!(homemade, bought);
        assert_eq!(homemade.ingredients().len(), 2);
    }

    #[test]
    fn display_reports_origin() {
        let panna = Dessert::new("Panna Cotta", Decimal::new(60, 1), Vec::new(), true);
        assert_eq!(panna.to_string(), "Panna Cotta - Fait Maison : 6.0€");
    }
}
