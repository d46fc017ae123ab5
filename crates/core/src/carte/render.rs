use std::fmt;

use super::CartePizzeria;
use crate::domain::Category;

pub const EMPTY_CARTE: &str = "La carte est vide.";

fn heading(category: Category) -> &'static str {
    match category {
        Category::Pizza => "\n🍕 Pizzas :",
        Category::Drink => "\n🥤 Boissons :",
        Category::Dessert => "\n🍰 Desserts :",
    }
}

impl CartePizzeria {
    /// Lists every item grouped by category. Empty categories are skipped and
    /// an empty carte renders as [`EMPTY_CARTE`].
    pub fn render(&self) -> String {
        let currency = self.currency_symbol();
        let mut lines = Vec::new();

        for category in Category::ALL {
            let labels: Vec<String> = match category {
                Category::Pizza => self.pizzas().map(|pizza| pizza.label(currency)).collect(),
                Category::Drink => self.drinks().map(|drink| drink.label(currency)).collect(),
                Category::Dessert => {
                    self.desserts().map(|dessert| dessert.label(currency)).collect()
                }
            };

            if labels.is_empty() {
                continue;
            }
            lines.push(heading(category).to_string());
            lines.extend(labels);
        }

        if lines.is_empty() {
            return EMPTY_CARTE.to_string();
        }
        lines.join("\n")
    }
}

impl fmt::Display for CartePizzeria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
