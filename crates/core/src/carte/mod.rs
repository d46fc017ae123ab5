mod render;

pub use render::EMPTY_CARTE;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::domain::{
    Category, Dessert, Drink, MenuItem, MenuItemRef, NameKey, Pizza, PizzaKey,
    DEFAULT_CURRENCY_SYMBOL,
};
use crate::errors::CarteError;

/// In-memory menu with one duplicate-free collection per category.
///
/// Pizzas are keyed by their ingredient set and base, drinks and desserts by
/// their case-insensitive name. Iteration follows key order.
#[derive(Clone, Debug)]
pub struct CartePizzeria {
    pizzas: BTreeMap<PizzaKey, Pizza>,
    drinks: BTreeMap<NameKey, Drink>,
    desserts: BTreeMap<NameKey, Dessert>,
    currency_symbol: String,
}

impl Default for CartePizzeria {
    fn default() -> Self {
        Self::new()
    }
}

impl CartePizzeria {
    pub fn new() -> Self {
        Self::with_currency_symbol(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn with_currency_symbol(currency_symbol: impl Into<String>) -> Self {
        Self {
            pizzas: BTreeMap::new(),
            drinks: BTreeMap::new(),
            desserts: BTreeMap::new(),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty() && self.drinks.is_empty() && self.desserts.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Pizza => self.pizzas.len(),
            Category::Drink => self.drinks.len(),
            Category::Dessert => self.desserts.len(),
        }
    }

    pub fn nb_pizzas(&self) -> usize {
        self.count(Category::Pizza)
    }

    pub fn nb_drinks(&self) -> usize {
        self.count(Category::Drink)
    }

    pub fn nb_desserts(&self) -> usize {
        self.count(Category::Dessert)
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|category| self.count(*category)).sum()
    }

    pub fn pizzas(&self) -> impl Iterator<Item = &Pizza> + '_ {
        self.pizzas.values()
    }

    pub fn drinks(&self) -> impl Iterator<Item = &Drink> + '_ {
        self.drinks.values()
    }

    pub fn desserts(&self) -> impl Iterator<Item = &Dessert> + '_ {
        self.desserts.values()
    }

    pub fn contains(&self, item: &MenuItem) -> bool {
        match item {
            MenuItem::Pizza(pizza) => self.pizzas.contains_key(&pizza.key()),
            MenuItem::Drink(drink) => self.drinks.contains_key(&drink.key()),
            MenuItem::Dessert(dessert) => self.desserts.contains_key(&dessert.key()),
        }
    }

    /// Adds an item to its category.
    ///
    /// Accepts anything convertible into a `MenuItem`: the item types themselves,
    /// or an `ItemRecord` whose `kind` tag must name one of the three categories.
    pub fn add<I>(&mut self, item: I) -> Result<(), CarteError>
    where
        I: TryInto<MenuItem>,
        CarteError: From<I::Error>,
    {
        let item = match item.try_into() {
            Ok(item) => item,
            Err(error) => {
                let error = CarteError::from(error);
                warn!(event_name = "carte.item.unsupported", error = %error, "menu item rejected");
                return Err(error);
            }
        };

        let category = item.category();
        let name = item.name().to_owned();
        let inserted = match item {
            MenuItem::Pizza(pizza) => insert_unique(&mut self.pizzas, pizza.key(), pizza),
            MenuItem::Drink(drink) => insert_unique(&mut self.drinks, drink.key(), drink),
            MenuItem::Dessert(dessert) => {
                insert_unique(&mut self.desserts, dessert.key(), dessert)
            }
        };

        if !inserted {
            warn!(
                event_name = "carte.item.rejected",
                category = %category,
                item = %name,
                "duplicate menu item rejected"
            );
            return Err(CarteError::DuplicateItem { category, name });
        }

        info!(event_name = "carte.item.added", category = %category, item = %name, "menu item added");
        Ok(())
    }

    /// Adds items in order and returns how many were added. Stops at the first
    /// failure; items added before it stay on the menu.
    pub fn add_all<T, I>(&mut self, items: T) -> Result<usize, CarteError>
    where
        T: IntoIterator<Item = I>,
        I: TryInto<MenuItem>,
        CarteError: From<I::Error>,
    {
        let mut added = 0;
        for item in items {
            self.add(item)?;
            added += 1;
        }
        Ok(added)
    }

    /// Looks an item up by case-insensitive name, pizzas first, then drinks,
    /// then desserts.
    pub fn find(&self, name: &str) -> Option<MenuItemRef<'_>> {
        let wanted = NameKey::new(name);

        self.pizzas
            .values()
            .find(|pizza| NameKey::new(pizza.name()) == wanted)
            .map(MenuItemRef::Pizza)
            .or_else(|| self.drinks.get(&wanted).map(MenuItemRef::Drink))
            .or_else(|| self.desserts.get(&wanted).map(MenuItemRef::Dessert))
    }

    /// Removes the first item whose name matches `name` case-insensitively,
    /// searching pizzas, then drinks, then desserts.
    pub fn remove(&mut self, name: &str) -> Result<MenuItem, CarteError> {
        let wanted = NameKey::new(name);

        let removed = take_first(&mut self.pizzas, |pizza| NameKey::new(pizza.name()) == wanted)
            .map(MenuItem::Pizza)
            .or_else(|| self.drinks.remove(&wanted).map(MenuItem::Drink))
            .or_else(|| self.desserts.remove(&wanted).map(MenuItem::Dessert));

        match removed {
            Some(item) => {
                info!(
                    event_name = "carte.item.removed",
                    category = %item.category(),
                    item = %item.name(),
                    "menu item removed"
                );
                Ok(item)
            }
            None => {
                debug!(event_name = "carte.item.not_found", item = %name, "no menu item to remove");
                Err(CarteError::ItemNotFound { name: name.to_owned() })
            }
        }
    }
}

fn insert_unique<K: Ord, V>(collection: &mut BTreeMap<K, V>, key: K, value: V) -> bool {
    match collection.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
    }
}

fn take_first<K, V>(collection: &mut BTreeMap<K, V>, matches: impl Fn(&V) -> bool) -> Option<V>
where
    K: Ord + Clone,
{
    let key = collection.iter().find(|(_, value)| matches(value)).map(|(key, _)| key.clone())?;
    collection.remove(&key)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::CartePizzeria;
    use crate::domain::{Category, Dessert, Drink, ItemRecord, MenuItem, MenuItemRef, Pizza};
    use crate::errors::CarteError;

    fn pizza(name: &str, price: Decimal, ingredients: &[&str], base: &str) -> Pizza {
        Pizza::new(
            name,
            price,
            "recette maison",
            ingredients.iter().map(|value| value.to_string()).collect(),
            base,
        )
    }

    fn margherita() -> Pizza {
        pizza("Margherita", Decimal::new(85, 1), &["Tomate", "Mozzarella"], "tomate")
    }

    #[test]
    fn new_carte_is_empty() {
        let carte = CartePizzeria::new();
        assert!(carte.is_empty());
        assert_eq!(carte.len(), 0);
        for category in Category::ALL {
            assert_eq!(carte.count(category), 0);
        }
    }

    #[test]
    fn add_increments_only_its_own_category() {
        let mut carte = CartePizzeria::new();

        carte.add(Drink::new("Chianti", Decimal::new(60, 1), true)).expect("add drink");
        assert_eq!((carte.nb_pizzas(), carte.nb_drinks(), carte.nb_desserts()), (0, 1, 0));

        carte.add(margherita()).expect("add pizza");
        assert_eq!((carte.nb_pizzas(), carte.nb_drinks(), carte.nb_desserts()), (1, 1, 0));

        carte
            .add(Dessert::new("Tiramisu", Decimal::new(65, 1), Vec::new(), true))
            .expect("add dessert");
        assert_eq!((carte.nb_pizzas(), carte.nb_drinks(), carte.nb_desserts()), (1, 1, 1));
        assert_eq!(carte.len(), 3);
    }

    #[test]
    fn pizza_with_same_ingredients_and_base_is_a_duplicate() {
        let mut carte = CartePizzeria::new();
        carte.add(margherita()).expect("first margherita");

        let bis = pizza("Margherita Bis", Decimal::new(90, 1), &["Tomate", "Mozzarella"], "tomate");
        let error = carte.add(bis).expect_err("same ingredients and base");

        assert_eq!(
            error,
            CarteError::DuplicateItem {
                category: Category::Pizza,
                name: "Margherita Bis".to_owned()
            }
        );
        assert_eq!(carte.nb_pizzas(), 1);
        assert_eq!(carte.pizzas().next().map(Pizza::name), Some("Margherita"));
    }

    #[test]
    fn pizza_with_same_name_but_other_ingredients_is_accepted() {
        let mut carte = CartePizzeria::new();
        carte.add(margherita()).expect("first margherita");
        carte
            .add(pizza("Margherita", Decimal::new(95, 1), &["Tomate", "Burrata"], "tomate"))
            .expect("different ingredients");

        assert_eq!(carte.nb_pizzas(), 2);
    }

    #[test]
    fn drink_names_differing_only_in_case_are_duplicates() {
        let mut carte = CartePizzeria::new();
        carte.add(Drink::new("Coca-Cola", Decimal::new(3, 0), false)).expect("first cola");

        let error = carte
            .add(Drink::new("coca-cola", Decimal::new(4, 0), true))
            .expect_err("case-insensitive duplicate");

        assert!(matches!(error, CarteError::DuplicateItem { category: Category::Drink, .. }));
        assert_eq!(carte.nb_drinks(), 1);
    }

    #[test]
    fn dessert_dedup_ignores_everything_but_the_name() {
        let mut carte = CartePizzeria::new();
        carte
            .add(Dessert::new("Panna Cotta", Decimal::new(6, 0), vec!["Crème".to_owned()], true))
            .expect("first panna cotta");

        let error = carte
            .add(Dessert::new("PANNA COTTA", Decimal::new(4, 0), Vec::new(), false))
            .expect_err("same name");

        assert!(matches!(error, CarteError::DuplicateItem { category: Category::Dessert, .. }));
    }

    #[test]
    fn same_name_in_different_categories_is_allowed() {
        let mut carte = CartePizzeria::new();
        carte.add(Drink::new("Limoncello", Decimal::new(5, 0), true)).expect("drink");
        carte
            .add(Dessert::new("Limoncello", Decimal::new(7, 0), Vec::new(), true))
            .expect("dessert");

        assert_eq!(carte.len(), 2);
    }

    #[test]
    fn remove_is_case_insensitive_and_returns_the_item() {
        let mut carte = CartePizzeria::new();
        carte.add(margherita()).expect("add pizza");

        let removed = carte.remove("MARGHERITA").expect("remove pizza");

        assert_eq!(removed.name(), "Margherita");
        assert_eq!(removed.category(), Category::Pizza);
        assert!(carte.is_empty());
    }

    #[test]
    fn remove_is_exact_not_substring() {
        let mut carte = CartePizzeria::new();
        carte.add(margherita()).expect("add pizza");

        let error = carte.remove("Margh").expect_err("substring must not match");
        assert_eq!(error, CarteError::ItemNotFound { name: "Margh".to_owned() });
        assert_eq!(carte.nb_pizzas(), 1);
    }

    #[test]
    fn remove_unknown_name_fails() {
        let mut carte = CartePizzeria::new();
        let error = carte.remove("Hawaïenne").expect_err("empty carte");
        assert!(matches!(error, CarteError::ItemNotFound { ref name } if name == "Hawaïenne"));
    }

    #[test]
    fn remove_takes_only_the_first_match_in_category_order() {
        let mut carte = CartePizzeria::new();
        carte
            .add(Dessert::new("Calzone", Decimal::new(8, 0), Vec::new(), true))
            .expect("dessert calzone");
        carte.add(Drink::new("Calzone", Decimal::new(2, 0), false)).expect("drink calzone");
        carte
            .add(pizza("Calzone", Decimal::new(11, 0), &["Jambon", "Oeuf"], "tomate"))
            .expect("pizza calzone");

        let first = carte.remove("calzone").expect("first removal");
        assert_eq!(first.category(), Category::Pizza);
        assert_eq!((carte.nb_pizzas(), carte.nb_drinks(), carte.nb_desserts()), (0, 1, 1));

        let second = carte.remove("calzone").expect("second removal");
        assert_eq!(second.category(), Category::Drink);

        let third = carte.remove("calzone").expect("third removal");
        assert_eq!(third.category(), Category::Dessert);
        assert!(carte.is_empty());
    }

    #[test]
    fn find_follows_removal_order_without_mutating() {
        let mut carte = CartePizzeria::new();
        carte.add(Drink::new("Spritz", Decimal::new(7, 0), true)).expect("drink");

        let found = carte.find("spritz").expect("drink is listed");
        assert!(matches!(found, MenuItemRef::Drink(drink) if drink.contains_alcohol()));
        assert_eq!(carte.nb_drinks(), 1);
        assert!(carte.find("Negroni").is_none());
    }

    #[test]
    fn contains_uses_category_equality() {
        let mut carte = CartePizzeria::new();
        carte.add(margherita()).expect("add pizza");

        let renamed = MenuItem::from(pizza(
            "Autre Nom",
            Decimal::new(1, 0),
            &["Mozzarella", "Tomate"],
            "Tomate",
        ));
        assert!(carte.contains(&renamed));
    }

    #[test]
    fn ingredients_differing_in_case_or_spacing_are_distinct_pizzas() {
        let mut carte = CartePizzeria::new();
        carte.add(margherita()).expect("first margherita");

        carte
            .add(pizza("Minuscule", Decimal::new(85, 1), &["tomate", "mozzarella"], "tomate"))
            .expect("lowercase ingredients are a different set");
        carte
            .add(pizza("Espacée", Decimal::new(85, 1), &["Tomate ", "Mozzarella"], "tomate"))
            .expect("trailing space is a different ingredient");

        let repeated =
            pizza("Doublée", Decimal::new(85, 1), &["Tomate", "Tomate", "Mozzarella"], "tomate");
        assert!(matches!(
            carte.add(repeated),
            Err(CarteError::DuplicateItem { category: Category::Pizza, .. })
        ));
        assert_eq!(carte.nb_pizzas(), 3);
    }

    #[test]
    fn unsupported_record_kind_leaves_carte_untouched() {
        let mut carte = CartePizzeria::new();
        let record = ItemRecord {
            kind: "entrée".to_owned(),
            name: "Bruschetta".to_owned(),
            price: Decimal::new(5, 0),
            description: String::new(),
            ingredients: Vec::new(),
            base: Some("tomate".to_owned()),
            alcohol: false,
            home_made: true,
        };

        let error = carte.add(record).expect_err("unknown kind");
        assert_eq!(error, CarteError::UnsupportedItemType { kind: "entrée".to_owned() });
        assert!(carte.is_empty());
    }

    #[test]
    fn add_all_stops_at_first_duplicate() {
        let mut carte = CartePizzeria::new();
        let items: Vec<MenuItem> = vec![
            Drink::new("Eau", Decimal::new(2, 0), false).into(),
            Drink::new("Bière", Decimal::new(5, 0), true).into(),
            Drink::new("EAU", Decimal::new(2, 0), false).into(),
            Drink::new("Café", Decimal::new(2, 0), false).into(),
        ];

        let error = carte.add_all(items).expect_err("third drink duplicates the first");
        assert!(matches!(error, CarteError::DuplicateItem { .. }));
        assert_eq!(carte.nb_drinks(), 2);
    }

    #[test]
    fn scenario_margherita_duplicate_then_removal() {
        let mut carte = CartePizzeria::new();

        carte.add(margherita()).expect("margherita");
        assert_eq!(carte.count(Category::Pizza), 1);

        let bis = pizza("Margherita Bis", Decimal::new(90, 1), &["Tomate", "Mozzarella"], "tomate");
        assert!(matches!(carte.add(bis), Err(CarteError::DuplicateItem { .. })));

        carte.remove("Margherita").expect("remove margherita");
        assert_eq!(carte.count(Category::Pizza), 0);
        assert!(carte.is_empty());
    }
}
