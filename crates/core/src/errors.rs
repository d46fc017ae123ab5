use std::convert::Infallible;

use thiserror::Error;

use crate::domain::Category;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CarteError {
    #[error("{category} `{name}` is already on the menu")]
    DuplicateItem { category: Category, name: String },
    #[error("no menu item named `{name}`")]
    ItemNotFound { name: String },
    #[error("unsupported menu item type `{kind}`")]
    UnsupportedItemType { kind: String },
    #[error("menu item `{name}` is missing `{field}`")]
    IncompleteRecord { name: String, field: &'static str },
}

impl CarteError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DuplicateItem { .. } => "This item is already on the menu.",
            Self::ItemNotFound { .. } => "No item with this name is on the menu.",
            Self::UnsupportedItemType { .. } => "Only pizzas, drinks and desserts can be listed.",
            Self::IncompleteRecord { .. } => "The item is missing a required field.",
        }
    }
}

impl From<Infallible> for CarteError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
