pub mod bootstrap;
pub mod carte;
pub mod config;
pub mod domain;
pub mod errors;

pub use bootstrap::{bootstrap, init_logging, Application, BootstrapError};
pub use carte::{CartePizzeria, EMPTY_CARTE};
pub use config::{AppConfig, ConfigError, LoadOptions};
pub use domain::{Category, Dessert, Drink, ItemRecord, MenuItem, MenuItemRef, Pizza};
pub use errors::CarteError;
