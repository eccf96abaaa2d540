pub mod app_config;
pub mod config;
pub mod product;
pub mod slug;

pub use app_config::{AppConfig, Environment, FeedSource};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use product::{Catalog, Product};
pub use slug::{extract_product_id, humanize_slug, resolve_token};
