//! Configuration file parsing for PromptDesk
//!
//! Supports `.promptdesk/config.toml` with behavior, UI and catalog sections.

pub mod catalog;
pub mod settings;
pub mod types;

pub use catalog::{template_key, Catalog, TEMPLATE_KEY_SEPARATOR};
pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
