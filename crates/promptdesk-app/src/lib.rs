//! promptdesk-app - Application state and update logic for PromptDesk
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`], a [`Message`] type and an [`update`](handler::update)
//! function. It also owns configuration and catalog loading, the forms, the
//! parameter sub-editor and signal handling. Nothing here depends on a
//! terminal library, so the whole flow is testable without one.

pub mod config;
pub mod confirm_dialog;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod param_editor;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{load_settings, Catalog, Settings};
pub use handler::{process_message, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, EntityTab, EntityView, UiMode};
