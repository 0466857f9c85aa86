//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event mapping per UI mode
//! - `list`: List view, tab and delete confirmation handlers
//! - `form`: Form focus, editing, submit and cancel handlers
//! - `params`: Parameter sub-editor handlers

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod list;
pub(crate) mod params;
pub(crate) mod update;


use crate::message::Message;
use crate::state::AppState;

pub use form::{commit_draft, submit_with};
pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Run `message` through `update`, then every follow-up it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}
