//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;

use promptdesk_core::prelude::*;

use super::list::Cursor;
use super::{form, keys::handle_key, list, params, UpdateResult};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and update state.
/// Returns an optional follow-up message.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.expire_status(Local::now());
            UpdateResult::none()
        }

        Message::Quit => {
            info!("quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        Message::SwitchTab(tab) => list::switch_tab(state, tab),
        Message::NextTab | Message::PreviousTab => list::toggle_tab(state),

        // ─────────────────────────────────────────────────────────
        // List view
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => list::handle_cursor(state, Cursor::Next),
        Message::SelectPrevious => list::handle_cursor(state, Cursor::Previous),
        Message::SelectFirst => list::handle_cursor(state, Cursor::First),
        Message::SelectLast => list::handle_cursor(state, Cursor::Last),
        Message::OpenCreateForm => list::open_create_form(state),
        Message::OpenEditForm => list::open_edit_form(state),
        Message::ViewFullPrompt => list::view_full_prompt(state),
        Message::RequestDelete => list::request_delete(state),
        Message::ConfirmDelete => list::confirm_delete(state),
        Message::CancelDelete => list::cancel_delete(state),

        // ─────────────────────────────────────────────────────────
        // Form view
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => form::focus_next(state),
        Message::FocusPrevious => form::focus_previous(state),
        Message::EditText(edit) => form::edit_text(state, edit),
        Message::CycleOption { forward } => form::cycle_option(state, forward),
        Message::SubmitForm => form::submit_form(state),
        Message::CancelForm => form::cancel_form(state),

        // ─────────────────────────────────────────────────────────
        // Parameter sub-editor
        // ─────────────────────────────────────────────────────────
        Message::AddParameter => params::add_parameter(state),
        Message::EditParameter => params::edit_parameter(state),
        Message::RequestDeleteParameter => params::request_delete_parameter(state),
        Message::SelectNextParameter => params::select_next_parameter(state),
        Message::SelectPreviousParameter => params::select_previous_parameter(state),
        Message::ParamFocusNext => params::focus_next(state),
        Message::ParamFocusPrevious => params::focus_previous(state),
        Message::ParamEditText(edit) => params::edit_text(state, edit),
        Message::CycleParamType { forward } => params::cycle_type(state, forward),
        Message::SaveParameter => params::save_parameter(state),
        Message::CancelParameter => params::cancel_parameter(state),
    }
}
