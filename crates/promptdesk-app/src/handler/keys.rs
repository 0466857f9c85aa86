//! Key event handlers for the different UI modes

use crate::form::{InputKind, TextEdit};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, EntityTab, UiMode};

/// Convert a key press to a message based on the current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_interrupt() {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::List => handle_key_list(state, key),
        UiMode::Form => handle_key_form(state, key),
        UiMode::ParamSlot => handle_key_param_slot(key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        _ => None,
    }
}

fn handle_key_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Cursor
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home | InputKey::PageUp => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End | InputKey::PageDown => Some(Message::SelectLast),

        // Record actions
        InputKey::Char('a') => Some(Message::OpenCreateForm),
        InputKey::Char('e') | InputKey::Enter => Some(Message::OpenEditForm),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDelete),
        InputKey::Char('v') if state.active_tab == EntityTab::Prompts => {
            Some(Message::ViewFullPrompt)
        }

        // Tabs
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PreviousTab),
        InputKey::Char('1') => Some(Message::SwitchTab(EntityTab::Tools)),
        InputKey::Char('2') => Some(Message::SwitchTab(EntityTab::Prompts)),

        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => return Some(Message::CancelForm),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        InputKey::CharCtrl('s') => return Some(Message::SubmitForm),
        _ => {}
    }

    match state.focused_input()? {
        InputKind::Text => match key {
            InputKey::Enter | InputKey::Down => Some(Message::FocusNext),
            InputKey::Up => Some(Message::FocusPrevious),
            _ => text_edit(key).map(Message::EditText),
        },
        InputKind::Select => match key {
            InputKey::Left => Some(Message::CycleOption { forward: false }),
            InputKey::Right | InputKey::Char(' ') => Some(Message::CycleOption { forward: true }),
            InputKey::Enter | InputKey::Down => Some(Message::FocusNext),
            InputKey::Up => Some(Message::FocusPrevious),
            _ => None,
        },
        InputKind::SelectWithText => match key {
            InputKey::Left => Some(Message::CycleOption { forward: false }),
            InputKey::Right => Some(Message::CycleOption { forward: true }),
            InputKey::Enter | InputKey::Down => Some(Message::FocusNext),
            InputKey::Up => Some(Message::FocusPrevious),
            _ => text_edit(key).map(Message::EditText),
        },
        InputKind::Parameters => match key {
            InputKey::Char('a') => Some(Message::AddParameter),
            InputKey::Char('e') | InputKey::Enter => Some(Message::EditParameter),
            InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDeleteParameter),
            InputKey::Char('j') | InputKey::Down => Some(Message::SelectNextParameter),
            InputKey::Char('k') | InputKey::Up => Some(Message::SelectPreviousParameter),
            _ => None,
        },
        InputKind::SubmitButton => match key {
            InputKey::Enter => Some(Message::SubmitForm),
            InputKey::Right => Some(Message::FocusNext),
            InputKey::Left | InputKey::Up => Some(Message::FocusPrevious),
            _ => None,
        },
        InputKind::CancelButton => match key {
            InputKey::Enter => Some(Message::CancelForm),
            InputKey::Left | InputKey::Up => Some(Message::FocusPrevious),
            _ => None,
        },
    }
}

fn handle_key_param_slot(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelParameter),
        InputKey::Enter => Some(Message::SaveParameter),
        InputKey::Tab | InputKey::Down => Some(Message::ParamFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::ParamFocusPrevious),
        InputKey::Left => Some(Message::CycleParamType { forward: false }),
        InputKey::Right => Some(Message::CycleParamType { forward: true }),
        _ => text_edit(key).map(Message::ParamEditText),
    }
}

/// Keys that edit a text input
fn text_edit(key: InputKey) -> Option<TextEdit> {
    match key {
        InputKey::Char(c) => Some(TextEdit::Insert(c)),
        InputKey::Backspace => Some(TextEdit::Backspace),
        InputKey::CharCtrl('u') => Some(TextEdit::Clear),
        _ => None,
    }
}
