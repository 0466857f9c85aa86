//! Parameter sub-editor handlers
//!
//! Only the tool form has a parameter list. Every handler is a no-op unless
//! the tools tab shows a form.

use promptdesk_core::prelude::*;

use super::UpdateResult;
use crate::confirm_dialog::ConfirmDialogState;
use crate::form::{TextEdit, ToolFormState};
use crate::state::{AppState, EntityTab};

fn tool_form(state: &mut AppState) -> Option<&mut ToolFormState> {
    if state.active_tab != EntityTab::Tools {
        return None;
    }
    state.tools.view.form_mut()
}

pub(crate) fn add_parameter(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.begin_add();
    }
    UpdateResult::none()
}

pub(crate) fn edit_parameter(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        let index = form.params.selected;
        form.params.begin_edit(&form.draft.tool_parameters, index);
    }
    UpdateResult::none()
}

pub(crate) fn request_delete_parameter(state: &mut AppState) -> UpdateResult {
    let dialog = tool_form(state).and_then(|form| {
        if form.params.is_editing() {
            return None;
        }
        let index = form.params.selected;
        form.draft
            .tool_parameters
            .get(index)
            .map(|param| ConfirmDialogState::delete_parameter(index, param))
    });
    if dialog.is_some() {
        state.confirm_dialog_state = dialog;
    }
    UpdateResult::none()
}

/// Remove entry `index` after the user confirmed
pub(crate) fn delete_parameter(state: &mut AppState, index: usize) {
    let Some(form) = tool_form(state) else {
        return;
    };
    let name = form
        .draft
        .tool_parameters
        .get(index)
        .map(|p| p.name.clone())
        .unwrap_or_default();
    if let Some(params) = form.params.delete(&form.draft.tool_parameters, index) {
        form.set_parameters(params);
        debug!("removed parameter {} at {}", name, index);
        state.set_status(format!("已删除参数 {}", name));
    }
}

pub(crate) fn select_next_parameter(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.select_next(form.draft.tool_parameters.len());
    }
    UpdateResult::none()
}

pub(crate) fn select_previous_parameter(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.select_previous(form.draft.tool_parameters.len());
    }
    UpdateResult::none()
}

pub(crate) fn focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.focus_next();
    }
    UpdateResult::none()
}

pub(crate) fn focus_previous(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.focus_previous();
    }
    UpdateResult::none()
}

pub(crate) fn edit_text(state: &mut AppState, edit: TextEdit) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.edit_text(edit);
    }
    UpdateResult::none()
}

pub(crate) fn cycle_type(state: &mut AppState, forward: bool) -> UpdateResult {
    if state.active_tab != EntityTab::Tools {
        return UpdateResult::none();
    }
    let options = &state.settings.catalog.parameter_types;
    if let Some(form) = state.tools.view.form_mut() {
        form.params.cycle_type(options, forward);
    }
    UpdateResult::none()
}

pub(crate) fn save_parameter(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        if let Some(params) = form.params.save(&form.draft.tool_parameters) {
            form.set_parameters(params);
        }
    }
    UpdateResult::none()
}

pub(crate) fn cancel_parameter(state: &mut AppState) -> UpdateResult {
    if let Some(form) = tool_form(state) {
        form.params.cancel();
    }
    UpdateResult::none()
}
