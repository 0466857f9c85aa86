//! List view handlers: tabs, cursor, opening forms and confirmed deletes

use promptdesk_core::prelude::*;
use promptdesk_core::{Entity, RecordId, RecordStorage};

use super::UpdateResult;
use crate::confirm_dialog::{ConfirmDialogState, PendingDelete};
use crate::form::{PromptFormState, ToolFormState};
use crate::state::{AppState, EntityPane, EntityTab, EntityView};

/// True when the active tab shows its list
fn active_is_listing(state: &AppState) -> bool {
    match state.active_tab {
        EntityTab::Tools => state.tools.view.is_listing(),
        EntityTab::Prompts => state.prompts.view.is_listing(),
    }
}

/// Switch tabs. Only allowed from a list so no form is hidden mid-edit.
pub(crate) fn switch_tab(state: &mut AppState, tab: EntityTab) -> UpdateResult {
    if active_is_listing(state) && state.active_tab != tab {
        debug!("switching to tab {:?}", tab);
        state.active_tab = tab;
    }
    UpdateResult::none()
}

pub(crate) fn toggle_tab(state: &mut AppState) -> UpdateResult {
    let tab = state.active_tab.toggle();
    switch_tab(state, tab)
}

/// Cursor movement on the active list
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cursor {
    Next,
    Previous,
    First,
    Last,
}

fn move_cursor<R: Entity, F>(pane: &mut EntityPane<R, F>, cursor: Cursor) {
    if !pane.view.is_listing() {
        return;
    }
    match cursor {
        Cursor::Next => pane.select_next(),
        Cursor::Previous => pane.select_previous(),
        Cursor::First => pane.select_first(),
        Cursor::Last => pane.select_last(),
    }
}

pub(crate) fn handle_cursor(state: &mut AppState, cursor: Cursor) -> UpdateResult {
    match state.active_tab {
        EntityTab::Tools => move_cursor(&mut state.tools, cursor),
        EntityTab::Prompts => move_cursor(&mut state.prompts, cursor),
    }
    UpdateResult::none()
}

pub(crate) fn open_create_form(state: &mut AppState) -> UpdateResult {
    if !active_is_listing(state) {
        return UpdateResult::none();
    }
    match state.active_tab {
        EntityTab::Tools => state.tools.view = EntityView::Creating(ToolFormState::create()),
        EntityTab::Prompts => state.prompts.view = EntityView::Creating(PromptFormState::create()),
    }
    UpdateResult::none()
}

pub(crate) fn open_edit_form(state: &mut AppState) -> UpdateResult {
    if !active_is_listing(state) {
        return UpdateResult::none();
    }
    match state.active_tab {
        EntityTab::Tools => {
            if let Some(record) = state.tools.selected_record().cloned() {
                let form = ToolFormState::edit(&record);
                state.tools.view = EntityView::Editing { record, form };
            }
        }
        EntityTab::Prompts => {
            if let Some(record) = state.prompts.selected_record().cloned() {
                let form = PromptFormState::edit(&record, &state.settings.catalog);
                state.prompts.view = EntityView::Editing { record, form };
            }
        }
    }
    UpdateResult::none()
}

/// "View more" on a truncated prompt card opens it for editing
pub(crate) fn view_full_prompt(state: &mut AppState) -> UpdateResult {
    if state.active_tab == EntityTab::Prompts && state.selected_prompt_truncated() {
        return open_edit_form(state);
    }
    UpdateResult::none()
}

pub(crate) fn request_delete(state: &mut AppState) -> UpdateResult {
    if !active_is_listing(state) {
        return UpdateResult::none();
    }
    let dialog = match state.active_tab {
        EntityTab::Tools => state
            .tools
            .selected_record()
            .map(ConfirmDialogState::delete_tool),
        EntityTab::Prompts => state
            .prompts
            .selected_record()
            .map(ConfirmDialogState::delete_prompt),
    };
    if dialog.is_some() {
        state.confirm_dialog_state = dialog;
    }
    UpdateResult::none()
}

pub(crate) fn cancel_delete(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.confirm_dialog_state.take() {
        debug!("delete cancelled: {:?}", dialog.target);
    }
    UpdateResult::none()
}

pub(crate) fn confirm_delete(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.confirm_dialog_state.take() else {
        return UpdateResult::none();
    };

    let outcome = match dialog.target {
        PendingDelete::Tool(id) => delete_from_pane(&mut state.tools, id),
        PendingDelete::Prompt(id) => delete_from_pane(&mut state.prompts, id),
        PendingDelete::Parameter(index) => {
            super::params::delete_parameter(state, index);
            return UpdateResult::none();
        }
    };

    match outcome {
        Ok(message) => state.set_status(message),
        Err(Error::NotFound { kind, id }) => {
            debug!("{} {} already gone, delete skipped", kind, id);
        }
        Err(e) => {
            warn!("delete failed: {}", e);
            state.set_error(format!("删除失败：{}", e));
        }
    }
    UpdateResult::none()
}

/// Delete through the storage trait and keep the cursor in range
fn delete_from_pane<R: Entity, F>(pane: &mut EntityPane<R, F>, id: RecordId) -> Result<String> {
    let name = pane
        .store
        .get(id)
        .map(Entity::display_name)
        .ok_or_else(|| Error::not_found(R::KIND, id))?;
    RecordStorage::delete(&mut pane.store, id)?;
    pane.clamp_selection();
    Ok(format!("已删除{} {}", R::KIND.label(), name))
}
