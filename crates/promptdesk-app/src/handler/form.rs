//! Form view handlers
//!
//! Submitting validates inside the form; only a valid draft reaches storage,
//! and it does so through [`RecordStorage`] so the commit path is the same
//! for any backend.

use promptdesk_core::prelude::*;
use promptdesk_core::{Entity, RecordStorage};

use super::UpdateResult;
use crate::form::{FormMode, RecordForm, TextEdit};
use crate::state::{AppState, EntityPane, EntityTab};

/// Commit a validated draft: create for new records, replace in place for edits
pub fn commit_draft<R, S>(storage: &mut S, mode: FormMode, draft: R::Draft) -> Result<R>
where
    R: Entity,
    S: RecordStorage<R>,
{
    match mode {
        FormMode::Create => storage.create(draft),
        FormMode::Edit(id) => storage.replace(id, draft),
    }
}

/// Validate `form` and commit its draft.
///
/// Returns `None` without touching `storage` when validation fails.
pub fn submit_with<F, S>(form: &mut F, storage: &mut S) -> Option<Result<F::Record>>
where
    F: RecordForm,
    S: RecordStorage<F::Record>,
{
    let draft = form.submit()?;
    Some(commit_draft(storage, form.mode(), draft))
}

pub(crate) fn focus_next(state: &mut AppState) -> UpdateResult {
    match state.active_tab {
        EntityTab::Tools => {
            if let Some(form) = state.tools.view.form_mut() {
                form.focus_next();
            }
        }
        EntityTab::Prompts => {
            if let Some(form) = state.prompts.view.form_mut() {
                form.focus_next();
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn focus_previous(state: &mut AppState) -> UpdateResult {
    match state.active_tab {
        EntityTab::Tools => {
            if let Some(form) = state.tools.view.form_mut() {
                form.focus_previous();
            }
        }
        EntityTab::Prompts => {
            if let Some(form) = state.prompts.view.form_mut() {
                form.focus_previous();
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn edit_text(state: &mut AppState, edit: TextEdit) -> UpdateResult {
    match state.active_tab {
        EntityTab::Tools => {
            if let Some(form) = state.tools.view.form_mut() {
                form.edit_text(edit);
            }
        }
        EntityTab::Prompts => {
            if let Some(form) = state.prompts.view.form_mut() {
                form.edit_text(edit);
            }
        }
    }
    UpdateResult::none()
}

pub(crate) fn cycle_option(state: &mut AppState, forward: bool) -> UpdateResult {
    let catalog = &state.settings.catalog;
    match state.active_tab {
        EntityTab::Tools => {
            if let Some(form) = state.tools.view.form_mut() {
                form.cycle_option(catalog, forward);
            }
        }
        EntityTab::Prompts => {
            if let Some(form) = state.prompts.view.form_mut() {
                form.cycle_option(catalog, forward);
            }
        }
    }
    UpdateResult::none()
}

/// Outcome of submitting the form of one pane
enum Submitted<R> {
    /// Validation failed; the form shows its errors
    Invalid,
    Saved { record: R, mode: FormMode },
    Failed(Error),
}

fn submit_pane<F>(pane: &mut EntityPane<F::Record, F>) -> Option<Submitted<F::Record>>
where
    F: RecordForm,
{
    let form = pane.view.form_mut()?;
    let mode = form.mode();
    let outcome = match submit_with(form, &mut pane.store) {
        None => Submitted::Invalid,
        Some(Ok(record)) => Submitted::Saved { record, mode },
        Some(Err(e)) => Submitted::Failed(e),
    };

    match &outcome {
        Submitted::Saved { record, .. } => {
            let id = record.id();
            pane.show_list();
            pane.select_id(id);
        }
        Submitted::Failed(e) if matches!(e, Error::NotFound { .. }) => pane.show_list(),
        _ => {}
    }
    Some(outcome)
}

fn report<R: Entity>(state: &mut AppState, outcome: Option<Submitted<R>>) {
    match outcome {
        Some(Submitted::Saved { record, mode }) => {
            let verb = if mode.is_edit() { "已更新" } else { "已创建" };
            state.set_status(format!(
                "{}{} {}",
                verb,
                R::KIND.label(),
                record.display_name()
            ));
        }
        Some(Submitted::Failed(Error::NotFound { id, .. })) => {
            debug!("{} {} no longer exists, save skipped", R::KIND, id);
        }
        Some(Submitted::Failed(e)) => {
            warn!("saving {} failed: {}", R::KIND, e);
            state.set_error(format!("保存失败：{}", e));
        }
        Some(Submitted::Invalid) | None => {}
    }
}

pub(crate) fn submit_form(state: &mut AppState) -> UpdateResult {
    match state.active_tab {
        EntityTab::Tools => {
            let outcome = submit_pane(&mut state.tools);
            report(state, outcome);
        }
        EntityTab::Prompts => {
            let outcome = submit_pane(&mut state.prompts);
            report(state, outcome);
        }
    }
    UpdateResult::none()
}

/// Discard the form without confirmation
pub(crate) fn cancel_form(state: &mut AppState) -> UpdateResult {
    let dirty = match state.active_tab {
        EntityTab::Tools => state.tools.view.form().is_some_and(|f| f.dirty),
        EntityTab::Prompts => state.prompts.view.form().is_some_and(|f| f.dirty),
    };
    if dirty {
        debug!("discarding unsaved {:?} form", state.active_tab);
    }
    match state.active_tab {
        EntityTab::Tools => state.tools.show_list(),
        EntityTab::Prompts => state.prompts.show_list(),
    }
    UpdateResult::none()
}
