//! Tool definition form

use promptdesk_core::prelude::*;
use promptdesk_core::{Entity, FieldErrors, Parameter, ToolDraft, ToolField, ToolRecord};

use super::{cycle_option, FormFocus, FormMode, InputKind, TextEdit};
use crate::config::Catalog;
use crate::param_editor::ParamEditorState;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolFormState {
    pub mode: FormMode,
    pub draft: ToolDraft,
    pub errors: FieldErrors<ToolField>,
    pub focus: FormFocus<ToolField>,
    pub params: ParamEditorState,
    /// Set once any value differs from what the form opened with
    pub dirty: bool,
}

impl ToolFormState {
    /// Blank form for a new tool
    pub fn create() -> Self {
        Self::with_draft(FormMode::Create, ToolDraft::default())
    }

    /// Form pre-populated from an existing tool
    pub fn edit(record: &ToolRecord) -> Self {
        Self::with_draft(FormMode::Edit(record.id), record.to_draft())
    }

    fn with_draft(mode: FormMode, draft: ToolDraft) -> Self {
        Self {
            mode,
            draft,
            errors: FieldErrors::new(),
            focus: FormFocus::Field(ToolField::ToolName),
            params: ParamEditorState::new(),
            dirty: false,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "编辑工具"
        } else {
            "添加新工具"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "保存修改"
        } else {
            "创建工具"
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self.focus {
            FormFocus::Field(ToolField::ToolType | ToolField::IndustryAffiliation) => {
                InputKind::Select
            }
            FormFocus::Field(ToolField::Parameters) => InputKind::Parameters,
            FormFocus::Field(_) => InputKind::Text,
            FormFocus::Submit => InputKind::SubmitButton,
            FormFocus::Cancel => InputKind::CancelButton,
        }
    }

    /// Catalog options for a select field, `None` for other fields
    pub fn options<'a>(field: ToolField, catalog: &'a Catalog) -> Option<&'a [String]> {
        match field {
            ToolField::ToolType => Some(&catalog.tool_types),
            ToolField::IndustryAffiliation => Some(&catalog.tool_industries),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(&ToolField::ALL);
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.prev(&ToolField::ALL);
    }

    /// Replace a scalar field, clearing that field's error only.
    pub fn set_field(&mut self, field: ToolField, value: impl Into<String>) {
        if let Some(slot) = self.draft.get_mut(field) {
            *slot = value.into();
            self.errors.clear(field);
            self.dirty = true;
        }
    }

    /// Apply a text edit to the focused text field
    pub fn edit_text(&mut self, edit: TextEdit) {
        if self.input_kind() != InputKind::Text {
            return;
        }
        let Some(field) = self.focus.field() else {
            return;
        };
        if let Some(value) = self.draft.get_mut(field) {
            edit.apply(value);
            self.errors.clear(field);
            self.dirty = true;
        }
    }

    /// Step the focused select field through its catalog options
    pub fn cycle_option(&mut self, catalog: &Catalog, forward: bool) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let Some(options) = Self::options(field, catalog) else {
            return;
        };
        if let Some(next) = cycle_option(options, self.draft.get(field), forward) {
            let next = next.to_string();
            self.set_field(field, next);
        }
    }

    /// Store the list handed back by the parameter editor
    pub fn set_parameters(&mut self, params: Vec<Parameter>) {
        self.params.clamp(params.len());
        self.draft.tool_parameters = params;
        self.dirty = true;
    }

    /// Validate the draft.
    ///
    /// On failure every blank required field is annotated, focus jumps to the
    /// first of them and `None` is returned.
    pub fn submit(&mut self) -> Option<ToolDraft> {
        let errors = self.draft.validate();
        let first = errors.fields().next();
        if let Some(first) = first {
            debug!("tool form invalid: {:?}", errors.labels());
            self.focus = FormFocus::Field(first);
            self.errors = errors;
            return None;
        }
        self.errors = errors;
        Some(self.draft.clone())
    }
}
