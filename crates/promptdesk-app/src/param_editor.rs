//! Nested parameter list editor for the tool form
//!
//! The editor owns only transient state: a row cursor and at most one open
//! editing slot. The parameter list itself lives in the tool draft; every
//! mutation returns the complete new list for the form to store.

use promptdesk_core::prelude::*;
use promptdesk_core::{FieldErrors, ParamField, Parameter};

use crate::form::{cycle_option, TextEdit};

/// Where a saved slot lands in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTarget {
    /// New entry appended at the end
    Append,
    /// Existing entry replaced in place
    Replace(usize),
}

/// The single open editing slot
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSlot {
    pub target: SlotTarget,
    pub entry: Parameter,
    pub focus: ParamField,
    pub errors: FieldErrors<ParamField>,
}

impl ParamSlot {
    fn new(target: SlotTarget, entry: Parameter) -> Self {
        Self {
            target,
            entry,
            focus: ParamField::Name,
            errors: FieldErrors::new(),
        }
    }

    /// Heading shown above the slot inputs
    pub fn title(&self) -> &'static str {
        match self.target {
            SlotTarget::Append => "添加新参数",
            SlotTarget::Replace(_) => "编辑参数",
        }
    }

    pub fn save_label(&self) -> &'static str {
        match self.target {
            SlotTarget::Append => "添加参数",
            SlotTarget::Replace(_) => "保存修改",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamEditorState {
    /// Row cursor into the parameter list
    pub selected: usize,
    /// Open slot; `None` when no entry is being edited
    pub slot: Option<ParamSlot>,
}

impl ParamEditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a slot is open. List actions are disabled meanwhile.
    pub fn is_editing(&self) -> bool {
        self.slot.is_some()
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Open a blank slot. Refused while another slot is open.
    pub fn begin_add(&mut self) -> bool {
        if self.is_editing() {
            debug!("parameter add ignored: slot already open");
            return false;
        }
        self.slot = Some(ParamSlot::new(SlotTarget::Append, Parameter::default()));
        true
    }

    /// Open a slot pre-filled from entry `index`.
    pub fn begin_edit(&mut self, params: &[Parameter], index: usize) -> bool {
        if self.is_editing() {
            debug!("parameter edit ignored: slot already open");
            return false;
        }
        match params.get(index) {
            Some(param) => {
                self.selected = index;
                self.slot = Some(ParamSlot::new(SlotTarget::Replace(index), param.clone()));
                true
            }
            None => false,
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(slot) = &mut self.slot {
            slot.focus = slot.focus.next();
        }
    }

    pub fn focus_previous(&mut self) {
        if let Some(slot) = &mut self.slot {
            slot.focus = slot.focus.prev();
        }
    }

    /// Apply a text edit to the focused slot field.
    ///
    /// The type field is a selector and ignores typed text.
    pub fn edit_text(&mut self, edit: TextEdit) {
        if let Some(slot) = &mut self.slot {
            if slot.focus == ParamField::Type {
                return;
            }
            edit.apply(slot.entry.get_mut(slot.focus));
            slot.errors.clear(slot.focus);
        }
    }

    /// Move the slot's type through `options`
    pub fn cycle_type(&mut self, options: &[String], forward: bool) {
        if let Some(slot) = &mut self.slot {
            if let Some(next) = cycle_option(options, &slot.entry.param_type, forward) {
                slot.entry.param_type = next.to_string();
                slot.errors.clear(ParamField::Type);
            }
        }
    }

    /// Validate and commit the slot.
    ///
    /// Returns the new list and closes the slot on success. With a missing
    /// field the slot stays open, annotated with its errors, and `None` is
    /// returned.
    pub fn save(&mut self, params: &[Parameter]) -> Option<Vec<Parameter>> {
        let slot = self.slot.as_mut()?;

        let errors = slot.entry.validate();
        if !errors.is_empty() {
            debug!("parameter save blocked: {:?}", errors.labels());
            slot.errors = errors;
            return None;
        }

        let mut updated = params.to_vec();
        let entry = slot.entry.clone();
        let target = slot.target;
        match target {
            SlotTarget::Replace(index) if index < updated.len() => {
                updated[index] = entry;
                self.selected = index;
            }
            _ => {
                updated.push(entry);
                self.selected = updated.len() - 1;
            }
        }
        self.slot = None;
        Some(updated)
    }

    /// Discard the slot, leaving the list unchanged.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    /// Remove entry `index`, preserving the order of the rest.
    ///
    /// Refused while a slot is open or when `index` is out of range.
    pub fn delete(&mut self, params: &[Parameter], index: usize) -> Option<Vec<Parameter>> {
        if self.is_editing() || index >= params.len() {
            return None;
        }
        let mut updated = params.to_vec();
        updated.remove(index);
        self.clamp(updated.len());
        Some(updated)
    }

    /// Keep the cursor inside a list of `len` entries
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
