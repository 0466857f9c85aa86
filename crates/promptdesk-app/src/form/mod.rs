//! Form state shared by the tool and prompt editors
//!
//! A form owns a draft, its per-field validation errors and a focus cursor.
//! Forms never touch a store: `submit` hands back a validated draft and the
//! update function commits it.

pub mod prompt_form;
pub mod tool_form;

pub use prompt_form::{PromptFormState, CUSTOM_SCENARIO_LABEL};
pub use tool_form::ToolFormState;

use promptdesk_core::{Entity, RecordId};

/// Whether a form creates a new record or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// A form that produces drafts for one record type
pub trait RecordForm {
    type Record: Entity;

    fn mode(&self) -> FormMode;

    /// Validate and return the draft, or annotate errors and return `None`
    fn submit(&mut self) -> Option<<Self::Record as Entity>::Draft>;
}

impl RecordForm for ToolFormState {
    type Record = promptdesk_core::ToolRecord;

    fn mode(&self) -> FormMode {
        self.mode
    }

    fn submit(&mut self) -> Option<promptdesk_core::ToolDraft> {
        ToolFormState::submit(self)
    }
}

impl RecordForm for PromptFormState {
    type Record = promptdesk_core::PromptRecord;

    fn mode(&self) -> FormMode {
        self.mode
    }

    fn submit(&mut self) -> Option<promptdesk_core::PromptDraft> {
        PromptFormState::submit(self)
    }
}

/// Focus position inside a form: one of its fields or one of the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus<F> {
    Field(F),
    Submit,
    Cancel,
}

impl<F: Copy + PartialEq> FormFocus<F> {
    fn order(fields: &[F]) -> Vec<Self> {
        fields
            .iter()
            .map(|f| FormFocus::Field(*f))
            .chain([FormFocus::Submit, FormFocus::Cancel])
            .collect()
    }

    /// Next stop in tab order, wrapping after the cancel button
    pub fn next(self, fields: &[F]) -> Self {
        let order = Self::order(fields);
        let index = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(index + 1) % order.len()]
    }

    /// Previous stop in tab order, wrapping before the first field
    pub fn prev(self, fields: &[F]) -> Self {
        let order = Self::order(fields);
        let index = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(index + order.len() - 1) % order.len()]
    }

    pub fn field(&self) -> Option<F> {
        match self {
            FormFocus::Field(f) => Some(*f),
            _ => None,
        }
    }
}

/// How the focused input reacts to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text
    Text,
    /// Cycles through catalog options
    Select,
    /// Cycles options and also accepts typed text (custom scenario)
    SelectWithText,
    /// The nested parameter list
    Parameters,
    SubmitButton,
    CancelButton,
}

/// Text edit applied to the focused input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Clear,
}

impl TextEdit {
    pub fn apply(self, value: &mut String) {
        match self {
            TextEdit::Insert(c) => value.push(c),
            TextEdit::Backspace => {
                value.pop();
            }
            TextEdit::Clear => value.clear(),
        }
    }
}

/// Step through `options` from `current`.
///
/// A value that is not one of the options starts from the first (forward) or
/// last (backward) option. Returns `None` when there is nothing to choose.
pub fn cycle_option<'a>(options: &'a [String], current: &str, forward: bool) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[next].as_str())
}

/// Cut `text` to at most `max_chars` characters.
///
/// Returns the preview (with a trailing `...` when cut) and whether it was cut.
pub fn preview_text(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (format!("{}...", &text[..byte_index]), true),
        None => (text.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_focus_wraps_through_buttons() {
        let fields = [1u8, 2];
        let focus = FormFocus::Field(2u8);
        assert_eq!(focus.next(&fields), FormFocus::Submit);
        assert_eq!(FormFocus::Submit.next(&fields), FormFocus::Cancel);
        assert_eq!(FormFocus::<u8>::Cancel.next(&fields), FormFocus::Field(1));
        assert_eq!(FormFocus::Field(1u8).prev(&fields), FormFocus::Cancel);
    }

    #[test]
    fn test_cycle_option_from_unknown_value() {
        let options = opts(&["a", "b", "c"]);
        assert_eq!(cycle_option(&options, "", true), Some("a"));
        assert_eq!(cycle_option(&options, "", false), Some("c"));
        assert_eq!(cycle_option(&options, "c", true), Some("a"));
        assert_eq!(cycle_option(&options, "a", false), Some("c"));
        assert_eq!(cycle_option(&[], "a", true), None);
    }

    #[test]
    fn test_text_edit() {
        let mut value = "品牌".to_string();
        TextEdit::Backspace.apply(&mut value);
        assert_eq!(value, "品");
        TextEdit::Insert('x').apply(&mut value);
        assert_eq!(value, "品x");
        TextEdit::Clear.apply(&mut value);
        assert!(value.is_empty());
        TextEdit::Backspace.apply(&mut value);
        assert!(value.is_empty());
    }

    #[test]
    fn test_preview_text_counts_characters() {
        let text = "汽".repeat(201);
        let (preview, cut) = preview_text(&text, 200);
        assert!(cut);
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));

        let (preview, cut) = preview_text("short", 200);
        assert!(!cut);
        assert_eq!(preview, "short");

        let exact = "a".repeat(200);
        assert_eq!(preview_text(&exact, 200), (exact.clone(), false));
    }
}
