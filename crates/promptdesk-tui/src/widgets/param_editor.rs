//! Parameter list and editing slot inside the tool form

use ratatui::text::{Line, Span};

use promptdesk_app::param_editor::{ParamEditorState, ParamSlot, SlotTarget};
use promptdesk_core::{FieldName, ParamField, Parameter};

use super::form_field::{self, FormLines};
use super::text::truncate_to_width;
use crate::theme::styles;

pub struct ParamEditor<'a> {
    params: &'a [Parameter],
    editor: &'a ParamEditorState,
    /// The tool form's focus is on the parameter block
    focused: bool,
}

impl<'a> ParamEditor<'a> {
    pub fn new(params: &'a [Parameter], editor: &'a ParamEditorState, focused: bool) -> Self {
        Self {
            params,
            editor,
            focused,
        }
    }

    /// Append the parameter rows, and the open slot if any, to `body`.
    pub fn push_lines(&self, body: &mut FormLines, width: usize) {
        if self.params.is_empty() {
            body.push(Line::styled("  暂无参数配置", styles::text_muted()));
        }

        let row_width = width.saturating_sub(4);
        for (index, param) in self.params.iter().enumerate() {
            body.push(self.param_row(index, param, row_width));
        }

        match &self.editor.slot {
            Some(slot) => self.push_slot(slot, body, width),
            None if self.focused => body.push(form_field::hint_line(&[
                ("a", "添加参数"),
                ("e", "编辑"),
                ("d", "删除"),
                ("j/k", "选择"),
            ])),
            None => {}
        }
    }

    fn param_row(&self, index: usize, param: &Parameter, width: usize) -> Line<'static> {
        let under_edit = matches!(
            self.editor.slot.as_ref().map(|s| s.target),
            Some(SlotTarget::Replace(i)) if i == index
        );
        let cursor = self.focused && self.editor.slot.is_none() && index == self.editor.selected;

        let marker = if cursor {
            Span::styled("▸ ", styles::accent())
        } else {
            Span::raw("  ")
        };
        let row = format!(
            "{}. {} [{}] {}",
            index + 1,
            param.name,
            param.param_type,
            param.description
        );
        let style = if cursor {
            styles::text_primary()
        } else {
            styles::text_secondary()
        };

        let mut spans = vec![marker, Span::styled(truncate_to_width(&row, width), style)];
        if under_edit {
            spans.push(Span::styled(" (编辑中)", styles::status_yellow()));
        }
        Line::from(spans)
    }

    fn push_slot(&self, slot: &ParamSlot, body: &mut FormLines, width: usize) {
        body.push(Line::default());
        body.push(Line::styled(format!("  {}", slot.title()), styles::accent_bold()));

        for field in ParamField::ALL {
            let focused = slot.focus == field;
            if focused {
                body.mark_focus();
            }
            body.push(form_field::label_line(field.label(), true, focused));

            let value = slot.entry.get(field);
            match field {
                ParamField::Type => {
                    body.push(form_field::select_input(value, "请选择参数类型", focused, true))
                }
                ParamField::Name => {
                    body.extend(form_field::text_input(value, "如：brand", focused, width))
                }
                ParamField::Description => {
                    body.extend(form_field::text_input(value, "参数用途说明", focused, width))
                }
            }

            if let Some(message) = slot.errors.get(field) {
                body.push(form_field::error_line(message));
            }
        }

        body.push(form_field::hint_line(&[
            ("Enter", slot.save_label()),
            ("Esc", "取消"),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(editor: &ParamEditor) -> Vec<String> {
        let mut body = FormLines::default();
        editor.push_lines(&mut body, 60);
        body.into_lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn params() -> Vec<Parameter> {
        vec![
            Parameter::new("brand", "string", "品牌名称"),
            Parameter::new("limit", "number", "返回条数"),
        ]
    }

    #[test]
    fn test_empty_parameter_list() {
        let state = ParamEditorState::new();
        let lines = render_text(&ParamEditor::new(&[], &state, false));
        assert_eq!(lines, vec!["  暂无参数配置"]);
    }

    #[test]
    fn test_rows_in_order_with_cursor_when_focused() {
        let params = params();
        let mut state = ParamEditorState::new();
        state.select_next(params.len());

        let lines = render_text(&ParamEditor::new(&params, &state, true));
        assert_eq!(lines[0], "  1. brand [string] 品牌名称");
        assert_eq!(lines[1], "▸ 2. limit [number] 返回条数");
        assert!(lines[2].contains("添加参数"));
    }

    #[test]
    fn test_open_slot_renders_inputs_and_errors() {
        let params = params();
        let mut state = ParamEditorState::new();
        assert!(state.begin_edit(&params, 0));

        let lines = render_text(&ParamEditor::new(&params, &state, true));
        assert!(lines[0].ends_with("(编辑中)"));
        assert!(lines.iter().any(|l| l == "  编辑参数"));
        assert!(lines.iter().any(|l| l.contains("参数名称 *")));
        assert!(lines.iter().any(|l| l.contains("Enter 保存修改")));

        let mut state = ParamEditorState::new();
        assert!(state.begin_add());
        assert!(state.save(&params).is_none());
        let lines = render_text(&ParamEditor::new(&params, &state, true));
        assert!(lines.iter().any(|l| l.contains("✗ 参数名称不能为空")));
        assert!(lines.iter().any(|l| l == "  添加新参数"));
    }
}
