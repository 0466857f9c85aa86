//! Tool create/edit form

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use promptdesk_app::form::{FormFocus, ToolFormState};
use promptdesk_app::Catalog;
use promptdesk_core::{FieldName, ToolField};

use super::form_field::{self, FormLines};
use super::param_editor::ParamEditor;
use crate::theme::styles;

pub struct ToolForm<'a> {
    form: &'a ToolFormState,
    catalog: &'a Catalog,
}

impl<'a> ToolForm<'a> {
    pub fn new(form: &'a ToolFormState, catalog: &'a Catalog) -> Self {
        Self { form, catalog }
    }
}

fn placeholder(field: ToolField) -> &'static str {
    match field {
        ToolField::ToolName => "如：get_mention_count",
        ToolField::ToolType => "请选择工具类型",
        ToolField::IndustryAffiliation => "请选择行业",
        ToolField::ApplicationScenario => "如：市场分析",
        ToolField::ToolDesc => "描述工具的功能和用途",
        ToolField::Parameters => "",
    }
}

impl Widget for ToolForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.form;
        let block = styles::glass_block(true)
            .title(format!(" {} ", form.title()))
            .title_style(styles::accent_bold());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 3 {
            return;
        }
        let width = inner.width.saturating_sub(2) as usize;

        let mut body = FormLines::default();
        for field in ToolField::ALL {
            let focused = form.focus == FormFocus::Field(field);
            if focused {
                body.mark_focus();
            }

            if field == ToolField::Parameters {
                body.push(form_field::label_line(
                    &format!("{} ({})", field.label(), form.draft.tool_parameters.len()),
                    false,
                    focused,
                ));
                ParamEditor::new(&form.draft.tool_parameters, &form.params, focused)
                    .push_lines(&mut body, width);
                continue;
            }

            body.push(form_field::label_line(field.label(), true, focused));
            let value = form.draft.get(field);
            if ToolFormState::options(field, self.catalog).is_some() {
                body.push(form_field::select_input(value, placeholder(field), focused, true));
            } else {
                body.extend(form_field::text_input(value, placeholder(field), focused, width));
            }
            if let Some(message) = form.errors.get(field) {
                body.push(form_field::error_line(message));
            }
            body.push(Line::default());
        }

        let buttons = form_field::buttons_line(
            form.submit_label(),
            form.focus == FormFocus::Submit,
            form.focus == FormFocus::Cancel,
        );
        body.render(buttons, inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use promptdesk_core::seed_tools;

    #[test]
    fn test_create_form_shows_labels_and_buttons() {
        let form = ToolFormState::create();
        let catalog = Catalog::default();
        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(ToolForm::new(&form, &catalog), term.area());

        assert!(term.buffer_contains("添加新工具"));
        assert!(term.buffer_contains("工具名称 *"));
        assert!(term.buffer_contains("请选择工具类型"));
        assert!(term.buffer_contains("工具参数 (0)"));
        assert!(term.buffer_contains("暂无参数配置"));
        assert!(term.buffer_contains("[ 创建工具 ]"));
        assert!(term.buffer_contains("[ 取消 ]"));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let tool = seed_tools().remove(0);
        let form = ToolFormState::edit(&tool);
        let catalog = Catalog::default();
        let mut term = TestTerminal::with_size(100, 40);
        term.render_widget(ToolForm::new(&form, &catalog), term.area());

        assert!(term.buffer_contains("编辑工具"));
        assert!(term.buffer_contains("get_mention_count"));
        assert!(term.buffer_contains("1. brand [string]"));
        assert!(term.buffer_contains("3. datetimeType [string]"));
        assert!(term.buffer_contains("[ 保存修改 ]"));
    }

    #[test]
    fn test_failed_submit_shows_field_errors() {
        let mut form = ToolFormState::create();
        assert!(form.submit().is_none());
        let catalog = Catalog::default();
        let mut term = TestTerminal::with_size(80, 40);
        term.render_widget(ToolForm::new(&form, &catalog), term.area());

        assert!(term.buffer_contains("✗ 工具名称不能为空"));
        assert!(term.buffer_contains("✗ 工具描述不能为空"));
    }
}
