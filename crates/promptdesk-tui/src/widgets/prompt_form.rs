//! Industry scenario prompt create/edit form

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use promptdesk_app::form::{FormFocus, PromptFormState, CUSTOM_SCENARIO_LABEL};
use promptdesk_core::{FieldName, PromptField};

use super::form_field::{self, FormLines};
use crate::theme::styles;

pub struct PromptForm<'a> {
    form: &'a PromptFormState,
}

impl<'a> PromptForm<'a> {
    pub fn new(form: &'a PromptFormState) -> Self {
        Self { form }
    }

    fn push_scenario(&self, body: &mut FormLines, focused: bool, width: usize) {
        let form = self.form;
        if !form.scenario_enabled() {
            body.push(form_field::select_input("", "请先选择行业", focused, false));
        } else if form.custom_scenario {
            body.push(form_field::select_input(CUSTOM_SCENARIO_LABEL, "", focused, true));
            body.push(form_field::label_line("  自定义场景名称", false, focused));
            body.extend(form_field::text_input(
                &form.draft.scenario,
                "输入场景名称",
                focused,
                width,
            ));
        } else {
            body.push(form_field::select_input(
                &form.draft.scenario,
                "请选择场景",
                focused,
                true,
            ));
        }
    }
}

impl Widget for PromptForm<'_> {
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
        for field in PromptField::ALL {
            let focused = form.focus == FormFocus::Field(field);
            if focused {
                body.mark_focus();
            }
            body.push(form_field::label_line(field.label(), true, focused));

            match field {
                PromptField::Industry => body.push(form_field::select_input(
                    &form.draft.industry,
                    "请选择行业",
                    focused,
                    true,
                )),
                PromptField::Scenario => self.push_scenario(&mut body, focused, width),
                PromptField::BgKlgPrompt => body.extend(form_field::text_input(
                    &form.draft.bg_klg_prompt,
                    "选择行业和场景后，若有模板将自动填充",
                    focused,
                    width,
                )),
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
    use promptdesk_app::Catalog;

    fn render(form: &PromptFormState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 30);
        term.render_widget(PromptForm::new(form), term.area());
        term
    }

    #[test]
    fn test_scenario_disabled_until_industry_chosen() {
        let term = render(&PromptFormState::create());

        assert!(term.buffer_contains("添加新 Prompt 配置"));
        assert!(term.buffer_contains("请选择行业"));
        assert!(term.buffer_contains("请先选择行业"));
        assert!(term.buffer_contains("[ 创建配置 ]"));
    }

    #[test]
    fn test_selected_scenario_and_template_shown() {
        let catalog = Catalog::default();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");
        form.select_scenario("质量把控", &catalog);

        let term = render(&form);
        assert!(term.buffer_contains("汽车行业"));
        assert!(term.buffer_contains("质量把控"));
        assert!(!term.buffer_contains("请先选择行业"));
    }

    #[test]
    fn test_custom_scenario_shows_name_input() {
        let mut form = PromptFormState::create();
        form.set_industry("金融行业");
        form.choose_custom();

        let term = render(&form);
        assert!(term.buffer_contains("自定义场景..."));
        assert!(term.buffer_contains("自定义场景名称"));
        assert!(term.buffer_contains("输入场景名称"));
    }

    #[test]
    fn test_failed_submit_shows_errors() {
        let mut form = PromptFormState::create();
        assert!(form.submit().is_none());

        let term = render(&form);
        assert!(term.buffer_contains("✗ 行业不能为空"));
        assert!(term.buffer_contains("✗ 背景知识 Prompt 不能为空"));
    }
}
