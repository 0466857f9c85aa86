//! Delete confirmation modal

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use promptdesk_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use super::text::wrap_text;
use crate::theme::styles;

const MAX_WIDTH: u16 = 56;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
        // borders plus one column of padding on each side
        let text_width = width.saturating_sub(4) as usize;
        let message = wrap_text(&self.state.message, text_width);
        // message, blank, buttons, borders
        let height = message.len() as u16 + 4;

        let modal = modal_overlay::centered_rect(width, height, area);
        modal_overlay::render_shadow(buf, modal);
        Clear.render(modal, buf);

        let block = styles::modal_block(&self.state.title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let mut lines: Vec<Line> = message
            .into_iter()
            .map(|row| Line::styled(format!(" {row}"), styles::text_primary()))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled("[y]", styles::keybinding()),
            Span::styled(format!(" {}", self.state.confirm_label), styles::status_red()),
            Span::raw("   "),
            Span::styled("[n]", styles::keybinding()),
            Span::styled(format!(" {}", self.state.cancel_label), styles::text_secondary()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use promptdesk_core::{seed_prompts, seed_tools, Parameter};

    #[test]
    fn test_delete_tool_dialog() {
        let tool = seed_tools().remove(0);
        let state = ConfirmDialogState::delete_tool(&tool);
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("确认删除工具"));
        assert!(term.buffer_contains("get_mention_count"));
        assert!(term.buffer_contains("[y] 确认删除"));
        assert!(term.buffer_contains("[n] 取消"));
    }

    #[test]
    fn test_delete_prompt_dialog_wraps_message() {
        let prompt = seed_prompts().remove(0);
        let state = ConfirmDialogState::delete_prompt(&prompt);
        let mut term = TestTerminal::with_size(40, 20);
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("确认删除 Prompt 配置"));
        assert!(term.buffer_contains("汽车行业 - 质量把控"));
        assert!(term.buffer_contains("[y] 确认删除"));
    }

    #[test]
    fn test_delete_parameter_dialog_label() {
        let param = Parameter::new("brand", "string", "品牌");
        let state = ConfirmDialogState::delete_parameter(0, &param);
        let mut term = TestTerminal::new();
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("确认删除参数"));
        assert!(term.buffer_contains("[y] 删除"));
    }
}
