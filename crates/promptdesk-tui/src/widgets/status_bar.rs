//! Footer: status message line and context key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use promptdesk_app::form::InputKind;
use promptdesk_app::{AppState, EntityTab, UiMode};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Key hints for the current input context
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let state = self.state;
        match state.ui_mode() {
            UiMode::ConfirmDialog => vec![("y", "确认"), ("n/Esc", "取消")],
            UiMode::ParamSlot => vec![
                ("Enter", "保存参数"),
                ("Tab", "下一项"),
                ("←/→", "参数类型"),
                ("Esc", "取消"),
            ],
            UiMode::List => {
                let mut hints = vec![("a", "添加"), ("e", "编辑"), ("d", "删除")];
                if state.active_tab == EntityTab::Prompts {
                    hints.push(("v", "查看完整"));
                }
                hints.extend([("j/k", "移动"), ("Tab", "切换"), ("q", "退出")]);
                hints
            }
            UiMode::Form => {
                let mut hints = match state.focused_input() {
                    Some(InputKind::Select) => vec![("←/→", "选择")],
                    Some(InputKind::SelectWithText) => vec![("←/→", "选择"), ("输入", "场景名称")],
                    Some(InputKind::Parameters) => {
                        vec![("a", "添加参数"), ("e", "编辑"), ("d", "删除")]
                    }
                    Some(InputKind::SubmitButton | InputKind::CancelButton) => {
                        vec![("Enter", "确认")]
                    }
                    Some(InputKind::Text) | None => vec![("Ctrl+U", "清空")],
                };
                hints.extend([("Tab", "下一项"), ("Ctrl+S", "提交"), ("Esc", "取消")]);
                hints
            }
        }
    }

    fn status_line(&self) -> Line<'static> {
        match &self.state.status {
            Some(status) => Line::styled(
                format!(" {}", status.text),
                styles::status_message(status.level),
            ),
            None => Line::from(vec![
                Span::styled(
                    format!(" 工具 {}", self.state.tools.store.len()),
                    styles::text_muted(),
                ),
                Span::styled(
                    format!(" · Prompt {}", self.state.prompts.store.len()),
                    styles::text_muted(),
                ),
            ]),
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, desc) in self.hints() {
            spans.push(Span::styled(format!(" {key}"), styles::keybinding()));
            spans.push(Span::styled(format!(" {desc} "), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.status_line()];
        if self.state.settings.ui.show_key_hints {
            lines.push(self.hint_line());
        }
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}
