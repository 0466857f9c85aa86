//! Industry scenario prompt card list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use promptdesk_app::form::preview_text;
use promptdesk_core::PromptRecord;

use super::card_list::{self, GUTTER_WIDTH};
use super::text::wrap_text;
use crate::theme::styles;

pub struct PromptList<'a> {
    prompts: &'a [PromptRecord],
    selected: usize,
    preview_chars: usize,
}

impl<'a> PromptList<'a> {
    pub fn new(prompts: &'a [PromptRecord], selected: usize, preview_chars: usize) -> Self {
        Self {
            prompts,
            selected,
            preview_chars,
        }
    }

    fn card(&self, prompt: &PromptRecord, selected: bool, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(prompt.industry.clone(), styles::accent_bold()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(prompt.scenario.clone(), styles::title()),
        ])];

        let (preview, truncated) = preview_text(&prompt.bg_klg_prompt, self.preview_chars);
        for row in wrap_text(&preview, width) {
            lines.push(Line::styled(row, styles::text_secondary()));
        }

        if truncated {
            let style = if selected {
                styles::keybinding()
            } else {
                styles::text_muted()
            };
            lines.push(Line::styled("[v] 查看完整内容 →", style));
        }
        lines
    }
}

impl Widget for PromptList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(format!(" Prompt 列表 ({}) ", self.prompts.len()))
            .title_style(styles::title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width <= GUTTER_WIDTH || inner.height == 0 {
            return;
        }

        if self.prompts.is_empty() {
            card_list::render_empty("暂无 Prompt 配置", "按 a 添加新 Prompt 配置", inner, buf);
            return;
        }

        let width = (inner.width - GUTTER_WIDTH) as usize;
        let cards = self
            .prompts
            .iter()
            .enumerate()
            .map(|(i, p)| self.card(p, i == self.selected, width))
            .collect();
        card_list::render_cards(cards, self.selected, inner, buf);
    }
}
