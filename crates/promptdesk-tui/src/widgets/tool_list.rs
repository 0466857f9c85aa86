//! Tool card list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use promptdesk_core::ToolRecord;

use super::card_list::{self, GUTTER_WIDTH};
use super::text::wrap_text;
use crate::theme::styles;

pub struct ToolList<'a> {
    tools: &'a [ToolRecord],
    selected: usize,
}

impl<'a> ToolList<'a> {
    pub fn new(tools: &'a [ToolRecord], selected: usize) -> Self {
        Self { tools, selected }
    }
}

/// Lines of one tool card, `width` columns wide
fn card(tool: &ToolRecord, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(tool.tool_name.clone(), styles::title()),
        Span::raw("  "),
        Span::styled(format!("[{}]", tool.tool_type), styles::accent()),
    ])];

    lines.push(Line::from(vec![
        Span::styled("行业归属 ", styles::text_muted()),
        Span::styled(tool.industry_affiliation.clone(), styles::text_secondary()),
        Span::styled("  应用场景 ", styles::text_muted()),
        Span::styled(tool.application_scenario.clone(), styles::text_secondary()),
    ]));

    for row in wrap_text(&tool.tool_desc, width) {
        lines.push(Line::styled(row, styles::text_primary()));
    }

    if !tool.tool_parameters.is_empty() {
        lines.push(Line::styled(
            format!("参数列表 ({})", tool.tool_parameters.len()),
            styles::text_muted(),
        ));
    }
    for param in &tool.tool_parameters {
        let row = format!("• {} ({}) {}", param.name, param.param_type, param.description);
        for part in wrap_text(&row, width.saturating_sub(2).max(1)) {
            lines.push(Line::styled(format!("  {part}"), styles::text_secondary()));
        }
    }
    lines
}

impl Widget for ToolList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(format!(" 工具列表 ({}) ", self.tools.len()))
            .title_style(styles::title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width <= GUTTER_WIDTH || inner.height == 0 {
            return;
        }

        if self.tools.is_empty() {
            card_list::render_empty("暂无工具配置", "按 a 添加新工具", inner, buf);
            return;
        }

        let width = (inner.width - GUTTER_WIDTH) as usize;
        let cards = self.tools.iter().map(|tool| card(tool, width)).collect();
        card_list::render_cards(cards, self.selected, inner, buf);
    }
}
