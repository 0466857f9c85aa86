//! Header bar with the app title and the entity tabs

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use promptdesk_app::EntityTab;

use crate::theme::styles;

const APP_TITLE: &str = "PromptDesk";

/// Bordered header showing the title and the tab bar
pub struct AppHeader {
    active: EntityTab,
}

impl AppHeader {
    pub fn new(active: EntityTab) -> Self {
        Self { active }
    }
}

impl Widget for AppHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(APP_TITLE.len() as u16 + 3), Constraint::Min(0)])
                .areas(inner);

        Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
        ])
        .render(title_area, buf);

        let titles = EntityTab::ALL
            .iter()
            .map(|tab| Line::from(tab.title()))
            .collect::<Vec<_>>();

        Tabs::new(titles)
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::border_inactive()))
            .render(tabs_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_both_tabs() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(AppHeader::new(EntityTab::Tools), term.area());

        assert!(term.buffer_contains("PromptDesk"));
        assert!(term.buffer_contains("工具配置 (Tools)"));
        assert!(term.buffer_contains("行业&场景 Prompt"));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(AppHeader::new(EntityTab::Prompts), term.area());

        let (x, y) = term
            .find_text("行业&场景")
            .expect("prompt tab rendered");
        assert_eq!(term.buffer()[(x, y)].bg, styles::focused_selected().bg.unwrap());

        let (x, y) = term.find_text("工具配置").expect("tool tab rendered");
        assert_ne!(term.buffer()[(x, y)].bg, styles::focused_selected().bg.unwrap());
    }
}
