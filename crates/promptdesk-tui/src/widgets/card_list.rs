//! Scrolling list of multi-line cards with a selection gutter
//!
//! Both record lists share this: each card is a block of lines, the selected
//! card gets an accent bar in the left gutter, and the list scrolls so the
//! selected card stays on screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Columns taken by the selection gutter
pub const GUTTER_WIDTH: u16 = 2;

const SELECTED_BAR: &str = "▌ ";
const UNSELECTED_BAR: &str = "  ";

/// First visible line so that card `selected` is fully visible when it fits,
/// or at least starts on screen when it does not.
pub fn scroll_offset(card_heights: &[usize], selected: usize, viewport: usize) -> usize {
    let Some(&height) = card_heights.get(selected) else {
        return 0;
    };
    let start: usize = card_heights[..selected].iter().sum();
    let end = start + height;

    if end <= viewport {
        0
    } else if height > viewport {
        start
    } else {
        end - viewport
    }
}

/// Render `cards` into `area`, separated by a blank line.
pub fn render_cards(cards: Vec<Vec<Line<'static>>>, selected: usize, area: Rect, buf: &mut Buffer) {
    let mut heights = Vec::with_capacity(cards.len());
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (index, card) in cards.into_iter().enumerate() {
        let bar = if index == selected {
            Span::styled(SELECTED_BAR, styles::accent())
        } else {
            Span::raw(UNSELECTED_BAR)
        };
        let card_len = card.len() + 1;
        for line in card {
            let mut spans = vec![bar.clone()];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
        heights.push(card_len);
    }

    let offset = scroll_offset(&heights, selected, area.height as usize);
    Paragraph::new(lines)
        .scroll((offset.min(u16::MAX as usize) as u16, 0))
        .render(area, buf);
}

/// Centered two-line placeholder for an empty list
pub fn render_empty(title: &str, hint: &str, area: Rect, buf: &mut Buffer) {
    let top = area.height.saturating_sub(2) / 2;
    let lines = vec![
        Line::styled(title.to_string(), styles::text_secondary()),
        Line::styled(hint.to_string(), styles::text_muted()),
    ];
    let inner = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}
