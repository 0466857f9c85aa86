//! Helpers for drawing a modal above the main screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Mute every cell in `area` so the modal stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// One-cell drop shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::SHADOW);
    let bounds = buf.area;

    let right = modal.right();
    if right < bounds.right() {
        for y in (modal.top() + 1)..=modal.bottom().min(bounds.bottom().saturating_sub(1)) {
            if let Some(cell) = buf.cell_mut((right, y)) {
                cell.set_style(shadow);
            }
        }
    }

    let bottom = modal.bottom();
    if bottom < bounds.bottom() {
        for x in (modal.left() + 1)..=right.min(bounds.right().saturating_sub(1)) {
            if let Some(cell) = buf.cell_mut((x, bottom)) {
                cell.set_style(shadow);
            }
        }
    }
}
