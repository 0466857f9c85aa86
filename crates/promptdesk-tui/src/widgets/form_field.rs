//! Building blocks shared by the record forms
//!
//! Forms are rendered as a column of lines (label, input, optional error)
//! collected in [`FormLines`], which scrolls to keep the focused input in
//! view. The button row is pinned below the scrolling part.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::text::wrap_text;
use crate::theme::styles;

const INDENT: &str = "  ";
const CURSOR: &str = "▏";
/// Lines kept visible below the focused label (label, input, error)
const FOCUS_CONTEXT: usize = 3;

pub fn label_line(label: &str, required: bool, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    let mut spans = vec![Span::styled(label.to_string(), style)];
    if required {
        spans.push(Span::styled(" *", styles::status_red()));
    }
    Line::from(spans)
}

/// Free-text input, wrapped to `width` columns.
pub fn text_input(value: &str, placeholder: &str, focused: bool, width: usize) -> Vec<Line<'static>> {
    if value.is_empty() {
        let mut spans = vec![Span::raw(INDENT)];
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
        spans.push(Span::styled(placeholder.to_string(), styles::placeholder()));
        return vec![Line::from(spans)];
    }

    let usable = width.saturating_sub(INDENT.len() + 1).max(1);
    let rows = wrap_text(value, usable);
    let last = rows.len().saturating_sub(1);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(INDENT), Span::styled(row, styles::input(focused))];
            if focused && i == last {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            Line::from(spans)
        })
        .collect()
}

/// Select input showing the current value between arrows while focused.
pub fn select_input(value: &str, placeholder: &str, focused: bool, enabled: bool) -> Line<'static> {
    if !enabled {
        return Line::from(vec![
            Span::raw(INDENT),
            Span::styled(placeholder.to_string(), styles::text_muted()),
        ]);
    }

    let shown = if value.trim().is_empty() {
        Span::styled(placeholder.to_string(), styles::placeholder())
    } else {
        Span::styled(value.to_string(), styles::input(focused))
    };

    if focused {
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled("‹ ", styles::accent()),
            shown,
            Span::styled(" ›", styles::accent()),
        ])
    } else {
        Line::from(vec![Span::raw(INDENT), shown])
    }
}

pub fn error_line(message: &str) -> Line<'static> {
    Line::styled(format!("{INDENT}✗ {message}"), styles::status_red())
}

/// Key hint row: pairs of (key, description)
pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(INDENT)];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), styles::keybinding()));
        spans.push(Span::styled(format!(" {desc}"), styles::text_muted()));
    }
    Line::from(spans)
}

pub fn buttons_line(submit_label: &str, submit_focused: bool, cancel_focused: bool) -> Line<'static> {
    let submit_style = if submit_focused {
        styles::focused_selected()
    } else {
        styles::accent()
    };
    let cancel_style = if cancel_focused {
        styles::focused_selected()
    } else {
        styles::text_secondary()
    };
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("[ {submit_label} ]"), submit_style),
        Span::raw("  "),
        Span::styled("[ 取消 ]", cancel_style),
    ])
}

/// Scrollable form body with a remembered focus row
#[derive(Debug, Default)]
pub struct FormLines {
    lines: Vec<Line<'static>>,
    focus_row: Option<usize>,
}

impl FormLines {
    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    /// Mark the next pushed line as the focused one
    pub fn mark_focus(&mut self) {
        self.focus_row = Some(self.lines.len());
    }

    #[cfg(test)]
    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }

    fn scroll_offset(&self, viewport: usize) -> usize {
        match self.focus_row {
            Some(row) if row + FOCUS_CONTEXT > viewport => row + FOCUS_CONTEXT - viewport,
            _ => 0,
        }
    }

    /// Render the body above a pinned `buttons` row.
    pub fn render(self, buttons: Line<'static>, area: Rect, buf: &mut Buffer) {
        let [body_area, _, buttons_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let offset = self.scroll_offset(body_area.height as usize);
        Paragraph::new(self.lines)
            .scroll((offset.min(u16::MAX as usize) as u16, 0))
            .render(body_area, buf);
        buttons.render(buttons_area, buf);
    }
}
