//! Test utilities for TUI rendering
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can render
//! into an in-memory buffer and search it as text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains `text` anywhere on a single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|(row, _)| row.contains(text))
    }

    /// Cell position where `text` first starts
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let area = self.buffer().area;
        for (y, (row, columns)) in self.rows().iter().enumerate() {
            if let Some(byte_index) = row.find(text) {
                let char_index = row[..byte_index].chars().count();
                return Some((columns[char_index], area.y + y as u16));
            }
        }
        None
    }

    /// Full buffer as newline-separated rows
    pub fn content(&self) -> String {
        self.rows()
            .into_iter()
            .map(|(row, _)| row)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Each row as text, plus the x column of every char in it.
    ///
    /// A wide symbol covers the cell after it; that trailing cell is skipped
    /// so CJK text reads back as written.
    fn rows(&self) -> Vec<(String, Vec<u16>)> {
        let buffer = self.buffer();
        let area = buffer.area;
        let mut rows = Vec::with_capacity(area.height as usize);

        for y in area.top()..area.bottom() {
            let mut row = String::new();
            let mut columns = Vec::new();
            let mut x = area.left();
            while x < area.right() {
                let symbol = buffer[(x, y)].symbol();
                for _ in symbol.chars() {
                    columns.push(x);
                }
                row.push_str(symbol);
                x += UnicodeWidthStr::width(symbol).max(1) as u16;
            }
            rows.push((row, columns));
        }
        rows
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
