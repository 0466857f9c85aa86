//! Screen layout

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: bordered title line plus tab bar
pub const HEADER_HEIGHT: u16 = 3;

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Footer rows: status line, plus a key hint line when hints are shown
pub fn footer_height(show_key_hints: bool) -> u16 {
    if show_key_hints {
        2
    } else {
        1
    }
}

/// Split the frame into header, body and footer
pub fn create(area: Rect, show_key_hints: bool) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(footer_height(show_key_hints)),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let areas = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.footer.height, 2);
        assert_eq!(areas.body.height, 24 - HEADER_HEIGHT - 2);
        assert_eq!(areas.footer.bottom(), 24);
    }

    #[test]
    fn test_footer_shrinks_without_hints() {
        let areas = create(Rect::new(0, 0, 80, 24), false);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.body.height, 24 - HEADER_HEIGHT - 1);
    }
}
