//! Display-width aware text helpers
//!
//! Record fields are mostly CJK, which occupy two terminal columns per
//! character. Everything here measures in columns, not chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `text`
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Cut `text` to fit in `max_width` columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        // reserve one column for the ellipsis
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Hard-wrap `text` into lines of at most `width` columns.
///
/// Embedded newlines start a new line. An empty input yields one empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for c in paragraph.chars() {
            let w = char_width(c);
            if used + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(c);
            used += w;
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_cjk_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("汽车行业"), 8);
        assert_eq!(display_width("行业&场景"), 9);
    }

    #[test]
    fn test_truncate_fits_unchanged() {
        assert_eq!(truncate_to_width("brand", 10), "brand");
        assert_eq!(truncate_to_width("汽车", 4), "汽车");
    }

    #[test]
    fn test_truncate_never_splits_wide_char() {
        let cut = truncate_to_width("汽车行业", 6);
        assert_eq!(cut, "汽车…");
        assert!(display_width(&cut) <= 6);
    }

    #[test]
    fn test_wrap_by_columns() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("汽车行业", 5), vec!["汽车", "行业"]);
    }

    #[test]
    fn test_wrap_keeps_newlines_and_empty_input() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert!(wrap_text("abc", 0).is_empty());
    }
}
