//! Small rendering helpers shared across views.

use ratatui::layout::Rect;
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

/// Shrink `area` by `margin` on every side.
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y.saturating_add(margin),
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Truncate a string to approximately max_len bytes, adding "..." if truncated.
/// Safely handles UTF-8 by finding the nearest char boundary.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let end = find_char_boundary(s, target);
        format!("{}...", &s[..end])
    }
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
pub fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Rows `lines` take once wrapped to `viewport_width` columns.
///
/// An estimate: word wrapping may need a few more rows than this.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            if width == 0 {
                1
            } else {
                width.div_ceil(viewport_width)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer string", 8), "a lon...");
        assert_eq!(truncate_string("héllo wörld", 6), "hé...");
    }

    #[test]
    fn test_inner_rect() {
        let inner = inner_rect(Rect::new(0, 0, 10, 5), 1);
        assert_eq!(inner, Rect::new(1, 1, 8, 3));
        assert_eq!(inner_rect(Rect::new(0, 0, 1, 1), 1).width, 0);
    }

    #[test]
    fn test_estimate_wrapped_line_count() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        assert_eq!(estimate_wrapped_line_count(&lines, 4), 3 + 1 + 1);
        assert_eq!(estimate_wrapped_line_count(&lines, 0), 3);
    }
}
