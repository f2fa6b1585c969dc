/// Buffer utilities for drawing borders, boxes, and lines
///
/// All functions work with both ASCII and Unicode box characters.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

use crate::formatting::BoxChars;

/// Draw a simple box border around an area
///
/// # Example
/// ```ignore
/// draw_box(buf, area, &config.box_chars, Style::default());
/// // Draws: ╭───╮
/// //        │   │
/// //        ╰───╯
/// ```
pub fn draw_box(buf: &mut Buffer, area: Rect, box_chars: &BoxChars, style: Style) {
    draw_titled_box(buf, area, "", box_chars, style);
}

/// Draw a box with a title in the top border
///
/// The title is cut at a character boundary when it does not fit.
///
/// # Example
/// ```ignore
/// draw_titled_box(buf, area, "Deaths", &config.box_chars, Style::default());
/// // Draws: ╭─Deaths───╮
/// //        │          │
/// //        ╰──────────╯
/// ```
pub fn draw_titled_box(buf: &mut Buffer, area: Rect, title: &str, box_chars: &BoxChars, style: Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let x = area.x;
    let y = area.y;
    let width = area.width;
    let height = area.height;

    // Corners
    buf.set_string(x, y, &box_chars.top_left, style);
    buf.set_string(x + width - 1, y, &box_chars.top_right, style);
    buf.set_string(x, y + height - 1, &box_chars.bottom_left, style);
    buf.set_string(x + width - 1, y + height - 1, &box_chars.bottom_right, style);

    let inner_width = width - 2;
    draw_horizontal_line(buf, x + 1, y, inner_width, box_chars, style);
    draw_horizontal_line(buf, x + 1, y + height - 1, inner_width, box_chars, style);

    // Title after one horizontal char
    if inner_width > 1 && !title.is_empty() {
        let max_width = (inner_width - 1) as usize;
        let mut shown = String::new();
        let mut used = 0;
        for c in title.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > max_width {
                break;
            }
            shown.push(c);
            used += w;
        }
        buf.set_string(x + 2, y, &shown, style);
    }

    for i in 1..height - 1 {
        buf.set_string(x, y + i, &box_chars.vertical, style);
        buf.set_string(x + width - 1, y + i, &box_chars.vertical, style);
    }
}

/// Draw a horizontal line
///
/// # Example
/// ```ignore
/// draw_horizontal_line(buf, 2, 10, 5, &box_chars, Style::default());
/// // Draws 5 characters starting at (2, 10): ─────
/// ```
pub fn draw_horizontal_line(buf: &mut Buffer, x: u16, y: u16, width: u16, box_chars: &BoxChars, style: Style) {
    for i in 0..width {
        buf.set_string(x + i, y, &box_chars.horizontal, style);
    }
}
