//! ANSI-aware text measurement, truncation and padding for the text preview.

use console::{measure_text_width, pad_str, Alignment};

/// Display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use gridtable::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncate from the end to fit `max_width`, appending `ellipsis` when cut.
///
/// ```rust
/// use gridtable::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_display_width(ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Pad on the right to reach `width`. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Truncate and pad so the result is exactly `width` columns wide.
pub fn fit(s: &str, width: usize, ellipsis: &str) -> String {
    pad_right(&truncate_end(s, width, ellipsis), width)
}

/// Keep characters from the start while they fit, passing escapes through.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }

        if in_escape {
            result.push(c);
            // CSI sequences end with a letter or '~'
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
