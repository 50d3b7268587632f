//! Display sanitization for cache entries
//!
//! The cache is written by another program and may hold any bytes a filename
//! can hold, including ANSI escape sequences. Entries are shown in the menu
//! one per row, so escape sequences are dropped and every other control
//! character (newlines and tabs included) is shown as `?`.

use std::borrow::Cow;

/// Make a string safe to draw on a single terminal row
///
/// Borrows when there is nothing to clean, which is the common case.
///
/// # Examples
///
/// ```
/// use lcd::utils::terminal::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("/opt/\x1b[31mred"), "/opt/red");
/// assert_eq!(sanitize_for_display("/tmp/two\nlines"), "/tmp/two?lines");
/// ```
pub fn sanitize_for_display(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ params final-letter
            if chars.peek() == Some(&'[') {
                chars.next();
                for next_ch in chars.by_ref() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch.is_control() {
            result.push('?');
        } else {
            result.push(ch);
        }
    }

    Cow::Owned(result)
}
