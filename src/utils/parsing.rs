//! String parsing and width utilities

use unicode_width::UnicodeWidthStr;

/// Remove ANSI CSI escape sequences, keeping only printable text.
pub fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequences run from ESC [ to a final byte in '@'..='~'
            if chars.next() == Some('[') {
                for follow in chars.by_ref() {
                    if ('@'..='~').contains(&follow) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Visible terminal columns of a string, ignoring embedded escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_escapes(s).as_str())
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format an uptime in seconds as `N weeks, N days, N hours, N mins`.
///
/// Hours always render so very short uptimes still show something; the
/// other units appear only when non-zero.
pub fn format_uptime(mut seconds: u64) -> String {
    const UNITS: [(&str, u64); 4] = [
        ("week", 60 * 60 * 24 * 7),
        ("day", 60 * 60 * 24),
        ("hour", 60 * 60),
        ("min", 60),
    ];

    let mut parts = Vec::new();
    for (i, (name, span)) in UNITS.iter().enumerate() {
        let n = seconds / span;
        if n > 0 || i == 2 {
            parts.push(format!("{} {}{}", n, name, if n == 1 { "" } else { "s" }));
        }
        seconds %= span;
    }
    parts.join(", ")
}
