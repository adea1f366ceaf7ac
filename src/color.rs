//! Accent color handling.
//!
//! An accent is either one of the eight user-facing color names, resolved
//! to a bold foreground escape, or a raw escape sequence taken from the
//! logo catalog. Styled spans are always closed with an explicit reset.

/// Escape sequence that clears any active styling.
pub const RESET: &str = "\x1b[0m";

/// The color names users may write in `accent_color` and inside custom
/// logo lines, paired with their escape sequences.
pub const NAMED_COLORS: [(&str, &str); 8] = [
    ("black", "\x1b[1;30m"),
    ("red", "\x1b[1;31m"),
    ("green", "\x1b[1;32m"),
    ("yellow", "\x1b[1;33m"),
    ("blue", "\x1b[1;34m"),
    ("purple", "\x1b[1;35m"),
    ("cyan", "\x1b[1;36m"),
    ("white", "\x1b[1;37m"),
];

/// An accent color, stored as the escape prefix written before styled text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Color {
    prefix: String,
}

impl Color {
    /// Resolve a color name, case-insensitively. Unknown names produce an
    /// unstyled color rather than an error.
    pub fn named(name: &str) -> Self {
        let needle = name.trim().to_lowercase();
        let prefix = NAMED_COLORS
            .iter()
            .find(|(known, _)| *known == needle)
            .map(|(_, escape)| (*escape).to_string())
            .unwrap_or_default();
        Self { prefix }
    }

    /// Wrap a raw escape sequence, e.g. a catalog accent.
    pub fn raw(escape: impl Into<String>) -> Self {
        Self {
            prefix: escape.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when the color carries no styling at all.
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Apply the color to `text`, terminated by an explicit reset.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve_case_insensitively() {
        assert_eq!(Color::named("red").prefix(), "\x1b[1;31m");
        assert_eq!(Color::named("RED").prefix(), "\x1b[1;31m");
        assert_eq!(Color::named("  Cyan ").prefix(), "\x1b[1;36m");
    }

    #[test]
    fn unknown_names_fall_back_to_no_styling() {
        let color = Color::named("chartreuse");
        assert!(color.is_plain());
        // The reset is still explicit even without a prefix.
        assert_eq!(color.paint("x"), "x\x1b[0m");
    }

    #[test]
    fn paint_wraps_text_with_reset() {
        assert_eq!(Color::named("green").paint("ok"), "\x1b[1;32mok\x1b[0m");
    }
}
