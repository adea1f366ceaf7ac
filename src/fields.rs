//! Information field catalog.
//!
//! Field names come from the user's `enabled_fields` list; lookup never
//! fails. Unrecognized names become [`FieldKind::Unknown`] and render a
//! visible placeholder so a typo shows up in the output instead of
//! silently vanishing.

use crate::config::Messages;

/// Placeholder value rendered for field names we do not recognize.
pub const UNKNOWN_FIELD_PLACEHOLDER: &str = "Not implemented yet (maybe?)";

/// Every kind of information line the renderer knows how to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Os,
    Kernel,
    Uptime,
    Packages,
    Desktop,
    Wm,
    Resolution,
    Shell,
    Terminal,
    Cpu,
    Memory,
    /// Two rows of terminal color swatches.
    Colors,
    /// The `username@hostname` title line.
    User,
    /// A rule sized to the title line.
    Separator,
    /// A spacer line (an empty string in `enabled_fields`).
    Blank,
    /// Anything unrecognized; keeps the configured name for display.
    Unknown(String),
}

impl FieldKind {
    /// Parse a configured field name, case-insensitively.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" => FieldKind::Blank,
            "os" => FieldKind::Os,
            "kernel" => FieldKind::Kernel,
            "uptime" => FieldKind::Uptime,
            "packages" => FieldKind::Packages,
            "de" => FieldKind::Desktop,
            "wm" => FieldKind::Wm,
            "resolution" => FieldKind::Resolution,
            "shell" => FieldKind::Shell,
            "terminal" => FieldKind::Terminal,
            "cpu" => FieldKind::Cpu,
            "memory" => FieldKind::Memory,
            "colors" => FieldKind::Colors,
            "user" => FieldKind::User,
            "separator" => FieldKind::Separator,
            _ => FieldKind::Unknown(name.trim().to_string()),
        }
    }

    /// True for kinds whose value comes from a system collector.
    pub fn is_collected(&self) -> bool {
        !matches!(
            self,
            FieldKind::Colors | FieldKind::Separator | FieldKind::Blank | FieldKind::Unknown(_)
        )
    }
}

/// A field picked from `enabled_fields`, paired with its display label.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub label: String,
}

/// Look up a configured field name.
pub fn lookup(name: &str, messages: &Messages) -> FieldSpec {
    let kind = FieldKind::parse(name);
    let label = match &kind {
        FieldKind::Unknown(raw) => raw.clone(),
        kind => messages.label(kind).unwrap_or_default().to_string(),
    };
    FieldSpec { kind, label }
}
