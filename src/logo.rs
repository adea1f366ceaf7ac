//! Distribution logo model, builtin catalog, and selection precedence.
//!
//! A logo is chosen once per run: the detected distribution picks a
//! builtin entry, `ascii_distro` forces one, and a user-supplied logo
//! (a file via `ascii_path` or inline `custom_ascii_logo` lines) replaces
//! the art entirely. A configured `accent_color` replaces the catalog
//! accent at every level.

use crate::color::{Color, NAMED_COLORS, RESET};
use crate::config::DisplayConfig;
use crate::utils::parsing::visible_width;
use std::fs;

/// One line of logo art with its escape-free display width.
#[derive(Debug, Clone)]
pub struct LogoLine {
    raw: String,
    visible_width: usize,
}

impl LogoLine {
    fn new(raw: String) -> Self {
        let visible_width = visible_width(&raw);
        Self { raw, visible_width }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn visible_width(&self) -> usize {
        self.visible_width
    }
}

/// An immutable block of logo art.
#[derive(Debug, Clone, Default)]
pub struct Logo {
    lines: Vec<LogoLine>,
    width: usize,
}

impl Logo {
    fn from_lines(lines: Vec<LogoLine>) -> Self {
        let width = lines.iter().map(LogoLine::visible_width).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Build from a builtin catalog entry, coloring every line with the
    /// active accent.
    pub fn from_builtin(art: &str, accent: &Color) -> Self {
        let lines = art
            .lines()
            .map(|line| LogoLine::new(format!("{}{}", accent.prefix(), line)))
            .collect();
        Self::from_lines(lines)
    }

    /// Build from user-supplied lines. With an accent override every line
    /// is colored uniformly; otherwise literal color names embedded in the
    /// art are swapped for their escape sequences. Zero lines produce an
    /// empty logo, which renders as if the logo were disabled.
    pub fn from_custom(input: &[String], accent_override: Option<&Color>) -> Self {
        let lines = input
            .iter()
            .map(|line| {
                let raw = match accent_override {
                    Some(color) => format!("{}{}", color.prefix(), line),
                    None => substitute_color_tokens(line),
                };
                LogoLine::new(raw)
            })
            .collect();
        Self::from_lines(lines)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Visible width of the widest line; catalog art is rectangular so
    /// this matches every line.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&LogoLine> {
        self.lines.get(index)
    }
}

/// Replace literal color names (`red`, `cyan`, ...) with their escape
/// sequences. A line that received at least one substitution gains a
/// trailing reset so the color does not bleed into the info column.
pub fn substitute_color_tokens(line: &str) -> String {
    let mut out = line.to_string();
    let mut substituted = false;
    for (name, escape) in NAMED_COLORS {
        if out.contains(name) {
            out = out.replace(name, escape);
            substituted = true;
        }
    }
    if substituted {
        out.push_str(RESET);
    }
    out
}

const LINUX_ART: &str = include_str!("../ascii/linux.txt");
const LINUX_ACCENT: &str = "\x1b[1;33m";
const ANDROID_ART: &str = include_str!("../ascii/android.txt");
const ANDROID_ACCENT: &str = "\x1b[1;32m";

struct CatalogEntry {
    name: &'static str,
    art: &'static str,
    accent: &'static str,
}

const CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        name: "arch",
        art: include_str!("../ascii/arch.txt"),
        accent: "\x1b[1;36m",
    },
    CatalogEntry {
        name: "debian",
        art: include_str!("../ascii/debian.txt"),
        accent: "\x1b[1;31m",
    },
    CatalogEntry {
        name: "fedora",
        art: include_str!("../ascii/fedora.txt"),
        accent: "\x1b[1;34m",
    },
    CatalogEntry {
        name: "gentoo",
        art: include_str!("../ascii/gentoo.txt"),
        accent: "\x1b[1;35m",
    },
    CatalogEntry {
        name: "ubuntu",
        art: include_str!("../ascii/ubuntu.txt"),
        accent: "\x1b[1;31m",
    },
    CatalogEntry {
        name: "nixos",
        art: include_str!("../ascii/nixos.txt"),
        accent: "\x1b[1;34m",
    },
    CatalogEntry {
        name: "android",
        art: ANDROID_ART,
        accent: ANDROID_ACCENT,
    },
    CatalogEntry {
        name: "linux",
        art: LINUX_ART,
        accent: LINUX_ACCENT,
    },
];

/// Find a builtin logo for a distribution name. Exact matches win, then
/// pretty names like "Arch Linux" match by containment. The generic Tux
/// entry is excluded from containment so "Arch Linux" never resolves to it.
pub fn lookup_builtin(name: &str) -> Option<(&'static str, &'static str)> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    if let Some(entry) = CATALOG.iter().find(|entry| entry.name == needle) {
        return Some((entry.art, entry.accent));
    }
    CATALOG
        .iter()
        .filter(|entry| entry.name != "linux")
        .find(|entry| needle.contains(entry.name))
        .map(|entry| (entry.art, entry.accent))
}

fn fallback() -> (&'static str, &'static str) {
    if crate::collectors::system::is_android_device() {
        (ANDROID_ART, ANDROID_ACCENT)
    } else {
        (LINUX_ART, LINUX_ACCENT)
    }
}

/// Resolve the logo and the accent color for this run.
///
/// Precedence, lowest to highest: distribution auto-detect, an explicit
/// `ascii_distro`, a custom logo file, inline custom logo lines. The
/// accent for the info column stays with the catalog entry unless
/// `accent_color` overrides it.
pub fn select(display: &DisplayConfig, distro: &str) -> (Logo, Color) {
    let accent_override = if display.accent_color.is_empty() {
        None
    } else {
        Some(Color::named(&display.accent_color))
    };

    let requested = if display.ascii_distro.is_empty() {
        distro
    } else {
        display.ascii_distro.as_str()
    };
    let (art, catalog_accent) = lookup_builtin(requested).unwrap_or_else(fallback);
    let accent = accent_override
        .clone()
        .unwrap_or_else(|| Color::raw(catalog_accent));

    let logo = match custom_logo_lines(display) {
        Some(lines) => Logo::from_custom(&lines, accent_override.as_ref()),
        None => Logo::from_builtin(art, &accent),
    };

    (logo, accent)
}

fn custom_logo_lines(display: &DisplayConfig) -> Option<Vec<String>> {
    if !display.custom_ascii_logo.is_empty() {
        return Some(display.custom_ascii_logo.clone());
    }
    if display.ascii_path.is_empty() {
        return None;
    }
    let path = shellexpand::tilde(&display.ascii_path).to_string();
    match fs::read_to_string(&path) {
        Ok(contents) if !contents.trim().is_empty() => {
            Some(contents.lines().map(str::to_string).collect())
        }
        _ => {
            eprintln!(
                "Warning: could not read ascii logo from {}, using the builtin logo",
                path
            );
            None
        }
    }
}
