//! Field rendering and the logo/information layout engine.
//!
//! The engine is a pure pass from (logo, rendered rows, options) to output
//! lines. Three shapes fall out of one loop: logo beside fields, fields
//! only, and the asymmetric tails where one column outlives the other.

use crate::color::{Color, RESET};
use crate::config::Config;
use crate::error::Result;
use crate::fields::{FieldKind, FieldSpec, UNKNOWN_FIELD_PLACEHOLDER};
use crate::logo::Logo;
use crate::utils::parsing::visible_width;

/// Options fixed for the whole run, consumed by the layout engine.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub show_logo: bool,
    pub gap: usize,
    pub delimiter: String,
    pub separator: String,
    pub colors_style: String,
    pub colors_icon: String,
    pub accent: Color,
    pub fields: Vec<FieldSpec>,
}

impl RenderOptions {
    pub fn from_config(cfg: &Config, accent: Color) -> Self {
        Self {
            show_logo: cfg.display.display_logo,
            gap: cfg.display.gap as usize,
            delimiter: cfg.display.delimiter.clone(),
            separator: cfg.display.separator.clone(),
            colors_style: cfg.display.colors_style.clone(),
            colors_icon: cfg.display.colors_icon.clone(),
            accent,
            fields: cfg
                .display
                .enabled_fields
                .iter()
                .map(|name| crate::fields::lookup(name, &cfg.messages))
                .collect(),
        }
    }
}

/// One already-rendered information row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoRow {
    Text(String),
    /// A spacer: keeps its vertical slot but renders no gap and no text.
    Blank,
}

/// Run-scoped state shared between fields: the visible length of the
/// `username@hostname` title, written by `User` and read by `Separator`.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub title_length: Option<usize>,
}

/// Render one field into zero, one, or two rows.
pub fn render_field(
    spec: &FieldSpec,
    value: Option<&str>,
    opts: &RenderOptions,
    ctx: &mut RenderContext,
) -> Vec<InfoRow> {
    match &spec.kind {
        FieldKind::User => {
            let value = value.unwrap_or("");
            let (user, host) = value.split_once('@').unwrap_or((value, ""));
            ctx.title_length = Some(if user.is_empty() && host.is_empty() {
                0
            } else {
                visible_width(user) + visible_width(host) + 1
            });
            vec![InfoRow::Text(format!(
                "{}@{}",
                opts.accent.paint(user),
                opts.accent.paint(host)
            ))]
        }
        FieldKind::Separator => {
            // Zero-length when User never rendered before us.
            let length = ctx.title_length.unwrap_or(0);
            let rule = opts.separator.chars().next().unwrap_or('-');
            vec![InfoRow::Text(rule.to_string().repeat(length))]
        }
        FieldKind::Colors => vec![
            InfoRow::Text(palette_dark(&opts.colors_style, &opts.colors_icon)),
            InfoRow::Text(palette_bright(&opts.colors_style, &opts.colors_icon)),
        ],
        FieldKind::Blank => vec![InfoRow::Blank],
        FieldKind::Unknown(_) => vec![InfoRow::Text(format_line(
            &spec.label,
            UNKNOWN_FIELD_PLACEHOLDER,
            opts,
        ))],
        _ => match value {
            Some(value) => vec![InfoRow::Text(format_line(&spec.label, value, opts))],
            None => Vec::new(),
        },
    }
}

/// The standard field shape: `<accent><label><reset><delimiter> <value>`.
fn format_line(label: &str, value: &str, opts: &RenderOptions) -> String {
    format!(
        "{}{}{}{} {}",
        opts.accent.prefix(),
        label,
        RESET,
        opts.delimiter,
        value
    )
}

/// Render every enabled field, in order, through `collect`. A collector
/// reporting a clean absence contributes no row at all.
pub fn build_info_rows<C>(opts: &RenderOptions, mut collect: C) -> Result<Vec<InfoRow>>
where
    C: FnMut(&FieldKind) -> Result<Option<String>>,
{
    let mut ctx = RenderContext::default();
    let mut rows = Vec::new();
    for spec in &opts.fields {
        let value = if spec.kind.is_collected() {
            collect(&spec.kind)?
        } else {
            None
        };
        rows.extend(render_field(spec, value.as_deref(), opts, &mut ctx));
    }
    Ok(rows)
}

/// Merge the logo and the rendered rows into final output lines.
pub fn compose(logo: &Logo, rows: &[InfoRow], opts: &RenderOptions) -> Vec<String> {
    let gap = " ".repeat(opts.gap);

    if !opts.show_logo || logo.is_empty() {
        return rows
            .iter()
            .map(|row| match row {
                InfoRow::Text(text) => format!("{}{}", gap, text),
                InfoRow::Blank => gap.clone(),
            })
            .collect();
    }

    let padding = " ".repeat(logo.width());
    let total = logo.height().max(rows.len());
    let mut lines = Vec::with_capacity(total);
    for i in 0..total {
        let line = match (logo.line(i), rows.get(i)) {
            // The logo continues after the information ran out.
            (Some(art), None) => format!("{}{}", art.raw(), RESET),
            (Some(art), Some(InfoRow::Blank)) => format!("{}{}", art.raw(), RESET),
            (Some(art), Some(InfoRow::Text(text))) => {
                let fill = " ".repeat(logo.width() - art.visible_width());
                format!("{}{}{}{}{}", art.raw(), fill, RESET, gap, text)
            }
            // The information continues after the logo ran out.
            (None, Some(InfoRow::Text(text))) => format!("{}{}{}", padding, gap, text),
            (None, Some(InfoRow::Blank)) => padding.clone(),
            (None, None) => String::new(),
        };
        lines.push(line);
    }
    lines
}

/// The dark palette row: the eight base colors, one three-cell swatch each.
pub fn palette_dark(style: &str, icon: &str) -> String {
    let mut out = String::new();
    for i in 0..8 {
        if !icon.is_empty() {
            out.push_str(&format!("\x1b[3{}m{}", i, icon));
        } else if style.eq_ignore_ascii_case("circles") {
            out.push_str(&format!("\x1b[3{}m⬤  ", i));
        } else {
            out.push_str(&format!("\x1b[4{}m   ", i));
        }
    }
    out.push_str(RESET);
    out
}

/// The bright palette row: colors 8-15 from the 256-color table.
pub fn palette_bright(style: &str, icon: &str) -> String {
    let mut out = String::new();
    for i in 8..16 {
        if !icon.is_empty() {
            out.push_str(&format!("\x1b[38;5;{}m{}", i, icon));
        } else if style.eq_ignore_ascii_case("circles") {
            out.push_str(&format!("\x1b[38;5;{}m⬤  ", i));
        } else {
            out.push_str(&format!("\x1b[48;5;{}m   ", i));
        }
    }
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fields::lookup;

    fn options(fields: &[&str], accent: Color, gap: usize, show_logo: bool) -> RenderOptions {
        let cfg = Config::default();
        RenderOptions {
            show_logo,
            gap,
            delimiter: ":".to_string(),
            separator: "-".to_string(),
            colors_style: "classic".to_string(),
            colors_icon: String::new(),
            accent,
            fields: fields
                .iter()
                .map(|name| lookup(name, &cfg.messages))
                .collect(),
        }
    }

    fn fake_collect(kind: &FieldKind) -> Result<Option<String>> {
        Ok(match kind {
            FieldKind::User => Some("me@box".to_string()),
            FieldKind::Os => Some("Arch Linux x86_64".to_string()),
            FieldKind::Kernel => Some("6.1.0-arch1".to_string()),
            FieldKind::Shell => Some("zsh".to_string()),
            _ => None,
        })
    }

    fn text(row: &InfoRow) -> &str {
        match row {
            InfoRow::Text(text) => text,
            InfoRow::Blank => panic!("expected a text row"),
        }
    }

    #[test]
    fn fields_only_rendering_prefixes_the_gap() {
        let opts = options(&["OS", "Kernel"], Color::named("red"), 2, false);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        let lines = compose(&Logo::default(), &rows, &opts);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  \x1b[1;31mOS\x1b[0m: Arch Linux x86_64");
        assert_eq!(lines[1], "  \x1b[1;31mKernel\x1b[0m: 6.1.0-arch1");
    }

    #[test]
    fn zero_gap_renders_flush_left() {
        let opts = options(&["OS"], Color::named("red"), 0, false);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        let lines = compose(&Logo::default(), &rows, &opts);
        assert_eq!(lines[0], "\x1b[1;31mOS\x1b[0m: Arch Linux x86_64");
    }

    #[test]
    fn logo_and_fields_can_exhaust_together() {
        let logo = Logo::from_custom(
            &["aa".to_string(), "bb".to_string(), "cc".to_string()],
            Some(&Color::named("cyan")),
        );
        let opts = options(&["User", "Separator", "OS"], Color::named("cyan"), 3, true);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(text(&rows[1]), "------");

        let lines = compose(&logo, &rows, &opts);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\x1b[1;36maa"));
        assert!(lines[0].contains("me") && lines[0].contains("box"));
        assert!(lines[2].contains("Arch Linux"));
    }

    #[test]
    fn short_logo_pads_the_remaining_rows() {
        let logo = Logo::from_custom(&["##".to_string()], Some(&Color::named("red")));
        let opts = options(
            &["User", "Separator", "OS", "Kernel"],
            Color::named("red"),
            1,
            true,
        );
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        let lines = compose(&logo, &rows, &opts);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("\x1b[1;31m##"));
        // Two padding columns plus a one-column gap before every later row.
        for line in &lines[1..] {
            assert!(line.starts_with("   "));
            assert!(!line.starts_with("    "));
        }
    }

    #[test]
    fn tall_logo_continues_after_the_fields() {
        let logo = Logo::from_custom(&vec!["a".to_string(); 5], Some(&Color::named("blue")));
        let opts = options(&["User", "Separator"], Color::named("blue"), 3, true);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        let lines = compose(&logo, &rows, &opts);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "\x1b[1;34ma\x1b[0m");
        assert_eq!(lines[4], "\x1b[1;34ma\x1b[0m");
    }

    #[test]
    fn skipped_field_contributes_no_row() {
        // DE resolves to None in fake_collect, so Shell moves up a slot.
        let opts = options(
            &["User", "Separator", "DE", "Shell"],
            Color::named("red"),
            2,
            false,
        );
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(text(&rows[2]).contains("zsh"));
    }

    #[test]
    fn colors_field_always_emits_two_rows() {
        for style in ["classic", "circles"] {
            let mut opts = options(&["Colors"], Color::named("red"), 0, false);
            opts.colors_style = style.to_string();
            let rows = build_info_rows(&opts, fake_collect).unwrap();
            assert_eq!(rows.len(), 2);
            assert!(text(&rows[0]).ends_with(RESET));
            assert!(text(&rows[1]).ends_with(RESET));
        }
    }

    #[test]
    fn colors_rows_pair_with_logo_rows_independently() {
        let logo = Logo::from_custom(
            &["aa".to_string(), "bb".to_string(), "cc".to_string()],
            Some(&Color::named("red")),
        );
        let opts = options(&["User", "Separator", "Colors"], Color::named("red"), 2, true);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        assert_eq!(rows.len(), 4);

        let lines = compose(&logo, &rows, &opts);
        assert_eq!(lines.len(), 4);
        // The dark row still sits beside logo art; the bright row spilled
        // past the logo and starts on padding.
        assert!(lines[2].starts_with("\x1b[1;31mcc"));
        assert!(lines[3].starts_with("  "));
        assert!(lines[3].contains("\x1b[48;5;8m"));
    }

    #[test]
    fn classic_palettes_cover_all_sixteen_colors() {
        let dark = palette_dark("classic", "");
        let bright = palette_bright("classic", "");
        for i in 0..8 {
            assert!(dark.contains(&format!("\x1b[4{}m", i)));
            assert!(bright.contains(&format!("\x1b[48;5;{}m", i + 8)));
        }
        // Eight swatches of three cells each.
        assert_eq!(visible_width(&dark), 24);
        assert_eq!(visible_width(&bright), 24);
    }

    #[test]
    fn colors_icon_overrides_the_swatch_style() {
        let dark = palette_dark("classic", "##");
        assert!(dark.contains("\x1b[30m##"));
        assert!(dark.contains("\x1b[37m##"));
        assert!(!dark.contains("\x1b[40m"));
    }

    #[test]
    fn separator_matches_the_title_width() {
        let opts = options(&["User", "Separator"], Color::named("red"), 0, false);
        let rows = build_info_rows(&opts, |kind| {
            Ok(match kind {
                FieldKind::User => Some("abc@defg".to_string()),
                _ => None,
            })
        })
        .unwrap();
        assert_eq!(text(&rows[1]), "--------");
    }

    #[test]
    fn empty_title_produces_a_zero_length_separator() {
        let opts = options(&["User", "Separator"], Color::named("red"), 0, false);
        let rows = build_info_rows(&opts, |kind| {
            Ok(match kind {
                FieldKind::User => Some("@".to_string()),
                _ => None,
            })
        })
        .unwrap();
        assert_eq!(text(&rows[1]), "");
    }

    #[test]
    fn separator_without_a_title_defaults_to_zero() {
        let opts = options(&["Separator"], Color::named("red"), 0, false);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        assert_eq!(text(&rows[0]), "");
    }

    #[test]
    fn user_row_accents_both_halves() {
        let opts = options(&["User"], Color::named("cyan"), 0, false);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        assert_eq!(
            text(&rows[0]),
            "\x1b[1;36mme\x1b[0m@\x1b[1;36mbox\x1b[0m"
        );
    }

    #[test]
    fn unknown_field_renders_the_placeholder() {
        let opts = options(&["Gpu"], Color::named("red"), 0, false);
        // The collector must never be consulted for unknown fields.
        let rows = build_info_rows(&opts, |_| panic!("unexpected collect")).unwrap();
        let line = text(&rows[0]);
        assert!(line.contains("Gpu"));
        assert!(line.contains(UNKNOWN_FIELD_PLACEHOLDER));
    }

    #[test]
    fn blank_rows_keep_their_slot_without_text() {
        let opts = options(&["OS", "", "Kernel"], Color::named("red"), 2, false);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], InfoRow::Blank);

        let lines = compose(&Logo::default(), &rows, &opts);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  ");
    }

    #[test]
    fn blank_rows_beside_the_logo_keep_the_art_only() {
        let logo = Logo::from_custom(&["aa".to_string(), "bb".to_string()], Some(&Color::named("red")));
        let opts = options(&["OS", ""], Color::named("red"), 2, true);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        let lines = compose(&logo, &rows, &opts);
        assert_eq!(lines[1], "\x1b[1;31mbb\x1b[0m");
    }

    #[test]
    fn empty_logo_behaves_like_logo_disabled() {
        let opts = options(&["OS"], Color::named("red"), 2, true);
        let rows = build_info_rows(&opts, fake_collect).unwrap();
        let lines = compose(&Logo::default(), &rows, &opts);
        assert_eq!(lines[0], "  \x1b[1;31mOS\x1b[0m: Arch Linux x86_64");
    }

    #[test]
    fn fatal_collector_errors_abort_the_render() {
        let opts = options(&["OS"], Color::named("red"), 0, false);
        let result = build_info_rows(&opts, |_| {
            Err(crate::error::FerrofetchError::Detection(
                "unable to read /etc/os-release".to_string(),
            ))
        });
        assert!(result.is_err());
    }
}
