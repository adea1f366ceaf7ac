//! Desktop session facts: DE, WM, resolution, shell, and terminal.

use crate::utils::file::read_first_line;
use std::env;
use std::fs;

const WM_PROCESSES: [&str; 12] = [
    "sway",
    "hyprland",
    "kwin_wayland",
    "kwin_x11",
    "mutter",
    "xfwm4",
    "openbox",
    "i3",
    "bspwm",
    "awesome",
    "weston",
    "dwm",
];

const SHELL_PROCESSES: [&str; 9] = [
    "sh", "bash", "zsh", "fish", "dash", "ksh", "tcsh", "csh", "nu",
];

/// Window manager, found by scanning /proc for a known WM process.
/// None when the host runs no recognizable window manager.
pub fn window_manager() -> Option<String> {
    if let Some(name) = scan_proc_for_wm() {
        return Some(name);
    }
    if env::var("WAYLAND_DISPLAY").is_ok() {
        return Some("Wayland".to_string());
    }
    None
}

fn scan_proc_for_wm() -> Option<String> {
    let entries = fs::read_dir("/proc").ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let is_pid = name.to_str().map_or(false, |n| n.parse::<u32>().is_ok());
        if !is_pid {
            continue;
        }
        if let Some(comm) = read_first_line(entry.path().join("comm")) {
            for wm in WM_PROCESSES {
                if comm == wm || comm.starts_with(wm) {
                    return Some(capitalize_first_letter(&comm));
                }
            }
        }
    }
    None
}

/// Desktop environment from the session environment. None when the host
/// has no DE, or when it is the same thing as the window manager.
pub fn desktop_environment() -> Option<String> {
    let session = env::var("XDG_CURRENT_DESKTOP")
        .or_else(|_| env::var("DESKTOP_SESSION"))
        .ok()
        .filter(|v| !v.is_empty())?;
    let de = capitalize_first_letter(&session);
    if let Some(wm) = window_manager() {
        if wm.eq_ignore_ascii_case(&de) {
            return None;
        }
    }
    Some(de)
}

/// Active display modes from the DRM subsystem, one per connected output.
pub fn resolution() -> Option<String> {
    let entries = fs::read_dir("/sys/class/drm").ok()?;
    let mut modes = Vec::new();
    for entry in entries.flatten() {
        if let Some(mode) = read_first_line(entry.path().join("modes")) {
            if !mode.is_empty() {
                modes.push(mode);
            }
        }
    }
    if modes.is_empty() {
        None
    } else {
        Some(modes.join(", "))
    }
}

/// Login shell name from $SHELL, path stripped.
pub fn shell() -> Option<String> {
    env::var("SHELL")
        .ok()
        .filter(|v| !v.is_empty())
        .and_then(|path| path.rsplit('/').next().map(str::to_string))
}

/// Terminal emulator: Windows Terminal under WSL, the TTY device on the
/// console, otherwise the nearest non-shell ancestor process.
pub fn terminal() -> Option<String> {
    if env::var("WT_SESSION").is_ok() {
        return Some("Windows Terminal".to_string());
    }
    let term = env::var("TERM").unwrap_or_default();
    if term == "linux" {
        return fs::read_link("/proc/self/fd/0")
            .ok()
            .map(|path| path.display().to_string());
    }
    if let Some(name) = parent_terminal() {
        return Some(name);
    }
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

// Walk up the process tree past shells; the first other ancestor is
// normally the emulator that spawned the session.
fn parent_terminal() -> Option<String> {
    let mut pid = std::os::unix::process::parent_id();
    for _ in 0..10 {
        if pid <= 1 {
            return None;
        }
        let comm = read_first_line(format!("/proc/{}/comm", pid))?;
        if SHELL_PROCESSES.contains(&comm.as_str()) {
            pid = parent_of(pid)?;
            continue;
        }
        return Some(comm);
    }
    None
}

fn parent_of(pid: u32) -> Option<u32> {
    let status = fs::read_to_string(format!("/proc/{}/status", pid)).ok()?;
    status
        .lines()
        .find_map(|line| line.strip_prefix("PPid:"))
        .and_then(|value| value.trim().parse().ok())
}

pub fn capitalize_first_letter(s: &str) -> String {
    match s.chars().next() {
        Some(first) => format!("{}{}", first.to_uppercase(), &s[first.len_utf8()..]),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first_letter("sway"), "Sway");
        assert_eq!(capitalize_first_letter("KDE"), "KDE");
        assert_eq!(capitalize_first_letter(""), "");
    }
}
