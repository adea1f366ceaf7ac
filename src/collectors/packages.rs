//! Package counting across the package managers we know how to read.

use crate::utils::command::{command_exists, command_output};
use crate::utils::file::file_exists;
use rayon::prelude::*;
use std::fs;

/// Probe every supported package manager in parallel and merge the counts
/// into `N (manager), M (manager)`. Managers reporting zero packages are
/// left out, so an APT install next to pacman never shows `0 (dpkg)`.
pub fn summary() -> String {
    let probes: &[fn() -> Option<(usize, &'static str)>] = &[
        pacman_packages,
        dpkg_packages,
        rpm_packages,
        apk_packages,
        xbps_packages,
        nix_packages,
        flatpak_packages,
    ];

    let counts: Vec<(usize, &'static str)> =
        probes.par_iter().filter_map(|probe| probe()).collect();

    if counts.is_empty() {
        return "ferrofetch was not able to recognize your system package manager".to_string();
    }

    counts
        .iter()
        .map(|(count, manager)| format!("{} ({})", count, manager))
        .collect::<Vec<_>>()
        .join(", ")
}

fn nonzero(count: usize, manager: &'static str) -> Option<(usize, &'static str)> {
    (count > 0).then_some((count, manager))
}

// File-based probes come first: reading the package database directly is
// much cheaper than spawning the manager itself.

fn pacman_packages() -> Option<(usize, &'static str)> {
    let entries = fs::read_dir("/var/lib/pacman/local").ok()?;
    let count = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .count();
    nonzero(count, "pacman")
}

fn dpkg_packages() -> Option<(usize, &'static str)> {
    let status = fs::read_to_string("/var/lib/dpkg/status").ok()?;
    let count = status
        .lines()
        .filter(|line| *line == "Status: install ok installed")
        .count();
    nonzero(count, "dpkg")
}

fn rpm_packages() -> Option<(usize, &'static str)> {
    if !file_exists("/var/lib/rpm") {
        return None;
    }
    let output = command_output("rpm", &["-qa"])?;
    nonzero(output.lines().filter(|line| !line.is_empty()).count(), "rpm")
}

fn apk_packages() -> Option<(usize, &'static str)> {
    let installed = fs::read_to_string("/lib/apk/db/installed").ok()?;
    let count = installed
        .lines()
        .filter(|line| line.starts_with("P:"))
        .count();
    nonzero(count, "apk")
}

fn xbps_packages() -> Option<(usize, &'static str)> {
    if !file_exists("/var/db/xbps") {
        return None;
    }
    let output = command_output("xbps-query", &["-l"])?;
    nonzero(output.lines().filter(|line| !line.is_empty()).count(), "xbps")
}

fn nix_packages() -> Option<(usize, &'static str)> {
    if !command_exists("nix-store") {
        return None;
    }
    let output = command_output(
        "nix-store",
        &["--query", "--requisites", "/run/current-system/sw"],
    )?;
    nonzero(output.lines().filter(|line| !line.is_empty()).count(), "nix")
}

fn flatpak_packages() -> Option<(usize, &'static str)> {
    let apps = dir_entry_count("/var/lib/flatpak/app");
    let runtimes = dir_entry_count("/var/lib/flatpak/runtime");
    nonzero(apps + runtimes, "flatpak")
}

fn dir_entry_count(path: &str) -> usize {
    fs::read_dir(path)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_dir())
                .count()
        })
        .unwrap_or(0)
}
