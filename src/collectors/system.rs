//! OS identity, kernel, uptime, and user information.

use crate::error::{FerrofetchError, Result};
use crate::utils::command::command_output;
use crate::utils::file::read_first_line;
use crate::utils::parsing::format_uptime;
use std::ffi::CStr;
use std::fs;
use std::path::Path;

/// The distribution name (`NAME=` in `/etc/os-release`), used for logo and
/// accent selection. Android ships no os-release and is detected by its
/// filesystem layout instead.
pub fn distro_name() -> Result<String> {
    if is_android_device() {
        return Ok("Android".to_string());
    }
    let contents = read_os_release()?;
    parse_os_release(&contents, false).ok_or_else(|| {
        FerrofetchError::Detection("NAME missing from /etc/os-release".to_string())
    })
}

/// The pretty OS name shown in the `OS` field, optionally with the machine
/// architecture appended.
pub fn os_name(show_arch: bool) -> Result<String> {
    if is_android_device() {
        let version =
            command_output("getprop", &["ro.build.version.release"]).filter(|v| !v.is_empty());
        return Ok(match version {
            Some(version) => format!("Android {}", version),
            None => "Android".to_string(),
        });
    }

    let contents = read_os_release()?;
    let name = parse_os_release(&contents, true)
        .or_else(|| parse_os_release(&contents, false))
        .ok_or_else(|| {
            FerrofetchError::Detection("PRETTY_NAME missing from /etc/os-release".to_string())
        })?;

    if show_arch {
        if let Some(machine) = machine() {
            return Ok(format!("{} {}", name, machine));
        }
    }
    Ok(name)
}

fn read_os_release() -> Result<String> {
    fs::read_to_string("/etc/os-release")
        .map_err(|_| FerrofetchError::Detection("unable to read /etc/os-release".to_string()))
}

pub(crate) fn parse_os_release(contents: &str, pretty: bool) -> Option<String> {
    let key = if pretty { "PRETTY_NAME=" } else { "NAME=" };
    contents
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Kernel release from uname(2), with a /proc fallback.
pub fn kernel() -> Result<String> {
    if let Some(uts) = uname_info() {
        return Ok(cstr_field(&uts.release));
    }
    let version = read_first_line("/proc/version")
        .ok_or_else(|| FerrofetchError::Detection("unable to read /proc/version".to_string()))?;
    version
        .split_whitespace()
        .nth(2)
        .map(str::to_string)
        .ok_or_else(|| FerrofetchError::Detection("kernel release not found".to_string()))
}

/// Machine hardware name from uname(2), e.g. `x86_64`.
pub fn machine() -> Option<String> {
    uname_info().map(|uts| cstr_field(&uts.machine))
}

fn uname_info() -> Option<libc::utsname> {
    let mut buf: libc::utsname = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::uname(&mut buf) };
    (rc == 0).then_some(buf)
}

fn cstr_field(field: &[libc::c_char]) -> String {
    // The kernel null-terminates every utsname field.
    unsafe { CStr::from_ptr(field.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

/// Uptime in the `N weeks, N days, N hours, N mins` shape.
pub fn uptime() -> Result<String> {
    let line = read_first_line("/proc/uptime")
        .ok_or_else(|| FerrofetchError::Detection("unable to read /proc/uptime".to_string()))?;
    let seconds = line
        .split_whitespace()
        .next()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    Ok(format_uptime(seconds as u64))
}

/// `username@hostname`, the plain text behind the title line.
pub fn user_at_host() -> String {
    let username = std::env::var("USER").unwrap_or_default();
    let hostname = read_first_line("/proc/sys/kernel/hostname").unwrap_or_default();
    format!("{}@{}", username, hostname)
}

/// Android ships /system/app and /system/priv-app; stock Linux does not.
pub fn is_android_device() -> bool {
    Path::new("/system/app").is_dir() && Path::new("/system/priv-app").is_dir()
}
