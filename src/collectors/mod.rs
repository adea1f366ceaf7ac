//! System fact collectors.
//!
//! Each collector returns `Ok(Some(value))` for a collected fact,
//! `Ok(None)` when the fact legitimately does not exist on this host, and
//! an error only when a mandatory system source is unreadable.

pub mod desktop;
pub mod hardware;
pub mod packages;
pub mod system;

use crate::config::Config;
use crate::error::Result;
use crate::fields::FieldKind;

/// Collect the value for one field kind.
pub fn collect(kind: &FieldKind, cfg: &Config) -> Result<Option<String>> {
    match kind {
        FieldKind::Os => system::os_name(cfg.display.show_arch).map(Some),
        FieldKind::Kernel => system::kernel().map(Some),
        FieldKind::Uptime => system::uptime().map(Some),
        FieldKind::User => Ok(Some(system::user_at_host())),
        FieldKind::Packages => Ok(Some(packages::summary())),
        FieldKind::Desktop => Ok(desktop::desktop_environment()),
        FieldKind::Wm => Ok(desktop::window_manager()),
        FieldKind::Resolution => Ok(desktop::resolution()),
        FieldKind::Shell => Ok(desktop::shell()),
        FieldKind::Terminal => Ok(desktop::terminal()),
        FieldKind::Cpu => hardware::cpu(cfg.display.short_cpu_info),
        FieldKind::Memory => hardware::memory(cfg.display.memory_in_gib).map(Some),
        _ => Ok(None),
    }
}
