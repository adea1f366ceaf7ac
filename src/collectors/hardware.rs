//! CPU and memory facts from procfs and sysfs.

use crate::error::{FerrofetchError, Result};
use crate::utils::file::read_first_line;
use crate::utils::parsing::collapse_whitespace;
use std::fs;

/// CPU summary in the `model (cores) @ freq` shape. None on hosts where
/// /proc/cpuinfo lists no processors.
pub fn cpu(short_info: bool) -> Result<Option<String>> {
    let contents = fs::read_to_string("/proc/cpuinfo")
        .map_err(|_| FerrofetchError::Detection("unable to read /proc/cpuinfo".to_string()))?;
    let (model, cores) = parse_cpuinfo(&contents);
    if cores == 0 {
        return Ok(None);
    }
    let freq_mhz = cpu_frequency_mhz(&contents);
    Ok(Some(format_cpu(&model, cores, freq_mhz, short_info)))
}

pub(crate) fn parse_cpuinfo(contents: &str) -> (String, usize) {
    let cores = contents
        .lines()
        .filter(|line| line.starts_with("processor"))
        .count();
    // Model names often embed their own "@ 2.80GHz" suffix; the frequency
    // is rendered separately, so cut it off here.
    let model = contents
        .lines()
        .find(|line| line.starts_with("model name"))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|value| value.split('@').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_default();
    (model, cores)
}

// Maximum frequency from sysfs when available (kHz), otherwise the current
// frequency reported by /proc/cpuinfo (MHz).
fn cpu_frequency_mhz(cpuinfo: &str) -> u64 {
    if let Some(line) = read_first_line("/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq") {
        if let Ok(khz) = line.parse::<u64>() {
            return khz / 1000;
        }
    }
    cpuinfo
        .lines()
        .find(|line| line.starts_with("cpu MHz"))
        .and_then(|line| line.split(':').nth(1))
        .and_then(|value| value.trim().parse::<f64>().ok())
        .map(|mhz| mhz as u64)
        .unwrap_or(0)
}

/// Render `model (cores) @ freq`. Below 1000 MHz the frequency stays in
/// integer MHz; otherwise GHz, dropping decimals while the MHz value ends
/// in zeros (2800 -> 2.8GHz, 3000 -> 3GHz, 2856 -> 2.856GHz).
pub(crate) fn format_cpu(model: &str, cores: usize, freq_mhz: u64, short_info: bool) -> String {
    let (value, unit, precision) = if freq_mhz < 1000 {
        (freq_mhz as f64, "MHz", 0)
    } else {
        let mut precision = 3usize;
        let mut reduced = freq_mhz;
        while reduced % 10 == 0 && precision > 0 {
            precision -= 1;
            reduced /= 10;
        }
        (freq_mhz as f64 / 1000.0, "GHz", precision)
    };

    let mut cpu = format!("{} ({}) @ {:.*}{}", model, cores, precision, value, unit);
    if short_info {
        cpu = cpu.replace("(R)", "").replace("Core(TM)", "");
    }
    cpu = cpu.replace("CPU", "");
    collapse_whitespace(&cpu)
}

/// Memory as `used / total`, following the neofetch accounting of free
/// memory (shmem counts as used; buffers and caches do not).
pub fn memory(in_gib: bool) -> Result<String> {
    let contents = fs::read_to_string("/proc/meminfo")
        .map_err(|_| FerrofetchError::Detection("unable to read /proc/meminfo".to_string()))?;
    let (used_mib, total_mib) = parse_meminfo(&contents);
    Ok(format_memory(used_mib, total_mib, in_gib))
}

pub(crate) fn parse_meminfo(contents: &str) -> (i64, i64) {
    let value = |key: &str| -> i64 {
        contents
            .lines()
            .find(|line| line.starts_with(key))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    };

    let total = value("MemTotal:");
    let used = total + value("Shmem:")
        - value("MemFree:")
        - value("Buffers:")
        - value("Cached:")
        - value("SReclaimable:");
    (used / 1024, total / 1024)
}

pub(crate) fn format_memory(used_mib: i64, total_mib: i64, in_gib: bool) -> String {
    if in_gib {
        format!(
            "{:.2}GiB / {:.2}GiB",
            used_mib as f64 / 1024.0,
            total_mib as f64 / 1024.0
        )
    } else {
        format!("{}MiB / {}MiB", used_mib, total_mib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPUINFO: &str = "processor\t: 0\n\
model name\t: Intel(R) Core(TM) i5-760 CPU @ 2.80GHz\n\
cpu MHz\t\t: 1483.000\n\
processor\t: 1\n\
model name\t: Intel(R) Core(TM) i5-760 CPU @ 2.80GHz\n";

    #[test]
    fn cpuinfo_yields_model_and_core_count() {
        let (model, cores) = parse_cpuinfo(CPUINFO);
        assert_eq!(model, "Intel(R) Core(TM) i5-760 CPU");
        assert_eq!(cores, 2);
    }

    #[test]
    fn short_info_strips_vendor_noise() {
        assert_eq!(
            format_cpu("Intel(R) Core(TM) i5-760 CPU", 4, 2800, true),
            "Intel i5-760 (4) @ 2.8GHz"
        );
    }

    #[test]
    fn long_info_keeps_the_trademarks() {
        assert_eq!(
            format_cpu("Intel(R) Core(TM) i5-760 CPU", 4, 2800, false),
            "Intel(R) Core(TM) i5-760 (4) @ 2.8GHz"
        );
    }

    #[test]
    fn frequency_precision_follows_trailing_zeros() {
        assert_eq!(format_cpu("AMD Ryzen 5", 12, 3000, true), "AMD Ryzen 5 (12) @ 3GHz");
        assert_eq!(
            format_cpu("AMD Ryzen 5", 12, 2856, true),
            "AMD Ryzen 5 (12) @ 2.856GHz"
        );
        assert_eq!(format_cpu("slowchip", 1, 800, true), "slowchip (1) @ 800MHz");
    }

    const MEMINFO: &str = "MemTotal:       16384000 kB\n\
MemFree:         8192000 kB\n\
Buffers:          102400 kB\n\
Cached:          2048000 kB\n\
SwapCached:            0 kB\n\
Shmem:            512000 kB\n\
SReclaimable:     256000 kB\n";

    #[test]
    fn meminfo_accounting_matches_neofetch() {
        let (used, total) = parse_meminfo(MEMINFO);
        assert_eq!(total, 16000);
        assert_eq!(used, 6150);
    }

    #[test]
    fn memory_renders_in_both_units() {
        assert_eq!(format_memory(6150, 16000, false), "6150MiB / 16000MiB");
        assert_eq!(format_memory(1024, 2048, true), "1.00GiB / 2.00GiB");
    }
}
