use clap::Parser;
use ferrofetch::{collectors, config, display, logo, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ferrofetch", version)]
#[command(about = "Fetch system information and print it next to your distribution logo")]
struct Cli {
    /// Path to a custom configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ferrofetch: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = config::load(cli.config.as_deref())?;
    let distro = collectors::system::distro_name()?;
    let (logo, accent) = logo::select(&cfg.display, &distro);
    let opts = display::RenderOptions::from_config(&cfg, accent);
    let rows = display::build_info_rows(&opts, |kind| collectors::collect(kind, &cfg))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Keep long logo lines intact on narrow terminals.
    write!(out, "\x1b[?7l")?;
    for line in display::compose(&logo, &rows, &opts) {
        writeln!(out, "{}", line)?;
    }
    write!(out, "\x1b[?7h")?;
    out.flush()?;
    Ok(())
}
