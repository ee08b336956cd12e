//! SSD Triage
//!
//! Interactive smartctl-driven health checks for used SATA SSDs attached
//! over USB bridges, logged to a per-session CSV for batch verification.

use clap::Parser;
use colored::Colorize;
use nix::unistd::Uid;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssd_triage::{print_banner, smartctl_available, Error, Result, Session};

// =============================================================================
// CLI Arguments
// =============================================================================

/// SSD Triage - smartctl health checks for used SATA drives, logged to CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the session CSV is written into
    #[arg(long, env = "SSD_TRIAGE_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SSD_TRIAGE_LOG", default_value = "warn")]
    log_level: String,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    if args.no_color {
        colored::control::set_override(false);
    }

    print_banner("SSD TESTING SCRIPT");

    if let Err(e) = check_environment() {
        print_preflight_error(&e);
        std::process::exit(1);
    }

    info!(version = ssd_triage::VERSION, "starting triage session");

    let mut session = Session::new(&args.output_dir);
    session.run()
}

// =============================================================================
// Environment Preflight
// =============================================================================

/// Verify the diagnostic tool and privileges before any loop iteration
fn check_environment() -> Result<()> {
    if !smartctl_available() {
        return Err(Error::SmartctlMissing);
    }
    if !Uid::effective().is_root() {
        return Err(Error::PrivilegesRequired);
    }
    Ok(())
}

fn print_preflight_error(error: &Error) {
    println!("{}", format!("ERROR: {}", error).red());
    match error {
        Error::SmartctlMissing => {
            println!("  Ubuntu/Debian: sudo apt-get install smartmontools");
            println!("  Fedora/RHEL: sudo dnf install smartmontools");
        }
        Error::PrivilegesRequired => {
            println!("Please run with: sudo ssd-triage");
        }
        _ => {}
    }
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so they never interleave with the interactive UI
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
