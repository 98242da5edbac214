//! Replay a gesture script and print the trace.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use slidelist_app::{run, ReplayScript};
use slidelist_core::RevealMode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Forbidden,
    Left,
    Right,
    Both,
}

impl From<ModeArg> for RevealMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Forbidden => RevealMode::Forbidden,
            ModeArg::Left => RevealMode::OpenLeftOnly,
            ModeArg::Right => RevealMode::OpenRightOnly,
            ModeArg::Both => RevealMode::OpenBoth,
        }
    }
}

/// Replay a pointer script against an in-memory slide list.
#[derive(Debug, Parser)]
#[command(name = "slidelist-replay", version)]
struct Args {
    /// Path to the JSON script
    script: PathBuf,
    /// Override the reveal mode from the script
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Starting slidelist-replay on {}", args.script.display());

    let mut script = match ReplayScript::load(&args.script) {
        Ok(script) => script,
        Err(e) => {
            log::error!("Failed to load {}: {}", args.script.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(mode) = args.mode {
        script.config.mode = mode.into();
    }

    match run(&script) {
        Ok(reports) => {
            for report in reports {
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
