//! itv CLI entry point

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use itv::player::{MAX_RATE, MIN_RATE};

#[derive(Parser)]
#[command(
    name = "itv",
    version = itv::version(),
    about = "Step-through viewer for interpreter execution traces"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a trace file in the terminal
    Play {
        /// Trace file (JSON) to play
        file: PathBuf,
        /// Auto-play rate in steps per second (1-100, default from config)
        #[arg(long, value_parser = clap::value_parser!(u16).range(MIN_RATE as i64..=MAX_RATE as i64))]
        rate: Option<u16>,
    },
    /// Print a summary of a trace file
    Info {
        /// Trace file (JSON) to inspect
        file: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Set a config key (default_rate, theme)
    Set { key: String, value: String },
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { file, rate } => commands::play::handle(&file, rate),
        Command::Info { file } => commands::info::handle(&file),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Set { key, value } => commands::config::handle_set(&key, &value),
        },
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "itv", &mut io::stdout());
            Ok(())
        }
    }
}
