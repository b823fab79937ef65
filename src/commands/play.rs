//! Play subcommand handler

use std::path::Path;

use anyhow::{bail, Context, Result};

use itv::player::run_player;
use itv::{Config, Trace};

/// Load a trace file and run the player.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, rate: Option<u16>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("`itv play` needs an interactive terminal (stdout is not a TTY)");
    }

    let config = Config::load()?;
    let trace = Trace::load(file)
        .with_context(|| format!("failed to load trace from {}", file.display()))?;

    run_player(trace, &config, rate)
}
