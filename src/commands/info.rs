//! Info subcommand handler

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use itv::trace::Trace;
use itv::tui::current_theme;

/// Print a summary of a trace file.
pub fn handle(file: &Path) -> Result<()> {
    let trace = Trace::load(file)
        .with_context(|| format!("failed to load trace from {}", file.display()))?;
    let size = fs::metadata(file)
        .with_context(|| format!("failed to stat {}", file.display()))?
        .len();

    let functions: HashSet<&str> = trace
        .frames()
        .iter()
        .map(|f| f.function_name.as_str())
        .collect();
    let max_stack = trace.frames().iter().map(|f| f.stack.len()).max().unwrap_or(0);
    let max_locals = trace.frames().iter().map(|f| f.locals.len()).max().unwrap_or(0);

    let theme = current_theme();
    println!(
        "{} {}",
        theme.dim_text("File:      "),
        theme.primary_text(&file.display().to_string())
    );
    println!(
        "{} {}",
        theme.dim_text("Size:      "),
        theme.primary_text(&format_size(size, DECIMAL))
    );
    println!(
        "{} {}",
        theme.dim_text("Frames:    "),
        theme.accent_text(&trace.len().to_string())
    );
    println!(
        "{} {}",
        theme.dim_text("Functions: "),
        theme.primary_text(&functions.len().to_string())
    );
    println!(
        "{} {}",
        theme.dim_text("Max stack: "),
        theme.primary_text(&max_stack.to_string())
    );
    println!(
        "{} {}",
        theme.dim_text("Max locals:"),
        theme.primary_text(&max_locals.to_string())
    );

    Ok(())
}
