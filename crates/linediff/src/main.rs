mod cli;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, OutputFormat};
use config::{load_config, ViewMode};
use linediff_core::DiffEngine;
use log::debug;
use render::RenderOptions;

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<i32> {
    let config = load_config(args.config.as_deref())?.apply_args(args);
    debug!("Effective config: {:?}", config);

    let engine = DiffEngine::new().with_context(config.context);
    let file_diff = engine
        .diff_files(&args.before, &args.after)
        .context("Failed to compute diff")?;
    let result = &file_diff.result;

    let opts = RenderOptions {
        color: config.color.enabled(),
        width: config.width,
    };

    let output = match args.format {
        OutputFormat::Json => render::render_json(result, config.view)?,
        OutputFormat::Text if args.stat => render::render_summary(result.stats(), &opts),
        OutputFormat::Text => {
            let hunks = engine.hunks(result);
            debug!(
                "{} -> {}: {} hunk(s)",
                file_diff.old_path,
                file_diff.new_path,
                hunks.len()
            );
            match config.view {
                ViewMode::Unified => render::render_unified(result, &hunks, &opts),
                ViewMode::Split => render::render_split(result, &hunks, &opts),
            }
        }
    };
    print!("{}", output);

    Ok(if args.exit_code && !result.is_unchanged() {
        1
    } else {
        0
    })
}
