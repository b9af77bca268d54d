use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use lawha_cli::script::{parse_script, run_script};
use lawha_core::engine::KeyboardEngine;
use lawha_core::layouts;
use lawha_core::settings::{load_settings, FileStore, Settings};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate a typing session on a Lawha layout", long_about = None)]
struct Args {
    /// Builtin layout name (e.g. kbda1) or path to a layout JSON file
    layout: String,

    /// Script file of whitespace-separated key references
    script: Option<PathBuf>,

    /// Inline script, e.g. "س ل ا م <enter>"
    #[arg(short, long)]
    keys: Option<String>,

    /// Use behavior settings persisted in the user config directory
    #[arg(long)]
    saved_settings: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("logger can init")?;

    let script_text = match (&args.script, &args.keys) {
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        (None, Some(keys)) => keys.clone(),
        (Some(_), Some(_)) => bail!("pass a script file or --keys, not both"),
        (None, None) => bail!("nothing to type: pass a script file or --keys"),
    };

    let keys = parse_script(&script_text)?;
    if keys.is_empty() {
        bail!("the script contains no keys");
    }

    let settings = if args.saved_settings {
        let store = FileStore::new().context("failed to open the settings store")?;
        log::debug!("loading settings from {}", store.root().display());
        load_settings(&store)
    } else {
        Settings::default()
    };

    let layout = layouts::resolve(&args.layout)
        .with_context(|| format!("failed to load layout '{}'", args.layout))?;
    log::debug!("layout {} with {} keys", layout.id, layout.key_count());
    let mut engine = KeyboardEngine::from_settings(layout, &settings);

    let session = run_script(&mut engine, &keys)?;

    for step in &session.steps {
        println!("{:<10} | {}", step.key, step.composing);
    }

    if session.completed.is_empty() {
        println!("\nNo words completed.");
    } else {
        println!("\nCompleted words:");
        for word in &session.completed {
            println!("  {word}");
        }
    }

    Ok(())
}
