use anyhow::{Context, Result};
use clap::Parser;
use lawha_core::engine::{display_label, ModifierState};
use lawha_core::layouts;
use lawha_core::types::KeyClass;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a Lawha keyboard layout", long_about = None)]
struct Args {
    /// Builtin layout name (e.g. kbda1) or path to a layout JSON file
    layout: String,

    /// Also list every key with its mappings
    #[arg(short, long)]
    keys: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let layout = layouts::resolve(&args.layout)
        .with_context(|| format!("failed to load layout '{}'", args.layout))?;

    println!("Name: {}", layout.name);
    println!("Id: {}", layout.id);
    println!("Direction: {:?}", layout.direction);
    println!("Rows: {}", layout.rows.len());
    println!("Keys: {}", layout.key_count());

    if args.keys {
        let shifted = ModifierState::new(true, false);
        for (r, row) in layout.rows.iter().enumerate() {
            println!("\nRow {r}:");
            for (c, key) in row.iter().enumerate() {
                let class = match key.class() {
                    KeyClass::Regular => "regular".to_string(),
                    KeyClass::Number => "number".to_string(),
                    KeyClass::Tashkeel => "tashkeel".to_string(),
                    KeyClass::AlifVariant => "alif-variant".to_string(),
                    KeyClass::Special(special) => format!("{special:?}").to_lowercase(),
                };
                let mut line = format!(
                    "  r{r}c{c}  {}  shift={}",
                    key.normal,
                    display_label(key, shifted)
                );
                if let Some(ctrl) = &key.ctrl {
                    line.push_str(&format!(" ctrl={ctrl}"));
                }
                println!("{line}  [{class}]");
            }
        }
    }

    Ok(())
}
