pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;

use cli::Command;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    match args.command {
        Command::Encode {
            input,
            output,
            grid,
        } => {
            let config = grid.config().with_context(|| "Invalid grid size")?;

            // 1. ── Parse ──────────────────────────────────────────────
            let script = std::fs::read_to_string(&input)
                .with_context(|| format!("Reading {}", input.display()))?;

            // 2. ── Place ──────────────────────────────────────────────
            let grid = processor::encode(&script, config)
                .with_context(|| format!("Encoding {}", input.display()))?;
            log::info!(
                "placed {} tiles on a {}x{} grid",
                grid.tokens().count(),
                config.rows(),
                config.cols()
            );

            // 3. ── Write ──────────────────────────────────────────────
            writer::grid::emit(&grid, &output)
                .with_context(|| format!("Writing {}", output.display()))?;
        }
        Command::Decode { input, output } => {
            let grid = load(&input)?;
            let scripts = processor::decode(&grid);

            std::fs::create_dir_all(&output)
                .with_context(|| format!("Creating {}", output.display()))?;
            writer::script::emit(&scripts, &output).with_context(|| "Writing script text")?;
            log::info!("wrote scripts to {}", output.display());
        }
        Command::Labels { input } => {
            let grid = load(&input)?;
            for row in processor::display::label_rows(&grid) {
                let cells: Vec<String> = row.iter().map(|l| format!("{l:<14}")).collect();
                println!("{}", cells.join("").trim_end());
            }
        }
    }

    Ok(())
}

fn load(path: &std::path::Path) -> anyhow::Result<model::Grid> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    parser::load_grid(&json).with_context(|| "Parsing grid JSON")
}
