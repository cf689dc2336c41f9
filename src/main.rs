#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use naval_setup::{init_logging, render_setup, run_setup, Level, SetupReport};
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
#[cfg(feature = "std")]
enum Format {
    /// Progress lines followed by the rendered board.
    #[default]
    Text,
    /// A single JSON report on stdout.
    Json,
}

/// Place a hardcoded fleet on a 10x10 board and print the result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Level::Adventurer)]
    level: Level,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let setup = run_setup(cli.level);

    match cli.format {
        Format::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render_setup(&mut out, &setup)?;
            out.flush()?;
        }
        Format::Json => {
            let report = SetupReport::from(&setup);
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
