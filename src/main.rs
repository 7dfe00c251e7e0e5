extern crate clap;
extern crate failure;
extern crate lcd;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use failure::ResultExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lcd")]
#[command(about = "Draw instructions onto a pixel screen and count the lit pixels")]
struct Cli {
    /// Screen width in pixels
    #[arg(long, default_value_t = lcd::DEFAULT_WIDTH)]
    width: usize,

    /// Screen height in pixels
    #[arg(long, default_value_t = lcd::DEFAULT_HEIGHT)]
    height: usize,

    /// Print only the lit pixel count
    #[arg(short, long)]
    quiet: bool,

    /// Instruction file, one per line (stdin if omitted)
    input: Option<PathBuf>,
}

fn main() -> Result<(), failure::Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match cli.input {
        Some(ref path) => {
            fs::read_to_string(path)
                .with_context(|_| format!("Could not read {}", path.display()))?
        },

        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)
                .context("Could not read stdin")?;
            buf
        },
    };

    info!(width = cli.width, height = cli.height, "running program");

    let screen = lcd::solve(cli.width, cli.height, &input)?;

    if !cli.quiet {
        print!("{}", screen);
    }
    println!("{}", screen.lit_count());

    Ok(())
}
