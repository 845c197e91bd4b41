//! Binary entrypoint for the cave_crawl text adventure.
//!
//! Runs the built-in cave world, or a TOML world given on the command line.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use cave_crawl::engine::{Output, OutputBlock};
use cave_crawl::logutil::escape_log;
use cave_crawl::{
    Flow, GameState, PROMPT, WELCOME, cave_world, load_world_from_file, read_input_line,
};

#[derive(Parser)]
#[command(name = "cave_crawl")]
#[command(about = "Explore a small cave, one command at a time")]
#[command(version)]
struct Cli {
    /// Optional TOML world file; the built-in cave is used when omitted
    world: Option<PathBuf>,

    /// Verbose logging on stderr (-v, -vv, -vvv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // Stdout belongs to the game; keep the logger quiet unless asked.
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.target(env_logger::Target::Stderr);
    builder.init();
}

fn flush_output(stdout: &mut impl Write, out: Output) -> io::Result<()> {
    for block in out.blocks {
        match block {
            OutputBlock::Text(line) => writeln!(stdout, "{}", line)?,
            OutputBlock::Rejection(line) => {
                debug!("rejected: {}", escape_log(&line));
                writeln!(stdout, "{}", line)?;
            }
        }
    }
    stdout.flush()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let world = match &cli.world {
        Some(path) => load_world_from_file(path)
            .with_context(|| format!("failed to load world file '{}'", path.display()))?,
        None => cave_world(),
    };
    info!("player '{}' enters the world", world.player.name);

    let mut state = GameState::new(world);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", WELCOME)?;

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let (out, flow) = match read_input_line(&mut input)? {
            Some(line) => state.step(&line),
            None => {
                // Keep "Goodbye!" off the prompt line.
                writeln!(stdout)?;
                state.end_of_input()
            }
        };

        flush_output(&mut stdout, out)?;

        if flow == Flow::Stopped {
            break;
        }
    }

    Ok(())
}
