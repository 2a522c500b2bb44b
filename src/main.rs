//! CLI for maze generation

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use mazegen::{draw_ascii, draw_svg, strhash, MazeGenerator, Shuffle, SvgOptions};
use simple_logger::SimpleLogger;

/// Stream state used when no `-r` seed is given
const DEFAULT_SEED: u64 = 1;

/// Perfect maze generator with ASCII and SVG output
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Show version and exit
    #[arg(short = 'v')]
    version: bool,

    /// Maze width in rooms
    #[arg(short = 'w', default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Maze height in rooms
    #[arg(short = 'h', default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Random seed, any string
    #[arg(short = 'r')]
    seed: Option<String>,

    /// Output format
    #[arg(short = 'o', value_enum, default_value_t = Output::Ascii)]
    output: Output,

    /// Corridor width in pixels (SVG output)
    #[arg(short = 'c', default_value_t = 5)]
    corridor_width: u32,

    /// Pen radius in pixels (SVG output)
    #[arg(short = 'p', default_value_t = 1)]
    pen_radius: u32,

    /// Foreground colour, any CSS color string (SVG output)
    #[arg(short = 'f', default_value = "black")]
    fg_color: String,

    /// Order in which the exits of each room are walked
    #[arg(long, value_enum, default_value_t = ShuffleArg::Rejection)]
    shuffle: ShuffleArg,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Output {
    Ascii,
    Svg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShuffleArg {
    /// Compatible with mazes of earlier releases
    Rejection,
    /// Unbiased exit order
    FisherYates,
}

impl From<ShuffleArg> for Shuffle {
    fn from(arg: ShuffleArg) -> Self {
        match arg {
            ShuffleArg::Rejection => Shuffle::Rejection,
            ShuffleArg::FisherYates => Shuffle::FisherYates,
        }
    }
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .without_timestamps()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to init logger")?;

    if args.version {
        println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let seed = args.seed.as_deref().map_or(DEFAULT_SEED, strhash);
    log::debug!("Seed {:?} -> {:#018x}", args.seed, seed);

    let maze = MazeGenerator::new(seed)
        .shuffle(args.shuffle.into())
        .generate_maze(args.width, args.height)?;

    let mut out = BufWriter::new(io::stdout().lock());
    match args.output {
        Output::Ascii => draw_ascii(&maze, "#", " ", &mut out)?,
        Output::Svg => {
            let options = SvgOptions {
                pen_radius: args.pen_radius,
                corridor_width: args.corridor_width,
                fg_color: args.fg_color,
            };
            draw_svg(&maze, &options, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}
