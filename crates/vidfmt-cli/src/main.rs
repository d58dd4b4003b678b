//! vidfmt - pixel-format inspection CLI
//!
//! Lists known pixel formats, dumps their descriptors, translates codes
//! between the image-buffer and codec spaces and computes frame layouts.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod report;

#[derive(Parser)]
#[command(name = "vidfmt")]
#[command(author, version, about = "Pixel-format layouts for raw video frames")]
#[command(long_about = "
Inspect raw video pixel formats: plane counts, bits per pixel, chroma
subsampling, line sizes and external format codes.

Examples:
  vidfmt list                           # All known formats
  vidfmt info yuv420p                   # Descriptor dump
  vidfmt info --codec 23 -w 1920        # NV12 by codec code, with line sizes
  vidfmt layout nv12 -w 1920 -H 1080 --align 64
  vidfmt map --image 5                  # Same format in every space
  vidfmt -vv layout pal8 -w 16 -H 16 --json

Environment:
  VIDFMT_LOG    log filter directive (overrides -v)
  VIDFMT_ALIGN  default line alignment for `layout`
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known pixel format
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Display the descriptor of one format
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Compute plane strides and offsets of a frame
    #[command(visible_alias = "l")]
    Layout(LayoutArgs),

    /// Show one format in the internal, image-buffer and codec spaces
    #[command(visible_alias = "m")]
    Map(MapArgs),
}

/// Selects a format by name or by external code.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct FormatArgs {
    /// Canonical format name (e.g. yuv420p, nv12, rgb24)
    name: Option<String>,

    /// Image-buffer format code
    #[arg(long, allow_negative_numbers = true)]
    image: Option<i32>,

    /// Codec pixel-format code
    #[arg(long, allow_negative_numbers = true)]
    codec: Option<i32>,
}

#[derive(Args)]
struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InfoArgs {
    #[command(flatten)]
    format: FormatArgs,

    /// Also print line sizes for this frame width
    #[arg(short, long)]
    width: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LayoutArgs {
    #[command(flatten)]
    format: FormatArgs,

    /// Frame width in pixels
    #[arg(short, long)]
    width: u32,

    /// Frame height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Line alignment in bytes, a power of two (default: $VIDFMT_ALIGN or 1)
    #[arg(short, long)]
    align: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MapArgs {
    #[command(flatten)]
    format: FormatArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Installs the stderr log subscriber.
///
/// `VIDFMT_LOG` takes precedence; otherwise the level follows `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(config::LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List(args) => commands::list::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Layout(args) => commands::layout::run(args, cli.verbose),
        Commands::Map(args) => commands::map::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_layout() {
        let cli = Cli::try_parse_from(["vidfmt", "-vv", "layout", "nv12", "-w", "1920", "-H", "1080"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Layout(args) => {
                assert_eq!(args.format.name.as_deref(), Some("nv12"));
                assert_eq!((args.width, args.height), (1920, 1080));
                assert_eq!(args.align, None);
            }
            _ => panic!("expected layout"),
        }
    }

    #[test]
    fn test_parse_negative_codec() {
        let cli = Cli::try_parse_from(["vidfmt", "map", "--codec", "-1"]).unwrap();
        match cli.command {
            Commands::Map(args) => assert_eq!(args.format.codec, Some(-1)),
            _ => panic!("expected map"),
        }
    }

    #[test]
    fn test_format_selectors_conflict() {
        assert!(Cli::try_parse_from(["vidfmt", "info", "nv12", "--codec", "23"]).is_err());
        assert!(Cli::try_parse_from(["vidfmt", "info"]).is_err());
    }
}
