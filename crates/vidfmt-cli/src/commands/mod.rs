//! CLI command implementations

pub mod info;
pub mod layout;
pub mod list;
pub mod map;

use crate::FormatArgs;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::trace;
use vidfmt_core::{CodecFormat, PixelFormat, VideoFormat};

/// Resolve the format selected on the command line.
///
/// Unknown names are an error; unknown codes resolve to an invalid format so
/// that `info` and `map` can report them.
pub fn resolve_format(args: &FormatArgs) -> Result<VideoFormat> {
    let fmt = match (&args.name, args.image, args.codec) {
        (Some(name), _, _) => {
            let id: PixelFormat = name
                .parse()
                .with_context(|| "Run `vidfmt list` for the known names")?;
            VideoFormat::new(id)
        }
        (None, Some(code), _) => VideoFormat::from_image_code(code),
        (None, None, Some(code)) => VideoFormat::from_codec_format(CodecFormat(code)),
        (None, None, None) => bail!("Specify a format name, --image or --codec"),
    };
    trace!(?args, format = %fmt, "resolved format");
    Ok(fmt)
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Format a byte count for humans.
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// `Some(n)` as `n`, `None` as `-`.
pub fn opt_code(code: Option<i32>) -> String {
    code.map_or_else(|| "-".to_string(), |c| c.to_string())
}
