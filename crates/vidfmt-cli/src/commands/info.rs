//! Format info command.
//!
//! Dumps the descriptor of one format: channels, planes, per-plane bits,
//! chroma subsampling, flags and external codes.

use crate::InfoArgs;
use crate::report::FormatReport;
use anyhow::Result;
use tracing::debug;

/// Runs the info command.
///
/// With `--width`, line sizes are printed per plane.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    let fmt = super::resolve_format(&args.format)?;
    let report = FormatReport::new(&fmt, args.width);
    debug!(format = %fmt, planes = report.planes.len(), "format info");

    if args.json {
        return super::print_json(&report);
    }
    print_text(&report, args.width, verbose);
    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(report: &FormatReport, width: Option<u32>, verbose: u8) {
    let mapping = &report.mapping;
    println!("{}", mapping.format);
    if !mapping.valid {
        println!("  (no matching format)");
        return;
    }
    println!("  Channels:   {}", report.channels);
    println!("  Planes:     {}", report.planes.len());
    println!("  Bits/pixel: {} ({} padded)", report.bits_per_pixel, report.bits_per_pixel_padded);
    println!("  Bytes/px:   {}", report.bytes_per_pixel);
    if let Some((x, y)) = report.chroma_shift {
        if x > 0 || y > 0 {
            println!("  Chroma:     1/{} x 1/{}", 1u32 << x, 1u32 << y);
        }
    }
    let flags = report.flags.names();
    if !flags.is_empty() {
        println!("  Flags:      {}", flags.join(", "));
    }
    println!("  Image code: {}", super::opt_code(mapping.image));
    println!("  Codec code: {}", super::opt_code(mapping.codec));

    if verbose > 0 || width.is_some() {
        for (i, plane) in report.planes.iter().enumerate() {
            print!("  Plane {i}:    {} bits ({} padded), {} B/px", plane.bits, plane.bits_padded, plane.bytes_per_pixel);
            match (width, plane.bytes_per_line) {
                (Some(w), Some(line)) => println!(", {line} B/line at width {w}"),
                (Some(_), None) => println!(", no layout"),
                _ => println!(),
            }
        }
    }
}
