//! List command
//!
//! Prints every format of the closed set with its plane count, bits per
//! pixel and external codes.

use crate::ListArgs;
use crate::report::ListEntry;
use anyhow::Result;
use tracing::debug;
use vidfmt_core::{PixelFormat, VideoFormat};

pub fn run(args: ListArgs, verbose: u8) -> Result<()> {
    let entries: Vec<ListEntry> = PixelFormat::ALL
        .iter()
        .map(|&f| ListEntry::new(&VideoFormat::new(f)))
        .collect();
    debug!(count = entries.len(), "listing formats");

    if args.json {
        return super::print_json(&entries);
    }

    println!("{:<24} {:>6} {:>4} {:>6} {:>6}", "NAME", "PLANES", "BPP", "IMAGE", "CODEC");
    for e in &entries {
        println!(
            "{:<24} {:>6} {:>4} {:>6} {:>6}",
            e.mapping.name,
            e.planes,
            e.bits_per_pixel,
            super::opt_code(e.mapping.image),
            super::opt_code(e.mapping.codec),
        );
    }
    if verbose > 0 {
        println!();
        println!("{} formats", entries.len());
    }
    Ok(())
}
