//! Layout command
//!
//! Computes plane strides, sizes and offsets of one frame buffer.

use crate::LayoutArgs;
use crate::config;
use crate::report::LayoutReport;
use anyhow::{Context, Result};
use tracing::{debug, trace};
use vidfmt_core::FrameLayout;

pub fn run(args: LayoutArgs, verbose: u8) -> Result<()> {
    let fmt = super::resolve_format(&args.format)?;
    let align = config::line_align(args.align);
    trace!(format = %fmt, width = args.width, height = args.height, align, "layout");

    let layout = FrameLayout::new(&fmt, args.width, args.height, align)
        .with_context(|| format!("Cannot lay out {}x{} {}", args.width, args.height, fmt))?;
    debug!(planes = layout.planes().len(), "layout ready");

    if args.json {
        return super::print_json(&LayoutReport::new(&layout));
    }

    println!("{} {}x{} (align {})", layout.format(), layout.width(), layout.height(), layout.align());
    println!("  {:<5} {:>8} {:>8} {:>8} {:>12} {:>12}", "PLANE", "STRIDE", "WIDTH", "HEIGHT", "OFFSET", "SIZE");
    let image_planes = fmt.plane_count() as usize;
    for (i, plane) in layout.planes().iter().enumerate() {
        let label = if i < image_planes { i.to_string() } else { "pal".to_string() };
        println!(
            "  {:<5} {:>8} {:>8} {:>8} {:>12} {:>12}",
            label, plane.stride, plane.width, plane.height, plane.offset, plane.size
        );
    }
    println!("  Total:      {}", super::format_size(layout.total_size()));
    if verbose > 0 {
        println!("  Bytes:      {}", layout.total_size());
    }
    Ok(())
}
