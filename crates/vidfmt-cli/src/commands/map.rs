//! Map command
//!
//! Shows one format in the internal, image-buffer and codec spaces.

use crate::MapArgs;
use crate::report::MappingReport;
use anyhow::Result;
use tracing::info;

pub fn run(args: MapArgs, verbose: u8) -> Result<()> {
    let fmt = super::resolve_format(&args.format)?;
    let report = MappingReport::new(&fmt);
    if !report.valid {
        info!(image = ?args.format.image, codec = ?args.format.codec, "code has no internal equivalent");
    }

    if args.json {
        return super::print_json(&report);
    }

    println!("  Internal:   {}", report.format);
    println!("  Image:      {}", super::opt_code(report.image));
    println!("  Codec:      {}", super::opt_code(report.codec));
    if verbose > 0 {
        if let Some(image) = fmt.image_format() {
            println!("  Image enum: {:?}", image);
        }
        if let Some(codec) = fmt.codec_format() {
            println!("  Hardware:   {}", codec.is_hardware());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatArgs;

    fn map_args(name: Option<&str>, codec: Option<i32>, json: bool) -> MapArgs {
        MapArgs {
            format: FormatArgs {
                name: name.map(str::to_string),
                image: None,
                codec,
            },
            json,
        }
    }

    #[test]
    fn test_run_known_and_unknown() {
        run(map_args(Some("rgb24"), None, false), 1).unwrap();
        run(map_args(None, Some(23), true), 0).unwrap();
        // Hardware codes have no layout but still map to "invalid".
        run(map_args(None, Some(44), false), 0).unwrap();
    }

    #[test]
    fn test_run_unknown_name_fails() {
        assert!(run(map_args(Some("RGB24"), None, false), 0).is_err());
    }
}
