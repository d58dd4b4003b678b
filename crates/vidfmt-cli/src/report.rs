//! Serializable views of core types for `--json` output.

use serde::Serialize;
use vidfmt_core::{FrameLayout, PixelFormat, VideoFormat};

/// Format identity in all three spaces.
#[derive(Debug, Serialize)]
pub struct MappingReport {
    pub format: PixelFormat,
    pub valid: bool,
    pub name: &'static str,
    pub image: Option<i32>,
    pub codec: Option<i32>,
}

impl MappingReport {
    pub fn new(fmt: &VideoFormat) -> Self {
        Self {
            format: fmt.pixel_format(),
            valid: fmt.is_valid(),
            name: fmt.name(),
            image: fmt.image_format().map(|f| f.code()),
            codec: fmt.codec_format().map(|c| c.code()),
        }
    }
}

/// Boolean descriptor flags.
#[derive(Debug, Default, Serialize)]
pub struct Flags {
    pub planar: bool,
    pub rgb: bool,
    pub alpha: bool,
    pub big_endian: bool,
    pub palette: bool,
    pub pseudo_paletted: bool,
    pub bitstream: bool,
    pub hw_accelerated: bool,
}

impl Flags {
    fn new(fmt: &VideoFormat) -> Self {
        Self {
            planar: fmt.is_planar(),
            rgb: fmt.is_rgb(),
            alpha: fmt.has_alpha(),
            big_endian: fmt.is_big_endian(),
            palette: fmt.has_palette(),
            pseudo_paletted: fmt.is_pseudo_paletted(),
            bitstream: fmt.is_bitstream(),
            hw_accelerated: fmt.is_hw_accelerated(),
        }
    }

    /// Names of the flags that are set.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.planar, "planar"),
            (self.rgb, "rgb"),
            (self.alpha, "alpha"),
            (self.big_endian, "big-endian"),
            (self.palette, "palette"),
            (self.pseudo_paletted, "pseudo-paletted"),
            (self.bitstream, "bitstream"),
            (self.hw_accelerated, "hw-accelerated"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// One plane of a descriptor dump.
#[derive(Debug, Serialize)]
pub struct PlaneReport {
    pub bits: u32,
    pub bits_padded: u32,
    pub bytes_per_pixel: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_per_line: Option<usize>,
}

/// Full descriptor dump.
#[derive(Debug, Serialize)]
pub struct FormatReport {
    #[serde(flatten)]
    pub mapping: MappingReport,
    pub channels: u32,
    pub bits_per_pixel: u32,
    pub bits_per_pixel_padded: u32,
    pub bytes_per_pixel: u32,
    pub chroma_shift: Option<(u8, u8)>,
    pub flags: Flags,
    pub planes: Vec<PlaneReport>,
}

impl FormatReport {
    /// Builds the dump; line sizes are included when `width` is given.
    pub fn new(fmt: &VideoFormat, width: Option<u32>) -> Self {
        let planes = (0..fmt.plane_count() as usize)
            .map(|p| PlaneReport {
                bits: fmt.bits_per_pixel_plane(p),
                bits_padded: fmt.bits_per_pixel_padded_plane(p),
                bytes_per_pixel: fmt.bytes_per_pixel_plane(p),
                bytes_per_line: width.and_then(|w| fmt.try_bytes_per_line(w, p).ok()),
            })
            .collect();
        Self {
            mapping: MappingReport::new(fmt),
            channels: fmt.channels(),
            bits_per_pixel: fmt.bits_per_pixel(),
            bits_per_pixel_padded: fmt.bits_per_pixel_padded(),
            bytes_per_pixel: fmt.bytes_per_pixel(),
            chroma_shift: fmt.descriptor().map(|d| d.chroma_shift),
            flags: Flags::new(fmt),
            planes,
        }
    }
}

/// Short row of `vidfmt list`.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    #[serde(flatten)]
    pub mapping: MappingReport,
    pub planes: u32,
    pub bits_per_pixel: u32,
}

impl ListEntry {
    pub fn new(fmt: &VideoFormat) -> Self {
        Self {
            mapping: MappingReport::new(fmt),
            planes: fmt.plane_count(),
            bits_per_pixel: fmt.bits_per_pixel(),
        }
    }
}

/// Frame layout plus its total size.
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    #[serde(flatten)]
    pub layout: &'a FrameLayout,
    pub total_size: usize,
}

impl<'a> LayoutReport<'a> {
    pub fn new(layout: &'a FrameLayout) -> Self {
        Self {
            layout,
            total_size: layout.total_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidfmt_core::CodecFormat;

    #[test]
    fn test_mapping_json() {
        let fmt = VideoFormat::from_codec_format(CodecFormat::YUV420P);
        let json = serde_json::to_value(MappingReport::new(&fmt)).unwrap();
        assert_eq!(json["format"], "yuv420p");
        assert_eq!(json["valid"], true);
        assert_eq!(json["codec"], 0);
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_invalid_mapping_json() {
        let fmt = VideoFormat::from_codec_format(CodecFormat::VAAPI);
        let json = serde_json::to_value(MappingReport::new(&fmt)).unwrap();
        assert_eq!(json["format"], "invalid");
        assert_eq!(json["valid"], false);
        assert_eq!(json["name"], "");
    }

    #[test]
    fn test_format_report_planes() {
        let fmt = VideoFormat::new(PixelFormat::Nv12);
        let report = FormatReport::new(&fmt, Some(11));
        assert_eq!(report.planes.len(), 2);
        assert_eq!(report.planes[1].bytes_per_line, Some(12));
        assert_eq!(report.chroma_shift, Some((1, 1)));
        assert_eq!(report.flags.names(), vec!["planar"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], "nv12");
        assert_eq!(json["planes"][0]["bytes_per_line"], 11);
    }

    #[test]
    fn test_layout_json() {
        let fmt = VideoFormat::new(PixelFormat::Pal8);
        let layout = FrameLayout::new(&fmt, 4, 4, 1).unwrap();
        let json = serde_json::to_value(LayoutReport::new(&layout)).unwrap();
        assert_eq!(json["format"], "pal8");
        assert_eq!(json["total_size"], 16 + 1024);
        assert_eq!(json["planes"].as_array().unwrap().len(), 2);
    }
}
