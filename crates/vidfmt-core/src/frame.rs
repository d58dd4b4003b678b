//! Per-frame memory plans.
//!
//! A [`FrameLayout`] turns a [`VideoFormat`] and a frame size into the line
//! sizes and plane offsets of one contiguous buffer, the way decoders fill
//! their line-size and plane-pointer arrays before allocating.
//!
//! Lines are padded up to `align` bytes; planes follow each other without
//! gaps. Paletted formats get one extra plane holding 256 `u32` entries.
//!
//! # Usage
//!
//! ```rust
//! use vidfmt_core::{FrameLayout, PixelFormat, VideoFormat};
//!
//! let fmt = VideoFormat::new(PixelFormat::Yuv420p);
//! let layout = FrameLayout::new(&fmt, 1920, 1080, 32).unwrap();
//! assert_eq!(layout.planes().len(), 3);
//! assert_eq!(layout.planes()[1].stride, 960);
//! assert_eq!(layout.total_size(), 1920 * 1080 * 3 / 2);
//! ```

use crate::error::{Error, Result};
use crate::id::PixelFormat;
use crate::video_format::VideoFormat;
use tracing::debug;

/// Size in bytes of the palette plane appended for paletted formats.
pub const PALETTE_SIZE: usize = 256 * 4;

/// Placement of one plane inside a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlaneLayout {
    /// Bytes from one line to the next, a multiple of the alignment
    pub stride: usize,
    /// Samples per line
    pub width: u32,
    /// Number of lines
    pub height: u32,
    /// Byte offset of the first line from the buffer start
    pub offset: usize,
    /// `stride * height`
    pub size: usize,
}

/// Line sizes and plane offsets of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameLayout {
    format: PixelFormat,
    width: u32,
    height: u32,
    align: usize,
    planes: Vec<PlaneLayout>,
}

impl FrameLayout {
    /// Computes the layout of a `width` x `height` frame.
    ///
    /// `align` is the line alignment in bytes and must be a power of two;
    /// `1` packs lines without padding.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAlignment`] if `align` is not a power of two
    /// - [`Error::InvalidDimensions`] if either dimension is zero
    /// - [`Error::NoLayout`] for invalid, user and opaque formats
    /// - [`Error::SizeOverflow`] if the buffer size does not fit in `usize`
    pub fn new(format: &VideoFormat, width: u32, height: u32, align: usize) -> Result<Self> {
        if !align.is_power_of_two() {
            return Err(Error::InvalidAlignment { align });
        }
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero-sized frame"));
        }
        let desc = format.layout()?;
        let overflow = || Error::SizeOverflow {
            width,
            height,
            format: format.pixel_format(),
        };

        let mut planes = Vec::with_capacity(desc.plane_count as usize + 1);
        let mut offset = 0usize;
        for plane in 0..desc.plane_count as usize {
            let line = desc.bytes_per_line(width, plane).ok_or_else(overflow)?;
            let stride = align_up(line, align).ok_or_else(overflow)?;
            let lines = desc.plane_height(height, plane);
            let size = stride.checked_mul(lines as usize).ok_or_else(overflow)?;
            planes.push(PlaneLayout {
                stride,
                width: desc.plane_width(width, plane),
                height: lines,
                offset,
                size,
            });
            offset = offset.checked_add(size).ok_or_else(overflow)?;
        }

        if desc.has_palette {
            offset.checked_add(PALETTE_SIZE).ok_or_else(overflow)?;
            planes.push(PlaneLayout {
                stride: PALETTE_SIZE,
                width: 256,
                height: 1,
                offset,
                size: PALETTE_SIZE,
            });
        }

        let layout = Self {
            format: format.pixel_format(),
            width,
            height,
            align,
            planes,
        };
        debug!(
            format = %layout.format,
            width,
            height,
            align,
            total = layout.total_size(),
            "computed frame layout"
        );
        Ok(layout)
    }

    /// Format the layout was computed for.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Line alignment in bytes.
    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }

    /// Image planes, followed by the palette plane for paletted formats.
    #[inline]
    pub fn planes(&self) -> &[PlaneLayout] {
        &self.planes
    }

    /// Line sizes of all planes, in plane order.
    pub fn strides(&self) -> Vec<usize> {
        self.planes.iter().map(|p| p.stride).collect()
    }

    /// Bytes needed to hold the whole frame.
    pub fn total_size(&self) -> usize {
        self.planes.last().map_or(0, |p| p.offset + p.size)
    }
}

fn align_up(value: usize, align: usize) -> Option<usize> {
    Some(value.checked_add(align - 1)? & !(align - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(format: PixelFormat, w: u32, h: u32, align: usize) -> Result<FrameLayout> {
        FrameLayout::new(&VideoFormat::new(format), w, h, align)
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 16), Some(0));
        assert_eq!(align_up(1, 16), Some(16));
        assert_eq!(align_up(16, 16), Some(16));
        assert_eq!(align_up(17, 1), Some(17));
        assert_eq!(align_up(usize::MAX, 2), None);
    }

    #[test]
    fn test_yuv420p_packed() {
        let l = layout(PixelFormat::Yuv420p, 11, 9, 1).unwrap();
        let p = l.planes();
        assert_eq!(p.len(), 3);
        assert_eq!((p[0].stride, p[0].width, p[0].height), (11, 11, 9));
        assert_eq!((p[1].stride, p[1].width, p[1].height), (6, 6, 5));
        assert_eq!(p[1].offset, 99);
        assert_eq!(p[2].offset, 99 + 30);
        assert_eq!(l.total_size(), 99 + 30 + 30);
    }

    #[test]
    fn test_aligned_strides() {
        let l = layout(PixelFormat::Yuv420p, 11, 9, 16).unwrap();
        assert_eq!(l.strides(), vec![16, 16, 16]);
        assert_eq!(l.total_size(), 16 * 9 + 16 * 5 * 2);
        for p in l.planes() {
            assert_eq!(p.stride % 16, 0);
            assert_eq!(p.offset % 16, 0);
        }
    }

    #[test]
    fn test_nv12() {
        let l = layout(PixelFormat::Nv12, 1920, 1080, 64).unwrap();
        let p = l.planes();
        assert_eq!(p.len(), 2);
        assert_eq!(p[1].stride, 1920);
        assert_eq!(p[1].height, 540);
        assert_eq!(l.total_size(), 1920 * 1080 * 3 / 2);
    }

    #[test]
    fn test_packed_rgb() {
        let l = layout(PixelFormat::Rgb24, 10, 4, 4).unwrap();
        assert_eq!(l.strides(), vec![32]);
        assert_eq!(l.total_size(), 128);
    }

    #[test]
    fn test_palette_plane() {
        let l = layout(PixelFormat::Pal8, 10, 10, 1).unwrap();
        let p = l.planes();
        assert_eq!(p.len(), 2);
        assert_eq!(p[1].offset, 100);
        assert_eq!(p[1].size, PALETTE_SIZE);
        assert_eq!(l.total_size(), 100 + PALETTE_SIZE);

        // Pseudo-paletted formats carry direct colour.
        let l = layout(PixelFormat::Rgb332, 10, 10, 1).unwrap();
        assert_eq!(l.planes().len(), 1);
    }

    #[test]
    fn test_invalid_alignment() {
        assert_eq!(
            layout(PixelFormat::Rgb24, 4, 4, 0),
            Err(Error::InvalidAlignment { align: 0 })
        );
        assert_eq!(
            layout(PixelFormat::Rgb24, 4, 4, 12),
            Err(Error::InvalidAlignment { align: 12 })
        );
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            layout(PixelFormat::Rgb24, 0, 4, 1),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            layout(PixelFormat::Rgb24, 4, 0, 1),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_no_layout() {
        for f in [PixelFormat::Invalid, PixelFormat::User, PixelFormat::Jpeg, PixelFormat::AdobeDng] {
            assert!(layout(f, 4, 4, 1).unwrap_err().is_no_layout(), "{f}");
        }
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            layout(PixelFormat::Rgb48Le, u32::MAX, u32::MAX, 1),
            Err(Error::SizeOverflow { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_only() {
        let l = layout(PixelFormat::Nv12, 4, 2, 1).unwrap();
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json["format"], "nv12");
        assert_eq!(json["planes"][1]["offset"], 8);

        // Layouts only come out of `FrameLayout::new`. This resolves only
        // while no `DeserializeOwned` impl exists for the two types.
        trait NotDeserialize<A> {
            fn check() {}
        }
        impl<T: ?Sized> NotDeserialize<()> for T {}
        struct Owned;
        impl<T: ?Sized + serde::de::DeserializeOwned> NotDeserialize<Owned> for T {}
        <FrameLayout as NotDeserialize<_>>::check();
        <PlaneLayout as NotDeserialize<_>>::check();
    }
}
