//! Stride and chroma geometry derived from a [`PixelDescriptor`].
//!
//! # Line size
//!
//! For plane 0 and every plane stored at luma resolution:
//!
//! ```text
//! bytes_per_line = ceil(width * padded_bits[plane] / 8)
//! ```
//!
//! Subsampled chroma planes store `chroma_width(width)` samples per line, each
//! sample being `padded_bits[plane] << (x_shift + y_shift)` bits wide (the
//! table stores chroma bits per *luma* pixel):
//!
//! ```text
//! yuv420p, width 11:  Y = 11   U = V = ceil(6 * 8 / 8) = 6
//! nv12,    width 11:  Y = 11   UV    = ceil(6 * 16 / 8) = 12
//! ```
//!
//! # Chroma extent
//!
//! `chroma_width(w) = ceil(w / 2^x_shift)`, rounding up so that odd luma
//! sizes never under-allocate the chroma plane.

use crate::descriptor::PixelDescriptor;

/// `ceil(value / 2^shift)`.
///
/// Defined for every `shift`: from 32 on the result is 1 for any non-zero
/// `value`.
#[inline]
pub const fn shift_ceil(value: u32, shift: u8) -> u32 {
    match shift {
        0 => value,
        s if s >= 32 => (value != 0) as u32,
        // u64 keeps `value + 2^shift - 1` from overflowing at u32::MAX.
        s => ((value as u64 + (1u64 << s) - 1) >> s) as u32,
    }
}

impl PixelDescriptor {
    /// Width of the chroma planes for a luma width.
    #[inline]
    pub fn chroma_width(&self, luma_width: u32) -> u32 {
        shift_ceil(luma_width, self.chroma_shift.0)
    }

    /// Height of the chroma planes for a luma height.
    #[inline]
    pub fn chroma_height(&self, luma_height: u32) -> u32 {
        shift_ceil(luma_height, self.chroma_shift.1)
    }

    /// Samples per line of `plane` for a frame `width` pixels wide.
    ///
    /// # Panics
    ///
    /// If `plane` is not below [`plane_count`](Self::plane_count).
    pub fn plane_width(&self, width: u32, plane: usize) -> u32 {
        self.check_plane(plane);
        if self.is_chroma_plane(plane) {
            self.chroma_width(width)
        } else {
            width
        }
    }

    /// Lines of `plane` for a frame `height` pixels high.
    ///
    /// # Panics
    ///
    /// If `plane` is not below [`plane_count`](Self::plane_count).
    pub fn plane_height(&self, height: u32, plane: usize) -> u32 {
        self.check_plane(plane);
        if self.is_chroma_plane(plane) {
            self.chroma_height(height)
        } else {
            height
        }
    }

    /// Bytes in one line of `plane`, without alignment padding.
    ///
    /// Returns `None` for formats without a per-pixel layout.
    ///
    /// # Panics
    ///
    /// If `plane` is not below [`plane_count`](Self::plane_count).
    pub fn bytes_per_line(&self, width: u32, plane: usize) -> Option<usize> {
        self.check_plane(plane);
        if !self.has_layout() {
            return None;
        }
        let padded = self.bits_per_pixel_padded_planes()[plane] as u64;
        let (samples, sample_bits) = if self.is_chroma_plane(plane) {
            let (xs, ys) = self.chroma_shift;
            (self.chroma_width(width) as u64, padded << (xs + ys))
        } else {
            (width as u64, padded)
        };
        usize::try_from((samples * sample_bits).div_ceil(8)).ok()
    }

    /// Sum of unpadded bits per pixel over all planes.
    #[inline]
    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel_planes().iter().map(|&b| b as u32).sum()
    }

    /// Unpadded bits per pixel of one plane.
    #[inline]
    pub fn bits_per_pixel_plane(&self, plane: usize) -> u32 {
        self.check_plane(plane);
        self.bits_per_pixel_planes()[plane] as u32
    }

    /// Sum of padded bits per pixel over all planes.
    #[inline]
    pub fn bits_per_pixel_padded(&self) -> u32 {
        self.bits_per_pixel_padded_planes().iter().map(|&b| b as u32).sum()
    }

    /// Padded bits per pixel of one plane.
    #[inline]
    pub fn bits_per_pixel_padded_plane(&self, plane: usize) -> u32 {
        self.check_plane(plane);
        self.bits_per_pixel_padded_planes()[plane] as u32
    }

    /// `ceil(bits_per_pixel() / 8)`.
    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel().div_ceil(8)
    }

    /// `ceil(bits_per_pixel_plane(plane) / 8)`.
    #[inline]
    pub fn bytes_per_pixel_plane(&self, plane: usize) -> u32 {
        self.bits_per_pixel_plane(plane).div_ceil(8)
    }

    #[inline]
    #[track_caller]
    fn check_plane(&self, plane: usize) {
        assert!(
            plane < self.plane_count as usize,
            "plane {plane} out of range for {} ({} planes)",
            self.name,
            self.plane_count
        );
    }
}
