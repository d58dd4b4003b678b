//! The pixel-format descriptor table.
//!
//! Every format of the closed set in [`PixelFormat`] has exactly one
//! [`PixelDescriptor`] in a compile-time `static` table. The sentinels
//! ([`PixelFormat::Invalid`], [`PixelFormat::User`]) have none.
//!
//! # Bits per pixel
//!
//! Per-plane bit counts are expressed per *luma* pixel, so the chroma planes
//! of subsampled formats carry the subsampled share:
//!
//! ```text
//! yuv420p   Y: 8   U: 8/4 = 2   V: 2     total 12
//! nv12      Y: 8   UV: 2+2 = 4           total 12
//! yuyv422   YUYV: 8 + 4 + 4 = 16         total 16
//! ```
//!
//! The padded counts include storage bits that carry no information, such as
//! the X byte of `rgb32` or the line padding of the IMC formats.
//!
//! # Usage
//!
//! ```rust
//! use vidfmt_core::{descriptor, PixelFormat};
//!
//! let d = descriptor::lookup(PixelFormat::Yuv420p).unwrap();
//! assert_eq!(d.bits_per_pixel_planes(), &[8, 2, 2]);
//! assert_eq!(d.chroma_shift, (1, 1));
//! assert!(descriptor::lookup(PixelFormat::Invalid).is_none());
//! ```

use crate::id::PixelFormat;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Maximum number of planes any format may use.
pub const MAX_PLANES: usize = 4;

/// Layout metadata of one pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDescriptor {
    /// Identity this record describes.
    pub format: PixelFormat,
    /// Canonical, unique name.
    pub name: &'static str,
    /// Number of colour/alpha components (NV12 has 3).
    pub channels: u8,
    /// Number of memory planes (1 packed, 2 semi-planar, 3 planar).
    pub plane_count: u8,
    bits: [u8; MAX_PLANES],
    bits_padded: [u8; MAX_PLANES],
    /// Right shifts applied to luma width/height to get chroma width/height.
    pub chroma_shift: (u8, u8),
    /// Multi-byte components are stored big endian.
    pub big_endian: bool,
    /// Samples are indices into a palette.
    pub has_palette: bool,
    /// Samples are direct colours that may also be treated as palette indices.
    pub pseudo_paletted: bool,
    /// Component values are bit-packed end to end.
    pub bitstream: bool,
    /// Frames live in hardware surfaces.
    ///
    /// No format in the table is hardware-backed, so this is always false.
    /// Hardware codec codes (`VAAPI`, `DXVA2_VLD`) resolve to
    /// [`PixelFormat::Invalid`] instead of getting a descriptor.
    pub hw_accelerated: bool,
    /// Components are split across planes.
    pub planar: bool,
    /// RGB-family format.
    pub rgb: bool,
    /// Carries an alpha component.
    pub alpha: bool,
}

impl PixelDescriptor {
    const fn packed(format: PixelFormat, name: &'static str, channels: u8, bits: u8, padded: u8) -> Self {
        Self {
            format,
            name,
            channels,
            plane_count: 1,
            bits: [bits, 0, 0, 0],
            bits_padded: [padded, 0, 0, 0],
            chroma_shift: (0, 0),
            big_endian: false,
            has_palette: false,
            pseudo_paletted: false,
            bitstream: false,
            hw_accelerated: false,
            planar: false,
            rgb: false,
            alpha: false,
        }
    }

    const fn planar3(format: PixelFormat, name: &'static str, bits: [u8; 3], padded: [u8; 3]) -> Self {
        let mut d = Self::packed(format, name, 3, bits[0], padded[0]);
        d.plane_count = 3;
        d.bits = [bits[0], bits[1], bits[2], 0];
        d.bits_padded = [padded[0], padded[1], padded[2], 0];
        d.planar = true;
        d
    }

    const fn semi_planar(format: PixelFormat, name: &'static str, bits: [u8; 2], padded: [u8; 2]) -> Self {
        let mut d = Self::packed(format, name, 3, bits[0], padded[0]);
        d.plane_count = 2;
        d.bits = [bits[0], bits[1], 0, 0];
        d.bits_padded = [padded[0], padded[1], 0, 0];
        d.planar = true;
        d
    }

    /// Compressed or vendor data: one plane, no per-pixel layout.
    const fn opaque(format: PixelFormat, name: &'static str) -> Self {
        Self::packed(format, name, 1, 0, 0)
    }

    const fn rgb(mut self) -> Self {
        self.rgb = true;
        self
    }

    const fn argb(mut self) -> Self {
        self.rgb = true;
        self.alpha = true;
        self
    }

    const fn with_alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    const fn be(mut self) -> Self {
        self.big_endian = true;
        self
    }

    const fn palette(mut self) -> Self {
        self.has_palette = true;
        self
    }

    const fn pseudo_palette(mut self) -> Self {
        self.pseudo_paletted = true;
        self
    }

    const fn bitstream(mut self) -> Self {
        self.bitstream = true;
        self
    }

    const fn subsampled(mut self, x: u8, y: u8) -> Self {
        self.chroma_shift = (x, y);
        self
    }

    /// Unpadded bits per pixel, one entry per plane.
    #[inline]
    pub fn bits_per_pixel_planes(&self) -> &[u8] {
        &self.bits[..self.plane_count as usize]
    }

    /// Padded bits per pixel, one entry per plane.
    #[inline]
    pub fn bits_per_pixel_padded_planes(&self) -> &[u8] {
        &self.bits_padded[..self.plane_count as usize]
    }

    /// Whether the format has a per-pixel memory layout.
    ///
    /// False for the opaque placeholders (JPEG, camera raw, DNG).
    #[inline]
    pub fn has_layout(&self) -> bool {
        self.bits_padded[0] != 0
    }

    /// Whether `plane` stores subsampled chroma.
    ///
    /// Only planes 1 and 2 of planar YUV formats are subsampled; packed
    /// 4:2:2 formats interleave chroma into plane 0 at luma resolution.
    #[inline]
    pub fn is_chroma_plane(&self, plane: usize) -> bool {
        self.planar && !self.rgb && (plane == 1 || plane == 2) && plane < self.plane_count as usize
    }
}

use PixelFormat as F;

/// The descriptor table, in [`PixelFormat::ALL`] order.
static DESCRIPTORS: [PixelDescriptor; 44] = [
    PixelDescriptor::packed(F::Argb32, "argb32", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Argb32Premultiplied, "argb32_premultiplied", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Rgb32, "rgb32", 3, 24, 32).rgb(),
    PixelDescriptor::packed(F::Rgb24, "rgb24", 3, 24, 24).rgb(),
    PixelDescriptor::packed(F::Rgb565, "rgb565le", 3, 16, 16).rgb(),
    PixelDescriptor::packed(F::Rgb555, "rgb555le", 3, 15, 16).rgb(),
    PixelDescriptor::packed(F::Argb8565Premultiplied, "argb8565_premultiplied", 4, 24, 24).argb(),
    PixelDescriptor::packed(F::Bgra32, "bgra32", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Bgra32Premultiplied, "bgra32_premultiplied", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Bgr32, "bgr32", 3, 24, 32).rgb(),
    PixelDescriptor::packed(F::Bgr24, "bgr24", 3, 24, 24).rgb(),
    PixelDescriptor::packed(F::Bgr565, "bgr565le", 3, 16, 16).rgb(),
    PixelDescriptor::packed(F::Bgr555, "bgr555le", 3, 15, 16).rgb(),
    PixelDescriptor::packed(F::Bgra5658Premultiplied, "bgra5658_premultiplied", 4, 24, 24).argb(),
    PixelDescriptor::packed(F::Rgba32, "rgba32", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Rgba32Premultiplied, "rgba32_premultiplied", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Abgr32, "abgr32", 4, 32, 32).argb(),
    PixelDescriptor::packed(F::Rgb48Le, "rgb48le", 3, 48, 48).rgb(),
    PixelDescriptor::packed(F::Rgb48Be, "rgb48be", 3, 48, 48).rgb().be(),
    PixelDescriptor::packed(F::Rgb332, "rgb332", 3, 8, 8).rgb().pseudo_palette(),
    PixelDescriptor::packed(F::Pal8, "pal8", 1, 8, 8).palette().with_alpha(),
    PixelDescriptor::packed(F::MonoBlack, "monob", 1, 1, 1).bitstream(),
    PixelDescriptor::packed(F::MonoWhite, "monow", 1, 1, 1).bitstream(),
    PixelDescriptor::packed(F::Ayuv444, "ayuv444", 4, 32, 32).with_alpha(),
    PixelDescriptor::packed(F::Ayuv444Premultiplied, "ayuv444_premultiplied", 4, 32, 32).with_alpha(),
    PixelDescriptor::planar3(F::Yuv444p, "yuv444p", [8, 8, 8], [8, 8, 8]),
    PixelDescriptor::planar3(F::Yuv422p, "yuv422p", [8, 4, 4], [8, 4, 4]).subsampled(1, 0),
    PixelDescriptor::planar3(F::Yuv420p, "yuv420p", [8, 2, 2], [8, 2, 2]).subsampled(1, 1),
    PixelDescriptor::planar3(F::Yuv420p16Le, "yuv420p16le", [16, 4, 4], [16, 4, 4]).subsampled(1, 1),
    PixelDescriptor::planar3(F::Yuv420p16Be, "yuv420p16be", [16, 4, 4], [16, 4, 4]).subsampled(1, 1).be(),
    PixelDescriptor::planar3(F::Yv12, "yv12", [8, 2, 2], [8, 2, 2]).subsampled(1, 1),
    PixelDescriptor::packed(F::Uyvy, "uyvy422", 3, 16, 16).subsampled(1, 0),
    PixelDescriptor::packed(F::Yuyv, "yuyv422", 3, 16, 16).subsampled(1, 0),
    PixelDescriptor::semi_planar(F::Nv12, "nv12", [8, 4], [8, 4]).subsampled(1, 1),
    PixelDescriptor::semi_planar(F::Nv21, "nv21", [8, 4], [8, 4]).subsampled(1, 1),
    // IMC chroma lines occupy a full luma stride.
    PixelDescriptor::planar3(F::Imc1, "imc1", [8, 2, 2], [8, 4, 4]).subsampled(1, 1),
    PixelDescriptor::semi_planar(F::Imc2, "imc2", [8, 4], [8, 4]).subsampled(1, 1),
    PixelDescriptor::planar3(F::Imc3, "imc3", [8, 2, 2], [8, 4, 4]).subsampled(1, 1),
    PixelDescriptor::semi_planar(F::Imc4, "imc4", [8, 4], [8, 4]).subsampled(1, 1),
    PixelDescriptor::packed(F::Y8, "gray8", 1, 8, 8),
    PixelDescriptor::packed(F::Y16, "gray16le", 1, 16, 16),
    PixelDescriptor::opaque(F::Jpeg, "jpeg"),
    PixelDescriptor::opaque(F::CameraRaw, "camera_raw"),
    PixelDescriptor::opaque(F::AdobeDng, "adobe_dng"),
];

/// Returns the descriptor of `format`, `None` for the sentinels.
#[inline]
pub fn lookup(format: PixelFormat) -> Option<&'static PixelDescriptor> {
    match format {
        PixelFormat::Invalid | PixelFormat::User => None,
        // Closed-set discriminants start at 1, right after `Invalid`.
        other => DESCRIPTORS.get(other as usize - 1),
    }
}

/// Returns the descriptor whose name is exactly `name`.
pub fn lookup_name(name: &str) -> Option<&'static PixelDescriptor> {
    static BY_NAME: OnceLock<HashMap<&'static str, &'static PixelDescriptor>> = OnceLock::new();
    BY_NAME
        .get_or_init(|| DESCRIPTORS.iter().map(|d| (d.name, d)).collect())
        .get(name)
        .copied()
}

/// The whole descriptor table.
#[inline]
pub fn descriptors() -> &'static [PixelDescriptor] {
    &DESCRIPTORS
}
