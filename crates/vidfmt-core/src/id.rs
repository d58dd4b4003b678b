//! Pixel-format identities.
//!
//! [`PixelFormat`] is the internal naming space of this crate. It is a closed
//! enumeration of the layouts the descriptor table knows about, plus two
//! sentinels:
//!
//! - [`PixelFormat::Invalid`] - nothing resolved (the default)
//! - [`PixelFormat::User`] - an application-defined format this crate has no
//!   metadata for
//!
//! # Naming
//!
//! Packed RGB variants are named after their byte order in memory, so
//! [`PixelFormat::Argb32`] stores bytes `A, R, G, B` on every host. Image
//! buffer codes built on host-endian words are translated accordingly (see
//! [`translate`](crate::translate)). YUV formats follow the
//! FourCC conventions (`Yv12` is `Yuv420p` with the chroma planes swapped,
//! `Imc1`..`Imc4` pad chroma lines to the luma stride).
//!
//! # Usage
//!
//! ```rust
//! use vidfmt_core::PixelFormat;
//!
//! let fmt: PixelFormat = "nv12".parse().unwrap();
//! assert_eq!(fmt, PixelFormat::Nv12);
//! assert!(fmt.is_planar());
//! assert_eq!(fmt.to_string(), "nv12");
//! ```

use crate::descriptor::{self, PixelDescriptor};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Internal pixel-format identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PixelFormat {
    /// No format resolved.
    #[default]
    Invalid,

    // Packed RGB.
    /// 32-bit A, R, G, B.
    Argb32,
    /// 32-bit A, R, G, B with premultiplied colour.
    Argb32Premultiplied,
    /// 32-bit X, R, G, B (padding byte ignored).
    Rgb32,
    /// 24-bit R, G, B.
    Rgb24,
    /// 16-bit 5:6:5 RGB, little endian.
    Rgb565,
    /// 16-bit X:5:5:5 RGB, little endian.
    Rgb555,
    /// 24-bit 8:5:6:5 ARGB, premultiplied.
    Argb8565Premultiplied,
    /// 32-bit B, G, R, A.
    Bgra32,
    /// 32-bit B, G, R, A with premultiplied colour.
    Bgra32Premultiplied,
    /// 32-bit B, G, R, X.
    Bgr32,
    /// 24-bit B, G, R.
    Bgr24,
    /// 16-bit 5:6:5 BGR, little endian.
    Bgr565,
    /// 16-bit X:5:5:5 BGR, little endian.
    Bgr555,
    /// 24-bit 5:6:5:8 BGRA, premultiplied.
    Bgra5658Premultiplied,
    /// 32-bit R, G, B, A.
    Rgba32,
    /// 32-bit R, G, B, A with premultiplied colour.
    Rgba32Premultiplied,
    /// 32-bit A, B, G, R.
    Abgr32,
    /// 48-bit R, G, B, 16-bit little-endian components.
    Rgb48Le,
    /// 48-bit R, G, B, 16-bit big-endian components.
    Rgb48Be,
    /// 8-bit 3:3:2 RGB (pseudo-paletted).
    Rgb332,

    // Palette and bitstream.
    /// 8-bit palette index.
    Pal8,
    /// 1 bit per pixel, 0 is black, most significant bit first.
    MonoBlack,
    /// 1 bit per pixel, 0 is white, most significant bit first.
    MonoWhite,

    // YUV.
    /// Packed 4:4:4 A, Y, U, V.
    Ayuv444,
    /// Packed 4:4:4 A, Y, U, V, premultiplied.
    Ayuv444Premultiplied,
    /// Planar 4:4:4 Y, U, V.
    Yuv444p,
    /// Planar 4:2:2 Y, U, V.
    Yuv422p,
    /// Planar 4:2:0 Y, U, V.
    Yuv420p,
    /// Planar 4:2:0, 16-bit little-endian samples.
    Yuv420p16Le,
    /// Planar 4:2:0, 16-bit big-endian samples.
    Yuv420p16Be,
    /// Planar 4:2:0 Y, V, U.
    Yv12,
    /// Packed 4:2:2 U, Y0, V, Y1.
    Uyvy,
    /// Packed 4:2:2 Y0, U, Y1, V.
    Yuyv,
    /// Semi-planar 4:2:0, interleaved U/V plane.
    Nv12,
    /// Semi-planar 4:2:0, interleaved V/U plane.
    Nv21,
    /// Planar 4:2:0 Y, V, U; chroma lines padded to the luma stride.
    Imc1,
    /// 4:2:0 Y plane plus one plane holding V and U half-lines side by side.
    Imc2,
    /// Planar 4:2:0 Y, U, V; chroma lines padded to the luma stride.
    Imc3,
    /// Like [`Imc2`](Self::Imc2) with U and V swapped.
    Imc4,

    // Grey.
    /// Single 8-bit luma plane.
    Y8,
    /// Single 16-bit little-endian luma plane.
    Y16,

    // Opaque.
    /// Compressed JPEG payload.
    Jpeg,
    /// Vendor camera raw data.
    CameraRaw,
    /// Adobe DNG raw data.
    AdobeDng,

    /// Application-defined format without metadata in this crate.
    User,
}

impl PixelFormat {
    /// Every format of the closed set, in declaration order.
    ///
    /// The sentinels [`Invalid`](Self::Invalid) and [`User`](Self::User) are
    /// not included.
    pub const ALL: &'static [PixelFormat] = &[
        Self::Argb32,
        Self::Argb32Premultiplied,
        Self::Rgb32,
        Self::Rgb24,
        Self::Rgb565,
        Self::Rgb555,
        Self::Argb8565Premultiplied,
        Self::Bgra32,
        Self::Bgra32Premultiplied,
        Self::Bgr32,
        Self::Bgr24,
        Self::Bgr565,
        Self::Bgr555,
        Self::Bgra5658Premultiplied,
        Self::Rgba32,
        Self::Rgba32Premultiplied,
        Self::Abgr32,
        Self::Rgb48Le,
        Self::Rgb48Be,
        Self::Rgb332,
        Self::Pal8,
        Self::MonoBlack,
        Self::MonoWhite,
        Self::Ayuv444,
        Self::Ayuv444Premultiplied,
        Self::Yuv444p,
        Self::Yuv422p,
        Self::Yuv420p,
        Self::Yuv420p16Le,
        Self::Yuv420p16Be,
        Self::Yv12,
        Self::Uyvy,
        Self::Yuyv,
        Self::Nv12,
        Self::Nv21,
        Self::Imc1,
        Self::Imc2,
        Self::Imc3,
        Self::Imc4,
        Self::Y8,
        Self::Y16,
        Self::Jpeg,
        Self::CameraRaw,
        Self::AdobeDng,
    ];

    /// Whether this is one of the sentinels (`Invalid` or `User`).
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Invalid | Self::User)
    }

    /// Descriptor for this format, `None` for the sentinels.
    #[inline]
    pub fn descriptor(self) -> Option<&'static PixelDescriptor> {
        descriptor::lookup(self)
    }

    /// Canonical name, or `""` for the sentinels.
    pub fn name(self) -> &'static str {
        self.descriptor().map_or("", |d| d.name)
    }

    /// Whether components live in separate planes.
    pub fn is_planar(self) -> bool {
        self.descriptor().is_some_and(|d| d.planar)
    }

    /// Whether this is an RGB-family format.
    pub fn is_rgb(self) -> bool {
        self.descriptor().is_some_and(|d| d.rgb)
    }

    /// Whether the format carries an alpha component.
    pub fn has_alpha(self) -> bool {
        self.descriptor().is_some_and(|d| d.alpha)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::User => write!(f, "user"),
            other => write!(f, "{}", other.name()),
        }
    }
}

impl FromStr for PixelFormat {
    type Err = Error;

    /// Exact, case-sensitive match against descriptor names.
    fn from_str(s: &str) -> Result<Self> {
        descriptor::lookup_name(s)
            .map(|d| d.format)
            .ok_or_else(|| Error::unknown_name(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PixelFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PixelFormat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        match name.as_str() {
            "invalid" => Ok(Self::Invalid),
            "user" => Ok(Self::User),
            other => other.parse().map_err(serde::de::Error::custom),
        }
    }
}
