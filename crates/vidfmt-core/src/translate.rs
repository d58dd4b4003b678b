//! Translation between [`PixelFormat`] and the external format spaces.
//!
//! Two independently versioned enumerations are mapped here:
//!
//! - [`ImageFormat`] - the image-buffer codes used by GUI image classes
//!   (RGB family, mono, indexed and grey only)
//! - [`CodecFormat`] - the codec library's numeric pixel formats, following
//!   libavutil's `AVPixelFormat` numbering (major version 57 and later)
//!
//! The mappings are explicit tables. Resolution *into* [`PixelFormat`] is
//! total: an unknown or unmodelled code yields [`PixelFormat::Invalid`].
//! Resolution *out of* [`PixelFormat`] is partial and returns `None` when
//! the target space has no equivalent.
//!
//! [`PixelFormat`] names packed RGB by byte order in memory, as the codec
//! space does. Some image-buffer codes describe host-endian words instead
//! (`Argb32` is a `0xAARRGGBB` `u32`), so they resolve to the identity whose
//! bytes match on the compiling host: `bgra32` on little-endian targets.
//!
//! # Usage
//!
//! ```rust
//! use vidfmt_core::translate::{self, CodecFormat, ImageFormat};
//! use vidfmt_core::PixelFormat;
//!
//! assert_eq!(translate::from_codec_format(CodecFormat::NV12), PixelFormat::Nv12);
//! assert_eq!(translate::to_image_format(PixelFormat::Nv12), None);
//! assert_eq!(
//!     translate::from_image_format(ImageFormat::Rgba8888Premultiplied),
//!     PixelFormat::Rgba32Premultiplied
//! );
//! ```

use crate::id::PixelFormat;
use std::fmt;
use tracing::trace;

/// External image-buffer format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum ImageFormat {
    /// No format.
    #[default]
    Invalid = 0,
    /// 1 bit per pixel, most significant bit first.
    Mono = 1,
    /// 1 bit per pixel, least significant bit first.
    MonoLsb = 2,
    /// 8-bit palette index.
    Indexed8 = 3,
    /// 32-bit host-endian word 0xffRRGGBB.
    Rgb32 = 4,
    /// 32-bit host-endian word 0xAARRGGBB.
    Argb32 = 5,
    /// 32-bit host-endian word 0xAARRGGBB, premultiplied.
    Argb32Premultiplied = 6,
    /// 16-bit 5:6:5 RGB.
    Rgb16 = 7,
    /// 24-bit 8:5:6:5 ARGB, premultiplied.
    Argb8565Premultiplied = 8,
    /// 24-bit 6:6:6 RGB.
    Rgb666 = 9,
    /// 24-bit 6:6:6:6 ARGB, premultiplied.
    Argb6666Premultiplied = 10,
    /// 16-bit 5:5:5 RGB.
    Rgb555 = 11,
    /// 24-bit 8:5:5:5 ARGB, premultiplied.
    Argb8555Premultiplied = 12,
    /// 24-bit R, G, B bytes.
    Rgb888 = 13,
    /// 16-bit 4:4:4 RGB.
    Rgb444 = 14,
    /// 16-bit 4:4:4:4 ARGB, premultiplied.
    Argb4444Premultiplied = 15,
    /// 32-bit R, G, B, X bytes.
    Rgbx8888 = 16,
    /// 32-bit R, G, B, A bytes.
    Rgba8888 = 17,
    /// 32-bit R, G, B, A bytes, premultiplied.
    Rgba8888Premultiplied = 18,
    /// 32-bit 10:10:10 BGR.
    Bgr30 = 19,
    /// 32-bit 2:10:10:10 ABGR, premultiplied.
    A2Bgr30Premultiplied = 20,
    /// 32-bit 10:10:10 RGB.
    Rgb30 = 21,
    /// 32-bit 2:10:10:10 ARGB, premultiplied.
    A2Rgb30Premultiplied = 22,
    /// 8-bit alpha only.
    Alpha8 = 23,
    /// 8-bit grey.
    Grayscale8 = 24,
    /// 64-bit R, G, B, X.
    Rgbx64 = 25,
    /// 64-bit R, G, B, A.
    Rgba64 = 26,
    /// 64-bit R, G, B, A, premultiplied.
    Rgba64Premultiplied = 27,
    /// 16-bit grey.
    Grayscale16 = 28,
    /// 24-bit B, G, R bytes.
    Bgr888 = 29,
}

impl ImageFormat {
    const ALL: [ImageFormat; 30] = [
        Self::Invalid,
        Self::Mono,
        Self::MonoLsb,
        Self::Indexed8,
        Self::Rgb32,
        Self::Argb32,
        Self::Argb32Premultiplied,
        Self::Rgb16,
        Self::Argb8565Premultiplied,
        Self::Rgb666,
        Self::Argb6666Premultiplied,
        Self::Rgb555,
        Self::Argb8555Premultiplied,
        Self::Rgb888,
        Self::Rgb444,
        Self::Argb4444Premultiplied,
        Self::Rgbx8888,
        Self::Rgba8888,
        Self::Rgba8888Premultiplied,
        Self::Bgr30,
        Self::A2Bgr30Premultiplied,
        Self::Rgb30,
        Self::A2Rgb30Premultiplied,
        Self::Alpha8,
        Self::Grayscale8,
        Self::Rgbx64,
        Self::Rgba64,
        Self::Rgba64Premultiplied,
        Self::Grayscale16,
        Self::Bgr888,
    ];

    /// Converts a raw code, `None` if it is outside the enumeration.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Raw integer code.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Codec-library numeric pixel format.
///
/// A plain integer newtype: the codec space is larger than what this crate
/// models (hardware surfaces, exotic packings) and codes outside the named
/// constants are legal values that simply resolve to
/// [`PixelFormat::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodecFormat(pub i32);

#[allow(missing_docs)]
impl CodecFormat {
    pub const NONE: Self = Self(-1);
    pub const YUV420P: Self = Self(0);
    pub const YUYV422: Self = Self(1);
    pub const RGB24: Self = Self(2);
    pub const BGR24: Self = Self(3);
    pub const YUV422P: Self = Self(4);
    pub const YUV444P: Self = Self(5);
    pub const YUV410P: Self = Self(6);
    pub const YUV411P: Self = Self(7);
    pub const GRAY8: Self = Self(8);
    pub const MONOWHITE: Self = Self(9);
    pub const MONOBLACK: Self = Self(10);
    pub const PAL8: Self = Self(11);
    pub const YUVJ420P: Self = Self(12);
    pub const YUVJ422P: Self = Self(13);
    pub const YUVJ444P: Self = Self(14);
    pub const UYVY422: Self = Self(15);
    pub const UYYVYY411: Self = Self(16);
    pub const BGR8: Self = Self(17);
    pub const BGR4: Self = Self(18);
    pub const BGR4_BYTE: Self = Self(19);
    pub const RGB8: Self = Self(20);
    pub const RGB4: Self = Self(21);
    pub const RGB4_BYTE: Self = Self(22);
    pub const NV12: Self = Self(23);
    pub const NV21: Self = Self(24);
    pub const ARGB: Self = Self(25);
    pub const RGBA: Self = Self(26);
    pub const ABGR: Self = Self(27);
    pub const BGRA: Self = Self(28);
    pub const GRAY16BE: Self = Self(29);
    pub const GRAY16LE: Self = Self(30);
    pub const YUV440P: Self = Self(31);
    pub const YUVJ440P: Self = Self(32);
    pub const YUVA420P: Self = Self(33);
    pub const RGB48BE: Self = Self(34);
    pub const RGB48LE: Self = Self(35);
    pub const RGB565BE: Self = Self(36);
    pub const RGB565LE: Self = Self(37);
    pub const RGB555BE: Self = Self(38);
    pub const RGB555LE: Self = Self(39);
    pub const BGR565BE: Self = Self(40);
    pub const BGR565LE: Self = Self(41);
    pub const BGR555BE: Self = Self(42);
    pub const BGR555LE: Self = Self(43);
    pub const VAAPI: Self = Self(44);
    pub const YUV420P16LE: Self = Self(45);
    pub const YUV420P16BE: Self = Self(46);
    pub const YUV422P16LE: Self = Self(47);
    pub const YUV422P16BE: Self = Self(48);
    pub const YUV444P16LE: Self = Self(49);
    pub const YUV444P16BE: Self = Self(50);
    pub const DXVA2_VLD: Self = Self(51);
    pub const RGB444LE: Self = Self(52);
    pub const RGB444BE: Self = Self(53);
    pub const BGR444LE: Self = Self(54);
    pub const BGR444BE: Self = Self(55);
    pub const YA8: Self = Self(56);
}

impl CodecFormat {
    /// Raw integer code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether the code names a hardware surface rather than memory layout.
    pub const fn is_hardware(self) -> bool {
        matches!(self, Self::VAAPI | Self::DXVA2_VLD)
    }
}

impl From<i32> for CodecFormat {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for CodecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use PixelFormat as F;

/// Image codes whose pixels are stored byte by byte. One-to-one pairs;
/// every format appears at most once and every code at most once, so both
/// directions round-trip.
const IMAGE_FORMATS: &[(PixelFormat, ImageFormat)] = &[
    (F::Rgb24, ImageFormat::Rgb888),
    (F::Bgr24, ImageFormat::Bgr888),
    (F::Argb8565Premultiplied, ImageFormat::Argb8565Premultiplied),
    (F::Rgba32, ImageFormat::Rgba8888),
    (F::Rgba32Premultiplied, ImageFormat::Rgba8888Premultiplied),
    (F::Pal8, ImageFormat::Indexed8),
    (F::MonoBlack, ImageFormat::Mono),
    (F::Y8, ImageFormat::Grayscale8),
];

/// Image codes whose pixels are host-endian words (`0xAARRGGBB` and
/// friends). Little-endian hosts store those words with the bytes reversed.
#[cfg(target_endian = "little")]
const NATIVE_WORD_IMAGE_FORMATS: &[(PixelFormat, ImageFormat)] = &[
    (F::Bgra32, ImageFormat::Argb32),
    (F::Bgra32Premultiplied, ImageFormat::Argb32Premultiplied),
    (F::Bgr32, ImageFormat::Rgb32),
    (F::Rgb565, ImageFormat::Rgb16),
    (F::Rgb555, ImageFormat::Rgb555),
    (F::Y16, ImageFormat::Grayscale16),
];

/// Big-endian hosts store words in reading order. The 16-bit layouts are
/// only modelled little endian, so those codes stay unmapped here.
#[cfg(target_endian = "big")]
const NATIVE_WORD_IMAGE_FORMATS: &[(PixelFormat, ImageFormat)] = &[
    (F::Argb32, ImageFormat::Argb32),
    (F::Argb32Premultiplied, ImageFormat::Argb32Premultiplied),
    (F::Rgb32, ImageFormat::Rgb32),
];

fn image_pairs() -> impl Iterator<Item = &'static (PixelFormat, ImageFormat)> {
    IMAGE_FORMATS.iter().chain(NATIVE_WORD_IMAGE_FORMATS)
}

/// One-to-one pairs, same contract as [`IMAGE_FORMATS`].
const CODEC_FORMATS: &[(PixelFormat, CodecFormat)] = &[
    (F::Argb32, CodecFormat::ARGB),
    (F::Bgra32, CodecFormat::BGRA),
    (F::Rgba32, CodecFormat::RGBA),
    (F::Abgr32, CodecFormat::ABGR),
    (F::Rgb24, CodecFormat::RGB24),
    (F::Bgr24, CodecFormat::BGR24),
    (F::Rgb565, CodecFormat::RGB565LE),
    (F::Rgb555, CodecFormat::RGB555LE),
    (F::Bgr565, CodecFormat::BGR565LE),
    (F::Bgr555, CodecFormat::BGR555LE),
    (F::Rgb48Le, CodecFormat::RGB48LE),
    (F::Rgb48Be, CodecFormat::RGB48BE),
    (F::Rgb332, CodecFormat::RGB8),
    (F::Pal8, CodecFormat::PAL8),
    (F::MonoBlack, CodecFormat::MONOBLACK),
    (F::MonoWhite, CodecFormat::MONOWHITE),
    (F::Yuv444p, CodecFormat::YUV444P),
    (F::Yuv422p, CodecFormat::YUV422P),
    (F::Yuv420p, CodecFormat::YUV420P),
    (F::Yuv420p16Le, CodecFormat::YUV420P16LE),
    (F::Yuv420p16Be, CodecFormat::YUV420P16BE),
    (F::Uyvy, CodecFormat::UYVY422),
    (F::Yuyv, CodecFormat::YUYV422),
    (F::Nv12, CodecFormat::NV12),
    (F::Nv21, CodecFormat::NV21),
    (F::Y8, CodecFormat::GRAY8),
    (F::Y16, CodecFormat::GRAY16LE),
];

/// Codes that only resolve inward. Full-range YUV shares its memory layout
/// with the limited-range format.
const CODEC_ALIASES: &[(CodecFormat, PixelFormat)] = &[
    (CodecFormat::YUVJ420P, F::Yuv420p),
    (CodecFormat::YUVJ422P, F::Yuv422p),
    (CodecFormat::YUVJ444P, F::Yuv444p),
];

/// Resolves an image-buffer format. Unmapped formats yield `Invalid`.
pub fn from_image_format(format: ImageFormat) -> PixelFormat {
    match image_pairs().find(|(_, img)| *img == format) {
        Some(&(fmt, _)) => fmt,
        None => {
            trace!(image_format = ?format, "no pixel format for image format");
            PixelFormat::Invalid
        }
    }
}

/// Resolves a raw image-buffer code. Unknown codes yield `Invalid`.
pub fn from_image_code(code: i32) -> PixelFormat {
    match ImageFormat::from_code(code) {
        Some(format) => from_image_format(format),
        None => {
            trace!(code, "unknown image format code");
            PixelFormat::Invalid
        }
    }
}

/// Image-buffer equivalent of `format`, `None` if there is none.
pub fn to_image_format(format: PixelFormat) -> Option<ImageFormat> {
    image_pairs().find(|(fmt, _)| *fmt == format).map(|&(_, img)| img)
}

/// Resolves a codec-library code. Unmapped codes yield `Invalid`.
pub fn from_codec_format(code: CodecFormat) -> PixelFormat {
    if let Some(&(fmt, _)) = CODEC_FORMATS.iter().find(|(_, c)| *c == code) {
        return fmt;
    }
    if let Some(&(_, fmt)) = CODEC_ALIASES.iter().find(|(c, _)| *c == code) {
        return fmt;
    }
    trace!(code = code.0, hardware = code.is_hardware(), "no pixel format for codec format");
    PixelFormat::Invalid
}

/// Codec-library equivalent of `format`, `None` if there is none.
pub fn to_codec_format(format: PixelFormat) -> Option<CodecFormat> {
    CODEC_FORMATS
        .iter()
        .find(|(fmt, _)| *fmt == format)
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_image_code_conversion() {
        assert_eq!(ImageFormat::from_code(0), Some(ImageFormat::Invalid));
        assert_eq!(ImageFormat::from_code(6), Some(ImageFormat::Argb32Premultiplied));
        assert_eq!(ImageFormat::from_code(29), Some(ImageFormat::Bgr888));
        assert_eq!(ImageFormat::from_code(30), None);
        assert_eq!(ImageFormat::from_code(-1), None);
        for (i, f) in ImageFormat::ALL.iter().enumerate() {
            assert_eq!(f.code(), i as i32);
        }
    }

    #[test]
    fn test_tables_are_injective() {
        let pairs = image_pairs().count();
        let fmts: HashSet<_> = image_pairs().map(|(f, _)| *f).collect();
        let codes: HashSet<_> = image_pairs().map(|(_, c)| *c).collect();
        assert_eq!(fmts.len(), pairs);
        assert_eq!(codes.len(), pairs);

        let fmts: HashSet<_> = CODEC_FORMATS.iter().map(|(f, _)| *f).collect();
        let codes: HashSet<_> = CODEC_FORMATS.iter().map(|(_, c)| *c).collect();
        assert_eq!(fmts.len(), CODEC_FORMATS.len());
        assert_eq!(codes.len(), CODEC_FORMATS.len());

        for (alias, _) in CODEC_ALIASES {
            assert!(!codes.contains(alias), "alias {alias} shadows a primary code");
        }
    }

    #[test]
    fn test_image_translation() {
        assert_eq!(from_image_format(ImageFormat::Rgb888), PixelFormat::Rgb24);
        assert_eq!(from_image_format(ImageFormat::Invalid), PixelFormat::Invalid);
        assert_eq!(from_image_format(ImageFormat::Rgb30), PixelFormat::Invalid);
        assert_eq!(from_image_code(24), PixelFormat::Y8);
        assert_eq!(from_image_code(1000), PixelFormat::Invalid);
        assert_eq!(to_image_format(PixelFormat::Rgb24), Some(ImageFormat::Rgb888));
        assert_eq!(to_image_format(PixelFormat::Yuv420p), None);
        assert_eq!(to_image_format(PixelFormat::Invalid), None);
    }

    #[test]
    fn test_native_word_keeps_byte_order() {
        // Bytes of one 0xAARRGGBB word as the host stores it.
        let bytes = 0xA0_B1_C2_D3u32.to_ne_bytes();
        let (argb, codec) = if bytes == [0xA0, 0xB1, 0xC2, 0xD3] {
            (PixelFormat::Argb32, CodecFormat::ARGB)
        } else {
            assert_eq!(bytes, [0xD3, 0xC2, 0xB1, 0xA0]);
            (PixelFormat::Bgra32, CodecFormat::BGRA)
        };
        assert_eq!(from_image_format(ImageFormat::Argb32), argb);
        assert_eq!(to_codec_format(from_image_format(ImageFormat::Argb32)), Some(codec));
        assert_eq!(to_image_format(argb), Some(ImageFormat::Argb32));
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_native_word_little_endian() {
        assert_eq!(from_image_format(ImageFormat::Argb32Premultiplied), PixelFormat::Bgra32Premultiplied);
        assert_eq!(from_image_format(ImageFormat::Rgb32), PixelFormat::Bgr32);
        assert_eq!(from_image_format(ImageFormat::Rgb16), PixelFormat::Rgb565);
        assert_eq!(from_image_format(ImageFormat::Grayscale16), PixelFormat::Y16);
        assert_eq!(to_codec_format(from_image_format(ImageFormat::Grayscale16)), Some(CodecFormat::GRAY16LE));
        // Byte-ordered ARGB has no image-buffer code here.
        assert_eq!(to_image_format(PixelFormat::Argb32), None);
        // Rgba8888 is byte ordered on every host.
        assert_eq!(from_image_format(ImageFormat::Rgba8888), PixelFormat::Rgba32);
    }

    #[test]
    fn test_codec_translation() {
        assert_eq!(from_codec_format(CodecFormat::YUV420P), PixelFormat::Yuv420p);
        assert_eq!(from_codec_format(CodecFormat::GRAY16LE), PixelFormat::Y16);
        assert_eq!(to_codec_format(PixelFormat::Yuv420p), Some(CodecFormat(0)));
        assert_eq!(to_codec_format(PixelFormat::Yv12), None);
        assert_eq!(to_codec_format(PixelFormat::Argb32Premultiplied), None);
        assert_eq!(to_codec_format(PixelFormat::User), None);
    }

    #[test]
    fn test_codec_zero_is_a_real_code() {
        // Code 0 is yuv420p, distinct from "no equivalent".
        assert_eq!(to_codec_format(PixelFormat::Yuv420p).map(CodecFormat::code), Some(0));
        assert_eq!(to_codec_format(PixelFormat::Imc1), None);
    }

    #[test]
    fn test_codec_aliases() {
        assert_eq!(from_codec_format(CodecFormat::YUVJ420P), PixelFormat::Yuv420p);
        assert_eq!(from_codec_format(CodecFormat::YUVJ444P), PixelFormat::Yuv444p);
        assert_eq!(to_codec_format(PixelFormat::Yuv420p), Some(CodecFormat::YUV420P));
    }

    #[test]
    fn test_unmodelled_codec_codes() {
        for code in [
            CodecFormat::NONE,
            CodecFormat::VAAPI,
            CodecFormat::DXVA2_VLD,
            CodecFormat::YUV410P,
            CodecFormat::GRAY16BE,
            CodecFormat(9999),
        ] {
            assert_eq!(from_codec_format(code), PixelFormat::Invalid, "code {code}");
        }
        assert!(CodecFormat::VAAPI.is_hardware());
        assert!(!CodecFormat::NV12.is_hardware());
    }
}
