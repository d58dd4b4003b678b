//! The [`VideoFormat`] value object.
//!
//! A [`VideoFormat`] is a resolved [`PixelFormat`] bundled with a reference
//! into the static descriptor table. It can be built from any of the three
//! format spaces; every constructor resolves to the same canonical identity,
//! so two values compare equal exactly when their identities match.
//!
//! Invalid values are an ordinary state. Accessors on them return sentinels
//! instead of failing:
//!
//! | accessor | sentinel |
//! |----------|----------|
//! | counts, bits, bytes | `0` |
//! | [`name`](VideoFormat::name) | `""` |
//! | flags | `false` |
//! | geometry, external codes | `None` |
//!
//! # Usage
//!
//! ```rust
//! use vidfmt_core::{CodecFormat, ImageFormat, PixelFormat, VideoFormat};
//!
//! let a = VideoFormat::from_codec_format(CodecFormat::YUV420P);
//! let b = VideoFormat::from_name("yuv420p");
//! assert_eq!(a, b);
//! assert_eq!(a.chroma_width(11), Some(6));
//!
//! let none = VideoFormat::from_codec_format(CodecFormat(9999));
//! assert!(!none.is_valid());
//! assert_eq!(none.name(), "");
//! ```

use crate::descriptor::PixelDescriptor;
use crate::error::{Error, Result};
use crate::id::PixelFormat;
use crate::translate::{self, CodecFormat, ImageFormat};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A resolved pixel format and its layout metadata.
#[derive(Clone, Copy, Default)]
pub struct VideoFormat {
    format: PixelFormat,
    desc: Option<&'static PixelDescriptor>,
}

impl VideoFormat {
    /// Wraps an internal identity.
    pub fn new(format: PixelFormat) -> Self {
        Self {
            format,
            desc: format.descriptor(),
        }
    }

    /// Resolves an image-buffer format.
    pub fn from_image_format(format: ImageFormat) -> Self {
        Self::new(translate::from_image_format(format))
    }

    /// Resolves a raw image-buffer code.
    pub fn from_image_code(code: i32) -> Self {
        Self::new(translate::from_image_code(code))
    }

    /// Resolves a codec-library code.
    pub fn from_codec_format(code: CodecFormat) -> Self {
        Self::new(translate::from_codec_format(code))
    }

    /// Resolves a canonical name (exact, case-sensitive). Unknown names give
    /// an invalid value.
    pub fn from_name(name: &str) -> Self {
        Self::new(name.parse().unwrap_or_default())
    }

    /// Whether an identity was resolved.
    ///
    /// [`PixelFormat::User`] counts as valid even though it has no layout.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.format != PixelFormat::Invalid
    }

    /// Replaces the identity and everything derived from it.
    pub fn set_pixel_format(&mut self, format: PixelFormat) {
        *self = Self::new(format);
    }

    /// Replaces the identity with the resolution of a codec code.
    pub fn set_codec_format(&mut self, code: CodecFormat) {
        *self = Self::from_codec_format(code);
    }

    /// Replaces the identity with the resolution of an image-buffer format.
    pub fn set_image_format(&mut self, format: ImageFormat) {
        *self = Self::from_image_format(format);
    }

    /// Resolved internal identity.
    #[inline]
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Image-buffer equivalent, `None` if there is none.
    pub fn image_format(&self) -> Option<ImageFormat> {
        translate::to_image_format(self.format)
    }

    /// Codec-library equivalent, `None` if there is none.
    pub fn codec_format(&self) -> Option<CodecFormat> {
        translate::to_codec_format(self.format)
    }

    /// Descriptor of the resolved identity.
    #[inline]
    pub fn descriptor(&self) -> Option<&'static PixelDescriptor> {
        self.desc
    }

    /// Canonical name, `""` when there is no descriptor.
    pub fn name(&self) -> &'static str {
        self.desc.map_or("", |d| d.name)
    }

    /// Number of components (NV12 has 3), `0` when unknown.
    pub fn channels(&self) -> u32 {
        self.desc.map_or(0, |d| d.channels as u32)
    }

    /// Number of memory planes, `0` when unknown.
    pub fn plane_count(&self) -> u32 {
        self.desc.map_or(0, |d| d.plane_count as u32)
    }

    /// Unpadded bits per pixel summed over planes. For yuv420p a pixel is
    /// 4 Y + U + V over four pixels, i.e. 12 bits.
    pub fn bits_per_pixel(&self) -> u32 {
        self.desc.map_or(0, |d| d.bits_per_pixel())
    }

    /// Unpadded bits per pixel of `plane`.
    ///
    /// # Panics
    ///
    /// If the format is known and `plane` is out of range.
    pub fn bits_per_pixel_plane(&self, plane: usize) -> u32 {
        self.desc.map_or(0, |d| d.bits_per_pixel_plane(plane))
    }

    /// Padded bits per pixel summed over planes.
    pub fn bits_per_pixel_padded(&self) -> u32 {
        self.desc.map_or(0, |d| d.bits_per_pixel_padded())
    }

    /// Padded bits per pixel of `plane`.
    ///
    /// # Panics
    ///
    /// If the format is known and `plane` is out of range.
    pub fn bits_per_pixel_padded_plane(&self, plane: usize) -> u32 {
        self.desc.map_or(0, |d| d.bits_per_pixel_padded_plane(plane))
    }

    /// `ceil(bits_per_pixel() / 8)`.
    pub fn bytes_per_pixel(&self) -> u32 {
        self.desc.map_or(0, |d| d.bytes_per_pixel())
    }

    /// `ceil(bits_per_pixel_plane(plane) / 8)`.
    ///
    /// # Panics
    ///
    /// If the format is known and `plane` is out of range.
    pub fn bytes_per_pixel_plane(&self, plane: usize) -> u32 {
        self.desc.map_or(0, |d| d.bytes_per_pixel_plane(plane))
    }

    /// Line size of `plane` for a frame `width` pixels wide.
    ///
    /// `None` when the format has no layout.
    ///
    /// # Panics
    ///
    /// If the format is known and `plane` is out of range.
    pub fn bytes_per_line(&self, width: u32, plane: usize) -> Option<usize> {
        self.desc.and_then(|d| d.bytes_per_line(width, plane))
    }

    /// Checked variant of [`bytes_per_line`](Self::bytes_per_line) for
    /// untrusted plane indices.
    pub fn try_bytes_per_line(&self, width: u32, plane: usize) -> Result<usize> {
        let desc = self.layout()?;
        let planes = desc.plane_count as usize;
        if plane >= planes {
            return Err(Error::PlaneOutOfRange {
                plane,
                planes,
                format: self.format,
            });
        }
        desc.bytes_per_line(width, plane).ok_or(Error::SizeOverflow {
            width,
            height: 1,
            format: self.format,
        })
    }

    /// Chroma plane width for a luma width, `None` when unknown.
    pub fn chroma_width(&self, luma_width: u32) -> Option<u32> {
        self.desc.map(|d| d.chroma_width(luma_width))
    }

    /// Chroma plane height for a luma height, `None` when unknown.
    pub fn chroma_height(&self, luma_height: u32) -> Option<u32> {
        self.desc.map(|d| d.chroma_height(luma_height))
    }

    /// Multi-byte components are big endian.
    pub fn is_big_endian(&self) -> bool {
        self.desc.is_some_and(|d| d.big_endian)
    }

    /// Samples index a palette.
    pub fn has_palette(&self) -> bool {
        self.desc.is_some_and(|d| d.has_palette)
    }

    /// Direct colours usable as palette indices.
    pub fn is_pseudo_paletted(&self) -> bool {
        self.desc.is_some_and(|d| d.pseudo_paletted)
    }

    /// All values of a component are bit-wise packed end to end.
    pub fn is_bitstream(&self) -> bool {
        self.desc.is_some_and(|d| d.bitstream)
    }

    /// Frames live in hardware surfaces.
    pub fn is_hw_accelerated(&self) -> bool {
        self.desc.is_some_and(|d| d.hw_accelerated)
    }

    /// Components are split across planes.
    pub fn is_planar(&self) -> bool {
        self.desc.is_some_and(|d| d.planar)
    }

    /// RGB-family format.
    pub fn is_rgb(&self) -> bool {
        self.desc.is_some_and(|d| d.rgb)
    }

    /// Carries an alpha component.
    pub fn has_alpha(&self) -> bool {
        self.desc.is_some_and(|d| d.alpha)
    }

    /// Descriptor with a per-pixel layout, or [`Error::NoLayout`].
    pub(crate) fn layout(&self) -> Result<&'static PixelDescriptor> {
        self.desc
            .filter(|d| d.has_layout())
            .ok_or(Error::NoLayout { format: self.format })
    }
}

impl PartialEq for VideoFormat {
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format
    }
}

impl Eq for VideoFormat {}

impl PartialEq<PixelFormat> for VideoFormat {
    fn eq(&self, other: &PixelFormat) -> bool {
        self.format == *other
    }
}

impl Hash for VideoFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.format.hash(state);
    }
}

impl From<PixelFormat> for VideoFormat {
    fn from(format: PixelFormat) -> Self {
        Self::new(format)
    }
}

impl From<ImageFormat> for VideoFormat {
    fn from(format: ImageFormat) -> Self {
        Self::from_image_format(format)
    }
}

impl From<CodecFormat> for VideoFormat {
    fn from(code: CodecFormat) -> Self {
        Self::from_codec_format(code)
    }
}

impl fmt::Debug for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoFormat")
            .field("format", &self.format)
            .field("planes", &self.plane_count())
            .field("bpp", &self.bits_per_pixel())
            .finish()
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        let fmt = VideoFormat::default();
        assert!(!fmt.is_valid());
        assert_eq!(fmt.pixel_format(), PixelFormat::Invalid);
        assert_eq!(fmt.name(), "");
        assert_eq!(fmt.plane_count(), 0);
        assert_eq!(fmt.channels(), 0);
        assert_eq!(fmt.bits_per_pixel(), 0);
        assert_eq!(fmt.bytes_per_pixel_plane(7), 0);
        assert_eq!(fmt.bytes_per_line(16, 0), None);
        assert_eq!(fmt.chroma_width(16), None);
        assert!(!fmt.is_rgb());
        assert!(!fmt.has_alpha());
        assert_eq!(fmt.codec_format(), None);
        assert_eq!(fmt.image_format(), None);
    }

    #[test]
    fn test_yuv420p_accessors() {
        let fmt = VideoFormat::new(PixelFormat::Yuv420p);
        assert!(fmt.is_valid());
        assert_eq!(fmt.channels(), 3);
        assert_eq!(fmt.plane_count(), 3);
        assert!(fmt.is_planar());
        assert!(!fmt.is_rgb());
        assert_eq!(fmt.chroma_width(11), Some(6));
        assert_eq!(fmt.chroma_height(9), Some(5));
        assert_eq!(fmt.bytes_per_line(16, 0), Some(16));
        assert_eq!(fmt.codec_format(), Some(CodecFormat::YUV420P));
        assert_eq!(fmt.image_format(), None);
    }

    #[test]
    fn test_premultiplied_argb_from_image() {
        let fmt = VideoFormat::from_image_format(ImageFormat::Argb32Premultiplied);
        assert!(fmt.is_rgb());
        assert!(fmt.has_alpha());
        assert_eq!(fmt.plane_count(), 1);
        assert_eq!(fmt.bytes_per_pixel(), 4);
    }

    #[test]
    fn test_unknown_codec_code() {
        let fmt = VideoFormat::from_codec_format(CodecFormat(-42));
        assert!(!fmt.is_valid());
        assert_eq!(fmt.name(), "");
        assert_eq!(fmt, VideoFormat::default());
    }

    #[test]
    fn test_equality_across_spaces() {
        let by_id = VideoFormat::new(PixelFormat::Rgb24);
        let by_image = VideoFormat::from_image_code(ImageFormat::Rgb888.code());
        let by_codec = VideoFormat::from(CodecFormat::RGB24);
        let by_name = VideoFormat::from_name("rgb24");
        assert_eq!(by_id, by_image);
        assert_eq!(by_image, by_codec);
        assert_eq!(by_codec, by_name);
        assert_eq!(by_name, PixelFormat::Rgb24);
        assert_ne!(by_id, VideoFormat::new(PixelFormat::Bgr24));
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(VideoFormat::from_name("nv12").is_valid());
        assert!(!VideoFormat::from_name("NV12").is_valid());
        assert!(!VideoFormat::from_name("").is_valid());
    }

    #[test]
    fn test_set_pixel_format_replaces_everything() {
        let mut fmt = VideoFormat::new(PixelFormat::Yuv420p);
        let copy = fmt;
        fmt.set_pixel_format(PixelFormat::Bgra32);
        assert_eq!(fmt.plane_count(), 1);
        assert!(fmt.has_alpha());
        assert_eq!(fmt.name(), "bgra32");
        // The earlier copy is independent.
        assert_eq!(copy.plane_count(), 3);

        fmt.set_codec_format(CodecFormat::NV21);
        assert_eq!(fmt, PixelFormat::Nv21);
        fmt.set_image_format(ImageFormat::Rgb30);
        assert!(!fmt.is_valid());
    }

    #[test]
    fn test_user_format() {
        let fmt = VideoFormat::new(PixelFormat::User);
        assert!(fmt.is_valid());
        assert!(fmt.descriptor().is_none());
        assert_eq!(fmt.name(), "");
        assert_eq!(fmt.plane_count(), 0);
        assert!(fmt.try_bytes_per_line(16, 0).unwrap_err().is_no_layout());
    }

    #[test]
    fn test_try_bytes_per_line() {
        let fmt = VideoFormat::new(PixelFormat::Nv12);
        assert_eq!(fmt.try_bytes_per_line(11, 1), Ok(12));
        assert_eq!(
            fmt.try_bytes_per_line(11, 2),
            Err(Error::PlaneOutOfRange {
                plane: 2,
                planes: 2,
                format: PixelFormat::Nv12
            })
        );
        let jpeg = VideoFormat::new(PixelFormat::Jpeg);
        assert!(jpeg.try_bytes_per_line(11, 0).unwrap_err().is_no_layout());
    }

    #[test]
    fn test_hash_follows_identity() {
        use std::collections::HashSet;
        let set: HashSet<_> = [
            VideoFormat::new(PixelFormat::Nv12),
            VideoFormat::from(CodecFormat::NV12),
            VideoFormat::from_name("nv12"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<VideoFormat>();
    }
}
