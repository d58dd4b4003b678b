//! # vidfmt-core
//!
//! Pixel-format layouts for raw video frames.
//!
//! Given an abstract pixel format, this crate answers how a frame of that
//! format is laid out in memory: how many planes, how many bits per pixel in
//! each plane, how chroma is subsampled, and how many bytes one line of a
//! plane occupies for a given width.
//!
//! - [`PixelFormat`] - closed set of internal format identities
//! - [`PixelDescriptor`] - static layout metadata, one per identity
//! - [`ImageFormat`], [`CodecFormat`] - external image-buffer and codec codes
//!   and the [`translate`] functions between them
//! - [`VideoFormat`] - a resolved format with sentinel-returning accessors
//! - [`FrameLayout`] - strides and plane offsets of one frame buffer
//!
//! ## Three naming spaces
//!
//! ```text
//!   ImageFormat (0..=29) ---+                 +--- CodecFormat (-1..=56)
//!                           |                 |
//!                           v                 v
//!                      PixelFormat  --->  PixelDescriptor
//! ```
//!
//! Resolution from an external space is total: anything without an
//! equivalent resolves to [`PixelFormat::Invalid`]. Mapping out of the
//! internal space returns `None` when there is no equivalent.
//!
//! ## Usage
//!
//! ```rust
//! use vidfmt_core::prelude::*;
//!
//! let fmt = VideoFormat::from_codec_format(CodecFormat::NV12);
//! assert_eq!(fmt.name(), "nv12");
//! assert_eq!(fmt.plane_count(), 2);
//! assert_eq!(fmt.bytes_per_line(11, 1), Some(12));
//!
//! let layout = FrameLayout::new(&fmt, 1280, 720, 16).unwrap();
//! assert_eq!(layout.total_size(), 1280 * 720 * 3 / 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - serialize identities by canonical name and derive
//!   serialization for frame layouts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod descriptor;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod id;
pub mod translate;
pub mod video_format;

// Re-exports for convenience
pub use descriptor::{descriptors, PixelDescriptor, MAX_PLANES};
pub use error::{Error, Result};
pub use frame::{FrameLayout, PlaneLayout, PALETTE_SIZE};
pub use id::PixelFormat;
pub use translate::{CodecFormat, ImageFormat};
pub use video_format::VideoFormat;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vidfmt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::descriptor::PixelDescriptor;
    pub use crate::error::{Error, Result};
    pub use crate::frame::{FrameLayout, PlaneLayout};
    pub use crate::id::PixelFormat;
    pub use crate::translate::{CodecFormat, ImageFormat};
    pub use crate::video_format::VideoFormat;
}
