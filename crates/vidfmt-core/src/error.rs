//! Error types for vidfmt-core operations.
//!
//! Most queries in this crate never fail: an unknown external code resolves
//! to [`PixelFormat::Invalid`](crate::PixelFormat::Invalid) and accessors on an
//! invalid [`VideoFormat`](crate::VideoFormat) return sentinels (`0`, `""`,
//! `false`, `None`). The [`Error`] enum is only produced by the checked
//! entry points:
//!
//! - [`PixelFormat`](crate::PixelFormat)'s `FromStr` implementation
//! - [`VideoFormat::try_bytes_per_line`](crate::VideoFormat::try_bytes_per_line)
//! - [`FrameLayout::new`](crate::FrameLayout::new)
//!
//! # Usage
//!
//! ```rust
//! use vidfmt_core::{Error, PixelFormat};
//!
//! let err = "YUV420P".parse::<PixelFormat>().unwrap_err();
//! assert!(matches!(err, Error::UnknownFormatName { .. }));
//! ```

use crate::id::PixelFormat;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked layout APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No descriptor carries this name. Name matching is case-sensitive.
    #[error("unknown pixel format name: {name:?}")]
    UnknownFormatName {
        /// The name that failed to resolve
        name: String,
    },

    /// The format has no per-pixel memory layout.
    ///
    /// Returned for [`PixelFormat::Invalid`], [`PixelFormat::User`] and the
    /// opaque placeholders (compressed and camera-raw formats).
    #[error("pixel format {format} has no memory layout")]
    NoLayout {
        /// Format that was queried
        format: PixelFormat,
    },

    /// Plane index is not below the format's plane count.
    #[error("plane {plane} out of range for {format} ({planes} planes)")]
    PlaneOutOfRange {
        /// Requested plane
        plane: usize,
        /// Number of planes of the format
        planes: usize,
        /// Format that was queried
        format: PixelFormat,
    },

    /// Line alignment is zero or not a power of two.
    #[error("line alignment {align} is not a power of two")]
    InvalidAlignment {
        /// Requested alignment in bytes
        align: usize,
    },

    /// Frame dimensions cannot describe a buffer.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer size does not fit in `usize`.
    #[error("frame size overflows for {format} at {width}x{height}")]
    SizeOverflow {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Format being laid out
        format: PixelFormat,
    },
}

impl Error {
    /// Creates an [`Error::UnknownFormatName`] error.
    #[inline]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownFormatName { name: name.into() }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error stems from a format without layout.
    #[inline]
    pub fn is_no_layout(&self) -> bool {
        matches!(self, Self::NoLayout { .. })
    }
}
