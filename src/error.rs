//! Error types for decoding and for transforms.

use core::fmt;

use crate::AsciiArray;

/// An error while decoding a Netpbm file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnmError {
  /// The file doesn't start with the expected tag and newline.
  ///
  /// Both arrays are the tag bytes plus the separator byte, so `P6\n` is what
  /// a good color file starts with. Bytes past the end of input show as `0`.
  InvalidMagic {
    /// What the decoder wanted.
    expected: AsciiArray<3>,
    /// What the file had.
    found: AsciiArray<3>,
  },

  /// A byte that's neither a digit, whitespace, nor part of a comment was
  /// found in the header, a header field was missing, or a number didn't fit
  /// in a `u32`.
  MalformedHeader,

  /// The maximum sample value was above 255.
  ///
  /// Files with 16-bit samples aren't supported by this decoder.
  ColorRangeError(u32),

  /// There were fewer body bytes than the header's dimensions call for.
  TruncatedBody,

  /// `width * height * channels` doesn't fit in memory addressing.
  DimensionsTooLarge,
}
impl fmt::Display for PnmError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidMagic { expected, found } => {
        write!(f, "invalid magic number: expected {expected:?}, found {found:?}")
      }
      Self::MalformedHeader => write!(f, "malformed header"),
      Self::ColorRangeError(max) => write!(f, "maximum value {max} outside 0..255"),
      Self::TruncatedBody => write!(f, "image data ended early"),
      Self::DimensionsTooLarge => write!(f, "image dimensions too large"),
    }
  }
}
impl core::error::Error for PnmError {}

/// An error from one of the transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
  /// A transform was asked for while there's no current image.
  NoImageLoaded,

  /// Two images that need to be the same size aren't.
  #[allow(missing_docs)]
  DimensionMismatch { left: (u32, u32), right: (u32, u32) },

  /// A percentage parameter was above 100.
  InvalidParameter(u32),
}
impl fmt::Display for TransformError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoImageLoaded => write!(f, "no image loaded"),
      Self::DimensionMismatch { left: (lw, lh), right: (rw, rh) } => {
        write!(f, "image sizes differ: {lw}x{lh} vs {rw}x{rh}")
      }
      Self::InvalidParameter(p) => write!(f, "parameter {p} outside 0..=100"),
    }
  }
}
impl core::error::Error for TransformError {}

/// An error while loading a Netpbm file from a reader or the filesystem.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub enum LoadError {
  /// Reading the bytes failed.
  Io(std::io::Error),
  /// The bytes were read but aren't a valid image.
  Pnm(PnmError),
}
#[cfg(feature = "std")]
impl From<std::io::Error> for LoadError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}
#[cfg(feature = "std")]
impl From<PnmError> for LoadError {
  #[inline]
  fn from(e: PnmError) -> Self {
    Self::Pnm(e)
  }
}
#[cfg(feature = "std")]
impl fmt::Display for LoadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "read failed: {e}"),
      Self::Pnm(e) => write!(f, "decode failed: {e}"),
    }
  }
}
#[cfg(feature = "std")]
impl std::error::Error for LoadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Pnm(e) => Some(e),
    }
  }
}
