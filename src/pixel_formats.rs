//! Module for pixel formats.
//!
//! Everything in this crate works on 8 bits per channel. The decoder produces
//! [`RGBA8`] pixels no matter what the file stored:
//! * A color sample triple `[r, g, b]` becomes `RGBA8 { r, g, b, a: 255 }`.
//! * A gray sample `y` is copied into all three color channels.
//!
//! ## Between RGB and Gray
//! Because the human eye doesn't respond equally to all three colors,
//! converting RGB to gray isn't a plain average. The weighting is:
//! ```text
//! Y = 0.299 * R + 0.587 * G + 0.114 * B
//! ```
//! and the result is rounded down. [`RGBA8::luma`] does this in integer math
//! (thousandths), so a gray pixel always maps back onto itself.

use bytemuck::{Pod, Zeroable};

/// An RGB value, 8-bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl RGB8 {
  /// Makes a color from its three channels.
  #[inline]
  #[must_use]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}
impl From<[u8; 3]> for RGB8 {
  #[inline]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}

/// An 8-bits per channel RGBA pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGBA8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}
impl RGBA8 {
  /// Opaque black.
  pub const BLACK: Self = Self::opaque(0, 0, 0);
  /// Opaque white.
  pub const WHITE: Self = Self::opaque(255, 255, 255);

  /// A color with full alpha.
  #[inline]
  #[must_use]
  pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: u8::MAX }
  }

  /// A gray color with full alpha.
  #[inline]
  #[must_use]
  pub const fn gray(y: u8) -> Self {
    Self::opaque(y, y, y)
  }

  /// The color channels, without alpha.
  #[inline]
  #[must_use]
  pub const fn rgb(self) -> RGB8 {
    RGB8 { r: self.r, g: self.g, b: self.b }
  }

  /// The same color with alpha forced back to 255.
  #[inline]
  #[must_use]
  pub const fn to_opaque(self) -> Self {
    Self::opaque(self.r, self.g, self.b)
  }

  /// `floor(0.299 * r + 0.587 * g + 0.114 * b)`
  #[inline]
  #[must_use]
  pub const fn luma(self) -> u8 {
    let weighted = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
    // max is 255_000, so the quotient always fits
    (weighted / 1000) as u8
  }
}
impl From<RGB8> for RGBA8 {
  #[inline]
  fn from(RGB8 { r, g, b }: RGB8) -> Self {
    Self::opaque(r, g, b)
  }
}
impl From<[u8; 3]> for RGBA8 {
  #[inline]
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self::opaque(r, g, b)
  }
}

#[test]
fn test_luma_of_gray_is_identity() {
  for y in 0..=u8::MAX {
    assert_eq!(RGBA8::gray(y).luma(), y, "failed y:{y}");
  }
  assert_eq!(RGBA8::opaque(255, 0, 0).luma(), 76);
  assert_eq!(RGBA8::opaque(0, 255, 0).luma(), 149);
  assert_eq!(RGBA8::opaque(0, 0, 255).luma(), 29);
}
