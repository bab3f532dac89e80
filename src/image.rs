#![forbid(unsafe_code)]

//! Provides the heap-allocated raster that every decoder and transform in this
//! crate works with.

use alloc::vec::Vec;

use crate::RGBA8;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// You don't ever need to call this function yourself, but it's how
/// [`PixelBuffer`] converts 2d coordinates into index values within its pixel
/// vector.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// A direct-color RGBA image, row-major with the origin at the top left.
///
/// The fields are public, but if `pixels.len()` doesn't equal
/// `width * height` the methods of this type will treat the buffer as smaller
/// than it claims (`get` returns `None`, `rows` stops early). Everything in
/// this crate that *creates* a buffer keeps that length exact.
///
/// When `has_alpha` is false every pixel is opaque: alpha is kept at 255 and
/// is not looked at by `==`.
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
  /// If the alpha channel carries information.
  pub has_alpha: bool,
  /// `width * height` pixels.
  pub pixels: Vec<RGBA8>,
}
impl PixelBuffer {
  /// An opaque black image of the given size.
  ///
  /// ## Panics
  /// * If `width * height` overflows `usize` (or the allocation fails).
  #[inline]
  #[must_use]
  pub fn new(width: u32, height: u32) -> Self {
    let count = (width as usize).checked_mul(height as usize).expect("image dimensions overflow");
    Self { width, height, has_alpha: false, pixels: alloc::vec![RGBA8::BLACK; count] }
  }

  /// Wraps an existing pixel vector, or gives it back if the length is wrong.
  #[inline]
  pub fn from_pixels(
    width: u32, height: u32, has_alpha: bool, pixels: Vec<RGBA8>,
  ) -> Result<Self, Vec<RGBA8>> {
    match (width as usize).checked_mul(height as usize) {
      Some(count) if count == pixels.len() => Ok(Self { width, height, has_alpha, pixels }),
      _ => Err(pixels),
    }
  }

  /// `(width, height)`
  #[inline]
  #[must_use]
  pub const fn dimensions(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  /// If the image has no pixels at all.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pixels.is_empty()
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<RGBA8> {
    if x < self.width && y < self.height {
      self.pixels.get(xy_width_to_index(x, y, self.width)).copied()
    } else {
      None
    }
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut RGBA8> {
    if x < self.width && y < self.height {
      let i = xy_width_to_index(x, y, self.width);
      self.pixels.get_mut(i)
    } else {
      None
    }
  }

  /// Iterates the rows, top to bottom.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[RGBA8]> + '_ {
    // `chunks_exact` panics on 0, and a zero width image has no pixels anyway.
    let row_len = (self.width as usize).max(1);
    self.pixels.chunks_exact(row_len).take(self.height as usize)
  }

  /// The pixel data as `[r, g, b, a, r, g, b, a, ...]` bytes.
  ///
  /// This is the layout most display surfaces want for an RGBA8 texture.
  #[inline]
  #[must_use]
  pub fn as_rgba_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }
}

impl PartialEq for PixelBuffer {
  fn eq(&self, other: &Self) -> bool {
    if self.dimensions() != other.dimensions() || self.has_alpha != other.has_alpha {
      return false;
    }
    if self.pixels.len() != other.pixels.len() {
      return false;
    }
    let mut pairs = self.pixels.iter().zip(other.pixels.iter());
    if self.has_alpha {
      pairs.all(|(l, r)| l == r)
    } else {
      pairs.all(|(l, r)| l.rgb() == r.rgb())
    }
  }
}
impl Eq for PixelBuffer {}
