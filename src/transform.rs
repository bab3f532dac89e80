#![forbid(unsafe_code)]

//! Pixel transforms.
//!
//! Every transform borrows its input and gives back a new [`PixelBuffer`], the
//! input is never changed. All of the math is done in integers, and anything
//! that's a fraction "on paper" is rounded toward zero.
//!
//! The geometric transforms (rotations and flips), and color segmentation,
//! always give an opaque image. Negative and grayscale keep the input's alpha.

use alloc::vec::Vec;

use crate::{xy_width_to_index, PixelBuffer, TransformError, RGB8, RGBA8};

/// How far (inclusive) each channel may be from the target color for a pixel
/// to survive [`color_segmentation`].
pub const SEGMENTATION_TOLERANCE: u8 = 50;

/// One of the single-image transforms, along with its parameters.
///
/// The two-image [`blend`] isn't here since it needs a second image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
  /// [`negative`]
  Negative,
  /// [`grayscale`]
  Grayscale,
  /// [`alpha_gradient`]
  AlphaGradient {
    /// Transparency, `0..=100`.
    percent: u32,
  },
  /// [`color_segmentation`]
  ColorSegmentation {
    /// The color to keep.
    target: RGB8,
  },
  /// [`rotate_cw`]
  RotateClockwise,
  /// [`rotate_ccw`]
  RotateCounterClockwise,
  /// [`rotate_180`]
  Rotate180,
  /// [`flip_horizontal`]
  FlipHorizontal,
  /// [`flip_vertical`]
  FlipVertical,
}
impl Transform {
  /// Runs this transform on `img`.
  pub fn apply(&self, img: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
    Ok(match *self {
      Self::Negative => negative(img),
      Self::Grayscale => grayscale(img),
      Self::AlphaGradient { percent } => alpha_gradient(img, percent)?,
      Self::ColorSegmentation { target } => color_segmentation(img, target),
      Self::RotateClockwise => rotate_cw(img),
      Self::RotateCounterClockwise => rotate_ccw(img),
      Self::Rotate180 => rotate_180(img),
      Self::FlipHorizontal => flip_horizontal(img),
      Self::FlipVertical => flip_vertical(img),
    })
  }
}

/// Runs `transform` on the current image, if there is one.
///
/// ## Failure
/// * [`TransformError::NoImageLoaded`] when `current` is `None`.
/// * Whatever the transform itself can fail with.
#[inline]
pub fn apply_transform(
  current: Option<&PixelBuffer>, transform: &Transform,
) -> Result<PixelBuffer, TransformError> {
  let img = current.ok_or(TransformError::NoImageLoaded)?;
  transform.apply(img)
}

#[inline]
fn check_percent(percent: u32) -> Result<u32, TransformError> {
  if percent <= 100 {
    Ok(percent)
  } else {
    Err(TransformError::InvalidParameter(percent))
  }
}

#[inline]
fn map_pixels(img: &PixelBuffer, has_alpha: bool, f: impl Fn(RGBA8) -> RGBA8) -> PixelBuffer {
  let pixels = img.pixels.iter().copied().map(f).collect();
  PixelBuffer { width: img.width, height: img.height, has_alpha, pixels }
}

/// Builds a `width` x `height` opaque image where each output position pulls
/// from the input position that `source` gives.
fn remap(
  img: &PixelBuffer, width: u32, height: u32, source: impl Fn(u32, u32) -> (u32, u32),
) -> PixelBuffer {
  if width == 0 || height == 0 {
    return PixelBuffer { width, height, has_alpha: false, pixels: Vec::new() };
  }
  let pixels = (0..height)
    .flat_map(|y| (0..width).map(move |x| (x, y)))
    .map(|(x, y)| {
      let (sx, sy) = source(x, y);
      img.get(sx, sy).unwrap_or_default().to_opaque()
    })
    .collect();
  PixelBuffer { width, height, has_alpha: false, pixels }
}

/// Inverts each color channel (`255 - c`). Alpha is left alone.
#[must_use]
pub fn negative(img: &PixelBuffer) -> PixelBuffer {
  map_pixels(img, img.has_alpha, |RGBA8 { r, g, b, a }| RGBA8 {
    r: u8::MAX - r,
    g: u8::MAX - g,
    b: u8::MAX - b,
    a,
  })
}

/// Replaces each pixel's color with its [luma](RGBA8::luma). Alpha is left
/// alone.
#[must_use]
pub fn grayscale(img: &PixelBuffer) -> PixelBuffer {
  map_pixels(img, img.has_alpha, |px| {
    let y = px.luma();
    RGBA8 { r: y, g: y, b: y, a: px.a }
  })
}

/// Sets every pixel's alpha from a transparency percentage.
///
/// `alpha = (1 - percent / 100) * 255`, rounded down: `0` is fully opaque
/// and `100` is fully transparent. Colors don't change.
///
/// ## Failure
/// * [`TransformError::InvalidParameter`] if `percent` is above 100.
pub fn alpha_gradient(img: &PixelBuffer, percent: u32) -> Result<PixelBuffer, TransformError> {
  let percent = check_percent(percent)?;
  let alpha = ((100 - percent) * u8::MAX as u32 / 100) as u8;
  Ok(map_pixels(img, true, |px| RGBA8 { a: alpha, ..px }))
}

/// Keeps pixels close to `target` and turns everything else black.
///
/// A pixel is kept when every channel is within [`SEGMENTATION_TOLERANCE`] of
/// the target's channel (both ends inclusive). The output is opaque.
#[must_use]
pub fn color_segmentation(img: &PixelBuffer, target: RGB8) -> PixelBuffer {
  let close = |c: u8, t: u8| c.abs_diff(t) <= SEGMENTATION_TOLERANCE;
  map_pixels(img, false, |px| {
    if close(px.r, target.r) && close(px.g, target.g) && close(px.b, target.b) {
      px.to_opaque()
    } else {
      RGBA8::BLACK
    }
  })
}

/// Rotates a quarter turn clockwise. Width and height swap.
///
/// Input `(x, y)` lands at output `(height - 1 - y, x)`.
#[must_use]
pub fn rotate_cw(img: &PixelBuffer) -> PixelBuffer {
  let (w, h) = img.dimensions();
  remap(img, h, w, |x, y| (y, h - 1 - x))
}

/// Rotates a quarter turn counter-clockwise. Width and height swap.
///
/// Input `(x, y)` lands at output `(y, width - 1 - x)`.
#[must_use]
pub fn rotate_ccw(img: &PixelBuffer) -> PixelBuffer {
  let (w, h) = img.dimensions();
  remap(img, h, w, |x, y| (w - 1 - y, x))
}

/// Rotates a half turn, the same as flipping both ways.
#[must_use]
pub fn rotate_180(img: &PixelBuffer) -> PixelBuffer {
  let (w, h) = img.dimensions();
  remap(img, w, h, |x, y| (w - 1 - x, h - 1 - y))
}

/// Mirrors left to right.
#[must_use]
pub fn flip_horizontal(img: &PixelBuffer) -> PixelBuffer {
  let (w, h) = img.dimensions();
  remap(img, w, h, |x, y| (w - 1 - x, y))
}

/// Mirrors top to bottom.
#[must_use]
pub fn flip_vertical(img: &PixelBuffer) -> PixelBuffer {
  let (w, h) = img.dimensions();
  remap(img, w, h, |x, y| (x, h - 1 - y))
}

/// Mixes two same-sized images.
///
/// With `a = percent / 100`, each channel is `first * (1 - a) + second * a`,
/// rounded down. `0` gives `first` and `100` gives `second`. The output is
/// opaque.
///
/// ## Failure
/// * [`TransformError::InvalidParameter`] if `percent` is above 100.
/// * [`TransformError::DimensionMismatch`] if the images aren't the same
///   size.
pub fn blend(
  first: &PixelBuffer, second: &PixelBuffer, percent: u32,
) -> Result<PixelBuffer, TransformError> {
  let percent = check_percent(percent)?;
  if first.dimensions() != second.dimensions() {
    return Err(TransformError::DimensionMismatch {
      left: first.dimensions(),
      right: second.dimensions(),
    });
  }
  let mix = |l: u8, r: u8| ((l as u32 * (100 - percent) + r as u32 * percent) / 100) as u8;
  let (w, h) = first.dimensions();
  let pixels = (0..h)
    .flat_map(|y| (0..w).map(move |x| xy_width_to_index(x, y, w)))
    .map(|i| {
      let l = first.pixels.get(i).copied().unwrap_or_default();
      let r = second.pixels.get(i).copied().unwrap_or_default();
      RGBA8::opaque(mix(l.r, r.r), mix(l.g, r.g), mix(l.b, r.b))
    })
    .collect();
  Ok(PixelBuffer { width: w, height: h, has_alpha: false, pixels })
}
