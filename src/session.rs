#![forbid(unsafe_code)]

//! The "current image" slot of a viewer.
//!
//! A [`Session`] owns at most one [`PixelBuffer`]. Transforms borrow it and
//! only replace it once they've succeeded, so a failed transform leaves the
//! session just as it was.

use crate::{apply_transform, blend, PixelBuffer, Transform, TransformError};

/// Holds the image a viewer is currently showing.
#[derive(Debug, Clone, Default)]
pub struct Session {
  current: Option<PixelBuffer>,
}
impl Session {
  /// A session with no image.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { current: None }
  }

  /// The current image, if any.
  #[inline]
  #[must_use]
  pub fn current(&self) -> Option<&PixelBuffer> {
    self.current.as_ref()
  }

  /// Installs `img` as the current image, giving back the old one.
  #[inline]
  pub fn replace(&mut self, img: PixelBuffer) -> Option<PixelBuffer> {
    log::debug!("current image is now {}x{}", img.width, img.height);
    self.current.replace(img)
  }

  /// Removes the current image.
  #[inline]
  pub fn take(&mut self) -> Option<PixelBuffer> {
    self.current.take()
  }

  /// Runs `transform` on the current image and makes the result current.
  ///
  /// On success a reference to the new current image is returned.
  ///
  /// ## Failure
  /// * [`TransformError::NoImageLoaded`] if the session is empty.
  /// * Whatever the transform can fail with. The current image is kept.
  pub fn apply(&mut self, transform: &Transform) -> Result<&PixelBuffer, TransformError> {
    let out = apply_transform(self.current.as_ref(), transform).map_err(|e| {
      log::debug!("{transform:?} rejected: {e}");
      e
    })?;
    log::debug!("applied {transform:?}");
    Ok(self.current.insert(out))
  }

  /// Blends the current image with `other` without changing the session.
  ///
  /// A viewer with a live slider can call this on every slider move and show
  /// the result; each call is independent of the last.
  ///
  /// ## Failure
  /// * [`TransformError::NoImageLoaded`] if the session is empty.
  /// * Whatever [`blend`] fails with.
  pub fn blend_preview(
    &self, other: &PixelBuffer, percent: u32,
  ) -> Result<PixelBuffer, TransformError> {
    let current = self.current.as_ref().ok_or(TransformError::NoImageLoaded)?;
    blend(current, other, percent)
  }

  /// Loads a `.pgm` or `.ppm` file and makes it current.
  ///
  /// The kind of file is picked from the extension, and if the extension isn't
  /// one of those two the tag in the file decides. On failure the current
  /// image is kept.
  #[cfg(all(feature = "std", feature = "netpbm"))]
  #[cfg_attr(docs_rs, doc(cfg(all(feature = "std", feature = "netpbm"))))]
  pub fn open_pnm<P: AsRef<std::path::Path>>(
    &mut self, path: P,
  ) -> Result<&PixelBuffer, crate::LoadError> {
    let path = path.as_ref();
    let kind = path.extension().and_then(|e| e.to_str()).and_then(crate::PnmKind::from_extension);
    let img = match kind {
      Some(kind) => crate::load_pnm(path, kind)?,
      None => crate::netpbm_decode_auto(&std::fs::read(path)?)?,
    };
    log::debug!("opened {}", path.display());
    Ok(self.current.insert(img))
  }
}
