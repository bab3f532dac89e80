#![forbid(unsafe_code)]

//! This module gives support for the binary
//! [Netpbm](https://en.wikipedia.org/wiki/Netpbm) gray and color formats.
//!
//! * `P5` (`.pgm`): one byte per pixel, gray.
//! * `P6` (`.ppm`): three bytes per pixel, red/green/blue.
//!
//! A file looks like this:
//! ```text
//! P6
//! # comments can go between any two header fields
//! 2 1
//! 255
//! <width * height * 3 raw bytes>
//! ```
//! The tag must be followed by exactly one newline. Width, height and the
//! maximum sample value are ascii decimal numbers: width ends with a space,
//! height and the maximum each end with a newline. Before each number any
//! whitespace is skipped, and there `#` starts a comment that runs to the end
//! of the line. Comment lines are
//! also allowed right before the pixel bytes. The maximum sample value must be
//! 255 or less; it's checked but samples are **not** rescaled by it, every
//! byte is used as a plain `0..=255` channel value.
//!
//! Use [`netpbm_decode`] when you know which kind of file you expect (eg: from
//! the file extension), or [`netpbm_decode_auto`] to go by the tag in the data.
//! [`netpbm_parse_header`] gives just the header and the body bytes.

use alloc::vec::Vec;

use crate::{try_pull_byte_array, AsciiArray, PixelBuffer, PnmError, RGB8, RGBA8};

/// The two Netpbm kinds this decoder handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PnmKind {
  /// `P5`, binary gray.
  Pgm,
  /// `P6`, binary RGB.
  Ppm,
}
impl PnmKind {
  /// The two tag bytes at the start of the file.
  #[inline]
  #[must_use]
  pub const fn magic(self) -> [u8; 2] {
    match self {
      Self::Pgm => *b"P5",
      Self::Ppm => *b"P6",
    }
  }

  /// Bytes per pixel in the body.
  #[inline]
  #[must_use]
  pub const fn channels(self) -> usize {
    match self {
      Self::Pgm => 1,
      Self::Ppm => 3,
    }
  }

  /// Looks up the kind for a tag.
  #[inline]
  #[must_use]
  pub const fn from_magic(magic: [u8; 2]) -> Option<Self> {
    match magic {
      [b'P', b'5'] => Some(Self::Pgm),
      [b'P', b'6'] => Some(Self::Ppm),
      _ => None,
    }
  }

  /// Looks up the kind for a file extension (`"pgm"` or `"ppm"`, any case,
  /// without the dot).
  #[inline]
  #[must_use]
  pub fn from_extension(ext: &str) -> Option<Self> {
    if ext.eq_ignore_ascii_case("pgm") {
      Some(Self::Pgm)
    } else if ext.eq_ignore_ascii_case("ppm") {
      Some(Self::Ppm)
    } else {
      None
    }
  }

  #[inline]
  const fn magic_line(self) -> [u8; 3] {
    let [p, n] = self.magic();
    [p, n, b'\n']
  }
}

/// The header fields of a `P5` or `P6` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetpbmHeader {
  /// Which kind of file this is.
  pub kind: PnmKind,
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
  /// The declared maximum sample value, `0..=255`.
  pub max: u32,
}
impl NetpbmHeader {
  /// `width * height`, if that fits in a `usize`.
  #[inline]
  #[must_use]
  pub fn pixel_count(&self) -> Option<usize> {
    (self.width as usize).checked_mul(self.height as usize)
  }

  /// Bytes in one row of the body.
  #[inline]
  #[must_use]
  pub fn row_len(&self) -> Option<usize> {
    (self.width as usize).checked_mul(self.kind.channels())
  }

  /// Bytes in the whole body.
  #[inline]
  #[must_use]
  pub fn body_len(&self) -> Option<usize> {
    self.row_len()?.checked_mul(self.height as usize)
  }
}

/// Read position within one decode call.
struct NetpbmCursor<'b> {
  bytes: &'b [u8],
}
impl<'b> NetpbmCursor<'b> {
  #[inline]
  const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes }
  }

  #[inline]
  fn peek(&self) -> Option<u8> {
    self.bytes.first().copied()
  }

  #[inline]
  fn next_byte(&mut self) -> Option<u8> {
    let (&u, tail) = self.bytes.split_first()?;
    self.bytes = tail;
    Some(u)
  }

  /// Consumes up to and including the next newline (or everything, if there's
  /// no newline left).
  #[inline]
  fn skip_comment(&mut self) {
    let mut it = self.bytes.splitn(2, |&u| u == b'\n');
    let comment = it.next().unwrap_or(&[]);
    log::trace!("skipping comment: {}", comment.escape_ascii());
    self.bytes = it.next().unwrap_or(&[]);
  }

  fn skip_whitespace_and_comments(&mut self) {
    loop {
      match self.peek() {
        Some(u) if u.is_ascii_whitespace() => {
          let _ = self.next_byte();
        }
        Some(b'#') => self.skip_comment(),
        _ => return,
      }
    }
  }

  fn pull_magic(&mut self, kind: PnmKind) -> Result<(), PnmError> {
    let expected = kind.magic_line();
    match try_pull_byte_array::<3>(self.bytes) {
      Some((found, tail)) if found == expected => {
        self.bytes = tail;
        Ok(())
      }
      _ => {
        let mut found = [0_u8; 3];
        self.bytes.iter().zip(found.iter_mut()).for_each(|(b, f)| *f = *b);
        Err(PnmError::InvalidMagic { expected: AsciiArray(expected), found: AsciiArray(found) })
      }
    }
  }

  /// Reads one decimal header field, which must end with `terminator`.
  fn pull_u32(&mut self, terminator: u8) -> Result<u32, PnmError> {
    self.skip_whitespace_and_comments();
    let mut value: u32 = 0;
    let mut digits = 0_usize;
    loop {
      match self.next_byte() {
        Some(u @ b'0'..=b'9') => {
          value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(u - b'0')))
            .ok_or(PnmError::MalformedHeader)?;
          digits += 1;
        }
        Some(u) if digits > 0 && u == terminator => return Ok(value),
        _ => return Err(PnmError::MalformedHeader),
      }
    }
  }

  fn skip_body_comments(&mut self) {
    while self.peek() == Some(b'#') {
      self.skip_comment();
    }
  }

  #[inline]
  fn pull_row(&mut self, row_len: usize) -> Result<&'b [u8], PnmError> {
    if self.bytes.len() < row_len {
      return Err(PnmError::TruncatedBody);
    }
    let (row, tail) = self.bytes.split_at(row_len);
    self.bytes = tail;
    Ok(row)
  }
}

/// Parses the header, giving it back along with the body bytes.
///
/// The body slice starts at the first pixel byte (any comment lines between
/// the header and the pixels are already skipped) and runs to the end of the
/// input, so it can be longer than [`NetpbmHeader::body_len`].
///
/// ## Failure
/// * [`PnmError::InvalidMagic`] if the data doesn't start with the tag for
///   `kind` followed by a newline.
/// * [`PnmError::MalformedHeader`] if the width, height, or max can't be read.
/// * [`PnmError::ColorRangeError`] if the max is above 255.
pub fn netpbm_parse_header(
  bytes: &[u8], kind: PnmKind,
) -> Result<(NetpbmHeader, &[u8]), PnmError> {
  let mut cursor = NetpbmCursor::new(bytes);
  cursor.pull_magic(kind)?;
  let width = cursor.pull_u32(b' ')?;
  let height = cursor.pull_u32(b'\n')?;
  let max = cursor.pull_u32(b'\n')?;
  if max > u8::MAX as u32 {
    return Err(PnmError::ColorRangeError(max));
  }
  cursor.skip_body_comments();
  let header = NetpbmHeader { kind, width, height, max };
  log::debug!("netpbm header: {header:?}");
  if max != u8::MAX as u32 {
    log::warn!("netpbm max value is {max}, samples will be used without rescaling");
  }
  Ok((header, cursor.bytes))
}

/// Decodes the pixel bytes that follow a header.
///
/// Extra bytes after the last row are ignored.
pub fn netpbm_decode_body(header: &NetpbmHeader, body: &[u8]) -> Result<PixelBuffer, PnmError> {
  let pixel_count = header.pixel_count().ok_or(PnmError::DimensionsTooLarge)?;
  let row_len = header.row_len().ok_or(PnmError::DimensionsTooLarge)?;
  let body_len = header.body_len().ok_or(PnmError::DimensionsTooLarge)?;
  let NetpbmHeader { kind, width, height, .. } = *header;
  if pixel_count == 0 {
    return Ok(PixelBuffer { width, height, has_alpha: false, pixels: Vec::new() });
  }
  // Check before allocating, so a lying header can't make us reserve memory
  // for pixels that aren't there.
  if body.len() < body_len {
    return Err(PnmError::TruncatedBody);
  }
  let mut pixels: Vec<RGBA8> = Vec::new();
  pixels.try_reserve_exact(pixel_count).map_err(|_| PnmError::DimensionsTooLarge)?;
  let mut cursor = NetpbmCursor::new(body);
  for _ in 0..height {
    let row = cursor.pull_row(row_len)?;
    match kind {
      PnmKind::Pgm => pixels.extend(row.iter().copied().map(RGBA8::gray)),
      PnmKind::Ppm => {
        let rgb: &[RGB8] =
          bytemuck::try_cast_slice(row).map_err(|_| PnmError::TruncatedBody)?;
        pixels.extend(rgb.iter().copied().map(RGBA8::from));
      }
    }
  }
  Ok(PixelBuffer { width, height, has_alpha: false, pixels })
}

/// Decodes a `P5` or `P6` file, which must be of the `kind` given.
///
/// ## Failure
/// Everything [`netpbm_parse_header`] fails on, and
/// [`PnmError::TruncatedBody`] if there aren't enough pixel bytes.
#[inline]
pub fn netpbm_decode(bytes: &[u8], kind: PnmKind) -> Result<PixelBuffer, PnmError> {
  let (header, body) = netpbm_parse_header(bytes, kind)?;
  netpbm_decode_body(&header, body)
}

/// Decodes a `P5` or `P6` file, picking the kind from the file's tag.
///
/// If the tag isn't one of those two the error's `expected` value is `P?\n`.
pub fn netpbm_decode_auto(bytes: &[u8]) -> Result<PixelBuffer, PnmError> {
  match try_pull_byte_array::<2>(bytes).and_then(|(magic, _)| PnmKind::from_magic(magic)) {
    Some(kind) => netpbm_decode(bytes, kind),
    None => {
      let mut found = [0_u8; 3];
      bytes.iter().zip(found.iter_mut()).for_each(|(b, f)| *f = *b);
      Err(PnmError::InvalidMagic { expected: AsciiArray(*b"P?\n"), found: AsciiArray(found) })
    }
  }
}

/// Reads all of `reader` and decodes it as `kind`.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub fn read_pnm<R: std::io::Read>(
  mut reader: R, kind: PnmKind,
) -> Result<PixelBuffer, crate::LoadError> {
  let mut bytes = Vec::new();
  reader.read_to_end(&mut bytes)?;
  Ok(netpbm_decode(&bytes, kind)?)
}

/// Reads the file at `path` and decodes it as `kind`.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub fn load_pnm<P: AsRef<std::path::Path>>(
  path: P, kind: PnmKind,
) -> Result<PixelBuffer, crate::LoadError> {
  let path = path.as_ref();
  log::debug!("loading {kind:?} from {}", path.display());
  let bytes = std::fs::read(path)?;
  Ok(netpbm_decode(&bytes, kind)?)
}
