//! Fixed-size byte arrays that print as text.

use core::fmt::Write;

/// An array of bytes expected to contain ascii data.
///
/// There's no actual enforced encoding! The `Display` impl will just `as` cast
/// each byte into a character, while `Debug` escapes anything that isn't
/// printable ascii (so a newline shows as `\n`).
///
/// A Netpbm file starts with two ascii magic bytes (`P5`, `P6`) and a newline,
/// so errors about a bad magic number carry those bytes in this type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct AsciiArray<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for AsciiArray<N> {
  #[inline]
  fn default() -> Self {
    Self([0; N])
  }
}

impl<const N: usize> core::fmt::Debug for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    write!(f, "{}", self.0.escape_ascii())?;
    f.write_char('\"')?;
    Ok(())
  }
}
impl<const N: usize> core::fmt::Display for AsciiArray<N> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

impl<const N: usize> From<[u8; N]> for AsciiArray<N> {
  #[inline]
  fn from(array: [u8; N]) -> Self {
    Self(array)
  }
}

#[test]
fn test_ascii_array_default_and_from() {
  assert_eq!(AsciiArray::<3>::default(), AsciiArray([0; 3]));
  assert_eq!(AsciiArray::from(*b"P6\n"), AsciiArray(*b"P6\n"));
  assert_eq!(alloc::format!("{:?}", AsciiArray::from(*b"P6\n")), "\"P6\\n\"");
}
