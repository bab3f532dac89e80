/// Splits the first `N` bytes off as an array, or `None` if there's fewer
/// than `N` bytes.
#[inline]
pub(crate) fn try_pull_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().ok()?;
    Some((a, tail))
  } else {
    None
  }
}

#[test]
fn test_try_pull_byte_array() {
  assert_eq!(try_pull_byte_array::<2>(b"P6\n"), Some((*b"P6", &b"\n"[..])));
  assert_eq!(try_pull_byte_array::<2>(b"P"), None);
  assert_eq!(try_pull_byte_array::<0>(b""), Some(([], &b""[..])));
}
