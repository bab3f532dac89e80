use pixmill::*;
use walkdir::WalkDir;

const RGB_2X2: [RGBA8; 4] = [
  RGBA8::opaque(255, 0, 0),
  RGBA8::opaque(0, 255, 0),
  RGBA8::opaque(0, 0, 255),
  RGBA8::opaque(200, 150, 100),
];

#[test]
fn test_load_pnm_fixtures() {
  let img = load_pnm("tests/netpbm/rgb_2x2.ppm", PnmKind::Ppm).unwrap();
  assert_eq!(img.dimensions(), (2, 2));
  assert_eq!(img.pixels, RGB_2X2);

  let img = load_pnm("tests/netpbm/gray_3x1.pgm", PnmKind::Pgm).unwrap();
  assert_eq!(img.pixels, [RGBA8::gray(0), RGBA8::gray(128), RGBA8::gray(255)]);
}

#[test]
fn test_commented_fixture_matches_plain() {
  let plain = load_pnm("tests/netpbm/rgb_2x2.ppm", PnmKind::Ppm).unwrap();
  let commented = load_pnm("tests/netpbm/commented_2x2.ppm", PnmKind::Ppm).unwrap();
  assert_eq!(plain, commented);
}

#[test]
fn test_bad_fixtures() {
  match load_pnm("tests/netpbm/truncated.ppm", PnmKind::Ppm) {
    Err(LoadError::Pnm(PnmError::TruncatedBody)) => (),
    other => panic!("expected a truncated body, got {other:?}"),
  }
  match load_pnm("tests/netpbm/max_1000.pgm", PnmKind::Pgm) {
    Err(LoadError::Pnm(PnmError::ColorRangeError(1000))) => (),
    other => panic!("expected a color range error, got {other:?}"),
  }
  match load_pnm("tests/netpbm/gray_3x1.pgm", PnmKind::Ppm) {
    Err(LoadError::Pnm(PnmError::InvalidMagic { .. })) => (),
    other => panic!("expected a magic error, got {other:?}"),
  }
}

#[test]
fn test_missing_file_is_io_error() {
  let err = load_pnm("tests/netpbm/does_not_exist.ppm", PnmKind::Ppm).unwrap_err();
  assert!(matches!(err, LoadError::Io(_)));
  assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_read_pnm_from_reader() {
  let bytes = std::fs::read("tests/netpbm/rgb_2x2.ppm").unwrap();
  let img = read_pnm(std::io::Cursor::new(bytes), PnmKind::Ppm).unwrap();
  assert_eq!(img.pixels, RGB_2X2);
}

#[test]
fn test_session_open_pnm() {
  let mut session = Session::new();
  assert_eq!(session.open_pnm("tests/netpbm/gray_3x1.pgm").unwrap().dimensions(), (3, 1));
  assert!(session.open_pnm("tests/netpbm/truncated.ppm").is_err());
  // a failed open keeps the old image
  assert_eq!(session.current().map(PixelBuffer::dimensions), Some((3, 1)));
  session.apply(&Transform::RotateClockwise).unwrap();
  assert_eq!(session.current().map(PixelBuffer::dimensions), Some((1, 3)));
}

#[test]
fn test_netpbm_no_panics() {
  // every file in the test folder, even non-netpbm files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    if !entry.file_type().is_file() {
      continue;
    }
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = netpbm_decode_auto(&v);
    let _ = netpbm_decode(&v, PnmKind::Pgm);
    let _ = netpbm_decode(&v, PnmKind::Ppm);
  }
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = netpbm_decode_auto(&v);
    let _ = netpbm_decode(&v, PnmKind::Ppm);
  }
  // or random data after a good header.
  let headers = [&b"P6\n"[..], &b"P6\n4 4\n"[..], &b"P5\n4 4\n255\n"[..], &b"P6\n17 3\n255\n#"[..]];
  for header in headers {
    for _ in 0..10 {
      let mut v = header.to_vec();
      v.extend(super::rand_bytes(64));
      let _ = netpbm_decode_auto(&v);
    }
  }
}

#[test]
fn test_random_body_round_trips_bytes() {
  let body = super::rand_bytes(5 * 4 * 3);
  let mut v = b"P6\n5 4\n255\n".to_vec();
  v.extend_from_slice(&body);
  // a body starting with `#` would be read as a comment line
  v[11] = b'a';
  let img = netpbm_decode(&v, PnmKind::Ppm).unwrap();
  let rgb: Vec<u8> = img.pixels.iter().flat_map(|px| [px.r, px.g, px.b]).collect();
  assert_eq!(&rgb[..], &v[11..]);
}
