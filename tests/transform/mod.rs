use pixmill::*;

use super::rand_image;

fn samples() -> Vec<PixelBuffer> {
  vec![
    rand_image(1, 1, false),
    rand_image(7, 3, false),
    rand_image(4, 9, true),
    rand_image(16, 16, false),
    rand_image(0, 3, false),
  ]
}

#[test]
fn test_rotate_cw_then_ccw_is_identity() {
  for img in samples() {
    let back = rotate_ccw(&rotate_cw(&img));
    assert_eq!(back.dimensions(), img.dimensions());
    for y in 0..img.height {
      for x in 0..img.width {
        assert_eq!(back.get(x, y).map(RGBA8::rgb), img.get(x, y).map(RGBA8::rgb));
      }
    }
  }
}

#[test]
fn test_four_quarter_turns_is_identity() {
  for img in samples().into_iter().filter(|img| !img.has_alpha) {
    let turned = rotate_cw(&rotate_cw(&rotate_cw(&rotate_cw(&img))));
    assert_eq!(turned, img);
    assert_eq!(rotate_cw(&rotate_cw(&img)), rotate_180(&img));
  }
}

#[test]
fn test_flips_are_involutions() {
  for img in samples().into_iter().filter(|img| !img.has_alpha) {
    assert_eq!(flip_horizontal(&flip_horizontal(&img)), img);
    assert_eq!(flip_vertical(&flip_vertical(&img)), img);
  }
}

#[test]
fn test_negative_is_involution() {
  for img in samples() {
    assert_eq!(negative(&negative(&img)), img);
  }
  // every channel value, not just the random ones
  let all = PixelBuffer::from_pixels(256, 1, false, (0..=255).map(RGBA8::gray).collect()).unwrap();
  assert_eq!(negative(&negative(&all)), all);
}

#[test]
fn test_grayscale_is_idempotent() {
  for img in samples() {
    let once = grayscale(&img);
    assert_eq!(grayscale(&once), once);
  }
}

#[test]
fn test_transforms_leave_input_alone() {
  let img = rand_image(5, 6, true);
  let copy = img.clone();
  let _ = negative(&img);
  let _ = rotate_cw(&img);
  let _ = alpha_gradient(&img, 30).unwrap();
  assert_eq!(img, copy);
}

#[test]
fn test_blend_endpoints() {
  let a = rand_image(6, 5, false);
  let b = rand_image(6, 5, false);
  assert_eq!(blend(&a, &b, 0).unwrap(), a);
  assert_eq!(blend(&a, &b, 100).unwrap(), b);
  // an image mixed half and half with itself is unchanged
  assert_eq!(blend(&a, &a, 50).unwrap(), a);
}

#[test]
fn test_blend_rejects_mismatch() {
  let a = rand_image(6, 5, false);
  let b = rand_image(5, 5, false);
  assert_eq!(
    blend(&a, &b, 40),
    Err(TransformError::DimensionMismatch { left: (6, 5), right: (5, 5) })
  );
}

#[test]
fn test_segmentation_only_keeps_close_pixels() {
  let target = RGB8::new(128, 64, 200);
  let img = rand_image(20, 20, false);
  let out = color_segmentation(&img, target);
  for (src, dst) in img.pixels.iter().zip(out.pixels.iter()) {
    let close = src.r.abs_diff(target.r) <= 50
      && src.g.abs_diff(target.g) <= 50
      && src.b.abs_diff(target.b) <= 50;
    if close {
      assert_eq!(dst.rgb(), src.rgb());
    } else {
      assert_eq!(*dst, RGBA8::BLACK);
    }
  }
}
