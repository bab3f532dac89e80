#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for the core of a simple image viewer.
//!
//! * [`netpbm`] decodes binary `.pgm` (`P5`) and `.ppm` (`P6`) files into a
//!   [`PixelBuffer`].
//! * [`transform`] has the edits a viewer offers: negative, grayscale, alpha,
//!   color segmentation, rotations, flips, and blending two images.
//! * [`Session`] is the viewer's "current image" slot.
//!
//! Other formats (png, jpeg, ...), drawing to the screen, and dialogs are the
//! job of whatever program uses this crate.
//!
//! ```
//! use pixmill::{netpbm_decode, negative, PnmKind, RGBA8};
//!
//! let mut bytes = b"P6\n2 1\n255\n".to_vec();
//! bytes.extend_from_slice(&[255, 0, 0, 0, 255, 0]);
//! let img = netpbm_decode(&bytes, PnmKind::Ppm).unwrap();
//! assert_eq!(img.get(1, 0), Some(RGBA8::opaque(0, 255, 0)));
//!
//! let neg = negative(&img);
//! assert_eq!(neg.get(0, 0), Some(RGBA8::opaque(0, 255, 255)));
//! ```
//!
//! ## Features
//! * `std` (default): read files and [`std::io::Read`] sources.
//! * `netpbm` (default): the Netpbm decoder.
//!
//! Logging goes through the [`log`](https://docs.rs/log) facade, so nothing is
//! printed unless the program installs a logger.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod ascii_array;
pub use ascii_array::*;

mod error;
pub use error::*;

pub mod image;
pub use image::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

#[cfg(feature = "netpbm")]
#[cfg_attr(docs_rs, doc(cfg(feature = "netpbm")))]
pub mod netpbm;
#[cfg(feature = "netpbm")]
pub use netpbm::*;

pub mod transform;
pub use transform::*;

pub mod session;
pub use session::*;
