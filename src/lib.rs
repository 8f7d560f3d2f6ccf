//! A minimal raster image library.
//!
//! - [`Bitmap`] — owned pixel buffer, RGB (3 bytes per pixel) or grayscale
//!   (1 byte), rows packed with no padding
//! - Drawing — [`Bitmap::fill_rect`], [`Bitmap::stroke_rect`],
//!   [`Bitmap::fill_ellipse`], [`Bitmap::stroke_line`], [`Bitmap::overdraw`]
//! - [`Point`] / [`Rect`] — clipping and edge arithmetic
//! - [`Component`] — packed color value, interpreted per bitmap mode
//! - [`codec`] — the native binary format, with [`ResourceLimits`] on decode
//! - [`export`] — binary PPM/PGM export
//! - [`ImageFormat`] — format detection from magic bytes or extension
//!
//! Every fallible operation returns [`Error`]; there is no global error
//! state. Malformed geometry is clipped, never reported.
//!
//! ```
//! use bmi::{Bitmap, Component, Flags, Point, Rect, codec, export};
//!
//! let mut bmp = Bitmap::new(64, 64, Flags::empty())?;
//! bmp.fill_rect(bmp.bounds(), Component::BLACK);
//! bmp.stroke_rect(bmp.bounds(), 4, Component::RED);
//! bmp.fill_ellipse(Rect::new(16, 16, 32, 32), Component::YELLOW);
//!
//! let bytes = codec::encode(&bmp);
//! let back = codec::decode(&bytes)?;
//! assert_eq!(back.get_pixel(Point::new(0, 0))?, Component::RED);
//!
//! let ppm = export::to_ppm(&back);
//! assert!(ppm.starts_with(b"P6\n64 64\n255\n"));
//! # Ok::<(), bmi::Error>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod color;
mod draw;
mod error;
mod flags;
mod format;
mod geometry;
mod limits;
mod version;

pub mod codec;
pub mod export;

pub use buffer::Bitmap;
pub use color::Component;
pub use error::Error;
pub use flags::Flags;
pub use format::ImageFormat;
pub use geometry::{Edge, Point, Rect};
pub use limits::{LimitExceeded, ResourceLimits};
pub use version::Version;

// Re-exports for pixel interop.
pub use imgref::{ImgRef, ImgVec};
pub use rgb::{Gray, Rgb};
