//! Owned bitmap: header metadata plus tightly packed pixel contents.
//!
//! Rows are stored top to bottom with no padding, each pixel taking
//! [`Flags::component_size`] bytes. The length of the contents always equals
//! `width * height * component_size`; every constructor checks it.

use alloc::vec::Vec;
use core::fmt;

use imgref::{ImgRef, ImgVec};
use rgb::{Gray, Rgb};

use crate::color::Component;
use crate::error::Error;
use crate::flags::Flags;
use crate::geometry::{Point, Rect};
use crate::limits::ResourceLimits;
use crate::version::Version;

// ---------------------------------------------------------------------------
// Bitmap
// ---------------------------------------------------------------------------

/// An in-memory raster image.
///
/// Created zero-filled with [`Bitmap::new`] or decoded with
/// [`codec::decode`](crate::codec::decode). Drawing operations mutate it in
/// place; its dimensions never change after creation.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    version: Version,
    width: u32,
    height: u32,
    flags: Flags,
    contents: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zero-filled bitmap stamped with [`Version::CURRENT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the content size overflows or the
    /// allocator refuses the request.
    pub fn new(width: u32, height: u32, flags: Flags) -> Result<Self, Error> {
        let size = content_size_of(width, height, flags)?;
        let mut contents = Vec::new();
        contents
            .try_reserve_exact(size)
            .map_err(|_| Error::OutOfMemory { bytes: size as u64 })?;
        contents.resize(size, 0);
        Ok(Self {
            version: Version::CURRENT,
            width,
            height,
            flags,
            contents,
        })
    }

    /// Like [`new`](Self::new), but rejects shapes that exceed `limits`
    /// before allocating.
    pub fn with_limits(
        width: u32,
        height: u32,
        flags: Flags,
        limits: &ResourceLimits,
    ) -> Result<Self, Error> {
        limits.check_bitmap(width, height, flags.component_size())?;
        Self::new(width, height, flags)
    }

    /// Wrap existing pixel contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContentLength`] if `contents` is not exactly
    /// `width * height * component_size` bytes.
    pub fn from_contents(
        width: u32,
        height: u32,
        flags: Flags,
        contents: Vec<u8>,
    ) -> Result<Self, Error> {
        Self::from_parts(Version::CURRENT, width, height, flags, contents)
    }

    pub(crate) fn from_parts(
        version: Version,
        width: u32,
        height: u32,
        flags: Flags,
        contents: Vec<u8>,
    ) -> Result<Self, Error> {
        let expected = content_size_of(width, height, flags)?;
        if contents.len() != expected {
            return Err(Error::ContentLength {
                expected,
                actual: contents.len(),
            });
        }
        Ok(Self {
            version,
            width,
            height,
            flags,
            contents,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Format version this bitmap was created with or decoded from.
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn is_grayscale(&self) -> bool {
        self.flags.is_grayscale()
    }

    /// Bytes per pixel: 1 for grayscale, 3 for RGB.
    #[inline]
    pub fn component_size(&self) -> usize {
        self.flags.component_size()
    }

    /// Total size of the pixel contents in bytes.
    #[inline]
    pub fn content_size(&self) -> usize {
        self.contents.len()
    }

    /// The full extent of the bitmap, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Raw pixel contents, row-major.
    #[inline]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Mutable raw pixel contents. The length cannot change.
    #[inline]
    pub fn contents_mut(&mut self) -> &mut [u8] {
        &mut self.contents
    }

    /// Consume the bitmap and return its contents.
    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }

    /// Byte offset of `point` in the contents. Does not bounds-check.
    #[inline]
    pub(crate) fn offset(&self, point: Point) -> usize {
        (self.width as usize * point.y as usize + point.x as usize) * self.component_size()
    }

    /// Read the pixel at `point`, packed according to the color mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either coordinate is outside the
    /// bitmap.
    pub fn get_pixel(&self, point: Point) -> Result<Component, Error> {
        if point.x >= self.width || point.y >= self.height {
            return Err(Error::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            });
        }
        let index = self.offset(point);
        if self.is_grayscale() {
            Ok(Component::gray(self.contents[index]))
        } else {
            let px = &self.contents[index..index + 3];
            Ok(Component::rgb(px[0], px[1], px[2]))
        }
    }

    // --- rgb / imgref interop ---

    /// Copy out as an RGB8 image. Grayscale is expanded to R=G=B.
    pub fn to_rgb8(&self) -> ImgVec<Rgb<u8>> {
        let pixels: Vec<Rgb<u8>> = if self.is_grayscale() {
            self.contents
                .iter()
                .map(|&v| Rgb { r: v, g: v, b: v })
                .collect()
        } else {
            self.contents
                .chunks_exact(3)
                .map(|c| Rgb {
                    r: c[0],
                    g: c[1],
                    b: c[2],
                })
                .collect()
        };
        ImgVec::new(pixels, self.width as usize, self.height as usize)
    }

    /// Copy out as a Gray8 image if this bitmap is grayscale.
    pub fn to_gray8(&self) -> Option<ImgVec<Gray<u8>>> {
        if !self.is_grayscale() {
            return None;
        }
        let pixels: Vec<Gray<u8>> = self.contents.iter().map(|&v| Gray::new(v)).collect();
        Some(ImgVec::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bitmap({}x{}, {}, v{})",
            self.width,
            self.height,
            if self.is_grayscale() { "gray" } else { "rgb" },
            self.version
        )
    }
}

// ---------------------------------------------------------------------------
// ImgRef → Bitmap
// ---------------------------------------------------------------------------

impl From<ImgRef<'_, Rgb<u8>>> for Bitmap {
    fn from(img: ImgRef<'_, Rgb<u8>>) -> Self {
        let mut contents = Vec::with_capacity(img.width() * img.height() * 3);
        for row in img.rows() {
            for px in row {
                contents.extend_from_slice(&[px.r, px.g, px.b]);
            }
        }
        Self {
            version: Version::CURRENT,
            width: img.width() as u32,
            height: img.height() as u32,
            flags: Flags::empty(),
            contents,
        }
    }
}

impl From<ImgRef<'_, Gray<u8>>> for Bitmap {
    fn from(img: ImgRef<'_, Gray<u8>>) -> Self {
        let mut contents = Vec::with_capacity(img.width() * img.height());
        for row in img.rows() {
            contents.extend(row.iter().map(|px| px.value()));
        }
        Self {
            version: Version::CURRENT,
            width: img.width() as u32,
            height: img.height() as u32,
            flags: Flags::GRAYSCALE,
            contents,
        }
    }
}

/// `width * height * component_size`, or [`Error::OutOfMemory`] on overflow.
pub(crate) fn content_size_of(width: u32, height: u32, flags: Flags) -> Result<usize, Error> {
    let bytes = (width as u64 * height as u64)
        .checked_mul(flags.component_size() as u64)
        .ok_or(Error::OutOfMemory { bytes: u64::MAX })?;
    usize::try_from(bytes).map_err(|_| Error::OutOfMemory { bytes })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
