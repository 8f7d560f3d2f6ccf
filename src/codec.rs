//! The native binary format.
//!
//! A file is a fixed 16-byte header followed by the raw pixel contents:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 3 | magic `"BMI"` |
//! | 3 | 1 | packed [`Version`] |
//! | 4 | 4 | width, little-endian `u32` |
//! | 8 | 4 | height, little-endian `u32` |
//! | 12 | 4 | [`Flags`], little-endian `u32` |
//! | 16 | w × h × (1 or 3) | contents, row-major |
//!
//! There is no length field; the content length follows from the header,
//! and the decoder rejects input whose remaining bytes disagree with it.
//! Decoding is whole-buffer only.

use alloc::vec::Vec;
use std::io::{Read, Write};

use crate::buffer::{Bitmap, content_size_of};
use crate::error::Error;
use crate::flags::Flags;
use crate::limits::ResourceLimits;
use crate::version::Version;

/// Magic bytes at the start of every encoded bitmap (`"BMI"`).
pub const MAGIC: [u8; 3] = [0x42, 0x4d, 0x49];

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 16;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Parsed file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub width: u32,
    pub height: u32,
    pub flags: Flags,
}

impl Header {
    /// Header describing `bitmap`.
    pub fn of(bitmap: &Bitmap) -> Self {
        Self {
            version: bitmap.version(),
            width: bitmap.width(),
            height: bitmap.height(),
            flags: bitmap.flags(),
        }
    }

    /// Parse and validate the header at the start of `data`.
    ///
    /// # Errors
    ///
    /// In order of checking: [`Error::TooSmall`], [`Error::InvalidHeader`],
    /// [`Error::VersionOutdated`], [`Error::VersionFuture`].
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        let Some(header) = data.first_chunk::<HEADER_SIZE>() else {
            return Err(Error::TooSmall { len: data.len() });
        };

        let magic = [header[0], header[1], header[2]];
        if magic != MAGIC {
            return Err(Error::InvalidHeader { magic });
        }

        let version = Version::unpack(header[3]);
        if version.pack() < Version::CURRENT.pack() {
            return Err(Error::VersionOutdated(version));
        }
        if version.pack() > Version::CURRENT.pack() {
            return Err(Error::VersionFuture(version));
        }

        let parsed = Self {
            version,
            width: read_u32(header, 4),
            height: read_u32(header, 8),
            flags: Flags::from_bits_retain(read_u32(header, 12)),
        };
        log::trace!("parsed header {parsed:?}");
        Ok(parsed)
    }

    /// Serialize to the on-disk layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..3].copy_from_slice(&MAGIC);
        out[3] = self.version.pack();
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..16].copy_from_slice(&self.flags.bits().to_le_bytes());
        out
    }

    /// Content bytes implied by the dimensions and flags.
    pub fn content_size(&self) -> Result<usize, Error> {
        content_size_of(self.width, self.height, self.flags)
    }
}

#[inline]
fn read_u32(bytes: &[u8; HEADER_SIZE], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Decode configuration.
///
/// ```
/// use bmi::{Bitmap, Flags, ResourceLimits, codec};
///
/// let bytes = codec::encode(&Bitmap::new(8, 8, Flags::GRAYSCALE)?);
/// let decoder = codec::Decoder::new().with_limits(ResourceLimits::none().with_max_width(4));
/// assert!(decoder.decode(&bytes).is_err());
/// # Ok::<(), bmi::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    limits: ResourceLimits,
}

impl Decoder {
    /// Decoder with no resource limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Parse the header and check it against the limits without touching
    /// the contents.
    pub fn probe(&self, data: &[u8]) -> Result<Header, Error> {
        let header = Header::parse(data)?;
        self.limits
            .check_bitmap(header.width, header.height, header.flags.component_size())?;
        Ok(header)
    }

    /// Decode a complete encoded bitmap.
    ///
    /// # Errors
    ///
    /// Header errors as for [`Header::parse`], [`Error::Limit`] if a limit is
    /// exceeded, and [`Error::ContentLength`] if the bytes after the header
    /// are not exactly the size the header declares.
    pub fn decode(&self, data: &[u8]) -> Result<Bitmap, Error> {
        self.limits.check_file_size(data.len() as u64)?;
        let header = self.probe(data)?;

        let expected = header.content_size()?;
        let body = &data[HEADER_SIZE..];
        if body.len() != expected {
            return Err(Error::ContentLength {
                expected,
                actual: body.len(),
            });
        }

        let mut contents = Vec::new();
        contents
            .try_reserve_exact(expected)
            .map_err(|_| Error::OutOfMemory {
                bytes: expected as u64,
            })?;
        contents.extend_from_slice(body);

        let bitmap =
            Bitmap::from_parts(header.version, header.width, header.height, header.flags, contents)?;
        log::debug!("decoded {bitmap:?} from {} bytes", data.len());
        Ok(bitmap)
    }

    /// Read `reader` to the end and decode the result.
    ///
    /// With a `max_file_size` limit, at most one byte past the limit is read
    /// before the input is rejected.
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Bitmap, Error> {
        let mut data = Vec::new();
        match self.limits.max_file_size {
            Some(max) => reader
                .by_ref()
                .take(max.saturating_add(1))
                .read_to_end(&mut data)?,
            None => reader.read_to_end(&mut data)?,
        };
        self.decode(&data)
    }
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encode configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Encoder {
    limits: ResourceLimits,
}

impl Encoder {
    /// Encoder with no resource limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only `max_output_bytes` applies to encoding.
    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Exact size of the encoded form of `bitmap`.
    pub fn encoded_size(bitmap: &Bitmap) -> usize {
        HEADER_SIZE + bitmap.content_size()
    }

    /// Encode into a new vector.
    pub fn encode(&self, bitmap: &Bitmap) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(Self::encoded_size(bitmap));
        self.write_to(bitmap, &mut out)?;
        Ok(out)
    }

    /// Write the header followed by the contents.
    ///
    /// # Errors
    ///
    /// [`Error::Limit`] if the output would exceed `max_output_bytes`;
    /// [`Error::Io`] if the writer fails or accepts fewer bytes than given.
    pub fn write_to<W: Write>(&self, bitmap: &Bitmap, mut writer: W) -> Result<(), Error> {
        self.limits
            .check_output_size(Self::encoded_size(bitmap) as u64)?;
        writer.write_all(&Header::of(bitmap).to_bytes())?;
        writer.write_all(bitmap.contents())?;
        writer.flush()?;
        log::debug!("encoded {bitmap:?}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Decode with no resource limits.
pub fn decode(data: &[u8]) -> Result<Bitmap, Error> {
    Decoder::new().decode(data)
}

/// Read a stream to the end and decode it, with no resource limits.
pub fn read_from<R: Read>(reader: R) -> Result<Bitmap, Error> {
    Decoder::new().read_from(reader)
}

/// Encode into a new vector.
pub fn encode(bitmap: &Bitmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(Encoder::encoded_size(bitmap));
    out.extend_from_slice(&Header::of(bitmap).to_bytes());
    out.extend_from_slice(bitmap.contents());
    out
}

/// Write the encoded bitmap to `writer`.
pub fn write_to<W: Write>(bitmap: &Bitmap, writer: W) -> Result<(), Error> {
    Encoder::new().write_to(bitmap, writer)
}
