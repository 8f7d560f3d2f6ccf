//! Error type shared by allocation, pixel access, blitting and the codecs.

use crate::geometry::{Point, Rect};
use crate::limits::LimitExceeded;
use crate::version::Version;

/// Everything that can go wrong in this crate.
///
/// Malformed geometry is never an error: rectangles and lines are clipped.
/// Only memory, bounds, format and I/O failures are reported. The `Display`
/// output is the human-readable description of the failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The pixel contents could not be allocated, or their size overflows.
    #[error("out of memory allocating {bytes} bytes of pixel contents")]
    OutOfMemory { bytes: u64 },

    /// A pixel read addressed a point outside the bitmap.
    #[error("point {point} is outside the {width}x{height} bitmap")]
    OutOfBounds { point: Point, width: u32, height: u32 },

    /// A blit region is larger than the source bitmap.
    #[error(
        "region {region} does not fit in the {source_width}x{source_height} source bitmap"
    )]
    SizeMismatch {
        region: Rect,
        source_width: u32,
        source_height: u32,
    },

    /// Input is shorter than the fixed header.
    #[error("input is {len} bytes, too small to hold a header")]
    TooSmall { len: usize },

    /// Magic bytes do not identify this format.
    #[error("invalid header magic {magic:02x?}")]
    InvalidHeader { magic: [u8; 3] },

    /// File was written by an older, unsupported format version.
    #[error("file has outdated version {0}")]
    VersionOutdated(Version),

    /// File was written by a newer format version.
    #[error("file has version {0} from the future")]
    VersionFuture(Version),

    /// Contents do not match the size declared by the header.
    #[error("header declares {expected} content bytes but {actual} are present")]
    ContentLength { expected: usize, actual: usize },

    /// A configured resource limit was exceeded.
    #[error(transparent)]
    Limit(#[from] LimitExceeded),

    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operation is declared but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
