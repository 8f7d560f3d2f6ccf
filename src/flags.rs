//! Header flag bitset.

use bitflags::bitflags;

bitflags! {
    /// Bitmap flags stored in the file header.
    ///
    /// Bits this crate does not know about are kept as-is so a decoded file
    /// re-encodes byte-for-byte.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// One byte per pixel instead of three.
        const GRAYSCALE = 1 << 0;
    }
}

impl Flags {
    /// Bytes per pixel: 1 for grayscale, 3 for RGB.
    #[inline]
    pub const fn component_size(self) -> usize {
        if self.contains(Self::GRAYSCALE) { 1 } else { 3 }
    }

    #[inline]
    pub const fn is_grayscale(self) -> bool {
        self.contains(Self::GRAYSCALE)
    }
}
