//! Packed format version.
//!
//! The header stores the version in a single byte: two bits of major, three
//! of minor and three of patch (`major << 6 | minor << 3 | patch`).

use core::fmt;

/// A format version as stored in the header byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    /// 0.0.0, the only version defined so far.
    pub const V0_0_0: Self = Self::new(0, 0, 0);

    /// Version written by this crate and the only one it reads.
    pub const CURRENT: Self = Self::V0_0_0;

    /// Create a version. Components are masked to their field width
    /// (major: 0–3, minor and patch: 0–7).
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major: major & 0x3,
            minor: minor & 0x7,
            patch: patch & 0x7,
        }
    }

    /// Pack into the header byte.
    #[inline]
    pub const fn pack(self) -> u8 {
        self.major << 6 | self.minor << 3 | self.patch
    }

    /// Unpack a header byte. Every byte value is a valid version.
    #[inline]
    pub const fn unpack(byte: u8) -> Self {
        Self::new(byte >> 6, byte >> 3, byte)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_zero() {
        assert_eq!(Version::CURRENT.pack(), 0x00);
        assert_eq!(format!("{}", Version::CURRENT), "0.0.0");
    }

    #[test]
    fn pack_layout() {
        assert_eq!(Version::new(1, 0, 0).pack(), 0b0100_0000);
        assert_eq!(Version::new(0, 1, 0).pack(), 0b0000_1000);
        assert_eq!(Version::new(0, 0, 1).pack(), 0b0000_0001);
        assert_eq!(Version::new(3, 7, 7).pack(), 0xFF);
    }

    #[test]
    fn unpack_inverts_pack() {
        let v = Version::new(2, 5, 3);
        assert_eq!(Version::unpack(v.pack()), v);
        assert_eq!(format!("{}", Version::unpack(0xFF)), "3.7.7");
    }

    #[test]
    fn new_masks_out_of_range_components() {
        assert_eq!(Version::new(4, 8, 9), Version::new(0, 0, 1));
    }

    #[test]
    fn ordering_follows_packed_value() {
        assert!(Version::new(0, 0, 1) > Version::CURRENT);
        assert!(Version::new(1, 0, 0) > Version::new(0, 7, 7));
    }
}
