//! Packed color components.
//!
//! A [`Component`] is a bare `u32`. For RGB bitmaps byte 0 holds red,
//! byte 1 green and byte 2 blue; for grayscale bitmaps only the low byte is
//! used. The value carries no tag: the grayscale flag of the bitmap being
//! read or written decides how it is interpreted.

use rgb::Rgb;

/// A packed RGB triple or grayscale scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Component(pub u32);

impl Component {
    // Named constants ---------------------------------------------------------

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const ORANGE: Self = Self::rgb(255, 128, 0);

    pub const GRAY_WHITE: Self = Self::gray(255);
    pub const GRAY_BLACK: Self = Self::gray(0);

    // Packing -----------------------------------------------------------------

    /// Pack an RGB triple.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r as u32 | (g as u32) << 8 | (b as u32) << 16)
    }

    /// Pack a grayscale value.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self(value as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The grayscale scalar (low byte). Higher bytes are ignored.
    #[inline]
    pub const fn gray_value(self) -> u8 {
        self.0 as u8
    }

    /// Weighted per-channel mix of two RGB components.
    ///
    /// Each channel is `(c0 * i0 + c1 * i1) / 256`. Intensities are meant to
    /// sum to about 256 but this is not checked; a channel that exceeds 255
    /// is truncated to its low byte.
    pub const fn blend(c0: Self, i0: u32, c1: Self, i1: u32) -> Self {
        const fn mix(a: u8, i0: u32, b: u8, i1: u32) -> u8 {
            ((a as u32).wrapping_mul(i0).wrapping_add((b as u32).wrapping_mul(i1)) / 256) as u8
        }
        Self::rgb(
            mix(c0.r(), i0, c1.r(), i1),
            mix(c0.g(), i0, c1.g(), i1),
            mix(c0.b(), i0, c1.b(), i1),
        )
    }

    /// Unpack as an `rgb` crate pixel.
    pub const fn to_rgb8(self) -> Rgb<u8> {
        Rgb {
            r: self.r(),
            g: self.g(),
            b: self.b(),
        }
    }
}

impl From<Rgb<u8>> for Component {
    fn from(px: Rgb<u8>) -> Self {
        Self::rgb(px.r, px.g, px.b)
    }
}

impl From<Component> for u32 {
    fn from(c: Component) -> Self {
        c.0
    }
}
