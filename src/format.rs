//! Image format detection.

/// Formats this crate reads or writes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// The native format (see [`codec`](crate::codec)).
    Bmi,
    /// Portable anymap; written as binary PGM (P5) or PPM (P6).
    Pnm,
    /// Windows bitmap. Recognized, but not supported.
    Bmp,
}

impl ImageFormat {
    /// Detect format from magic bytes. Returns `None` if unrecognized.
    pub fn detect(data: &[u8]) -> Option<Self> {
        // Native: "BMI". Checked before BMP, which shares the first two bytes.
        if data.len() >= 3 && data[..3] == crate::codec::MAGIC {
            return Some(ImageFormat::Bmi);
        }

        // BMP: "BM"
        if data.len() >= 2 && data[..2] == *b"BM" {
            return Some(ImageFormat::Bmp);
        }

        // PNM family: P1-P7
        if data.len() >= 2 && data[0] == b'P' && matches!(data[1], b'1'..=b'7') {
            return Some(ImageFormat::Pnm);
        }

        None
    }

    /// Detect format from file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "bmi" => Some(ImageFormat::Bmi),
            "pnm" | "ppm" | "pgm" => Some(ImageFormat::Pnm),
            "bmp" | "dib" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// MIME type string.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Bmi => "image/x-bmi",
            ImageFormat::Pnm => "image/x-portable-anymap",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// Common file extensions.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ImageFormat::Bmi => &["bmi"],
            ImageFormat::Pnm => &["ppm", "pgm", "pnm"],
            ImageFormat::Bmp => &["bmp", "dib"],
        }
    }

    /// Whether [`codec::decode`](crate::codec::decode) can read this format.
    pub fn supports_decode(self) -> bool {
        matches!(self, ImageFormat::Bmi)
    }

    /// Whether [`export::write_as`](crate::export::write_as) can write this
    /// format.
    pub fn supports_encode(self) -> bool {
        matches!(self, ImageFormat::Bmi | ImageFormat::Pnm)
    }
}

impl core::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ImageFormat::Bmi => "BMI",
            ImageFormat::Pnm => "PNM",
            ImageFormat::Bmp => "BMP",
        })
    }
}
