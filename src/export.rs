//! Export to other formats.
//!
//! Binary PNM is the only real target: its pixel layout matches this crate's
//! contents exactly (P5 for grayscale, P6 for RGB), so export is a short
//! text header followed by the contents verbatim.

use alloc::vec::Vec;
use std::io::Write;

use crate::buffer::Bitmap;
use crate::codec;
use crate::error::Error;
use crate::format::ImageFormat;

/// Encode as binary PGM (grayscale) or PPM (RGB).
pub fn to_ppm(bitmap: &Bitmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(bitmap.content_size() + 32);
    // Writing into a Vec cannot fail.
    let _ = write_ppm(bitmap, &mut out);
    out
}

/// Write as binary PGM (grayscale) or PPM (RGB).
///
/// # Errors
///
/// [`Error::Io`] if any write fails or is short.
pub fn write_ppm<W: Write>(bitmap: &Bitmap, mut writer: W) -> Result<(), Error> {
    let magic = if bitmap.is_grayscale() { "P5" } else { "P6" };
    write!(
        writer,
        "{magic}\n{} {}\n255\n",
        bitmap.width(),
        bitmap.height()
    )?;
    writer.write_all(bitmap.contents())?;
    writer.flush()?;
    log::debug!("exported {bitmap:?} as {magic}");
    Ok(())
}

/// BMP export. Always fails with [`Error::NotImplemented`].
pub fn write_bmp<W: Write>(_bitmap: &Bitmap, _writer: W) -> Result<(), Error> {
    Err(Error::NotImplemented("BMP export"))
}

/// Write `bitmap` in `format`.
pub fn write_as<W: Write>(format: ImageFormat, bitmap: &Bitmap, writer: W) -> Result<(), Error> {
    match format {
        ImageFormat::Bmi => codec::write_to(bitmap, writer),
        ImageFormat::Pnm => write_ppm(bitmap, writer),
        ImageFormat::Bmp => write_bmp(bitmap, writer),
    }
}
