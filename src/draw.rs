//! Drawing primitives on [`Bitmap`].
//!
//! Everything except [`Bitmap::draw_point`] clips its geometry to the bitmap
//! first, so out-of-range shapes are trimmed rather than rejected. Pixels are
//! written opaquely in the bitmap's own color mode; there is no blending.

use core::mem;

use crate::buffer::Bitmap;
use crate::color::Component;
use crate::error::Error;
use crate::geometry::{Edge, Point, Rect};

impl Bitmap {
    /// Write a single pixel.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the bitmap. Callers are expected to clip;
    /// every other drawing operation does.
    pub fn draw_point(&mut self, point: Point, pixel: Component) {
        assert!(
            self.bounds().contains(point),
            "point {point} out of bounds ({}x{})",
            self.width(),
            self.height()
        );
        let index = self.offset(point);
        let grayscale = self.is_grayscale();
        let contents = self.contents_mut();
        if grayscale {
            contents[index] = pixel.gray_value();
        } else {
            contents[index..index + 3].copy_from_slice(&[pixel.r(), pixel.g(), pixel.b()]);
        }
    }

    /// Fill a rectangle, clipped to the bitmap.
    pub fn fill_rect(&mut self, rect: Rect, pixel: Component) {
        let rect = rect.clip_to(self.bounds());
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.bottom() {
            self.fill_span(rect.x, y, rect.width, pixel);
        }
    }

    /// Outline a rectangle with bands `thickness` pixels wide, measured
    /// inward from each side.
    ///
    /// The top and bottom bands span the full width; the left and right
    /// bands fill the height between them. A thickness of at least half the
    /// rectangle's extent fills it completely.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: u32, pixel: Component) {
        let rect = rect.clip_to(self.bounds());

        let left = rect
            .inset_edge(thickness, Edge::Top)
            .inset_edge(thickness, Edge::Bottom)
            .set_edge(thickness, Edge::Left);
        let right = rect
            .inset_edge(thickness, Edge::Top)
            .inset_edge(thickness, Edge::Bottom)
            .set_edge(thickness, Edge::Right);
        let top = rect.set_edge(thickness, Edge::Top);
        let bottom = rect.set_edge(thickness, Edge::Bottom);

        for band in [left, right, top, bottom] {
            self.fill_rect(band, pixel);
        }
    }

    /// Fill the ellipse inscribed in `rect` (after clipping).
    ///
    /// A pixel is painted when its centre lies inside or on the ellipse.
    /// Each row is filled as one horizontal span.
    pub fn fill_ellipse(&mut self, rect: Rect, pixel: Component) {
        let rect = rect.clip_to(self.bounds());
        if rect.is_empty() {
            return;
        }

        // Work in half-pixel units so pixel centres are integers:
        // centre offsets are |2i + 1 - w| horizontally and |2j + 1 - h|
        // vertically, and a centre is inside when
        // (dx / w)^2 + (dy / h)^2 <= 1.
        let w = rect.width as u128;
        let h = rect.height as u128;
        for j in 0..rect.height {
            let dy = (2 * j as u128 + 1).abs_diff(h);
            let reach = (w * w * (h * h - dy * dy) / (h * h)).isqrt();
            let first = (w - 1).saturating_sub(reach).div_ceil(2);
            let last = ((w - 1 + reach) / 2).min(w - 1);
            if first <= last {
                self.fill_span(
                    rect.x + first as u32,
                    rect.y + j,
                    (last - first + 1) as u32,
                    pixel,
                );
            }
        }
    }

    /// Draw a line from `start` towards `end` with Bresenham stepping.
    ///
    /// Both endpoints are clipped to the bitmap first. Iteration runs along
    /// the axis with the larger delta and stops before reaching `end`, so
    /// the pixel at `end` itself is not painted.
    ///
    /// `thickness` widens the line across its minor axis: each step paints
    /// a run of `thickness` pixels centred on the ideal line. A thickness of
    /// zero paints nothing.
    pub fn stroke_line(&mut self, start: Point, end: Point, thickness: u32, pixel: Component) {
        if thickness == 0 {
            return;
        }
        let bounds = self.bounds();
        let mut start = start.clip_to(bounds);
        let mut end = end.clip_to(bounds);

        let dx = start.x.abs_diff(end.x) as i64;
        let dy = start.y.abs_diff(end.y) as i64;

        if dy > dx {
            // Vertical-dominant: step y, occasionally x.
            if end.y < start.y {
                mem::swap(&mut start, &mut end);
            }
            let x_step = if end.x < start.x { -1 } else { 1 };
            let mut error = 2 * dx - dy;
            let mut x = start.x as i64;
            for y in start.y..end.y {
                self.fill_rect(line_run(x, thickness, |lo, len| Rect::new(lo, y, len, 1)), pixel);
                if error > 0 {
                    x += x_step;
                    error -= 2 * dy;
                }
                error += 2 * dx;
            }
        } else {
            // Horizontal-dominant: step x, occasionally y.
            if end.x < start.x {
                mem::swap(&mut start, &mut end);
            }
            let y_step = if end.y < start.y { -1 } else { 1 };
            let mut error = 2 * dy - dx;
            let mut y = start.y as i64;
            for x in start.x..end.x {
                self.fill_rect(line_run(y, thickness, |lo, len| Rect::new(x, lo, 1, len)), pixel);
                if error > 0 {
                    y += y_step;
                    error -= 2 * dx;
                }
                error += 2 * dy;
            }
        }
    }

    /// Copy `source` into `region` of this bitmap.
    ///
    /// `region` is clipped to this bitmap, then filled from the source's
    /// top-left corner. Pixels are copied as packed components without any
    /// color-mode conversion, so copying between a grayscale and an RGB
    /// bitmap reinterprets the values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the clipped region is wider or
    /// taller than `source`.
    pub fn overdraw(&mut self, region: Rect, source: &Bitmap) -> Result<(), Error> {
        let region = region.clip_to(self.bounds());
        if region.width > source.width() || region.height > source.height() {
            return Err(Error::SizeMismatch {
                region,
                source_width: source.width(),
                source_height: source.height(),
            });
        }
        if self.is_grayscale() != source.is_grayscale() {
            log::warn!(
                "overdraw between {:?} and {:?} copies components without conversion",
                self,
                source
            );
        }

        for y in 0..region.height {
            for x in 0..region.width {
                let pixel = source.get_pixel(Point::new(x, y))?;
                self.draw_point(Point::new(region.x + x, region.y + y), pixel);
            }
        }
        Ok(())
    }

    /// Fill `len` pixels of row `y` starting at column `x`. The span must be
    /// in bounds.
    fn fill_span(&mut self, x: u32, y: u32, len: u32, pixel: Component) {
        let start = self.offset(Point::new(x, y));
        let grayscale = self.is_grayscale();
        let contents = self.contents_mut();
        if grayscale {
            contents[start..start + len as usize].fill(pixel.gray_value());
        } else {
            let rgb = [pixel.r(), pixel.g(), pixel.b()];
            for px in contents[start..start + len as usize * 3].chunks_exact_mut(3) {
                px.copy_from_slice(&rgb);
            }
        }
    }
}

/// Rectangle covering a run of `thickness` pixels centred on `center` along
/// the minor axis. `make` receives the clamped start and length.
fn line_run(center: i64, thickness: u32, make: impl FnOnce(u32, u32) -> Rect) -> Rect {
    let lo = center - (thickness as i64 - 1) / 2;
    let hi = lo + thickness as i64;
    let lo = lo.max(0);
    make(lo as u32, (hi - lo).max(0) as u32)
}
