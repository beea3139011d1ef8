// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Banded Mandelbrot renderer
//!
//! Every pixel is mapped onto the complex plane and iterated from
//! zero until it either leaves the circle of radius two or runs out
//! of iterations.  Points that never leave are inside the set.  The
//! image is drawn in two tones per band: the band's shade decides
//! the brightness, and which channel goes dark tells inside from
//! outside.
//!
//! The rows of the image are split into bands (see `bands`), and each
//! band is handed its own disjoint slice of the image, so the workers
//! never need to coordinate with one another.

extern crate crossbeam;

use image::RgbImage;
use num::Complex;

use bands::{partition, Band};
use consts::{ER2, MAX_THREADS};
use errors::RenderError;
use planes::PlaneMapper;

/// Bytes per pixel in the image buffer.
const CHANNELS: usize = 3;

/// This is our classic iterator function.  It returns the number of
/// iterations performed before the point escaped, which is `limit`
/// exactly when the point did not escape at all.  The squares of
/// both components are carried from one iteration to the next so
/// they are only computed once.
#[inline]
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let (mut zx, mut zy) = (0.0_f64, 0.0_f64);
    let (mut zx2, mut zy2) = (0.0_f64, 0.0_f64);
    let mut iteration = 0;
    while iteration < limit && zx2 + zy2 < ER2 {
        zy = 2.0 * zx * zy + c.im;
        zx = zx2 - zy2 + c.re;
        zx2 = zx * zx;
        zy2 = zy * zy;
        iteration += 1;
    }
    iteration
}

/// The color of a single pixel, given whether it is inside the set
/// and the shade of the band that owns it.
#[inline]
pub fn pixel_color(inside: bool, shade: u8) -> [u8; 3] {
    if inside {
        [0, shade, shade]
    } else {
        [shade, shade, 0]
    }
}

/// The BandRenderer holds the plane and the iteration limit.  Once
/// built it is never mutated, so a single renderer is shared by
/// reference with every band worker.
pub struct BandRenderer {
    plane: PlaneMapper,
    limit: usize,
}

impl BandRenderer {
    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane where the calculation
    /// will take place, and the number of iterations after which a
    /// point counts as inside the set.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        limit: usize,
    ) -> Result<Self, RenderError> {
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        Ok(BandRenderer { plane, limit })
    }

    /// The plane this renderer draws.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// An all-black image the size of the plane, ready for
    /// `render_into`.
    pub fn blank_image(&self) -> RgbImage {
        RgbImage::new(self.plane.width() as u32, self.plane.height() as u32)
    }

    /// Draws the rows of one band.  `pixels` holds exactly those rows,
    /// starting with `band.start_row`, three bytes per pixel.
    pub fn render_band(&self, band: &Band, pixels: &mut [u8]) {
        let width = self.plane.width();
        let row_len = width * CHANNELS;
        assert!(pixels.len() == band.len() * row_len);

        let shade = band.shade(self.plane.height());
        for (row, line) in band.rows().zip(pixels.chunks_mut(row_len)) {
            let im = self.plane.row_to_im(row);
            for (column, pixel) in line.chunks_mut(CHANNELS).enumerate() {
                let c = Complex::new(self.plane.column_to_re(column), im);
                let inside = escape_time(c, self.limit) == self.limit;
                pixel.copy_from_slice(&pixel_color(inside, shade));
            }
        }
    }

    /// The main function for single-threaded renders: the whole
    /// image is one band, drawn on the calling thread.
    pub fn render_single(&self) -> Result<RgbImage, RenderError> {
        let mut image = self.blank_image();
        self.render_into(&mut image, 1)?;
        Ok(image)
    }

    /// Allocates the image and renders into it with `threads` bands.
    pub fn render(&self, threads: usize) -> Result<RgbImage, RenderError> {
        let mut image = self.blank_image();
        self.render_into(&mut image, threads)?;
        Ok(image)
    }

    /// A multi-threaded version of the render function, drawing into
    /// an image the caller already allocated.  The image is
    /// partitioned into `threads` bands (clamped to `MAX_THREADS`);
    /// all but the last are drawn on scoped worker threads, the last
    /// on the calling thread, and every worker has been joined by the
    /// time this returns.
    pub fn render_into(&self, image: &mut RgbImage, threads: usize) -> Result<(), RenderError> {
        let expected = (self.plane.width() as u32, self.plane.height() as u32);
        if image.dimensions() != expected {
            return Err(RenderError::InvalidPlane {
                reason: format!(
                    "The image is {:?}, but the plane is {:?}.",
                    image.dimensions(),
                    expected
                ),
            });
        }

        let threads = threads.min(MAX_THREADS);
        let bands = partition(self.plane.height(), threads);
        if threads <= 1 {
            self.render_band(&bands[0], image);
            return Ok(());
        }

        let row_len = self.plane.width() * CHANNELS;
        let mut slices: Vec<&mut [u8]> = Vec::with_capacity(bands.len());
        let mut rest: &mut [u8] = image;
        for band in &bands {
            let (head, tail) = { rest }.split_at_mut(band.len() * row_len);
            slices.push(head);
            rest = tail;
        }

        let mut work = bands.iter().zip(slices);
        let last = work.next_back();
        crossbeam::scope(|spawner| {
            for (band, pixels) in work {
                debug!("band {} (rows {:?}) spawned", band.index, band.rows());
                spawner.spawn(move |_| {
                    self.render_band(band, pixels);
                    debug!("band {} done", band.index);
                });
            }
            if let Some((band, pixels)) = last {
                debug!("band {} (rows {:?}) on calling thread", band.index, band.rows());
                self.render_band(band, pixels);
                debug!("band {} done", band.index);
            }
        })
        .map_err(|_| RenderError::WorkerPanic)?;

        Ok(())
    }
}
