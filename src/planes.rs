//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the
//! complex plane.
use num::Complex;

use errors::RenderError;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a pixel in the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from the first onto
/// points of the second.  Row 0 maps to the lower edge of the complex
/// plane.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // How much of the complex plane one pixel covers, horizontally
    // and vertically.
    pixel_size: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidPlane {
                reason: format!("The image must have an area, not {}x{}.", width, height),
            });
        }

        if rightupper.re < leftlower.re {
            return Err(RenderError::InvalidPlane {
                reason: "The left lower corner is not to the left of the right upper corner."
                    .to_string(),
            });
        }

        if rightupper.im < leftlower.im {
            return Err(RenderError::InvalidPlane {
                reason: "The left lower corner is not lower than the right upper corner."
                    .to_string(),
            });
        }

        let pixel_size = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            pixel_size,
        })
    }

    /// Width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The width and height of a single pixel on the complex plane.
    pub fn pixel_size(&self) -> (f64, f64) {
        self.pixel_size
    }

    /// The real component for every pixel in a given column.
    #[inline]
    pub fn column_to_re(&self, column: usize) -> f64 {
        self.complex_plane.0.re + (column as f64) * self.pixel_size.0
    }

    /// The imaginary component for every pixel in a given row.  A row
    /// that lands within half a pixel of the real axis is put exactly
    /// on it, so the main antenna is rendered from the same orbits as
    /// its mirror image.
    #[inline]
    pub fn row_to_im(&self, row: usize) -> f64 {
        let im = self.complex_plane.0.im + (row as f64) * self.pixel_size.1;
        if im.abs() < self.pixel_size.1 / 2.0 {
            0.0
        } else {
            im
        }
    }

    /// Given a pixel on the integral cartesian plane, map that to its
    /// point on the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(self.column_to_re(pixel.0), self.row_to_im(pixel.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consts::{CX_MAX, CX_MIN, CY_MAX, CY_MIN, HEIGHT, WIDTH};

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(1.0, -1.0), Complex::new(-1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_image() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 0, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
        let pm = pm.unwrap();
        assert_eq!(pm.len(), 16);
        assert!(!pm.is_empty());
    }

    #[test]
    fn pixel_to_point_on_positive_planes() {
        let pm = PlaneMapper::new(5, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(2.0, 2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_points_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(pm.pixel_to_point(&Pixel(4, 4)), Complex::new(2.0, 2.0));
    }

    #[test]
    fn row_near_the_real_axis_snaps_to_zero() {
        let pm = PlaneMapper::new(
            WIDTH,
            HEIGHT,
            Complex::new(CX_MIN, CY_MIN),
            Complex::new(CX_MAX, CY_MAX),
        )
        .unwrap();
        let (_, pixel_height) = pm.pixel_size();
        let middle = HEIGHT / 2;
        let unsnapped = CY_MIN + (middle as f64) * pixel_height;
        assert!(unsnapped.abs() < pixel_height / 2.0);
        assert_eq!(pm.row_to_im(middle), 0.0);
        assert!(pm.row_to_im(middle - 1) < 0.0);
        assert!(pm.row_to_im(middle + 1) > 0.0);
    }

    #[test]
    fn mirrored_rows_map_to_conjugate_points() {
        let pm = PlaneMapper::new(64, 64, Complex::new(-2.5, -2.0), Complex::new(1.5, 2.0)).unwrap();
        for row in 1..32 {
            assert_eq!(pm.row_to_im(row), -pm.row_to_im(64 - row));
        }
        assert_eq!(pm.row_to_im(32), 0.0);
    }
}
