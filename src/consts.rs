//! The fixed parameters of the render.  There is no runtime override
//! for any of these; the command line only chooses the thread count
//! and where the image lands.

/// Width of the output image, in pixels.
pub const WIDTH: usize = 5000;
/// Height of the output image, in pixels.
pub const HEIGHT: usize = 5000;

/// Left edge of the complex plane.
pub const CX_MIN: f64 = -2.5;
/// Right edge of the complex plane.
pub const CX_MAX: f64 = 1.5;
/// Bottom edge of the complex plane.
pub const CY_MIN: f64 = -2.0;
/// Top edge of the complex plane.
pub const CY_MAX: f64 = 2.0;

/// Iteration cap; a point that survives this many iterations is
/// inside the set.
pub const ITERATION_MAX: usize = 250;

/// Bail-out radius, the radius of the circle.
pub const ESCAPE_RADIUS: f64 = 2.0;
/// The square of the bail-out radius, which is what the loop compares
/// against.
pub const ER2: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Each color component is coded from 0 to 255.
pub const MAX_COLOR_COMPONENT_VALUE: u8 = 255;

/// Most bands (and therefore threads) we will ever run.
pub const MAX_THREADS: usize = 6;

/// Default output file.
pub const OUTPUT_FILE: &str = "result.ppm";

/// The comment line written into the pixmap header.
pub const HEADER_COMMENT: &str = "# ";
