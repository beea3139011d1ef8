#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Banded Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points on the complex plane that
//! do not run off to infinity when repeatedly squared and added back
//! to themselves.  This crate renders the classic escape-time picture
//! of it, cutting the image into horizontal bands of rows and drawing
//! each band on its own thread.
//!
//! Each band is drawn in a shade derived from the row it starts on,
//! so the finished image shows not only which points are inside the
//! set, but which thread drew them.  The result is written out as a
//! binary pixmap.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate itertools;
#[cfg(test)]
extern crate tempfile;

pub mod bands;
pub mod consts;
pub mod errors;
pub mod pixmap;
pub mod planes;
pub mod render;

pub use bands::{parse_thread_count, partition, Band};
pub use errors::RenderError;
pub use pixmap::{save_pixmap, write_pixmap};
pub use planes::PlaneMapper;
pub use render::{escape_time, BandRenderer};
