//! Everything that can go wrong between asking for an image and
//! having one on disk.

use std::io;

/// The error type shared by the renderer and the pixmap writer.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The output file could not be created or written.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    /// The integral or complex plane handed to the renderer has no
    /// usable shape.
    #[fail(display = "Invalid plane: {}", reason)]
    InvalidPlane {
        /// What was wrong with it.
        reason: String,
    },

    /// One of the band workers panicked before finishing its rows.
    #[fail(display = "A band worker panicked before finishing")]
    WorkerPanic,
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> RenderError {
        RenderError::Io(err)
    }
}
