//! Writes the finished image as a binary pixmap: a short text header
//! followed by the raw RGB bytes, row by row.

use image::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use consts::{HEADER_COMMENT, MAX_COLOR_COMPONENT_VALUE};
use errors::RenderError;

/// The text header that precedes the pixel data.
pub fn header(width: u32, height: u32) -> String {
    format!(
        "P6\n {}\n {}\n {}\n {}\n",
        HEADER_COMMENT, width, height, MAX_COLOR_COMPONENT_VALUE
    )
}

/// Write the header and pixels of `image` to any writer.
pub fn write_pixmap<W: Write>(mut out: W, image: &RgbImage) -> Result<(), RenderError> {
    let (width, height) = image.dimensions();
    out.write_all(header(width, height).as_bytes())?;
    out.write_all(&**image)?;
    out.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write the image into it.
pub fn save_pixmap<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<(), RenderError> {
    let output = File::create(path.as_ref())?;
    write_pixmap(BufWriter::new(output), image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_the_classic_layout() {
        assert_eq!(header(5000, 5000), "P6\n # \n 5000\n 5000\n 255\n");
    }

    #[test]
    fn pixels_follow_the_header_in_row_major_order() {
        let raw = vec![0, 10, 20, 1, 11, 21, 2, 12, 22, 3, 13, 23];
        let image = RgbImage::from_raw(2, 2, raw.clone()).unwrap();
        let mut out: Vec<u8> = vec![];
        write_pixmap(&mut out, &image).unwrap();

        let head = header(2, 2);
        assert!(out.starts_with(head.as_bytes()));
        assert_eq!(&out[head.len()..], &raw[..]);
    }

    #[test]
    fn saving_to_a_missing_directory_is_an_io_error() {
        let dir = ::tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("result.ppm");
        match save_pixmap(&path, &RgbImage::new(1, 1)) {
            Err(RenderError::Io(_)) => {}
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn saved_file_has_header_and_every_byte() {
        let dir = ::tempfile::tempdir().unwrap();
        let path = dir.path().join("result.ppm");
        save_pixmap(&path, &RgbImage::new(3, 4)).unwrap();
        let written = ::std::fs::read(&path).unwrap();
        assert_eq!(written.len(), header(3, 4).len() + 3 * 4 * 3);
    }
}
