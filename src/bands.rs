//! Splits the rows of an image into contiguous bands, one per
//! thread, and works out how many threads the caller asked for.

use num::clamp;
use std::ops::Range;

use consts::{MAX_COLOR_COMPONENT_VALUE, MAX_THREADS};

/// A contiguous strip of image rows assigned to one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Band {
    /// First row of the band.
    pub start_row: usize,
    /// One past the last row of the band.
    pub end_row: usize,
    /// Position of the band in the partition.
    pub index: usize,
}

impl Band {
    /// Number of rows in the band.
    pub fn len(&self) -> usize {
        self.end_row - self.start_row
    }

    /// True if the band covers no rows at all.
    pub fn is_empty(&self) -> bool {
        self.end_row == self.start_row
    }

    /// The rows of the band, as a range.
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    /// The shade every pixel in this band is drawn with.  It depends
    /// only on where the band starts, so it shows which band drew
    /// which part of the image.
    pub fn shade(&self, total_rows: usize) -> u8 {
        if total_rows == 0 {
            return 0;
        }
        let shade = (self.start_row as f64) / (total_rows as f64)
            * f64::from(MAX_COLOR_COMPONENT_VALUE);
        shade as u8
    }
}

/// Break `total_rows` into `thread_count` contiguous bands of equal
/// size, except for the last one, which also takes whatever rows are
/// left over.  A thread count of one or less gets a single band.
pub fn partition(total_rows: usize, thread_count: usize) -> Vec<Band> {
    if thread_count <= 1 {
        return vec![Band {
            start_row: 0,
            end_row: total_rows,
            index: 0,
        }];
    }

    let rows_per_band = total_rows / thread_count;
    let remainder = total_rows % thread_count;
    (0..thread_count)
        .map(|index| {
            let start_row = index * rows_per_band;
            let extra = if index == thread_count - 1 { remainder } else { 0 };
            Band {
                start_row,
                end_row: start_row + rows_per_band + extra,
                index,
            }
        })
        .collect()
}

/// Reads an integer the way C's `atoi` does: skip leading
/// whitespace, accept one sign, then take digits until something else
/// turns up.  No digits at all reads as zero.
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.chars().next() {
        Some('-') => (true, &s[1..]),
        Some('+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d)));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Turns the `-P<N>` argument into a thread count between 1 and
/// `MAX_THREADS`.  Counts above the maximum are clamped down to it;
/// anything unreadable, or one and below, means a single thread.
/// This never fails.
pub fn parse_thread_count(arg: &str) -> usize {
    if !arg.contains("-P") {
        return 1;
    }

    // The count is read from the third character on, wherever the
    // "-P" was found.
    let requested = leading_integer(arg.get(2..).unwrap_or(""));
    if requested > 1 {
        clamp(requested, 1, MAX_THREADS as i64) as usize
    } else {
        1
    }
}
