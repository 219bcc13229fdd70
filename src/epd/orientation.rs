//! Mount-orientation correction applied while streaming plane bytes.
//!
//! Drawing always happens in logical coordinates; orientation only changes
//! the order in which plane bytes are visited during transfer. `invert_x`
//! reverses the row iteration. `invert_y` reverses the byte iteration within
//! a row *and* bit-reverses each byte, because one byte packs 8 horizontally
//! adjacent pixels and a horizontal flip must mirror inside the byte as well.

use std::iter::Rev;
use std::ops::Range;

use super::lut::BIT_REVERSE;

/// Orientation flags resolved at transfer time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orientation {
    /// Reverse the row visit order.
    pub invert_x: bool,
    /// Reverse the per-row byte order and mirror bits within each byte.
    pub invert_y: bool,
}

impl Orientation {
    /// Panel mounted the way the flex cable exits at the bottom.
    pub const NORMAL: Orientation = Orientation {
        invert_x: false,
        invert_y: false,
    };

    /// Panel mounted rotated 180 degrees.
    pub const FLIPPED: Orientation = Orientation {
        invert_x: true,
        invert_y: true,
    };

    /// Row indices in transfer order.
    pub fn rows(&self, height: usize) -> Scan {
        Scan::new(height, self.invert_x)
    }

    /// Byte indices within one row, in transfer order.
    pub fn row_bytes(&self, stride: usize) -> Scan {
        Scan::new(stride, self.invert_y)
    }

    /// Per-byte correction: mirror the bit order when the Y axis is inverted.
    pub fn transform(&self, byte: u8) -> u8 {
        if self.invert_y {
            BIT_REVERSE[byte as usize]
        } else {
            byte
        }
    }
}

/// Forward or reversed index range.
pub enum Scan {
    Forward(Range<usize>),
    Reverse(Rev<Range<usize>>),
}

impl Scan {
    fn new(n: usize, reversed: bool) -> Self {
        if reversed {
            Scan::Reverse((0..n).rev())
        } else {
            Scan::Forward(0..n)
        }
    }
}

impl Iterator for Scan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Scan::Forward(r) => r.next(),
            Scan::Reverse(r) => r.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_is_top_to_bottom() {
        let o = Orientation::NORMAL;
        assert_eq!(o.rows(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(o.row_bytes(3).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn invert_x_reverses_rows_only() {
        let o = Orientation {
            invert_x: true,
            invert_y: false,
        };
        assert_eq!(o.rows(4).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert_eq!(o.row_bytes(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(o.transform(0x01), 0x01);
    }

    #[test]
    fn invert_y_reverses_bytes_and_bits() {
        let o = Orientation {
            invert_x: false,
            invert_y: true,
        };
        assert_eq!(o.rows(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(o.row_bytes(3).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(o.transform(0x01), 0x80);
        assert_eq!(o.transform(0xC0), 0x03);
    }
}
