//! Packed 1-bit-per-pixel plane buffers and drawing primitives.
//!
//! One [`BitPlane`] holds a single color channel of the display (black or
//! red). Layout is row-major, most-significant-bit first within a byte,
//! `stride = ceil(width / 8)` bytes per row. Bit semantics follow the panel
//! RAM: `true` (1) is blank paper, `false` (0) is ink, so a fresh frame is
//! filled with `0xFF` and glyphs are drawn with 0 bits.
//!
//! All primitives work in logical pixel coordinates; mount orientation is
//! applied only when the plane is streamed to the panel, never here.
//! Out-of-range coordinates are a caller bug and panic immediately instead
//! of being clamped, so clipping mistakes surface during integration.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// A packed 1bpp buffer for one color channel.
pub struct BitPlane {
    width: u32,
    height: u32,
    stride: usize,
    buf: Vec<u8>,
}

impl BitPlane {
    /// Allocate a zeroed plane. Done once at startup; draw operations mutate
    /// in place and never reallocate.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = (width as usize).div_ceil(8);
        BitPlane {
            width,
            height,
            stride,
            buf: vec![0; stride * height as usize],
        }
    }

    /// Plane sized for the fixed panel resolution.
    pub fn for_panel() -> Self {
        BitPlane::new(crate::epd::WIDTH, crate::epd::HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Set every byte of the buffer to `value`.
    pub fn fill(&mut self, value: u8) {
        self.buf.fill(value);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> (usize, u8) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} plane",
            self.width,
            self.height
        );
        let byte = self.stride * y as usize + (x / 8) as usize;
        let mask = 0x80 >> (x % 8);
        (byte, mask)
    }

    /// Write one pixel bit. `true` = blank, `false` = ink.
    pub fn set_pixel(&mut self, x: u32, y: u32, bit: bool) {
        let (byte, mask) = self.index(x, y);
        if bit {
            self.buf[byte] |= mask;
        } else {
            self.buf[byte] &= !mask;
        }
    }

    /// Read one pixel bit.
    pub fn get_pixel(&self, x: u32, y: u32) -> bool {
        let (byte, mask) = self.index(x, y);
        self.buf[byte] & mask != 0
    }

    /// Horizontal line of `w` pixels starting at `(x, y)`.
    pub fn hline(&mut self, x: u32, y: u32, w: u32, bit: bool) {
        for i in 0..w {
            self.set_pixel(x + i, y, bit);
        }
    }

    /// Vertical line of `h` pixels starting at `(x, y)`.
    pub fn vline(&mut self, x: u32, y: u32, h: u32, bit: bool) {
        for i in 0..h {
            self.set_pixel(x, y + i, bit);
        }
    }

    /// Straight line between two points (Bresenham).
    pub fn line(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, bit: bool) {
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_pixel(x as u32, y as u32, bit);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle outline.
    pub fn rect(&mut self, x: u32, y: u32, w: u32, h: u32, bit: bool) {
        if w == 0 || h == 0 {
            return;
        }
        self.hline(x, y, w, bit);
        self.hline(x, y + h - 1, w, bit);
        self.vline(x, y, h, bit);
        self.vline(x + w - 1, y, h, bit);
    }

    /// Filled rectangle.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, bit: bool) {
        for row in 0..h {
            self.hline(x, y + row, w, bit);
        }
    }

    /// Blit a packed 1bpp bitmap (`rows`, MSB-first, `ceil(w/8)` bytes per
    /// row). Where a bitmap bit is set, `fg` is written; where unset, `bg`
    /// is written if given, otherwise the pixel is left alone.
    pub fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, rows: &[u8], fg: bool, bg: Option<bool>) {
        let src_stride = (w as usize).div_ceil(8);
        assert!(rows.len() >= src_stride * h as usize, "bitmap shorter than {w}x{h}");
        for ry in 0..h {
            for rx in 0..w {
                let byte = rows[ry as usize * src_stride + (rx / 8) as usize];
                let set = byte & (0x80 >> (rx % 8)) != 0;
                if set {
                    self.set_pixel(x + rx, y + ry, fg);
                } else if let Some(bg) = bg {
                    self.set_pixel(x + rx, y + ry, bg);
                }
            }
        }
    }
}

/// `embedded-graphics` interop: `BinaryColor::On` is ink (0 bit), `Off` is
/// blank paper (1 bit). Pixels outside the plane are dropped, as the
/// `DrawTarget` contract requires.
impl DrawTarget for BitPlane {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.width
                && (point.y as u32) < self.height
            {
                self.set_pixel(point.x as u32, point.y as u32, color == BinaryColor::Off);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for BitPlane {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn stride_rounds_up() {
        assert_eq!(BitPlane::new(152, 296).stride(), 19);
        assert_eq!(BitPlane::new(8, 1).stride(), 1);
        assert_eq!(BitPlane::new(9, 1).stride(), 2);
        assert_eq!(BitPlane::for_panel().as_bytes().len(), 19 * 296);
    }

    #[test]
    fn pixel_roundtrip_leaves_neighbors_alone() {
        let mut p = BitPlane::new(16, 4);
        p.set_pixel(5, 2, true);
        assert!(p.get_pixel(5, 2));
        assert!(!p.get_pixel(4, 2));
        assert!(!p.get_pixel(6, 2));
        assert!(!p.get_pixel(5, 1));
        assert!(!p.get_pixel(5, 3));
        // MSB-first: x=5 is the 0x04 bit of row 2's first byte
        assert_eq!(p.as_bytes()[4], 0b0000_0100);

        p.set_pixel(5, 2, false);
        assert!(!p.get_pixel(5, 2));
    }

    #[test]
    fn fill_sets_every_byte() {
        let mut p = BitPlane::new(152, 296);
        p.fill(0xFF);
        assert!(p.as_bytes().iter().all(|&b| b == 0xFF));
        assert!(p.get_pixel(151, 295));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_pixel_panics() {
        let mut p = BitPlane::new(8, 8);
        p.set_pixel(8, 0, true);
    }

    #[test]
    fn lines_and_rects() {
        let mut p = BitPlane::new(16, 16);
        p.hline(2, 3, 5, true);
        assert!(p.get_pixel(2, 3) && p.get_pixel(6, 3));
        assert!(!p.get_pixel(7, 3));

        p.vline(9, 1, 4, true);
        assert!(p.get_pixel(9, 1) && p.get_pixel(9, 4));
        assert!(!p.get_pixel(9, 5));

        p.line(0, 0, 3, 3, true);
        assert!(p.get_pixel(0, 0) && p.get_pixel(1, 1) && p.get_pixel(3, 3));

        let mut q = BitPlane::new(16, 16);
        q.rect(1, 1, 4, 3, true);
        assert!(q.get_pixel(1, 1) && q.get_pixel(4, 1) && q.get_pixel(4, 3));
        assert!(!q.get_pixel(2, 2), "outline must not fill the interior");

        q.fill_rect(8, 8, 3, 3, true);
        assert!(q.get_pixel(9, 9));
    }

    #[test]
    fn blit_respects_fg_and_bg() {
        // 2x2 bitmap: top-left and bottom-right set
        let rows = [0b1000_0000, 0b0100_0000];
        let mut p = BitPlane::new(8, 8);
        p.blit(0, 0, 2, 2, &rows, true, None);
        assert!(p.get_pixel(0, 0));
        assert!(!p.get_pixel(1, 0), "bg untouched without a bg bit");
        assert!(p.get_pixel(1, 1));

        let mut q = BitPlane::new(8, 8);
        q.fill(0xFF);
        q.blit(0, 0, 2, 2, &rows, true, Some(false));
        assert!(q.get_pixel(0, 0));
        assert!(!q.get_pixel(1, 0), "bg written when requested");
    }

    #[test]
    fn embedded_graphics_draws_ink_as_zero_bits() {
        let mut p = BitPlane::new(16, 16);
        p.fill(0xFF);
        Line::new(Point::new(0, 2), Point::new(7, 2))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut p)
            .unwrap();
        for x in 0..8 {
            assert!(!p.get_pixel(x, 2));
        }
        // off-plane pixels are dropped, not panicked on
        Line::new(Point::new(-5, -5), Point::new(40, 40))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut p)
            .unwrap();
    }
}
