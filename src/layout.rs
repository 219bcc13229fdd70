//! Text layout and compositing.
//!
//! A [`Writer`] borrows one plane and one font for the duration of a render
//! pass and keeps its own cursor, so writers over different planes or fonts
//! never interfere. Placement helpers compute a column for centered or
//! right-aligned text; the caller then sets the cursor explicitly before
//! printing (never implicitly).
//!
//! Text wider than its allotted region is not an error: it simply runs into
//! whatever is next to it. Sizing fields is the caller's responsibility.
//! Only the physical plane edge is clipped, because the plane itself would
//! fail fast on out-of-range writes.

use crate::fonts::Font;
use crate::graphics::BitPlane;

/// The layout interface: cursor positioning, measuring and glyph printing.
///
/// Implemented by [`Writer`] and by the [`Traced`] decorator, which is
/// composed around a writer at construction time when layout tracing is
/// wanted.
pub trait TextSink {
    /// Move the cursor. `row` is the top edge of the cell, `col` the left.
    fn set_textpos(&mut self, row: u32, col: u32);

    /// Total advance width of `text` in this sink's font.
    fn measure(&self, text: &str) -> u32;

    /// Composite `text` at the cursor, advancing the column per glyph.
    fn print(&mut self, text: &str);
}

/// Glyph writer over one `(plane, font)` pair.
pub struct Writer<'a> {
    plane: &'a mut BitPlane,
    font: &'a Font,
    row: u32,
    col: u32,
    inverted: bool,
}

impl<'a> Writer<'a> {
    pub fn new(plane: &'a mut BitPlane, font: &'a Font) -> Self {
        Writer {
            plane,
            font,
            row: 0,
            col: 0,
            inverted: false,
        }
    }

    /// Draw background-filled glyphs (ink cell, blank strokes) for
    /// highlighted or boxed text.
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }
}

impl TextSink for Writer<'_> {
    fn set_textpos(&mut self, row: u32, col: u32) {
        self.row = row;
        self.col = col;
    }

    fn measure(&self, text: &str) -> u32 {
        self.font.measure(text)
    }

    fn print(&mut self, text: &str) {
        let h = self.font.height;
        if self.row + h > self.plane.height() {
            log::debug!("text {text:?} below plane edge, dropped");
            return;
        }
        for ch in text.chars() {
            let Some(glyph) = self.font.glyph(ch) else {
                continue;
            };
            if self.col + glyph.width > self.plane.width() {
                log::debug!("text {text:?} clipped at column {}", self.col);
                return;
            }
            let (fg, bg) = if self.inverted {
                (true, Some(false))
            } else {
                (false, None)
            };
            self.plane
                .blit(self.col, self.row, glyph.width, h, glyph.data, fg, bg);
            self.col += glyph.width;
        }
    }
}

/// Decorator logging every layout call before forwarding it.
pub struct Traced<W> {
    inner: W,
    label: &'static str,
}

impl<W: TextSink> Traced<W> {
    pub fn new(label: &'static str, inner: W) -> Self {
        Traced { inner, label }
    }
}

impl<W: TextSink> TextSink for Traced<W> {
    fn set_textpos(&mut self, row: u32, col: u32) {
        log::debug!("[{}] cursor -> ({row}, {col})", self.label);
        self.inner.set_textpos(row, col);
    }

    fn measure(&self, text: &str) -> u32 {
        let w = self.inner.measure(text);
        log::debug!("[{}] measure {text:?} = {w}", self.label);
        w
    }

    fn print(&mut self, text: &str) {
        log::debug!("[{}] print {text:?}", self.label);
        self.inner.print(text);
    }
}

/// Column that centers `text` in `avail` pixels: `round(avail/2 - w/2) + offset`.
pub fn centered(font: &Font, text: &str, avail: u32, offset: i32) -> u32 {
    let w = font.measure(text) as f32;
    let col = (avail as f32 / 2.0 - w / 2.0).round() as i32 + offset;
    col.max(0) as u32
}

/// Column that right-aligns `text` in `avail` pixels: `(avail - w) + offset`.
pub fn right_aligned(font: &Font, text: &str, avail: u32, offset: i32) -> u32 {
    let col = avail as i32 - font.measure(text) as i32 + offset;
    col.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::SANS_10;

    // Fixed-advance test font: every printable glyph 8 px wide, 8 px tall,
    // solid block bitmap, so placement math is exact.
    const BLOCK_WIDTHS: [u8; 95] = [8; 95];
    const BLOCK_OFFSETS: [u32; 95] = [0; 95];
    const BLOCK_DATA: [u8; 8] = [0xFF; 8];
    const BLOCK: Font = Font {
        height: 8,
        first: 0x20,
        last: 0x7E,
        widths: &BLOCK_WIDTHS,
        offsets: &BLOCK_OFFSETS,
        data: &BLOCK_DATA,
    };

    #[test]
    fn center_matches_rounded_midpoint() {
        // 5 glyphs x 8 px = 40 px wide; round(152/2 - 40/2) = 56
        assert_eq!(BLOCK.measure("hello"), 40);
        assert_eq!(centered(&BLOCK, "hello", 152, 0), 56);
        assert_eq!(centered(&BLOCK, "hello", 152, 10), 66);
    }

    #[test]
    fn right_aligned_column_plus_width_is_avail() {
        for text in ["a", "abc", "abcdefgh"] {
            let col = right_aligned(&BLOCK, text, 152, 0);
            let w = BLOCK.measure(text);
            assert!((col + w).abs_diff(152) <= 1, "{text}: {col} + {w}");
        }
        assert_eq!(right_aligned(&BLOCK, "ab", 100, -4), 100 - 16 - 4);
    }

    #[test]
    fn print_advances_cursor_and_draws_ink() {
        let mut plane = BitPlane::new(64, 16);
        plane.fill(0xFF);
        let mut w = Writer::new(&mut plane, &BLOCK);
        w.set_textpos(2, 4);
        w.print("ab");
        // two 8px block glyphs drawn as ink (0 bits)
        assert!(!plane.get_pixel(4, 2));
        assert!(!plane.get_pixel(19, 9));
        assert!(plane.get_pixel(20, 2), "pixel after the text stays blank");
    }

    #[test]
    fn inverted_mode_swaps_ink_and_background() {
        // '!' in the real font: sparse strokes, so the cell background shows
        let mut plane = BitPlane::new(32, 16);
        plane.fill(0xFF);
        let mut w = Writer::new(&mut plane, &SANS_10).inverted();
        w.set_textpos(0, 0);
        w.print("!");
        let g = SANS_10.glyph('!').unwrap();
        // corner of the cell is background, drawn as ink in inverted mode
        assert!(!plane.get_pixel(0, 0));
        // strokes come out blank
        let mut any_blank_stroke = false;
        for y in 0..SANS_10.height {
            for x in 0..g.width {
                let stride = (g.width as usize).div_ceil(8);
                let set = g.data[y as usize * stride + (x / 8) as usize] & (0x80 >> (x % 8)) != 0;
                if set && plane.get_pixel(x, y) {
                    any_blank_stroke = true;
                }
            }
        }
        assert!(any_blank_stroke);
    }

    #[test]
    fn print_clips_at_the_plane_edge() {
        let mut plane = BitPlane::new(20, 8);
        let mut w = Writer::new(&mut plane, &BLOCK);
        w.set_textpos(0, 0);
        // 20 px wide plane fits two 8 px glyphs; the third must be dropped
        w.print("xyz");
        assert!(!plane.get_pixel(15, 0));
        assert!(!plane.get_pixel(0, 0));
    }

    #[test]
    fn independent_writers_keep_independent_cursors() {
        let mut a = BitPlane::new(32, 16);
        let mut b = BitPlane::new(32, 16);
        a.fill(0xFF);
        b.fill(0xFF);
        let mut wa = Writer::new(&mut a, &BLOCK);
        let mut wb = Writer::new(&mut b, &BLOCK);
        wa.set_textpos(0, 0);
        wb.set_textpos(8, 16);
        wa.print("x");
        wb.print("y");
        assert!(!a.get_pixel(0, 0));
        assert!(a.get_pixel(16, 8));
        assert!(!b.get_pixel(16, 8));
        assert!(b.get_pixel(0, 0));
    }

    #[test]
    fn traced_decorator_forwards() {
        let mut plane = BitPlane::new(64, 16);
        plane.fill(0xFF);
        let mut w = Traced::new("black", Writer::new(&mut plane, &BLOCK));
        assert_eq!(w.measure("ab"), 16);
        w.set_textpos(0, 0);
        w.print("a");
        assert!(!plane.get_pixel(0, 0));
    }
}
