//! Proportional bitmap fonts.
//!
//! Each font is an immutable glyph set pre-rendered into fixed-height cells:
//! one cell per codepoint, cell width equal to the glyph's advance width,
//! rows packed MSB-first with `ceil(width / 8)` bytes per row. The data
//! files are generated from DejaVu Sans and committed as source; the layout
//! engine never touches a rasterizer at runtime.
//!
//! Codepoints outside a font's range fall back to `?` when the font has one
//! (the two full-ASCII fonts do; the large numeric font does not, there the
//! character is skipped).

mod sans10;
mod sans35;
mod sans50;

pub use sans10::SANS_10;
pub use sans35::SANS_35;
pub use sans50::SANS_50;

/// An immutable proportional glyph set, shared by reference across writers.
pub struct Font {
    /// Cell height in pixels, common to every glyph.
    pub height: u32,
    pub(crate) first: u8,
    pub(crate) last: u8,
    pub(crate) widths: &'static [u8],
    pub(crate) offsets: &'static [u32],
    pub(crate) data: &'static [u8],
}

/// One glyph's bitmap and advance width.
#[derive(Clone, Copy)]
pub struct Glyph {
    /// Advance width in pixels; also the cell width of `data`.
    pub width: u32,
    /// Packed rows, MSB-first, `ceil(width / 8)` bytes per row.
    pub data: &'static [u8],
}

impl Font {
    fn index_of(&self, ch: char) -> Option<usize> {
        let code = u32::from(ch);
        if code >= u32::from(self.first) && code <= u32::from(self.last) {
            Some((code - u32::from(self.first)) as usize)
        } else {
            None
        }
    }

    /// Look up `ch`, falling back to `?` for codepoints outside the set.
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        let i = self.index_of(ch).or_else(|| self.index_of('?'))?;
        let width = u32::from(self.widths[i]);
        let stride = (width as usize).div_ceil(8);
        let start = self.offsets[i] as usize;
        Some(Glyph {
            width,
            data: &self.data[start..start + stride * self.height as usize],
        })
    }

    /// Total advance width of `text`: the sum of per-codepoint advances.
    pub fn measure(&self, text: &str) -> u32 {
        text.chars().filter_map(|c| self.glyph(c)).map(|g| g.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_sums_advances() {
        let one = SANS_10.glyph('1').unwrap().width;
        let two = SANS_10.glyph('2').unwrap().width;
        assert_eq!(SANS_10.measure("12"), one + two);
        assert_eq!(SANS_10.measure(""), 0);
    }

    #[test]
    fn fonts_are_proportional() {
        // 'i' must be narrower than 'W' in a proportional face
        let narrow = SANS_10.glyph('i').unwrap().width;
        let wide = SANS_10.glyph('W').unwrap().width;
        assert!(narrow < wide, "i={narrow} W={wide}");
    }

    #[test]
    fn glyph_data_covers_full_cell() {
        for ch in ['0', '9', '%', '-'] {
            let g = SANS_50.glyph(ch).unwrap();
            let stride = (g.width as usize).div_ceil(8);
            assert_eq!(g.data.len(), stride * SANS_50.height as usize);
            assert!(g.data.iter().any(|&b| b != 0), "{ch} renders no pixels");
        }
    }

    #[test]
    fn unknown_codepoints_fall_back_or_skip() {
        // full-ASCII fonts substitute '?'
        let q = SANS_35.glyph('?').unwrap();
        let sub = SANS_35.glyph('\u{00E9}').unwrap();
        assert_eq!(sub.width, q.width);

        // the numeric-only font has no '?', so letters are skipped entirely
        assert!(SANS_50.glyph('A').is_none());
        assert_eq!(SANS_50.measure("A7"), SANS_50.glyph('7').unwrap().width);
    }

    #[test]
    fn digits_share_a_width_in_each_face() {
        // DejaVu Sans uses tabular figures; relied on for column alignment
        let w = SANS_35.glyph('0').unwrap().width;
        for d in '1'..='9' {
            assert_eq!(SANS_35.glyph(d).unwrap().width, w, "digit {d}");
        }
    }
}
