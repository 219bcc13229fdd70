//! Driver for the Waveshare 2.66" B two-color (black/red) e-paper panel.
//!
//! The panel is driven over SPI with three control lines (reset, data/command
//! select, busy sense). Image data lives in two packed 1-bit RAM planes on the
//! controller; a refresh is triggered explicitly after both planes have been
//! streamed.
//!
//! The driver is loosely modeled after the
//! [epd-waveshare](https://github.com/caemor/epd-waveshare) drivers and built
//! on `embedded-hal` 1.0 traits, so it runs against any SPI bus and GPIO
//! implementation (including `embedded-hal-mock` in tests).

pub mod cmd;
pub mod driver;
pub mod flag;
pub mod interface;
pub mod lut;
pub mod orientation;

/// Display height, pixels vertically.
pub const HEIGHT: u32 = 296;

/// Display width, pixels horizontally.
pub const WIDTH: u32 = 152;

/// Bytes per packed 1bpp row: ceil(152 / 8) = 19.
pub const STRIDE: usize = (WIDTH as usize).div_ceil(8);

/// Total bytes in one plane: 19 * 296 = 5624.
pub const PLANE_BYTES: usize = STRIDE * HEIGHT as usize;
