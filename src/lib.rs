//! Two-color e-paper weather display pipeline.
//!
//! Renders a weather report onto a 152x296 black/red panel (2.66" B, an
//! SSD1680-family controller): packed 1bpp plane buffers, a proportional
//! font layout engine, comfort-band thresholding that moves out-of-range
//! readings to the red plane, and a driver that streams both planes over
//! SPI with the mount orientation applied on the way out.
//!
//! Hardware access goes through `embedded-hal` traits only, so the same
//! code runs against real pins or against mocks in tests.

pub mod epd;
pub mod error;
pub mod fonts;
pub mod graphics;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod screen;
pub mod threshold;

pub use epd::driver::{Epd2in66b, PanelState, DEFAULT_BUSY_TIMEOUT_MS};
pub use epd::orientation::Orientation;
pub use epd::{HEIGHT, PLANE_BYTES, STRIDE, WIDTH};
pub use error::Error;
pub use fonts::{Font, SANS_10, SANS_35, SANS_50};
pub use graphics::BitPlane;
pub use pipeline::Pipeline;
pub use render::{RenderGate, RenderPass};
pub use screen::{degrees_to_compass, draw_error, draw_weather, WeatherReport, Wind};
pub use threshold::{Bounds, Limits};
