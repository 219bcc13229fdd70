//! End-to-end render pipeline: compose, wake, transfer, refresh, sleep.
//!
//! Owns the driver, the two plane buffers and the admission gate. Every
//! public render entry point follows the same envelope: acquire the gate,
//! compose the planes, wake the panel, blank its RAM, stream both planes,
//! refresh, and put the panel back to deep sleep so it draws no power
//! between updates.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::epd::driver::Epd2in66b;
use crate::error::Error;
use crate::graphics::BitPlane;
use crate::render::{RenderGate, RenderPass};
use crate::screen::{self, WeatherReport};
use crate::threshold::Limits;

/// Driver, plane buffers and gate bundled for one physical panel.
pub struct Pipeline<SPI, BSY, DC, RST, DELAY> {
    epd: Epd2in66b<SPI, BSY, DC, RST, DELAY>,
    black: BitPlane,
    red: BitPlane,
    gate: RenderGate,
}

impl<SPI, BSY, DC, RST, DELAY> Pipeline<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Allocate both plane buffers up front; they are reused for every
    /// frame.
    pub fn new(epd: Epd2in66b<SPI, BSY, DC, RST, DELAY>) -> Self {
        Pipeline {
            epd,
            black: BitPlane::for_panel(),
            red: BitPlane::for_panel(),
            gate: RenderGate::new(),
        }
    }

    /// Clone of the admission gate, e.g. for a status endpoint or a
    /// completion hook.
    pub fn gate(&self) -> RenderGate {
        self.gate.clone()
    }

    /// Direct access to the plane buffers for custom composition, used
    /// together with [`flush`](Self::flush).
    pub fn planes_mut(&mut self) -> (&mut BitPlane, &mut BitPlane) {
        (&mut self.black, &mut self.red)
    }

    /// Compose and show the weather screen.
    pub fn render_weather(&mut self, report: &WeatherReport, limits: &Limits) -> Result<(), Error> {
        let pass = self.gate.try_begin().ok_or(Error::RenderInProgress)?;
        screen::draw_weather(&mut self.black, &mut self.red, report, limits);
        self.refresh(pass)
    }

    /// Compose and show the failure screen.
    pub fn show_error(&mut self, msg: Option<&str>, clock: Option<(&str, &str)>) -> Result<(), Error> {
        let pass = self.gate.try_begin().ok_or(Error::RenderInProgress)?;
        screen::draw_error(&mut self.black, &mut self.red, msg, clock);
        self.refresh(pass)
    }

    /// Show custom-composed planes: acquire the gate and push whatever is
    /// in the buffers from [`planes_mut`](Self::planes_mut) through a full
    /// refresh cycle.
    pub fn flush(&mut self) -> Result<(), Error> {
        let pass = self.gate.try_begin().ok_or(Error::RenderInProgress)?;
        self.refresh(pass)
    }

    /// The refresh cycle shared by every render entry point.
    ///
    /// Wakes the panel with a full init (it sleeps between frames), blanks
    /// its RAM, streams both planes, refreshes, then returns it to deep
    /// sleep. The pass finishes only after the panel is asleep again.
    fn refresh(&mut self, pass: RenderPass) -> Result<(), Error> {
        self.epd.init()?;
        self.epd.clear(0xFF, 0xFF)?;
        self.epd.display(&self.black, &self.red, None)?;
        self.epd.sleep()?;
        pass.finish();
        Ok(())
    }

    /// Wake the panel, blank it to white and sleep again.
    pub fn clear(&mut self) -> Result<(), Error> {
        let pass = self.gate.try_begin().ok_or(Error::RenderInProgress)?;
        self.epd.init()?;
        self.epd.clear(0xFF, 0xFF)?;
        self.epd.sleep()?;
        pass.finish();
        Ok(())
    }
}
