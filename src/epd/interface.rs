//! SPI and control-line framing for the panel controller.
//!
//! Every command or data byte is its own chip-select framed bus transaction:
//! the data/command line is driven, then exactly one byte is written through
//! the [`SpiDevice`], which asserts and releases chip select around it. This
//! matches the panel's required framing; no batching happens at this layer.

use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::error::Error;

const RESET_SETTLE_MS: u32 = 50;
const RESET_PULSE_MS: u32 = 2;
const BUSY_SETTLE_MS: u32 = 50;
const BUSY_POLL_MS: u32 = 10;

/// Owns the communication channel and the three control lines.
///
/// Exclusive ownership for the lifetime of the device object; no other
/// component touches the bus.
pub struct DisplayInterface<SPI, BSY, DC, RST, DELAY> {
    /// SPI device (manages chip select per transaction)
    spi: SPI,
    /// High for busy; wait until the panel is ready
    busy: BSY,
    /// Data/command select (high for data, low for command)
    dc: DC,
    /// Reset line, active low
    rst: RST,
    /// Delay provider for reset pulses and busy polling
    delay: DELAY,
}

impl<SPI, BSY, DC, RST, DELAY> DisplayInterface<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface {
            spi,
            busy,
            dc,
            rst,
            delay,
        }
    }

    /// Send one command byte.
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Send one data byte.
    pub(crate) fn data_byte(&mut self, value: u8) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(&[value])
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Send a run of data bytes, one transaction each.
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        for &b in data {
            self.data_byte(b)?;
        }
        Ok(())
    }

    /// Send a command followed by its data bytes.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Hardware reset pulse: high, settle, low for ~2 ms, high, settle.
    pub(crate) fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Wait until the busy line drops, or fail after `timeout_ms`.
    ///
    /// Fixed 50 ms settle before and after, 10 ms steps while polling.
    /// The original vendor code spins forever here; a stuck line now yields
    /// [`Error::PanelUnresponsive`] instead of a hang.
    pub(crate) fn wait_busy(&mut self, timeout_ms: u32) -> Result<(), Error> {
        self.delay.delay_ms(BUSY_SETTLE_MS);

        let mut waited: u32 = 0;
        loop {
            let busy = self.busy.is_high().map_err(|_| Error::BusyPin)?;
            if !busy {
                break;
            }
            if waited >= timeout_ms {
                log::error!("busy line stuck high after {timeout_ms} ms");
                return Err(Error::PanelUnresponsive(timeout_ms));
            }
            self.delay.delay_ms(BUSY_POLL_MS);
            waited += BUSY_POLL_MS;
        }

        self.delay.delay_ms(BUSY_SETTLE_MS);
        Ok(())
    }
}
