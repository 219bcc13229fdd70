//! Panel protocol driver: sequences reset, initialization, windowing, plane
//! transfer and refresh on the 2.66" B controller.
//!
//! The device walks a small state machine:
//!
//! ```text
//! Uninitialized -> Resetting -> Initializing -> Idle
//!       Idle -> TransferringBlack -> TransferringRed -> Refreshing -> Idle
//!       Idle -> Sleeping  (only reset() leaves Sleeping)
//! ```
//!
//! A full refresh of this panel takes on the order of fifteen seconds, so
//! the busy wait deadline defaults to twice that.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::epd::cmd::Cmd;
use crate::epd::flag::Flag;
use crate::epd::interface::DisplayInterface;
use crate::epd::lut::{LUT_REGISTER_LEN, WF_PARTIAL};
use crate::epd::orientation::Orientation;
use crate::epd::{HEIGHT, STRIDE, WIDTH};
use crate::error::Error;
use crate::graphics::BitPlane;

/// Default busy-wait deadline in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 30_000;

/// Observable device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Uninitialized,
    Resetting,
    Initializing,
    Idle,
    TransferringBlack,
    TransferringRed,
    Refreshing,
    Sleeping,
}

/// Driver for the two-color 152x296 panel.
///
/// Type parameters mirror the wiring: `SPI` carries commands and data (chip
/// select managed by the [`SpiDevice`]), `BSY` is the busy sense input,
/// `DC` the data/command select, `RST` the reset line, `DELAY` the timing
/// provider.
pub struct Epd2in66b<SPI, BSY, DC, RST, DELAY> {
    interface: DisplayInterface<SPI, BSY, DC, RST, DELAY>,
    orientation: Orientation,
    state: PanelState,
    busy_timeout_ms: u32,
}

impl<SPI, BSY, DC, RST, DELAY> Epd2in66b<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Wrap the bus and control lines. No panel traffic happens until
    /// [`init`](Self::init) is called.
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST, delay: DELAY, orientation: Orientation) -> Self {
        Epd2in66b {
            interface: DisplayInterface::new(spi, busy, dc, rst, delay),
            orientation,
            state: PanelState::Uninitialized,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Current state machine position.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Default mount orientation, applied when a transfer passes no override.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Replace the busy-wait deadline.
    pub fn set_busy_timeout_ms(&mut self, timeout_ms: u32) {
        self.busy_timeout_ms = timeout_ms;
    }

    /// Hardware reset pulse. Valid from any state, including deep sleep.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.state = PanelState::Resetting;
        self.interface.reset()?;
        self.state = PanelState::Initializing;
        Ok(())
    }

    /// Full power-on sequence: reset, software reset, data entry mode,
    /// window over the whole panel, update control, waveform table upload,
    /// cursor at origin.
    pub fn init(&mut self) -> Result<(), Error> {
        log::info!("initializing panel");
        self.reset()?;
        self.wait_busy()?;

        self.interface.cmd(Cmd::SW_RESET)?;
        self.wait_busy()?;

        self.interface
            .cmd_with_data(Cmd::DATA_ENTRY_MODE, &[Flag::DATA_ENTRY_INCRY_INCRX])?;

        self.set_window(0, 0, WIDTH - 1, HEIGHT - 1)?;

        self.interface.cmd_with_data(
            Cmd::DISPLAY_UPDATE_CONTROL,
            &[Flag::UPDATE_CONTROL_BYTE_1, Flag::UPDATE_CONTROL_BYTE_2],
        )?;

        self.write_lut()?;

        self.set_cursor(0, 0)?;
        self.wait_busy()?;

        self.state = PanelState::Idle;
        Ok(())
    }

    /// Program the active RAM window. X addresses are in 8-pixel units, Y
    /// addresses are 16-bit little-endian.
    fn set_window(&mut self, x_start: u32, y_start: u32, x_end: u32, y_end: u32) -> Result<(), Error> {
        self.interface.cmd_with_data(
            Cmd::SET_RAMX_START_END,
            &[((x_start >> 3) & 0x1F) as u8, ((x_end >> 3) & 0x1F) as u8],
        )?;
        self.interface.cmd_with_data(
            Cmd::SET_RAMY_START_END,
            &[
                (y_start & 0xFF) as u8,
                ((y_start >> 8) & 0x01) as u8,
                (y_end & 0xFF) as u8,
                ((y_end >> 8) & 0x01) as u8,
            ],
        )?;
        Ok(())
    }

    /// Place the RAM write cursor.
    fn set_cursor(&mut self, x: u32, y: u32) -> Result<(), Error> {
        self.interface
            .cmd_with_data(Cmd::SET_RAMX_COUNTER, &[((x >> 3) & 0x1F) as u8])?;
        self.interface.cmd_with_data(
            Cmd::SET_RAMY_COUNTER,
            &[(y & 0xFF) as u8, ((y >> 8) & 0x01) as u8],
        )?;
        Ok(())
    }

    /// Upload the 159-byte partial-update waveform table: 153 bytes to the
    /// LUT register, the trailing six to the end-option, gate-voltage,
    /// source-voltage and VCOM registers.
    fn write_lut(&mut self) -> Result<(), Error> {
        self.interface
            .cmd_with_data(Cmd::WRITE_LUT_REGISTER, &WF_PARTIAL[..LUT_REGISTER_LEN])?;
        self.interface
            .cmd_with_data(Cmd::END_OPTION, &[WF_PARTIAL[153]])?;
        self.interface
            .cmd_with_data(Cmd::GATE_VOLTAGE_CONTROL, &[WF_PARTIAL[154]])?;
        self.interface
            .cmd_with_data(Cmd::SOURCE_VOLTAGE_CONTROL, &WF_PARTIAL[155..158])?;
        self.interface
            .cmd_with_data(Cmd::WRITE_VCOM_REGISTER, &[WF_PARTIAL[158]])?;
        Ok(())
    }

    /// Stream both planes to the controller RAM and trigger a refresh.
    ///
    /// Bytes are visited in the iteration order given by `orientation` (or
    /// the device default when `None`). The red plane is bit-complemented on
    /// the wire; its channel is active low. Blocks until the refresh is done.
    ///
    /// Panics if a plane does not match the panel resolution; sizing is the
    /// caller's contract.
    pub fn display(
        &mut self,
        black: &BitPlane,
        red: &BitPlane,
        orientation: Option<Orientation>,
    ) -> Result<(), Error> {
        self.ensure_ready()?;
        assert_eq!((black.width(), black.height()), (WIDTH, HEIGHT), "black plane size");
        assert_eq!((red.width(), red.height()), (WIDTH, HEIGHT), "red plane size");

        let o = orientation.unwrap_or(self.orientation);
        log::debug!("transfer start, invert_x={} invert_y={}", o.invert_x, o.invert_y);

        self.state = PanelState::TransferringBlack;
        self.stream_plane(Cmd::WRITE_BW_DATA, black, o, false)?;

        self.state = PanelState::TransferringRed;
        self.stream_plane(Cmd::WRITE_RED_DATA, red, o, true)?;

        self.turn_on_display()
    }

    fn stream_plane(
        &mut self,
        command: u8,
        plane: &BitPlane,
        o: Orientation,
        complement: bool,
    ) -> Result<(), Error> {
        let bytes = plane.as_bytes();
        self.interface.cmd(command)?;
        for row in o.rows(HEIGHT as usize) {
            for col in o.row_bytes(STRIDE) {
                let mut b = bytes[row * STRIDE + col];
                if complement {
                    b = !b;
                }
                self.interface.data_byte(o.transform(b))?;
            }
        }
        Ok(())
    }

    /// Blank the panel RAM with constant bytes, independent of any plane
    /// buffer, and refresh. `0xFF, 0xFF` yields white.
    pub fn clear(&mut self, black_fill: u8, red_fill: u8) -> Result<(), Error> {
        self.ensure_ready()?;

        self.state = PanelState::TransferringBlack;
        self.interface.cmd(Cmd::WRITE_BW_DATA)?;
        for _ in 0..HEIGHT as usize * STRIDE {
            self.interface.data_byte(black_fill)?;
        }

        self.state = PanelState::TransferringRed;
        self.interface.cmd(Cmd::WRITE_RED_DATA)?;
        for _ in 0..HEIGHT as usize * STRIDE {
            self.interface.data_byte(!red_fill)?;
        }

        self.turn_on_display()
    }

    /// Issue the refresh trigger and wait for the busy line to drop.
    fn turn_on_display(&mut self) -> Result<(), Error> {
        self.state = PanelState::Refreshing;
        log::info!("refresh triggered");
        self.interface.cmd(Cmd::MASTER_ACTIVATE)?;
        self.wait_busy()?;
        self.state = PanelState::Idle;
        log::info!("refresh finished");
        Ok(())
    }

    /// Enter deep sleep. Only [`reset`](Self::reset) (or a full
    /// [`init`](Self::init)) brings the panel back.
    pub fn sleep(&mut self) -> Result<(), Error> {
        log::info!("entering deep sleep");
        self.interface
            .cmd_with_data(Cmd::DEEP_SLEEP_MODE, &[Flag::DEEP_SLEEP_MODE_1])?;
        self.state = PanelState::Sleeping;
        Ok(())
    }

    /// Transfers are only legal once [`init`](Self::init) has run and while
    /// the panel is awake.
    fn ensure_ready(&self) -> Result<(), Error> {
        match self.state {
            PanelState::Sleeping => Err(Error::Asleep),
            PanelState::Uninitialized => Err(Error::NotInitialized),
            _ => Ok(()),
        }
    }

    fn wait_busy(&mut self) -> Result<(), Error> {
        self.interface.wait_busy(self.busy_timeout_ms)
    }
}
