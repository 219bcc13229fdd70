//! Wire-level driver tests against `embedded-hal` mocks.
//!
//! Every byte the driver puts on the bus is checked, including the
//! data/command line state around it, the reset pulse and the busy polls.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use embedded_hal_mock::eh1::MockError;
use weatherpaper::epd::lut::{BIT_REVERSE, LUT_REGISTER_LEN, WF_PARTIAL};
use weatherpaper::{
    BitPlane, Epd2in66b, Error, Orientation, PanelState, Pipeline, HEIGHT, STRIDE, WIDTH,
};

/// The three SPI expectations produced by one `spi.write(&[byte])` through
/// the `SpiDevice` trait.
fn spi_device_write(byte: u8) -> [SpiTransaction<u8>; 3] {
    [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![byte]),
        SpiTransaction::transaction_end(),
    ]
}

/// One command byte: DC low, then the byte on the bus.
fn expect_cmd(spi: &mut Vec<SpiTransaction<u8>>, dc: &mut Vec<PinTransaction>, byte: u8) {
    dc.push(PinTransaction::set(PinState::Low));
    spi.extend(spi_device_write(byte));
}

/// Data bytes: DC high and one bus transaction per byte.
fn expect_data(spi: &mut Vec<SpiTransaction<u8>>, dc: &mut Vec<PinTransaction>, bytes: &[u8]) {
    for &b in bytes {
        dc.push(PinTransaction::set(PinState::High));
        spi.extend(spi_device_write(b));
    }
}

fn expect_reset(rst: &mut Vec<PinTransaction>) {
    rst.push(PinTransaction::set(PinState::High));
    rst.push(PinTransaction::set(PinState::Low));
    rst.push(PinTransaction::set(PinState::High));
}

/// The whole power-on sequence as `init()` emits it: reset pulse, software
/// reset, data entry mode, full-panel window, update control, waveform
/// upload, cursor at origin, with the busy line ready at each of the three
/// waits.
fn expect_init(
    spi: &mut Vec<SpiTransaction<u8>>,
    busy: &mut Vec<PinTransaction>,
    dc: &mut Vec<PinTransaction>,
    rst: &mut Vec<PinTransaction>,
) {
    expect_reset(rst);
    busy.push(PinTransaction::get(PinState::Low));

    expect_cmd(spi, dc, 0x12); // software reset
    busy.push(PinTransaction::get(PinState::Low));

    expect_cmd(spi, dc, 0x11); // data entry mode
    expect_data(spi, dc, &[0x03]);

    expect_cmd(spi, dc, 0x44); // RAM X window, in 8-pixel units
    expect_data(spi, dc, &[0x00, 0x12]);
    expect_cmd(spi, dc, 0x45); // RAM Y window, little-endian
    expect_data(spi, dc, &[0x00, 0x00, 0x27, 0x01]);

    expect_cmd(spi, dc, 0x21); // display update control
    expect_data(spi, dc, &[0x00, 0x80]);

    // waveform table: 153 bytes to the LUT register, then the trailing six
    expect_cmd(spi, dc, 0x32);
    expect_data(spi, dc, &WF_PARTIAL[..LUT_REGISTER_LEN]);
    expect_cmd(spi, dc, 0x3F);
    expect_data(spi, dc, &[WF_PARTIAL[153]]);
    expect_cmd(spi, dc, 0x03);
    expect_data(spi, dc, &[WF_PARTIAL[154]]);
    expect_cmd(spi, dc, 0x04);
    expect_data(spi, dc, &WF_PARTIAL[155..158]);
    expect_cmd(spi, dc, 0x2C);
    expect_data(spi, dc, &[WF_PARTIAL[158]]);

    expect_cmd(spi, dc, 0x4E); // cursor to origin
    expect_data(spi, dc, &[0x00]);
    expect_cmd(spi, dc, 0x4F);
    expect_data(spi, dc, &[0x00, 0x00]);
    busy.push(PinTransaction::get(PinState::Low));
}

struct Mocks {
    spi: SpiMock<u8>,
    busy: PinMock,
    dc: PinMock,
    rst: PinMock,
}

impl Mocks {
    fn new(
        spi: &[SpiTransaction<u8>],
        busy: &[PinTransaction],
        dc: &[PinTransaction],
        rst: &[PinTransaction],
    ) -> Self {
        Mocks {
            spi: SpiMock::new(spi),
            busy: PinMock::new(busy),
            dc: PinMock::new(dc),
            rst: PinMock::new(rst),
        }
    }

    fn driver(
        &self,
        orientation: Orientation,
    ) -> Epd2in66b<SpiMock<u8>, PinMock, PinMock, PinMock, NoopDelay> {
        Epd2in66b::new(
            self.spi.clone(),
            self.busy.clone(),
            self.dc.clone(),
            self.rst.clone(),
            NoopDelay,
            orientation,
        )
    }

    fn done(mut self) {
        self.spi.done();
        self.busy.done();
        self.dc.done();
        self.rst.done();
    }
}

#[test]
fn plane_constants_match_the_panel() {
    assert_eq!(WIDTH, 152);
    assert_eq!(HEIGHT, 296);
    assert_eq!(STRIDE, 19);
    assert_eq!(BitPlane::for_panel().as_bytes().len(), 5624);
}

#[test]
fn init_sends_the_full_power_on_sequence() {
    let mut spi = Vec::new();
    let mut busy = Vec::new();
    let mut dc = Vec::new();
    let mut rst = Vec::new();
    expect_init(&mut spi, &mut busy, &mut dc, &mut rst);

    let mocks = Mocks::new(&spi, &busy, &dc, &rst);
    let mut epd = mocks.driver(Orientation::NORMAL);
    assert_eq!(epd.state(), PanelState::Uninitialized);
    epd.init().unwrap();
    assert_eq!(epd.state(), PanelState::Idle);
    mocks.done();
}

#[test]
fn clear_streams_constants_with_the_red_channel_complemented() {
    let mut spi = Vec::new();
    let mut busy = Vec::new();
    let mut dc = Vec::new();
    let mut rst = Vec::new();
    expect_init(&mut spi, &mut busy, &mut dc, &mut rst);

    expect_cmd(&mut spi, &mut dc, 0x24);
    expect_data(&mut spi, &mut dc, &vec![0xFF; 5624]);
    expect_cmd(&mut spi, &mut dc, 0x26);
    expect_data(&mut spi, &mut dc, &vec![0x00; 5624]); // !0xFF on the wire
    expect_cmd(&mut spi, &mut dc, 0x20);
    busy.push(PinTransaction::get(PinState::Low));

    let mocks = Mocks::new(&spi, &busy, &dc, &rst);
    let mut epd = mocks.driver(Orientation::NORMAL);
    epd.init().unwrap();
    epd.clear(0xFF, 0xFF).unwrap();
    assert_eq!(epd.state(), PanelState::Idle);
    mocks.done();
}

#[test]
fn invert_x_streams_rows_bottom_up() {
    let mut black = BitPlane::for_panel();
    let red = BitPlane::for_panel();
    // tag every byte of a row with the row index so order is visible
    for (i, b) in black.as_mut_bytes().iter_mut().enumerate() {
        *b = (i / STRIDE) as u8;
    }

    let mut spi = Vec::new();
    let mut busy = Vec::new();
    let mut dc = Vec::new();
    let mut rst = Vec::new();
    expect_init(&mut spi, &mut busy, &mut dc, &mut rst);

    expect_cmd(&mut spi, &mut dc, 0x24);
    for row in (0..HEIGHT as usize).rev() {
        expect_data(&mut spi, &mut dc, &[row as u8; STRIDE]);
    }
    expect_cmd(&mut spi, &mut dc, 0x26);
    // red plane is all zero, complemented to 0xFF on the wire
    expect_data(&mut spi, &mut dc, &vec![0xFF; 5624]);
    expect_cmd(&mut spi, &mut dc, 0x20);
    busy.push(PinTransaction::get(PinState::Low));

    let mocks = Mocks::new(&spi, &busy, &dc, &rst);
    let o = Orientation { invert_x: true, invert_y: false };
    let mut epd = mocks.driver(o);
    epd.init().unwrap();
    epd.display(&black, &red, None).unwrap();
    mocks.done();
}

#[test]
fn invert_y_reverses_bytes_and_bits_within_them() {
    let mut black = BitPlane::for_panel();
    let mut red = BitPlane::for_panel();
    black.as_mut_bytes().fill(0x01);
    red.as_mut_bytes().fill(0x01);

    let mut spi = Vec::new();
    let mut busy = Vec::new();
    let mut dc = Vec::new();
    let mut rst = Vec::new();
    expect_init(&mut spi, &mut busy, &mut dc, &mut rst);

    expect_cmd(&mut spi, &mut dc, 0x24);
    expect_data(&mut spi, &mut dc, &vec![BIT_REVERSE[0x01]; 5624]); // 0x80
    expect_cmd(&mut spi, &mut dc, 0x26);
    expect_data(&mut spi, &mut dc, &vec![BIT_REVERSE[0xFE]; 5624]); // !0x01 mirrored
    expect_cmd(&mut spi, &mut dc, 0x20);
    busy.push(PinTransaction::get(PinState::Low));

    let mocks = Mocks::new(&spi, &busy, &dc, &rst);
    let o = Orientation { invert_x: false, invert_y: true };
    let mut epd = mocks.driver(o);
    epd.init().unwrap();
    epd.display(&black, &red, None).unwrap();
    assert_eq!(BIT_REVERSE[0x01], 0x80);
    assert_eq!(BIT_REVERSE[0xFE], 0x7F);
    mocks.done();
}

#[test]
fn a_per_call_orientation_overrides_the_mount_default() {
    let mut black = BitPlane::for_panel();
    let mut red = BitPlane::for_panel();
    black.fill(0xFF);
    black.as_mut_bytes()[0] = 0x01; // top-left byte marks the corner
    red.fill(0x00);

    let mut spi = Vec::new();
    let mut busy = Vec::new();
    let mut dc = Vec::new();
    let mut rst = Vec::new();
    expect_init(&mut spi, &mut busy, &mut dc, &mut rst);

    // flipped on both axes: rows bottom-up, bytes right-to-left, bits
    // mirrored, so the marker byte comes out last as 0x80
    expect_cmd(&mut spi, &mut dc, 0x24);
    expect_data(&mut spi, &mut dc, &vec![0xFF; 5623]);
    expect_data(&mut spi, &mut dc, &[0x80]);
    expect_cmd(&mut spi, &mut dc, 0x26);
    expect_data(&mut spi, &mut dc, &vec![0xFF; 5624]); // !0x00 mirrored
    expect_cmd(&mut spi, &mut dc, 0x20);
    busy.push(PinTransaction::get(PinState::Low));

    let mocks = Mocks::new(&spi, &busy, &dc, &rst);
    let mut epd = mocks.driver(Orientation::NORMAL);
    epd.init().unwrap();
    epd.display(&black, &red, Some(Orientation::FLIPPED)).unwrap();
    mocks.done();
}

#[test]
fn an_uninitialized_panel_refuses_transfers() {
    let mocks = Mocks::new(&[], &[], &[], &[]);
    let mut epd = mocks.driver(Orientation::NORMAL);
    assert_eq!(epd.state(), PanelState::Uninitialized);

    let black = BitPlane::for_panel();
    let red = BitPlane::for_panel();
    assert!(matches!(
        epd.display(&black, &red, None),
        Err(Error::NotInitialized)
    ));
    assert!(matches!(epd.clear(0xFF, 0xFF), Err(Error::NotInitialized)));
    mocks.done();
}

#[test]
fn a_sleeping_panel_refuses_transfers() {
    let mut spi = Vec::new();
    let mut dc = Vec::new();
    expect_cmd(&mut spi, &mut dc, 0x10);
    expect_data(&mut spi, &mut dc, &[0x01]);

    let mocks = Mocks::new(&spi, &[], &dc, &[]);
    let mut epd = mocks.driver(Orientation::NORMAL);
    epd.sleep().unwrap();
    assert_eq!(epd.state(), PanelState::Sleeping);

    let black = BitPlane::for_panel();
    let red = BitPlane::for_panel();
    assert!(matches!(epd.display(&black, &red, None), Err(Error::Asleep)));
    assert!(matches!(epd.clear(0xFF, 0xFF), Err(Error::Asleep)));
    mocks.done();
}

#[test]
fn a_stuck_busy_line_times_out_instead_of_hanging() {
    let mut rst = Vec::new();
    expect_reset(&mut rst);
    // polled at 0, 10 and 20 ms against a 20 ms deadline
    let busy = vec![PinTransaction::get(PinState::High); 3];

    let mocks = Mocks::new(&[], &busy, &[], &rst);
    let mut epd = mocks.driver(Orientation::NORMAL);
    epd.set_busy_timeout_ms(20);
    assert!(matches!(epd.init(), Err(Error::PanelUnresponsive(20))));
    mocks.done();
}

#[test]
fn a_failed_busy_read_reports_the_pin_fault() {
    let mut rst = Vec::new();
    expect_reset(&mut rst);
    let busy = vec![
        PinTransaction::get(PinState::Low).with_error(MockError::Io(std::io::ErrorKind::NotConnected)),
    ];

    let mocks = Mocks::new(&[], &busy, &[], &rst);
    let mut epd = mocks.driver(Orientation::NORMAL);
    assert!(matches!(epd.init(), Err(Error::BusyPin)));
    mocks.done();
}

#[test]
fn pipeline_flush_pushes_custom_planes_through_a_full_cycle() {
    let mut spi = Vec::new();
    let mut busy = Vec::new();
    let mut dc = Vec::new();
    let mut rst = Vec::new();

    // wake
    expect_init(&mut spi, &mut busy, &mut dc, &mut rst);
    // blank the controller RAM
    expect_cmd(&mut spi, &mut dc, 0x24);
    expect_data(&mut spi, &mut dc, &vec![0xFF; 5624]);
    expect_cmd(&mut spi, &mut dc, 0x26);
    expect_data(&mut spi, &mut dc, &vec![0x00; 5624]);
    expect_cmd(&mut spi, &mut dc, 0x20);
    busy.push(PinTransaction::get(PinState::Low));
    // stream the composed planes
    expect_cmd(&mut spi, &mut dc, 0x24);
    expect_data(&mut spi, &mut dc, &vec![0xAA; 5624]);
    expect_cmd(&mut spi, &mut dc, 0x26);
    expect_data(&mut spi, &mut dc, &vec![0x00; 5624]); // !0xFF on the wire
    expect_cmd(&mut spi, &mut dc, 0x20);
    busy.push(PinTransaction::get(PinState::Low));
    // back to deep sleep
    expect_cmd(&mut spi, &mut dc, 0x10);
    expect_data(&mut spi, &mut dc, &[0x01]);

    let mocks = Mocks::new(&spi, &busy, &dc, &rst);
    let mut pipeline = Pipeline::new(mocks.driver(Orientation::NORMAL));
    let (black, red) = pipeline.planes_mut();
    black.fill(0xAA);
    red.fill(0xFF);
    pipeline.flush().unwrap();
    assert!(!pipeline.gate().is_busy());
    mocks.done();
}

#[test]
fn pipeline_refuses_a_second_concurrent_render() {
    let mocks = Mocks::new(&[], &[], &[], &[]);
    let mut pipeline = Pipeline::new(mocks.driver(Orientation::NORMAL));
    let gate = pipeline.gate();
    let pass = gate.try_begin().unwrap();
    assert!(matches!(pipeline.flush(), Err(Error::RenderInProgress)));
    drop(pass);
    mocks.done();
}
