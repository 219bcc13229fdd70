/// Command bytes of the panel controller. Values are fixed by hardware.
pub struct Cmd;

impl Cmd {
    // Init
    pub const SW_RESET: u8 = 0x12;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SET_RAMX_START_END: u8 = 0x44;
    pub const SET_RAMY_START_END: u8 = 0x45;
    pub const DISPLAY_UPDATE_CONTROL: u8 = 0x21;
    pub const DEEP_SLEEP_MODE: u8 = 0x10;

    // Waveform table and its spill-over registers
    pub const WRITE_LUT_REGISTER: u8 = 0x32;
    pub const END_OPTION: u8 = 0x3F;
    pub const GATE_VOLTAGE_CONTROL: u8 = 0x03;
    pub const SOURCE_VOLTAGE_CONTROL: u8 = 0x04;
    pub const WRITE_VCOM_REGISTER: u8 = 0x2C;

    // Update
    pub const SET_RAMX_COUNTER: u8 = 0x4E;
    pub const SET_RAMY_COUNTER: u8 = 0x4F;
    pub const WRITE_BW_DATA: u8 = 0x24;
    pub const WRITE_RED_DATA: u8 = 0x26;
    pub const MASTER_ACTIVATE: u8 = 0x20;
}
