/// Data bytes that accompany the commands in [`super::cmd::Cmd`].
pub struct Flag;

#[allow(missing_docs)]
impl Flag {
    // Data Entry Mode (0x11) flags
    pub const DATA_ENTRY_DECRY_DECRX: u8 = 0x00; // Y decrement, X decrement
    pub const DATA_ENTRY_DECRY_INCRX: u8 = 0x01; // Y decrement, X increment
    pub const DATA_ENTRY_INCRY_DECRX: u8 = 0x02; // Y increment, X decrement
    pub const DATA_ENTRY_INCRY_INCRX: u8 = 0x03; // Y increment, X increment

    // Display Update Control (0x21) data pair used by this panel
    pub const UPDATE_CONTROL_BYTE_1: u8 = 0x00;
    pub const UPDATE_CONTROL_BYTE_2: u8 = 0x80;

    // Deep Sleep Mode (0x10) flags
    pub const DEEP_SLEEP_NORMAL_MODE: u8 = 0x00;
    pub const DEEP_SLEEP_MODE_1: u8 = 0x01; // Enter deep sleep, RAM retained
}
