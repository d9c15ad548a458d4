//! SH1106 command bytes

/// Control byte: the rest of the burst is commands
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the rest of the burst is display data
pub const CONTROL_DATA: u8 = 0x40;

pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_NORMAL: u8 = 0xA6;
pub const SET_INVERSE: u8 = 0xA7;
pub const DISPLAY_RAM: u8 = 0xA4;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const SET_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_MUX_RATIO: u8 = 0xA8;
pub const SET_LOW_COLUMN: u8 = 0x00;
pub const SET_HIGH_COLUMN: u8 = 0x10;
pub const SET_PAGE_ADDR: u8 = 0xB0;
pub const SET_START_LINE: u8 = 0x40;
pub const SET_PUMP_VOLTAGE: u8 = 0x30;
pub const SET_MEMORY_MODE: u8 = 0x20;
pub const SET_SEG_REMAP: u8 = 0xA1;
pub const SET_COM_SCAN_DEC: u8 = 0xC8;
pub const SET_CHARGE_PUMP: u8 = 0x8D;
pub const STOP_SCROLL: u8 = 0x2E;

/// Power-up sequence, sent as one command burst
pub const INIT_SEQUENCE: &[u8] = &[
    DISPLAY_OFF,
    SET_CLOCK_DIV,
    0x80, // Default clock
    SET_MUX_RATIO,
    0x3F, // 64 lines
    SET_DISPLAY_OFFSET,
    0x00,
    SET_START_LINE,
    SET_PUMP_VOLTAGE | 0x03, // 9V
    SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    SET_MEMORY_MODE,
    0x02,             // Page addressing
    SET_SEG_REMAP,    // Flip horizontally
    SET_COM_SCAN_DEC, // Flip vertically
    SET_COM_PINS,
    0x12, // Alternative COM config
    SET_CONTRAST,
    0xFF,
    SET_PRECHARGE,
    0xF1,
    SET_VCOM_DETECT,
    0x40,
    DISPLAY_RAM,
    SET_NORMAL,
    STOP_SCROLL,
    DISPLAY_ON,
];

/// Address command for the start of a data burst: page, then column low/high nibble
pub fn address(page: u8, column: u8) -> [u8; 4] {
    [
        CONTROL_COMMAND,
        SET_PAGE_ADDR + page,
        SET_LOW_COLUMN + (column & 0x0F),
        SET_HIGH_COLUMN + (column >> 4),
    ]
}
