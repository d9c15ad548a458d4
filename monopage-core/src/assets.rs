//! Built-in fonts and images
//!
//! Fonts use the layout described in [`crate::font`], images the one in
//! [`crate::image`]. All of them live in flash as plain byte slices.

/// Proportional 7-pixel font, one page tall, `' '` to `'z'`
pub const SMALL_FONT: &[u8] = &[
    0x20, 1, // first char, page height
    2, 0x00, 0x00, // ' '
    1, 0x5F, // '!'
    3, 0x07, 0x00, 0x07, // '"'
    5, 0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    5, 0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    5, 0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    5, 0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    2, 0x05, 0x03, // '\''
    3, 0x1C, 0x22, 0x41, // '('
    3, 0x41, 0x22, 0x1C, // ')'
    5, 0x08, 0x2A, 0x1C, 0x2A, 0x08, // '*'
    5, 0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    2, 0x80, 0x60, // ','
    5, 0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    2, 0x60, 0x60, // '.'
    5, 0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    5, 0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    3, 0x42, 0x7F, 0x40, // '1'
    5, 0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    5, 0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    5, 0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    5, 0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    5, 0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    5, 0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    5, 0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    5, 0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    2, 0x36, 0x36, // ':'
    2, 0x80, 0x66, // ';'
    4, 0x08, 0x14, 0x22, 0x41, // '<'
    5, 0x14, 0x14, 0x14, 0x14, 0x14, // '='
    4, 0x41, 0x22, 0x14, 0x08, // '>'
    5, 0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    5, 0x32, 0x49, 0x79, 0x41, 0x3E, // '@'
    5, 0x7E, 0x11, 0x11, 0x11, 0x7E, // 'A'
    5, 0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    5, 0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    5, 0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    5, 0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    5, 0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    5, 0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    5, 0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    3, 0x41, 0x7F, 0x41, // 'I'
    5, 0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    5, 0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    5, 0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    5, 0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    5, 0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    5, 0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    5, 0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    5, 0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    5, 0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    5, 0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    5, 0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    5, 0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    5, 0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    5, 0x7F, 0x20, 0x18, 0x20, 0x7F, // 'W'
    5, 0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    5, 0x03, 0x04, 0x78, 0x04, 0x03, // 'Y'
    5, 0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    3, 0x7F, 0x41, 0x41, // '['
    5, 0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    3, 0x41, 0x41, 0x7F, // ']'
    5, 0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    5, 0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    3, 0x01, 0x02, 0x04, // '`'
    5, 0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    5, 0x7F, 0x48, 0x44, 0x44, 0x38, // 'b'
    5, 0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    5, 0x38, 0x44, 0x44, 0x48, 0x7F, // 'd'
    5, 0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    5, 0x08, 0x7E, 0x09, 0x01, 0x02, // 'f'
    5, 0x08, 0x14, 0x54, 0x54, 0x3C, // 'g'
    5, 0x7F, 0x08, 0x04, 0x04, 0x78, // 'h'
    3, 0x44, 0x7D, 0x40, // 'i'
    4, 0x20, 0x40, 0x44, 0x3D, // 'j'
    4, 0x7F, 0x10, 0x28, 0x44, // 'k'
    3, 0x41, 0x7F, 0x40, // 'l'
    5, 0x7C, 0x04, 0x18, 0x04, 0x78, // 'm'
    5, 0x7C, 0x08, 0x04, 0x04, 0x78, // 'n'
    5, 0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    5, 0x7C, 0x14, 0x14, 0x14, 0x08, // 'p'
    5, 0x08, 0x14, 0x14, 0x18, 0x7C, // 'q'
    5, 0x7C, 0x08, 0x04, 0x04, 0x08, // 'r'
    5, 0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    5, 0x04, 0x3F, 0x44, 0x40, 0x20, // 't'
    5, 0x3C, 0x40, 0x40, 0x20, 0x7C, // 'u'
    5, 0x1C, 0x20, 0x40, 0x20, 0x1C, // 'v'
    5, 0x3C, 0x40, 0x30, 0x40, 0x3C, // 'w'
    5, 0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    5, 0x0C, 0x50, 0x50, 0x50, 0x3C, // 'y'
    5, 0x44, 0x64, 0x54, 0x4C, 0x44, // 'z'
    0, // end of table
];

/// Double-size digits, two pages tall, `'-'` to `'9'`
pub const LARGE_DIGITS_FONT: &[u8] = &[
    0x2D, 2, // first char, page height
    10, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, // '-'
    4, 0x00, 0x00, 0x00, 0x00, 0x78, 0x78, 0x78, 0x78, // '.'
    10, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x60, 0x60, 0x18, 0x18, 0x18, 0x18, 0x06, 0x06, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, // '/'
    10, 0xF8, 0xF8, 0x06, 0x06, 0x86, 0x86, 0x66, 0x66, 0xF8, 0xF8, 0x1F, 0x1F, 0x66, 0x66, 0x61, 0x61, 0x60, 0x60, 0x1F, 0x1F, // '0'
    6, 0x18, 0x18, 0xFE, 0xFE, 0x00, 0x00, 0x60, 0x60, 0x7F, 0x7F, 0x60, 0x60, // '1'
    10, 0x18, 0x18, 0x06, 0x06, 0x06, 0x06, 0x86, 0x86, 0x78, 0x78, 0x60, 0x60, 0x78, 0x78, 0x66, 0x66, 0x61, 0x61, 0x60, 0x60, // '2'
    10, 0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x9E, 0x9E, 0x06, 0x06, 0x18, 0x18, 0x60, 0x60, 0x60, 0x60, 0x61, 0x61, 0x1E, 0x1E, // '3'
    10, 0x80, 0x80, 0x60, 0x60, 0x18, 0x18, 0xFE, 0xFE, 0x00, 0x00, 0x07, 0x07, 0x06, 0x06, 0x06, 0x06, 0x7F, 0x7F, 0x06, 0x06, // '4'
    10, 0x7E, 0x7E, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x86, 0x86, 0x18, 0x18, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x1F, 0x1F, // '5'
    10, 0xE0, 0xE0, 0x98, 0x98, 0x86, 0x86, 0x86, 0x86, 0x00, 0x00, 0x1F, 0x1F, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x1E, 0x1E, // '6'
    10, 0x06, 0x06, 0x06, 0x06, 0x86, 0x86, 0x66, 0x66, 0x1E, 0x1E, 0x00, 0x00, 0x7E, 0x7E, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, // '7'
    10, 0x78, 0x78, 0x86, 0x86, 0x86, 0x86, 0x86, 0x86, 0x78, 0x78, 0x1E, 0x1E, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x1E, 0x1E, // '8'
    10, 0x78, 0x78, 0x86, 0x86, 0x86, 0x86, 0x86, 0x86, 0xF8, 0xF8, 0x00, 0x00, 0x61, 0x61, 0x61, 0x61, 0x19, 0x19, 0x07, 0x07, // '9'
    0, // end of table
];

/// 16x16 smiley face
pub const IMG_SMILEY: &[u8] = &[
    16, 2, // width, pages
    0x20, 0x80, 0xF0, 0x18, 0x0C, 0x06, 0x62, 0x02, 0x03, 0x03, 0x02, 0x62, 0x06, 0x0C, 0x18, 0xF0, 0x80, 0x01, 0x0F, 0x18, 0x30, 0x64, 0x48, 0x48, 0xC8, 0xC8, 0x48, 0x48, 0x64, 0x30, 0x18, 0x0F, 0x01,
];

/// Top edge of a full-width frame with rounded corners
pub const IMG_BOX_TOP: &[u8] = &[
    128, 1, // width, pages
    0x02, 0xFC, 0x02,
    0xFC, 0x01,
    0x02, 0x02, 0xFC,
];

/// Side walls of a full-width frame
pub const IMG_BOX_MID: &[u8] = &[
    128, 1, // width, pages
    0x01, 0xFF,
    0xFE, 0x00,
    0x01, 0xFF,
];

/// Bottom edge of a full-width frame with rounded corners
pub const IMG_BOX_BOT: &[u8] = &[
    128, 1, // width, pages
    0x02, 0x3F, 0x40,
    0xFC, 0x80,
    0x02, 0x40, 0x3F,
];
