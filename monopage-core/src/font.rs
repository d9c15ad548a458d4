//! Variable-width bitmap fonts
//!
//! Resource layout:
//! - FIRST (1 byte): character code of the first glyph
//! - HEIGHT (1 byte): glyph height in pages, the same for every glyph
//! - GLYPHS: for each code from FIRST upwards, a width byte `W` followed by
//!   `W * HEIGHT` bars, page-major (all of page 0, then page 1...)
//! - END (1 byte): a zero width terminates the table
//!
//! There is no index: finding a glyph walks the table from the start.

use crate::reader::{ResourceError, ResourceReader};

/// Header bytes in front of the glyph table
const HEADER_LEN: usize = 2;

/// Blank columns drawn after every glyph row
pub const LETTER_GAP: u8 = 1;

/// Shift a table-relative error so the offset points into the whole resource
fn in_resource(err: ResourceError) -> ResourceError {
    let ResourceError::Malformed { offset } = err;
    ResourceError::Malformed {
        offset: offset + HEADER_LEN,
    }
}

/// A bitmap font borrowed from program storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    first_char: u8,
    page_height: u8,
    table: &'a [u8],
}

impl<'a> Font<'a> {
    /// Parse the font header
    pub fn new(data: &'a [u8]) -> Result<Self, ResourceError> {
        let mut reader = ResourceReader::new(data);
        let first_char = reader.next_byte()?;
        let page_height = reader.next_byte()?;
        if page_height == 0 {
            return Err(ResourceError::Malformed { offset: 1 });
        }
        Ok(Self {
            first_char,
            page_height,
            table: &data[HEADER_LEN..],
        })
    }

    /// Code of the first glyph in the table
    pub fn first_char(&self) -> u8 {
        self.first_char
    }

    /// Glyph height in pages
    pub fn page_height(&self) -> u8 {
        self.page_height
    }

    /// Find the glyph for `code`
    ///
    /// Returns `Ok(None)` when the code is below the first character or past
    /// the end of the table.
    pub fn locate(&self, code: u8) -> Result<Option<Glyph<'a>>, ResourceError> {
        if code < self.first_char {
            return Ok(None);
        }

        let mut reader = ResourceReader::new(self.table);
        for _ in self.first_char..code {
            let width = reader.next_byte().map_err(in_resource)?;
            if width == 0 {
                return Ok(None);
            }
            reader
                .skip(self.glyph_len(width))
                .map_err(in_resource)?;
        }

        self.read_glyph(&mut reader)
    }

    /// Find the glyph for a character, if it fits in one byte
    pub fn locate_char(&self, ch: char) -> Result<Option<Glyph<'a>>, ResourceError> {
        match u8::try_from(ch) {
            Ok(code) => self.locate(code),
            Err(_) => Ok(None),
        }
    }

    /// Width in columns `text` takes when drawn, including letter gaps
    ///
    /// Characters without a glyph contribute nothing.
    pub fn text_width(&self, text: &str, bold: bool) -> Result<u16, ResourceError> {
        let mut width: u16 = 0;
        for ch in text.chars() {
            if let Some(glyph) = self.locate_char(ch)? {
                width = width.saturating_add(glyph.advance(bold));
            }
        }
        Ok(width)
    }

    /// Walk every glyph in the table
    pub fn glyphs(&self) -> Glyphs<'a> {
        Glyphs {
            font: *self,
            reader: ResourceReader::new(self.table),
            code: Some(self.first_char),
        }
    }

    fn glyph_len(&self, width: u8) -> usize {
        usize::from(width) * usize::from(self.page_height)
    }

    fn read_glyph(
        &self,
        reader: &mut ResourceReader<'a>,
    ) -> Result<Option<Glyph<'a>>, ResourceError> {
        let width = reader.next_byte().map_err(in_resource)?;
        if width == 0 {
            return Ok(None);
        }
        let bars = reader.take(self.glyph_len(width)).map_err(in_resource)?;
        Ok(Some(Glyph {
            width,
            page_height: self.page_height,
            bars,
        }))
    }
}

/// One character's bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph<'a> {
    width: u8,
    page_height: u8,
    bars: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Declared width in columns, without the letter gap
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pages
    pub fn page_height(&self) -> u8 {
        self.page_height
    }

    /// Bars of one page row, left to right
    ///
    /// Rows past the glyph height are empty.
    pub fn row(&self, row: u8) -> &'a [u8] {
        let width = usize::from(self.width);
        let start = usize::from(row) * width;
        self.bars.get(start..start + width).unwrap_or(&[])
    }

    /// Page rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.bars.chunks(usize::from(self.width))
    }

    /// Columns the cursor moves after drawing this glyph
    ///
    /// The letter gap is counted once per page row, and bold adds one.
    /// Layouts built against these fonts rely on that spacing.
    pub fn advance(&self, bold: bool) -> u16 {
        u16::from(self.width)
            + u16::from(self.page_height) * u16::from(LETTER_GAP)
            + u16::from(bold)
    }
}

/// Iterator over `(code, glyph)` pairs of a [`Font`]
#[derive(Debug, Clone)]
pub struct Glyphs<'a> {
    font: Font<'a>,
    reader: ResourceReader<'a>,
    code: Option<u8>,
}

impl<'a> Iterator for Glyphs<'a> {
    type Item = Result<(u8, Glyph<'a>), ResourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.code?;
        match self.font.read_glyph(&mut self.reader) {
            Ok(Some(glyph)) => {
                self.code = code.checked_add(1);
                Some(Ok((code, glyph)))
            }
            Ok(None) => {
                self.code = None;
                None
            }
            Err(e) => {
                self.code = None;
                Some(Err(e))
            }
        }
    }
}
