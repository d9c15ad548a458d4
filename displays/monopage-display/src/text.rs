//! Text, number and panel composition
//!
//! Glyphs are laid out left to right. Each glyph row is written as its
//! columns followed by one blank column; the returned advance is what the
//! next glyph's origin moves by (see [`Glyph::advance`]).

use heapless::String;
use monopage_core::{assets, Bitmap, Font, Glyph, ResourceError};
use monopage_hal::I2cBus;

use crate::error::Error;
use crate::surface::{PagedSurface, PAGES};

/// Longest decimal form of an `i32`: sign plus ten digits
const INT_CHARS: usize = 11;

/// Decimal form of `value`, most significant digit first
///
/// Digits are peeled off with descending powers of ten, so no reversal is
/// needed. Covers the whole `i32` range including `i32::MIN`.
pub fn int_chars(value: i32) -> String<INT_CHARS> {
    let mut out = String::new();
    if value < 0 {
        let _ = out.push('-');
    }

    let mut rest = value.unsigned_abs();
    if rest == 0 {
        let _ = out.push('0');
        return out;
    }

    let mut power: u32 = 1_000_000_000;
    let mut has_digit = false;
    while power > 0 {
        let digit = rest / power;
        if digit > 0 || has_digit {
            // Sign plus at most ten digits always fits
            let _ = out.push(char::from(b'0' + digit as u8));
            has_digit = true;
        }
        rest %= power;
        power /= 10;
    }
    out
}

/// Three border images that frame a panel
#[derive(Debug, Clone, Copy)]
pub struct Panel<'a> {
    /// Drawn on the first page
    pub top: Bitmap<'a>,
    /// Repeated on every page in between
    pub middle: Bitmap<'a>,
    /// Drawn on the last page
    pub bottom: Bitmap<'a>,
}

impl Panel<'static> {
    /// Full-width frame with rounded corners from the built-in images
    pub fn frame() -> Result<Self, ResourceError> {
        Ok(Self {
            top: Bitmap::new(assets::IMG_BOX_TOP)?,
            middle: Bitmap::new(assets::IMG_BOX_MID)?,
            bottom: Bitmap::new(assets::IMG_BOX_BOT)?,
        })
    }
}

impl<I2C> PagedSurface<I2C>
where
    I2C: I2cBus,
{
    /// Draw an already located glyph at `(column, page)`
    ///
    /// With bold on, each column is OR-ed with the one to its left and the
    /// last column is repeated once more, so strokes get one pixel wider.
    pub fn draw_glyph(
        &mut self,
        glyph: &Glyph<'_>,
        column: i16,
        page: i16,
    ) -> Result<u16, Error<I2C::Error>> {
        let bold = self.config().bold;
        let mut tx = self.transaction();
        let mut row_page = page;
        for row in glyph.rows() {
            tx.set_cursor(column, row_page)?;
            let mut prev = 0;
            for &bar in row {
                if bold {
                    tx.write_bar(bar | prev)?;
                } else {
                    tx.write_bar(bar)?;
                }
                prev = bar;
            }
            if bold {
                tx.write_bar(prev)?;
            }
            // Letter gap
            tx.write_bar(0)?;
            row_page = row_page.saturating_add(1);
        }
        tx.finish()?;
        Ok(glyph.advance(bold))
    }

    /// Draw one character at `(column, page)`
    ///
    /// Characters the font doesn't cover draw nothing and advance by 0.
    pub fn draw_char(
        &mut self,
        ch: char,
        column: i16,
        page: i16,
        font: &Font<'_>,
    ) -> Result<u16, Error<I2C::Error>> {
        match font.locate_char(ch)? {
            Some(glyph) => self.draw_glyph(&glyph, column, page),
            None => Ok(0),
        }
    }

    /// Draw a string starting at `(column, page)`, returning its total advance
    ///
    /// Strings starting below the last page are ignored.
    pub fn draw_str(
        &mut self,
        text: &str,
        column: i16,
        page: i16,
        font: &Font<'_>,
    ) -> Result<u16, Error<I2C::Error>> {
        if page >= PAGES {
            return Ok(0);
        }
        self.draw_chars(text, column, page, font)
    }

    /// Draw a signed integer in decimal, returning its total advance
    pub fn draw_int(
        &mut self,
        value: i32,
        column: i16,
        page: i16,
        font: &Font<'_>,
    ) -> Result<u16, Error<I2C::Error>> {
        self.draw_chars(&int_chars(value), column, page, font)
    }

    /// Draw `panel` across pages `first_page..=last_page` with `caption` centred inside
    ///
    /// Returns the caption's advance.
    pub fn draw_panel(
        &mut self,
        panel: &Panel<'_>,
        first_page: i16,
        last_page: i16,
        caption: &str,
        font: &Font<'_>,
    ) -> Result<u16, Error<I2C::Error>> {
        self.draw_image(0, first_page, &panel.top)?;
        // Middle pages off the surface would be clipped whole
        for page in first_page.saturating_add(1).max(0)..last_page.min(PAGES) {
            self.draw_image(0, page, &panel.middle)?;
        }
        self.draw_image(0, last_page, &panel.bottom)?;

        let width = i16::try_from(font.text_width(caption, self.config().bold)?)
            .unwrap_or(i16::MAX);
        let inner = i16::from(panel.top.width());
        let column = inner.saturating_sub(width) / 2;
        let height = last_page.saturating_sub(first_page).saturating_add(1);
        let spare = height.saturating_sub(i16::from(font.page_height())).max(0);
        let page = first_page.saturating_add(spare / 2);
        self.draw_str(caption, column, page, font)
    }

    /// Frame `caption` in the built-in full-screen box
    ///
    /// The frame covers every page, so whatever was on the display is replaced.
    pub fn draw_box(&mut self, caption: &str, font: &Font<'_>) -> Result<u16, Error<I2C::Error>> {
        let panel = Panel::frame()?;
        self.draw_panel(&panel, 0, PAGES - 1, caption, font)
    }

    fn draw_chars(
        &mut self,
        text: &str,
        column: i16,
        page: i16,
        font: &Font<'_>,
    ) -> Result<u16, Error<I2C::Error>> {
        let mut x = column;
        let mut total: u16 = 0;
        for ch in text.chars() {
            let advance = self.draw_char(ch, x, page, font)?;
            total = total.saturating_add(advance);
            x = x.saturating_add_unsigned(advance);
        }
        Ok(total)
    }
}
