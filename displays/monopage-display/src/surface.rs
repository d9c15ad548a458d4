//! Paged surface driver
//!
//! Addresses the controller RAM as `COLUMNS` x `PAGES` bars and batches
//! bar writes into bursts. Each burst is two I2C writes: an address
//! command (page, column) followed by a data write carrying the bars.
//!
//! Batching rules, applied per bar by [`Transaction::write_bar`]:
//! - A bar off the visible surface is counted but not sent
//! - A bar that doesn't continue the open burst (other page, or a gap in
//!   the columns) closes it and opens a new one at its own address
//! - A burst that already holds `batch_limit` bars is closed the same way

use heapless::Vec;
use monopage_core::Bitmap;
use monopage_hal::I2cBus;

use crate::cmd;
use crate::config::{RenderConfig, MAX_BATCH_LIMIT};
use crate::error::Error;

/// Visible columns
pub const COLUMNS: i16 = 128;

/// Visible pages (rows of 8 pixels)
pub const PAGES: i16 = 8;

/// Whether `(column, page)` lies on the visible surface
fn on_surface(column: i16, page: i16) -> bool {
    (0..COLUMNS).contains(&column) && (0..PAGES).contains(&page)
}

/// SH1106 display addressed page by page
pub struct PagedSurface<I2C> {
    i2c: I2C,
    config: RenderConfig,
}

impl<I2C> PagedSurface<I2C>
where
    I2C: I2cBus,
{
    /// Create a new surface on an I2C bus
    ///
    /// Nothing is sent until [`init`](Self::init) or a draw call.
    pub fn new(i2c: I2C, config: RenderConfig) -> Self {
        Self { i2c, config }
    }

    /// Current render settings
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Switch bold text on or off
    pub fn set_bold(&mut self, bold: bool) {
        self.config.bold = bold;
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Power up the controller and clear its RAM
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("initialising SH1106 at {=u8:#x}", self.config.address);

        self.commands(cmd::INIT_SEQUENCE)?;
        self.clear()
    }

    /// Send a command burst
    fn commands(&mut self, commands: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut burst: Vec<u8, 32> = Vec::new();
        let _ = burst.push(cmd::CONTROL_COMMAND);
        for chunk in commands.chunks(burst.capacity() - 1) {
            burst.truncate(1);
            // Chunk size leaves room for the control byte
            let _ = burst.extend_from_slice(chunk);
            self.i2c
                .write(self.config.address, &burst)
                .map_err(Error::Bus)?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<I2C::Error>> {
        self.commands(&[cmd::SET_CONTRAST, contrast])
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        if on {
            self.commands(&[cmd::DISPLAY_ON])
        } else {
            self.commands(&[cmd::DISPLAY_OFF])
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        if inverted {
            self.commands(&[cmd::SET_INVERSE])
        } else {
            self.commands(&[cmd::SET_NORMAL])
        }
    }

    /// Start a batch of bar writes
    ///
    /// The transaction borrows the bus until [`Transaction::finish`].
    pub fn transaction(&mut self) -> Transaction<'_, I2C> {
        Transaction::new(&mut self.i2c, &self.config)
    }

    /// Fill the whole RAM with zero bars
    pub fn clear(&mut self) -> Result<(), Error<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("clearing display");

        let mut tx = self.transaction();
        for page in 0..PAGES {
            tx.set_cursor(0, page)?;
            for _ in 0..COLUMNS {
                tx.write_bar(0)?;
            }
        }
        tx.finish()
    }

    /// Write a single bar at `(column, page)`
    pub fn draw_bar(&mut self, column: i16, page: i16, bar: u8) -> Result<(), Error<I2C::Error>> {
        let mut tx = self.transaction();
        tx.set_cursor(column, page)?;
        tx.write_bar(bar)?;
        tx.finish()
    }

    /// Draw a run-length encoded bitmap with its top-left corner at `(column, page)`
    ///
    /// Parts of the image off the surface are clipped. Returns the image width.
    pub fn draw_image(
        &mut self,
        column: i16,
        page: i16,
        bitmap: &Bitmap<'_>,
    ) -> Result<u8, Error<I2C::Error>> {
        let width = bitmap.width();
        if bitmap.bar_count() == 0 {
            return Ok(width);
        }

        let mut tx = self.transaction();
        tx.set_cursor(column, page)?;
        let mut x = 0;
        let mut row = page;
        for bar in bitmap.bars() {
            tx.write_bar(bar?)?;
            x += 1;
            if x == width {
                x = 0;
                row = row.saturating_add(1);
                tx.set_cursor(column, row)?;
            }
        }
        tx.finish()?;
        Ok(width)
    }
}

/// The burst currently being filled
#[derive(Debug, Clone, Copy)]
struct Burst {
    page: i16,
    next_column: i16,
}

/// A batch of bar writes with its own cursor
///
/// Bars are buffered and sent as one data write per burst. Call
/// [`finish`](Self::finish) to send the last burst; dropping a transaction
/// discards whatever is still buffered.
#[must_use = "call finish() to send buffered bars"]
pub struct Transaction<'s, I2C: I2cBus> {
    i2c: &'s mut I2C,
    address: u8,
    column_offset: u8,
    batch_limit: usize,
    column: i16,
    page: i16,
    burst: Option<Burst>,
    buf: Vec<u8, { MAX_BATCH_LIMIT + 1 }>,
    bursts_opened: usize,
}

impl<'s, I2C: I2cBus> Transaction<'s, I2C> {
    fn new(i2c: &'s mut I2C, config: &RenderConfig) -> Self {
        Self {
            i2c,
            address: config.address,
            column_offset: config.column_offset,
            batch_limit: config.batch_limit(),
            column: 0,
            page: 0,
            burst: None,
            buf: Vec::new(),
            bursts_opened: 0,
        }
    }

    /// Move the cursor, closing the open burst
    pub fn set_cursor(&mut self, column: i16, page: i16) -> Result<(), Error<I2C::Error>> {
        self.end()?;
        self.column = column;
        self.page = page;
        Ok(())
    }

    /// Current cursor as `(column, page)`
    pub fn cursor(&self) -> (i16, i16) {
        (self.column, self.page)
    }

    /// Write one bar at the cursor and move one column right
    pub fn write_bar(&mut self, bar: u8) -> Result<(), Error<I2C::Error>> {
        let (column, page) = (self.column, self.page);
        self.column = column.saturating_add(1);

        if !on_surface(column, page) {
            return Ok(());
        }

        let continues = matches!(
            self.burst,
            Some(burst) if burst.page == page && burst.next_column == column
        );
        if !continues || self.buf.len() > self.batch_limit {
            self.end()?;
            self.open(column, page)?;
        }

        // open() leaves room for at least one bar
        let _ = self.buf.push(bar);
        self.burst = Some(Burst {
            page,
            next_column: column + 1,
        });
        Ok(())
    }

    /// Send the open burst, if any
    pub fn end(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.burst.take().is_some() {
            #[cfg(feature = "defmt")]
            defmt::trace!("burst of {=usize} bars", self.buf.len() - 1);

            self.i2c
                .write(self.address, &self.buf)
                .map_err(Error::Bus)?;
        }
        self.buf.clear();
        Ok(())
    }

    /// Number of bursts started so far
    pub fn bursts_opened(&self) -> usize {
        self.bursts_opened
    }

    /// Send the last burst and release the bus
    pub fn finish(mut self) -> Result<(), Error<I2C::Error>> {
        self.end()
    }

    fn open(&mut self, column: i16, page: i16) -> Result<(), Error<I2C::Error>> {
        // Both are on the surface here, so they fit in a byte
        let ram_page = page as u8;
        let ram_column = (column as u8).wrapping_add(self.column_offset);
        self.i2c
            .write(self.address, &cmd::address(ram_page, ram_column))
            .map_err(Error::Bus)?;

        self.buf.clear();
        let _ = self.buf.push(cmd::CONTROL_DATA);
        self.burst = Some(Burst {
            page,
            next_column: column,
        });
        self.bursts_opened += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{BusFault, RecordingBus};
    use monopage_core::assets;

    fn surface() -> PagedSurface<RecordingBus> {
        PagedSurface::new(RecordingBus::new(), RenderConfig::default())
    }

    #[test]
    fn test_init_sends_sequence_then_clears() {
        let mut oled = surface();
        oled.init().unwrap();
        let bus = oled.release();

        assert_eq!(bus.writes[0].0, 0x3C);
        assert_eq!(bus.writes[0].1[0], 0x00);
        assert_eq!(&bus.writes[0].1[1..], cmd::INIT_SEQUENCE);
        assert_eq!(bus.framebuffer(0), [[0u8; 128]; 8]);
        assert_eq!(bus.bursts().len(), 8 * 5);
    }

    #[test]
    fn test_clear_chunks_of_26() {
        let mut oled = surface();
        oled.clear().unwrap();
        let bursts = oled.release().bursts();

        let sizes: std::vec::Vec<usize> = bursts[..5].iter().map(|b| b.bars.len()).collect();
        assert_eq!(sizes, [26, 26, 26, 26, 24]);
        let columns: std::vec::Vec<u8> = bursts[..5].iter().map(|b| b.column).collect();
        assert_eq!(columns, [0, 26, 52, 78, 104]);
        assert!(bursts.iter().all(|b| b.bars.iter().all(|&bar| bar == 0)));
        for page in 0..8u8 {
            assert_eq!(bursts.iter().filter(|b| b.page == page).count(), 5);
        }
    }

    #[test]
    fn test_address_bytes() {
        let mut oled = surface();
        oled.draw_bar(0x5A, 3, 0x81).unwrap();
        let bus = oled.release();

        assert_eq!(bus.writes[0].1, [0x00, 0xB3, 0x0A, 0x15]);
        assert_eq!(bus.writes[1].1, [0x40, 0x81]);
    }

    #[test]
    fn test_column_offset_applied() {
        let mut oled = PagedSurface::new(RecordingBus::new(), RenderConfig::sh1106_1in3());
        oled.draw_bar(0, 0, 0xFF).unwrap();
        let bus = oled.release();
        assert_eq!(bus.writes[0].1, [0x00, 0xB0, 0x02, 0x10]);
    }

    #[test]
    fn test_wide_image_is_split_into_bursts() {
        // 60 columns of 0x55, one page
        let data = [60, 1, 0x80 + 60, 0x55];
        let bitmap = Bitmap::new(&data).unwrap();

        let mut oled = surface();
        assert_eq!(oled.draw_image(10, 2, &bitmap).unwrap(), 60);
        let bursts = oled.release().bursts();

        assert_eq!(bursts.len(), 3);
        assert!(bursts.iter().all(|b| b.bars.len() <= 26));
        assert_eq!(bursts[0].column, 10);
        assert_eq!(bursts[1].column, 36);
        assert_eq!(bursts[2].column, 62);
        assert_eq!(bursts[2].bars.len(), 8);
    }

    #[test]
    fn test_image_pages_wrap() {
        let bitmap = Bitmap::new(assets::IMG_SMILEY).unwrap();
        let mut oled = surface();
        oled.draw_image(20, 1, &bitmap).unwrap();
        let bus = oled.release();

        let bursts = bus.bursts();
        assert_eq!(bursts.len(), 2);
        assert_eq!((bursts[0].page, bursts[0].column), (1, 20));
        assert_eq!((bursts[1].page, bursts[1].column), (2, 20));

        let expected: std::vec::Vec<u8> = bitmap.bars().map(Result::unwrap).collect();
        let fb = bus.framebuffer(0);
        assert_eq!(&fb[1][20..36], &expected[..16]);
        assert_eq!(&fb[2][20..36], &expected[16..]);
    }

    #[test]
    fn test_clipping_right_edge() {
        // 10 wide, 2 pages, drawn so that 4 columns hang off the right
        let data = [10, 2, 0x80 + 20, 0xFF];
        let bitmap = Bitmap::new(&data).unwrap();

        let mut oled = surface();
        oled.draw_image(122, 6, &bitmap).unwrap();
        let bus = oled.release();

        let bursts = bus.bursts();
        assert_eq!(bursts.len(), 2);
        for (burst, page) in bursts.iter().zip([6, 7]) {
            assert_eq!(burst.page, page);
            assert_eq!(burst.column, 122);
            assert_eq!(burst.bars.len(), 6);
        }
    }

    #[test]
    fn test_clipping_left_and_bottom_edges() {
        // 4 wide, 3 pages with distinct bars per column
        let data = [4, 3, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let bitmap = Bitmap::new(&data).unwrap();

        let mut oled = surface();
        oled.draw_image(-2, 6, &bitmap).unwrap();
        let bus = oled.release();

        let fb = bus.framebuffer(0);
        // Columns -2 and -1 are dropped; the rest lands without shifting
        assert_eq!(&fb[6][..2], &[3, 4]);
        assert_eq!(&fb[7][..2], &[7, 8]);
        // Page 8 is off the surface
        assert_eq!(bus.bursts().len(), 2);
    }

    #[test]
    fn test_image_fully_off_surface_sends_nothing() {
        let bitmap = Bitmap::new(assets::IMG_SMILEY).unwrap();
        let mut oled = surface();
        oled.draw_image(0, 8, &bitmap).unwrap();
        oled.draw_image(200, 0, &bitmap).unwrap();
        oled.draw_image(-16, 0, &bitmap).unwrap();
        assert!(oled.release().writes.is_empty());
    }

    #[test]
    fn test_empty_image_sends_nothing() {
        let mut oled = surface();
        assert_eq!(oled.draw_image(0, 0, &Bitmap::new(&[0, 4]).unwrap()).unwrap(), 0);
        assert_eq!(oled.draw_image(0, 0, &Bitmap::new(&[7, 0]).unwrap()).unwrap(), 7);
        assert!(oled.release().writes.is_empty());
    }

    #[test]
    fn test_malformed_image_reports_error() {
        let data = [4, 1, 4, 0x01];
        let bitmap = Bitmap::new(&data).unwrap();
        let mut oled = surface();
        assert_eq!(
            oled.draw_image(0, 0, &bitmap),
            Err(Error::Resource(monopage_core::ResourceError::Malformed {
                offset: 4
            }))
        );
    }

    #[test]
    fn test_transaction_cursor_and_end_idempotent() {
        let mut oled = surface();
        let mut tx = oled.transaction();
        tx.set_cursor(5, 0).unwrap();
        tx.write_bar(1).unwrap();
        tx.write_bar(2).unwrap();
        assert_eq!(tx.cursor(), (7, 0));
        tx.end().unwrap();
        tx.end().unwrap();
        assert_eq!(tx.bursts_opened(), 1);
        tx.finish().unwrap();

        let bus = oled.release();
        assert_eq!(bus.writes.len(), 2);
    }

    #[test]
    fn test_cursor_jump_opens_new_burst() {
        let mut oled = surface();
        let mut tx = oled.transaction();
        tx.set_cursor(0, 0).unwrap();
        tx.write_bar(1).unwrap();
        tx.set_cursor(0, 1).unwrap();
        tx.write_bar(2).unwrap();
        assert_eq!(tx.bursts_opened(), 2);
        tx.finish().unwrap();
        assert_eq!(oled.release().bursts().len(), 2);
    }

    #[test]
    fn test_display_commands() {
        let mut oled = surface();
        oled.set_contrast(0x7F).unwrap();
        oled.set_display_on(false).unwrap();
        oled.set_inverted(true).unwrap();
        let bus = oled.release();
        assert_eq!(bus.writes[0].1, [0x00, 0x81, 0x7F]);
        assert_eq!(bus.writes[1].1, [0x00, 0xAE]);
        assert_eq!(bus.writes[2].1, [0x00, 0xA7]);
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut oled = PagedSurface::new(RecordingBus::failing_after(1), RenderConfig::default());
        assert_eq!(oled.draw_bar(0, 0, 0xFF), Err(Error::Bus(BusFault)));
    }
}
