//! Monopage Demo Firmware
//!
//! Drives a 128x64 SH1106 OLED (STM32F042K6, I2C1 on PB6/PB7) through the
//! paged surface driver: a framed title, an RLE image and a running counter
//! in the large digit font.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use monopage_core::{assets, Bitmap, Font};
use monopage_display::{Error, PagedSurface, RenderConfig, COLUMNS};
use monopage_hal::{HalI2c, I2cBus, I2cConfig};

/// Counter refresh interval
const TICK_MS: u64 = 250;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Monopage demo starting...");

    let p = embassy_stm32::init(Default::default());

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let bus_config = I2cConfig::FAST;
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(bus_config.frequency);
    i2c_config.timeout = Duration::from_millis(100);
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut oled = PagedSurface::new(HalI2c::new(i2c), RenderConfig::sh1106_1in3());

    let small = unwrap!(Font::new(assets::SMALL_FONT));
    let large = unwrap!(Font::new(assets::LARGE_DIGITS_FONT));
    let smiley = unwrap!(Bitmap::new(assets::IMG_SMILEY));

    while let Err(e) = oled.init() {
        error!("Failed to initialize display: {:?}", e);
        Timer::after_secs(1).await;
    }
    info!("OLED initialized");

    if let Err(e) = oled.draw_box("Monopage", &small) {
        warn!("box: {:?}", e);
    }
    Timer::after_secs(2).await;

    if let Err(e) = oled.clear() {
        warn!("clear: {:?}", e);
    }
    if let Err(e) = oled.draw_image(4, 0, &smiley) {
        warn!("image: {:?}", e);
    }
    oled.set_bold(true);
    if let Err(e) = oled.draw_str("Counter", 26, 0, &small) {
        warn!("heading: {:?}", e);
    }
    oled.set_bold(false);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut count: i32 = -20;
    loop {
        if let Err(e) = blank_pages(&mut oled, 3..5) {
            warn!("blank: {:?}", e);
        }

        match oled.draw_int(count, 8, 3, &large) {
            Ok(width) => trace!("drew {=i32} ({=u16} columns)", count, width),
            Err(e) => warn!("draw_int: {:?}", e),
        }

        count = count.wrapping_add(1);
        ticker.next().await;
    }
}

/// Zero every column of `pages`
fn blank_pages<B: I2cBus>(
    oled: &mut PagedSurface<B>,
    pages: core::ops::Range<i16>,
) -> Result<(), Error<B::Error>> {
    let mut tx = oled.transaction();
    for page in pages {
        tx.set_cursor(0, page)?;
        for _ in 0..COLUMNS {
            tx.write_bar(0)?;
        }
    }
    tx.finish()
}
