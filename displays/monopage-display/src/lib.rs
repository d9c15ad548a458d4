//! Paged display driver and text compositor
//!
//! This crate turns decoded bitmaps and glyphs into I2C traffic for
//! SH1106-class 128x64 OLED controllers:
//!
//! - [`PagedSurface`] owns the bus and the render configuration
//! - [`Transaction`] batches bar writes into address-prefixed bursts
//! - Text, integers and framed panels are composed on top of both
//!
//! # Addressing
//!
//! The controller RAM is 8 pages of 128 columns. Each byte (a *bar*) is
//! 8 vertically stacked pixels, bit 0 on top. Writes outside the visible
//! area are dropped, never wrapped.
//!
//! ```rust, ignore
//! use monopage_core::{assets, Bitmap, Font};
//! use monopage_display::{PagedSurface, RenderConfig};
//!
//! let mut oled = PagedSurface::new(bus, RenderConfig::default());
//! oled.init()?;
//! oled.draw_image(20, 1, &Bitmap::new(assets::IMG_SMILEY)?)?;
//! let font = Font::new(assets::SMALL_FONT)?;
//! oled.draw_str("Hello", 0, 4, &font)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod cmd;
pub mod config;
pub mod error;
pub mod surface;
pub mod text;

#[cfg(test)]
mod mock;

pub use config::RenderConfig;
pub use error::Error;
pub use surface::{PagedSurface, Transaction, COLUMNS, PAGES};
pub use text::Panel;
