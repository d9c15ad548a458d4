//! Board-agnostic decoding of display resources
//!
//! This crate contains everything that turns the compact binary resources
//! linked into the firmware into columns of pixels, without touching a bus:
//!
//! - Bounds-checked resource reader
//! - Run-length encoded bitmaps ([`image::Bitmap`])
//! - Variable-width bitmap fonts ([`font::Font`])
//! - Built-in fonts and images ([`assets`])
//!
//! All pixel data is organised in *bars*: one byte holding 8 vertically
//! stacked pixels, bit 0 on top. A *page* is one row of bars.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod assets;
pub mod font;
pub mod image;
pub mod reader;

pub use font::{Font, Glyph};
pub use image::Bitmap;
pub use reader::{ResourceError, ResourceReader};
