//! Monopage Hardware Abstraction Layer
//!
//! This crate defines the bus transport the display drivers talk to.
//! Chip-specific code only has to provide an I2C master; anything that
//! already implements `embedded_hal::i2c::I2c` can be plugged in through
//! [`i2c::HalI2c`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  monopage-display (surface, compositor) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monopage-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal I2C (embassy, rp-hal...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C write bursts

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key traits at crate root for convenience
pub use i2c::{HalI2c, I2cBus, I2cConfig};
