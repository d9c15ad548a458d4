//! I2C bus abstractions
//!
//! Provides the write-only I2C master interface used by the display drivers.
//! Every call to [`I2cBus::write`] is one bus transaction: START, address,
//! the given bytes, STOP.

/// I2C bus master
///
/// Display controllers on I2C are write-only in practice, so a single
/// burst write is all the drivers need.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// Adapter for any blocking `embedded-hal` 1.0 I2C master
///
/// ```rust, ignore
/// let i2c = embassy_stm32::i2c::I2c::new_blocking(p.I2C1, p.PB6, p.PB7, config);
/// let bus = HalI2c::new(i2c);
/// ```
#[derive(Debug)]
pub struct HalI2c<T> {
    inner: T,
}

impl<T> HalI2c<T> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Give back the wrapped I2C master
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: embedded_hal::i2c::I2c> I2cBus for HalI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 400_000, // SH1106 is rated for fast mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
