//! Driver errors

use monopage_core::ResourceError;

/// Errors from drawing operations
///
/// `E` is the error type of the underlying bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus rejected a write
    Bus(E),
    /// A bitmap or font ran out of bytes while being decoded
    Resource(ResourceError),
}

impl<E> From<ResourceError> for Error<E> {
    fn from(e: ResourceError) -> Self {
        Error::Resource(e)
    }
}
