//! Bounds-checked access to resource bytes
//!
//! Bitmaps and fonts carry no length field, so a malformed resource would
//! otherwise lead the decoders past the end of the blob. Every byte the
//! decoders touch goes through [`ResourceReader`], which turns that into
//! [`ResourceError::Malformed`].

/// Errors that can occur while decoding a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceError {
    /// The resource ended before the decoder was done with it
    Malformed {
        /// Byte offset of the first missing byte
        offset: usize,
    },
}

/// Forward-only cursor over a resource blob
#[derive(Debug, Clone)]
pub struct ResourceReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ResourceReader<'a> {
    /// Start reading at the beginning of `data`
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read one byte and advance
    pub fn next_byte(&mut self) -> Result<u8, ResourceError> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read one byte without advancing
    pub fn peek(&self) -> Result<u8, ResourceError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(ResourceError::Malformed { offset: self.pos })
    }

    /// Borrow the next `len` bytes and advance past them
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], ResourceError> {
        let end = self.pos + len;
        let data = self.data;
        let slice = data.get(self.pos..end).ok_or(ResourceError::Malformed {
            offset: data.len().max(self.pos),
        })?;
        self.pos = end;
        Ok(slice)
    }

    /// Advance past `len` bytes
    pub fn skip(&mut self, len: usize) -> Result<(), ResourceError> {
        self.take(len).map(|_| ())
    }

    /// Current offset from the start of the resource
    pub fn position(&self) -> usize {
        self.pos
    }
}
