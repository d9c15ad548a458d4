//! Run-length encoded bitmaps
//!
//! Resource layout:
//! - WIDTH (1 byte): horizontal extent in columns
//! - PAGES (1 byte): vertical extent in pages (groups of 8 rows)
//! - RUNS: until `WIDTH * PAGES` bars have been produced, each run is
//!   - `L` in `1..=127` followed by `L` literal bars, or
//!   - `L` in `128..=255` followed by one bar repeated `L - 128` times.
//!
//! Bars come out left to right along a page, then wrap to the next page
//! after `WIDTH` bars.

use crate::reader::{ResourceError, ResourceReader};

/// Length bytes above this value encode a repeat run
const REPEAT_FLAG: u8 = 0x80;

/// A run-length encoded bitmap borrowed from program storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u8,
    pages: u8,
    runs: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Parse the bitmap header
    ///
    /// Only the two header bytes are validated here; run data is checked
    /// lazily while decoding.
    pub fn new(data: &'a [u8]) -> Result<Self, ResourceError> {
        let mut reader = ResourceReader::new(data);
        let width = reader.next_byte()?;
        let pages = reader.next_byte()?;
        Ok(Self {
            width,
            pages,
            runs: &data[reader.position()..],
        })
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pages
    pub fn pages(&self) -> u8 {
        self.pages
    }

    /// Number of bars a well-formed bitmap decodes to
    pub fn bar_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.pages)
    }

    /// Decode the bitmap
    ///
    /// Every call starts again from the first run.
    pub fn bars(&self) -> Bars<'a> {
        Bars {
            reader: ResourceReader::new(self.runs),
            remaining: self.bar_count(),
            run: Run::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Run {
    Idle,
    Literal(u8),
    Repeat { bar: u8, count: u8 },
}

/// Iterator over the decoded bars of a [`Bitmap`]
///
/// Yields exactly `width * pages` bars. A run that would go past that
/// total is cut short. If the run data ends early, one error is yielded and
/// the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Bars<'a> {
    reader: ResourceReader<'a>,
    remaining: usize,
    run: Run,
}

impl<'a> Bars<'a> {
    fn fail(&mut self, err: ResourceError) -> Option<Result<u8, ResourceError>> {
        self.remaining = 0;
        // Offsets are reported relative to the whole resource
        let ResourceError::Malformed { offset } = err;
        Some(Err(ResourceError::Malformed { offset: offset + 2 }))
    }

    fn emit(&mut self, bar: u8) -> Option<Result<u8, ResourceError>> {
        self.remaining -= 1;
        Some(Ok(bar))
    }
}

impl<'a> Iterator for Bars<'a> {
    type Item = Result<u8, ResourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            match self.run {
                Run::Literal(left) if left > 0 => {
                    return match self.reader.next_byte() {
                        Ok(bar) => {
                            self.run = Run::Literal(left - 1);
                            self.emit(bar)
                        }
                        Err(e) => self.fail(e),
                    };
                }
                Run::Repeat { bar, count } if count > 0 => {
                    self.run = Run::Repeat {
                        bar,
                        count: count - 1,
                    };
                    return self.emit(bar);
                }
                _ => {
                    let len = match self.reader.next_byte() {
                        Ok(len) => len,
                        Err(e) => return self.fail(e),
                    };
                    self.run = if len >= REPEAT_FLAG {
                        // The bar byte is consumed even for a count of zero
                        match self.reader.next_byte() {
                            Ok(bar) => Run::Repeat {
                                bar,
                                count: len - REPEAT_FLAG,
                            },
                            Err(e) => return self.fail(e),
                        }
                    } else {
                        Run::Literal(len)
                    };
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    fn decode(data: &[u8]) -> Result<Vec<u8>, ResourceError> {
        Bitmap::new(data)?.bars().collect()
    }

    #[test]
    fn test_literal_run() {
        let data = [3, 1, 3, 0x11, 0x22, 0x33];
        assert_eq!(decode(&data).unwrap(), vec![0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_repeat_run() {
        let data = [4, 1, 0x84, 0xAA];
        assert_eq!(decode(&data).unwrap(), vec![0xAA; 4]);
    }

    #[test]
    fn test_mixed_runs_across_pages() {
        // 3 wide, 2 pages: runs don't need to line up with page boundaries
        let data = [3, 2, 2, 0x01, 0x02, 0x83, 0xFF, 1, 0x09];
        assert_eq!(
            decode(&data).unwrap(),
            vec![0x01, 0x02, 0xFF, 0xFF, 0xFF, 0x09]
        );
    }

    #[test]
    fn test_zero_count_repeat_consumes_bar_byte() {
        // 0x80 is a repeat of nothing; its bar byte (0xEE) must be skipped
        let data = [2, 1, 0x80, 0xEE, 2, 0x01, 0x02];
        assert_eq!(decode(&data).unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn test_zero_length_literal_is_skipped() {
        let data = [1, 1, 0, 1, 0x42];
        assert_eq!(decode(&data).unwrap(), vec![0x42]);
    }

    #[test]
    fn test_empty_dimensions_read_nothing() {
        // No run data at all, yet nothing is read past the header
        assert_eq!(decode(&[0, 5]).unwrap(), Vec::<u8>::new());
        assert_eq!(decode(&[9, 0]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_overshooting_run_is_cut_at_total() {
        let data = [2, 1, 0x85, 0x77];
        assert_eq!(decode(&data).unwrap(), vec![0x77, 0x77]);
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(
            Bitmap::new(&[8]),
            Err(ResourceError::Malformed { offset: 1 })
        );
    }

    #[test]
    fn test_truncated_runs() {
        let data = [4, 1, 4, 0x01, 0x02];
        let bars: Vec<_> = Bitmap::new(&data).unwrap().bars().collect();
        assert_eq!(
            bars,
            vec![Ok(0x01), Ok(0x02), Err(ResourceError::Malformed { offset: 5 })]
        );

        // Repeat run missing its bar byte
        assert_eq!(
            decode(&[4, 1, 0x84]),
            Err(ResourceError::Malformed { offset: 3 })
        );
    }

    #[test]
    fn test_bars_restart() {
        let bitmap = Bitmap::new(assets::IMG_SMILEY).unwrap();
        let first: Vec<_> = bitmap.bars().collect();
        let second: Vec<_> = bitmap.bars().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_builtin_images_are_well_formed() {
        for data in [
            assets::IMG_SMILEY,
            assets::IMG_BOX_TOP,
            assets::IMG_BOX_MID,
            assets::IMG_BOX_BOT,
        ] {
            let bitmap = Bitmap::new(data).unwrap();
            let bars = decode(data).unwrap();
            assert_eq!(bars.len(), bitmap.bar_count());
        }

        let mid = decode(assets::IMG_BOX_MID).unwrap();
        assert_eq!(mid[0], 0xFF);
        assert_eq!(mid[127], 0xFF);
        assert!(mid[1..127].iter().all(|&b| b == 0));
    }
}
