//! Recording I2C bus for tests

use monopage_hal::I2cBus;

/// Error returned once a [`RecordingBus`] runs out of allowed writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// One data burst as the controller would see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burst {
    pub page: u8,
    pub column: u8,
    pub bars: Vec<u8>,
}

/// Mock bus that keeps every write
pub struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    writes_left: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            writes_left: None,
        }
    }

    /// Accept `count` writes, then fail every one after
    pub fn failing_after(count: usize) -> Self {
        Self {
            writes: Vec::new(),
            writes_left: Some(count),
        }
    }

    /// Pair every address command with the data write that follows it
    pub fn bursts(&self) -> Vec<Burst> {
        let mut bursts = Vec::new();
        let mut address = None;
        for (_, bytes) in &self.writes {
            match bytes.as_slice() {
                [0x00, page @ 0xB0..=0xB7, low @ 0x00..=0x0F, high @ 0x10..=0x1F] => {
                    address = Some((page - 0xB0, (low & 0x0F) | ((high & 0x0F) << 4)));
                }
                [0x40, bars @ ..] => {
                    let (page, column) = address.take().expect("data without address");
                    bursts.push(Burst {
                        page,
                        column,
                        bars: bars.to_vec(),
                    });
                }
                _ => {}
            }
        }
        bursts
    }

    /// Replay all bursts into controller RAM, minus the column offset
    pub fn framebuffer(&self, column_offset: u8) -> [[u8; 128]; 8] {
        let mut fb = [[0u8; 128]; 8];
        for burst in self.bursts() {
            let start = usize::from(burst.column - column_offset);
            for (i, &bar) in burst.bars.iter().enumerate() {
                fb[usize::from(burst.page)][start + i] = bar;
            }
        }
        fb
    }

    /// Every bar sent, in order
    pub fn bars(&self) -> Vec<u8> {
        self.bursts().into_iter().flat_map(|b| b.bars).collect()
    }
}

impl I2cBus for RecordingBus {
    type Error = BusFault;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if let Some(left) = self.writes_left.as_mut() {
            if *left == 0 {
                return Err(BusFault);
            }
            *left -= 1;
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }
}
