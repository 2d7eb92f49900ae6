//! Word-addressed memory

use std::fmt;

/// Maximum number of words in each memory
pub const NUM_MEMORY: usize = 65536;

/// Fixed-capacity memory of 32-bit words.
/// Every address in `0..NUM_MEMORY` is backed and starts at zero.
#[derive(Clone, PartialEq, Eq)]
pub struct WordMemory {
    words: Box<[i32]>,
}

impl WordMemory {
    /// Builds a memory whose low words hold `image`.
    /// Returns `None` if the image exceeds the capacity.
    pub fn with_image(image: &[i32]) -> Option<Self> {
        if image.len() > NUM_MEMORY {
            return None;
        }
        let mut words = vec![0; NUM_MEMORY].into_boxed_slice();
        words[..image.len()].copy_from_slice(image);
        Some(Self { words })
    }

    fn index(address: i32) -> Option<usize> {
        usize::try_from(address).ok().filter(|&i| i < NUM_MEMORY)
    }

    /// Reads a word; `None` if the address is out of range
    pub fn get(&self, address: i32) -> Option<i32> {
        Self::index(address).map(|i| self.words[i])
    }

    /// Writes a word; `None` if the address is out of range
    pub fn set(&mut self, address: i32, value: i32) -> Option<()> {
        let i = Self::index(address)?;
        self.words[i] = value;
        Some(())
    }

    /// The first `len` words
    pub fn prefix(&self, len: usize) -> &[i32] {
        &self.words[..len.min(NUM_MEMORY)]
    }
}

impl Default for WordMemory {
    fn default() -> Self {
        Self { words: vec![0; NUM_MEMORY].into_boxed_slice() }
    }
}

impl fmt::Debug for WordMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("WordMemory")
            .field("words", &&self.words[..used])
            .finish()
    }
}
