//! Fixed-capacity FIFO used for pending output bytes/words.
//!
//! Every producer in this crate is capacity-matched to its worst-case burst
//! (one sysex7 flush is 2 words, one USB-MIDI packet is at most 3 bytes), so
//! the buffers never grow and never allocate.

/// Array-backed ring buffer with an explicit length.
///
/// Occupancy is tracked as `len`, never inferred from index equality, so a
/// full buffer and an empty one are always distinguishable.
#[derive(Clone, Copy, Debug)]
pub struct Fifo<T: Copy + Default, const N: usize> {
    items: [T; N],
    head: usize,
    len: usize,
}

impl<T: Copy + Default, const N: usize> Fifo<T, N> {
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Append an item. The caller owns the capacity contract; overflowing is
    /// a bug in the calling state machine, so this traps rather than
    /// overwrite queued output.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        assert!(self.len < N, "fifo overflow (capacity {N})");
        self.items[(self.head + self.len) % N] = item;
        self.len += 1;
    }

    /// Remove and return the oldest item, or `None` when empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.items[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Some(item)
    }

    /// Discard all queued items.
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl<T: Copy + Default, const N: usize> Default for Fifo<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut fifo: Fifo<u8, 4> = Fifo::new();
        assert!(fifo.is_empty());

        fifo.push_back(1);
        fifo.push_back(2);
        fifo.push_back(3);
        assert_eq!(fifo.len(), 3);

        assert_eq!(fifo.pop_front(), Some(1));
        assert_eq!(fifo.pop_front(), Some(2));
        assert_eq!(fifo.pop_front(), Some(3));
        assert_eq!(fifo.pop_front(), None);
        assert!(fifo.is_empty());
    }

    #[test]
    fn test_wraparound_preserves_order() {
        let mut fifo: Fifo<u32, 4> = Fifo::new();

        // Cycle through the array several times so head wraps.
        for round in 0..5u32 {
            fifo.push_back(round * 2);
            fifo.push_back(round * 2 + 1);
            assert_eq!(fifo.pop_front(), Some(round * 2));
            assert_eq!(fifo.pop_front(), Some(round * 2 + 1));
        }
        assert!(fifo.is_empty());
    }

    #[test]
    fn test_full_then_drain() {
        let mut fifo: Fifo<u8, 4> = Fifo::new();
        for i in 0..4 {
            fifo.push_back(i);
        }
        assert_eq!(fifo.len(), 4);
        for i in 0..4 {
            assert_eq!(fifo.pop_front(), Some(i));
        }
        assert_eq!(fifo.pop_front(), None);
    }

    #[test]
    #[should_panic(expected = "fifo overflow")]
    fn test_overflow_panics() {
        let mut fifo: Fifo<u8, 2> = Fifo::new();
        fifo.push_back(0);
        fifo.push_back(1);
        fifo.push_back(2);
    }

    #[test]
    fn test_clear() {
        let mut fifo: Fifo<u8, 4> = Fifo::new();
        fifo.push_back(9);
        fifo.push_back(8);
        fifo.clear();
        assert!(fifo.is_empty());
        assert_eq!(fifo.pop_front(), None);

        // Usable again after clear.
        fifo.push_back(7);
        assert_eq!(fifo.pop_front(), Some(7));
    }
}
