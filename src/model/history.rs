//! Bounded sliding window of past readings.

use std::collections::VecDeque;

/// Up to `max_len` copies of a reading, oldest first.
///
/// Live readings are never aliased: `push` stores a copy.
#[derive(Debug, Clone, Default)]
pub struct ResourceHistory<R> {
    entries: VecDeque<R>,
}

impl<R: Clone + Default> ResourceHistory<R> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, where 0 is the oldest.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.entries.get(index)
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.entries.iter()
    }

    /// Resizes to exactly `len` entries.
    ///
    /// Growing pads the front with default readings; shrinking drops the
    /// oldest entries. The newest entry stays last either way.
    pub fn pack(&mut self, len: usize) {
        let current = self.entries.len();
        if len < current {
            self.entries.drain(..current - len);
        } else {
            for _ in current..len {
                self.entries.push_front(R::default());
            }
        }
    }

    /// Appends a copy of `reading`, then evicts from the front until at most
    /// `max_len` entries remain.
    pub fn push(&mut self, reading: &R, max_len: usize) {
        self.entries.push_back(reading.clone());
        while self.entries.len() > max_len {
            self.entries.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CpuReading;

    fn values(history: &ResourceHistory<u32>) -> Vec<u32> {
        history.iter().copied().collect()
    }

    #[test]
    fn test_pack_grows_at_front() {
        let mut history = ResourceHistory::new();
        history.push(&7u32, 10);
        history.push(&8u32, 10);
        history.pack(5);
        assert_eq!(values(&history), vec![0, 0, 0, 7, 8]);
    }

    #[test]
    fn test_pack_shrinks_oldest() {
        let mut history = ResourceHistory::new();
        for v in 1..=6u32 {
            history.push(&v, 10);
        }
        history.pack(3);
        assert_eq!(values(&history), vec![4, 5, 6]);
        assert_eq!(history.get(0), Some(&4));
    }

    #[test]
    fn test_pack_is_idempotent() {
        let mut history = ResourceHistory::new();
        history.push(&1u32, 10);
        history.pack(4);
        let once = values(&history);
        history.pack(4);
        assert_eq!(values(&history), once);
        assert_eq!(history.len(), 4);

        history.pack(0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_push_bounded_fifo() {
        let mut history = ResourceHistory::new();
        for v in 0..100u32 {
            history.push(&v, 8);
            assert!(history.len() <= 8);
        }
        assert_eq!(values(&history), (92..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_push_with_smaller_max_len_evicts() {
        let mut history = ResourceHistory::new();
        for v in 0..5u32 {
            history.push(&v, 5);
        }
        history.push(&5u32, 2);
        assert_eq!(values(&history), vec![4, 5]);
    }

    #[test]
    fn test_push_copies_reading() {
        let mut live = CpuReading::new(10.0, 5.0, 85.0);
        let mut history = ResourceHistory::new();
        history.push(&live, 4);
        live.update(90.0, 5.0, 5.0);
        assert_eq!(history.get(0).unwrap().used().to_string(), "15%");
    }
}
