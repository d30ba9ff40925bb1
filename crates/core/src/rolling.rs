//! Bounded rolling window used by stateful signals.

use std::collections::VecDeque;

/// Fixed-capacity FIFO window.
///
/// Storage is allocated once at construction. Pushing into a full window evicts
/// the oldest entry, so `len() <= capacity()` holds for any number of pushes.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Creates an empty window holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, returning the evicted one if the window was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Most recently pushed entry.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// Iterates over the `n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &T> {
        self.items.iter().skip(self.items.len().saturating_sub(n))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Copy + Into<f64>> RollingWindow<T> {
    /// Mean of the `n` most recent entries.
    ///
    /// Returns None when the window holds fewer than `n` entries or `n` is zero.
    #[must_use]
    pub fn mean_of_last(&self, n: usize) -> Option<f64> {
        if n == 0 || n > self.items.len() {
            return None;
        }
        let sum: f64 = self.recent(n).map(|&v| v.into()).sum();
        Some(sum / n as f64)
    }

    /// Mean of every entry in the window.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        self.mean_of_last(self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut window = RollingWindow::new(3);
        assert_eq!(window.push(1.0), None);
        assert_eq!(window.push(2.0), None);
        assert_eq!(window.push(3.0), None);
        assert!(window.is_full());

        assert_eq!(window.push(4.0), Some(1.0));
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        assert_eq!(window.latest(), Some(&4.0));
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut window = RollingWindow::new(20);
        for i in 0..10_000 {
            window.push(f64::from(i));
            assert!(window.len() <= window.capacity());
        }
        assert_eq!(window.len(), 20);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut window = RollingWindow::new(0);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.latest(), Some(&2.0));
    }

    #[test]
    fn mean_of_last_uses_most_recent_entries() {
        let mut window = RollingWindow::new(4);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.push(v);
        }
        // window = [2, 3, 4, 5]
        assert_eq!(window.mean_of_last(2), Some(4.5));
        assert_eq!(window.mean(), Some(3.5));
    }

    #[test]
    fn mean_of_last_none_when_short() {
        let mut window = RollingWindow::new(4);
        window.push(1.0);
        assert!(window.mean_of_last(2).is_none());
        assert!(window.mean_of_last(0).is_none());

        let empty: RollingWindow<f64> = RollingWindow::new(2);
        assert!(empty.mean().is_none());
    }

    #[test]
    fn clear_empties_window() {
        let mut window = RollingWindow::new(2);
        window.push(1.0);
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 2);
    }
}
