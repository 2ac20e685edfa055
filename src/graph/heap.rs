use std::cmp::Ordering;

/// Binary min-heap over item ids `0..capacity` with decrease-key.
///
/// `position` maps every item to its slot in `heap`, so membership tests are
/// O(1) and priority updates are O(log n). Equal priorities pop in ascending
/// item order.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    priority: Vec<f64>,
}

impl IndexedMinHeap {
    /// Creates an empty heap for item ids below `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            priority: vec![f64::INFINITY; capacity],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `item` is currently queued.
    #[must_use]
    pub fn contains(&self, item: usize) -> bool {
        self.position.get(item).is_some_and(Option::is_some)
    }

    /// Queues `item`, or updates its priority if it is already queued.
    pub fn push(&mut self, item: usize, priority: f64) {
        if item >= self.position.len() {
            self.position.resize(item + 1, None);
            self.priority.resize(item + 1, f64::INFINITY);
        }

        if let Some(slot) = self.position[item] {
            let old = self.priority[item];
            self.priority[item] = priority;
            if priority < old {
                self.sift_up(slot);
            } else {
                self.sift_down(slot);
            }
            return;
        }

        self.priority[item] = priority;
        let slot = self.heap.len();
        self.heap.push(item);
        self.position[item] = Some(slot);
        self.sift_up(slot);
    }

    /// Lowers the priority of a queued item.
    ///
    /// Returns `false` if the item is not queued or `priority` is not lower
    /// than its current priority.
    pub fn decrease_priority(&mut self, item: usize, priority: f64) -> bool {
        let Some(slot) = self.position.get(item).copied().flatten() else {
            return false;
        };
        if priority >= self.priority[item] {
            return false;
        }
        self.priority[item] = priority;
        self.sift_up(slot);
        true
    }

    /// Removes and returns the item with the lowest priority.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.position[item] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, self.priority[item]))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (ia, ib) = (self.heap[a], self.heap[b]);
        match self.priority[ia].total_cmp(&self.priority[ib]) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => ia < ib,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut heap = IndexedMinHeap::with_capacity(5);
        for (item, p) in [(0, 4.0), (1, 1.0), (2, 3.0), (3, 0.5), (4, 2.0)] {
            heap.push(item, p);
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![3, 1, 4, 2, 0]);
        assert!(heap.is_empty());
    }

    #[test]
    fn decrease_priority_moves_item_forward() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.push(0, 1.0);
        heap.push(1, 2.0);
        heap.push(2, f64::INFINITY);
        assert!(heap.decrease_priority(2, 0.5));
        assert_eq!(heap.pop(), Some((2, 0.5)));
        assert!(!heap.decrease_priority(2, 0.1), "popped item is not queued");
        assert!(!heap.decrease_priority(1, 3.0), "not a decrease");
    }

    #[test]
    fn ties_pop_lowest_item_first() {
        let mut heap = IndexedMinHeap::with_capacity(4);
        for item in [3, 1, 2, 0] {
            heap.push(item, f64::INFINITY);
        }
        assert_eq!(heap.pop().map(|(i, _)| i), Some(0));
        assert_eq!(heap.pop().map(|(i, _)| i), Some(1));
    }

    #[test]
    fn contains_tracks_membership() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        assert!(!heap.contains(0));
        heap.push(0, 1.0);
        assert!(heap.contains(0));
        assert!(!heap.contains(7));
        heap.pop();
        assert!(!heap.contains(0));
        assert!(heap.is_empty());
    }

    #[test]
    fn push_existing_item_updates_priority() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.push(0, 1.0);
        heap.push(1, 2.0);
        heap.push(0, 5.0);
        assert_eq!(heap.pop(), Some((1, 2.0)));
        assert_eq!(heap.pop(), Some((0, 5.0)));
    }
}
