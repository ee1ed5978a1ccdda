//! Z-order bookkeeping for floating windows.
//!
//! Every focus request takes the next value of a session-wide counter, so the
//! most recently touched window always has the largest index. Values are never
//! reused or compacted; only relative order matters.

use std::collections::BTreeMap;
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct ZOrder<K: Copy + Ord + Debug> {
    counter: u64,
    entries: BTreeMap<K, u64>,
}

impl<K: Copy + Ord + Debug> ZOrder<K> {
    pub fn new(base: u64) -> Self {
        Self {
            counter: base,
            entries: BTreeMap::new(),
        }
    }

    /// Raise `id` above everything assigned so far and return its new index.
    pub fn request_focus(&mut self, id: K) -> u64 {
        self.counter = self.counter.saturating_add(1);
        self.entries.insert(id, self.counter);
        tracing::debug!(window = ?id, z = self.counter, "focus");
        self.counter
    }

    pub fn z_index(&self, id: K) -> Option<u64> {
        self.entries.get(&id).copied()
    }

    /// Last value handed out.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn remove(&mut self, id: K) -> Option<u64> {
        self.entries.remove(&id)
    }

    pub fn topmost(&self) -> Option<K> {
        self.entries
            .iter()
            .max_by_key(|(_, z)| **z)
            .map(|(id, _)| *id)
    }

    /// Ids sorted bottom to top, the order in which windows are painted.
    pub fn draw_order(&self) -> Vec<K> {
        let mut order: Vec<(K, u64)> = self.entries.iter().map(|(k, z)| (*k, *z)).collect();
        order.sort_by_key(|(_, z)| *z);
        order.into_iter().map(|(k, _)| k).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_request_exceeds_all_previous() {
        let mut z = ZOrder::new(60);
        let mut last = 0;
        for id in ["a", "b", "a", "c", "a", "a", "b"] {
            let next = z.request_focus(id);
            assert!(next > last);
            last = next;
        }
        assert_eq!(z.topmost(), Some("b"));
    }

    #[test]
    fn later_focus_wins_regardless_of_open_order() {
        let mut z = ZOrder::new(60);
        z.request_focus("about");
        z.request_focus("project1");
        assert!(z.z_index("project1") > z.z_index("about"));
        z.request_focus("about");
        assert!(z.z_index("about") > z.z_index("project1"));
        assert_eq!(z.draw_order(), vec!["project1", "about"]);
    }

    #[test]
    fn reopened_window_gets_a_fresh_higher_index() {
        let mut z = ZOrder::new(0);
        let first = z.request_focus(1u8);
        z.request_focus(2u8);
        z.remove(1u8);
        assert_eq!(z.z_index(1u8), None);
        let again = z.request_focus(1u8);
        assert!(again > first);
        assert_eq!(z.topmost(), Some(1u8));
    }
}
