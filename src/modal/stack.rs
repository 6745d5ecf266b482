//! Priority Stack
//!
//! Ordered collection of pending requests. Entries are kept in ascending
//! priority order, so the visible request is always the last one.
//!
//! # Ordering Rules
//!
//! - Adjacent entries never decrease in priority.
//! - Equal priorities keep insertion order: a new request lands after every
//!   entry with priority <= its own and before the first strictly greater one.
//! - At most one entry per id. Presenting an existing id replaces it and
//!   moves it to the end of its own priority run.
//!
//! The backing store is a plain `Vec` with linear search and splice. Stacks
//! rarely hold more than a handful of requests, so nothing smarter is needed.

use super::request::Request;

#[derive(Debug, Clone, Default)]
pub struct PriorityStack {
    entries: Vec<Request>,
}

impl PriorityStack {
    /// Creates an empty stack
    pub fn new() -> Self {
        PriorityStack { entries: Vec::new() }
    }

    /// Insert or replace a request
    pub fn present(&mut self, request: Request) {
        // Walk backwards so removals don't shift the indices still to visit
        for index in (0..self.entries.len()).rev() {
            if self.entries[index].id == request.id {
                self.entries.remove(index);
            }
        }

        let position = self
            .entries
            .iter()
            .position(|entry| entry.priority > request.priority)
            .unwrap_or(self.entries.len());

        self.entries.insert(position, request);
    }

    /// Remove the request with the given id, if present
    pub fn dismiss(&mut self, id: &str) -> Option<Request> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Remove every request with priority strictly below `threshold`
    ///
    /// Returns how many requests were removed.
    pub fn clear_below(&mut self, threshold: i32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.priority >= threshold);
        before - self.entries.len()
    }

    /// The visible request (highest priority, latest among equals)
    pub fn top(&self) -> Option<&Request> {
        self.entries.last()
    }

    pub fn is_blocking_input(&self) -> bool {
        self.top().is_some_and(|request| request.block_input)
    }

    pub fn get(&self, id: &str) -> Option<&Request> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate from lowest priority to the top
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::priority::{CRITICAL, HIGH, LOW, MEDIUM};
    use crate::modal::request::ModalAction;

    fn request(id: &str, priority: i32) -> Request {
        Request::native(id, priority, id, vec![ModalAction::new("ok", "OK")])
    }

    fn ids(stack: &PriorityStack) -> Vec<&str> {
        stack.iter().map(|r| r.id.as_str()).collect()
    }

    fn assert_invariants(stack: &PriorityStack) {
        let entries: Vec<&Request> = stack.iter().collect();
        for pair in entries.windows(2) {
            assert!(
                pair[0].priority <= pair[1].priority,
                "{} ({}) sits before {} ({})",
                pair[0].id,
                pair[0].priority,
                pair[1].id,
                pair[1].priority
            );
        }

        let mut seen: Vec<&str> = entries.iter().map(|r| r.id.as_str()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), entries.len(), "duplicate id in stack");
    }

    #[test]
    fn test_empty_stack() {
        let stack = PriorityStack::new();
        assert!(stack.is_empty());
        assert!(stack.top().is_none());
        assert!(!stack.is_blocking_input());
    }

    #[test]
    fn test_present_orders_by_priority() {
        let mut stack = PriorityStack::new();
        stack.present(request("high", HIGH));
        stack.present(request("low", LOW));
        stack.present(request("critical", CRITICAL));
        stack.present(request("medium", MEDIUM));

        assert_eq!(ids(&stack), vec!["low", "medium", "high", "critical"]);
        assert_eq!(stack.top().map(|r| r.id.as_str()), Some("critical"));
    }

    #[test]
    fn test_equal_priority_is_fifo() {
        let mut stack = PriorityStack::new();
        stack.present(request("X", 50));
        stack.present(request("Y", 50));

        assert_eq!(ids(&stack), vec!["X", "Y"]);
        assert_eq!(stack.top().map(|r| r.id.as_str()), Some("Y"));
    }

    #[test]
    fn test_upsert_replaces_entry() {
        let mut stack = PriorityStack::new();
        stack.present(request("A", 10));
        stack.present(request("B", 50));
        stack.present(request("A", 90));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.get("A").map(|r| r.priority), Some(90));
        assert_eq!(stack.top().map(|r| r.id.as_str()), Some("A"));
    }

    #[test]
    fn test_re_present_moves_to_end_of_priority_run() {
        let mut stack = PriorityStack::new();
        stack.present(request("X", 50));
        stack.present(request("Y", 50));
        stack.present(request("Z", 90));
        stack.present(request("X", 50));

        assert_eq!(ids(&stack), vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_dismiss_removes_entry() {
        let mut stack = PriorityStack::new();
        stack.present(request("A", 10));
        stack.present(request("B", 50));

        let removed = stack.dismiss("B");
        assert_eq!(removed.map(|r| r.id), Some("B".to_string()));
        assert_eq!(ids(&stack), vec!["A"]);
    }

    #[test]
    fn test_dismiss_missing_id_is_noop() {
        let mut stack = PriorityStack::new();
        stack.present(request("A", 10));

        assert!(stack.dismiss("does-not-exist").is_none());
        assert_eq!(ids(&stack), vec!["A"]);
    }

    #[test]
    fn test_clear_below() {
        let mut stack = PriorityStack::new();
        stack.present(request("A", 10));
        stack.present(request("B", 50));

        assert_eq!(stack.clear_below(50), 1);
        assert_eq!(ids(&stack), vec!["B"]);
    }

    #[test]
    fn test_clear_below_keeps_survivor_order() {
        let mut stack = PriorityStack::new();
        stack.present(request("a", 10));
        stack.present(request("b", 50));
        stack.present(request("c", 50));
        stack.present(request("d", 100));

        assert_eq!(stack.clear_below(20), 1);
        assert_eq!(ids(&stack), vec!["b", "c", "d"]);

        // Threshold under everything removes nothing
        assert_eq!(stack.clear_below(0), 0);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_blocking_follows_top() {
        let mut stack = PriorityStack::new();
        stack.present(request("blocking", 10));
        assert!(stack.is_blocking_input());

        stack.present(request("passive", 50).with_block_input(false));
        assert!(!stack.is_blocking_input());

        stack.dismiss("passive");
        assert!(stack.is_blocking_input());
    }

    #[test]
    fn test_invariants_hold_under_mixed_operations() {
        // Small LCG keeps the sequence deterministic
        let mut seed: u32 = 0x2545_f491;
        let mut next = move || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as usize
        };

        let ids = ["a", "b", "c", "d", "e", "f"];
        let priorities = [LOW, MEDIUM, HIGH, CRITICAL, 0, -5, 50];
        let mut stack = PriorityStack::new();

        for _ in 0..500 {
            match next() % 4 {
                0 | 1 => {
                    let id = ids[next() % ids.len()];
                    let priority = priorities[next() % priorities.len()];
                    stack.present(request(id, priority));
                }
                2 => {
                    stack.dismiss(ids[next() % ids.len()]);
                }
                _ => {
                    stack.clear_below(priorities[next() % priorities.len()]);
                }
            }
            assert_invariants(&stack);
        }
    }
}
