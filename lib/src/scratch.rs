// lib/src/scratch.rs

use std::collections::VecDeque;

/// Scratch storage used by the traversal engines: one container, three
/// disciplines. `push`/`pop` work the same end (stack), `enqueue` and
/// `dequeue` work opposite ends (FIFO), and `add`/`remove`/`contains`
/// give set semantics with linear-scan membership.
#[derive(Clone, Debug)]
pub struct Scratch<T> {
    items: VecDeque<T>,
}

impl<T> Default for Scratch<T> {
    fn default() -> Self {
        Scratch {
            items: VecDeque::new(),
        }
    }
}

impl<T: PartialEq> Scratch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stack push.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Stack pop, from the same end as `push`.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// FIFO enqueue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// FIFO dequeue, from the opposite end to `enqueue`.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Set-style add; a no-op if the item is already present.
    pub fn add(&mut self, item: T) {
        if !self.contains(&item) {
            self.items.push_back(item);
        }
    }

    /// Set-style remove; returns whether the item was present.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|other| other == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Linear-scan membership test.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

#[cfg(test)]
mod tests {
    use super::Scratch;

    #[test]
    fn stack_discipline_is_lifo() {
        let mut scratch = Scratch::new();
        scratch.push(1);
        scratch.push(2);
        scratch.push(3);
        assert_eq!(scratch.pop(), Some(3));
        assert_eq!(scratch.pop(), Some(2));
        assert_eq!(scratch.pop(), Some(1));
        assert_eq!(scratch.pop(), None);
    }

    #[test]
    fn queue_discipline_is_fifo() {
        let mut scratch = Scratch::new();
        scratch.enqueue("a");
        scratch.enqueue("b");
        assert_eq!(scratch.dequeue(), Some("a"));
        assert_eq!(scratch.dequeue(), Some("b"));
        assert!(scratch.is_empty());
    }

    #[test]
    fn set_discipline_deduplicates() {
        let mut scratch = Scratch::new();
        scratch.add(7);
        scratch.add(7);
        assert_eq!(scratch.len(), 1);
        assert!(scratch.contains(&7));
        assert!(scratch.remove(&7));
        assert!(!scratch.remove(&7));
        assert!(!scratch.contains(&7));
    }
}
