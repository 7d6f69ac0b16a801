//! Two-level operation queue.
//!
//! The primary deque holds pending operations in execution order. While a
//! completion callback runs, the queue is *interrupted*: anything the
//! callback submits is collected in a separate buffer and, when the callback
//! returns, spliced in front of the primary deque. A callback's follow-up
//! work therefore runs before operations that were queued earlier
//! (depth-first drain order), while keeping its own submissions FIFO.

use std::collections::VecDeque;

/// FIFO of pending operations with an interrupt buffer.
#[derive(Debug)]
pub struct OperationQueue<T> {
    primary: VecDeque<T>,
    interrupt: VecDeque<T>,
    /// Nesting depth of `begin_interrupt` calls.
    interrupt_depth: usize,
}

impl<T> Default for OperationQueue<T> {
    fn default() -> Self {
        Self {
            primary: VecDeque::new(),
            interrupt: VecDeque::new(),
            interrupt_depth: 0,
        }
    }
}

impl<T> OperationQueue<T> {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations waiting in the primary deque.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Whether nothing waits in the primary deque.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Whether a callback is currently collecting submissions.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt_depth > 0
    }

    /// Queue `op` behind everything else, or into the interrupt buffer while
    /// a callback runs.
    pub fn push(&mut self, op: T) {
        if self.is_interrupted() {
            self.interrupt.push_back(op);
        } else {
            self.primary.push_back(op);
        }
    }

    /// Put `op` at the very front of the primary deque.
    pub fn push_front(&mut self, op: T) {
        self.primary.push_front(op);
    }

    /// Place `ops` in front of the primary deque, keeping their order.
    pub fn splice_front<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        for op in ops.into_iter().rev() {
            self.primary.push_front(op);
        }
    }

    /// Take the next operation to execute.
    pub fn pop(&mut self) -> Option<T> {
        self.primary.pop_front()
    }

    /// Start collecting submissions from a callback.
    pub fn begin_interrupt(&mut self) {
        self.interrupt_depth += 1;
    }

    /// Stop collecting; when the outermost interrupt ends the collected
    /// operations move in front of the primary deque.
    pub fn end_interrupt(&mut self) {
        debug_assert!(self.interrupt_depth > 0, "unbalanced end_interrupt");
        self.interrupt_depth = self.interrupt_depth.saturating_sub(1);
        if self.interrupt_depth == 0 && !self.interrupt.is_empty() {
            let collected = std::mem::take(&mut self.interrupt);
            self.splice_front(collected);
        }
    }

    /// Drop every pending operation, including collected ones.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.interrupt.clear();
    }
}
