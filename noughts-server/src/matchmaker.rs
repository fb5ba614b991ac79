//! Matchmaking queue.

use parking_lot::Mutex;
use std::collections::VecDeque;

/// Process-wide FIFO of connections waiting for an opponent.
///
/// `enqueue` is the only mutation and runs as a single critical section:
/// append, check, and pop happen under one lock acquisition, so handshake
/// tasks racing on simultaneous connects cannot interleave into a
/// connection paired with itself or a skipped pairing. The queue is empty
/// after every pairing step and never holds more than one waiter outside
/// the critical section.
///
/// Generic over the connection type so pairing order is testable without
/// sockets.
pub struct Matchmaker<C> {
    queue: Mutex<VecDeque<C>>,
}

impl<C> Matchmaker<C> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Appends a waiting connection; if that completes a pair, removes and
    /// returns the two oldest entries in arrival order. The first of the
    /// pair takes role X.
    pub fn enqueue(&self, conn: C) -> Option<(C, C)> {
        let mut queue = self.queue.lock();
        queue.push_back(conn);
        if queue.len() < 2 {
            return None;
        }
        queue.pop_front().zip(queue.pop_front())
    }

    /// Returns the number of connections currently waiting.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.queue.lock().len()
    }
}

impl<C> Default for Matchmaker<C> {
    fn default() -> Self {
        Self::new()
    }
}
