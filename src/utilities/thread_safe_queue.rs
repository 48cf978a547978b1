//! Unbounded multi-producer FIFO with a blocking consumer side.
//!
//! Producers append without ever waiting on capacity. The consumer blocks
//! on an empty queue until an item arrives or the queue is closed. Items
//! are counted from `enqueue` until the consumer calls `task_done`, which
//! lets callers wait with `wait_processed` for everything queued so far.

use crate::error::LoggerError;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Shared state protected by mutex for thread-safe access.
struct QueueState<T> {
    queue: VecDeque<T>,
    /// Total items ever enqueued.
    enqueued: u64,
    /// Total items marked done by the consumer, never above `enqueued`.
    done: u64,
    closed: bool,
}

struct Shared<T> {
    state: Mutex<QueueState<T>>,
    /// Signalled when an item is pushed or the queue closes.
    not_empty: Condvar,
    /// Signalled whenever `done` advances.
    progress: Condvar,
}

/// Thread-safe queue shared between any number of producers and one consumer.
///
/// Cloneable to share across threads - each clone references the same underlying queue.
pub struct ThreadSafeQueue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> ThreadSafeQueue<T> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(QueueState {
                    queue: VecDeque::new(),
                    enqueued: 0,
                    done: 0,
                    closed: false,
                }),
                not_empty: Condvar::new(),
                progress: Condvar::new(),
            }),
        }
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned mutex is still safe to use.
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an item to the tail and wakes the consumer.
    ///
    /// Never blocks on capacity. Fails only once the queue has been closed.
    pub fn enqueue(&self, item: T) -> Result<(), LoggerError> {
        let mut state = self.lock();
        if state.closed {
            return Err(LoggerError::QueueClosed);
        }
        state.queue.push_back(item);
        state.enqueued += 1;
        drop(state);
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Removes the head item, waiting while the queue is empty.
    ///
    /// Returns `None` only when the queue is closed and fully drained.
    pub fn dequeue_blocking(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if let Some(item) = state.queue.pop_front() {
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self
                .shared
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Removes and returns the head item, or None if empty.
    ///
    /// Like `dequeue_blocking`, a returned item counts as outstanding until
    /// the caller marks it with `task_done`; `wait_processed` blocks on it
    /// until then.
    pub fn try_dequeue(&self) -> Option<T> {
        self.lock().queue.pop_front()
    }

    /// Marks one dequeued item as fully processed.
    pub fn task_done(&self) {
        let mut state = self.lock();
        if state.done < state.enqueued {
            state.done += 1;
            drop(state);
            self.shared.progress.notify_all();
        }
    }

    /// Blocks until every item enqueued before this call has been marked done.
    ///
    /// Items enqueued while waiting do not extend the wait, so a busy
    /// producer cannot starve the caller.
    pub fn wait_processed(&self) {
        let mut state = self.lock();
        let target = state.enqueued;
        while state.done < target {
            state = self
                .shared
                .progress
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Rejects further enqueues and wakes a consumer blocked on an empty queue.
    ///
    /// Items already queued stay available to `dequeue_blocking`.
    pub fn close(&self) {
        self.lock().closed = true;
        self.shared.not_empty.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn queue_size(&self) -> usize {
        self.lock().queue.len()
    }
}

impl<T> Default for ThreadSafeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ThreadSafeQueue<T> {
    /// Clones the Arc reference to share the same underlying queue across threads.
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}
