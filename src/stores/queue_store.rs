//! Queue store - bounded in-memory FIFO of track ids

use parking_lot::Mutex;
use std::collections::VecDeque;

use super::PlaybackQueue;
use crate::error::QueueError;

/// Stores the track id queue in memory
#[derive(Debug)]
pub struct ListQueue {
    queue: Mutex<VecDeque<String>>,
    max_size: usize,
}

impl ListQueue {
    pub fn new(max_size: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            max_size,
        }
    }

    /// Maximum number of track ids the queue will hold
    pub fn capacity(&self) -> usize {
        self.max_size
    }
}

impl PlaybackQueue for ListQueue {
    fn enqueue(&self, track_id: &str) -> Result<(), QueueError> {
        let mut queue = self.queue.lock();
        if queue.len() >= self.max_size {
            return Err(QueueError::Full(self.max_size));
        }
        queue.push_back(track_id.to_string());
        Ok(())
    }

    fn dequeue(&self) -> Result<String, QueueError> {
        self.queue.lock().pop_front().ok_or(QueueError::Empty)
    }

    fn peek(&self) -> Result<String, QueueError> {
        self.queue.lock().front().cloned().ok_or(QueueError::Empty)
    }

    fn len(&self) -> usize {
        self.queue.lock().len()
    }

    fn snapshot(&self) -> Vec<String> {
        self.queue.lock().iter().cloned().collect()
    }
}
