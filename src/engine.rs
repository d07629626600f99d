//! Queue engine: applies driver operations to a queue
//!
//! The engine is the boundary where the boolean-failure contract of the
//! queue lives as typed errors: absent insert values, empty-queue removal
//! and zero-capacity buffers come back as `Err` arms instead of panics.
//! Operations that cannot fail report their outcome unconditionally.

use crate::error::{QueueError, Result};
use crate::queue::TextQueue;
use crate::types::{QueueOperation, QueueResponse};

/// Applies [`QueueOperation`]s to an owned [`TextQueue`] and yields
/// [`QueueResponse`]s.
pub struct QueueEngine {
    queue: TextQueue,
}

impl QueueEngine {
    /// Create an engine over a fresh empty queue
    pub fn new() -> Self {
        QueueEngine {
            queue: TextQueue::new(),
        }
    }

    /// Read-only access to the underlying queue
    pub fn queue(&self) -> &TextQueue {
        &self.queue
    }

    /// Apply a single operation
    pub fn apply(&mut self, operation: QueueOperation) -> Result<QueueResponse> {
        match operation {
            QueueOperation::InsertHead { value } => {
                let value = value.ok_or(QueueError::MissingValue)?;
                self.queue.insert_head(&value);
                tracing::debug!(size = self.queue.len(), "inserted at head");
                Ok(QueueResponse::Inserted)
            }

            QueueOperation::InsertTail { value } => {
                let value = value.ok_or(QueueError::MissingValue)?;
                self.queue.insert_tail(&value);
                tracing::debug!(size = self.queue.len(), "inserted at tail");
                Ok(QueueResponse::Inserted)
            }

            QueueOperation::RemoveHead { capacity } => {
                if capacity == 0 {
                    return Err(QueueError::ZeroCapacity);
                }
                let mut buf = vec![0u8; capacity];
                if !self.queue.remove_head(&mut buf) {
                    return Err(QueueError::Empty);
                }
                // remove_head always NUL-terminates within capacity
                let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
                let text = String::from_utf8_lossy(&buf[..end]).into_owned();
                tracing::debug!(size = self.queue.len(), "removed head");
                Ok(QueueResponse::Removed(text))
            }

            QueueOperation::TakeHead => {
                let taken = self.queue.take_head();
                tracing::debug!(size = self.queue.len(), took = taken.is_some(), "took head");
                Ok(QueueResponse::Taken(taken))
            }

            QueueOperation::Size => Ok(QueueResponse::Size(self.queue.len())),

            QueueOperation::Reverse => {
                self.queue.reverse();
                tracing::debug!(size = self.queue.len(), "reversed");
                Ok(QueueResponse::Reversed)
            }

            QueueOperation::Sort => {
                self.queue.sort();
                tracing::debug!(size = self.queue.len(), "sorted");
                Ok(QueueResponse::Sorted)
            }
        }
    }
}

impl Default for QueueEngine {
    fn default() -> Self {
        QueueEngine::new()
    }
}
