//! Queue operation types
//!
//! This module defines the operations a driver can submit to the engine.

use serde::{Deserialize, Serialize};

/// Operations accepted by the queue engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueOperation {
    /// Insert a value at the head of the queue.
    ///
    /// `value` is optional so a driver can forward an absent value as-is;
    /// the engine rejects it instead of inserting an empty payload.
    InsertHead { value: Option<String> },

    /// Insert a value at the tail of the queue
    InsertTail { value: Option<String> },

    /// Remove the head value through a bounded buffer of `capacity` bytes
    /// (at most `capacity - 1` payload bytes survive, the rest is truncated)
    RemoveHead { capacity: usize },

    /// Remove the head value and return it whole, or discard it
    TakeHead,

    /// Get the number of elements in the queue
    Size,

    /// Reverse the queue in place
    Reverse,

    /// Sort the queue ascending by byte-wise payload comparison
    Sort,
}
