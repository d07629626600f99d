//! Queue response types

use serde::{Deserialize, Serialize};

/// Response types for queue operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueResponse {
    /// Successfully inserted
    Inserted,

    /// Removed the head value; holds the (possibly truncated) copy-out
    Removed(String),

    /// Took the head value, or `None` if the queue was empty
    Taken(Option<String>),

    /// Queue size
    Size(usize),

    /// Queue reversed
    Reversed,

    /// Queue sorted
    Sorted,
}
