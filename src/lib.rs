//! Singly-linked text queue with in-place reversal and stable merge sort
//!
//! The core is [`TextQueue`]: a chain of nodes, each owning a text payload
//! and its successor, with an O(1) tail cursor for back insertion. On top of
//! it, [`QueueEngine`] applies serializable [`QueueOperation`]s and yields
//! [`QueueResponse`]s, turning the queue's boolean-failure contract into
//! typed [`QueueError`]s.
//!
//! The queue is single-threaded by contract: it is not safe for concurrent
//! mutation without external locking, and the types are `!Send`/`!Sync` so
//! misuse does not compile.

pub mod engine;
pub mod error;
pub mod queue;
pub mod types;

pub use engine::QueueEngine;
pub use error::{QueueError, Result};
pub use queue::TextQueue;
pub use types::{QueueOperation, QueueResponse};
