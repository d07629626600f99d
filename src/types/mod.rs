//! Operation and response types for the queue engine

pub mod operation;
pub mod response;

pub use operation::QueueOperation;
pub use response::QueueResponse;
