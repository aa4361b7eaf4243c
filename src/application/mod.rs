//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    BatchOutcome, HandleBatchCommand, HandleBatchHandler, HandleEventCommand, HandleEventHandler,
    HandleEventResult, ReplyError,
};
