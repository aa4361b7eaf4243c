//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod reply;

pub use reply::{
    BatchOutcome, HandleBatchCommand, HandleBatchHandler, HandleEventCommand, HandleEventHandler,
    HandleEventResult, ReplyError,
};
