//! Reply handlers.
//!
//! - `HandleEventHandler` - One inbound event to one outbound reply
//! - `HandleBatchHandler` - Whole webhook batch, failure-isolated per event

mod handle_batch;
mod handle_event;

pub use handle_batch::{BatchOutcome, HandleBatchCommand, HandleBatchHandler};
pub use handle_event::{HandleEventCommand, HandleEventHandler, HandleEventResult, ReplyError};
