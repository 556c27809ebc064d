mod handle;
mod messages;
mod runner;

pub use self::handle::{ConversionHandle, EnqueueError};

use tokio::sync::mpsc;

use self::runner::ConversionActor;
use super::pipeline::ConversionPipeline;

/// Bound on queued conversions; enqueue fails once it is reached
const QUEUE_CAPACITY: usize = 64;

/// Spawn the conversion worker and return a handle for enqueueing jobs.
///
/// A single worker processes jobs in order, which also serializes feed
/// updates: two conversions can never race on the shared feed document.
pub fn spawn_conversion_worker(pipeline: ConversionPipeline) -> ConversionHandle {
    let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
    tokio::spawn(ConversionActor::new(pipeline, receiver).run());
    ConversionHandle::new(sender)
}
