use tokio::sync::mpsc;

use super::messages::ConversionMessage;
use crate::models::ConversionJob;

/// Error returned when a job cannot be queued
#[derive(Debug, thiserror::Error)]
pub enum EnqueueError {
    #[error("conversion queue is full")]
    QueueFull,

    #[error("conversion worker is not running")]
    WorkerStopped,
}

/// Client handle for the conversion worker.
///
/// Jobs are queued without awaiting completion; the HTTP response never
/// blocks on pipeline execution.
#[derive(Clone)]
pub struct ConversionHandle {
    sender: mpsc::Sender<ConversionMessage>,
}

impl ConversionHandle {
    pub(super) fn new(sender: mpsc::Sender<ConversionMessage>) -> Self {
        Self { sender }
    }

    /// Queue a job for background conversion.
    pub fn enqueue(&self, job: ConversionJob) -> Result<(), EnqueueError> {
        self.sender
            .try_send(ConversionMessage::Convert(job))
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => EnqueueError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => EnqueueError::WorkerStopped,
            })
    }

    /// Signal the worker to stop.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(ConversionMessage::Shutdown).await;
    }
}
