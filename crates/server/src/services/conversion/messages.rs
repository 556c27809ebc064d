use crate::models::ConversionJob;

/// Conversion actor message types
pub(super) enum ConversionMessage {
    /// Run one conversion job
    Convert(ConversionJob),

    /// Stop the actor after draining queued messages
    Shutdown,
}
