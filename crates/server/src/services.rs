mod conversion;
mod feed;
mod pipeline;

pub use conversion::{ConversionHandle, EnqueueError, spawn_conversion_worker};
pub use feed::{FeedError, FeedService, RSS_FILE_KEY};
pub use pipeline::{ConversionPipeline, PipelineError, SpeechSynthesizer, TextSource};
