mod encoder;
mod orchestrator;
mod output;
mod tracker;
mod types;

pub use encoder::{Encoder, FfmpegEncoder};
pub use orchestrator::{compress_file, Compressor};
pub use output::output_file_name;
pub use tracker::{Generation, RequestTracker};
pub use types::CompressionResult;
