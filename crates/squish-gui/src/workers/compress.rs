use std::sync::mpsc;
use std::time::Instant;

use squish_core::compress::{Compressor, FfmpegEncoder, Generation};
use squish_core::error::SquishError;
use squish_core::quality::Quality;

use crate::convert::to_color_image;
use crate::messages::WorkerResult;

use super::send;

pub(super) fn handle_compress(
    generation: Generation,
    quality: Quality,
    compressor: &Compressor<FfmpegEncoder>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let result = match compressor.compress(quality) {
        Ok(result) => result,
        Err(SquishError::NoInputLoaded) => {
            send(tx, ctx, WorkerResult::CompressSkipped { generation });
            return;
        }
        Err(e) => {
            send(
                tx,
                ctx,
                WorkerResult::CompressFailed {
                    generation,
                    message: e.to_string(),
                },
            );
            return;
        }
    };

    match image::open(&result.output_path) {
        Ok(decoded) => {
            tracing::debug!(
                quality = quality.get(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Compressed preview ready"
            );
            send(
                tx,
                ctx,
                WorkerResult::Compressed {
                    generation,
                    result,
                    image: to_color_image(&decoded),
                },
            );
        }
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::CompressFailed {
                generation,
                message: format!(
                    "Failed to decode {}: {e}",
                    result.output_path.display()
                ),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squish_core::compress::RequestTracker;

    #[test]
    fn test_compress_without_input_answers_its_generation() {
        let compressor = Compressor::new(FfmpegEncoder::default(), "*_c.jpg", "");
        let (tx, rx) = mpsc::channel();
        let generation = RequestTracker::default().next();

        handle_compress(
            generation,
            Quality::clamped(5),
            &compressor,
            &tx,
            &egui::Context::default(),
        );

        match rx.try_recv() {
            Ok(WorkerResult::CompressSkipped { generation: answered }) => {
                assert_eq!(answered, generation);
            }
            _ => panic!("expected CompressSkipped"),
        }
    }
}
