use std::path::Path;
use std::sync::mpsc;

use squish_core::compress::{Compressor, FfmpegEncoder};

use crate::convert::to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_error};

pub(super) fn handle_load_image(
    path: &Path,
    compressor: &mut Compressor<FfmpegEncoder>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    // Decode first so a broken file leaves the current input in place.
    let decoded = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to decode {}: {e}", path.display()));
            return;
        }
    };

    let size_bytes = match compressor.load(path) {
        Ok(size) => size,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to open {}: {e}", path.display()));
            return;
        }
    };

    send(
        tx,
        ctx,
        WorkerResult::ImageLoaded {
            path: path.to_path_buf(),
            image: to_color_image(&decoded),
            size_bytes,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecodable_file_keeps_previous_input() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        image::RgbImage::new(8, 8).save(&good).unwrap();
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not a png").unwrap();

        let mut compressor = Compressor::new(FfmpegEncoder::default(), "*_c.jpg", dir.path());
        let (tx, rx) = mpsc::channel();
        let ctx = egui::Context::default();

        handle_load_image(&good, &mut compressor, &tx, &ctx);
        assert!(matches!(rx.try_recv(), Ok(WorkerResult::ImageLoaded { .. })));

        handle_load_image(&broken, &mut compressor, &tx, &ctx);
        assert!(matches!(rx.try_recv(), Ok(WorkerResult::Error { .. })));
        assert_eq!(compressor.input(), Some(good.as_path()));
    }
}
