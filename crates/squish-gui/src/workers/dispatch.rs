use std::sync::mpsc;

use squish_core::compress::{Compressor, FfmpegEncoder};
use squish_core::config::AppConfig;
use squish_core::export::platform_exporter;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{compress, export, io};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    config: &AppConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
    let compressor = Compressor::from_config(
        FfmpegEncoder::new(&config.encoder_program),
        config,
    );

    std::thread::Builder::new()
        .name("squish-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, compressor);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

/// Commands queued behind `first`, with every compress request except the
/// newest dropped. Other commands keep their order.
pub(crate) fn coalesce(
    first: WorkerCommand,
    cmd_rx: &mpsc::Receiver<WorkerCommand>,
) -> Vec<WorkerCommand> {
    let mut batch = vec![first];
    batch.extend(cmd_rx.try_iter());

    let last_compress = batch
        .iter()
        .rposition(|cmd| matches!(cmd, WorkerCommand::Compress { .. }));

    let before = batch.len();
    let batch: Vec<WorkerCommand> = batch
        .into_iter()
        .enumerate()
        .filter(|(i, cmd)| {
            !matches!(cmd, WorkerCommand::Compress { .. }) || Some(*i) == last_compress
        })
        .map(|(_, cmd)| cmd)
        .collect();

    if batch.len() < before {
        tracing::debug!(dropped = before - batch.len(), "Coalesced compress requests");
    }
    batch
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    mut compressor: Compressor<FfmpegEncoder>,
) {
    let clipboard = platform_exporter();
    if let Err(ref e) = clipboard {
        tracing::warn!("{e}");
    }

    while let Ok(first) = cmd_rx.recv() {
        for cmd in coalesce(first, &cmd_rx) {
            match cmd {
                WorkerCommand::LoadImage { path } => {
                    io::handle_load_image(&path, &mut compressor, &tx, &ctx);
                }
                WorkerCommand::Compress {
                    generation,
                    quality,
                } => {
                    compress::handle_compress(generation, quality, &compressor, &tx, &ctx);
                }
                WorkerCommand::Save {
                    source,
                    destination,
                } => {
                    export::handle_save(&source, destination.as_deref(), &tx, &ctx);
                }
                WorkerCommand::CopyToClipboard { path } => match clipboard {
                    Ok(ref exporter) => {
                        export::handle_copy_to_clipboard(exporter.as_ref(), &path, &tx, &ctx);
                    }
                    Err(ref e) => send_error(&tx, &ctx, e.to_string()),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squish_core::compress::RequestTracker;
    use squish_core::quality::Quality;

    #[test]
    fn test_coalesce_keeps_only_newest_compress() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let mut tracker = RequestTracker::default();
        let first = WorkerCommand::Compress {
            generation: tracker.next(),
            quality: Quality::clamped(3),
        };
        cmd_tx
            .send(WorkerCommand::LoadImage {
                path: "a.png".into(),
            })
            .unwrap();
        for q in [4, 5, 6] {
            cmd_tx
                .send(WorkerCommand::Compress {
                    generation: tracker.next(),
                    quality: Quality::clamped(q),
                })
                .unwrap();
        }

        let batch = coalesce(first, &cmd_rx);
        assert_eq!(batch.len(), 2);
        assert!(matches!(batch[0], WorkerCommand::LoadImage { .. }));
        match &batch[1] {
            WorkerCommand::Compress {
                generation,
                quality,
            } => {
                assert!(tracker.is_current(*generation));
                assert_eq!(quality.get(), 6);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_coalesce_without_compress_keeps_everything() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        cmd_tx
            .send(WorkerCommand::CopyToClipboard {
                path: "b.jpg".into(),
            })
            .unwrap();
        let batch = coalesce(
            WorkerCommand::LoadImage {
                path: "a.png".into(),
            },
            &cmd_rx,
        );
        assert_eq!(batch.len(), 2);
    }
}
