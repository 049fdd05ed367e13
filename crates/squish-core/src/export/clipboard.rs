use std::path::Path;
use std::process::{Command, Stdio};

use image::ImageFormat;
use tempfile::TempPath;
use tracing::{debug, warn};

use crate::error::{Result, SquishError};

/// Prefix of the scratch PNGs handed to the shell clipboard utilities.
const CLIPBOARD_TEMP_PREFIX: &str = "squish_clipboard_";

/// Places an image file on the system clipboard.
pub trait ClipboardExporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn copy_image(&self, image_path: &Path) -> Result<()>;
}

/// Exporter for the OS this binary was built for.
pub fn platform_exporter() -> Result<Box<dyn ClipboardExporter>> {
    exporter_for(std::env::consts::OS)
}

/// Exporter for an OS name as reported by `std::env::consts::OS`.
pub fn exporter_for(os: &str) -> Result<Box<dyn ClipboardExporter>> {
    match os {
        "macos" => Ok(Box::new(OsascriptClipboard)),
        "linux" => Ok(Box::new(XclipClipboard)),
        #[cfg(windows)]
        "windows" => Ok(Box::new(windows::DibClipboard)),
        other => Err(SquishError::ClipboardUnsupportedPlatform(other.to_string())),
    }
}

/// macOS: re-encode to PNG and read it into the clipboard with AppleScript.
struct OsascriptClipboard;

impl ClipboardExporter for OsascriptClipboard {
    fn name(&self) -> &'static str {
        "osascript"
    }

    fn copy_image(&self, image_path: &Path) -> Result<()> {
        let png = write_temp_png(image_path)?;
        let script = format!(
            "set the clipboard to (read (POSIX file \"{}\") as «class PNGf»)",
            png.display()
        );
        run_clipboard_command("osascript", &["-e".to_string(), script])
    }
}

/// Linux: re-encode to PNG and pipe it through xclip.
struct XclipClipboard;

impl ClipboardExporter for XclipClipboard {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn copy_image(&self, image_path: &Path) -> Result<()> {
        let png = write_temp_png(image_path)?;
        let args = [
            "-selection".to_string(),
            "clipboard".to_string(),
            "-t".to_string(),
            "image/png".to_string(),
            "-i".to_string(),
            png.display().to_string(),
        ];
        run_clipboard_command("xclip", &args)
    }
}

#[cfg(windows)]
mod windows {
    use std::borrow::Cow;
    use std::path::Path;

    use super::ClipboardExporter;
    use crate::error::{Result, SquishError};

    /// Windows: arboard stores the pixels in the device-independent bitmap
    /// clipboard format.
    pub(super) struct DibClipboard;

    impl ClipboardExporter for DibClipboard {
        fn name(&self) -> &'static str {
            "dib"
        }

        fn copy_image(&self, image_path: &Path) -> Result<()> {
            let rgba = image::open(image_path)?.to_rgba8();
            let (width, height) = rgba.dimensions();
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| SquishError::ClipboardExportFailed(e.to_string()))?;
            clipboard
                .set_image(arboard::ImageData {
                    width: width as usize,
                    height: height as usize,
                    bytes: Cow::Owned(rgba.into_raw()),
                })
                .map_err(|e| SquishError::ClipboardExportFailed(e.to_string()))
        }
    }
}

/// PNG copy of `image_path` in a uniquely named scratch file. The file is
/// removed when the returned handle drops.
fn write_temp_png(image_path: &Path) -> Result<TempPath> {
    let img = image::open(image_path)?;
    let temp = tempfile::Builder::new()
        .prefix(CLIPBOARD_TEMP_PREFIX)
        .suffix(".png")
        .tempfile()?
        .into_temp_path();
    img.save_with_format(&temp, ImageFormat::Png)?;
    debug!(path = %temp.display(), "Clipboard scratch PNG written");
    Ok(temp)
}

fn run_clipboard_command(program: &str, args: &[String]) -> Result<()> {
    let out = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| SquishError::ClipboardExportFailed(format!("failed to launch {program}: {e}")))?;

    if out.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
        warn!(program, %stderr, "Clipboard command failed");
        Err(SquishError::ClipboardExportFailed(stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_platform_is_unsupported() {
        let err = exporter_for("plan9").err().unwrap();
        assert!(matches!(err, SquishError::ClipboardUnsupportedPlatform(ref os) if os == "plan9"));
    }

    #[test]
    fn test_known_platforms() {
        assert_eq!(exporter_for("linux").unwrap().name(), "xclip");
        assert_eq!(exporter_for("macos").unwrap().name(), "osascript");
    }

    #[test]
    fn test_missing_image_fails_before_shelling_out() {
        let exporter = exporter_for("linux").unwrap();
        assert!(exporter.copy_image(Path::new("/no/such/image.png")).is_err());
    }

    #[test]
    fn test_scratch_png_is_unique_and_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.jpg");
        image::RgbImage::new(4, 4).save(&source).unwrap();

        let first = write_temp_png(&source).unwrap();
        let second = write_temp_png(&source).unwrap();
        assert_ne!(first.to_path_buf(), second.to_path_buf());
        assert_eq!(first.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(image::image_dimensions(&first).unwrap(), (4, 4));

        let kept = first.to_path_buf();
        drop(first);
        assert!(!kept.exists());
        assert!(second.exists());
    }
}
