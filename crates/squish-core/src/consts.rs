/// Smallest allowed display scale factor.
pub const SCALE_MIN: f32 = 0.05;

/// Largest allowed display scale factor.
pub const SCALE_MAX: f32 = 20.0;

/// Multiplier applied by one zoom-in step.
pub const ZOOM_IN_STEP: f32 = 1.25;

/// Multiplier applied by one zoom-out step.
pub const ZOOM_OUT_STEP: f32 = 0.8;

/// Raw wheel units reported for one physical notch.
pub const WHEEL_NOTCH_UNITS: f32 = 120.0;

/// A wheel notch scrolls `page_step / WHEEL_PAGE_DIVISOR`.
pub const WHEEL_PAGE_DIVISOR: f32 = 7.0;

/// Accumulated vertical wheel delta needed to trigger one zoom step.
pub const WHEEL_ZOOM_THRESHOLD: f32 = 20.0;

/// Drag delta multiplier while the acceleration modifier is held.
pub const PAN_ACCELERATION: f32 = 4.0;

/// Best quality / largest output for the reference encoder.
pub const QUALITY_MIN: u8 = 1;

/// Worst quality / smallest output for the reference encoder.
pub const QUALITY_MAX: u8 = 31;

/// Quality used when the config does not name one.
pub const DEFAULT_QUALITY: u8 = 5;

/// Default output file name pattern. `*` is replaced by the input stem.
pub const DEFAULT_OUTPUT_PATTERN: &str = "*_compressed.jpg";

/// Default external encoder executable.
pub const DEFAULT_ENCODER_PROGRAM: &str = "ffmpeg";

/// Extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
