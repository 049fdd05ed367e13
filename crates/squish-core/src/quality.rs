//! The compression quality parameter and the knob that keeps its input
//! controls in agreement.

use std::fmt;

use crate::consts::{DEFAULT_QUALITY, QUALITY_MAX, QUALITY_MIN};
use crate::error::{Result, SquishError};

/// Encoder quality on the `-q:v` scale: 1 is best quality (largest file),
/// 31 is worst quality (smallest file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: Quality = Quality(QUALITY_MIN);
    pub const MAX: Quality = Quality(QUALITY_MAX);

    /// Validate a user-provided value.
    pub fn new(value: i64) -> Result<Self> {
        if (QUALITY_MIN as i64..=QUALITY_MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SquishError::InvalidQuality(value))
        }
    }

    /// Build a quality from any integer, clamping into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(QUALITY_MIN as i64, QUALITY_MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle returned by [`QualityKnob::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Observer = Box<dyn FnMut(Quality)>;

/// Single source of truth for the quality value.
///
/// Every input control subscribes once. When a control reports a new value it
/// passes its own id as the origin, and every other observer is notified. The
/// originator already shows the value, so it is skipped.
pub struct QualityKnob {
    value: Quality,
    observers: Vec<(ObserverId, Observer)>,
    next_id: usize,
}

impl QualityKnob {
    pub fn new(initial: Quality) -> Self {
        Self {
            value: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn value(&self) -> Quality {
        self.value
    }

    pub fn subscribe(&mut self, observer: impl FnMut(Quality) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(oid, _)| *oid != id);
    }

    /// Store `value` and notify all observers except `origin`.
    ///
    /// Returns `false` without notifying anyone when the value is unchanged.
    pub fn set(&mut self, origin: Option<ObserverId>, value: Quality) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        for (id, observer) in &mut self.observers {
            if Some(*id) != origin {
                observer(value);
            }
        }
        true
    }
}

impl Default for QualityKnob {
    fn default() -> Self {
        Self::new(Quality::default())
    }
}
