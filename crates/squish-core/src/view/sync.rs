use serde::{Deserialize, Serialize};

use super::types::Pane;

/// How a scroll on one pane carries over to the other.
///
/// Values are copied in raw scroll-bar units, never as fractions, so panes
/// with different content sizes stay aligned pixel for pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// The compressed pane's bars drive the original's.
    #[default]
    CompressedToOriginal,
    /// Either pane drives the other.
    Bidirectional,
    /// No synchronization.
    Independent,
}

impl SyncMode {
    /// Pane that mirrors a scroll made on `source`, if any.
    pub fn target(self, source: Pane) -> Option<Pane> {
        match (self, source) {
            (Self::CompressedToOriginal, Pane::Compressed) => Some(Pane::Original),
            (Self::Bidirectional, pane) => Some(pane.other()),
            _ => None,
        }
    }

    /// Pane whose bars should receive user input aimed at `pane`.
    ///
    /// With one-way sync, input over the original pane is routed to the
    /// compressed pane so that both stay locked.
    pub fn driver(self, pane: Pane) -> Pane {
        match self {
            Self::CompressedToOriginal => Pane::Compressed,
            Self::Bidirectional | Self::Independent => pane,
        }
    }
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompressedToOriginal => write!(f, "Compressed drives original"),
            Self::Bidirectional => write!(f, "Bidirectional"),
            Self::Independent => write!(f, "Independent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(
            SyncMode::CompressedToOriginal.target(Pane::Compressed),
            Some(Pane::Original)
        );
        assert_eq!(SyncMode::CompressedToOriginal.target(Pane::Original), None);
        assert_eq!(
            SyncMode::Bidirectional.target(Pane::Original),
            Some(Pane::Compressed)
        );
        assert_eq!(SyncMode::Independent.target(Pane::Compressed), None);
    }

    #[test]
    fn test_driver_routes_one_way_input_to_compressed() {
        assert_eq!(
            SyncMode::CompressedToOriginal.driver(Pane::Original),
            Pane::Compressed
        );
        assert_eq!(SyncMode::Bidirectional.driver(Pane::Original), Pane::Original);
    }
}
