use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AugmentError;

/// Identifies one of the six image transforms.
///
/// - `Rotate`     — rotation about the image centre, reflected borders.
/// - `Brightness` — scales the HSV value channel.
/// - `Contrast`   — stretches channel values around the global mean.
/// - `Flip`       — left-right mirror; never drawn into a composite plan,
///                  which flips on an independent coin toss instead.
/// - `Noise`      — additive Gaussian noise.
/// - `Zoom`       — centre crop or reflected pad after rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Rotate,
    Brightness,
    Contrast,
    Flip,
    Noise,
    Zoom,
}

impl TransformKind {
    /// The full catalog, used when a single transform is picked at random.
    pub const ALL: [TransformKind; 6] = [
        TransformKind::Rotate,
        TransformKind::Brightness,
        TransformKind::Contrast,
        TransformKind::Flip,
        TransformKind::Noise,
        TransformKind::Zoom,
    ];

    /// The transforms a composite plan samples from (everything but `Flip`).
    pub const COMPOSABLE: [TransformKind; 5] = [
        TransformKind::Rotate,
        TransformKind::Brightness,
        TransformKind::Contrast,
        TransformKind::Noise,
        TransformKind::Zoom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Rotate => "rotate",
            TransformKind::Brightness => "brightness",
            TransformKind::Contrast => "contrast",
            TransformKind::Flip => "flip",
            TransformKind::Noise => "noise",
            TransformKind::Zoom => "zoom",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AugmentError::InvalidConfig(format!("unknown transform '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::TransformKind;

    #[test]
    fn composable_excludes_flip_only() {
        assert!(!TransformKind::COMPOSABLE.contains(&TransformKind::Flip));
        for kind in TransformKind::ALL {
            if kind != TransformKind::Flip {
                assert!(TransformKind::COMPOSABLE.contains(&kind));
            }
        }
    }

    #[test]
    fn names_parse_back() {
        for kind in TransformKind::ALL {
            assert_eq!(kind.to_string().parse::<TransformKind>().unwrap(), kind);
        }
        assert_eq!("ZOOM".parse::<TransformKind>().unwrap(), TransformKind::Zoom);
        assert!("blur".parse::<TransformKind>().is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TransformKind::Brightness).unwrap();
        assert_eq!(json, "\"brightness\"");
    }
}
