use serde::{Deserialize, Serialize};

use crate::transform::TransformKind;

/// The transforms that produce one augmented copy, in application order.
///
/// `transforms` never contains `Flip` and never repeats a kind; the flip is
/// an independent coin toss recorded in `flip` and applied last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentationPlan {
    pub transforms: Vec<TransformKind>,
    pub flip: bool,
}

impl AugmentationPlan {
    /// Every step in order, with the trailing flip when it was drawn.
    pub fn steps(&self) -> impl Iterator<Item = TransformKind> + '_ {
        self.transforms
            .iter()
            .copied()
            .chain(self.flip.then_some(TransformKind::Flip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_append_flip_last() {
        let plan = AugmentationPlan {
            transforms: vec![TransformKind::Zoom, TransformKind::Noise],
            flip: true,
        };
        let steps: Vec<_> = plan.steps().collect();
        assert_eq!(steps, vec![TransformKind::Zoom, TransformKind::Noise, TransformKind::Flip]);

        let plan = AugmentationPlan { flip: false, ..plan };
        assert_eq!(plan.steps().count(), 2);
    }
}
