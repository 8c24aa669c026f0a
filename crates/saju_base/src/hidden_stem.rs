//! Hidden stems (지장간, 支藏干).
//!
//! Every branch conceals one to three stems. The main (본기) stem weighs
//! 1.0, the middle (중기) 0.5 and the residual (여기) 0.3. Weights are held
//! in tenths so that sums and ties stay exact.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Tier of a hidden stem within its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenTier {
    Main,
    Middle,
    Residual,
}

impl HiddenTier {
    /// Weight in tenths (10 / 5 / 3).
    pub const fn weight_tenths(self) -> u32 {
        match self {
            Self::Main => 10,
            Self::Middle => 5,
            Self::Residual => 3,
        }
    }

    pub fn weight(self) -> f64 {
        self.weight_tenths() as f64 / 10.0
    }
}

/// One hidden stem of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub tier: HiddenTier,
}

const fn main(stem: Stem) -> HiddenStem {
    HiddenStem { stem, tier: HiddenTier::Main }
}

const fn middle(stem: Stem) -> HiddenStem {
    HiddenStem { stem, tier: HiddenTier::Middle }
}

const fn residual(stem: Stem) -> HiddenStem {
    HiddenStem { stem, tier: HiddenTier::Residual }
}

/// Hidden stems of a branch, main stem first.
pub const fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    use Stem::*;
    match branch {
        Branch::Ja => const { &[main(Gye)] },
        Branch::Chuk => const { &[main(Gi), middle(Gye), residual(Sin)] },
        Branch::In => const { &[main(Gap), middle(Byeong), residual(Mu)] },
        Branch::Myo => const { &[main(Eul)] },
        Branch::Jin => const { &[main(Mu), middle(Eul), residual(Gye)] },
        Branch::Sa => const { &[main(Byeong), middle(Gyeong), residual(Mu)] },
        Branch::O => const { &[main(Jeong), middle(Gi)] },
        Branch::Mi => const { &[main(Gi), middle(Jeong), residual(Eul)] },
        Branch::Sin => const { &[main(Gyeong), middle(Im), residual(Mu)] },
        Branch::Yu => const { &[main(Sin)] },
        Branch::Sul => const { &[main(Mu), middle(Sin), residual(Jeong)] },
        Branch::Hae => const { &[main(Im), middle(Gap)] },
    }
}

/// The main (본기) hidden stem of a branch.
pub const fn main_hidden_stem(branch: Branch) -> Stem {
    hidden_stems(branch)[0].stem
}
