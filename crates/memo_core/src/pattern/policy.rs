//! Fake type selection rules per round tier.

use super::types::FakeType;
use crate::rng::RandomSource;

/// First round where both distractor kinds may appear together.
pub const MIXED_FAKES_FROM_ROUND: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeTypePolicy {
    /// One kind per pattern: the first fake picks it, the rest reuse it.
    SingleKind,
    /// Pick among kinds not used yet; once all are used, pick freely.
    DistinctUntilExhausted,
}

impl FakeTypePolicy {
    pub fn for_round(round: usize) -> Self {
        if round < MIXED_FAKES_FROM_ROUND {
            FakeTypePolicy::SingleKind
        } else {
            FakeTypePolicy::DistinctUntilExhausted
        }
    }

    /// Choose the next fake type given those already placed in this pattern.
    ///
    /// `used` is in first-use order and holds no duplicates.
    pub fn pick<R: RandomSource + ?Sized>(self, used: &[FakeType], rng: &mut R) -> FakeType {
        match self {
            FakeTypePolicy::SingleKind => match used.first() {
                Some(&kind) => kind,
                None => FakeType::ALL[rng.next_below(FakeType::ALL.len())],
            },
            FakeTypePolicy::DistinctUntilExhausted => {
                let available: Vec<FakeType> =
                    FakeType::ALL.iter().copied().filter(|t| !used.contains(t)).collect();

                if available.is_empty() {
                    // More fakes than kinds; duplicates are allowed from here on.
                    FakeType::ALL[rng.next_below(FakeType::ALL.len())]
                } else {
                    available[rng.next_below(available.len())]
                }
            }
        }
    }
}
