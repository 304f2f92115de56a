use crate::error::PatternError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Distractor icon variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FakeType {
    RedCat,
    GreenDog,
}

impl FakeType {
    /// Declaration order. Random type picks index into this.
    pub const ALL: [FakeType; 2] = [FakeType::RedCat, FakeType::GreenDog];

    pub fn name(self) -> &'static str {
        match self {
            FakeType::RedCat => "red cat",
            FakeType::GreenDog => "green dog",
        }
    }
}

/// One distractor shown during playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakeEntry {
    /// Grid cell (0..grid_size)
    pub position: usize,
    pub fake_type: FakeType,
    /// Answer step this fake is shown alongside (0..answer_count)
    pub insert_after_index: usize,
}

/// Answer sequence plus distractors for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternData {
    /// Cells in the order they are revealed and must be tapped
    pub answer_positions: Vec<usize>,
    pub fake_positions: Vec<FakeEntry>,
    pub answer_count: usize,
}

/// What the board shows at one answer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub answer: usize,
    pub fakes: Vec<FakeEntry>,
}

impl PatternData {
    pub fn fake_count(&self) -> usize {
        self.fake_positions.len()
    }

    /// Every occupied cell: answers first, then fakes.
    pub fn all_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.answer_positions
            .iter()
            .copied()
            .chain(self.fake_positions.iter().map(|f| f.position))
    }

    /// Fakes shown together with answer step `index`.
    pub fn fakes_at_step(&self, index: usize) -> impl Iterator<Item = &FakeEntry> + '_ {
        self.fake_positions.iter().filter(move |f| f.insert_after_index == index)
    }

    /// Playback order: one step per answer, with its fakes.
    pub fn reveal_steps(&self) -> Vec<RevealStep> {
        self.answer_positions
            .iter()
            .enumerate()
            .map(|(index, &answer)| RevealStep {
                index,
                answer,
                fakes: self.fakes_at_step(index).copied().collect(),
            })
            .collect()
    }

    /// Fake types present, in first-seen order.
    pub fn fake_types(&self) -> Vec<FakeType> {
        let mut seen = Vec::new();
        for fake in &self.fake_positions {
            if !seen.contains(&fake.fake_type) {
                seen.push(fake.fake_type);
            }
        }
        seen
    }

    /// Structural invariants that hold for every generated pattern.
    pub fn check_invariants(&self, grid_size: usize) -> Result<(), PatternError> {
        if self.answer_count != self.answer_positions.len() {
            return Err(PatternError::AnswerCountMismatch {
                cached: self.answer_count,
                actual: self.answer_positions.len(),
            });
        }

        let mut used = HashSet::new();
        for position in self.all_positions() {
            if position >= grid_size {
                return Err(PatternError::PositionOutOfRange { position, grid_size });
            }
            if !used.insert(position) {
                return Err(PatternError::DuplicatePosition { position });
            }
        }

        for fake in &self.fake_positions {
            if fake.insert_after_index >= self.answer_count {
                return Err(PatternError::InsertionOutOfRange {
                    position: fake.position,
                    index: fake.insert_after_index,
                    answer_count: self.answer_count,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PatternData {
        PatternData {
            answer_positions: vec![4, 0, 8],
            fake_positions: vec![
                FakeEntry { position: 2, fake_type: FakeType::RedCat, insert_after_index: 1 },
                FakeEntry { position: 6, fake_type: FakeType::GreenDog, insert_after_index: 1 },
            ],
            answer_count: 3,
        }
    }

    #[test]
    fn test_fake_type_names() {
        let names: Vec<&str> = FakeType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["red cat", "green dog"]);
    }

    #[test]
    fn test_reveal_steps_group_fakes_with_their_answer() {
        let steps = sample().reveal_steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].answer, 4);
        assert!(steps[0].fakes.is_empty());
        assert_eq!(steps[1].answer, 0);
        assert_eq!(
            steps[1].fakes.iter().map(|f| f.position).collect::<Vec<_>>(),
            vec![2, 6]
        );
        assert!(steps[2].fakes.is_empty());
    }

    #[test]
    fn test_fake_types_first_seen_order() {
        let mut pattern = sample();
        pattern.fake_positions[0].fake_type = FakeType::GreenDog;
        pattern.fake_positions[1].fake_type = FakeType::GreenDog;
        assert_eq!(pattern.fake_types(), vec![FakeType::GreenDog]);
        assert_eq!(sample().fake_types(), vec![FakeType::RedCat, FakeType::GreenDog]);
    }

    #[test]
    fn test_check_invariants_accepts_sample() {
        assert_eq!(sample().check_invariants(9), Ok(()));
    }

    #[test]
    fn test_check_invariants_rejects_duplicate() {
        let mut pattern = sample();
        pattern.fake_positions[0].position = 8;
        assert_eq!(
            pattern.check_invariants(9),
            Err(PatternError::DuplicatePosition { position: 8 })
        );
    }

    #[test]
    fn test_check_invariants_rejects_bad_insertion() {
        let mut pattern = sample();
        pattern.fake_positions[1].insert_after_index = 3;
        assert!(matches!(
            pattern.check_invariants(9),
            Err(PatternError::InsertionOutOfRange { position: 6, index: 3, answer_count: 3 })
        ));
    }

    #[test]
    fn test_check_invariants_rejects_out_of_grid() {
        let mut pattern = sample();
        pattern.answer_positions[2] = 9;
        assert_eq!(
            pattern.check_invariants(9),
            Err(PatternError::PositionOutOfRange { position: 9, grid_size: 9 })
        );
    }

    #[test]
    fn test_check_invariants_rejects_stale_count() {
        let mut pattern = sample();
        pattern.answer_count = 4;
        assert_eq!(
            pattern.check_invariants(9),
            Err(PatternError::AnswerCountMismatch { cached: 4, actual: 3 })
        );
    }

    #[test]
    fn test_pattern_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["answer_count"], 3);
        assert_eq!(json["fake_positions"][0]["fake_type"], "RedCat");
    }
}
