//! Pattern generation (answer sequence + distractors).

pub mod generator;
pub mod policy;
pub mod types;

pub use generator::{PatternGenerator, MAX_DRAW_ATTEMPTS};
pub use policy::{FakeTypePolicy, MIXED_FAKES_FROM_ROUND};
pub use types::{FakeEntry, FakeType, PatternData, RevealStep};
