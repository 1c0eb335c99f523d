/// Characters of the pattern and of each word considered by the scorer.
/// Anything past this is ignored, which also keeps match positions within a `u128`.
pub const MAX_LEN: usize = 128;

/// Match at a strong position with identical case.
pub const STRONG_MATCH: i32 = 7;
/// Match at a strong position whose case differs from the pattern.
pub const STRONG_MATCH_CASELESS: i32 = 5;
/// Match on the first separator of a run, or right after a separator.
pub const SEPARATOR_MATCH: i32 = 5;
/// Match anywhere else.
pub const WEAK_MATCH: i32 = 1;
/// Characters differ.
pub const MISMATCH: i32 = -1;

/// Penalty for opening a gap directly after a matched character.
pub const NEW_GAP_PENALTY: i32 = 5;
/// Penalty for each further skipped character once matching has started.
pub const GAP_PENALTY: i32 = 1;
/// Penalty per skipped leading character of the word.
pub const LATE_START_PENALTY_PER_CHAR: i32 = 3;
/// Cap on the late start penalty.
pub const LATE_START_PENALTY_CAP: i32 = 9;

/// Alignments explored during backtracking before settling on the best.
pub const MAX_ALIGNMENTS: usize = 10;
/// Alignments whose running total drops below this are abandoned.
pub const GIVE_UP_SCORE: i32 = -25;
/// Starting point for the best alignment search.
pub const INITIAL_TOP_SCORE: i32 = -100;
/// Upper bound on backtracking calls per score, completed or not.
pub const MAX_BACKTRACK_CALLS: usize = 256;
