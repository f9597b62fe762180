//! Move pool computation and validation of current and relearn moves.

mod current;
mod egg_moves;
mod pool;
mod relearn;

pub use current::{classify_move, verify_current, MoveSources};
pub use egg_moves::verify_egg_move_set;
pub use pool::{egg_branches, EggBranch, MovePool};
pub use relearn::verify_relearn;

use crate::legality::check::{CheckIdentifier, CheckResult};

/// Marks every non-empty move that appears more than once.
pub(crate) fn flag_duplicates(
    moves: &[u16; 4],
    results: &mut [CheckResult; 4],
    comment: &str,
    identifier: CheckIdentifier,
) {
    for (i, &move_id) in moves.iter().enumerate() {
        let repeated = moves
            .iter()
            .enumerate()
            .any(|(j, &other)| j != i && other == move_id);
        if move_id != 0 && repeated {
            results[i] = CheckResult::invalid(comment, identifier);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_duplicate_occurrence_is_flagged() {
        let moves = [33, 0, 33, 0];
        let mut results: [CheckResult; 4] =
            std::array::from_fn(|_| CheckResult::neutral(CheckIdentifier::Move));
        flag_duplicates(&moves, &mut results, "Duplicate Move.", CheckIdentifier::Move);

        assert!(!results[0].is_valid());
        assert!(!results[2].is_valid());
        // Empty slots never count as duplicates.
        assert!(results[1].is_valid() && results[3].is_valid());
    }
}
