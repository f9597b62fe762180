use super::pool::{egg_branches, MovePool};
use super::flag_duplicates;
use crate::legality::check::{CheckIdentifier, CheckResult, Severity};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::EncounterCandidate;
use schema::constants::{moves, species};
use tracing::trace;

/// The sets a current move may come from, in precedence order.
#[derive(Debug, Clone, Copy)]
pub struct MoveSources<'a> {
    pub pool: &'a MovePool,
    pub egg: &'a [u16],
    pub relearn: &'a [u16],
    /// Moves taught by the encounter itself.
    pub special: &'a [u16],
}

pub fn classify_move(move_id: u16, sources: &MoveSources<'_>) -> CheckResult {
    let id = CheckIdentifier::Move;
    if move_id == 0 {
        CheckResult::valid("Empty", id)
    } else if sources.pool.level_up.contains(&move_id) {
        CheckResult::valid("Learned by Level-up.", id)
    } else if sources.egg.contains(&move_id) {
        CheckResult::valid("Egg Move.", id).flagged()
    } else if sources.relearn.contains(&move_id) {
        CheckResult::valid("Relearnable Move.", id).flagged()
    } else if sources.pool.machine.contains(&move_id) {
        CheckResult::valid("Learned by TM/HM.", id)
    } else if sources.pool.tutor.contains(&move_id) {
        CheckResult::valid("Learned by Move Tutor.", id)
    } else if sources.special.contains(&move_id) {
        CheckResult::valid("Special Non-Relearn Move.", id)
    } else {
        CheckResult::invalid("Invalid Move.", id)
    }
}

/// Classifies all four current moves, then applies the species carve-outs
/// and the duplicate check.
pub(super) fn evaluate(ctx: &AnalysisContext<'_>, sources: &MoveSources<'_>) -> [CheckResult; 4] {
    let specimen = ctx.specimen;
    let mut results = specimen.moves.map(|move_id| classify_move(move_id, sources));

    if specimen.species == species::SMEARGLE {
        for (result, &move_id) in results.iter_mut().zip(&specimen.moves) {
            if move_id == 0 {
                continue;
            }
            if ctx.db.rules.invalid_sketch.contains(&move_id) {
                *result = CheckResult::invalid("Invalid Sketch move.", CheckIdentifier::Move);
            } else if !result.is_valid() {
                *result = CheckResult::valid("Learned by Sketch.", CheckIdentifier::Move);
            }
        }
    }

    if specimen.species == species::KELDEO {
        let index = specimen
            .moves
            .iter()
            .position(|&move_id| move_id == moves::SECRET_SWORD);
        if (specimen.form == 1) != index.is_some() {
            results[index.unwrap_or(0)] = CheckResult::invalid(
                "Secret Sword / Resolute Keldeo Mismatch.",
                CheckIdentifier::Move,
            );
        }
    }

    flag_duplicates(&specimen.moves, &mut results, "Duplicate Move.", CheckIdentifier::Move);
    results
}

/// Egg move sets to try for the current moves, one per breeding branch.
/// Legacy eggs start with none; their sets are tried afterwards by the egg
/// move set check.
fn egg_move_sets(ctx: &AnalysisContext<'_>) -> Vec<Vec<u16>> {
    match &ctx.encounter {
        EncounterCandidate::EggOrigin(origin) if !ctx.specimen.is_legacy() => {
            egg_branches(ctx.db, &ctx.chain, origin)
                .iter()
                .map(|branch| branch.egg_moves(ctx.db, &ctx.chain))
                .collect()
        }
        _ => vec![Vec::new()],
    }
}

pub fn verify_current(ctx: &mut AnalysisContext<'_>) {
    let pool = MovePool::compute(ctx.db, &ctx.chain);
    let relearn = ctx.specimen.relearn_moves;

    let results = if ctx.gift_candidates.len() > 1 {
        verify_ambiguous_gifts(ctx, &pool, &relearn)
    } else {
        let special = ctx.encounter.fixed_moves();
        let mut first = None;
        let mut accepted = None;
        for (branch, egg) in egg_move_sets(ctx).iter().enumerate() {
            let sources = MoveSources {
                pool: &pool,
                egg,
                relearn: &relearn,
                special,
            };
            let results = evaluate(ctx, &sources);
            if results.iter().all(CheckResult::is_valid) {
                trace!(branch, "egg branch accepted for current moves");
                accepted = Some(results);
                break;
            }
            first.get_or_insert(results);
        }
        accepted
            .or(first)
            .unwrap_or_else(|| std::array::from_fn(|_| CheckResult::neutral(CheckIdentifier::Move)))
    };
    ctx.moves = results;
}

/// Several gifts still fit: a slot whose verdict depends on the gift cannot
/// be judged.
fn verify_ambiguous_gifts(
    ctx: &AnalysisContext<'_>,
    pool: &MovePool,
    relearn: &[u16],
) -> [CheckResult; 4] {
    let per_gift: Vec<[CheckResult; 4]> = ctx
        .gift_candidates
        .iter()
        .map(|gift| {
            let sources = MoveSources {
                pool,
                egg: &[],
                relearn,
                special: &gift.moves,
            };
            evaluate(ctx, &sources)
        })
        .collect();

    let Some((first, rest)) = per_gift.split_first() else {
        return std::array::from_fn(|_| CheckResult::neutral(CheckIdentifier::Move));
    };
    let mut results = first.clone();
    for (slot, result) in results.iter_mut().enumerate() {
        if rest.iter().any(|other| other[slot].is_valid() != result.is_valid()) {
            *result = CheckResult::new(
                Severity::Indeterminate,
                "Move legality depends on which Mystery Gift was received.",
                CheckIdentifier::Move,
            );
        }
    }
    results
}
