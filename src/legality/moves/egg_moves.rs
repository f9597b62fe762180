use super::current::{evaluate, MoveSources};
use super::pool::MovePool;
use crate::legality::check::{CheckIdentifier, CheckResult, Severity};
use crate::legality::context::AnalysisContext;
use schema::GameGroup;
use tracing::debug;

const MAX_SPECIES_GEN2: u16 = 251;

/// Egg moves of one hatched specimen must come from a single game's egg
/// move table. Retries the current moves against each legacy table in turn
/// and returns a line when the check says anything.
pub fn verify_egg_move_set(ctx: &mut AnalysisContext<'_>) -> Option<CheckResult> {
    if !ctx.was_egg || ctx.moves.iter().all(CheckResult::is_valid) {
        return None;
    }

    match ctx.specimen.origin_generation() {
        1 | 2 => {
            let pool = MovePool::compute(ctx.db, &ctx.chain);
            let base = ctx
                .chain
                .species()
                .filter(|&species| species <= MAX_SPECIES_GEN2)
                .last()?;
            let relearn = ctx.specimen.relearn_moves;
            for group in [GameGroup::Gs, GameGroup::Crystal] {
                let sources = MoveSources {
                    pool: &pool,
                    egg: ctx.db.egg_moves(group, base),
                    relearn: &relearn,
                    special: ctx.encounter.fixed_moves(),
                };
                let results = evaluate(ctx, &sources);
                if results.iter().all(CheckResult::is_valid) {
                    debug!(%group, "egg moves matched a single game");
                    ctx.moves = results;
                    return Some(CheckResult::valid(
                        format!("Egg Moves sourced from {}.", group),
                        CheckIdentifier::Egg,
                    ));
                }
            }
            None
        }
        3 | 4 => Some(CheckResult::new(
            Severity::NotImplemented,
            "Egg Move set check unimplemented.",
            CheckIdentifier::Egg,
        )),
        _ => None,
    }
}
