use super::flag_duplicates;
use super::pool::{egg_branches, EggBranch};
use crate::database::GameDatabase;
use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::{gift_match_result, EncounterCandidate};
use schema::constants::moves::VOLT_TACKLE;
use schema::MysteryGift;
use tracing::{debug, trace};

const RELEARN: CheckIdentifier = CheckIdentifier::RelearnMove;

/// Validates the relearn slots against the committed origin. Gift origins
/// are narrowed here, which may rewrite the encounter verdict.
pub fn verify_relearn(ctx: &mut AnalysisContext<'_>) {
    let specimen = ctx.specimen;
    let relearn = specimen.relearn_moves;

    let mut results = if matches!(ctx.encounter, EncounterCandidate::MysteryGift(_)) {
        disambiguate_gifts(ctx)
    } else if specimen.origin_generation() < 6 || specimen.vc() {
        no_relearn_expected(&relearn)
    } else {
        match &ctx.encounter {
            EncounterCandidate::Link(link) => {
                let expected = link.relearn;
                ctx.relearn_base = Some(expected.to_vec());
                positional(ctx.db, &expected, &relearn)
            }
            EncounterCandidate::Static(encounter) => {
                let expected = encounter.relearn;
                ctx.relearn_base = Some(expected.to_vec());
                positional(ctx.db, &expected, &relearn)
            }
            EncounterCandidate::EggOrigin(_)
                if !ctx.db.rules.no_hatch.contains(&specimen.species) =>
            {
                verify_egg_relearn(ctx)
            }
            EncounterCandidate::WildSlot(_) if relearn[0] != 0 && ctx.encounter.is_dexnav() => {
                verify_dexnav(ctx)
            }
            // A Link gift the database does not know: nothing to compare with.
            EncounterCandidate::Unknown if specimen.was_link() => {
                std::array::from_fn(|_| CheckResult::neutral(RELEARN))
            }
            _ => no_relearn_expected(&relearn),
        }
    };

    flag_duplicates(&relearn, &mut results, "Duplicate Relearn Move.", RELEARN);
    ctx.relearn = results;
}

/// Relearn slots of an origin that grants none.
pub(crate) fn no_relearn_expected(relearn: &[u16; 4]) -> [CheckResult; 4] {
    relearn.map(|move_id| {
        if move_id == 0 {
            CheckResult::neutral(RELEARN)
        } else {
            CheckResult::invalid("Expected no Relearn Moves.", RELEARN)
        }
    })
}

fn positional(db: &GameDatabase, expected: &[u16; 4], relearn: &[u16; 4]) -> [CheckResult; 4] {
    std::array::from_fn(|i| {
        if expected[i] == relearn[i] {
            CheckResult::neutral(RELEARN)
        } else {
            CheckResult::invalid(format!("Expected: {}.", db.move_name(expected[i])), RELEARN)
        }
    })
}

/// Keeps only the gifts whose relearn set matches the specimen and commits
/// the first survivor.
fn disambiguate_gifts(ctx: &mut AnalysisContext<'_>) -> [CheckResult; 4] {
    let relearn = ctx.specimen.relearn_moves;
    let candidates = std::mem::take(&mut ctx.gift_candidates);
    let survivors: Vec<MysteryGift> = candidates
        .into_iter()
        .filter(|gift| {
            let keep = gift.relearn == relearn;
            if !keep {
                debug!(card = gift.card_id, "gift dropped: relearn moves differ");
            }
            keep
        })
        .collect();

    let Some(first) = survivors.first().cloned() else {
        ctx.encounter = EncounterCandidate::Unknown;
        ctx.encounter_result = CheckResult::invalid(
            "Unable to match to a Mystery Gift in the database.",
            CheckIdentifier::Encounter,
        );
        return no_relearn_expected(&relearn);
    };

    if survivors.len() > 1 {
        debug!(count = survivors.len(), "gift ambiguity remains");
    }
    let results = positional(ctx.db, &first.relearn, &relearn);
    ctx.relearn_base = Some(first.relearn.to_vec());
    ctx.encounter_result = gift_match_result(&first);
    ctx.encounter = EncounterCandidate::MysteryGift(first);
    ctx.gift_candidates = survivors;
    results
}

fn verify_egg_relearn(ctx: &mut AnalysisContext<'_>) -> [CheckResult; 4] {
    let EncounterCandidate::EggOrigin(origin) = &ctx.encounter else {
        return no_relearn_expected(&ctx.specimen.relearn_moves);
    };
    let branches = egg_branches(ctx.db, &ctx.chain, origin);

    let mut first = None;
    let mut accepted = None;
    for branch in &branches {
        let (results, base) = egg_branch_relearn(ctx, branch);
        if results.iter().all(CheckResult::is_valid) {
            trace!(group = %branch.group, skip_baby = branch.skip_baby, "egg relearn branch accepted");
            accepted = Some((results, base));
            break;
        }
        first.get_or_insert((results, base));
    }

    match accepted.or(first) {
        Some((results, base)) => {
            ctx.relearn_base = Some(base);
            results
        }
        None => no_relearn_expected(&ctx.specimen.relearn_moves),
    }
}

/// Relearn slots of a hatched egg under one breeding branch: the leading
/// slots hold the base moves the egg must have had, the rest inherited moves.
fn egg_branch_relearn(ctx: &AnalysisContext<'_>, branch: &EggBranch) -> ([CheckResult; 4], Vec<u16>) {
    let db = ctx.db;
    let relearn = ctx.specimen.relearn_moves;
    let base = branch.base_moves(db, &ctx.chain);
    let mut pool = branch.inherited_pool(db, &ctx.chain);
    if db.rules.light_ball.contains(&ctx.specimen.species) {
        pool.push(VOLT_TACKLE);
    }

    let base_count = base.len().min(4);
    // Only moves outside the starting set push base moves out of the window.
    let inherited: Vec<u16> = relearn
        .iter()
        .copied()
        .filter(|&move_id| move_id != 0 && !base.contains(&move_id))
        .collect();
    let relearn_count = inherited.len();
    let mut distinct: Vec<u16> = base.iter().chain(&inherited).copied().collect();
    distinct.sort_unstable();
    distinct.dedup();

    let mut required_base = if relearn_count == 4 {
        0
    } else if base_count + relearn_count > 4 {
        4 - relearn_count
    } else {
        base_count
    };
    let present = relearn.iter().filter(|&&move_id| move_id != 0).count();
    if present < base.len().min(4) {
        required_base = distinct.len().min(4);
    }

    let mut results: [CheckResult; 4] = std::array::from_fn(|_| CheckResult::neutral(RELEARN));
    for slot in 0..required_base {
        if base.contains(&relearn[slot]) {
            results[slot] = CheckResult::valid("Base egg move.", RELEARN);
            continue;
        }
        for missing in results.iter_mut().take(required_base).skip(slot) {
            *missing = CheckResult::invalid("Base egg move missing.", RELEARN);
        }
        let expected: Vec<&str> = base.iter().map(|&move_id| db.move_name(move_id)).collect();
        results[required_base - 1].comment.push_str(&format!(
            "\nExpected the following Relearn Moves: {}.",
            expected.join(", ")
        ));
        break;
    }

    for slot in required_base..4 {
        let move_id = relearn[slot];
        results[slot] = if !pool.contains(&move_id) {
            CheckResult::invalid("Not an expected relearn move.", RELEARN)
        } else if move_id == 0 {
            CheckResult::valid("Empty", RELEARN)
        } else {
            CheckResult::valid("Relearn move.", RELEARN)
        };
    }
    (results, base)
}

/// A DexNav chain may add one egg move in the first relearn slot.
fn verify_dexnav(ctx: &mut AnalysisContext<'_>) -> [CheckResult; 4] {
    let relearn = ctx.specimen.relearn_moves;
    let branch = EggBranch {
        group: ctx.specimen.origin_group(),
        skip_baby: false,
    };
    let pool = branch.relearn_pool(ctx.db, &ctx.chain);

    let mut results: [CheckResult; 4] = std::array::from_fn(|_| CheckResult::neutral(RELEARN));
    if pool.contains(&relearn[0]) {
        ctx.relearn_base = Some(vec![relearn[0], 0, 0, 0]);
    } else {
        results[0] = CheckResult::invalid("Not an expected DexNav move.", RELEARN);
    }
    for slot in 1..4 {
        if relearn[slot] != 0 {
            results[slot] = CheckResult::invalid("Expected no Relearn Move in slot.", RELEARN);
        }
    }
    results
}
