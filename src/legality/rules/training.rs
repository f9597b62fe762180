use crate::legality::check::{CheckIdentifier, CheckResult, Severity};
use crate::legality::context::AnalysisContext;
use schema::{MedalCategory, REGULAR_MISSION_COUNT};
use strum::IntoEnumIterator;

/// Super Training only existed in X/Y and OR/AS.
const TRAINING_GENERATION: u8 = 6;

pub(super) fn medals(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 6 {
        return Vec::new();
    }
    let id = CheckIdentifier::Training;
    if !ctx.encounter_valid() {
        return vec![CheckResult::skipped("Training", id)];
    }

    let training = &specimen.super_training;
    let generation = specimen.origin_generation();
    let mut lines = Vec::new();

    for category in MedalCategory::iter() {
        let completed = category.completed(training);
        if completed == 0 {
            continue;
        }
        if specimen.is_egg {
            lines.push(CheckResult::invalid(format!("{} missions on Egg.", category), id));
        } else if generation != TRAINING_GENERATION {
            lines.push(CheckResult::invalid(
                format!("{} missions are not available in game.", category),
                id,
            ));
        } else if category == MedalCategory::Distribution {
            lines.push(CheckResult::new(
                Severity::Fishy,
                "Distribution Super Training missions are not released.",
                id,
            ));
        }
    }

    if specimen.format >= 7 {
        if training.secret_unlocked {
            lines.push(CheckResult::invalid("Super Training unlocked flag invalid.", id));
        }
        if training.secret_complete {
            lines.push(CheckResult::invalid("Super Training complete flag invalid.", id));
        }
    } else {
        let all_done = MedalCategory::Regular.completed(training) == REGULAR_MISSION_COUNT;
        if all_done != training.secret_complete {
            lines.push(CheckResult::invalid("Super Training complete flag mismatch.", id));
        }
    }
    lines
}
