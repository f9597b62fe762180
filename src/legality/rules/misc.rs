use crate::legality::check::{CheckIdentifier, CheckResult, Severity};
use crate::legality::context::AnalysisContext;

pub(super) fn misc(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let mut lines = Vec::new();

    if specimen.format == 7 && specimen.pelago_event_status != 0 {
        lines.push(CheckResult::new(
            Severity::NotImplemented,
            "Poké Pelago event status is not checked.",
            CheckIdentifier::Misc,
        ));
    }

    if specimen.is_egg {
        if specimen.pp_ups.iter().any(|&ups| ups != 0) {
            lines.push(CheckResult::invalid("Cannot apply PP Ups to an Egg.", CheckIdentifier::Misc));
            return lines;
        }
        if specimen.contest_stats.iter().any(|&stat| stat != 0) {
            lines.push(CheckResult::invalid(
                "Cannot increase Contest Stats of an Egg.",
                CheckIdentifier::Misc,
            ));
            return lines;
        }
    }

    let id = CheckIdentifier::Fateful;
    if !ctx.encounter_valid() {
        lines.push(CheckResult::skipped("Fateful", id));
        return lines;
    }
    let fateful = specimen.fateful;
    let required = if ctx.gift().is_some() {
        Some(("Mystery Gift Fateful Encounter.", "Mystery Gift Fateful Encounter flag missing."))
    } else if ctx.static_encounter().is_some_and(|encounter| encounter.fateful) {
        Some(("Special ingame Fateful Encounter.", "Special ingame Fateful Encounter flag missing."))
    } else {
        None
    };
    match required {
        Some((present, _)) if fateful => lines.push(CheckResult::valid(present, id)),
        Some((_, missing)) => lines.push(CheckResult::invalid(missing, id)),
        None if fateful => lines.push(CheckResult::invalid("Fateful Encounter should not be checked.", id)),
        None => {}
    }
    lines
}
