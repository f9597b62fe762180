use super::egg_groups;
use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use schema::constants::locations;
use schema::GameGroup;
use serde::Serialize;

/// A hatched origin and the game groups the egg could have come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EggOrigin {
    pub groups: Vec<GameGroup>,
    /// The egg changed hands before hatching.
    pub traded: bool,
}

pub(super) fn verify(ctx: &AnalysisContext<'_>) -> (EggOrigin, CheckResult) {
    let specimen = ctx.specimen;
    let generation = specimen.origin_generation();
    let origin = EggOrigin {
        groups: egg_groups(generation, specimen.origin_group(), specimen.was_traded_egg()),
        traded: specimen.was_traded_egg(),
    };
    (origin, verify_egg_data(ctx, generation))
}

fn verify_egg_data(ctx: &AnalysisContext<'_>, generation: u8) -> CheckResult {
    let specimen = ctx.specimen;
    if generation < 4 {
        // Earlier games keep no hatch data to check.
        return CheckResult::neutral(CheckIdentifier::Encounter);
    }
    if specimen.met_level != 1 {
        return CheckResult::invalid("Invalid met level, expected 1.", CheckIdentifier::Encounter);
    }
    if ctx.db.rules.no_hatch.contains(&specimen.species) {
        return CheckResult::invalid(
            "Species cannot be hatched from an egg.",
            CheckIdentifier::Encounter,
        );
    }

    if specimen.is_egg {
        return if specimen.egg_location == locations::LINK_TRADE {
            CheckResult::invalid(
                "Egg location shouldn't be 'traded' for an un-hatched egg.",
                CheckIdentifier::Encounter,
            )
        } else if specimen.met_location == locations::LINK_TRADE {
            CheckResult::valid("Valid traded un-hatched egg.", CheckIdentifier::Encounter)
        } else if specimen.met_location == 0 {
            CheckResult::valid("Valid un-hatched egg.", CheckIdentifier::Encounter)
        } else {
            CheckResult::invalid(
                "Invalid location for un-hatched egg (expected no met location).",
                CheckIdentifier::Encounter,
            )
        };
    }

    let group = specimen.origin_group();
    if group == GameGroup::Xy && specimen.egg_location == locations::INVALID_XY_EGG {
        return CheckResult::invalid("Invalid X/Y egg location.", CheckIdentifier::Encounter);
    }

    let hatch_locations = ctx.db.hatch_locations(group);
    if hatch_locations.is_empty() {
        return CheckResult::invalid("Invalid location for hatched egg.", CheckIdentifier::Encounter);
    }
    if hatch_locations.contains(&specimen.met_location) {
        CheckResult::valid(format!("Valid {} hatched egg.", group), CheckIdentifier::Encounter)
    } else {
        CheckResult::invalid(
            format!("Invalid {} location for hatched egg.", group),
            CheckIdentifier::Encounter,
        )
    }
}
