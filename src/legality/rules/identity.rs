use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use schema::constants::items::{
    ARCEUS_PLATES, ARCEUS_Z_CRYSTALS, CHILL_DRIVE, DOUSE_DRIVE, FIRST_MEMORY, GRISEOUS_ORB,
    LAST_MEMORY,
};
use schema::constants::species::*;
use schema::{GameVersion, GENDER_GENDERLESS};

pub(super) fn gender(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let Some(info) = ctx.db.personal_info(specimen.species) else {
        return Vec::new();
    };
    let id = CheckIdentifier::Gender;

    if info.is_genderless() {
        if specimen.gender != GENDER_GENDERLESS {
            return vec![CheckResult::invalid("Genderless Pokémon should not have a gender.", id)];
        }
    } else if specimen.gender == GENDER_GENDERLESS {
        return vec![CheckResult::invalid("Gendered Pokémon should have a gender.", id)];
    } else if let Some(fixed) = info.fixed_gender() {
        if specimen.gender != fixed {
            return vec![CheckResult::invalid("Gender does not match single-gender species.", id)];
        }
    }
    Vec::new()
}

pub(super) fn held_item(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    match ctx.db.rules.max_item_id.get(&specimen.format) {
        Some(&max) if specimen.held_item > max => {
            vec![CheckResult::invalid("Held item is unreleased.", CheckIdentifier::Form)]
        }
        _ => Vec::new(),
    }
}

pub(super) fn form(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 4 {
        return Vec::new();
    }
    if !ctx.encounter_valid() {
        return vec![CheckResult::skipped("Form", CheckIdentifier::Form)];
    }
    vec![form_result(ctx)]
}

fn form_result(ctx: &AnalysisContext<'_>) -> CheckResult {
    let specimen = ctx.specimen;
    let rules = &ctx.db.rules;
    let id = CheckIdentifier::Form;
    let form = specimen.form;
    let item = specimen.held_item;

    let form_count = ctx
        .db
        .personal_info(specimen.species)
        .map_or(1, |info| info.form_count.max(1));
    if form >= form_count {
        // Mothim keeps the cloak of the Burmy it evolved from.
        let exempt = specimen.species == UNOWN
            || (specimen.species == MOTHIM && form < 3)
            || (matches!(specimen.species, SCATTERBUG | SPEWPA) && form < 18);
        if !exempt {
            return CheckResult::invalid(
                format!(
                    "Form Count is out of range. Expected <= {}, got {}",
                    form_count - 1,
                    form
                ),
                id,
            );
        }
    }

    match specimen.species {
        PIKACHU if specimen.format == 6 => {
            let cosplay = ctx.static_encounter().is_some();
            if (form != 0) != cosplay {
                let comment = if cosplay {
                    "Cosplay Pikachu cannot have the default form."
                } else {
                    "Only Cosplay Pikachu can have this form."
                };
                return CheckResult::invalid(comment, id);
            }
        }
        PIKACHU if specimen.format == 7 => {
            if ctx.gift().is_some_and(|gift| gift.form != form) {
                return CheckResult::invalid("Event Pikachu cannot have the default form.", id);
            }
        }
        GIRATINA => {
            let origin_forme = item == GRISEOUS_ORB;
            if origin_forme && form != 1 {
                return CheckResult::invalid("Held item does not match Form.", id);
            }
            if !origin_forme && form == 1 {
                return CheckResult::invalid("Held item does not match Form.", id);
            }
        }
        ARCEUS => {
            let expected = held_item_form(item, specimen.format);
            if expected != form {
                return CheckResult::invalid("Held item does not match Form.", id);
            }
            if form != 0 {
                return CheckResult::valid("Held item matches Form.", id);
            }
        }
        GENESECT => {
            let expected = if (DOUSE_DRIVE..=CHILL_DRIVE).contains(&item) {
                (item - DOUSE_DRIVE + 1) as u8
            } else {
                0
            };
            if expected != form {
                return CheckResult::invalid("Held item does not match Form.", id);
            }
        }
        GRENINJA if form > 1 => {
            return CheckResult::invalid("Form cannot exist outside of a battle.", id);
        }
        SCATTERBUG | SPEWPA if form > 17 => {
            return CheckResult::invalid("Event Vivillon pattern on pre-evolution.", id);
        }
        VIVILLON if form > 17 => {
            return if ctx.gift().is_some() {
                CheckResult::valid("Valid Vivillon pattern.", id)
            } else {
                CheckResult::invalid("Invalid Vivillon pattern.", id)
            };
        }
        FLOETTE if form == 5 => {
            return if ctx.gift().is_some() {
                CheckResult::valid("Valid Eternal Flower encounter.", id)
            } else {
                CheckResult::invalid("Invalid Eternal Flower encounter.", id)
            };
        }
        ZYGARDE if form >= 4 => {
            return CheckResult::invalid("Form cannot exist outside of a battle.", id);
        }
        SILVALLY => {
            let expected = if (FIRST_MEMORY..=LAST_MEMORY).contains(&item) {
                (item - FIRST_MEMORY + 1) as u8
            } else {
                0
            };
            if expected != form {
                return CheckResult::invalid("Held item does not match Form.", id);
            }
        }
        MINIOR if form < 7 => {
            return CheckResult::invalid("Form cannot exist outside of a battle.", id);
        }
        SHAYMIN | FURFROU | HOOPA if form != 0 && specimen.box_slot.is_some() => {
            return CheckResult::invalid("Form cannot exist outside of Party.", id);
        }
        _ => {}
    }

    if specimen.format >= 7
        && specimen.origin_generation() < 7
        && form != 0
        && (specimen.species == PIKACHU || rules.alolan_origin_forms.contains(&specimen.species))
    {
        return CheckResult::invalid("Form cannot be obtained for pre-Alola generation games.", id);
    }
    if form > 0 && rules.battle_forms.contains(&specimen.species) {
        return CheckResult::invalid("Form cannot exist outside of a battle.", id);
    }
    CheckResult::valid("Form is Valid.", id)
}

/// Arceus form selected by a held plate, or by a Z-Crystal from format 7.
fn held_item_form(item: u16, format: u8) -> u8 {
    let plate = ARCEUS_PLATES.iter().position(|&plate| plate == item);
    let crystal = ARCEUS_Z_CRYSTALS
        .iter()
        .position(|&crystal| crystal == item)
        .filter(|_| format >= 7);
    plate.or(crystal).map_or(0, |index| index as u8 + 1)
}

/// Sun/Moon exclusive evolutions need the other game's handler to evolve.
pub(super) fn version_evolution(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 7 || !specimen.is_untraded() {
        return Vec::new();
    }
    let version = specimen.version;
    let exclusive = match specimen.species {
        LYCANROC => {
            ctx.was_egg
                && ((specimen.form == 0 && version == GameVersion::Moon)
                    || (specimen.form == 1 && version == GameVersion::Sun))
        }
        SOLGALEO | LUNALA => {
            let opposite = if specimen.species == SOLGALEO {
                GameVersion::Moon
            } else {
                GameVersion::Sun
            };
            let gifted = ctx
                .gift()
                .is_some_and(|gift| gift.species == specimen.species);
            version == opposite && !gifted
        }
        _ => false,
    };
    if exclusive {
        vec![CheckResult::invalid(
            "Version Specific evolution requires a trade to opposite version. A Handling Trainer is required.",
            CheckIdentifier::Evolution,
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::no_item(0, 7, 0)]
    #[case::flame_plate(ARCEUS_PLATES[1], 6, 2)]
    #[case::crystal_before_format_7(ARCEUS_Z_CRYSTALS[0], 6, 0)]
    #[case::crystal_in_format_7(ARCEUS_Z_CRYSTALS[0], 7, 1)]
    fn test_arceus_form_from_item(#[case] item: u16, #[case] format: u8, #[case] expected: u8) {
        assert_eq!(held_item_form(item, format), expected);
    }
}
