use super::WildSlotMatch;
use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use schema::constants::{locations, species};
use schema::{EncounterArea, EncounterSlot, GameGroup, SlotType};

const FLUTE_RANGE: u8 = 4;
const FRIEND_SAFARI_LEVEL: u8 = 30;
const PRESSURE: &str = "Pressure/Hustle/Vital Spirit";

/// Friend Safari captures: X/Y only, at a fixed location and level.
pub(super) fn friend_safari(ctx: &AnalysisContext<'_>) -> Option<(WildSlotMatch, CheckResult)> {
    let specimen = ctx.specimen;
    if specimen.origin_group() != GameGroup::Xy
        || specimen.met_location != locations::FRIEND_SAFARI
        || specimen.met_level != FRIEND_SAFARI_LEVEL
    {
        return None;
    }
    let species = ctx
        .chain
        .species()
        .find(|species| ctx.db.friend_safari.contains(species))?;

    let slot = WildSlotMatch {
        location: locations::FRIEND_SAFARI,
        slot: EncounterSlot {
            species,
            form: 0,
            level_min: FRIEND_SAFARI_LEVEL,
            level_max: FRIEND_SAFARI_LEVEL,
            slot_type: SlotType::FriendSafari,
            allow_dexnav: false,
        },
        normal: true,
        white_flute: false,
        black_flute: false,
        pressure: false,
        dexnav: false,
    };

    let form = specimen.form;
    let comment = match specimen.species {
        species::FLOETTE | species::FLORGES if !matches!(form, 0 | 1 | 3) => {
            Err("Friend Safari: Not valid color.")
        }
        species::PUMPKABOO | species::GOURGEIST if form != 1 => {
            Err("Friend Safari: Not average sized.")
        }
        species::SAWSBUCK if form != 0 => Err("Friend Safari: Not Spring form."),
        _ => Ok("Valid Friend Safari encounter."),
    };
    let result = match comment {
        Ok(comment) => CheckResult::valid(comment, CheckIdentifier::Encounter),
        Err(comment) => CheckResult::invalid(comment, CheckIdentifier::Encounter),
    };
    Some((slot, result))
}

/// Every slot at the met location whose species and level fit the specimen.
pub(super) fn matching_slots(ctx: &AnalysisContext<'_>) -> Vec<WildSlotMatch> {
    let specimen = ctx.specimen;
    ctx.db
        .wild
        .iter()
        .filter(|area| {
            area.location == specimen.met_location && area.versions.contains(&specimen.version)
        })
        .flat_map(move |area| {
            area.slots
                .iter()
                .filter(move |slot| ctx.chain.contains_species(slot.species))
                .filter(move |slot| slot.species != specimen.species || slot.form == specimen.form)
                .filter_map(move |slot| match_slot(ctx, area, slot))
        })
        .collect()
}

fn match_slot(
    ctx: &AnalysisContext<'_>,
    area: &EncounterArea,
    slot: &EncounterSlot,
) -> Option<WildSlotMatch> {
    let specimen = ctx.specimen;
    let met = specimen.met_level;
    let generation = specimen.origin_generation();
    let flutes = generation == 6;

    let found = WildSlotMatch {
        location: area.location,
        slot: slot.clone(),
        normal: (slot.level_min..=slot.level_max).contains(&met),
        white_flute: flutes && met < slot.level_min && met.saturating_add(FLUTE_RANGE) >= slot.level_min,
        black_flute: flutes && met > slot.level_max && met <= slot.level_max.saturating_add(FLUTE_RANGE),
        pressure: generation >= 3 && met == area.pressure_level(),
        dexnav: specimen.origin_group() == GameGroup::Oras && slot.allow_dexnav && met > slot.level_max,
    };
    let any = found.normal || found.white_flute || found.black_flute || found.pressure || found.dexnav;
    any.then_some(found)
}

/// Encounter verdict for a non-empty set of matched wild slots.
pub(crate) fn classify(slots: &[WildSlotMatch]) -> CheckResult {
    let all_pressure = slots.iter().all(|m| m.pressure);
    let comment = if slots.iter().any(|m| m.normal) {
        if all_pressure {
            format!("Valid encounter at location ({}).", PRESSURE)
        } else {
            "Valid encounter at location.".to_string()
        }
    } else if slots.iter().any(|m| m.white_flute) {
        if all_pressure {
            format!("Valid encounter at location (White Flute & {}).", PRESSURE)
        } else {
            "Valid encounter at location (White Flute).".to_string()
        }
    } else if slots.iter().any(|m| m.black_flute) {
        if all_pressure {
            format!("Valid encounter at location (Black Flute & {}).", PRESSURE)
        } else {
            "Valid encounter at location (Black Flute).".to_string()
        }
    } else if slots.iter().any(|m| m.pressure) {
        format!("Valid encounter at location ({}).", PRESSURE)
    } else {
        "Valid encounter at location (DexNav).".to_string()
    };
    CheckResult::valid(comment, CheckIdentifier::Encounter)
}
