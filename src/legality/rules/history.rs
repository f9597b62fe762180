//! Trade history, trainer memories and 3DS geography.

use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use crate::legality::moves::MovePool;
use schema::constants::moves::FLY;
use schema::constants::species::{MILOTIC, SMEARGLE};
use schema::{GameGroup, GameVersion, Memory};

/// Beauty a Feebas needs before it can evolve by level-up.
const MILOTIC_BEAUTY: u8 = 170;
/// Egg location of eggs received from the Day Care couple.
const DAYCARE_EGG: u16 = 60004;
const BEAUTY: usize = 1;

const MEMORY_CAPTURED: u8 = 1;
const MEMORY_HATCHED: u8 = 2;
const MEMORY_LINK_TRADE: u8 = 4;
const MEMORY_POKECENTER: u8 = 6;
const MEMORY_CAPTURED_SPECIES: u8 = 14;
const MEMORY_KNOWS_MOVE: [u8; 2] = [16, 48];
const MEMORY_FLY_RIDE: u8 = 21;
const MEMORY_RELEARNED: u8 = 49;

pub(super) fn history(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    if !ctx.encounter_valid() {
        return vec![CheckResult::skipped("History", CheckIdentifier::History)];
    }
    vec![history_result(ctx)]
}

fn history_result(ctx: &AnalysisContext<'_>) -> CheckResult {
    let specimen = ctx.specimen;
    let invalid = |comment: &str| CheckResult::invalid(comment, CheckIdentifier::History);
    let generation = specimen.origin_generation();
    let format = specimen.format;

    if generation < 6 {
        if format < 6 {
            return CheckResult::valid("No History Block to check.", CheckIdentifier::History);
        }
        if specimen.ot_affection > 0 {
            return invalid("OT Affection should be zero.");
        }
        if !specimen.ot_memory.is_empty() {
            return invalid("Should not have OT memories.");
        }
    }
    if format >= 6 && generation != format && specimen.current_handler != 1 {
        return invalid("Current handler cannot be past gen OT for transferred specimen.");
    }
    if specimen.ht_gender > 1 {
        return invalid(&format!("HT Gender invalid {}.", specimen.ht_gender));
    }

    if let Some(gift) = ctx.gift() {
        let modern_ot = gift.generation >= 6 && gift.has_fixed_ot();
        if modern_ot {
            let base_friendship = ctx
                .db
                .personal_info(gift.species)
                .map(|info| info.base_friendship);
            if base_friendship != Some(specimen.ot_friendship) {
                return invalid("Event OT Friendship does not match base friendship.");
            }
        }
        if modern_ot || (gift.generation < 6 && format >= 6) {
            if specimen.ot_affection != 0 {
                return invalid("Event OT Affection should be zero.");
            }
            if specimen.current_handler != 1 {
                return invalid("Current handler should not be Event OT.");
            }
        }
    }

    // Geolocations fill from the front without gaps.
    let mut ended = false;
    for geo in &specimen.geolocations {
        if ended && geo.country != 0 {
            return invalid("Geolocation Memories invalid.");
        }
        if geo.country != 0 {
            continue;
        }
        if geo.region != 0 {
            return invalid("Geolocation Region without Country.");
        }
        ended = true;
    }

    let untraded = !specimen.was_event() && specimen.ht_name.is_empty();
    if format >= 7 {
        let has_geo = specimen
            .geolocations
            .iter()
            .any(|geo| geo.country != 0 || geo.region != 0);
        if specimen.vc1() && !has_geo {
            return invalid("Geolocation Memories should be present.");
        }
        if generation >= 7 && specimen.contest_stats.iter().any(|&stat| stat > 0) {
            return invalid("Contest stats on SM origin should be zero.");
        }
        if untraded {
            if let Some(result) = verify_untraded_handler(ctx) {
                return result;
            }
            let caught_evolved = ctx
                .wild_slots()
                .is_some_and(|slots| slots.iter().any(|found| found.slot.species == specimen.species))
                || ctx
                    .static_encounter()
                    .is_some_and(|encounter| encounter.species == specimen.species);
            if ctx.chain.requires_trade() && !caught_evolved {
                if let Some(result) = verify_untraded_evolution(ctx) {
                    return result;
                }
            }
        }
        return CheckResult::valid("S/M History Block is valid.", CheckIdentifier::History);
    }

    let link_without_ot = specimen.was_link() && ctx.link().is_some_and(|link| !link.ot);
    let first_country = specimen.geolocations[0].country;
    let not_traded = !specimen.was_event()
        && !link_without_ot
        && (specimen.ht_name.is_empty() || first_country == 0);
    if not_traded {
        if !specimen.ht_name.is_empty() {
            return invalid("GeoLocation Memory -- HT Name present but has no previous Country.");
        }
        if first_country != 0 {
            return invalid("GeoLocation Memory -- Previous country of residence but no Handling Trainer.");
        }
        if specimen.ht_memory.memory != 0 {
            return invalid("Memory -- Handling Trainer memory present but no Handling Trainer.");
        }
        if let Some(result) = verify_untraded_handler(ctx) {
            return result;
        }
        if specimen.origin_group() == GameGroup::Xy && specimen.contest_stats.iter().any(|&stat| stat > 0) {
            return invalid("Untraded -- Contest stats on XY should be zero.");
        }
        let caught_evolved = ctx
            .wild_slots()
            .is_some_and(|slots| slots.iter().any(|found| found.slot.species == specimen.species));
        if ctx.chain.requires_trade() && !caught_evolved {
            if let Some(result) = verify_untraded_evolution(ctx) {
                return result;
            }
        }
    } else if format == 6 && specimen.ht_memory.memory == 0 {
        return invalid("Memory -- missing Handling Trainer Memory.");
    }

    if specimen.is_egg {
        if specimen.ht_memory.memory != 0 {
            return invalid("Memory -- has Handling Trainer Memory.");
        }
        if specimen.ot_memory.memory != 0 {
            return invalid("Memory -- has Original Trainer Memory.");
        }
    } else if !ctx.gift().is_some_and(|gift| gift.generation == 6) {
        if (specimen.ot_memory.memory == 0) == (generation == 6) {
            return invalid("Memory -- missing Original Trainer Memory.");
        }
        if generation < 6 && specimen.ot_affection != 0 {
            return invalid("OT Affection should be zero.");
        }
    }
    CheckResult::valid("History is valid.", CheckIdentifier::History)
}

fn verify_untraded_handler(ctx: &AnalysisContext<'_>) -> Option<CheckResult> {
    let specimen = ctx.specimen;
    let comment = if specimen.current_handler != 0 {
        "Untraded -- Current handler should not be the Handling Trainer."
    } else if specimen.ht_friendship != 0 {
        "Untraded -- Handling Trainer Friendship should be zero."
    } else if specimen.ht_affection != 0 {
        "Untraded -- Handling Trainer Affection should be zero."
    } else {
        return None;
    };
    Some(CheckResult::invalid(comment, CheckIdentifier::History))
}

/// An untraded specimen whose chain needs a trade; only Milotic has a
/// level-up alternative.
fn verify_untraded_evolution(ctx: &AnalysisContext<'_>) -> Option<CheckResult> {
    let specimen = ctx.specimen;
    let comment = if specimen.species != MILOTIC {
        "Untraded -- requires a trade evolution."
    } else if specimen.contest_stats[BEAUTY] < MILOTIC_BEAUTY {
        "Untraded -- Beauty is not high enough for Level-up Evolution."
    } else if specimen.level == 1 {
        "Untraded -- Beauty is high enough but still Level 1."
    } else {
        return None;
    };
    Some(CheckResult::invalid(comment, CheckIdentifier::History))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Original,
    Handling,
}

impl Handler {
    fn prefix(self) -> &'static str {
        match self {
            Handler::Original => "OT ",
            Handler::Handling => "HT ",
        }
    }
}

pub(super) fn memory(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 6 {
        return Vec::new();
    }
    let history_valid = ctx
        .latest(CheckIdentifier::History)
        .map_or(true, CheckResult::is_valid);
    if !history_valid {
        return Vec::new();
    }
    let mut lines = Vec::new();
    verify_ot_memory(ctx, &mut lines);
    verify_ht_memory(ctx, &mut lines);
    lines
}

/// One line per non-zero field of a memory that must be blank.
fn unexpected_memory_fields(memory: &Memory, lines: &mut Vec<CheckResult>) {
    let fields = [
        (memory.memory != 0, "Should not have an OT Memory."),
        (memory.intensity != 0, "Should not have an OT Memory Intensity value."),
        (memory.text_var != 0, "Should not have an OT Memory TextVar value."),
        (memory.feeling != 0, "Should not have an OT Memory Feeling value."),
    ];
    for (present, comment) in fields {
        if present {
            lines.push(CheckResult::invalid(comment, CheckIdentifier::Memory));
        }
    }
}

fn gift_memory_fields(actual: &Memory, expected: &Memory, lines: &mut Vec<CheckResult>) {
    let fields = [
        ("", u32::from(actual.memory), u32::from(expected.memory)),
        (" Intensity", u32::from(actual.intensity), u32::from(expected.intensity)),
        (" TextVar", u32::from(actual.text_var), u32::from(expected.text_var)),
        (" Feeling", u32::from(actual.feeling), u32::from(expected.feeling)),
    ];
    for (field, actual, expected) in fields {
        if actual == expected {
            continue;
        }
        let comment = if expected == 0 {
            let suffix = if field.is_empty() { String::new() } else { format!("{} value", field) };
            format!("Event should not have an OT Memory{}.", suffix)
        } else {
            format!("Event OT Memory{} should be index {}.", field, expected)
        };
        lines.push(CheckResult::invalid(comment, CheckIdentifier::Memory));
    }
}

fn verify_ot_memory(ctx: &AnalysisContext<'_>, lines: &mut Vec<CheckResult>) {
    let specimen = ctx.specimen;
    let memory = &specimen.ot_memory;
    let generation = specimen.origin_generation();
    let id = CheckIdentifier::Memory;

    if generation < 6 {
        unexpected_memory_fields(memory, lines);
        return;
    }
    if ctx.trade().is_some() {
        lines.push(CheckResult::valid("OT Memory (Ingame Trade) is valid.", id));
        return;
    }
    match ctx.gift() {
        Some(gift) if gift.generation >= 6 => gift_memory_fields(memory, &gift.ot_memory, lines),
        _ if generation == 7 => {
            unexpected_memory_fields(memory, lines);
            return;
        }
        _ => {}
    }

    let group = specimen.origin_group();
    match memory.memory {
        MEMORY_HATCHED => {
            if !ctx.was_egg && specimen.egg_location != DAYCARE_EGG {
                lines.push(CheckResult::invalid("OT Memory: OT did not hatch this.", id));
            }
        }
        MEMORY_LINK_TRADE => {
            lines.push(CheckResult::invalid(
                "OT Memory: Link Trade is not a valid first memory.",
                id,
            ));
            return;
        }
        MEMORY_POKECENTER => {
            let center = ctx
                .db
                .rules
                .pokecenter_locations
                .iter()
                .find(|center| center.location == memory.text_var);
            if let Some(center) = center {
                let elsewhere = matches!(group, GameGroup::Xy | GameGroup::Oras) && center.group != group;
                if elsewhere {
                    lines.push(CheckResult::invalid(
                        "OT Memory: Location doesn't exist on Origin Game region.",
                        id,
                    ));
                }
            }
            lines.push(common_memory(ctx, Handler::Original));
            return;
        }
        MEMORY_CAPTURED_SPECIES => {
            lines.push(captured_species(ctx, Handler::Original, Some(specimen.version)));
            return;
        }
        _ => {}
    }

    let rules = &ctx.db.rules;
    if group == GameGroup::Xy && rules.memory_not_xy.contains(&memory.memory) {
        lines.push(CheckResult::invalid("OT Memory: OR/AS exclusive memory on X/Y origin.", id));
    }
    if group == GameGroup::Oras && rules.memory_not_ao.contains(&memory.memory) {
        lines.push(CheckResult::invalid("OT Memory: X/Y exclusive memory on OR/AS origin.", id));
    }
    lines.push(common_memory(ctx, Handler::Original));
}

fn verify_ht_memory(ctx: &AnalysisContext<'_>, lines: &mut Vec<CheckResult>) {
    let specimen = ctx.specimen;
    let memory = &specimen.ht_memory;
    let id = CheckIdentifier::Memory;

    if matches!(specimen.origin_generation(), 1 | 7) {
        if !specimen.vc1() && memory.memory == 0 {
            return;
        }
        // The only handler memory these can carry is the transfer's link trade.
        let fields = [
            (memory.memory != MEMORY_LINK_TRADE, "Should have a Link Trade HT Memory."),
            (memory.text_var != 0, "Should have a HT Memory TextVar value (somewhere)."),
            (memory.intensity != 1, "Should have a HT Memory Intensity value (1st)."),
            (memory.feeling > 10, "Should have a HT Memory Feeling value 0-9."),
        ];
        for (wrong, comment) in fields {
            if wrong {
                lines.push(CheckResult::invalid(comment, id));
            }
        }
        return;
    }

    match memory.memory {
        0 => {
            if !specimen.ht_name.is_empty() {
                lines.push(CheckResult::invalid("HT Memory is missing.", id));
            }
        }
        MEMORY_CAPTURED => lines.push(CheckResult::invalid(
            "HT Memory: Handling Trainer did not capture this.",
            id,
        )),
        MEMORY_HATCHED => lines.push(CheckResult::invalid(
            "HT Memory: Handling Trainer did not hatch this.",
            id,
        )),
        MEMORY_CAPTURED_SPECIES => lines.push(captured_species(ctx, Handler::Handling, None)),
        _ => lines.push(common_memory(ctx, Handler::Handling)),
    }
}

/// Whether `species` can be caught in the games of `generation`, or in one
/// game when `version` is given.
fn can_be_captured(ctx: &AnalysisContext<'_>, species: u16, generation: u8, version: Option<GameVersion>) -> bool {
    let in_games = |versions: &[GameVersion]| match version {
        Some(version) => versions.contains(&version),
        None => versions.iter().any(|v| v.generation() == generation),
    };
    let wild = ctx.db.wild.iter().any(|area| {
        in_games(&area.versions) && area.slots.iter().any(|slot| slot.species == species)
    });
    let fixed = ctx
        .db
        .statics
        .iter()
        .any(|encounter| !encounter.gift && encounter.species == species && in_games(&encounter.versions));
    wild || fixed
}

fn captured_species(ctx: &AnalysisContext<'_>, handler: Handler, version: Option<GameVersion>) -> CheckResult {
    let specimen = ctx.specimen;
    let memory = match handler {
        Handler::Original => &specimen.ot_memory,
        Handler::Handling => &specimen.ht_memory,
    };
    let prefix = handler.prefix();
    if can_be_captured(ctx, memory.text_var, specimen.origin_generation(), version) {
        CheckResult::valid(
            format!("{}Memory: Captured Species can be captured in game.", prefix),
            CheckIdentifier::Memory,
        )
    } else {
        CheckResult::invalid(
            format!("{}Memory: Captured Species can not be captured in game.", prefix),
            CheckIdentifier::Memory,
        )
    }
}

/// Move knowledge in the X/Y and OR/AS tables, where memories were written.
fn gen6_machine_moves<'a>(ctx: &'a AnalysisContext<'a>, species: u16) -> impl Iterator<Item = u16> + 'a {
    [GameGroup::Xy, GameGroup::Oras]
        .into_iter()
        .flat_map(move |group| ctx.db.machine_moves(group, species).iter().copied())
}

fn can_relearn(ctx: &AnalysisContext<'_>, move_id: u16) -> bool {
    ctx.chain.species().any(|species| {
        [GameGroup::Xy, GameGroup::Oras].into_iter().any(|group| {
            ctx.db
                .learnset(group, species)
                .is_some_and(|learnset| learnset.can_learn_move(move_id))
        })
    })
}

fn common_memory(ctx: &AnalysisContext<'_>, handler: Handler) -> CheckResult {
    let specimen = ctx.specimen;
    let memory = match handler {
        Handler::Original => &specimen.ot_memory,
        Handler::Handling => &specimen.ht_memory,
    };
    let prefix = handler.prefix();
    let invalid = |comment: &str| CheckResult::invalid(format!("{}{}", prefix, comment), CheckIdentifier::Memory);
    let rules = &ctx.db.rules;
    let argument = memory.text_var;

    let move_memory = rules
        .move_memories
        .iter()
        .find(|(id, _)| *id == memory.memory)
        .map(|&(_, move_id)| move_id);
    if let Some(move_id) = move_memory {
        let learnable = ctx
            .chain
            .species()
            .any(|species| gen6_machine_moves(ctx, species).any(|m| m == move_id));
        if specimen.species != SMEARGLE && !learnable {
            return invalid("Memory: Species cannot learn this move.");
        }
    }

    if memory.memory == MEMORY_POKECENTER
        && !rules
            .pokecenter_locations
            .iter()
            .any(|center| center.location == argument)
    {
        return invalid("Memory: Location doesn't have a Pokemon Center.");
    }
    if memory.memory == MEMORY_FLY_RIDE && !gen6_machine_moves(ctx, argument).any(|m| m == FLY) {
        return invalid("Memory: Argument Species cannot learn Fly.");
    }
    if MEMORY_KNOWS_MOVE.contains(&memory.memory) {
        let pool = MovePool::compute(ctx.db, &ctx.chain);
        let known = argument != 0
            && (pool.level_up.contains(&argument)
                || pool.machine.contains(&argument)
                || pool.tutor.contains(&argument)
                || specimen.relearn_moves.contains(&argument));
        if !known {
            return invalid("Memory: Species cannot know this move.");
        }
    }
    if memory.memory == MEMORY_RELEARNED && (argument == 0 || !can_relearn(ctx, argument)) {
        return invalid("Memory: Species cannot relearn this move.");
    }
    CheckResult::valid(format!("{}Memory is valid.", prefix), CheckIdentifier::Memory)
}

pub(super) fn region(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 6 {
        return Vec::new();
    }
    let country = specimen.country;
    let in_region = match specimen.console_region {
        // Japan
        0 => country == 1,
        // Americas
        1 => (8..=52).contains(&country) || [153, 156, 168, 174, 186].contains(&country),
        // Europe
        2 => (64..=127).contains(&country) || [169, 184, 185].contains(&country),
        // China
        4 => country == 144 || country == 160,
        // Korea
        5 => country == 136,
        // Taiwan
        6 => country == 128,
        _ => {
            return vec![CheckResult::invalid("Invalid Console Region.", CheckIdentifier::Geography)];
        }
    };
    vec![if in_region {
        CheckResult::valid("Geolocation: Country is in 3DS region.", CheckIdentifier::Geography)
    } else {
        CheckResult::invalid("Geolocation: Country is not in 3DS region.", CheckIdentifier::Geography)
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gift_memory_messages() {
        let actual = Memory {
            memory: 3,
            intensity: 0,
            text_var: 5,
            feeling: 0,
        };
        let expected = Memory {
            memory: 0,
            intensity: 1,
            text_var: 5,
            feeling: 0,
        };
        let mut lines = Vec::new();
        gift_memory_fields(&actual, &expected, &mut lines);

        let comments: Vec<&str> = lines.iter().map(|line| line.comment.as_str()).collect();
        assert_eq!(
            comments,
            vec![
                "Event should not have an OT Memory.",
                "Event OT Memory Intensity should be index 1.",
            ]
        );
    }
}
