//! Origins for records shaped by generation 1/2 rules, whether still stored
//! in a legacy container or transferred through the Virtual Console service.

use super::{commit, split_evolution_check, wild, EggOrigin, EncounterCandidate, WildSlotMatch};
use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use schema::constants::{balls, locations, moves, species};
use schema::{EncounterStatic, GameGroup};
use tracing::debug;

const MAX_SPECIES_GEN1: u16 = 151;
const MAX_SPECIES_GEN2: u16 = 251;
/// Trainer id of the Japanese Mew distribution re-released on Virtual Console.
const VC_MEW_TID: u16 = 22796;
const LEGACY_HATCH_LEVEL: u8 = 5;

pub(super) fn resolve(ctx: &mut AnalysisContext<'_>) {
    let specimen = ctx.specimen;
    let gen1 = specimen.vc1() || specimen.format == 1;
    let ceiling = if gen1 { MAX_SPECIES_GEN1 } else { MAX_SPECIES_GEN2 };
    // Later generations added baby stages the legacy games never had.
    let base = ctx
        .chain
        .species()
        .filter(|&species| species <= ceiling)
        .last()
        .unwrap_or(specimen.species);

    if base > ceiling {
        commit(
            ctx,
            EncounterCandidate::Unknown,
            CheckResult::invalid("VC: Unobtainable species.", CheckIdentifier::Encounter),
        );
        return;
    }

    let groups: &[GameGroup] = if gen1 {
        &[GameGroup::Rby]
    } else {
        &[GameGroup::Gs, GameGroup::Crystal, GameGroup::Rby]
    };
    let (candidate, result) = search(ctx, groups, gen1, base);
    if let EncounterCandidate::EggOrigin(_) = candidate {
        ctx.was_egg = true;
    }
    ctx.original = Some(candidate.clone());
    commit(ctx, candidate, result);

    if specimen.encryption_constant != 0 {
        if let Some(result) = split_evolution_check(ctx).filter(|r| !r.is_valid()) {
            ctx.add_line(result);
        }
    }

    if specimen.format > 2 {
        verify_transfer(ctx, base);
    }
}

fn in_groups(groups: &[GameGroup], versions: &[schema::GameVersion]) -> bool {
    versions.iter().any(|version| groups.contains(&version.group()))
}

fn search(
    ctx: &AnalysisContext<'_>,
    groups: &[GameGroup],
    gen1: bool,
    base: u16,
) -> (EncounterCandidate, CheckResult) {
    let specimen = ctx.specimen;
    let db = ctx.db;
    let level = specimen.level;

    if let Some(encounter) = db.statics.iter().find(|encounter| {
        in_groups(groups, &encounter.versions)
            && ctx.chain.contains_species(encounter.species)
            && encounter.level <= level
    }) {
        return (
            EncounterCandidate::Static(encounter.clone()),
            CheckResult::valid("Valid gift/static encounter.", CheckIdentifier::Encounter),
        );
    }

    let slots: Vec<WildSlotMatch> = db
        .wild
        .iter()
        .filter(|area| in_groups(groups, &area.versions))
        .flat_map(move |area| {
            area.slots
                .iter()
                .filter(move |slot| {
                    ctx.chain.contains_species(slot.species) && slot.level_min <= level
                })
                .map(move |slot| WildSlotMatch {
                    location: area.location,
                    slot: slot.clone(),
                    normal: true,
                    white_flute: false,
                    black_flute: false,
                    pressure: false,
                    dexnav: false,
                })
        })
        .collect();
    if !slots.is_empty() {
        let result = wild::classify(&slots);
        return (EncounterCandidate::WildSlot(slots), result);
    }

    if let Some(trade) = db.trades.iter().find(|trade| {
        in_groups(groups, &trade.versions)
            && ctx.chain.contains_species(trade.species)
            && trade.level <= level
    }) {
        return (
            EncounterCandidate::Trade(trade.clone()),
            CheckResult::valid("Valid ingame trade.", CheckIdentifier::Encounter),
        );
    }

    if !gen1 && !db.rules.no_hatch.contains(&base) && level >= LEGACY_HATCH_LEVEL {
        let origin = EggOrigin {
            groups: vec![GameGroup::Gs, GameGroup::Crystal],
            traded: false,
        };
        return (
            EncounterCandidate::EggOrigin(origin),
            CheckResult::neutral(CheckIdentifier::Encounter),
        );
    }

    (
        EncounterCandidate::Unknown,
        CheckResult::invalid("Unknown encounter.", CheckIdentifier::Encounter),
    )
}

/// Replaces the legacy origin with the transfer encounter every Virtual
/// Console record carries in the modern format, and checks the transfer data.
fn verify_transfer(ctx: &mut AnalysisContext<'_>, base: u16) {
    let specimen = ctx.specimen;
    let special_origin = match &ctx.original {
        Some(EncounterCandidate::Static(encounter)) => encounter.special,
        Some(candidate) if !candidate.is_unknown() => false,
        _ => {
            ctx.add_line(CheckResult::invalid(
                "Unable to match an encounter from origin game.",
                CheckIdentifier::Encounter,
            ));
            return;
        }
    };

    let exempt = base == species::MEW && specimen.tid == VC_MEW_TID;
    if special_origin && !exempt {
        ctx.add_line(CheckResult::invalid(
            "Special encounter is not available to Virtual Console games.",
            CheckIdentifier::Encounter,
        ));
    }

    let transferred = if (specimen.vc1() && specimen.species > MAX_SPECIES_GEN1)
        || (specimen.vc2() && specimen.species > MAX_SPECIES_GEN2)
    {
        base
    } else {
        specimen.species
    };
    let is_mew = transferred == species::MEW;
    let ability = if ctx.db.rules.transfer_default_ability.contains(&transferred) {
        1
    } else {
        4
    };
    let encounter = EncounterStatic {
        species: transferred,
        form: 0,
        level: specimen.met_level,
        location: locations::TRANSFER_VIRTUAL_CONSOLE,
        egg_location: 0,
        versions: vec![specimen.version],
        special: false,
        ability,
        shiny: is_mew.then_some(false),
        gift: true,
        ball: balls::POKE,
        fateful: is_mew,
        iv3: false,
        moves: [0; 4],
        relearn: [0; 4],
        ribbon_wishing: false,
    };
    debug!(species = transferred, "virtual console transfer encounter synthesized");
    ctx.encounter = EncounterCandidate::Static(encounter);

    let result = if specimen.met_location != locations::TRANSFER_VIRTUAL_CONSOLE {
        CheckResult::invalid("Invalid met location.", CheckIdentifier::Encounter)
    } else if specimen.egg_location != 0 {
        CheckResult::invalid("Should not have an egg location.", CheckIdentifier::Encounter)
    } else if transferred == species::MEWTWO && specimen.knows_move(moves::PAY_DAY) {
        CheckResult::invalid(
            "Mewtwo cannot be transferred while knowing Pay Day.",
            CheckIdentifier::Encounter,
        )
    } else {
        CheckResult::neutral(CheckIdentifier::Encounter)
    };
    ctx.add_line(result);
}
