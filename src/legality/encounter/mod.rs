//! Encounter resolution: decides which acquisition path produced a specimen.
//!
//! Candidates are tried in a fixed priority order and the first one that
//! survives its own sub-validation is committed to the analysis context.

mod egg;
mod legacy;
mod wild;

use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use schema::constants::species::{WURMPLE, WURMPLE_EVOLUTIONS};
use schema::{
    EncounterLink, EncounterSlot, EncounterStatic, EncounterTrade, GameGroup, MysteryGift,
};
use serde::Serialize;
use tracing::{debug, trace};

pub use egg::EggOrigin;

/// A wild slot compatible with the specimen and the ways its met level fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WildSlotMatch {
    pub location: u16,
    pub slot: EncounterSlot,
    /// Met level inside the slot's range.
    pub normal: bool,
    /// Met level up to four below the range.
    pub white_flute: bool,
    /// Met level up to four above the range.
    pub black_flute: bool,
    /// Met level equals the area maximum.
    pub pressure: bool,
    /// Met level above the range through a DexNav chain.
    pub dexnav: bool,
}

/// The acquisition path a specimen is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EncounterCandidate {
    Static(EncounterStatic),
    WildSlot(Vec<WildSlotMatch>),
    Trade(EncounterTrade),
    Link(EncounterLink),
    MysteryGift(MysteryGift),
    EggOrigin(EggOrigin),
    Unknown,
}

impl EncounterCandidate {
    pub fn name(&self) -> &'static str {
        match self {
            EncounterCandidate::Static(_) => "Static",
            EncounterCandidate::WildSlot(_) => "WildSlot",
            EncounterCandidate::Trade(_) => "Trade",
            EncounterCandidate::Link(_) => "Link",
            EncounterCandidate::MysteryGift(_) => "MysteryGift",
            EncounterCandidate::EggOrigin(_) => "EggOrigin",
            EncounterCandidate::Unknown => "Unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, EncounterCandidate::Unknown)
    }

    /// Moves the encounter itself teaches.
    pub fn fixed_moves(&self) -> &[u16] {
        match self {
            EncounterCandidate::Static(encounter) => &encounter.moves,
            EncounterCandidate::Trade(trade) => &trade.moves,
            EncounterCandidate::MysteryGift(gift) => &gift.moves,
            _ => &[],
        }
    }

    /// Required shininess, if the encounter locks it.
    pub fn shiny_lock(&self) -> Option<bool> {
        match self {
            EncounterCandidate::Static(encounter) => encounter.shiny,
            EncounterCandidate::Trade(trade) => trade.shiny,
            EncounterCandidate::Link(link) => link.shiny,
            EncounterCandidate::MysteryGift(gift) => gift.shiny,
            _ => None,
        }
    }

    pub fn is_dexnav(&self) -> bool {
        match self {
            EncounterCandidate::WildSlot(slots) => slots.iter().any(|m| m.dexnav),
            _ => false,
        }
    }
}

/// Commits exactly one origin candidate and its encounter verdict.
pub fn resolve(ctx: &mut AnalysisContext<'_>) {
    if ctx.specimen.is_legacy() {
        legacy::resolve(ctx);
    } else {
        resolve_modern(ctx);
    }
    debug!(
        candidate = ctx.encounter.name(),
        severity = %ctx.encounter_result.severity,
        "encounter committed"
    );
}

fn commit(ctx: &mut AnalysisContext<'_>, candidate: EncounterCandidate, result: CheckResult) {
    ctx.encounter = candidate;
    ctx.encounter_result = result;
}

fn resolve_modern(ctx: &mut AnalysisContext<'_>) {
    let specimen = ctx.specimen;

    if specimen.was_link() {
        let (candidate, result) = verify_link(ctx);
        commit(ctx, candidate, result);
        return;
    }

    let was_event = specimen.was_event() || specimen.was_event_egg();
    if was_event {
        let gifts = matching_gifts(ctx);
        if let Some(first) = gifts.first().cloned() {
            debug!(count = gifts.len(), "gift candidates matched");
            let result = gift_match_result(&first);
            ctx.gift_candidates = gifts;
            commit(ctx, EncounterCandidate::MysteryGift(first), result);
            return;
        }
    }

    if let Some(encounter) = matching_static(ctx) {
        commit(
            ctx,
            EncounterCandidate::Static(encounter),
            CheckResult::valid("Valid gift/static encounter.", CheckIdentifier::Encounter),
        );
        return;
    }

    if ctx.was_egg {
        let (origin, result) = egg::verify(ctx);
        commit(ctx, EncounterCandidate::EggOrigin(origin), result);
        return;
    }

    if let Some((slot, result)) = wild::friend_safari(ctx) {
        commit(ctx, EncounterCandidate::WildSlot(vec![slot]), result);
        return;
    }

    let slots = wild::matching_slots(ctx);
    if !slots.is_empty() {
        let result = wild::classify(&slots);
        commit(ctx, EncounterCandidate::WildSlot(slots), result);
        return;
    }

    if let Some(trade) = matching_trade(ctx) {
        commit(
            ctx,
            EncounterCandidate::Trade(trade),
            CheckResult::valid("Valid ingame trade.", CheckIdentifier::Encounter),
        );
        return;
    }

    let comment = if was_event {
        "Unable to match to a Mystery Gift in the database."
    } else {
        "Unknown encounter."
    };
    commit(
        ctx,
        EncounterCandidate::Unknown,
        CheckResult::invalid(comment, CheckIdentifier::Encounter),
    );
}

/// Encounter verdict for a committed gift.
pub(crate) fn gift_match_result(gift: &MysteryGift) -> CheckResult {
    CheckResult::valid(
        format!("Matches #{:04} ({})", gift.card_id, gift.title),
        CheckIdentifier::Encounter,
    )
}

fn form_matches(ctx: &AnalysisContext<'_>, species: u16, form: u8) -> bool {
    species != ctx.specimen.species || form == ctx.specimen.form
}

fn verify_link(ctx: &AnalysisContext<'_>) -> (EncounterCandidate, CheckResult) {
    let specimen = ctx.specimen;
    let Some(link) = ctx
        .db
        .links
        .iter()
        .find(|link| ctx.chain.contains_species(link.species) && link.level == specimen.met_level)
    else {
        return (
            EncounterCandidate::Unknown,
            CheckResult::invalid(
                "Invalid Link Gift: unable to find matching gift.",
                CheckIdentifier::Encounter,
            ),
        );
    };

    let group = specimen.origin_group();
    let result = if !link.games.contains(&group) {
        CheckResult::invalid(
            format!("Invalid Link Gift: can't obtain in {}.", group),
            CheckIdentifier::Encounter,
        )
    } else if link.shiny.is_some_and(|shiny| shiny != specimen.is_shiny()) {
        CheckResult::invalid("Shiny Link gift mismatch.", CheckIdentifier::Encounter)
    } else if specimen.fateful {
        CheckResult::invalid(
            "Invalid Link Gift: should not be Fateful Encounter.",
            CheckIdentifier::Encounter,
        )
    } else {
        CheckResult::valid("Valid Link gift.", CheckIdentifier::Encounter)
    };
    (EncounterCandidate::Link(link.clone()), result)
}

/// Gift records consistent with the specimen, in database order.
fn matching_gifts(ctx: &AnalysisContext<'_>) -> Vec<MysteryGift> {
    let specimen = ctx.specimen;
    ctx.db
        .gifts
        .iter()
        .filter(|gift| gift.generation == specimen.origin_generation())
        .filter(|gift| ctx.chain.contains_species(gift.species))
        .filter(|gift| form_matches(ctx, gift.species, gift.form))
        .filter(|gift| {
            if gift.is_egg {
                gift.egg_location == specimen.egg_location
            } else {
                gift.location == specimen.met_location
            }
        })
        .filter(|gift| gift.tid.map_or(true, |tid| tid == specimen.tid))
        .filter(|gift| gift.sid.map_or(true, |sid| sid == specimen.sid))
        .cloned()
        .collect()
}

fn matching_static(ctx: &AnalysisContext<'_>) -> Option<EncounterStatic> {
    let specimen = ctx.specimen;
    let candidates = ctx.db.statics.iter().filter(|encounter| {
        encounter.versions.contains(&specimen.version)
            && ctx.chain.contains_species(encounter.species)
            && form_matches(ctx, encounter.species, encounter.form)
            && encounter.location == specimen.met_location
            && encounter.level == specimen.met_level
            && encounter.egg_location == specimen.egg_location
    });

    for encounter in candidates {
        if encounter.relearn != specimen.relearn_moves {
            trace!(
                species = encounter.species,
                location = encounter.location,
                "static encounter discarded: relearn moves differ"
            );
            continue;
        }
        return Some(encounter.clone());
    }
    None
}

fn matching_trade(ctx: &AnalysisContext<'_>) -> Option<EncounterTrade> {
    let specimen = ctx.specimen;
    ctx.db
        .trades
        .iter()
        .find(|trade| {
            trade.versions.contains(&specimen.version)
                && ctx.chain.contains_species(trade.species)
                && form_matches(ctx, trade.species, trade.form)
                && trade.level == specimen.met_level
                && (trade.location == 0 || trade.location == specimen.met_location)
                && (trade.tid == 0 || trade.tid == specimen.tid)
        })
        .cloned()
}

/// Checks the encryption constant against the Wurmple evolution branch it
/// must have taken. Returns `None` when the specimen is not of that line or
/// its origin cannot tell.
pub fn split_evolution_check(ctx: &AnalysisContext<'_>) -> Option<CheckResult> {
    let specimen = ctx.specimen;
    let branch = (specimen.encryption_constant >> 16) % 10 / 5;

    if specimen.species == WURMPLE {
        let evolution = if branch == 0 { "Silcoon" } else { "Cascoon" };
        return Some(CheckResult::valid(
            format!("Wurmple Evolution: {}", evolution),
            CheckIdentifier::Ec,
        ));
    }

    let index = WURMPLE_EVOLUTIONS
        .iter()
        .position(|&species| species == specimen.species)?;
    let from_wurmple = ctx.was_egg
        || matches!(&ctx.encounter, EncounterCandidate::WildSlot(slots)
            if slots.iter().all(|m| m.slot.species == WURMPLE));
    if from_wurmple && branch != (index / 2) as u32 {
        return Some(CheckResult::invalid(
            "Wurmple evolution Encryption Constant mismatch.",
            CheckIdentifier::Ec,
        ));
    }
    None
}

/// Groups an egg of this generation could have been laid in.
pub(crate) fn egg_groups(generation: u8, origin: GameGroup, traded: bool) -> Vec<GameGroup> {
    match generation {
        6 if traded => vec![GameGroup::Xy, GameGroup::Oras],
        7 => vec![GameGroup::Sm],
        _ => vec![origin],
    }
}
