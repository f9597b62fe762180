use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::EncounterCandidate;
use schema::constants::balls::{BEAST, CHERISH, DREAM, FAST, MASTER, MOON, POKE, SAFARI, SPORT};
use schema::constants::locations::POKE_PELAGO;
use schema::constants::species::{PRIMARINA, ROWLET, SYLVEON};
use schema::GENDER_GENDERLESS;
use std::ops::RangeInclusive;

const APRICORN: RangeInclusive<u8> = FAST..=MOON;
/// Dusk, Heal and Quick Ball.
const GEN4_BALLS: RangeInclusive<u8> = 13..=15;
/// Great Ball through Premier Ball.
const GEN3_BALLS: RangeInclusive<u8> = 2..=12;
/// Johto starters, which never had their hidden ability in a gen 3 ball.
const JOHTO_STARTERS: RangeInclusive<u16> = 152..=160;
const ALOLA_NATIVES: RangeInclusive<u16> = 732..=785;
const LAST_KALOS_SPECIES: u16 = 721;
const LAST_UNOVA_SPECIES: u16 = 650;
const HIDDEN: u8 = 4;

fn verdict(ok: bool, valid: &str, invalid: &str) -> CheckResult {
    if ok {
        CheckResult::valid(valid, CheckIdentifier::Ball)
    } else {
        CheckResult::invalid(invalid, CheckIdentifier::Ball)
    }
}

pub(super) fn ball(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 3 || specimen.origin_generation() < 6 {
        return Vec::new();
    }
    if !ctx.encounter_valid() {
        return vec![CheckResult::skipped("Ball", CheckIdentifier::Ball)];
    }

    let ball = specimen.ball;
    let wild_balls = ctx.db.wild_balls(specimen.origin_generation());
    match &ctx.encounter {
        EncounterCandidate::MysteryGift(gift) => vec![verdict(
            ball == gift.ball,
            "Ball matches Mystery Gift.",
            "Ball does not match specified Mystery Gift Ball.",
        )],
        EncounterCandidate::Link(link) => vec![verdict(
            ball == link.ball,
            "Correct ball on Link gift.",
            "Incorrect ball on Link gift.",
        )],
        EncounterCandidate::Trade(_) => vec![verdict(
            ball == POKE,
            "Correct ball on ingame trade encounter.",
            "Incorrect ball on ingame trade encounter.",
        )],
        EncounterCandidate::Static(encounter) if encounter.gift => vec![verdict(
            ball == encounter.ball,
            "Correct ball on ingame gift.",
            "Incorrect ball on ingame gift.",
        )],
        EncounterCandidate::Static(_) => vec![verdict(
            wild_balls.contains(&ball),
            "Correct ball on ingame static encounter.",
            "Incorrect ball on ingame static encounter.",
        )],
        EncounterCandidate::WildSlot(_) => {
            let mut lines = Vec::new();
            if specimen.met_location == POKE_PELAGO && specimen.origin_generation() == 7 {
                lines.push(verdict(
                    ball == POKE,
                    "Correct ball on Poké Pelago encounter.",
                    "Incorrect ball on Poké Pelago encounter.",
                ));
            }
            lines.push(verdict(
                wild_balls.contains(&ball),
                "Correct ball on ingame encounter.",
                "Incorrect ball on ingame encounter.",
            ));
            lines
        }
        _ if ctx.was_egg => verify_egg_ball(ctx),
        _ => vec![verdict(
            ball == POKE,
            "Standard Poké Ball.",
            "No ball check satisfied, assuming illegal.",
        )],
    }
}

fn verify_egg_ball(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let ball = specimen.ball;
    let id = CheckIdentifier::Ball;

    if specimen.origin_generation() < 6 {
        return vec![verdict(ball == POKE, "Pokéball on egg.", "Ball should be Pokéball.")];
    }
    match ball {
        MASTER => return vec![CheckResult::invalid("Master Ball on egg origin.", id)],
        CHERISH => return vec![CheckResult::invalid("Cherish Ball on non-event.", id)],
        POKE => return vec![CheckResult::valid("Standard Poké Ball.", id)],
        _ => {}
    }
    match specimen.origin_generation() {
        6 => inherit_gen6(ctx),
        7 => inherit_gen7(ctx),
        _ => Vec::new(),
    }
}

/// Whether any species of the evolution chain appears in `table`.
fn lineage_in(ctx: &AnalysisContext<'_>, table: &[u16]) -> bool {
    ctx.chain.species().any(|species| table.contains(&species))
}

/// X/Y and OR/AS: only the mother passes her ball on.
fn inherit_gen6(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let rules = &ctx.db.rules;
    let ball = specimen.ball;
    let hidden = specimen.ability_number == HIDDEN;
    let id = CheckIdentifier::Ball;

    if specimen.gender == GENDER_GENDERLESS {
        return vec![verdict(ball == POKE, "Pokéball on genderless egg.", "Non-Pokéball on genderless egg.")];
    }
    if rules.breed_male_only.contains(&specimen.species) {
        return vec![verdict(ball == POKE, "Pokéball on Male-Only egg.", "Non-Pokéball on Male-Only egg.")];
    }

    let result = if ball == SAFARI {
        if !lineage_in(ctx, &rules.inherit_safari) {
            CheckResult::invalid("Safari Ball not possible for species.", id)
        } else if hidden {
            CheckResult::invalid("Safari Ball with Hidden Ability.", id)
        } else {
            CheckResult::valid("Safari Ball possible for species.", id)
        }
    } else if APRICORN.contains(&ball) {
        if !lineage_in(ctx, &rules.inherit_apricorn_6) {
            CheckResult::invalid("Apricorn Ball not possible for species.", id)
        } else if hidden {
            CheckResult::invalid("Apricorn Ball with Hidden Ability.", id)
        } else {
            CheckResult::valid("Apricorn Ball possible for species.", id)
        }
    } else if ball == SPORT {
        if !lineage_in(ctx, &rules.inherit_sport) {
            CheckResult::invalid("Sport Ball not possible for species.", id)
        } else if hidden {
            CheckResult::invalid("Sport Ball with Hidden Ability.", id)
        } else {
            CheckResult::valid("Sport Ball possible for species.", id)
        }
    } else if ball == DREAM {
        let mut lines = vec![verdict(
            lineage_in(ctx, &rules.inherit_dream),
            "Dream Ball possible for species.",
            "Dream Ball not possible for species.",
        )];
        if hidden && rules.ban_dream_hidden.contains(&specimen.species) {
            lines.push(CheckResult::invalid("Hidden Ability not obtainable from Dream World.", id));
        }
        return lines;
    } else if GEN4_BALLS.contains(&ball) {
        verdict(
            !rules.ban_gen4_ball_6.contains(&specimen.species),
            "Obtainable capture for Gen4 Ball.",
            "Unobtainable capture for Gen4 Ball.",
        )
    } else if GEN3_BALLS.contains(&ball) {
        if rules.ban_gen3_ball.contains(&specimen.species) {
            CheckResult::invalid("Unobtainable capture for Gen3 Ball.", id)
        } else if hidden && JOHTO_STARTERS.contains(&specimen.species) {
            CheckResult::invalid("Ball not possible for species with hidden ability.", id)
        } else {
            CheckResult::valid("Obtainable capture for Gen3 Ball.", id)
        }
    } else if specimen.species > LAST_UNOVA_SPECIES && specimen.species != SYLVEON {
        verdict(
            ctx.db.wild_balls(6).contains(&ball),
            "Obtainable ball for Kalos origin.",
            "Unobtainable ball for Kalos origin.",
        )
    } else if ball >= BEAST {
        CheckResult::invalid("Ball unobtainable in origin generation.", id)
    } else {
        CheckResult::invalid("No ball check satisfied, assuming illegal.", id)
    };
    vec![result]
}

/// Sun/Moon: either parent may pass a ball on.
fn inherit_gen7(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let rules = &ctx.db.rules;
    let ball = specimen.ball;
    let id = CheckIdentifier::Ball;

    let result = if (ROWLET..=PRIMARINA).contains(&specimen.species) {
        verdict(ball == POKE, "Ball possible.", "Only Poké Ball possible.")
    } else if ball == SAFARI {
        if lineage_in(ctx, &rules.inherit_safari) {
            CheckResult::valid("Safari Ball possible from Female parent.", id)
        } else if lineage_in(ctx, &rules.inherit_safari_male) {
            CheckResult::valid("Safari Ball possible from Male parent.", id)
        } else {
            CheckResult::invalid("Safari Ball not possible for species.", id)
        }
    } else if APRICORN.contains(&ball) {
        verdict(
            lineage_in(ctx, &rules.inherit_apricorn_7),
            "Apricorn Ball possible for species.",
            "Apricorn Ball not possible for species.",
        )
    } else if ball == SPORT {
        verdict(
            lineage_in(ctx, &rules.inherit_sport),
            "Sport Ball possible for species.",
            "Sport Ball not possible for species.",
        )
    } else if ball == DREAM {
        if lineage_in(ctx, &rules.inherit_dream) {
            CheckResult::valid("Dream Ball inheritance possible from Female species.", id)
        } else if lineage_in(ctx, &rules.inherit_dream_male) {
            CheckResult::valid("Dream Ball inheritance possible from Male/Genderless species.", id)
        } else {
            CheckResult::invalid("Dream Ball not possible for species.", id)
        }
    } else if GEN4_BALLS.contains(&ball) {
        verdict(
            !rules.ban_gen4_ball_7.contains(&specimen.species),
            "Obtainable capture for Gen4 Ball.",
            "Unobtainable capture for Gen4 Ball.",
        )
    } else if GEN3_BALLS.contains(&ball) {
        verdict(
            !rules.ban_gen3_ball_7.contains(&specimen.species),
            "Obtainable capture for Gen3 Ball.",
            "Unobtainable capture for Gen3 Ball.",
        )
    } else if ball == BEAST
        && (ALOLA_NATIVES.contains(&specimen.species)
            || lineage_in(ctx, &rules.past_gen_alolan_natives))
    {
        CheckResult::valid("Beast Ball possible for species.", id)
    } else if ball == BEAST && lineage_in(ctx, &rules.past_gen_alolan_scans) {
        CheckResult::valid("Scanned Beast Ball possible for species.", id)
    } else if specimen.species > LAST_KALOS_SPECIES {
        verdict(
            ctx.db.wild_balls(7).contains(&ball),
            "Obtainable ball for Alola origin.",
            "Unobtainable ball for Alola origin.",
        )
    } else if ball > BEAST {
        CheckResult::invalid("Ball unobtainable in origin generation.", id)
    } else {
        CheckResult::invalid("No ball check satisfied, assuming illegal.", id)
    };
    vec![result]
}
