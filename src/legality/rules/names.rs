use crate::database::GameDatabase;
use crate::legality::check::{CheckIdentifier, CheckResult, Severity};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::EncounterCandidate;
use schema::constants::species::MEW;
use schema::{EncounterTrade, GameGroup};

const ENGLISH: u8 = 2;
/// Card id and trainer id pair of the demo gift whose nickname is the
/// localized species name of another language.
const DEMO_CARD: u16 = 2046;
const DEMO_TRAINER: u32 = 0x79F5_7B49;

/// Language of a legacy record, guessed from the species-name table that
/// contains `name`.
fn legacy_language(db: &GameDatabase, name: &str) -> u8 {
    db.species_names
        .iter()
        .position(|names| names.iter().any(|species| species == name))
        .and_then(|index| u8::try_from(index).ok())
        .unwrap_or(ENGLISH)
}

fn species_name(db: &GameDatabase, language: u8, species: u16) -> Option<&str> {
    db.species_names(language)?
        .get(usize::from(species))
        .map(String::as_str)
}

pub(super) fn nickname(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let db = ctx.db;
    let id = CheckIdentifier::Nickname;
    let mut lines = Vec::new();

    if specimen.nickname.is_empty() {
        lines.push(CheckResult::invalid("Nickname is empty.", id));
        return lines;
    }
    let known = db
        .species_names
        .iter()
        .any(|names| usize::from(specimen.species) < names.len());
    if !known {
        lines.push(CheckResult::new(
            Severity::Indeterminate,
            "Species index invalid for Nickname comparison.",
            id,
        ));
        return lines;
    }

    if specimen.vc() {
        let language = legacy_language(db, &specimen.nickname);
        let limit = if language == ENGLISH { 10 } else { 5 };
        if specimen.nickname.chars().count() > limit {
            lines.push(CheckResult::invalid("Nickname too long.", id));
        }
    }

    if !ctx.encounter_valid() {
        lines.push(CheckResult::skipped("Nickname", id));
        return lines;
    }

    if specimen.format <= 6 && specimen.language > 8 {
        lines.push(CheckResult::new(Severity::Indeterminate, "Language ID > 8.", CheckIdentifier::Language));
        return lines;
    }
    if specimen.language > 10 {
        lines.push(CheckResult::new(Severity::Indeterminate, "Language ID > 10.", CheckIdentifier::Language));
        return lines;
    }

    let trade = match (&ctx.encounter, &ctx.original) {
        (EncounterCandidate::Trade(trade), _) => Some(trade),
        (_, Some(EncounterCandidate::Trade(trade))) if specimen.is_legacy() => Some(trade),
        _ => None,
    };
    if let Some(trade) = trade {
        lines.push(verify_trade_names(ctx, trade));
        return lines;
    }

    if specimen.is_egg {
        lines.push(verify_egg_name(ctx));
        return lines;
    }

    let nickname = specimen.nickname.replace('\'', "’");
    if specimen.is_nicknamed {
        let found = db.species_names.iter().enumerate().find_map(|(language, names)| {
            names
                .iter()
                .skip(1)
                .position(|name| *name == nickname)
                .map(|index| (language, index + 1))
        });
        lines.push(match found {
            Some((language, index))
                if index == usize::from(specimen.species)
                    && language != usize::from(specimen.language) =>
            {
                CheckResult::fishy("Nickname matches another species name (+language).", id)
            }
            Some(_) => CheckResult::fishy("Nickname flagged, matches species name.", id),
            None => CheckResult::valid("Nickname does not match another species name.", id),
        });
        return lines;
    }

    if specimen.format < 3 {
        // Legacy records only carry the current name.
        lines.push(CheckResult::valid("Nickname matches species name.", id));
        return lines;
    }

    let any_language = (specimen.was_traded_egg() || ctx.chain.has_evolved())
        && db.species_names.iter().any(|names| {
            names
                .get(usize::from(specimen.species))
                .is_some_and(|name| *name == nickname)
        });
    let own_language =
        species_name(db, specimen.language, specimen.species).is_some_and(|name| name == nickname);

    lines.push(if any_language || own_language {
        CheckResult::valid("Nickname matches species name.", id)
    } else {
        let trainer = (u32::from(specimen.sid) << 16) | u32::from(specimen.tid);
        let demo = ctx.gift().is_some_and(|gift| gift.card_id == DEMO_CARD) && trainer == DEMO_TRAINER;
        if demo {
            CheckResult::valid("Nickname matches demo language name.", id)
        } else {
            CheckResult::invalid("Nickname does not match species name.", id)
        }
    });
    lines
}

fn verify_egg_name(ctx: &AnalysisContext<'_>) -> CheckResult {
    let specimen = ctx.specimen;
    let id = CheckIdentifier::Egg;
    if !specimen.is_nicknamed && specimen.format != 7 {
        return CheckResult::invalid("Eggs must be nicknamed.", id);
    }
    match species_name(ctx.db, specimen.language, 0) {
        Some(egg) if egg == specimen.nickname => CheckResult::valid("Egg matches language Egg name.", id),
        _ => CheckResult::invalid("Egg name does not match language Egg name.", id),
    }
}

fn verify_trade_names(ctx: &AnalysisContext<'_>, trade: &EncounterTrade) -> CheckResult {
    let specimen = ctx.specimen;

    if specimen.is_legacy() {
        // Generation 1 trades carry no trainer id; only the OT name is fixed.
        if trade.tid == 0 && !trade.ot_names.is_empty() && !trade.ot_names.contains(&specimen.ot_name) {
            return CheckResult::invalid("Incorrect OT name for RBY in-game trade.", CheckIdentifier::Trainer);
        }
        return CheckResult::neutral(CheckIdentifier::Nickname);
    }
    if specimen.origin_group() == GameGroup::Sm {
        return CheckResult::new(
            Severity::NotImplemented,
            "Ingame Trade for Sun/Moon not implemented.",
            CheckIdentifier::Nickname,
        );
    }
    if trade.nicknames.is_empty() || trade.ot_names.is_empty() {
        return CheckResult::new(
            Severity::Indeterminate,
            "Ingame Trade invalid version?",
            CheckIdentifier::Nickname,
        );
    }

    let language = usize::from(specimen.language);
    let (Some(nickname), Some(ot_name)) = (trade.nicknames.get(language), trade.ot_names.get(language)) else {
        return CheckResult::new(
            Severity::Indeterminate,
            "Ingame Trade invalid lookup?",
            CheckIdentifier::Nickname,
        );
    };
    if *nickname != specimen.nickname {
        CheckResult::fishy("Ingame Trade nickname has been altered.", CheckIdentifier::Nickname)
    } else if *ot_name != specimen.ot_name {
        CheckResult::invalid("Ingame Trade OT has been altered.", CheckIdentifier::Trainer)
    } else {
        CheckResult::valid("Ingame Trade OT/Nickname have not been altered.", CheckIdentifier::Nickname)
    }
}

pub(super) fn trainer(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if matches!(ctx.encounter, EncounterCandidate::Trade(_)) {
        return Vec::new();
    }
    let id = CheckIdentifier::Trainer;
    let mut lines = Vec::new();

    let (tid, sid) = (specimen.tid, specimen.sid);
    if tid == 0 && sid == 0 {
        lines.push(CheckResult::fishy("TID and SID are zero.", id));
    } else if specimen.vc() {
        if sid != 0 {
            lines.push(CheckResult::invalid("SID should be 0.", id));
        }
    } else if tid == sid {
        lines.push(CheckResult::fishy("TID and SID are equal.", id));
    } else if tid == 0 {
        lines.push(CheckResult::fishy("TID is zero.", id));
    } else if sid == 0 {
        lines.push(CheckResult::fishy("SID is zero.", id));
    }

    if specimen.vc() {
        let language = legacy_language(ctx.db, &specimen.nickname);
        let limit = if language == ENGLISH { 7 } else { 5 };
        if specimen.ot_name.chars().count() > limit {
            lines.push(CheckResult::invalid("OT Name too long.", id));
        }
        if specimen.species == MEW && !matches!(specimen.ot_name.as_str(), "GF" | "ゲーフリ") {
            lines.push(CheckResult::invalid("Incorrect event OT Name.", id));
        }
    }
    lines
}
