use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::EncounterCandidate;
use schema::{GameVersion, SlotType};

const HIDDEN: u8 = 4;

pub(super) fn ability(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 3 {
        return Vec::new();
    }
    let id = CheckIdentifier::Ability;
    let Some(info) = ctx.db.personal_info(specimen.species) else {
        return Vec::new();
    };
    let abilities = info.abilities;
    let Some(index) = abilities.iter().position(|&ability| ability == specimen.ability) else {
        return vec![CheckResult::invalid("Ability is not valid for species/form.", id)];
    };

    let mut lines = Vec::new();
    if ctx.encounter_valid() {
        if let Some(stop) = verify_origin(ctx, &mut lines) {
            lines.push(stop);
            return lines;
        }
    } else {
        lines.push(CheckResult::skipped("Ability", id));
    }

    let number = specimen.ability_number;
    if (3..=5).contains(&specimen.format) {
        let pid_bit = if specimen.format == 5 {
            (specimen.pid >> 16) & 1
        } else {
            specimen.pid & 1
        };
        let pid_ability = pid_bit as usize;
        if specimen.version != GameVersion::ColosseumXd
            && abilities[0] != abilities[1]
            && pid_ability != index
        {
            lines.push(CheckResult::invalid("Ability does not match PID.", id));
            return lines;
        }
    } else if abilities.get(usize::from(number >> 1)) != Some(&specimen.ability) {
        lines.push(CheckResult::invalid("Ability does not match ability number.", id));
        return lines;
    }

    lines.push(CheckResult::valid("Ability matches ability number.", id));
    lines
}

/// Hidden-ability rules of the committed origin. Non-fatal findings are
/// appended to `lines`; a returned result ends the check.
fn verify_origin(ctx: &AnalysisContext<'_>, lines: &mut Vec<CheckResult>) -> Option<CheckResult> {
    let specimen = ctx.specimen;
    let id = CheckIdentifier::Ability;
    let number = specimen.ability_number;
    let hidden = number == HIDDEN;
    let generation = specimen.origin_generation();

    if generation >= 5 {
        match &ctx.encounter {
            EncounterCandidate::Static(encounter) if hidden != (encounter.ability == HIDDEN) => {
                lines.push(CheckResult::invalid("Hidden Ability mismatch for static encounter.", id));
            }
            EncounterCandidate::Trade(trade) if hidden != (trade.ability == HIDDEN) => {
                return Some(CheckResult::invalid("Hidden Ability mismatch for ingame trade.", id));
            }
            EncounterCandidate::Link(link) if number != link.ability => {
                return Some(CheckResult::invalid("Ability mismatch for Link Gift.", id));
            }
            _ => {}
        }
    }
    if !matches!(generation, 6 | 7) {
        return None;
    }

    if let Some(gift) = ctx.gift() {
        let kind = gift.ability_type;
        let mismatch = (kind < 3 && u32::from(number) != 1 << kind) || (kind == 3 && hidden);
        if mismatch {
            lines.push(CheckResult::invalid("Ability does not match Mystery Gift.", id));
        }
    }
    if let (Some(slots), true) = (ctx.wild_slots(), hidden) {
        if generation == 6 {
            let allowed = slots.iter().any(|found| {
                found.dexnav
                    || matches!(found.slot.slot_type, SlotType::FriendSafari | SlotType::Horde)
            });
            if !allowed {
                return Some(CheckResult::invalid(
                    "Hidden Ability on non-horde/friend safari wild encounter.",
                    id,
                ));
            }
        } else if !slots.iter().any(|found| found.slot.slot_type == SlotType::Sos) {
            return Some(CheckResult::invalid("Hidden Ability on non-SOS wild encounter.", id));
        }
    }
    if generation == 7 && hidden && ctx.db.rules.ban_no_hidden_7.contains(&specimen.species) {
        return Some(CheckResult::invalid("Hidden Ability not available.", id));
    }
    None
}
