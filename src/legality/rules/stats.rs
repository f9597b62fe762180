use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use schema::constants::species::MILOTIC;
use schema::SlotType;

const MAX_IV: u8 = 31;
const MAX_EV: u8 = 252;
const MAX_EV_TOTAL: u32 = 510;

fn perfect_ivs(ivs: &[u8; 6]) -> usize {
    ivs.iter().filter(|&&iv| iv == MAX_IV).count()
}

pub(super) fn ivs(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let ivs = &specimen.ivs;
    let id = CheckIdentifier::Ivs;

    if ctx.static_encounter().is_some_and(|encounter| encounter.iv3) && perfect_ivs(ivs) < 3 {
        return vec![CheckResult::invalid("Should have at least 3 IVs = 31.", id)];
    }
    let friend_safari = ctx.wild_slots().is_some_and(|slots| {
        slots
            .iter()
            .all(|found| found.slot.slot_type == SlotType::FriendSafari)
    });
    if friend_safari && perfect_ivs(ivs) < 2 {
        return vec![CheckResult::invalid(
            "Friend Safari captures should have at least 2 IVs = 31.",
            id,
        )];
    }
    if let Some(gift) = ctx.gift() {
        // Values above 31 mark stats the gift leaves random.
        let fixed_mismatch = gift
            .ivs
            .iter()
            .zip(ivs)
            .any(|(&expected, &actual)| expected <= MAX_IV && expected != actual);
        if fixed_mismatch {
            return vec![CheckResult::invalid("IVs do not match Mystery Gift Data.", id)];
        }
    }

    if specimen.iv_total() == 0 {
        vec![CheckResult::fishy("All IVs are zero.", id)]
    } else if ivs[0] < 30 && ivs.iter().all(|&iv| iv == ivs[0]) {
        vec![CheckResult::fishy("All IVs are equal.", id)]
    } else {
        Vec::new()
    }
}

pub(super) fn hyper_training(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    if specimen.format < 7 || !specimen.hyper_trained.contains(&true) {
        return Vec::new();
    }
    let id = CheckIdentifier::Ivs;
    if specimen.level != 100 {
        return vec![CheckResult::invalid(
            "Can't Hyper Train a pokemon that isn't level 100.",
            id,
        )];
    }
    if perfect_ivs(&specimen.ivs) == specimen.ivs.len() {
        return vec![CheckResult::invalid(
            "Can't Hyper Train a pokemon with perfect IVs.",
            id,
        )];
    }
    specimen
        .ivs
        .iter()
        .zip(&specimen.hyper_trained)
        .filter(|&(&iv, &trained)| trained && iv == MAX_IV)
        .map(|_| CheckResult::invalid("Can't Hyper Train a perfect IV.", id))
        .collect()
}

pub(super) fn evs(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let evs = &specimen.evs;
    let total = specimen.ev_total();
    let id = CheckIdentifier::Evs;

    let result = if specimen.is_egg && total > 0 {
        CheckResult::invalid("Eggs cannot receive EVs.", id)
    } else if total == 0 && specimen.level > specimen.met_level {
        CheckResult::fishy("All EVs are zero, but leveled above Met Level.", id)
    } else if total == MAX_EV_TOTAL - 2 {
        CheckResult::fishy("2 EVs remaining.", id)
    } else if total > MAX_EV_TOTAL {
        CheckResult::invalid("EV total cannot be above 510.", id)
    } else if specimen.format >= 6 && evs.iter().any(|&ev| ev > MAX_EV) {
        CheckResult::invalid("EVs cannot go above 252.", id)
    } else if evs[0] != 0 && evs.iter().all(|&ev| ev == evs[0]) {
        CheckResult::fishy("EVs are all equal.", id)
    } else {
        return Vec::new();
    };
    vec![result]
}

pub(super) fn level(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    vec![level_result(ctx)]
}

fn level_result(ctx: &AnalysisContext<'_>) -> CheckResult {
    let specimen = ctx.specimen;
    let id = CheckIdentifier::Level;
    let (level, met_level) = (specimen.level, specimen.met_level);

    if let Some(gift) = ctx.gift() {
        let expected_met = gift.met_level.unwrap_or(gift.level);
        if expected_met != met_level {
            return CheckResult::invalid("Met Level does not match Wonder Card level.", id);
        }
        if gift.level > level {
            return CheckResult::invalid("Current Level below Wonder Card level.", id);
        }
    }

    if specimen.is_egg && level > 1 {
        return CheckResult::invalid("Current level for an egg is invalid.", id);
    }
    if level < met_level {
        return CheckResult::invalid("Current level is below met level.", id);
    }
    if (ctx.was_egg || ctx.encounter.is_unknown())
        && !ctx.chain.evolution_valid()
        && specimen.species != MILOTIC
    {
        return CheckResult::invalid(
            "Evolution not valid (or level/trade evolution unsatisfied).",
            CheckIdentifier::Evolution,
        );
    }

    let threshold = ctx
        .db
        .personal_info(specimen.species)
        .map(|info| info.exp_growth.experience_at(level));
    if level > met_level && level > 1 && level != 100 && threshold == Some(specimen.experience) {
        return CheckResult::fishy("Current experience matches level threshold.", id);
    }
    CheckResult::valid("Current level is not below met level.", id)
}
