use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::EncounterCandidate;
use schema::{GameVersion, RibbonKind, Ribbons};

/// Ribbons only awarded in generation 3 games.
const GEN3_ONLY: [RibbonKind; 2] = [RibbonKind::ChampionG3Hoenn, RibbonKind::Artist];
/// Ribbons only awarded up to generation 4.
const GEN4_ONLY: [RibbonKind; 2] = [RibbonKind::ChampionSinnoh, RibbonKind::Legend];

#[derive(Debug, Default)]
struct RibbonAudit {
    missing: Vec<String>,
    invalid: Vec<String>,
}

impl RibbonAudit {
    /// Records a ribbon whose presence must equal `expected`.
    fn expect(&mut self, ribbons: &Ribbons, kind: RibbonKind, expected: bool) {
        match (ribbons.has(kind), expected) {
            (true, false) => self.invalid.push(kind.to_string()),
            (false, true) => self.missing.push(kind.to_string()),
            _ => {}
        }
    }

    fn into_result(self) -> CheckResult {
        let id = CheckIdentifier::Ribbon;
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("Missing Ribbons: {}", self.missing.join(", ")));
        }
        if !self.invalid.is_empty() {
            parts.push(format!("Invalid Ribbons: {}", self.invalid.join(", ")));
        }
        if parts.is_empty() {
            CheckResult::valid("All ribbons accounted for.", id)
        } else {
            CheckResult::invalid(parts.join("\n"), id)
        }
    }
}

pub(super) fn ribbons(ctx: &AnalysisContext<'_>) -> Vec<CheckResult> {
    let specimen = ctx.specimen;
    let id = CheckIdentifier::Ribbon;
    if !ctx.encounter_valid() {
        return vec![CheckResult::skipped("Ribbon", id)];
    }
    let ribbons = &specimen.ribbons;
    if specimen.is_egg {
        if ribbons.is_empty() {
            return Vec::new();
        }
        return vec![CheckResult::invalid("Eggs should not have ribbons.", id)];
    }

    let mut audit = RibbonAudit::default();
    match &ctx.encounter {
        EncounterCandidate::MysteryGift(gift) => {
            for kind in RibbonKind::EVENT {
                audit.expect(ribbons, kind, gift.has_ribbon(kind));
            }
        }
        EncounterCandidate::Link(link) => {
            for kind in RibbonKind::EVENT {
                let expected = kind == RibbonKind::Classic && link.classic_ribbon;
                audit.expect(ribbons, kind, expected);
            }
        }
        EncounterCandidate::Static(encounter) => {
            for kind in RibbonKind::EVENT {
                let expected = kind == RibbonKind::Wishing && encounter.ribbon_wishing;
                audit.expect(ribbons, kind, expected);
            }
        }
        _ => {
            for kind in RibbonKind::EVENT {
                audit.expect(ribbons, kind, false);
            }
        }
    }

    let generation = specimen.origin_generation();
    if generation > 3 {
        for kind in GEN3_ONLY {
            audit.expect(ribbons, kind, false);
        }
        if ribbons.national && specimen.version != GameVersion::ColosseumXd {
            audit.invalid.push("National Ribbon (Purified)".to_string());
        }
    }
    if generation > 4 {
        for kind in GEN4_ONLY {
            audit.expect(ribbons, kind, false);
        }
    }
    if specimen.format >= 6 && generation >= 6 {
        if ribbons.memory_contest > 0 {
            audit.invalid.push("Contest Memory".to_string());
        }
        if ribbons.memory_battle > 0 {
            audit.invalid.push("Battle Memory".to_string());
        }
    }
    if ribbons.record {
        audit.invalid.push("Record".to_string());
    }

    vec![audit.into_result()]
}
