use crate::database::GameDatabase;
use crate::evolution::EvolutionChain;
use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::encounter::{EncounterCandidate, WildSlotMatch};
use crate::specimen::Specimen;
use schema::{EncounterLink, EncounterStatic, EncounterTrade, MysteryGift};

/// Everything one analysis pass knows about a specimen.
///
/// The encounter resolver fills the origin fields, the move validators fill the
/// slot results, and each field rule reads the whole context (including the
/// lines earlier rules appended).
#[derive(Debug, Clone)]
pub struct AnalysisContext<'a> {
    pub specimen: &'a Specimen,
    pub db: &'a GameDatabase,
    pub chain: EvolutionChain,
    /// The committed origin.
    pub encounter: EncounterCandidate,
    /// The origin found in the generation 1/2 tables before a transfer
    /// replaced it with the transfer encounter.
    pub original: Option<EncounterCandidate>,
    /// Gift records still consistent with the specimen.
    pub gift_candidates: Vec<MysteryGift>,
    /// The move set the relearn slots were matched against.
    pub relearn_base: Option<Vec<u16>>,
    pub encounter_result: CheckResult,
    pub relearn: [CheckResult; 4],
    pub moves: [CheckResult; 4],
    pub lines: Vec<CheckResult>,
    /// The specimen hatched from an egg, either per its own data or because
    /// the legacy resolver settled on an egg origin.
    pub was_egg: bool,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(specimen: &'a Specimen, db: &'a GameDatabase, chain: EvolutionChain) -> Self {
        Self {
            specimen,
            db,
            chain,
            encounter: EncounterCandidate::Unknown,
            original: None,
            gift_candidates: Vec::new(),
            relearn_base: None,
            encounter_result: CheckResult::neutral(CheckIdentifier::Encounter),
            relearn: std::array::from_fn(|_| CheckResult::neutral(CheckIdentifier::RelearnMove)),
            moves: std::array::from_fn(|_| CheckResult::neutral(CheckIdentifier::Move)),
            lines: Vec::new(),
            was_egg: specimen.was_egg(),
        }
    }

    pub fn encounter_valid(&self) -> bool {
        self.encounter_result.is_valid()
    }

    pub fn add_line(&mut self, result: CheckResult) {
        self.lines.push(result);
    }

    /// The most recent line of a category.
    pub fn latest(&self, identifier: CheckIdentifier) -> Option<&CheckResult> {
        self.lines.iter().rev().find(|line| line.identifier == identifier)
    }

    pub fn gift(&self) -> Option<&MysteryGift> {
        match &self.encounter {
            EncounterCandidate::MysteryGift(gift) => Some(gift),
            _ => None,
        }
    }

    pub fn static_encounter(&self) -> Option<&EncounterStatic> {
        match &self.encounter {
            EncounterCandidate::Static(encounter) => Some(encounter),
            _ => None,
        }
    }

    pub fn wild_slots(&self) -> Option<&[WildSlotMatch]> {
        match &self.encounter {
            EncounterCandidate::WildSlot(slots) => Some(slots),
            _ => None,
        }
    }

    pub fn trade(&self) -> Option<&EncounterTrade> {
        match &self.encounter {
            EncounterCandidate::Trade(trade) => Some(trade),
            _ => None,
        }
    }

    pub fn link(&self) -> Option<&EncounterLink> {
        match &self.encounter {
            EncounterCandidate::Link(link) => Some(link),
            _ => None,
        }
    }
}
