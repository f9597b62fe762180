use crate::legality::check::{CheckIdentifier, CheckResult};
use crate::legality::context::AnalysisContext;
use crate::legality::encounter::EncounterCandidate;
use serde::Serialize;
use std::fmt;

/// The outcome of one analysis pass.
///
/// `results` holds every judgement in emission order: the encounter verdict,
/// then the four relearn slots, the four current move slots, and finally the
/// lines appended by the field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalityReport {
    pub species: u16,
    pub encounter: EncounterCandidate,
    /// The move set the relearn slots were compared with, when one applied.
    pub relearn_base: Option<Vec<u16>>,
    pub results: Vec<CheckResult>,
    pub valid: bool,
}

impl LegalityReport {
    pub fn from_context(ctx: AnalysisContext<'_>) -> Self {
        let mut results = Vec::with_capacity(1 + 8 + ctx.lines.len());
        results.push(ctx.encounter_result);
        results.extend(ctx.relearn);
        results.extend(ctx.moves);
        results.extend(ctx.lines);
        // Indeterminate and NotImplemented lines never make a specimen illegal.
        let valid = !results.iter().any(CheckResult::is_invalid);

        Self {
            species: ctx.specimen.species,
            encounter: ctx.encounter,
            relearn_base: ctx.relearn_base,
            results,
            valid,
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn encounter_result(&self) -> Option<&CheckResult> {
        self.results.first()
    }

    pub fn relearn_results(&self) -> &[CheckResult] {
        self.results.get(1..5).unwrap_or(&[])
    }

    pub fn move_results(&self) -> &[CheckResult] {
        self.results.get(5..9).unwrap_or(&[])
    }

    /// Lines appended by the field rules.
    pub fn lines(&self) -> &[CheckResult] {
        self.results.get(9..).unwrap_or(&[])
    }

    /// Every result of one category, in emission order.
    pub fn by_identifier(&self, identifier: CheckIdentifier) -> impl Iterator<Item = &CheckResult> {
        self.results
            .iter()
            .filter(move |result| result.identifier == identifier)
    }

    /// Whether any result carries exactly this comment.
    pub fn has_comment(&self, comment: &str) -> bool {
        self.results.iter().any(|result| result.comment == comment)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for LegalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(encounter) = self.encounter_result() {
            writeln!(f, "Encounter ({}): {}", self.encounter.name(), encounter)?;
        }
        for (slot, result) in self.relearn_results().iter().enumerate() {
            writeln!(f, "Relearn {}: {}", slot + 1, result)?;
        }
        for (slot, result) in self.move_results().iter().enumerate() {
            writeln!(f, "Move {}: {}", slot + 1, result)?;
        }
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        write!(f, "Overall: {}", if self.valid { "Legal" } else { "Illegal" })
    }
}
