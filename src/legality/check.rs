use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter};

/// Judgement attached to a check.
///
/// `Invalid < Fishy < Valid` form the ordered scale; `Indeterminate` and
/// `NotImplemented` mark cases the analyzer cannot or does not judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Severity {
    Indeterminate,
    Invalid,
    Fishy,
    Valid,
    NotImplemented,
}

impl Severity {
    /// Fishy, Valid and NotImplemented pass; Invalid and Indeterminate do not.
    pub fn is_valid(self) -> bool {
        matches!(
            self,
            Severity::Fishy | Severity::Valid | Severity::NotImplemented
        )
    }
}

/// Category a check result belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CheckIdentifier {
    Move,
    RelearnMove,
    Encounter,
    History,
    #[strum(serialize = "EC/PID")]
    EcPid,
    Shiny,
    #[strum(serialize = "EC")]
    Ec,
    #[strum(serialize = "PID")]
    Pid,
    Gender,
    #[strum(serialize = "EVs")]
    Evs,
    Language,
    Nickname,
    Trainer,
    #[strum(serialize = "IVs")]
    Ivs,
    None,
    Level,
    Ball,
    Memory,
    Geography,
    Form,
    Egg,
    Misc,
    Fateful,
    Ribbon,
    Training,
    Ability,
    Evolution,
    Special,
}

/// One judgement produced by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub identifier: CheckIdentifier,
    pub comment: String,
    /// Marks moves sourced from egg or relearn pools for later audits.
    pub flag: bool,
}

impl CheckResult {
    pub fn new(severity: Severity, comment: impl Into<String>, identifier: CheckIdentifier) -> Self {
        Self {
            severity,
            identifier,
            comment: comment.into(),
            flag: false,
        }
    }

    /// A passing result with no specific message.
    pub fn neutral(identifier: CheckIdentifier) -> Self {
        Self::new(Severity::Valid, "Valid", identifier)
    }

    pub fn valid(comment: impl Into<String>, identifier: CheckIdentifier) -> Self {
        Self::new(Severity::Valid, comment, identifier)
    }

    pub fn invalid(comment: impl Into<String>, identifier: CheckIdentifier) -> Self {
        Self::new(Severity::Invalid, comment, identifier)
    }

    pub fn fishy(comment: impl Into<String>, identifier: CheckIdentifier) -> Self {
        Self::new(Severity::Fishy, comment, identifier)
    }

    /// Neutral result for a check that needs a valid encounter to run.
    pub fn skipped(check: &str, identifier: CheckIdentifier) -> Self {
        Self::valid(
            format!("Skipped {} check due to invalid encounter.", check),
            identifier,
        )
    }

    pub fn flagged(mut self) -> Self {
        self.flag = true;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.severity.is_valid()
    }

    pub fn is_invalid(&self) -> bool {
        self.severity == Severity::Invalid
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Severity::Invalid, false)]
    #[case(Severity::Indeterminate, false)]
    #[case(Severity::Fishy, true)]
    #[case(Severity::Valid, true)]
    #[case(Severity::NotImplemented, true)]
    fn test_severity_validity(#[case] severity: Severity, #[case] valid: bool) {
        assert_eq!(severity.is_valid(), valid);
        assert_eq!(
            CheckResult::new(severity, "x", CheckIdentifier::Misc).is_valid(),
            valid
        );
    }

    #[test]
    fn test_skipped_result_is_neutral() {
        let result = CheckResult::skipped("Ball", CheckIdentifier::Ball);
        assert!(result.is_valid());
        assert_eq!(result.comment, "Skipped Ball check due to invalid encounter.");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CheckIdentifier::EcPid.to_string(), "EC/PID");
        assert_eq!(CheckIdentifier::RelearnMove.to_string(), "RelearnMove");
        assert_eq!(
            CheckResult::invalid("Duplicate Move.", CheckIdentifier::Move).to_string(),
            "Invalid: Duplicate Move."
        );
    }
}
