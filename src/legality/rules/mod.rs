//! Field rules: independent checks over one aspect of a specimen.
//!
//! Each rule reads the analysis context (including lines appended by the
//! rules before it) and returns the lines it wants to add.

mod ability;
mod ball;
mod history;
mod identity;
mod misc;
mod names;
mod pid;
mod ribbons;
mod stats;
mod training;

use crate::legality::check::CheckResult;
use crate::legality::context::AnalysisContext;

pub type RuleFn = fn(&AnalysisContext<'_>) -> Vec<CheckResult>;

/// A named field rule. The name is the key used to disable it in the
/// configuration.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: RuleFn,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules run in this order; later rules may read earlier lines.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule { name: "gender", check: identity::gender },
    Rule { name: "held_item", check: identity::held_item },
    Rule { name: "ecpid", check: pid::ecpid },
    Rule { name: "nickname", check: names::nickname },
    Rule { name: "trainer", check: names::trainer },
    Rule { name: "ivs", check: stats::ivs },
    Rule { name: "hyper_training", check: stats::hyper_training },
    Rule { name: "evs", check: stats::evs },
    Rule { name: "level", check: stats::level },
    Rule { name: "training", check: training::medals },
    Rule { name: "ribbons", check: ribbons::ribbons },
    Rule { name: "ability", check: ability::ability },
    Rule { name: "ball", check: ball::ball },
    Rule { name: "history", check: history::history },
    Rule { name: "memory", check: history::memory },
    Rule { name: "region", check: history::region },
    Rule { name: "form", check: identity::form },
    Rule { name: "misc", check: misc::misc },
    Rule { name: "version_evolution", check: identity::version_evolution },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_rule_names_are_unique() {
        let names: BTreeSet<&str> = DEFAULT_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(names.len(), DEFAULT_RULES.len());
    }
}
