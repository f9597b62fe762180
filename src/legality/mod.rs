//! Legality analysis: one pass per specimen, from encounter resolution to the
//! assembled report.

pub mod check;
pub mod context;
pub mod encounter;
pub mod moves;
pub mod report;
pub mod rules;

#[cfg(test)]
mod tests;

pub use check::{CheckIdentifier, CheckResult, Severity};
pub use context::AnalysisContext;
pub use encounter::{EncounterCandidate, EggOrigin, WildSlotMatch};
pub use report::LegalityReport;
pub use rules::{Rule, RuleFn, DEFAULT_RULES};

use crate::config::LegalityConfig;
use crate::database::GameDatabase;
use crate::errors::{ConfigError, DatabaseError, LegalityResult};
use crate::evolution::{DatabaseEvolutionChains, EvolutionChainProvider};
use crate::specimen::{Specimen, MAX_FORMAT};
use crate::errors::SpecimenError;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace};

/// Runs analysis passes against a shared, read-only database.
///
/// The analyzer holds no per-pass state, so one instance can serve many
/// threads; [`LegalityAnalyzer::analyze_batch`] does exactly that.
pub struct LegalityAnalyzer<P: EvolutionChainProvider = DatabaseEvolutionChains> {
    db: Arc<GameDatabase>,
    chains: P,
    rules: Vec<Rule>,
}

impl LegalityAnalyzer<DatabaseEvolutionChains> {
    pub fn new(db: Arc<GameDatabase>) -> Self {
        Self::with_provider(db, DatabaseEvolutionChains)
    }

    /// Builds an analyzer whose rule table honours `config.disabled_rules`.
    pub fn from_config(db: Arc<GameDatabase>, config: &LegalityConfig) -> LegalityResult<Self> {
        let mut analyzer = Self::new(db);
        analyzer.disable_rules(&config.disabled_rules)?;
        Ok(analyzer)
    }
}

impl<P: EvolutionChainProvider> LegalityAnalyzer<P> {
    pub fn with_provider(db: Arc<GameDatabase>, chains: P) -> Self {
        Self {
            db,
            chains,
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    pub fn database(&self) -> &GameDatabase {
        &self.db
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Removes rules by name. Unknown names are an error so that a typo in a
    /// configuration file does not silently keep a rule running.
    pub fn disable_rules(&mut self, names: &[String]) -> Result<(), ConfigError> {
        if let Some(unknown) = names
            .iter()
            .find(|name| !DEFAULT_RULES.iter().any(|rule| rule.name == name.as_str()))
        {
            return Err(ConfigError::UnknownRule(unknown.clone()));
        }
        self.rules
            .retain(|rule| !names.iter().any(|name| name == rule.name));
        debug!(active = self.rules.len(), "rule table configured");
        Ok(())
    }

    /// Analyzes one specimen.
    ///
    /// Errors are reserved for records that cannot be interpreted at all;
    /// every judgement about a well-formed record lands in the report.
    pub fn analyze(&self, specimen: &Specimen) -> LegalityResult<LegalityReport> {
        if specimen.format == 0 || specimen.format > MAX_FORMAT {
            return Err(SpecimenError::FormatOutOfRange(specimen.format).into());
        }
        let max_species = self
            .db
            .max_species_id(specimen.format)
            .ok_or(DatabaseError::MissingGeneration(specimen.format))?;
        specimen.validate(max_species)?;

        let db = self.db.as_ref();
        let chain = self.chains.chain(db, specimen);
        trace!(species = specimen.species, depth = chain.nodes().len(), "evolution chain built");

        let mut ctx = AnalysisContext::new(specimen, db, chain);
        encounter::resolve(&mut ctx);
        moves::verify_relearn(&mut ctx);
        moves::verify_current(&mut ctx);
        if let Some(line) = moves::verify_egg_move_set(&mut ctx) {
            ctx.add_line(line);
        }

        for rule in &self.rules {
            let lines = (rule.check)(&ctx);
            trace!(rule = rule.name, count = lines.len(), "rule applied");
            ctx.lines.extend(lines);
        }

        let report = LegalityReport::from_context(ctx);
        debug!(
            species = specimen.species,
            valid = report.valid(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Analyzes many specimens in parallel; results keep the input order.
    pub fn analyze_batch(&self, specimens: &[Specimen]) -> Vec<LegalityResult<LegalityReport>> {
        specimens
            .par_iter()
            .map(|specimen| self.analyze(specimen))
            .collect()
    }
}
