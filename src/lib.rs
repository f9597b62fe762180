// In: src/lib.rs

//! Pokémon Specimen Legality Analyzer
//!
//! Decides whether a single stored Pokémon could have been obtained through
//! legitimate gameplay, producing a structured report of graded findings.
//! All reference data comes from an injected, read-only game database.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod database;
pub mod errors;
pub mod evolution;
pub mod legality;
pub mod specimen;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Reference-table records and the enums shared with database producers.
pub use schema::{
    EncounterArea, EncounterLink, EncounterSlot, EncounterStatic, EncounterTrade, EvolutionData,
    EvolutionMethod, GameGroup, GameVersion, Learnset, Memory, MysteryGift, PersonalInfo,
    RibbonKind, Ribbons, SlotType,
};

// --- From this crate's modules (`src/`) ---

// Analysis entry point and its output.
pub use legality::{
    CheckIdentifier, CheckResult, EncounterCandidate, LegalityAnalyzer, LegalityReport, Rule,
    Severity, DEFAULT_RULES,
};

// Inputs and collaborators.
pub use config::LegalityConfig;
pub use database::GameDatabase;
pub use evolution::{DatabaseEvolutionChains, EvolutionChain, EvolutionChainProvider};
pub use specimen::Specimen;

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, DatabaseError, DatabaseResult, LegalityError, LegalityResult,
    SpecimenError,
};
