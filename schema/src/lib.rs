// Pokemon Legality Schema - Shared type definitions
// This crate contains the reference-table records and enums that are shared
// between the analyzer and anything that produces database snapshots, so the
// same definitions round-trip through RON and postcard.

// Re-export the main types
pub use encounter_data::*;
pub use pokemon_types::*;
pub use ribbons::*;
pub use species_data::*;

pub mod constants;
pub mod encounter_data;
pub mod pokemon_types;
pub mod ribbons;
pub mod species_data;
