use schema::LearnsetError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the legality analyzer
#[derive(Debug, Error)]
pub enum LegalityError {
    /// The specimen cannot be minimally interpreted
    #[error("Specimen error: {0}")]
    Specimen(#[from] SpecimenError),
    /// Reference tables could not be loaded
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    /// Analyzer configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised before any check runs on a malformed specimen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecimenError {
    #[error("Species {species} is outside 1..={max} for generation {format}")]
    SpeciesOutOfRange { species: u16, max: u16, format: u8 },
    #[error("Format generation {0} is not supported")]
    FormatOutOfRange(u8),
    #[error("Level {0} is outside 1..=100")]
    LevelOutOfRange(u8),
    #[error("Origin generation {origin} is newer than format generation {format}")]
    OriginNewerThanFormat { origin: u8, format: u8 },
    /// Specimen text could not be deserialized
    #[error("Malformed specimen data: {0}")]
    Malformed(String),
}

/// Errors related to loading the reference game database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed RON database: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Malformed database snapshot: {0}")]
    Snapshot(#[from] postcard::Error),
    #[error("Malformed learnset table: {0}")]
    Learnset(#[from] LearnsetError),
    /// No species ceiling is recorded for a generation the specimen needs
    #[error("No species table for generation {0}")]
    MissingGeneration(u8),
}

/// Errors related to analyzer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed configuration: {0}")]
    Ron(#[from] ron::error::SpannedError),
    /// `disabled_rules` names a rule that does not exist
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

/// Type alias for Results using LegalityError
pub type LegalityResult<T> = Result<T, LegalityError>;

/// Type alias for Results using DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
