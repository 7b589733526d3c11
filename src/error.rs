//! Error types for swirl.
//!
//! The evaluation pipeline itself is a pure numeric function and cannot
//! fail; errors only arise at the configuration boundary, before a store
//! is generated or a frame is evaluated.

use std::fmt;

/// Errors raised when validating a configuration snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was zero or negative.
    NonPositive {
        /// Parameter name as exposed on [`crate::Config`].
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A parameter that must be non-negative was negative.
    Negative {
        /// Parameter name as exposed on [`crate::Config`].
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A parameter was NaN or infinite.
    NotFinite {
        /// Parameter name as exposed on [`crate::Config`].
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A parameter fell outside its documented closed range.
    OutOfRange {
        /// Parameter name as exposed on [`crate::Config`].
        name: &'static str,
        /// Offending value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            ConfigError::Negative { name, value } => {
                write!(f, "{name} must be >= 0, got {value}")
            }
            ConfigError::NotFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            ConfigError::OutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(f, "{name} must be in [{min}, {max}], got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised when resolving a palette by name.
///
/// Lookup misses fail fast rather than falling back to a default, so a
/// typo in an external control surface surfaces immediately instead of
/// silently recoloring the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No palette registered under the given name.
    Unknown(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Unknown(name) => {
                write!(
                    f,
                    "unknown palette {name:?}; expected one of: cyber, fire, ice, toxic, void, stars"
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// Errors raised when parsing a motion mode by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    /// No motion mode registered under the given name.
    Unknown(String),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::Unknown(name) => {
                write!(
                    f,
                    "unknown mode {name:?}; expected one of: galaxy, flowfield, explosion, swarm, helix, starfield"
                )
            }
        }
    }
}

impl std::error::Error for ModeError {}
