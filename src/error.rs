//! Unified error hierarchy for FitCoach
//!
//! Lookup misses (unknown goal, workout type or fitness level) are not
//! errors; they degrade to empty or default values inside the engine. Only
//! malformed input and outer-layer failures surface here.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for all FitCoach operations
#[derive(Debug, Error)]
pub enum FitCoachError {
    /// Profile or parameter validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Profile store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Input rejected while building a user profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name must contain at least one non-whitespace character
    #[error("Name must not be empty")]
    EmptyName,

    /// Age must be strictly positive
    #[error("Invalid age: {age}")]
    InvalidAge { age: u32 },

    /// Weight must be strictly positive
    #[error("Weight must be positive, got {weight} kg")]
    NonPositiveWeight { weight: Decimal },

    /// Height must be strictly positive
    #[error("Height must be positive, got {height} cm")]
    NonPositiveHeight { height: Decimal },

    /// Fitness level label not recognized
    #[error("Unknown fitness level: {label}")]
    UnknownFitnessLevel { label: String },

    /// Workout type label not recognized
    #[error("Unknown workout type: {label}")]
    UnknownWorkoutType { label: String },
}

/// Profile store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No profile registered under this id
    #[error("User not found: {id}")]
    NotFound { id: String },

    /// A profile with this name is already registered
    #[error("Duplicate user name: {name}")]
    Duplicate { name: String },
}

/// Result type alias for FitCoach operations
pub type Result<T> = std::result::Result<T, FitCoachError>;

impl FitCoachError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitCoachError::Validation(_) => ErrorSeverity::Warning,
            FitCoachError::Store(StoreError::NotFound { .. }) => ErrorSeverity::Warning,
            FitCoachError::Store(_) => ErrorSeverity::Error,
            FitCoachError::Internal(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitCoachError::Store(StoreError::NotFound { .. }) => {
                "User is not registered. Please register first.".to_string()
            }
            FitCoachError::Validation(ValidationError::NonPositiveHeight { .. })
            | FitCoachError::Validation(ValidationError::NonPositiveWeight { .. }) => {
                format!("{}. Please enter your measurements in kg and cm.", self)
            }
            FitCoachError::Configuration(reason) => {
                format!("Could not load configuration: {}", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}
