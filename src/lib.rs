// Library interface for FitCoach modules
// This allows integration tests to access the core functionality

pub mod coach;
pub mod config;
pub mod error;
pub mod export;
pub mod health;
pub mod logging;
pub mod models;
pub mod planner;
pub mod progress;
pub mod store;

// Re-export commonly used types for convenience
pub use models::*;
pub use coach::Coach;
pub use health::{AnalysisResult, GoalPolicy, HealthAnalyzer};
pub use planner::{WorkoutPlan, WorkoutPlanner};
pub use progress::{ProgressResult, ProgressTracker};
pub use store::{InMemoryProfileStore, ProfileStore, UserId};
pub use config::AppConfig;
pub use export::ExportFormat;
pub use error::{FitCoachError, Result, StoreError, ValidationError};
pub use logging::{LogConfig, LogFormat, LogLevel};
