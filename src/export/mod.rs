//! Report rendering for analysis, plan and progress records
//!
//! Formatting stays outside the engine: every renderer takes a finished
//! record and only decides how it looks.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::health::AnalysisResult;
use crate::planner::WorkoutPlan;
use crate::progress::ProgressResult;

pub mod json;
pub mod text;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExportError> for crate::error::FitCoachError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(e) => crate::error::FitCoachError::Io(e),
            other => crate::error::FitCoachError::Serialization(other.to_string()),
        }
    }
}

/// Any record the CLI can print
pub enum Report<'a> {
    Analysis(&'a AnalysisResult),
    Plan(&'a WorkoutPlan),
    Progress(&'a ProgressResult),
}

impl Report<'_> {
    /// Render in the requested format
    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match (format, self) {
            (ExportFormat::Text, Report::Analysis(a)) => text::render_analysis(a),
            (ExportFormat::Text, Report::Plan(p)) => text::render_plan(p),
            (ExportFormat::Text, Report::Progress(p)) => text::render_progress(p),
            (ExportFormat::Json, Report::Analysis(a)) => json::to_json_string(a),
            (ExportFormat::Json, Report::Plan(p)) => json::to_json_string(p),
            (ExportFormat::Json, Report::Progress(p)) => json::to_json_string(p),
        }
    }

    /// Render and write to a file
    pub fn write_to<P: AsRef<Path>>(&self, format: ExportFormat, path: P) -> Result<(), ExportError> {
        let content = self.render(format)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, WorkoutType};
    use crate::planner::WorkoutPlanner;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_plan_report_text_includes_exercise_table() {
        let plan =
            WorkoutPlanner::create_plan(FitnessLevel::Intermediate, WorkoutType::Strength, 45, &[]);
        let report = Report::Plan(&plan).render(ExportFormat::Text).unwrap();

        assert!(report.starts_with("WORKOUT PLAN"));
        assert!(report.contains("Intensity"));
        assert!(report.contains("Weighted squats"));
        assert!(report.contains("4x10"));
    }

    #[test]
    fn test_report_write_to_file() {
        let plan = WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Cardio, 30, &[]);
        let temp_file = tempfile::NamedTempFile::new().unwrap();

        Report::Plan(&plan)
            .write_to(ExportFormat::Json, temp_file.path())
            .unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"estimated_calories\": \"240\""));
    }
}
