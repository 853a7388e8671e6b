use std::fmt::{self, Write};
use tabled::{settings::Style, Table, Tabled};

use super::ExportError;
use crate::health::AnalysisResult;
use crate::planner::WorkoutPlan;
use crate::progress::ProgressResult;

const RULE: &str = "------------------------------------------------------------";

#[derive(Tabled)]
struct ExerciseRow {
    #[tabled(rename = "Exercise")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Intensity")]
    intensity: String,
}

fn write_heading<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", RULE)
}

/// Render a health analysis as a plain-text report
pub fn render_analysis(analysis: &AnalysisResult) -> Result<String, ExportError> {
    let mut out = String::new();
    write_analysis(&mut out, analysis)?;
    Ok(out)
}

/// Render a workout plan as a plain-text report
pub fn render_plan(plan: &WorkoutPlan) -> Result<String, ExportError> {
    let mut out = String::new();
    write_plan(&mut out, plan)?;
    Ok(out)
}

/// Render a progress analysis as a plain-text report
pub fn render_progress(progress: &ProgressResult) -> Result<String, ExportError> {
    let mut out = String::new();
    write_progress(&mut out, progress)?;
    Ok(out)
}

pub fn write_analysis<W: Write>(out: &mut W, analysis: &AnalysisResult) -> fmt::Result {
    let info = &analysis.user_info;

    write_heading(out, "HEALTH ANALYSIS")?;
    writeln!(out, "Name: {}", info.name)?;
    writeln!(out, "Age: {} years", info.age)?;
    writeln!(out, "BMI: {}", info.bmi)?;
    writeln!(out, "Weight category: {}", info.bmi_category)?;
    writeln!(out)?;

    writeln!(out, "Fitness assessment:")?;
    writeln!(out, "  {}", analysis.fitness_assessment)?;
    writeln!(out)?;

    writeln!(out, "Recommendations:")?;
    for recommendation in &analysis.recommendations {
        writeln!(out, "  • {}", recommendation)?;
    }
    writeln!(out)?;

    if !analysis.goal_analysis.is_empty() {
        writeln!(out, "Goal analysis:")?;
        for entry in &analysis.goal_analysis {
            writeln!(out, "  {}:", entry.goal)?;
            writeln!(out, "    - Priority: {}", entry.guidance.priority)?;
            writeln!(
                out,
                "    - Suitable workouts: {}",
                entry.guidance.recommended_workouts.join(", ")
            )?;
            writeln!(out, "    - Suggested duration: {}", entry.guidance.duration)?;
        }
        writeln!(out)?;
    }

    let schedule = &analysis.weekly_schedule;
    writeln!(out, "Suggested weekly schedule:")?;
    writeln!(out, "  • Frequency: {}", schedule.frequency)?;
    writeln!(out, "  • Session duration: {}", schedule.session_duration)?;
    writeln!(out, "  • Focus: {}", schedule.focus)
}

pub fn write_plan<W: Write>(out: &mut W, plan: &WorkoutPlan) -> fmt::Result {
    let info = &plan.session_info;

    write_heading(out, "WORKOUT PLAN")?;
    writeln!(out, "Workout type: {}", info.workout_type)?;
    writeln!(out, "Level: {}", info.level)?;
    writeln!(out, "Total duration: {} min", info.total_duration)?;
    writeln!(out, "Estimated calories: {} kcal", info.estimated_calories)?;
    if !info.goals.is_empty() {
        writeln!(out, "Goals: {}", info.goals.join(", "))?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Warm-up ({} min): {}",
        plan.warm_up.duration,
        plan.warm_up.exercises.join(", ")
    )?;
    writeln!(out)?;

    writeln!(out, "Main workout:")?;
    if plan.main_workout.exercises.is_empty() {
        writeln!(out, "  (no exercises available for this combination)")?;
    } else {
        let rows = plan.main_workout.exercises.iter().map(|e| ExerciseRow {
            name: e.name.clone(),
            amount: e.prescription.to_string(),
            intensity: e.intensity.to_string(),
        });
        writeln!(out, "{}", Table::new(rows).with(Style::rounded()))?;
    }
    writeln!(out, "Rest between sets: {}", plan.main_workout.rest_between_sets)?;
    writeln!(out)?;

    writeln!(
        out,
        "Cool-down ({} min): {}",
        plan.cool_down.duration,
        plan.cool_down.exercises.join(", ")
    )?;
    writeln!(out)?;

    writeln!(out, "Tips:")?;
    for tip in &plan.tips {
        writeln!(out, "  • {}", tip)?;
    }
    Ok(())
}

pub fn write_progress<W: Write>(out: &mut W, progress: &ProgressResult) -> fmt::Result {
    let weight = &progress.weight_progress;
    let stats = &progress.activity_stats;

    write_heading(out, "PROGRESS ANALYSIS")?;
    writeln!(out, "Weight progress:")?;
    match weight.initial_weight {
        Some(initial) => writeln!(out, "  • Initial weight: {} kg", initial)?,
        None => writeln!(out, "  • Initial weight: -")?,
    }
    writeln!(out, "  • Current weight: {} kg", weight.current_weight)?;
    writeln!(
        out,
        "  • Change: {:+.1} kg ({:+.1}%)",
        weight.change, weight.change_percent
    )?;
    writeln!(out)?;

    writeln!(out, "Activity:")?;
    writeln!(out, "  • Workouts completed: {}", stats.workouts_completed)?;
    writeln!(out, "  • Active days: {}", stats.days_active)?;
    writeln!(out, "  • Commitment score: {:.1}%", stats.commitment_score)?;
    writeln!(out)?;

    writeln!(out, "Motivation:")?;
    for message in &progress.motivational_messages {
        writeln!(out, "  • {}", message)?;
    }
    writeln!(out)?;

    writeln!(out, "Next goals:")?;
    for goal in &progress.next_goals {
        writeln!(out, "  • {}", goal)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthAnalyzer;
    use crate::models::{FitnessLevel, UserProfile, WorkoutType};
    use crate::planner::WorkoutPlanner;
    use crate::progress::ProgressTracker;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_analysis() {
        let profile = UserProfile::new("Ahmed", 28, dec!(80), dec!(175), FitnessLevel::Beginner)
            .unwrap()
            .with_goals(["weight loss", "fitness improvement"])
            .with_available_time(45);
        let report = render_analysis(&HealthAnalyzer::default().analyze(&profile)).unwrap();

        assert!(report.contains("HEALTH ANALYSIS"));
        assert!(report.contains("BMI: 26.12"));
        assert!(report.contains("Weight category: Overweight"));
        assert!(report.contains("weight loss:"));
        assert!(report.contains("Suitable workouts: cardio, HIIT"));
        assert!(report.contains("Frequency: 4-5 days/week"));
    }

    #[test]
    fn test_render_plan_with_exercise_table() {
        let plan =
            WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Strength, 30, &[]);
        let report = render_plan(&plan).unwrap();

        assert!(report.contains("Estimated calories: 180 kcal"));
        assert!(report.contains("Exercise"));
        assert!(report.contains("Modified push-ups"));
        assert!(report.contains("3x8"));
        assert!(report.contains("30 seconds x3"));
        assert!(report.contains("Warm-up (5 min): Joint mobility, Light stretching"));
        assert!(report.contains("Rest between sets: 30-60 seconds"));
    }

    #[test]
    fn test_render_empty_plan() {
        let plan = WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Hiit, 20, &[]);
        assert!(render_plan(&plan).unwrap().contains("no exercises available"));
    }

    #[test]
    fn test_render_progress() {
        let progress = ProgressTracker::analyze(dec!(79.5), Some(dec!(80)), 5, 7);
        let report = render_progress(&progress).unwrap();

        assert!(report.contains("Change: +0.5 kg (+0.6%)"));
        assert!(report.contains("Commitment score: 71.4%"));
        assert!(report.contains("You lost 0.5 kg"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_writer_errors_propagate() {
        let progress = ProgressTracker::analyze(dec!(79.5), Some(dec!(80)), 5, 7);
        assert!(write_progress(&mut FailingWriter, &progress).is_err());

        let plan = WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Cardio, 30, &[]);
        assert!(write_plan(&mut FailingWriter, &plan).is_err());
    }
}
