use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::models::{FitnessLevel, Intensity, WorkoutType};

/// Calories per minute used when a type/level pair has no entry
pub const DEFAULT_CALORIES_PER_MINUTE: u32 = 8;

const WARM_UP_MINUTES: u32 = 5;
const COOL_DOWN_MINUTES: u32 = 5;
const WARM_UP_EXERCISES: [&str; 2] = ["Joint mobility", "Light stretching"];
const COOL_DOWN_EXERCISES: [&str; 2] = ["Stretching", "Deep breathing"];
const REST_BETWEEN_SETS: &str = "30-60 seconds";

const GENERAL_TIPS: [&str; 3] = [
    "Drink water before, during and after your workout",
    "Listen to your body and never ignore pain",
    "Get enough sleep to recover",
];

/// How much of an exercise to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prescription {
    /// Continuous work for a number of minutes
    Minutes(u32),
    /// Sets x reps scheme, e.g. "3x8"
    Reps(String),
    /// Timed holds, e.g. "30 seconds x3"
    Timed(String),
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prescription::Minutes(minutes) => write!(f, "{} min", minutes),
            Prescription::Reps(scheme) => write!(f, "{}", scheme),
            Prescription::Timed(hold) => write!(f, "{}", hold),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub prescription: Prescription,
    pub intensity: Intensity,
}

#[derive(Clone, Copy)]
enum Dose {
    Minutes(u32),
    Reps(&'static str),
    Timed(&'static str),
}

struct ExerciseTemplate {
    name: &'static str,
    dose: Dose,
    intensity: Intensity,
}

impl ExerciseTemplate {
    const fn new(name: &'static str, dose: Dose, intensity: Intensity) -> Self {
        Self {
            name,
            dose,
            intensity,
        }
    }

    fn to_exercise(&self) -> Exercise {
        let prescription = match self.dose {
            Dose::Minutes(minutes) => Prescription::Minutes(minutes),
            Dose::Reps(scheme) => Prescription::Reps(scheme.to_string()),
            Dose::Timed(hold) => Prescription::Timed(hold.to_string()),
        };
        Exercise {
            name: self.name.to_string(),
            prescription,
            intensity: self.intensity,
        }
    }
}

static CARDIO_BEGINNER: [ExerciseTemplate; 3] = [
    ExerciseTemplate::new("Brisk walking", Dose::Minutes(10), Intensity::Light),
    ExerciseTemplate::new("Stair climbing", Dose::Minutes(5), Intensity::Moderate),
    ExerciseTemplate::new("Warm-up drills", Dose::Minutes(5), Intensity::Light),
];

static CARDIO_INTERMEDIATE: [ExerciseTemplate; 3] = [
    ExerciseTemplate::new("Light jogging", Dose::Minutes(15), Intensity::Moderate),
    ExerciseTemplate::new("Jump rope", Dose::Minutes(10), Intensity::High),
    ExerciseTemplate::new("Aerobics", Dose::Minutes(15), Intensity::Moderate),
];

static CARDIO_ADVANCED: [ExerciseTemplate; 3] = [
    ExerciseTemplate::new("Fast running", Dose::Minutes(20), Intensity::High),
    ExerciseTemplate::new("Interval training", Dose::Minutes(15), Intensity::VeryHigh),
    ExerciseTemplate::new("Burpees", Dose::Minutes(10), Intensity::High),
];

static STRENGTH_BEGINNER: [ExerciseTemplate; 3] = [
    ExerciseTemplate::new("Modified push-ups", Dose::Reps("3x8"), Intensity::Light),
    ExerciseTemplate::new("Squats", Dose::Reps("3x10"), Intensity::Moderate),
    ExerciseTemplate::new("Plank", Dose::Timed("30 seconds x3"), Intensity::Moderate),
];

static STRENGTH_INTERMEDIATE: [ExerciseTemplate; 3] = [
    ExerciseTemplate::new("Push-ups", Dose::Reps("3x12"), Intensity::Moderate),
    ExerciseTemplate::new("Weighted squats", Dose::Reps("4x10"), Intensity::High),
    ExerciseTemplate::new("Pull-ups", Dose::Reps("3x5"), Intensity::High),
];

static STRENGTH_ADVANCED: [ExerciseTemplate; 3] = [
    ExerciseTemplate::new("Plyometric push-ups", Dose::Reps("4x8"), Intensity::High),
    ExerciseTemplate::new("Deadlift", Dose::Reps("4x6"), Intensity::VeryHigh),
    ExerciseTemplate::new("Compound lifts", Dose::Reps("5x5"), Intensity::VeryHigh),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Requested workout type label
    pub workout_type: String,
    /// Requested fitness level label
    pub level: String,
    pub total_duration: u32,
    pub estimated_calories: Decimal,
    /// Goals the plan was requested for; they do not change exercise selection
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBlock {
    pub duration: u32,
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainWorkout {
    pub exercises: Vec<Exercise>,
    pub rest_between_sets: String,
}

/// Structured session plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub session_info: SessionInfo,
    pub warm_up: PlanBlock,
    pub main_workout: MainWorkout,
    pub cool_down: PlanBlock,
    pub tips: Vec<String>,
}

/// Workout session planner
pub struct WorkoutPlanner;

impl WorkoutPlanner {
    /// Create a plan for a known level and workout type
    pub fn create_plan(
        fitness_level: FitnessLevel,
        workout_type: WorkoutType,
        duration_minutes: u32,
        goals: &[String],
    ) -> WorkoutPlan {
        Self::build_plan(
            Some(fitness_level),
            fitness_level.label(),
            Some(workout_type),
            workout_type.label(),
            duration_minutes,
            goals,
        )
    }

    /// Create a plan from free-text labels. Unrecognized labels produce an
    /// empty exercise list and the default calorie rate rather than an error.
    pub fn create_plan_from_labels(
        fitness_level: &str,
        workout_type: &str,
        duration_minutes: u32,
        goals: &[String],
    ) -> WorkoutPlan {
        let level = FitnessLevel::from_label(fitness_level);
        let kind = WorkoutType::from_label(workout_type);

        if level.is_none() || kind.is_none() {
            warn!(
                level = %fitness_level,
                workout_type = %workout_type,
                "Unrecognized plan labels, falling back to defaults"
            );
        }

        Self::build_plan(
            level,
            level.map_or(fitness_level, |l| l.label()),
            kind,
            kind.map_or(workout_type, |k| k.label()),
            duration_minutes,
            goals,
        )
    }

    fn build_plan(
        level: Option<FitnessLevel>,
        level_label: &str,
        workout_type: Option<WorkoutType>,
        type_label: &str,
        duration_minutes: u32,
        goals: &[String],
    ) -> WorkoutPlan {
        let exercises = match (workout_type, level) {
            (Some(kind), Some(level)) => Self::select_exercises(kind, level),
            _ => Vec::new(),
        };
        let rate = match (workout_type, level) {
            (Some(kind), Some(level)) => Self::calories_per_minute(kind, level),
            _ => DEFAULT_CALORIES_PER_MINUTE,
        };
        let estimated_calories = Decimal::from(duration_minutes) * Decimal::from(rate);

        debug!(
            workout_type = %type_label,
            level = %level_label,
            duration = duration_minutes,
            exercises = exercises.len(),
            calories = %estimated_calories,
            "Created workout plan"
        );

        WorkoutPlan {
            session_info: SessionInfo {
                workout_type: type_label.to_string(),
                level: level_label.to_string(),
                total_duration: duration_minutes,
                estimated_calories,
                goals: goals.to_vec(),
            },
            warm_up: PlanBlock {
                duration: WARM_UP_MINUTES,
                exercises: WARM_UP_EXERCISES.iter().map(|e| e.to_string()).collect(),
            },
            main_workout: MainWorkout {
                exercises,
                rest_between_sets: REST_BETWEEN_SETS.to_string(),
            },
            cool_down: PlanBlock {
                duration: COOL_DOWN_MINUTES,
                exercises: COOL_DOWN_EXERCISES.iter().map(|e| e.to_string()).collect(),
            },
            tips: Self::tips(workout_type),
        }
    }

    /// Exercise set for a type/level pair. Flexibility and HIIT have no
    /// table yet and return an empty list.
    pub fn select_exercises(workout_type: WorkoutType, level: FitnessLevel) -> Vec<Exercise> {
        let table: &[ExerciseTemplate] = match (workout_type, level) {
            (WorkoutType::Cardio, FitnessLevel::Beginner) => &CARDIO_BEGINNER,
            (WorkoutType::Cardio, FitnessLevel::Intermediate) => &CARDIO_INTERMEDIATE,
            (WorkoutType::Cardio, FitnessLevel::Advanced) => &CARDIO_ADVANCED,
            (WorkoutType::Strength, FitnessLevel::Beginner) => &STRENGTH_BEGINNER,
            (WorkoutType::Strength, FitnessLevel::Intermediate) => &STRENGTH_INTERMEDIATE,
            (WorkoutType::Strength, FitnessLevel::Advanced) => &STRENGTH_ADVANCED,
            (WorkoutType::Flexibility, _) | (WorkoutType::Hiit, _) => &[],
        };
        table.iter().map(ExerciseTemplate::to_exercise).collect()
    }

    /// Calorie burn rate per minute
    pub fn calories_per_minute(workout_type: WorkoutType, level: FitnessLevel) -> u32 {
        match (workout_type, level) {
            (WorkoutType::Cardio, FitnessLevel::Beginner) => 8,
            (WorkoutType::Cardio, FitnessLevel::Intermediate) => 12,
            (WorkoutType::Cardio, FitnessLevel::Advanced) => 15,
            (WorkoutType::Strength, FitnessLevel::Beginner) => 6,
            (WorkoutType::Strength, FitnessLevel::Intermediate) => 8,
            (WorkoutType::Strength, FitnessLevel::Advanced) => 10,
            (WorkoutType::Hiit, FitnessLevel::Beginner) => 12,
            (WorkoutType::Hiit, FitnessLevel::Intermediate) => 15,
            (WorkoutType::Hiit, FitnessLevel::Advanced) => 18,
            (WorkoutType::Flexibility, _) => DEFAULT_CALORIES_PER_MINUTE,
        }
    }

    /// General tips followed by any type-specific ones
    pub fn tips(workout_type: Option<WorkoutType>) -> Vec<String> {
        let specific: &[&str] = match workout_type {
            Some(WorkoutType::Cardio) => &[
                "Start at a moderate pace and build up gradually",
                "Keep your breathing steady",
            ],
            Some(WorkoutType::Strength) => &[
                "Focus on correct form over heavier weight",
                "Let muscles rest 48 hours between sessions",
            ],
            _ => &[],
        };

        GENERAL_TIPS
            .iter()
            .chain(specific.iter())
            .map(|tip| tip.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_beginner_cardio_plan() {
        let plan = WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Cardio, 45, &[]);

        assert_eq!(plan.session_info.workout_type, "CARDIO");
        assert_eq!(plan.session_info.level, "BEGINNER");
        assert_eq!(plan.session_info.total_duration, 45);
        assert_eq!(plan.session_info.estimated_calories, dec!(360)); // 45 * 8

        let exercises = &plan.main_workout.exercises;
        assert_eq!(exercises.len(), 3);
        assert_eq!(exercises[0].name, "Brisk walking");
        assert_eq!(exercises[0].prescription, Prescription::Minutes(10));
        assert_eq!(exercises[0].intensity, Intensity::Light);

        assert_eq!(plan.warm_up.duration, 5);
        assert_eq!(plan.warm_up.exercises.len(), 2);
        assert_eq!(plan.cool_down.duration, 5);
        assert_eq!(plan.cool_down.exercises.len(), 2);
        assert_eq!(plan.tips.len(), 5);
    }

    #[test]
    fn test_strength_plan_uses_rep_schemes() {
        let plan =
            WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Strength, 30, &[]);
        let exercises = &plan.main_workout.exercises;

        assert_eq!(exercises[0].prescription, Prescription::Reps("3x8".to_string()));
        assert_eq!(
            exercises[2].prescription,
            Prescription::Timed("30 seconds x3".to_string())
        );
        assert_eq!(plan.session_info.estimated_calories, dec!(180)); // 30 * 6
    }

    #[test]
    fn test_every_cardio_and_strength_pair_has_three_exercises() {
        for kind in [WorkoutType::Cardio, WorkoutType::Strength] {
            for level in FitnessLevel::ALL {
                assert_eq!(WorkoutPlanner::select_exercises(kind, level).len(), 3);
            }
        }
    }

    #[test]
    fn test_hiit_has_rate_but_no_exercises() {
        let plan = WorkoutPlanner::create_plan(FitnessLevel::Advanced, WorkoutType::Hiit, 20, &[]);
        assert!(plan.main_workout.exercises.is_empty());
        assert_eq!(plan.session_info.estimated_calories, dec!(360)); // 20 * 18
        assert_eq!(plan.tips.len(), 3);
    }

    #[test]
    fn test_flexibility_uses_default_rate() {
        let plan =
            WorkoutPlanner::create_plan(FitnessLevel::Beginner, WorkoutType::Flexibility, 10, &[]);
        assert!(plan.main_workout.exercises.is_empty());
        assert_eq!(plan.session_info.estimated_calories, dec!(80));
    }

    #[test]
    fn test_unknown_labels_degrade_gracefully() {
        let plan = WorkoutPlanner::create_plan_from_labels("expert", "yoga", 30, &[]);
        assert_eq!(plan.session_info.level, "expert");
        assert_eq!(plan.session_info.workout_type, "yoga");
        assert!(plan.main_workout.exercises.is_empty());
        assert_eq!(plan.session_info.estimated_calories, dec!(240)); // 30 * 8
        assert_eq!(plan.tips.len(), 3);

        let plan = WorkoutPlanner::create_plan_from_labels("advanced", "cardio", 30, &[]);
        assert_eq!(plan.session_info.level, "ADVANCED");
        assert_eq!(plan.session_info.estimated_calories, dec!(450));
    }

    #[test]
    fn test_goals_are_echoed() {
        let goals = vec!["weight loss".to_string()];
        let plan =
            WorkoutPlanner::create_plan(FitnessLevel::Intermediate, WorkoutType::Cardio, 30, &goals);
        assert_eq!(plan.session_info.goals, goals);
    }
}
