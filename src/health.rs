//! Rule-based health analysis
//!
//! Turns a [`UserProfile`] into an [`AnalysisResult`]: BMI summary, a fitness
//! assessment, diet/training recommendations, per-goal guidance and a
//! suggested weekly schedule. Every rule is a fixed table or threshold; the
//! analyzer holds no state beyond its [`GoalPolicy`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::models::{BmiCategory, UserProfile};

/// How goals missing from the guidance table are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    /// Unknown goals get generic medium-priority guidance
    #[default]
    Fallback,
    /// Unknown goals are left out of the analysis
    StrictDrop,
}

impl std::str::FromStr for GoalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fallback" => Ok(GoalPolicy::Fallback),
            "strict" | "strict_drop" | "strict-drop" => Ok(GoalPolicy::StrictDrop),
            _ => Err(format!("Invalid goal policy: {}", s)),
        }
    }
}

/// Goals with dedicated guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    WeightLoss,
    MuscleBuilding,
    FitnessImprovement,
}

impl GoalKind {
    /// Exact-label lookup; anything else is an open-set goal
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "weight loss" => Some(Self::WeightLoss),
            "muscle building" => Some(Self::MuscleBuilding),
            "fitness improvement" => Some(Self::FitnessImprovement),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleBuilding => "muscle building",
            Self::FitnessImprovement => "fitness improvement",
        }
    }

    fn guidance(&self) -> GoalGuidance {
        match self {
            Self::WeightLoss => GoalGuidance::new(
                Priority::High,
                &["cardio", "HIIT"],
                "30-45 min/day",
            ),
            Self::MuscleBuilding => GoalGuidance::new(
                Priority::High,
                &["strength", "resistance"],
                "45-60 min, 4-5 times/week",
            ),
            Self::FitnessImprovement => GoalGuidance::new(
                Priority::Medium,
                &["cardio", "strength", "flexibility"],
                "30 min/day",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
        }
    }
}

/// Training guidance for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalGuidance {
    pub priority: Priority,
    pub recommended_workouts: Vec<String>,
    pub duration: String,
}

impl GoalGuidance {
    fn new(priority: Priority, workouts: &[&str], duration: &str) -> Self {
        Self {
            priority,
            recommended_workouts: workouts.iter().map(|w| w.to_string()).collect(),
            duration: duration.to_string(),
        }
    }

    /// Generic guidance for goals without a dedicated entry
    pub fn fallback() -> Self {
        Self::new(Priority::Medium, &["varied"], "30 min/day")
    }
}

/// One analyzed goal, keyed by the label the user supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnalysis {
    pub goal: String,
    #[serde(flatten)]
    pub guidance: GoalGuidance,
}

/// Overall assessment derived from age and BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessAssessment {
    Excellent,
    FlexibilityAndBalance,
    GoodImprovable,
}

impl fmt::Display for FitnessAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Excellent => "Excellent health for your age",
            Self::FlexibilityAndBalance => "Focus on flexibility and balance exercises",
            Self::GoodImprovable => "Good health with room for improvement",
        };
        write!(f, "{}", text)
    }
}

/// Diet and training direction derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Gain mass
    Bulk,
    /// Lose fat
    Cut,
    Maintain,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Bulk => "Increase calorie intake and strength training to build muscle",
            Self::Cut => "Reduce calorie intake and increase cardio training",
            Self::Maintain => "Keep up your current healthy lifestyle",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub frequency: String,
    pub session_duration: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub age: u32,
    pub bmi: Decimal,
    pub bmi_category: BmiCategory,
}

/// Full health analysis for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub user_info: UserInfo,
    pub fitness_assessment: FitnessAssessment,
    pub recommendations: Vec<Recommendation>,
    pub goal_analysis: Vec<GoalAnalysis>,
    pub weekly_schedule: WeeklySchedule,
}

/// Health analyzer
#[derive(Debug, Clone, Default)]
pub struct HealthAnalyzer {
    goal_policy: GoalPolicy,
}

impl HealthAnalyzer {
    pub fn new(goal_policy: GoalPolicy) -> Self {
        Self { goal_policy }
    }

    pub fn goal_policy(&self) -> GoalPolicy {
        self.goal_policy
    }

    /// Analyze a profile
    pub fn analyze(&self, profile: &UserProfile) -> AnalysisResult {
        let bmi = profile.calculate_bmi();
        let bmi_category = BmiCategory::from_bmi(bmi);

        debug!(
            name = %profile.name,
            bmi = %bmi,
            category = ?bmi_category,
            policy = ?self.goal_policy,
            "Analyzing profile"
        );

        AnalysisResult {
            user_info: UserInfo {
                name: profile.name.clone(),
                age: profile.age,
                bmi,
                bmi_category,
            },
            fitness_assessment: Self::assess_fitness(profile.age, bmi),
            recommendations: vec![Self::recommend(bmi)],
            goal_analysis: self.analyze_goals(&profile.goals),
            weekly_schedule: Self::suggest_weekly_schedule(profile.available_time),
        }
    }

    /// BMI-driven recommendation.
    ///
    /// Only two bands above underweight: anything strictly over 25 is a cut,
    /// so a BMI of exactly 25.0 is Overweight by category but still gets the
    /// maintenance recommendation.
    pub fn recommend(bmi: Decimal) -> Recommendation {
        if bmi < dec!(18.5) {
            Recommendation::Bulk
        } else if bmi > dec!(25) {
            Recommendation::Cut
        } else {
            Recommendation::Maintain
        }
    }

    /// First matching rule wins
    pub fn assess_fitness(age: u32, bmi: Decimal) -> FitnessAssessment {
        if age < 30 && bmi >= dec!(18.5) && bmi <= dec!(24.9) {
            FitnessAssessment::Excellent
        } else if age >= 50 {
            FitnessAssessment::FlexibilityAndBalance
        } else {
            FitnessAssessment::GoodImprovable
        }
    }

    /// Guidance per goal, in input order, one entry per distinct label
    pub fn analyze_goals(&self, goals: &[String]) -> Vec<GoalAnalysis> {
        let mut analysis: Vec<GoalAnalysis> = Vec::with_capacity(goals.len());

        for goal in goals {
            if analysis.iter().any(|entry| &entry.goal == goal) {
                continue;
            }

            let guidance = match (GoalKind::from_label(goal), self.goal_policy) {
                (Some(kind), _) => kind.guidance(),
                (None, GoalPolicy::Fallback) => {
                    debug!(goal = %goal, "No dedicated guidance, using fallback");
                    GoalGuidance::fallback()
                }
                (None, GoalPolicy::StrictDrop) => {
                    warn!(goal = %goal, "Dropping goal without guidance");
                    continue;
                }
            };

            analysis.push(GoalAnalysis {
                goal: goal.clone(),
                guidance,
            });
        }

        analysis
    }

    /// Schedule bands: < 30, < 60, and 60+ minutes per day
    pub fn suggest_weekly_schedule(available_time: u32) -> WeeklySchedule {
        let (frequency, session_duration, focus) = if available_time < 30 {
            ("3-4 days/week", "20-25 min", "Short high-intensity sessions")
        } else if available_time < 60 {
            ("4-5 days/week", "30-45 min", "Balance between cardio and strength")
        } else {
            ("5-6 days/week", "45-60 min", "Comprehensive varied program")
        };

        WeeklySchedule {
            frequency: frequency.to_string(),
            session_duration: session_duration.to_string(),
            focus: focus.to_string(),
        }
    }
}
