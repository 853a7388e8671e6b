//! Progress tracking
//!
//! Compares current weight against a starting weight and turns workout
//! adherence counters into a commitment score, motivational messages and
//! up to three suggestions for the next training block.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Maximum number of next-goal suggestions returned
pub const MAX_NEXT_GOALS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    pub initial_weight: Option<Decimal>,
    pub current_weight: Decimal,
    /// Positive means weight lost
    pub change: Decimal,
    pub change_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub workouts_completed: u32,
    pub days_active: u32,
    /// 0-100, one decimal
    pub commitment_score: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotivationalMessage {
    WeightLost { kg: Decimal },
    SlightGain,
    Maintaining,
    ExcellentCommitment,
    GoodCommitment,
    IncreaseFrequency,
}

impl fmt::Display for MotivationalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLost { kg } => write!(f, "Great job! You lost {:.1} kg", kg),
            Self::SlightGain => write!(f, "Slight weight gain - it may be muscle!"),
            Self::Maintaining => write!(f, "Keep maintaining your weight"),
            Self::ExcellentCommitment => write!(f, "Excellent commitment! Keep it up"),
            Self::GoodCommitment => write!(f, "Good commitment, you can improve it further"),
            Self::IncreaseFrequency => write!(f, "Try increasing the number of training days"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextGoal {
    TrainFourDays,
    BreakPlateau,
    MeasureCircumference,
    ImproveFlexibility,
}

impl fmt::Display for NextGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TrainFourDays => "Goal: train 4 days next week",
            Self::BreakPlateau => "Goal: change your routine to break the plateau",
            Self::MeasureCircumference => "Goal: measure waist and muscle circumference",
            Self::ImproveFlexibility => "Goal: improve body flexibility",
        };
        write!(f, "{}", text)
    }
}

/// Progress analysis record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResult {
    pub weight_progress: WeightProgress,
    pub activity_stats: ActivityStats,
    pub motivational_messages: Vec<MotivationalMessage>,
    pub next_goals: Vec<NextGoal>,
}

/// Progress tracker
pub struct ProgressTracker;

impl ProgressTracker {
    /// Analyze progress since the starting weight.
    ///
    /// A missing or zero initial weight yields zero change rather than a
    /// division by zero.
    pub fn analyze(
        current_weight: Decimal,
        initial_weight: Option<Decimal>,
        workouts_completed: u32,
        days_active: u32,
    ) -> ProgressResult {
        let (change, change_percent) = Self::weight_change(current_weight, initial_weight);
        let commitment = Self::commitment_score(workouts_completed, days_active);

        debug!(
            change = %change,
            change_percent = %change_percent,
            commitment = %commitment,
            "Analyzed progress"
        );

        ProgressResult {
            weight_progress: WeightProgress {
                initial_weight,
                current_weight,
                change,
                change_percent,
            },
            activity_stats: ActivityStats {
                workouts_completed,
                days_active,
                commitment_score: commitment.round_dp(1),
            },
            motivational_messages: Self::motivational_messages(change, commitment),
            next_goals: Self::suggest_next_goals(commitment, change),
        }
    }

    /// Returns (change, percent); percent rounded to 1 decimal
    ///
    /// Results outside the `Decimal` range are treated like a missing
    /// initial weight.
    pub fn weight_change(current: Decimal, initial: Option<Decimal>) -> (Decimal, Decimal) {
        initial
            .filter(|initial| !initial.is_zero())
            .and_then(|initial| {
                let change = initial.checked_sub(current)?;
                let percent = change.checked_div(initial)?.checked_mul(dec!(100))?;
                Some((change, percent.round_dp(1)))
            })
            .unwrap_or((Decimal::ZERO, Decimal::ZERO))
    }

    /// Workouts per active day as a percentage, capped at 100. Unrounded.
    pub fn commitment_score(workouts_completed: u32, days_active: u32) -> Decimal {
        let days = Decimal::from(days_active.max(1));
        let score = Decimal::from(workouts_completed) / days * dec!(100);
        score.min(dec!(100))
    }

    /// One weight message followed by one commitment message
    pub fn motivational_messages(change: Decimal, commitment: Decimal) -> Vec<MotivationalMessage> {
        let weight_message = if change > Decimal::ZERO {
            MotivationalMessage::WeightLost {
                kg: change.round_dp(1),
            }
        } else if change < dec!(-1) {
            MotivationalMessage::SlightGain
        } else {
            MotivationalMessage::Maintaining
        };

        let commitment_message = if commitment >= dec!(80) {
            MotivationalMessage::ExcellentCommitment
        } else if commitment >= dec!(60) {
            MotivationalMessage::GoodCommitment
        } else {
            MotivationalMessage::IncreaseFrequency
        };

        vec![weight_message, commitment_message]
    }

    /// Ordered suggestions, truncated to [`MAX_NEXT_GOALS`]
    pub fn suggest_next_goals(commitment: Decimal, change: Decimal) -> Vec<NextGoal> {
        let mut suggestions = Vec::with_capacity(4);

        if commitment < dec!(70) {
            suggestions.push(NextGoal::TrainFourDays);
        }
        if change.abs() < dec!(0.5) {
            suggestions.push(NextGoal::BreakPlateau);
        }
        suggestions.push(NextGoal::MeasureCircumference);
        suggestions.push(NextGoal::ImproveFlexibility);

        suggestions.truncate(MAX_NEXT_GOALS);
        suggestions
    }
}
