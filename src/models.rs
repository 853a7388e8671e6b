use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Ordinal skill tier used to select exercise difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    /// Parse a free-text label; unrecognized labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" | "1" => Some(Self::Beginner),
            "intermediate" | "2" => Some(Self::Intermediate),
            "advanced" | "3" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Strict variant of [`FitnessLevel::from_label`] for input collectors
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        Self::from_label(label).ok_or_else(|| ValidationError::UnknownFitnessLevel {
            label: label.to_string(),
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category of exercise session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Hiit,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Flexibility,
        WorkoutType::Hiit,
    ];

    /// Parse a free-text label; unrecognized labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "cardio" => Some(Self::Cardio),
            "strength" => Some(Self::Strength),
            "flexibility" => Some(Self::Flexibility),
            "hiit" => Some(Self::Hiit),
            _ => None,
        }
    }

    /// Strict variant of [`WorkoutType::from_label`] for input collectors
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        Self::from_label(label).ok_or_else(|| ValidationError::UnknownWorkoutType {
            label: label.to_string(),
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cardio => "CARDIO",
            Self::Strength => "STRENGTH",
            Self::Flexibility => "FLEXIBILITY",
            Self::Hiit => "HIIT",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse weight classification derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Each band includes its lower bound:
    /// - Underweight: < 18.5
    /// - Normal: 18.5 - 24.99
    /// - Overweight: 25.0 - 29.99
    /// - Obese: >= 30.0
    pub fn from_bmi(bmi: Decimal) -> Self {
        if bmi < dec!(18.5) {
            Self::Underweight
        } else if bmi < dec!(25) {
            Self::Normal
        } else if bmi < dec!(30) {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Physical and preference attributes of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Weight in kilograms
    pub weight: Decimal,

    /// Height in centimeters
    pub height: Decimal,

    /// Self-reported fitness level
    pub fitness_level: FitnessLevel,

    /// Free-text goal labels, in priority order
    #[serde(default)]
    pub goals: Vec<String>,

    /// Informational only
    #[serde(default)]
    pub health_conditions: Vec<String>,

    #[serde(default)]
    pub preferred_workouts: Vec<WorkoutType>,

    /// Minutes per day available for training
    #[serde(default = "default_available_time")]
    pub available_time: u32,
}

fn default_available_time() -> u32 {
    30
}

impl UserProfile {
    /// Build a validated profile with no goals or preferences
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: Decimal,
        height: Decimal,
        fitness_level: FitnessLevel,
    ) -> Result<Self, ValidationError> {
        let profile = Self {
            name: name.into(),
            age,
            weight,
            height,
            fitness_level,
            goals: Vec::new(),
            health_conditions: Vec::new(),
            preferred_workouts: Vec::new(),
            available_time: default_available_time(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_health_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.health_conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferred_workouts(mut self, workouts: Vec<WorkoutType>) -> Self {
        self.preferred_workouts = workouts;
        self
    }

    pub fn with_available_time(mut self, minutes: u32) -> Self {
        self.available_time = minutes;
        self
    }

    /// Check the construction invariants. Profiles deserialized from files
    /// bypass [`UserProfile::new`], so callers loading them must run this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.age == 0 {
            return Err(ValidationError::InvalidAge { age: self.age });
        }
        if self.weight <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveWeight {
                weight: self.weight,
            });
        }
        if self.height <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveHeight {
                height: self.height,
            });
        }
        Ok(())
    }

    /// Body Mass Index: weight(kg) / height(m)^2, rounded to 2 decimals.
    ///
    /// Returns zero when the height is zero or the quotient falls outside
    /// the `Decimal` range.
    pub fn calculate_bmi(&self) -> Decimal {
        let height_m = self.height / dec!(100);
        height_m
            .checked_mul(height_m)
            .filter(|denominator| !denominator.is_zero())
            .and_then(|denominator| self.weight.checked_div(denominator))
            .map(|bmi| bmi.round_dp(2))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.calculate_bmi())
    }
}

/// Exercise intensity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    Moderate,
    High,
    VeryHigh,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A completed training session kept in a user's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,

    /// Exercise names performed
    #[serde(default)]
    pub exercises: Vec<String>,

    pub calories_burned: u32,
    pub intensity: Intensity,

    #[serde(default)]
    pub notes: String,
}
