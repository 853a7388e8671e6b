//! Property-based tests for the coaching rules

use fitcoach::health::{GoalPolicy, HealthAnalyzer, Recommendation};
use fitcoach::models::{BmiCategory, FitnessLevel, UserProfile, WorkoutType};
use fitcoach::planner::WorkoutPlanner;
use fitcoach::progress::{ProgressTracker, MAX_NEXT_GOALS};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn category_rank(category: BmiCategory) -> u8 {
    match category {
        BmiCategory::Underweight => 0,
        BmiCategory::Normal => 1,
        BmiCategory::Overweight => 2,
        BmiCategory::Obese => 3,
    }
}

fn level_strategy() -> impl Strategy<Value = FitnessLevel> {
    prop::sample::select(FitnessLevel::ALL.to_vec())
}

fn workout_type_strategy() -> impl Strategy<Value = WorkoutType> {
    prop::sample::select(WorkoutType::ALL.to_vec())
}

proptest! {
    /// BMI category never decreases as BMI grows
    #[test]
    fn test_bmi_category_is_monotonic(a in 0u32..6000u32, b in 0u32..6000u32) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = Decimal::new(low as i64, 2);
        let high = Decimal::new(high as i64, 2);

        prop_assert!(
            category_rank(BmiCategory::from_bmi(low)) <= category_rank(BmiCategory::from_bmi(high))
        );
    }

    /// Recommendation agrees with the category everywhere except at exactly 25.0
    #[test]
    fn test_recommendation_follows_bmi(bmi in 0u32..6000u32) {
        let bmi = Decimal::new(bmi as i64, 2);
        let recommendation = HealthAnalyzer::recommend(bmi);

        match BmiCategory::from_bmi(bmi) {
            BmiCategory::Underweight => prop_assert_eq!(recommendation, Recommendation::Bulk),
            BmiCategory::Normal => prop_assert_eq!(recommendation, Recommendation::Maintain),
            BmiCategory::Overweight | BmiCategory::Obese => {
                if bmi == Decimal::new(25, 0) {
                    prop_assert_eq!(recommendation, Recommendation::Maintain);
                } else {
                    prop_assert_eq!(recommendation, Recommendation::Cut);
                }
            }
        }
    }

    #[test]
    fn test_next_goals_bounded(
        workouts in 0u32..100u32,
        days in 0u32..100u32,
        current in 400u32..1500u32,
        initial in 400u32..1500u32,
    ) {
        let result = ProgressTracker::analyze(
            Decimal::new(current as i64, 1),
            Some(Decimal::new(initial as i64, 1)),
            workouts,
            days,
        );
        prop_assert!(result.next_goals.len() <= MAX_NEXT_GOALS);
    }

    #[test]
    fn test_plan_calories_scale_with_duration(
        level in level_strategy(),
        kind in workout_type_strategy(),
        duration in 0u32..240u32,
    ) {
        let plan = WorkoutPlanner::create_plan(level, kind, duration, &[]);
        let rate = Decimal::from(WorkoutPlanner::calories_per_minute(kind, level));

        prop_assert_eq!(plan.session_info.estimated_calories, Decimal::from(duration) * rate);
        prop_assert_eq!(plan.warm_up.duration, 5);
        prop_assert_eq!(plan.cool_down.duration, 5);
    }

    /// Fallback keeps every distinct goal; strict keeps only known ones
    #[test]
    fn test_goal_policies_cover_distinct_goals(
        goals in prop::collection::vec(
            prop::sample::select(vec![
                "weight loss",
                "muscle building",
                "fitness improvement",
                "strength gain",
                "better sleep",
            ]),
            0..8,
        )
    ) {
        let goals: Vec<String> = goals.into_iter().map(String::from).collect();
        let mut distinct = goals.clone();
        distinct.sort();
        distinct.dedup();

        let fallback = HealthAnalyzer::new(GoalPolicy::Fallback).analyze_goals(&goals);
        prop_assert_eq!(fallback.len(), distinct.len());

        let strict = HealthAnalyzer::new(GoalPolicy::StrictDrop).analyze_goals(&goals);
        prop_assert!(strict.len() <= fallback.len());
        prop_assert!(strict
            .iter()
            .all(|g| g.goal != "strength gain" && g.goal != "better sleep"));
    }

    #[test]
    fn test_bmi_never_negative(weight in 1u32..300u32, height in 50u32..250u32) {
        let profile = UserProfile::new(
            "Prop",
            30,
            Decimal::from(weight),
            Decimal::from(height),
            FitnessLevel::Beginner,
        )
        .unwrap();
        prop_assert!(profile.calculate_bmi() > Decimal::ZERO);
    }
}
