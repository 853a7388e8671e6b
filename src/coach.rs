use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::error::Result;
use crate::health::{AnalysisResult, HealthAnalyzer};
use crate::models::{UserProfile, WorkoutSession, WorkoutType};
use crate::planner::{WorkoutPlan, WorkoutPlanner};
use crate::progress::{ProgressResult, ProgressTracker};
use crate::store::{ProfileStore, UserId};

/// Coaching facade tying registered users to the analysis engine
pub struct Coach<S: ProfileStore> {
    store: S,
    analyzer: HealthAnalyzer,
}

impl<S: ProfileStore> Coach<S> {
    pub fn new(store: S, analyzer: HealthAnalyzer) -> Self {
        Self { store, analyzer }
    }

    /// Build a coach whose analyzer follows the configured goal policy
    pub fn from_config(store: S, config: &AppConfig) -> Self {
        Self::new(store, HealthAnalyzer::new(config.analysis.goal_policy))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(skip(self, profile), fields(name = %profile.name))]
    pub fn register(&mut self, profile: UserProfile) -> Result<UserId> {
        let id = self.store.create(profile)?;
        info!(user_id = %id, "Registered user");
        Ok(id)
    }

    pub fn analyze_health(&self, id: &UserId) -> Result<AnalysisResult> {
        let profile = self.store.get(id)?;
        Ok(self.analyzer.analyze(profile))
    }

    /// Plan a session at the user's fitness level, tagged with their goals
    pub fn create_workout_plan(
        &self,
        id: &UserId,
        workout_type: WorkoutType,
        duration_minutes: u32,
    ) -> Result<WorkoutPlan> {
        let profile = self.store.get(id)?;
        Ok(WorkoutPlanner::create_plan(
            profile.fitness_level,
            workout_type,
            duration_minutes,
            &profile.goals,
        ))
    }

    /// Progress against the weight the user registered with
    pub fn track_progress(
        &self,
        id: &UserId,
        current_weight: Decimal,
        workouts_completed: u32,
        days_active: u32,
    ) -> Result<ProgressResult> {
        let profile = self.store.get(id)?;
        Ok(ProgressTracker::analyze(
            current_weight,
            Some(profile.weight),
            workouts_completed,
            days_active,
        ))
    }

    pub fn log_session(&mut self, id: &UserId, session: WorkoutSession) -> Result<()> {
        self.store.record_session(id, session)
    }

    /// Progress using the logged sessions: one workout per session, one
    /// active day per distinct session date
    pub fn track_progress_from_history(
        &self,
        id: &UserId,
        current_weight: Decimal,
    ) -> Result<ProgressResult> {
        let sessions = self.store.sessions(id)?;
        let days: BTreeSet<_> = sessions.iter().map(|s| s.date).collect();

        self.track_progress(
            id,
            current_weight,
            sessions.len() as u32,
            days.len() as u32,
        )
    }
}
