//! Profile storage used by the coach facade
//!
//! The analyzers never read from a store; they take profiles as plain
//! arguments. The store only exists so callers can register users once and
//! refer to them by id afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, StoreError};
use crate::models::{UserProfile, WorkoutSession};

/// Stable user identifier issued by a store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Keyed store of user profiles and their session history
pub trait ProfileStore {
    /// Validate and register a profile, returning its new id
    fn create(&mut self, profile: UserProfile) -> Result<UserId>;

    fn get(&self, id: &UserId) -> Result<&UserProfile>;

    /// Replace a registered profile; names stay unique across users
    fn update(&mut self, id: &UserId, profile: UserProfile) -> Result<()>;

    fn list(&self) -> Vec<(&UserId, &UserProfile)>;

    fn find_by_name(&self, name: &str) -> Option<UserId>;

    fn record_session(&mut self, id: &UserId, session: WorkoutSession) -> Result<()>;

    fn sessions(&self, id: &UserId) -> Result<&[WorkoutSession]>;
}

#[derive(Debug, Clone)]
struct UserRecord {
    profile: UserProfile,
    sessions: Vec<WorkoutSession>,
}

/// In-memory [`ProfileStore`]; contents are lost when dropped
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    users: BTreeMap<UserId, UserRecord>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn record(&self, id: &UserId) -> Result<&UserRecord> {
        self.users.get(id).ok_or_else(|| not_found(id))
    }

    fn record_mut(&mut self, id: &UserId) -> Result<&mut UserRecord> {
        self.users.get_mut(id).ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &UserId) -> crate::error::FitCoachError {
    StoreError::NotFound { id: id.to_string() }.into()
}

impl ProfileStore for InMemoryProfileStore {
    fn create(&mut self, profile: UserProfile) -> Result<UserId> {
        profile.validate()?;

        if self.find_by_name(&profile.name).is_some() {
            return Err(StoreError::Duplicate { name: profile.name }.into());
        }

        let id = UserId::new();
        self.users.insert(
            id.clone(),
            UserRecord {
                profile,
                sessions: Vec::new(),
            },
        );
        Ok(id)
    }

    fn get(&self, id: &UserId) -> Result<&UserProfile> {
        self.record(id).map(|record| &record.profile)
    }

    fn update(&mut self, id: &UserId, profile: UserProfile) -> Result<()> {
        profile.validate()?;
        self.record(id)?;

        if let Some(existing) = self.find_by_name(&profile.name) {
            if &existing != id {
                return Err(StoreError::Duplicate { name: profile.name }.into());
            }
        }

        self.record_mut(id)?.profile = profile;
        Ok(())
    }

    fn list(&self) -> Vec<(&UserId, &UserProfile)> {
        self.users
            .iter()
            .map(|(id, record)| (id, &record.profile))
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<UserId> {
        self.users
            .iter()
            .find(|(_, record)| record.profile.name == name)
            .map(|(id, _)| id.clone())
    }

    fn record_session(&mut self, id: &UserId, session: WorkoutSession) -> Result<()> {
        self.record_mut(id)?.sessions.push(session);
        Ok(())
    }

    fn sessions(&self, id: &UserId) -> Result<&[WorkoutSession]> {
        self.record(id).map(|record| record.sessions.as_slice())
    }
}
