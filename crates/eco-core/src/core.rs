//! Public surface of the core, called by presentation collaborators.
//!
//! Every mutating operation follows the same discipline: load the
//! current snapshot, mutate it, save it back, then return. Indices are
//! only valid against the snapshot the caller last read; a stale index
//! surfaces as `Index`, and the caller should refresh its view.

use chrono::NaiveDate;

use crate::catalog;
use crate::constants::{ACHIEVEMENT_POINTS, ACTION_POINTS};
use crate::error::{CoreError, Result};
use crate::models::{ChallengeStatus, EcoAction, User};
use crate::store::{StorageProvider, UserStore};
use crate::transfer;

/// The Eco-Life core over an injected storage provider.
pub struct EcoCore<S: StorageProvider> {
    store: UserStore<S>,
}

impl<S: StorageProvider> EcoCore<S> {
    pub fn new(provider: S) -> Self {
        Self {
            store: UserStore::new(provider),
        }
    }

    /// Snapshot of the resident user, or `NotFound` when logged out.
    pub fn current_user(&self) -> Result<User> {
        self.store.load()
    }

    /// Sign up: create and persist a fresh user. Overwrites any resident
    /// record, the storage holds exactly one user at a time.
    pub fn create_user(&mut self, email: &str, name: &str) -> Result<User> {
        let user = User::create(email, name)?;
        self.store.save(&user)?;
        tracing::info!(email = %user.email, "user created");
        Ok(user)
    }

    /// Import a previously exported file, replacing the stored slot
    /// wholesale. Prior state is untouched when the payload is rejected.
    pub fn import_user(&mut self, text: &str) -> Result<User> {
        let user = transfer::import(text)?;
        self.store.save(&user)?;
        tracing::info!(email = %user.email, "user imported");
        Ok(user)
    }

    /// Serialize the resident user for download/exchange.
    pub fn export_user(&self) -> Result<String> {
        let user = self.store.load()?;
        transfer::export(&user)
    }

    /// Clear the stored record. Confirmation is the caller's concern.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("user logged out");
        Ok(())
    }

    /// Log an eco-action: validates, appends, awards the fixed action
    /// points, persists. Returns the created entry.
    pub fn add_action(
        &mut self,
        logged_at: &str,
        description: &str,
        impact: &str,
    ) -> Result<EcoAction> {
        let logged_at = NaiveDate::parse_from_str(logged_at.trim(), "%Y-%m-%d")
            .map_err(|_| CoreError::Validation(format!("not a valid date: {logged_at:?}")))?;
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::Validation("action description is required".into()));
        }
        let impact = impact.trim();
        if impact.is_empty() {
            return Err(CoreError::Validation("action impact is required".into()));
        }

        let mut user = self.store.load()?;
        let action = EcoAction::new(logged_at, description.to_string(), impact.to_string());
        user.actions.push(action.clone());
        user.apply_points_delta(ACTION_POINTS);
        self.store.save(&user)?;
        tracing::debug!(points = user.points, "eco-action added");
        Ok(action)
    }

    /// Delete an action by position and reverse its point contribution.
    /// The reversal clamps at zero: if the balance already clamped in the
    /// past, the true historical total is not restored.
    pub fn delete_action(&mut self, index: usize) -> Result<()> {
        let mut user = self.store.load()?;
        if index >= user.actions.len() {
            return Err(CoreError::Index {
                collection: "actions",
                index,
            });
        }
        user.actions.remove(index);
        user.apply_points_delta(-ACTION_POINTS);
        self.store.save(&user)?;
        tracing::debug!(points = user.points, "eco-action deleted");
        Ok(())
    }

    /// Seed the fixed challenge and achievement catalogs for the resident
    /// user. Idempotent: a collection that is already populated is left
    /// alone, never duplicated.
    pub fn seed_catalogs(&mut self) -> Result<()> {
        let mut user = self.store.load()?;
        let mut changed = false;
        if user.challenges.is_empty() {
            user.challenges = catalog::default_challenges();
            changed = true;
        }
        if user.achievements.is_empty() {
            user.achievements = catalog::default_achievements();
            changed = true;
        }
        if changed {
            self.store.save(&user)?;
            tracing::info!("catalogs seeded");
        }
        Ok(())
    }

    /// Set a challenge's status by position.
    ///
    /// Completing a challenge for the first time stamps `completed_at`
    /// and awards its reward; completing it again is an idempotent
    /// no-op. Moving away from Completed clears the stamp but keeps the
    /// points already earned, and the one-time `rewarded` flag ensures a
    /// later re-completion never grants the reward a second time.
    pub fn set_challenge_status(&mut self, index: usize, status: &str) -> Result<()> {
        let new_status = ChallengeStatus::parse(status)
            .ok_or_else(|| CoreError::InvalidTransition(status.to_string()))?;

        let mut user = self.store.load()?;
        let award = {
            let challenge = user
                .challenges
                .get_mut(index)
                .ok_or(CoreError::Index {
                    collection: "challenges",
                    index,
                })?;
            challenge.status = new_status;
            match new_status {
                ChallengeStatus::Completed => {
                    if challenge.completed_at.is_none() {
                        challenge.completed_at = Some(chrono::Utc::now());
                    }
                    if challenge.rewarded {
                        0
                    } else {
                        challenge.rewarded = true;
                        i64::from(challenge.reward_points)
                    }
                }
                _ => {
                    challenge.completed_at = None;
                    0
                }
            }
        };
        if award > 0 {
            user.apply_points_delta(award);
        }
        self.store.save(&user)?;
        tracing::debug!(index, status = new_status.label(), points = user.points, "challenge updated");
        Ok(())
    }

    /// Mark an achievement completed by position, awarding the fixed
    /// bonus once. An already-completed achievement is idempotent
    /// success, not an error. Confirmation is the caller's concern.
    pub fn mark_achievement_completed(&mut self, index: usize) -> Result<()> {
        let mut user = self.store.load()?;
        let already = {
            let achievement = user
                .achievements
                .get_mut(index)
                .ok_or(CoreError::Index {
                    collection: "achievements",
                    index,
                })?;
            if achievement.completed {
                true
            } else {
                achievement.completed = true;
                false
            }
        };
        if already {
            tracing::debug!(index, "achievement already completed");
            return Ok(());
        }
        user.apply_points_delta(ACHIEVEMENT_POINTS);
        self.store.save(&user)?;
        tracing::debug!(index, points = user.points, "achievement completed");
        Ok(())
    }
}
