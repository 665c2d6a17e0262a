use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

// Shared handle to the in-memory activity directory. The set of activities
// is fixed after construction; only each activity's roster mutates. Every
// check-then-mutate runs under the write lock so two concurrent signups
// cannot both pass the capacity or duplicate check.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityDirectory {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub async fn list(&self) -> BTreeMap<String, Activity> {
        self.inner.read().await.clone()
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        if activity.participants.len() >= activity.max_participants {
            return Err(DirectoryError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered);
        };

        activity.participants.remove(pos);
        Ok(())
    }
}
