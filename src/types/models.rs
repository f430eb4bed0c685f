use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
}

impl Activity {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketList {
    pub name: String,
    pub description: String,
    pub activities: Vec<Activity>,
}

impl BucketList {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            activities: Vec::new(),
        }
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
    }

    /// Removes the first activity with a matching title.
    pub fn remove_activity(&mut self, title: &str) -> Option<Activity> {
        let index = self.activities.iter().position(|a| a.title == title)?;
        Some(self.activities.remove(index))
    }
}

/// A registered user as held in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub bucket_lists: BTreeMap<String, BucketList>,
}

impl User {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            bucket_lists: BTreeMap::new(),
        }
    }
}

/// Persisted account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Persisted bucket list row. Titles are unique across all accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketListRecord {
    pub title: String,
    pub description: String,
    pub account: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_activity_takes_first_match_only() {
        let mut list = BucketList::new("Travel", "See the world");
        list.add_activity(Activity::new("Skydive", "first"));
        list.add_activity(Activity::new("Hike", "Kilimanjaro"));
        list.add_activity(Activity::new("Skydive", "second"));

        let removed = list.remove_activity("Skydive").unwrap();
        assert_eq!(removed.description, "first");
        assert_eq!(list.activities.len(), 2);
        assert_eq!(list.activities[1], Activity::new("Skydive", "second"));
    }

    #[test]
    fn test_remove_missing_activity_is_none() {
        let mut list = BucketList::new("Travel", "See the world");
        list.add_activity(Activity::new("Hike", "Kilimanjaro"));
        assert!(list.remove_activity("Skydive").is_none());
        assert_eq!(list.activities.len(), 1);
    }
}
