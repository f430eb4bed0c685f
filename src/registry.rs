//! In-memory user registry.
//!
//! Holds every signed-up user and their bucket lists for the lifetime of the
//! process. Nothing here is reloaded from the store on startup.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::types::{Activity, BucketList, User};

/// What the login handler needs to check a password and open a session.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Default)]
pub struct Registry {
    users: RwLock<HashMap<String, User>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, User>> {
        self.users.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, User>> {
        self.users.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Inserts a user unless the username is already taken.
    pub fn try_insert_user(&self, user: User) -> Result<()> {
        let mut users = self.write();
        if users.contains_key(&user.username) {
            return Err(Error::AlreadyExists);
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.read().contains_key(username)
    }

    #[must_use]
    pub fn credentials(&self, username: &str) -> Option<Credentials> {
        self.read().get(username).map(|user| Credentials {
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        })
    }

    /// Returns the user's bucket lists ordered by name.
    pub fn bucket_lists(&self, username: &str) -> Result<Vec<BucketList>> {
        let users = self.read();
        let user = users
            .get(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;
        Ok(user.bucket_lists.values().cloned().collect())
    }

    pub fn bucket_list(&self, username: &str, name: &str) -> Result<BucketList> {
        let users = self.read();
        let user = users
            .get(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;
        user.bucket_lists
            .get(name)
            .cloned()
            .ok_or_else(|| Error::BucketListNotFound(name.to_string()))
    }

    /// Stores a bucket list under its name, replacing an existing one.
    pub fn put_bucket_list(&self, username: &str, list: BucketList) -> Result<()> {
        let mut users = self.write();
        let user = users
            .get_mut(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;
        user.bucket_lists.insert(list.name.clone(), list);
        Ok(())
    }

    pub fn remove_bucket_list(&self, username: &str, name: &str) -> Result<Option<BucketList>> {
        let mut users = self.write();
        let user = users
            .get_mut(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;
        Ok(user.bucket_lists.remove(name))
    }

    /// Appends an activity and returns the list's activities afterwards.
    pub fn add_activity(
        &self,
        username: &str,
        list_name: &str,
        activity: Activity,
    ) -> Result<Vec<Activity>> {
        self.with_bucket_list(username, list_name, |list| {
            list.add_activity(activity);
            list.activities.clone()
        })
    }

    pub fn remove_activity(
        &self,
        username: &str,
        list_name: &str,
        title: &str,
    ) -> Result<Option<Activity>> {
        self.with_bucket_list(username, list_name, |list| list.remove_activity(title))
    }

    pub fn activities(&self, username: &str, list_name: &str) -> Result<Vec<Activity>> {
        Ok(self.bucket_list(username, list_name)?.activities)
    }

    fn with_bucket_list<T>(
        &self,
        username: &str,
        list_name: &str,
        f: impl FnOnce(&mut BucketList) -> T,
    ) -> Result<T> {
        let mut users = self.write();
        let user = users
            .get_mut(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;
        let list = user
            .bucket_lists
            .get_mut(list_name)
            .ok_or_else(|| Error::BucketListNotFound(list_name.to_string()))?;
        Ok(f(list))
    }
}
