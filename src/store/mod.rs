mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::{Account, BucketListRecord};

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Account operations
    fn create_account(&self, account: &Account) -> Result<()>;
    fn get_account(&self, username: &str) -> Result<Option<Account>>;
    fn list_accounts(&self) -> Result<Vec<Account>>;

    // Bucket list operations
    fn create_bucket_list(&self, record: &BucketListRecord) -> Result<()>;
    fn get_bucket_list(&self, title: &str) -> Result<Option<BucketListRecord>>;
    fn list_bucket_lists(&self, account: &str) -> Result<Vec<BucketListRecord>>;
}
