use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::{Account, BucketListRecord};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Maps primary key and unique violations to `AlreadyExists`.
fn map_insert_error(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(ref e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Error::AlreadyExists
        }
        e => Error::from(e),
    }
}

fn account_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        username: row.get(0)?,
        password_hash: row.get(1)?,
        email: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

fn bucket_list_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BucketListRecord> {
    Ok(BucketListRecord {
        title: row.get(0)?,
        description: row.get(1)?,
        account: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Account operations

    fn create_account(&self, account: &Account) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO accounts (username, password, email, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    account.username,
                    account.password_hash,
                    account.email,
                    format_datetime(&account.created_at),
                ],
            )
            .map_err(map_insert_error)?;
        Ok(())
    }

    fn get_account(&self, username: &str) -> Result<Option<Account>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT username, password, email, created_at FROM accounts WHERE username = ?1",
            params![username],
            account_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT username, password, email, created_at FROM accounts ORDER BY username",
        )?;

        let rows = stmt.query_map([], account_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Bucket list operations

    fn create_bucket_list(&self, record: &BucketListRecord) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO bucket_lists (title, description, account, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.title,
                    record.description,
                    record.account,
                    format_datetime(&record.created_at),
                ],
            )
            .map_err(map_insert_error)?;
        Ok(())
    }

    fn get_bucket_list(&self, title: &str) -> Result<Option<BucketListRecord>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT title, description, account, created_at FROM bucket_lists WHERE title = ?1",
            params![title],
            bucket_list_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_bucket_lists(&self, account: &str) -> Result<Vec<BucketListRecord>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT title, description, account, created_at
             FROM bucket_lists WHERE account = ?1 ORDER BY title",
        )?;

        let rows = stmt.query_map(params![account], bucket_list_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }
}
