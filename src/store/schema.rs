pub const SCHEMA: &str = r#"
-- Accounts created at signup
CREATE TABLE IF NOT EXISTS accounts (
    username TEXT PRIMARY KEY NOT NULL,
    password TEXT NOT NULL,          -- argon2id hash with embedded salt
    email TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

-- Bucket list headers; activities are never persisted.
-- Titles are unique across all accounts, unlike the in-memory registry.
CREATE TABLE IF NOT EXISTS bucket_lists (
    title TEXT PRIMARY KEY,
    description TEXT UNIQUE,
    account TEXT REFERENCES accounts(username),
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_bucket_lists_description ON bucket_lists(description);
CREATE INDEX IF NOT EXISTS idx_bucket_lists_account ON bucket_lists(account);
"#;
