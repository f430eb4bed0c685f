use std::net::SocketAddr;
use std::path::PathBuf;

const DB_FILE: &str = "bucketlist.db";
const SESSION_KEY_FILE: &str = ".session_key";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Holds the SQLite database and the session key written by `init`.
    pub data_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    #[must_use]
    pub fn session_key_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_KEY_FILE)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            data_dir: PathBuf::from("./data"),
        }
    }
}
