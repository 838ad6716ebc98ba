use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "hozur.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let conn = Connection::open(db_file_path).with_context(|| Message::StorageUnavailable.to_string())?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        Ok(Db { conn })
    }
}
