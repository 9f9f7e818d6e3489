//! Record Repository Implementation
//!
//! SQLite-backed implementation of `CollectionRepository<Record>`.

use async_trait::async_trait;
use rusqlite::{params, Row};
use serde_json::{Map, Value};

use super::db::SharedConnection;
use super::record_positioning::next_position;
use super::traits::CollectionRepository;
use crate::domain::{CollectionKind, DomainError, DomainResult, Entity, NewRecord, Record};

const RECORD_COLUMNS: &str = "id, name, position, is_active, attributes";

/// SQLite implementation of the record repository
pub struct RecordRepository {
    pub(crate) conn: SharedConnection,
}

impl RecordRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

pub(crate) fn not_initialized() -> DomainError {
    DomainError::Storage("Database not initialized".to_string())
}

/// Map a `RECORD_COLUMNS` row to a record
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    let attributes: String = row.get(4)?;
    let attributes = match serde_json::from_str::<Value>(&attributes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        is_active: row.get::<_, i64>(3)? != 0,
        attributes,
    })
}

#[async_trait]
impl CollectionRepository<Record> for RecordRepository {
    type NewEntity = NewRecord;

    async fn create(&self, collection: CollectionKind, entity: &NewRecord) -> DomainResult<Record> {
        entity.validate()?;
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let position = next_position(conn, collection)?;
        let record = Record {
            id: uuid::Uuid::new_v4().simple().to_string(),
            name: entity.name.trim().to_string(),
            position,
            is_active: entity.is_active,
            attributes: entity.attributes.clone(),
        };

        conn.execute(
            "INSERT INTO records (id, collection, name, position, is_active, attributes, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                record.id,
                collection.as_str(),
                record.name,
                record.position,
                record.is_active as i64,
                serde_json::to_string(&record.attributes)?,
                chrono::Utc::now().timestamp_millis(),
            ],
        )?;

        tracing::debug!(collection = collection.as_str(), id = %record.id(), position, "Record created");
        Ok(record)
    }

    async fn list(&self, collection: CollectionKind) -> DomainResult<Vec<Record>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM records WHERE collection = ? ORDER BY position ASC, id ASC",
            RECORD_COLUMNS
        ))?;
        let records = stmt
            .query_map(params![collection.as_str()], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}
