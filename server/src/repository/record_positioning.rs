//! Record Positioning Operations
//!
//! Position management for records within their collection.

use std::collections::HashSet;

use async_trait::async_trait;
use rusqlite::{params, Connection};

use super::record_repo::{not_initialized, RecordRepository};
use super::traits::PositioningRepository;
use crate::domain::{CollectionKind, DomainError, DomainResult, Record};

pub(crate) fn next_position(conn: &Connection, collection: CollectionKind) -> DomainResult<i64> {
    let position = conn.query_row(
        "SELECT COALESCE(MAX(position), -1) + 1 FROM records WHERE collection = ?",
        params![collection.as_str()],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(position)
}

fn stored_ids(conn: &Connection, collection: CollectionKind) -> DomainResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT id FROM records WHERE collection = ? ORDER BY position, id")?;
    let ids = stmt
        .query_map(params![collection.as_str()], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(ids)
}

/// Final order for a write: the submitted ids first, then every stored id
/// the caller left out, in its current relative order. Callers may hide
/// records (soft-deleted ones, for example), so omissions are allowed;
/// unknown or repeated ids are not.
fn merge_order(stored: &[String], submitted: &[String]) -> DomainResult<Vec<String>> {
    let stored_set: HashSet<&str> = stored.iter().map(String::as_str).collect();
    let mut seen = HashSet::with_capacity(submitted.len());
    for id in submitted {
        if !stored_set.contains(id.as_str()) {
            return Err(DomainError::InvalidOrder(format!("unknown id '{}'", id)));
        }
        if !seen.insert(id.as_str()) {
            return Err(DomainError::InvalidOrder(format!("id '{}' appears more than once", id)));
        }
    }

    let mut merged = submitted.to_vec();
    merged.extend(stored.iter().filter(|id| !seen.contains(id.as_str())).cloned());
    Ok(merged)
}

#[async_trait]
impl PositioningRepository<Record> for RecordRepository {
    async fn apply_order(&self, collection: CollectionKind, ordered_ids: &[String]) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;

        // Validate and write under the same lock and transaction
        let tx = conn.transaction()?;
        let stored = stored_ids(&tx, collection)?;
        let order = merge_order(&stored, ordered_ids)?;

        let now = chrono::Utc::now().timestamp_millis();
        {
            let mut stmt = tx.prepare(
                "UPDATE records SET position = ?, updated_at = ? WHERE collection = ? AND id = ?",
            )?;
            for (position, id) in order.iter().enumerate() {
                stmt.execute(params![position as i64, now, collection.as_str(), id])?;
            }
        }
        tx.commit()?;

        tracing::info!(
            collection = collection.as_str(),
            submitted = ordered_ids.len(),
            total = order.len(),
            "Order replaced"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_order_kept_as_is() {
        let merged = merge_order(&ids(&["a", "b", "c"]), &ids(&["c", "a", "b"])).unwrap();
        assert_eq!(merged, ids(&["c", "a", "b"]));
        assert!(merge_order(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_omitted_ids_follow_in_stored_order() {
        let merged = merge_order(&ids(&["a", "b", "c", "d"]), &ids(&["d", "b"])).unwrap();
        assert_eq!(merged, ids(&["d", "b", "a", "c"]));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = merge_order(&ids(&["a", "b"]), &ids(&["a", "a"])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOrder(_)));
    }

    #[test]
    fn test_unknown_rejected() {
        assert!(merge_order(&ids(&["a", "b"]), &ids(&["a", "z"])).is_err());
    }
}
