//! Repository Integration Tests
//!
//! RecordRepository against an in-memory SQLite database.

use std::path::PathBuf;

use crate::domain::{CollectionKind, DomainError, NewRecord};
use crate::repository::{init_db, CollectionRepository, PositioningRepository, RecordRepository};

async fn setup_test_db() -> RecordRepository {
    let db_state = init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB");
    RecordRepository::new(db_state.connection())
}

async fn seed(repo: &RecordRepository, kind: CollectionKind, names: &[&str]) -> Vec<String> {
    let mut ids = Vec::new();
    for name in names {
        let record = repo.create(kind, &NewRecord::new(*name)).await.expect("Failed to create");
        ids.push(record.id);
    }
    ids
}

#[tokio::test]
async fn test_create_appends_positions() {
    let repo = setup_test_db().await;
    let first = repo.create(CollectionKind::Units, &NewRecord::new("Kilogram")).await.unwrap();
    let second = repo.create(CollectionKind::Units, &NewRecord::new("Litre")).await.unwrap();

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_collections_are_independent() {
    let repo = setup_test_db().await;
    seed(&repo, CollectionKind::Units, &["Kilogram"]).await;
    let sim = repo.create(CollectionKind::SimTypes, &NewRecord::new("Nano")).await.unwrap();

    assert_eq!(sim.position, 0);
    assert_eq!(repo.list(CollectionKind::Units).await.unwrap().len(), 1);
    assert_eq!(repo.list(CollectionKind::FooterWidgets).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_attributes_persist() {
    let repo = setup_test_db().await;
    let new = NewRecord::new("Kilogram").with_attribute("shortName", "kg").inactive();
    let created = repo.create(CollectionKind::Units, &new).await.unwrap();

    let listed = repo.list(CollectionKind::Units).await.unwrap();
    assert_eq!(listed.len(), 1);
    let found = &listed[0];
    assert_eq!(found.id, created.id);
    assert_eq!(found.attributes.get("shortName").and_then(|v| v.as_str()), Some("kg"));
    assert!(!found.is_active);
    assert!(repo.list(CollectionKind::SimTypes).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_apply_order_rewrites_positions() {
    let repo = setup_test_db().await;
    let ids = seed(&repo, CollectionKind::SimTypes, &["X", "Y", "Z"]).await;

    let reordered = vec![ids[1].clone(), ids[2].clone(), ids[0].clone()];
    repo.apply_order(CollectionKind::SimTypes, &reordered).await.unwrap();

    let listed: Vec<String> = repo
        .list(CollectionKind::SimTypes)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, reordered);
}

#[tokio::test]
async fn test_apply_order_appends_omitted_records() {
    let repo = setup_test_db().await;
    let ids = seed(&repo, CollectionKind::Units, &["A", "B", "C", "D"]).await;

    // B is hidden from the caller; it keeps its place among the omitted ones
    let partial = vec![ids[3].clone(), ids[0].clone(), ids[2].clone()];
    repo.apply_order(CollectionKind::Units, &partial).await.unwrap();

    let listed = repo.list(CollectionKind::Units).await.unwrap();
    assert_eq!(
        listed.iter().map(|r| r.id.clone()).collect::<Vec<_>>(),
        vec![ids[3].clone(), ids[0].clone(), ids[2].clone(), ids[1].clone()]
    );
    assert_eq!(listed.iter().map(|r| r.position).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_apply_order_rejects_unknown_id_without_changes() {
    let repo = setup_test_db().await;
    let ids = seed(&repo, CollectionKind::Units, &["A", "B", "C"]).await;

    let bogus = vec![ids[2].clone(), "missing".to_string()];
    let err = repo.apply_order(CollectionKind::Units, &bogus).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidOrder(_)));

    let listed: Vec<String> = repo
        .list(CollectionKind::Units)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_last_writer_wins() {
    let repo = setup_test_db().await;
    let ids = seed(&repo, CollectionKind::FooterWidgets, &["A", "B"]).await;

    repo.apply_order(CollectionKind::FooterWidgets, &[ids[1].clone(), ids[0].clone()]).await.unwrap();
    repo.apply_order(CollectionKind::FooterWidgets, &ids).await.unwrap();

    let listed: Vec<String> = repo
        .list(CollectionKind::FooterWidgets)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_uninitialized_connection_errors() {
    let repo = RecordRepository::new(crate::repository::DbState::new().connection());
    assert!(matches!(
        repo.list(CollectionKind::Units).await,
        Err(DomainError::Storage(_))
    ));
}
